//! Queues and users shared by the removal scenarios

use rstest::fixture;
use rusty_dj::commands::music::utils::queue_store::{QueueItem, QueueStore};
use serenity::model::id::UserId;

pub const USER_1: UserId = UserId::new(111);
pub const USER_2: UserId = UserId::new(222);
pub const USER_3: UserId = UserId::new(333);

/// `[A(user1), B(user2), C(user1)]`
#[fixture]
pub fn abc_queue() -> QueueStore {
    [
        QueueItem::new("A", USER_1),
        QueueItem::new("B", USER_2),
        QueueItem::new("C", USER_1),
    ]
    .into_iter()
    .collect()
}

/// `count` tracks, alternating between user 1 and user 2
pub fn mixed_queue(count: usize) -> QueueStore {
    (0..count)
        .map(|i| {
            let owner = if i % 2 == 0 { USER_1 } else { USER_2 };
            QueueItem::new(format!("track {i}"), owner)
        })
        .collect()
}

pub fn titles(queue: &QueueStore) -> Vec<String> {
    queue.iter().map(|item| item.title.clone()).collect()
}
