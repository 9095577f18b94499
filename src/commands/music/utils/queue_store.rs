use serenity::model::id::UserId;
use std::collections::VecDeque;
use thiserror::Error;

/// Errors raised by indexed queue access
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QueueError {
    #[error("Queue position {index} is out of range (queue has {len} tracks)")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result type for queue operations
pub type QueueResult<T> = Result<T, QueueError>;

/// A track waiting in (or at the head of) a guild's queue
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueItem {
    pub title: String,
    /// The user who enqueued the track
    pub added_by: UserId,
    pub url: Option<String>,
}

impl QueueItem {
    pub fn new(title: impl Into<String>, added_by: UserId) -> Self {
        Self {
            title: title.into(),
            added_by,
            url: None,
        }
    }
}

/// The ordered tracks of one guild. Position 0 is the now-playing track while playback is
/// active; positions stay contiguous after every mutation.
#[derive(Debug, Default, Clone)]
pub struct QueueStore {
    items: VecDeque<QueueItem>,
}

impl QueueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Append a track to the end of the queue
    pub fn push(&mut self, item: QueueItem) {
        self.items.push_back(item);
    }

    pub fn iter(&self) -> impl Iterator<Item = &QueueItem> {
        self.items.iter()
    }

    pub fn get(&self, index: usize) -> QueueResult<&QueueItem> {
        self.items.get(index).ok_or(QueueError::IndexOutOfRange {
            index,
            len: self.items.len(),
        })
    }

    /// Remove the track at `index`, shifting every later track down by one
    pub fn remove_at(&mut self, index: usize) -> QueueResult<QueueItem> {
        let len = self.items.len();
        self.items
            .remove(index)
            .ok_or(QueueError::IndexOutOfRange { index, len })
    }

    /// Empty the queue, returning how many tracks were dropped. Callers gate access.
    pub fn remove_all(&mut self) -> usize {
        let removed = self.items.len();
        self.items.clear();
        removed
    }
}

impl FromIterator<QueueItem> for QueueStore {
    fn from_iter<T: IntoIterator<Item = QueueItem>>(iter: T) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}
