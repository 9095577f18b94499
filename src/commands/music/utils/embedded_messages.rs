use poise::CreateReply;
use poise::serenity_prelude::CreateEmbed;

use super::index_set::{IndexSet, join_indices};
use super::queue_store::QueueStore;
use super::removal::{ClearAllResult, RemovalRejection, RemovalResult};

/// Index lists longer than this are summarized instead of spelled out
const MAX_INDEX_LIST_CHARS: usize = 100;
/// Queue entries shown by the queue view
const QUEUE_PAGE_SIZE: usize = 20;

const SUCCESS_COLOR: u32 = 0x00ff00;
const WARNING_COLOR: u32 = 0xffa500;
const ERROR_COLOR: u32 = 0xff0000;

fn reply(title: &str, description: impl Into<String>, color: u32) -> CreateReply {
    CreateReply::default().embed(
        CreateEmbed::new()
            .title(title)
            .description(description)
            .color(color),
    )
}

/// `Some("1,3,5")`, or `None` when the list is too long to show
fn index_list(indices: &IndexSet) -> Option<String> {
    let joined = join_indices(indices);
    (joined.len() <= MAX_INDEX_LIST_CHARS).then_some(joined)
}

/// Body of the reply to a successful `remove`
pub fn removal_summary_text(result: &RemovalResult) -> String {
    let mut text = match index_list(&result.deleted) {
        Some(list) => format!("Removed track(s) at position {list}"),
        None => "Removed the specified tracks".to_string(),
    };

    if result.deleted.len() == 1 {
        if let Some(title) = &result.first_title {
            text.push_str(&format!(" (`{title}`)"));
        }
    }

    if !result.failed.is_empty() {
        let failed = match index_list(&result.failed) {
            Some(list) => format!("Track(s) at position {list}"),
            None => "Some tracks".to_string(),
        };
        text.push_str(&format!(
            "\n⚠️ {failed} could not be removed because you lack permission."
        ));
    }

    text
}

pub fn removal_summary(result: &RemovalResult) -> CreateReply {
    let color = if result.failed.is_empty() {
        SUCCESS_COLOR
    } else {
        WARNING_COLOR
    };
    reply("🚮 Removed", removal_summary_text(result), color)
}

pub fn nothing_removed() -> CreateReply {
    reply(
        "❌ Nothing Removed",
        "No tracks could be removed. You may not have permission to remove them.",
        ERROR_COLOR,
    )
}

pub fn removal_rejected(rejection: RemovalRejection) -> CreateReply {
    let description = match rejection {
        RemovalRejection::EmptyInput => {
            "Give the queue position(s) to remove, e.g. `3`, `1 4 8` or `2-5`.".to_string()
        }
        RemovalRejection::PlaybackConflict => format!("{rejection}. Skip it instead."),
    };
    reply("❌ Error", description, ERROR_COLOR)
}

pub fn queue_cleared(result: &ClearAllResult) -> CreateReply {
    let mut description = format!("Removed all {} track(s) from the queue.", result.removed);
    if result.was_connected {
        description.push_str(" Left the voice channel.");
    }
    reply("✅ Queue Cleared", description, SUCCESS_COLOR)
}

pub fn not_playing() -> CreateReply {
    reply("❌ Error", "Not connected to a voice channel.", ERROR_COLOR)
}

pub fn disconnected() -> CreateReply {
    reply("📮 Disconnected", "Left the voice channel.", SUCCESS_COLOR)
}

pub fn permission_denied(reason: &str) -> CreateReply {
    reply("⛔ Not Allowed", reason, ERROR_COLOR).ephemeral(true)
}

/// Text of the queue view: one line per track with its removable position
pub fn queue_listing_text(queue: &QueueStore, playing: bool) -> String {
    if queue.is_empty() {
        return "**📭 Queue is empty**".to_string();
    }

    let mut description = format!("**📋 Queue - {} tracks**\n", queue.len());
    for (index, item) in queue.iter().enumerate().take(QUEUE_PAGE_SIZE) {
        let marker = if index == 0 && playing { " 🎵" } else { "" };
        match &item.url {
            Some(url) => description.push_str(&format!("`{index}` [{}]({url})", item.title)),
            None => description.push_str(&format!("`{index}` {}", item.title)),
        }
        description.push_str(&format!(" - <@{}>{marker}\n", item.added_by));
    }

    if queue.len() > QUEUE_PAGE_SIZE {
        description.push_str(&format!("…and {} more", queue.len() - QUEUE_PAGE_SIZE));
    }

    description
}

pub fn music_queue(queue: &QueueStore, playing: bool) -> CreateReply {
    reply("🎵 Music Queue", queue_listing_text(queue, playing), SUCCESS_COLOR)
}
