use dashmap::DashMap;
use serenity::model::id::{ChannelId, GuildId};
use std::sync::{Arc, LazyLock};
use tokio::sync::Mutex;
use tracing::debug;

use super::player::GuildPlayer;
use super::queue_store::QueueStore;

/// Everything a guild's queue commands read and mutate together
#[derive(Debug, Default)]
pub struct GuildContext {
    pub queue: QueueStore,
    pub player: GuildPlayer,
    /// Text channel the last music command came from
    bound_channel: Option<ChannelId>,
}

impl GuildContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the channel a music command came from. Returns whether the binding changed.
    pub fn update_bound_channel(&mut self, channel_id: ChannelId) -> bool {
        if self.bound_channel == Some(channel_id) {
            return false;
        }
        debug!("Binding music replies to channel {}", channel_id);
        self.bound_channel = Some(channel_id);
        true
    }
}

// One lock per guild: commands for the same guild run their queue mutations one at a time
pub static GUILD_CONTEXTS: LazyLock<DashMap<GuildId, Arc<Mutex<GuildContext>>>> =
    LazyLock::new(DashMap::new);

/// Get (or create) the context for a guild
pub fn guild_context(guild_id: GuildId) -> Arc<Mutex<GuildContext>> {
    Arc::clone(GUILD_CONTEXTS.entry(guild_id).or_default().value())
}
