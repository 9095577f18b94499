//! Bulk removal and clear-all over one guild's queue and player.

use thiserror::Error;
use tracing::{debug, info};

use super::authorization::{AuthorizationDecision, Requester, VoiceSnapshot};
use super::index_set::{IndexSet, removal_order};
use super::player::PlayerConnection;
use super::queue_store::QueueStore;
use super::range_parser::expand_ranges;

/// Reasons a bulk removal is refused before anything is touched
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemovalRejection {
    #[error("No queue positions were given")]
    EmptyInput,

    #[error("The track that is currently playing can't be removed")]
    PlaybackConflict,
}

/// Outcome of a bulk removal that passed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RemovalResult {
    /// Original positions of the removed tracks
    pub deleted: IndexSet,
    /// Positions the requester was not allowed to remove
    pub failed: IndexSet,
    /// Title of the removed track with the lowest original position
    pub first_title: Option<String>,
}

impl RemovalResult {
    /// Nothing was removed
    pub fn is_empty(&self) -> bool {
        self.deleted.is_empty()
    }
}

/// Outcome of clearing a guild's queue
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClearAllResult {
    pub removed: usize,
    pub was_connected: bool,
}

/// Runs queue removals for one guild. Holds the queue and player mutably for the duration of
/// a single command, so nothing else can touch them between authorization and mutation.
pub struct RemovalCoordinator<'a, P: PlayerConnection + ?Sized> {
    queue: &'a mut QueueStore,
    player: &'a mut P,
}

impl<'a, P: PlayerConnection + ?Sized> RemovalCoordinator<'a, P> {
    pub fn new(queue: &'a mut QueueStore, player: &'a mut P) -> Self {
        Self { queue, player }
    }

    /// Removes every position named by `tokens` that `requester` is allowed to remove.
    ///
    /// Tokens are literal positions (`4`) or ranges (`2-5`, `3-`, `-4`). Positions that no
    /// longer exist are skipped; positions the requester may not touch end up in
    /// [`RemovalResult::failed`]. The now-playing track is never removed while playing.
    pub fn bulk_remove<S: AsRef<str>>(
        &mut self,
        tokens: &[S],
        requester: &Requester,
        voice: &VoiceSnapshot,
    ) -> Result<RemovalResult, RemovalRejection> {
        if tokens.is_empty() {
            return Err(RemovalRejection::EmptyInput);
        }

        let playing = self.player.is_playing();
        if playing && tokens.iter().any(|token| token.as_ref() == "0") {
            return Err(RemovalRejection::PlaybackConflict);
        }

        let len = self.queue.len();
        let expanded = expand_ranges(tokens, len, playing)
            .into_iter()
            .flat_map(|range| *range.start()..range.end().saturating_add(1).min(len));
        let mut plan = removal_order(tokens, expanded);
        if playing {
            plan.retain(|&index| index != 0);
        }
        debug!("Removal plan for {}: {:?}", requester.user_id, plan);

        let mut result = RemovalResult::default();
        for index in plan {
            let decision = match self.queue.get(index) {
                Ok(item) => AuthorizationDecision::evaluate(index, requester, item, voice),
                Err(err) => {
                    debug!("Skipping position {}: {}", index, err);
                    continue;
                }
            };

            if !decision.is_allowed() {
                result.failed.insert(index);
                continue;
            }

            match self.queue.remove_at(index) {
                Ok(item) => {
                    debug!("Removed '{}' at {} ({:?})", item.title, index, decision.grant);
                    result.deleted.insert(index);
                    // Descending traversal, so the last removal has the lowest position
                    result.first_title = Some(item.title);
                }
                Err(err) => debug!("Skipping position {}: {}", index, err),
            }
        }

        info!(
            "Removed {} track(s), denied {} for {}",
            result.deleted.len(),
            result.failed.len(),
            requester.user_id
        );

        Ok(result)
    }

    /// Disconnects the player, then empties the queue.
    pub fn clear_all(&mut self) -> ClearAllResult {
        let was_connected = self.player.is_connecting();
        self.player.disconnect();
        let removed = self.queue.remove_all();
        info!("Cleared {} track(s) from the queue", removed);

        ClearAllResult {
            removed,
            was_connected,
        }
    }
}
