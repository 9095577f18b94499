//! Voice connection state of a guild's player, as seen by queue commands.

use tracing::{debug, info};

/// Where a guild's player currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerConnectionState {
    #[default]
    Disconnected,
    /// Joined to a voice channel, nothing streaming
    Connecting,
    /// The track at queue position 0 is streaming
    Playing,
}

/// Read/teardown access to a guild's voice connection
pub trait PlayerConnection {
    fn state(&self) -> PlayerConnectionState;

    /// Tear down the voice connection. Calling this while disconnected does nothing.
    fn disconnect(&mut self);

    fn is_playing(&self) -> bool {
        self.state() == PlayerConnectionState::Playing
    }

    /// True while a voice connection exists, idle or active
    fn is_connecting(&self) -> bool {
        self.state() != PlayerConnectionState::Disconnected
    }
}

/// The per-guild player state machine.
///
/// Songbird owns the actual voice connection; `GuildPlayer` tracks its state and records a
/// pending teardown when [`PlayerConnection::disconnect`] drops a live connection, which the
/// command layer drains with [`GuildPlayer::take_pending_teardown`] once it has released the
/// guild lock.
#[derive(Debug, Default)]
pub struct GuildPlayer {
    state: PlayerConnectionState,
    pending_teardown: bool,
}

impl GuildPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite the tracked state with what the voice driver reports
    pub fn sync(&mut self, state: PlayerConnectionState) {
        if self.state != state {
            debug!("Player state {:?} -> {:?}", self.state, state);
        }
        self.state = state;
    }

    pub fn take_pending_teardown(&mut self) -> bool {
        std::mem::take(&mut self.pending_teardown)
    }
}

impl PlayerConnection for GuildPlayer {
    fn state(&self) -> PlayerConnectionState {
        self.state
    }

    fn disconnect(&mut self) {
        if self.state == PlayerConnectionState::Disconnected {
            debug!("Disconnect requested while already disconnected");
            return;
        }
        info!("Disconnecting player (was {:?})", self.state);
        self.state = PlayerConnectionState::Disconnected;
        self.pending_teardown = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_disconnected() {
        let player = GuildPlayer::new();
        assert_eq!(player.state(), PlayerConnectionState::Disconnected);
        assert!(!player.is_connecting());
        assert!(!player.is_playing());
    }

    #[test]
    fn playing_counts_as_connecting() {
        let mut player = GuildPlayer::new();
        player.sync(PlayerConnectionState::Connecting);
        assert!(player.is_connecting());
        assert!(!player.is_playing());

        player.sync(PlayerConnectionState::Playing);
        assert!(player.is_connecting());
        assert!(player.is_playing());
    }

    #[test]
    fn disconnect_is_idempotent() {
        let mut player = GuildPlayer::new();
        player.sync(PlayerConnectionState::Playing);

        player.disconnect();
        assert_eq!(player.state(), PlayerConnectionState::Disconnected);
        assert!(player.take_pending_teardown());

        player.disconnect();
        assert!(!player.take_pending_teardown());
    }

    #[test]
    fn sync_after_disconnect_reconnects_without_teardown() {
        let mut player = GuildPlayer::new();
        player.sync(PlayerConnectionState::Playing);
        player.disconnect();
        player.sync(PlayerConnectionState::Connecting);
        assert!(player.is_connecting());
        assert!(player.take_pending_teardown());
        assert!(!player.take_pending_teardown());
    }
}
