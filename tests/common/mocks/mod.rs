//! Mock implementations for external dependencies

use mockall::mock;
use rusty_dj::commands::music::utils::player::{PlayerConnection, PlayerConnectionState};

// Stand-in for a guild's voice connection
mock! {
    pub Player {}

    impl PlayerConnection for Player {
        fn state(&self) -> PlayerConnectionState;
        fn disconnect(&mut self);
    }
}

/// A player that reports `state` and refuses to be disconnected
pub fn player_in(state: PlayerConnectionState) -> MockPlayer {
    let mut player = MockPlayer::new();
    player.expect_state().return_const(state);
    player.expect_disconnect().never();
    player
}
