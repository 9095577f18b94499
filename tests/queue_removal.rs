//! Removal scenarios driven through the public queue API

mod common;

use assert_matches::assert_matches;
use pretty_assertions::assert_eq;
use rstest::rstest;
use rusty_dj::commands::music::utils::{
    authorization::{Requester, VoiceSnapshot},
    index_set::IndexSet,
    player::{GuildPlayer, PlayerConnection, PlayerConnectionState},
    queue_store::QueueStore,
    removal::{RemovalCoordinator, RemovalRejection},
};
use test_case::test_case;

use common::fixtures::*;
use common::mocks::{MockPlayer, player_in};

#[rstest]
fn now_playing_request_rejects_whole_batch(mut abc_queue: QueueStore) {
    common::init();
    let mut player = player_in(PlayerConnectionState::Playing);

    let result = RemovalCoordinator::new(&mut abc_queue, &mut player).bulk_remove(
        &["0", "2"],
        &Requester::member(USER_1),
        &VoiceSnapshot::new([USER_1]),
    );

    assert_matches!(result, Err(RemovalRejection::PlaybackConflict));
    assert_eq!(titles(&abc_queue), vec!["A", "B", "C"]);
}

#[rstest]
fn adder_removes_own_track(mut abc_queue: QueueStore) {
    let mut player = player_in(PlayerConnectionState::Connecting);

    let result = RemovalCoordinator::new(&mut abc_queue, &mut player)
        .bulk_remove(&["2"], &Requester::member(USER_1), &VoiceSnapshot::new([USER_1]))
        .unwrap();

    assert_eq!(titles(&abc_queue), vec!["A", "B"]);
    assert_eq!(result.deleted, IndexSet::from([2]));
    assert!(result.failed.is_empty());
    assert_eq!(result.first_title.as_deref(), Some("C"));
}

#[rstest]
fn range_mixes_allowed_and_denied(mut abc_queue: QueueStore) {
    let mut player = player_in(PlayerConnectionState::Disconnected);

    let result = RemovalCoordinator::new(&mut abc_queue, &mut player)
        .bulk_remove(
            &["0-1"],
            &Requester::member(USER_2),
            &VoiceSnapshot::new([USER_1, USER_2]),
        )
        .unwrap();

    assert_eq!(result.deleted, IndexSet::from([1]));
    assert_eq!(result.failed, IndexSet::from([0]));
    assert_eq!(titles(&abc_queue), vec!["A", "C"]);
}

#[test_case(&["0-3"] ; "closed range from zero")]
#[test_case(&["0-"] ; "open range from zero")]
#[test_case(&["-3"] ; "open start")]
#[test_case(&["00", "1"] ; "padded zero literal")]
fn now_playing_survives_any_range(tokens: &[&str]) {
    let mut queue = mixed_queue(5);
    let mut player = player_in(PlayerConnectionState::Playing);
    let dj = Requester {
        is_dj: true,
        ..Requester::member(USER_3)
    };

    let result = RemovalCoordinator::new(&mut queue, &mut player)
        .bulk_remove(tokens, &dj, &VoiceSnapshot::new([USER_1, USER_2, USER_3]))
        .unwrap();

    assert!(!result.deleted.contains(&0));
    assert_eq!(queue.get(0).unwrap().title, "track 0");
}

#[test]
fn removal_order_does_not_change_the_outcome() {
    let dj = Requester {
        is_dj: true,
        ..Requester::member(USER_3)
    };
    let voice = VoiceSnapshot::default();

    let mut ascending = mixed_queue(8);
    let mut player = GuildPlayer::new();
    RemovalCoordinator::new(&mut ascending, &mut player)
        .bulk_remove(&["1", "3", "5"], &dj, &voice)
        .unwrap();

    let mut descending = mixed_queue(8);
    RemovalCoordinator::new(&mut descending, &mut player)
        .bulk_remove(&["5", "3", "1"], &dj, &voice)
        .unwrap();

    let expected = vec!["track 0", "track 2", "track 4", "track 6", "track 7"];
    assert_eq!(titles(&ascending), expected);
    assert_eq!(titles(&descending), expected);
}

#[test]
fn adder_in_channel_protects_track_from_others() {
    let mut queue = mixed_queue(4);
    let mut player = player_in(PlayerConnectionState::Connecting);

    let result = RemovalCoordinator::new(&mut queue, &mut player)
        .bulk_remove(
            &["1-3"],
            &Requester::member(USER_3),
            &VoiceSnapshot::new([USER_2, USER_3]),
        )
        .unwrap();

    // user 1 left the channel, so their tracks (2) are removable; user 2's (1, 3) are not
    assert_eq!(result.deleted, IndexSet::from([2]));
    assert_eq!(result.failed, IndexSet::from([1, 3]));
}

#[test_case(PlayerConnectionState::Playing ; "while playing")]
#[test_case(PlayerConnectionState::Connecting ; "while idle")]
#[test_case(PlayerConnectionState::Disconnected ; "while disconnected")]
fn clear_all_disconnects_exactly_once(state: PlayerConnectionState) {
    let mut queue = mixed_queue(3);
    let mut player = MockPlayer::new();
    player.expect_state().return_const(state);
    player.expect_disconnect().times(1).return_const(());

    let result = RemovalCoordinator::new(&mut queue, &mut player).clear_all();

    assert!(queue.is_empty());
    assert_eq!(result.removed, 3);
    assert_eq!(result.was_connected, state != PlayerConnectionState::Disconnected);
}

#[test]
fn guild_player_clear_all_requests_teardown() {
    let mut queue = mixed_queue(2);
    let mut player = GuildPlayer::new();
    player.sync(PlayerConnectionState::Playing);

    RemovalCoordinator::new(&mut queue, &mut player).clear_all();

    assert!(!player.is_connecting());
    assert!(player.take_pending_teardown());
    assert!(!player.take_pending_teardown());
}
