//! Decides whether a requester may remove a given queued track.
//!
//! The decision is a pure function of the requester's roles, the track and a snapshot of the
//! requester's voice channel, so it can be exercised without a live guild.

use serenity::model::id::UserId;
use std::collections::HashSet;

use super::queue_store::QueueItem;

/// The member issuing a queue command, with their guild-level roles already resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Requester {
    pub user_id: UserId,
    pub is_dj: bool,
    /// Guild owner, administrator or a configured privileged user
    pub is_privileged: bool,
}

impl Requester {
    /// A requester without any elevated roles
    pub fn member(user_id: UserId) -> Self {
        Self {
            user_id,
            is_dj: false,
            is_privileged: false,
        }
    }
}

/// The non-bot members of the requester's voice channel at command time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VoiceSnapshot {
    members: HashSet<UserId>,
}

impl VoiceSnapshot {
    pub fn new(members: impl IntoIterator<Item = UserId>) -> Self {
        Self {
            members: members.into_iter().collect(),
        }
    }

    pub fn contains(&self, user_id: UserId) -> bool {
        self.members.contains(&user_id)
    }

    /// True when `user_id` is the only listener in the channel
    pub fn is_only_listener(&self, user_id: UserId) -> bool {
        self.members.len() == 1 && self.contains(user_id)
    }
}

/// Why a removal was allowed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Grant {
    DjRole,
    OwnTrack,
    AdderLeftChannel,
    SoleListener,
    Privileged,
}

/// Checks the removal rules in order and returns the first one that lets `requester` remove
/// `item`, or `None` if the track is protected.
pub fn authorize(requester: &Requester, item: &QueueItem, voice: &VoiceSnapshot) -> Option<Grant> {
    if requester.is_dj {
        Some(Grant::DjRole)
    } else if item.added_by == requester.user_id {
        Some(Grant::OwnTrack)
    } else if !voice.contains(item.added_by) {
        Some(Grant::AdderLeftChannel)
    } else if voice.is_only_listener(requester.user_id) {
        Some(Grant::SoleListener)
    } else if requester.is_privileged {
        Some(Grant::Privileged)
    } else {
        None
    }
}

/// The authorization outcome for one queue position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AuthorizationDecision {
    pub index: usize,
    pub grant: Option<Grant>,
}

impl AuthorizationDecision {
    pub fn evaluate(
        index: usize,
        requester: &Requester,
        item: &QueueItem,
        voice: &VoiceSnapshot,
    ) -> Self {
        Self {
            index,
            grant: authorize(requester, item, voice),
        }
    }

    pub fn is_allowed(&self) -> bool {
        self.grant.is_some()
    }
}
