use serenity::client::Context;
use serenity::model::guild::Member;
use serenity::model::id::{ChannelId, GuildId, UserId};
use serenity::prelude::Mutex as SerenityMutex;
use songbird::tracks::PlayMode;
use songbird::{Call, Songbird};
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, warn};

use super::authorization::{Requester, VoiceSnapshot};
use super::player::PlayerConnectionState;
use crate::utils::config::BotConfig;

/// Errors that can occur during music operations
#[derive(Error, Debug)]
pub enum MusicError {
    #[error("Not in a guild")]
    NotInGuild,

    #[error("Not connected to a voice channel")]
    NotConnected,

    #[error("Failed to get voice manager")]
    NoVoiceManager,

    #[error("User is not in a voice channel")]
    UserNotInVoiceChannel,

    #[error("Failed to leave voice channel: {0}")]
    LeaveError(String),
}

/// Result type for music operations
pub type MusicResult<T> = Result<T, MusicError>;

/// Bridges queue commands to Songbird and the Serenity cache
pub struct MusicManager;

impl MusicManager {
    /// Get the Songbird voice client from the context
    pub async fn get_songbird(ctx: &Context) -> MusicResult<Arc<Songbird>> {
        songbird::get(ctx).await.ok_or(MusicError::NoVoiceManager)
    }

    /// Get the current voice channel call handle
    pub async fn get_call(
        ctx: &Context,
        guild_id: GuildId,
    ) -> MusicResult<Arc<SerenityMutex<Call>>> {
        let songbird = Self::get_songbird(ctx).await?;
        songbird.get(guild_id).ok_or(MusicError::NotConnected)
    }

    /// Leave a voice channel
    pub async fn leave_channel(ctx: &Context, guild_id: GuildId) -> MusicResult<()> {
        let songbird = Self::get_songbird(ctx).await?;

        // Check if we're in a voice channel
        if songbird.get(guild_id).is_none() {
            return Err(MusicError::NotConnected);
        }

        songbird
            .remove(guild_id)
            .await
            .map_err(|e| MusicError::LeaveError(e.to_string()))?;

        Ok(())
    }

    /// Leave the voice channel, logging instead of failing
    pub async fn teardown(ctx: &Context, guild_id: GuildId) {
        if let Err(e) = Self::leave_channel(ctx, guild_id).await {
            warn!("Failed to leave voice channel for guild {}: {}", guild_id, e);
        }
    }

    /// What the voice driver says about this guild's player right now
    pub async fn player_state(ctx: &Context, guild_id: GuildId) -> PlayerConnectionState {
        let Ok(call) = Self::get_call(ctx, guild_id).await else {
            return PlayerConnectionState::Disconnected;
        };

        let current = {
            let call = call.lock().await;
            if call.current_channel().is_none() {
                return PlayerConnectionState::Disconnected;
            }
            call.queue().current()
        };

        let Some(track) = current else {
            return PlayerConnectionState::Connecting;
        };

        match track.get_info().await {
            Ok(info) if matches!(info.playing, PlayMode::Play | PlayMode::Pause) => {
                PlayerConnectionState::Playing
            }
            Ok(_) => PlayerConnectionState::Connecting,
            Err(e) => {
                debug!("Could not read track state for guild {}: {}", guild_id, e);
                PlayerConnectionState::Connecting
            }
        }
    }

    /// The voice channel the bot is connected to in this guild, if any
    pub async fn bot_voice_channel(ctx: &Context, guild_id: GuildId) -> Option<ChannelId> {
        let call = Self::get_call(ctx, guild_id).await.ok()?;
        let channel = call.lock().await.current_channel()?;
        Some(ChannelId::new(channel.0.get()))
    }

    /// Get the voice channel ID that the user is currently in
    pub fn get_user_voice_channel(
        ctx: &Context,
        guild_id: GuildId,
        user_id: UserId,
    ) -> MusicResult<ChannelId> {
        let guild = ctx.cache.guild(guild_id).ok_or(MusicError::NotInGuild)?;

        let voice_state = guild
            .voice_states
            .get(&user_id)
            .ok_or(MusicError::UserNotInVoiceChannel)?;

        voice_state
            .channel_id
            .ok_or(MusicError::UserNotInVoiceChannel)
    }

    /// Snapshot of the non-bot members of the voice channel the bot is connected to, or of
    /// the user's channel while the bot is not in voice. Empty when neither is in voice.
    pub fn voice_snapshot(
        ctx: &Context,
        guild_id: GuildId,
        user_id: UserId,
    ) -> MusicResult<VoiceSnapshot> {
        let bot_id = ctx.cache.current_user().id;
        let guild = ctx.cache.guild(guild_id).ok_or(MusicError::NotInGuild)?;

        let channel_of = |id: UserId| guild.voice_states.get(&id).and_then(|s| s.channel_id);
        let Some(channel_id) = snapshot_channel(channel_of(bot_id), channel_of(user_id)) else {
            return Ok(VoiceSnapshot::default());
        };

        let members = guild
            .voice_states
            .values()
            .filter(|state| state.channel_id == Some(channel_id))
            .filter(|state| {
                // Voice states from GUILD_CREATE usually arrive without a member
                let member = state
                    .member
                    .as_ref()
                    .or_else(|| guild.members.get(&state.user_id));
                is_human_listener(state.user_id, bot_id, member, |id| {
                    ctx.cache.user(id).is_some_and(|user| user.bot)
                })
            })
            .map(|state| state.user_id);

        Ok(VoiceSnapshot::new(members))
    }

    /// Resolve the DJ and privileged roles of the member issuing a command
    pub fn requester(
        ctx: &Context,
        guild_id: GuildId,
        user_id: UserId,
        member: Option<&Member>,
        config: &BotConfig,
    ) -> MusicResult<Requester> {
        let guild = ctx.cache.guild(guild_id).ok_or(MusicError::NotInGuild)?;

        let roles: Vec<_> = member
            .map(|m| m.roles.iter().filter_map(|id| guild.roles.get(id)).collect())
            .unwrap_or_default();

        let is_dj = roles
            .iter()
            .any(|role| role.name.eq_ignore_ascii_case(&config.dj_role_name));
        let is_admin = guild.owner_id == user_id
            || roles.iter().any(|role| role.permissions.administrator());

        Ok(Requester {
            user_id,
            is_dj,
            is_privileged: is_admin || config.is_privileged(user_id),
        })
    }
}

/// The channel whose listeners decide queue permissions: the bot's, else the requester's
fn snapshot_channel(
    bot_channel: Option<ChannelId>,
    requester_channel: Option<ChannelId>,
) -> Option<ChannelId> {
    bot_channel.or(requester_channel)
}

/// Whether a voice-state entry counts as a listener. `is_bot` is consulted when the entry
/// carries no member.
fn is_human_listener(
    user_id: UserId,
    bot_id: UserId,
    member: Option<&Member>,
    is_bot: impl FnOnce(UserId) -> bool,
) -> bool {
    if user_id == bot_id {
        return false;
    }
    match member {
        Some(member) => !member.user.bot,
        None => !is_bot(user_id),
    }
}
