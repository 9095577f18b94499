pub mod checks;
pub mod disconnect;
pub mod queue;
pub mod remove;
pub mod remove_all;
pub mod utils;

use crate::{CommandResult, Context, Error};
use poise::CreateReply;
use serenity::model::id::GuildId;
use tracing::error;

use utils::authorization::{Requester, VoiceSnapshot};
use utils::music_manager::{MusicError, MusicManager};

fn require_guild(ctx: Context<'_>) -> Result<GuildId, Error> {
    ctx.guild_id().ok_or_else(|| Box::new(MusicError::NotInGuild) as Error)
}

/// Resolve the author's roles and their voice channel's listeners
async fn requester_and_voice(
    ctx: Context<'_>,
    guild_id: GuildId,
) -> Result<(Requester, VoiceSnapshot), Error> {
    let user_id = ctx.author().id;
    let member = ctx.author_member().await;
    let requester = MusicManager::requester(
        ctx.serenity_context(),
        guild_id,
        user_id,
        member.as_deref(),
        &ctx.data().config,
    )?;
    let voice = MusicManager::voice_snapshot(ctx.serenity_context(), guild_id, user_id)?;

    Ok((requester, voice))
}

/// Send a reply, logging delivery failures instead of failing the command
async fn send_or_log(ctx: Context<'_>, reply: CreateReply) {
    if let Err(e) = ctx.send(reply).await {
        error!("Failed to send reply in channel {}: {}", ctx.channel_id(), e);
    }
}
