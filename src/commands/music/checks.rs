//! Command-level permission checks, run by poise before the command body.

use super::*;
use super::utils::embedded_messages;

/// `remove_all`: privileged members, DJs, or whoever is listening alone
pub async fn can_clear_queue(ctx: Context<'_>) -> Result<bool, Error> {
    let guild_id = require_guild(ctx)?;
    let (requester, voice) = requester_and_voice(ctx, guild_id).await?;

    let allowed = requester.is_privileged
        || requester.is_dj
        || voice.is_only_listener(requester.user_id);

    if !allowed {
        send_or_log(
            ctx,
            embedded_messages::permission_denied(
                "Clearing the queue needs the DJ role, admin rights, or being the only listener.",
            ),
        )
        .await;
    }

    Ok(allowed)
}

/// `disconnect`: privileged members, or members in the bot's voice channel
pub async fn can_disconnect(ctx: Context<'_>) -> Result<bool, Error> {
    let guild_id = require_guild(ctx)?;
    let (requester, _) = requester_and_voice(ctx, guild_id).await?;
    if requester.is_privileged {
        return Ok(true);
    }

    let allowed = match MusicManager::bot_voice_channel(ctx.serenity_context(), guild_id).await {
        // Nothing to disconnect from; the command itself reports that
        None => true,
        Some(bot_channel) => {
            let serenity_ctx = ctx.serenity_context();
            MusicManager::get_user_voice_channel(serenity_ctx, guild_id, requester.user_id)
                .is_ok_and(|channel| channel == bot_channel)
        }
    };

    if !allowed {
        send_or_log(
            ctx,
            embedded_messages::permission_denied(
                "Join the bot's voice channel to disconnect it.",
            ),
        )
        .await;
    }

    Ok(allowed)
}
