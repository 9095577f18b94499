use super::*;
use super::utils::{embedded_messages, player::PlayerConnection, queue_manager::guild_context};

/// View the music queue with each track's position
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    category = "Music",
    aliases("q", "list")
)]
pub async fn queue(ctx: Context<'_>) -> CommandResult {
    let guild_id = require_guild(ctx)?;
    let state = MusicManager::player_state(ctx.serenity_context(), guild_id).await;

    let reply = {
        let context = guild_context(guild_id);
        let mut context = context.lock().await;
        context.update_bound_channel(ctx.channel_id());
        context.player.sync(state);
        embedded_messages::music_queue(&context.queue, context.player.is_playing())
    };

    send_or_log(ctx, reply).await;

    Ok(())
}
