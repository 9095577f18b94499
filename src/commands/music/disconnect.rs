use super::*;
use super::checks::can_disconnect;
use super::utils::{
    embedded_messages,
    player::PlayerConnection,
    queue_manager::guild_context,
};

/// Leave the voice channel, keeping the queue
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    category = "Music",
    check = "can_disconnect",
    aliases("dc", "leave", "quit")
)]
pub async fn disconnect(ctx: Context<'_>) -> CommandResult {
    let guild_id = require_guild(ctx)?;
    let state = MusicManager::player_state(ctx.serenity_context(), guild_id).await;

    let teardown = {
        let context = guild_context(guild_id);
        let mut context = context.lock().await;
        context.update_bound_channel(ctx.channel_id());
        context.player.sync(state);

        if !context.player.is_connecting() {
            None
        } else {
            context.player.disconnect();
            Some(context.player.take_pending_teardown())
        }
    };

    match teardown {
        None => send_or_log(ctx, embedded_messages::not_playing()).await,
        Some(teardown) => {
            if teardown {
                MusicManager::teardown(ctx.serenity_context(), guild_id).await;
            }
            send_or_log(ctx, embedded_messages::disconnected()).await;
        }
    }

    Ok(())
}
