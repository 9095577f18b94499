use super::*;
use super::checks::can_clear_queue;
use super::utils::{embedded_messages, queue_manager::guild_context, removal::RemovalCoordinator};

/// Remove every track from the queue and leave the voice channel
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    category = "Music",
    check = "can_clear_queue",
    aliases("removeall", "rmall", "allrm", "allremove", "clear")
)]
pub async fn remove_all(ctx: Context<'_>) -> CommandResult {
    let guild_id = require_guild(ctx)?;
    let state = MusicManager::player_state(ctx.serenity_context(), guild_id).await;

    let (result, teardown) = {
        let context = guild_context(guild_id);
        let mut context = context.lock().await;
        context.update_bound_channel(ctx.channel_id());
        context.player.sync(state);

        let context = &mut *context;
        let result = RemovalCoordinator::new(&mut context.queue, &mut context.player).clear_all();
        (result, context.player.take_pending_teardown())
    };

    if teardown {
        MusicManager::teardown(ctx.serenity_context(), guild_id).await;
    }

    send_or_log(ctx, embedded_messages::queue_cleared(&result)).await;

    Ok(())
}
