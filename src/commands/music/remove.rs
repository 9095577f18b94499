use super::*;
use super::utils::{
    embedded_messages,
    queue_manager::guild_context,
    removal::RemovalCoordinator,
};

/// Remove tracks from the queue by position, e.g. `3`, `1 4 8`, `2-5`, `4-` or `-6`
#[poise::command(
    slash_command,
    prefix_command,
    guild_only,
    category = "Music",
    aliases("rm", "del", "delete")
)]
pub async fn remove(
    ctx: Context<'_>,
    #[description = "Queue positions to remove, separated by spaces; ranges like 2-5 work too"]
    #[rest]
    positions: Option<String>,
) -> CommandResult {
    let guild_id = require_guild(ctx)?;
    let tokens: Vec<&str> = positions
        .as_deref()
        .map(|raw| raw.split_whitespace().collect())
        .unwrap_or_default();

    // Gather everything that needs I/O before taking the guild lock
    let (requester, voice) = requester_and_voice(ctx, guild_id).await?;
    let state = MusicManager::player_state(ctx.serenity_context(), guild_id).await;

    let outcome = {
        let context = guild_context(guild_id);
        let mut context = context.lock().await;
        context.update_bound_channel(ctx.channel_id());
        context.player.sync(state);

        let context = &mut *context;
        RemovalCoordinator::new(&mut context.queue, &mut context.player)
            .bulk_remove(&tokens, &requester, &voice)
    };

    let reply = match outcome {
        Ok(result) if result.is_empty() => embedded_messages::nothing_removed(),
        Ok(result) => embedded_messages::removal_summary(&result),
        Err(rejection) => embedded_messages::removal_rejected(rejection),
    };
    send_or_log(ctx, reply).await;

    Ok(())
}
