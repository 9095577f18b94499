//! Per-guild music queue control for a Discord bot: bulk removal with range syntax and
//! per-track permissions, clearing, and disconnecting.

pub mod commands;
pub mod utils;

use utils::config::BotConfig;

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
pub type CommandResult = Result<(), Error>;

// User data, which is stored and accessible in all command invocations
pub struct Data {
    pub config: BotConfig,
}
