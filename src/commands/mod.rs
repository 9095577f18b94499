//! This module aggregates all the command modules for the bot.

/// Commands that inspect and mutate a guild's music queue.
pub mod music;
