//! Runtime configuration, read from the environment (and `.env` via `dotenv`).

use serenity::model::id::UserId;
use std::collections::HashSet;
use std::env;
use thiserror::Error;

/// Role name treated as DJ when `DJ_ROLE_NAME` is unset.
pub const DEFAULT_DJ_ROLE: &str = "DJ";
/// Prefix for text commands when `COMMAND_PREFIX` is unset.
pub const DEFAULT_PREFIX: &str = "!";

/// Errors raised while loading configuration
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variable {0}")]
    Missing(&'static str),

    #[error("Invalid user id in PRIVILEGED_USER_IDS: {0:?}")]
    InvalidUserId(String),
}

/// Bot-wide settings shared with every command through poise's user data.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub discord_token: String,
    pub prefix: String,
    /// Members holding a role with this name (case-insensitive) have DJ privilege
    pub dj_role_name: String,
    /// Users with unrestricted queue control in every guild
    pub privileged_users: HashSet<UserId>,
}

impl BotConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        let discord_token =
            env::var("DISCORD_TOKEN").map_err(|_| ConfigError::Missing("DISCORD_TOKEN"))?;
        let prefix = env::var("COMMAND_PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());
        let dj_role_name = env::var("DJ_ROLE_NAME").unwrap_or_else(|_| DEFAULT_DJ_ROLE.to_string());
        let privileged_users = match env::var("PRIVILEGED_USER_IDS") {
            Ok(raw) => parse_user_ids(&raw)?,
            Err(_) => HashSet::new(),
        };

        Ok(Self {
            discord_token,
            prefix,
            dj_role_name,
            privileged_users,
        })
    }

    pub fn is_privileged(&self, user_id: UserId) -> bool {
        self.privileged_users.contains(&user_id)
    }
}

/// Parses a comma-separated list of Discord user ids. Blank entries are ignored.
pub fn parse_user_ids(raw: &str) -> Result<HashSet<UserId>, ConfigError> {
    raw.split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .map(|entry| {
            entry
                .parse::<u64>()
                .ok()
                .filter(|id| *id != 0)
                .map(UserId::new)
                .ok_or_else(|| ConfigError::InvalidUserId(entry.to_string()))
        })
        .collect()
}
