use std::path::PathBuf;

use mu_models::DiffStrategy;

mod endpoints;
mod error;
mod persistence;
mod token;

pub use endpoints::Endpoints;
pub use error::{Error, RequiredKey, Result};
pub use persistence::{CONFIG_ENV, DATA_DIR_ENV, DEFAULT_CONFIG_PATH, DEFAULT_DATA_DIR};
pub use token::BotToken;

/// Resolved, immutable configuration for one poster run.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bot_token: BotToken,
    pub channel: ChannelId,
    pub codename: String,
    /// Codename-scoped snapshot directory, `<data_dir>/<codename>`.
    pub storage_path: PathBuf,
    pub diff_strategy: DiffStrategy,
    pub endpoints: Endpoints,
}

/// Telegram chat target: a numeric chat id or an `@channel` username.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChannelId {
    Id(i64),
    Username(String),
}

impl std::fmt::Display for ChannelId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChannelId::Id(id) => write!(f, "{}", id),
            ChannelId::Username(name) => f.write_str(name),
        }
    }
}
