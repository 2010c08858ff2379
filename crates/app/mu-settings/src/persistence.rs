use std::path::{Path, PathBuf};

use mu_models::DiffStrategy;
use serde_json::{Map, Value};
use tracing::debug;

use crate::{
    BotToken, ChannelId, Endpoints, Settings,
    endpoints::parse_base,
    error::{Error, RequiredKey, Result},
};

/// Environment variable overriding the settings document location.
pub const CONFIG_ENV: &str = "MU_CONFIG";
/// Environment variable overriding the snapshot root directory.
pub const DATA_DIR_ENV: &str = "MU_DATA_DIR";
pub const DEFAULT_CONFIG_PATH: &str = "config.json";
pub const DEFAULT_DATA_DIR: &str = "data";

impl Settings {
    /// Loads settings from the locations named by `MU_CONFIG` and `MU_DATA_DIR`,
    /// falling back to `config.json` and `data/` in the working directory.
    pub fn load_from_env() -> Result<Self> {
        let config_path = std::env::var(CONFIG_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_CONFIG_PATH));
        let data_dir = std::env::var(DATA_DIR_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR));
        Self::load(&config_path, &data_dir)
    }

    pub fn load(config_path: &Path, data_dir: &Path) -> Result<Self> {
        debug!("Loading settings from {}", config_path.display());
        let raw = match std::fs::read_to_string(config_path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                return Err(Error::Missing {
                    path: config_path.to_path_buf(),
                });
            }
            Err(source) => {
                return Err(Error::Read {
                    path: config_path.to_path_buf(),
                    source,
                });
            }
        };
        Self::parse(&raw, config_path, data_dir)
    }

    /// Parses a settings document. `config_path` is only used in error reports.
    pub fn parse(raw: &str, config_path: &Path, data_dir: &Path) -> Result<Self> {
        let value: Value = serde_json::from_str(raw).map_err(|source| Error::Malformed {
            path: config_path.to_path_buf(),
            source,
        })?;
        Self::from_value(value, data_dir)
    }

    /// Builds settings from an already parsed document.
    ///
    /// Required keys are checked in the order token, channel, codename so the
    /// first missing one decides the exit code.
    pub fn from_value(value: Value, data_dir: &Path) -> Result<Self> {
        let Value::Object(doc) = value else {
            return Err(Error::NotAnObject);
        };

        let bot_token = required_str(&doc, RequiredKey::BotToken)?;
        let channel = required_channel(&doc)?;
        let codename = required_str(&doc, RequiredKey::Codename)?;

        let diff_strategy = match doc.get("diff_strategy") {
            None | Some(Value::Null) => DiffStrategy::default(),
            Some(v) => serde_json::from_value(v.clone()).map_err(|e| Error::InvalidValue {
                key: "diff_strategy",
                reason: e.to_string(),
            })?,
        };

        let mut endpoints = Endpoints::default();
        if let Some(raw) = optional_str(&doc, "feeds_base_url")? {
            endpoints.feeds = parse_base("feeds_base_url", raw)?;
        }
        if let Some(raw) = optional_str(&doc, "registry_base_url")? {
            endpoints.registry = parse_base("registry_base_url", raw)?;
        }
        if let Some(raw) = optional_str(&doc, "telegram_api_url")? {
            endpoints.telegram = parse_base("telegram_api_url", raw)?;
        }

        Ok(Settings {
            bot_token: BotToken::new(bot_token),
            channel,
            storage_path: data_dir.join(codename),
            codename: codename.to_owned(),
            diff_strategy,
            endpoints,
        })
    }
}

fn required_str(doc: &Map<String, Value>, key: RequiredKey) -> Result<&str> {
    doc.get(key.as_str())
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .ok_or(Error::MissingField(key))
}

fn required_channel(doc: &Map<String, Value>) -> Result<ChannelId> {
    match doc.get(RequiredKey::Channel.as_str()) {
        Some(Value::String(name)) if !name.is_empty() => Ok(ChannelId::Username(name.clone())),
        Some(Value::Number(n)) => n
            .as_i64()
            .map(ChannelId::Id)
            .ok_or(Error::MissingField(RequiredKey::Channel)),
        _ => Err(Error::MissingField(RequiredKey::Channel)),
    }
}

fn optional_str<'a>(doc: &'a Map<String, Value>, key: &'static str) -> Result<Option<&'a str>> {
    match doc.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.as_str())),
        Some(other) => Err(Error::InvalidValue {
            key,
            reason: format!("expected a string, got {}", other),
        }),
    }
}
