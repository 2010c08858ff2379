use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

/// Keys every settings document must provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequiredKey {
    BotToken,
    Channel,
    Codename,
}

impl RequiredKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            RequiredKey::BotToken => "tg_bot_token",
            RequiredKey::Channel => "tg_channel",
            RequiredKey::Codename => "codename",
        }
    }

    fn exit_code(&self) -> i32 {
        match self {
            RequiredKey::BotToken => 31,
            RequiredKey::Channel => 32,
            RequiredKey::Codename => 33,
        }
    }
}

impl std::fmt::Display for RequiredKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("settings file {path} is not valid JSON, please check it using jsonlint.com")]
    Malformed {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("settings document must be a JSON object")]
    NotAnObject,

    #[error("settings file {path} is missing, copy config.json.example to it and fill in your values")]
    Missing { path: PathBuf },

    #[error("failed to read settings from {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} is missing, please add it to the settings file")]
    MissingField(RequiredKey),

    #[error("{key} has an invalid value: {reason}")]
    InvalidValue { key: &'static str, reason: String },
}

impl Error {
    /// Process exit status reported for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Malformed { .. } | Error::NotAnObject | Error::InvalidValue { .. } => 10,
            Error::Missing { .. } | Error::Read { .. } => 20,
            Error::MissingField(key) => key.exit_code(),
        }
    }
}
