use std::sync::LazyLock;

use url::Url;

use crate::error::{Error, Result};

pub(crate) const DEFAULT_FEEDS_URL: &str =
    "https://raw.githubusercontent.com/XiaomiFirmwareUpdater/miui-updates-tracker/master/";
pub(crate) const DEFAULT_REGISTRY_URL: &str = "https://raw.githubusercontent.com/XiaomiFirmwareUpdater/xiaomifirmwareupdater.github.io/master/data/devices/full/";
pub(crate) const DEFAULT_TELEGRAM_URL: &str = "https://api.telegram.org/";

/// Base URLs of the remote collaborators.
///
/// Every base ends with `/` so relative paths join beneath it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
    /// Tracker repository root holding `{category}/{category}.json`.
    pub feeds: Url,
    /// Directory holding `{base_codename}.json` release histories.
    pub registry: Url,
    /// Telegram Bot API root.
    pub telegram: Url,
}

// Parsed once; `defaults_parse` below covers the literals.
static DEFAULT_ENDPOINTS: LazyLock<Endpoints> = LazyLock::new(|| Endpoints {
    feeds: Url::parse(DEFAULT_FEEDS_URL).expect("default feeds URL is valid"),
    registry: Url::parse(DEFAULT_REGISTRY_URL).expect("default registry URL is valid"),
    telegram: Url::parse(DEFAULT_TELEGRAM_URL).expect("default telegram URL is valid"),
});

impl Default for Endpoints {
    fn default() -> Self {
        DEFAULT_ENDPOINTS.clone()
    }
}

/// Parses a base URL override, appending the trailing slash `Url::join` needs.
pub(crate) fn parse_base(key: &'static str, raw: &str) -> Result<Url> {
    let mut url = Url::parse(raw).map_err(|e| Error::InvalidValue {
        key,
        reason: e.to_string(),
    })?;
    if url.cannot_be_a_base() {
        return Err(Error::InvalidValue {
            key,
            reason: format!("'{}' cannot be used as a base URL", raw),
        });
    }
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}
