use serde::{Deserialize, Serialize};

/// One record from an upstream update feed.
///
/// Entries carry no identifier of their own; they are only addressable by
/// their position inside a feed array. Fields the poster does not interpret are
/// kept in `extra` so persisted snapshots match what the feed served.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEntry {
    /// Device identifier, possibly suffixed with a region qualifier (`whyred_global`).
    pub codename: String,
    #[serde(default)]
    pub device: String,
    pub version: String,
    #[serde(default)]
    pub android: String,
    pub filename: String,
    #[serde(default)]
    pub download: String,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl UpdateEntry {
    /// Whether this entry belongs to the configured device.
    ///
    /// Upstream codenames carry region suffixes, so this is a substring match.
    pub fn matches_codename(&self, codename: &str) -> bool {
        self.codename.contains(codename)
    }

    /// Codename with any `_`-suffixed region qualifier removed.
    pub fn base_codename(&self) -> &str {
        base_codename(&self.codename)
    }
}

/// Strips the `_`-suffixed region qualifier from a codename.
pub fn base_codename(codename: &str) -> &str {
    codename.split('_').next().unwrap_or(codename)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_codename_strips_region_suffix() {
        assert_eq!(base_codename("whyred_global"), "whyred");
        assert_eq!(base_codename("cepheus_eea_global"), "cepheus");
        assert_eq!(base_codename("whyred"), "whyred");
    }

    #[test]
    fn matches_codename_is_substring_match() {
        let entry: UpdateEntry = serde_json::from_value(serde_json::json!({
            "codename": "whyred_global",
            "device": "Redmi Note 5",
            "version": "V11.0.3.0.PEIMIXM",
            "android": "9.0",
            "filename": "miui_HMNote5Global_V11.0.3.0.PEIMIXM_9.0.zip",
            "download": "https://example.com/a.zip"
        }))
        .unwrap();

        assert!(entry.matches_codename("whyred"));
        assert!(entry.matches_codename("whyred_global"));
        assert!(!entry.matches_codename("cepheus"));
    }

    #[test]
    fn unknown_fields_survive_round_trip() {
        let raw = serde_json::json!({
            "codename": "whyred",
            "device": "Redmi Note 5",
            "version": "20.9.25",
            "android": "10.0",
            "filename": "miui_HMNote5_20.9.25_10.0.zip",
            "download": "https://example.com/b.zip",
            "size": "2.1 GB",
            "md5": "abc"
        });

        let entry: UpdateEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.extra.get("size"), Some(&serde_json::json!("2.1 GB")));
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }
}
