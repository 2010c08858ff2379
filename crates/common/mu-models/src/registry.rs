use serde::{Deserialize, Serialize};

use crate::{Branch, RegistryRegion};

/// Historical release record from the device registry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegistryRecord {
    /// `stable` or `weekly`.
    pub branch: String,
    /// Region label, e.g. `Global` or `China`.
    #[serde(rename = "type")]
    pub region: String,
    #[serde(default)]
    pub versions: RegistryVersions,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RegistryVersions {
    #[serde(default)]
    pub miui: String,
}

impl RegistryRecord {
    pub fn matches(&self, branch: Branch, version: &str, region: RegistryRegion) -> bool {
        self.branch == branch.registry_key()
            && self.versions.miui == version
            && self.region == region.as_str()
    }
}
