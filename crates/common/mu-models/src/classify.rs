//! Classification of updates from version strings and artifact file names.
//!
//! These substring rules mirror the upstream feed's naming convention and are
//! part of the notification contract. Check order matters.

use serde::{Deserialize, Serialize};

/// Release track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Branch {
    Stable,
    Weekly,
}

impl Branch {
    /// Stable versions carry a `V` (`V12.0.1.0.QFJCNXM`), weekly ones do not (`20.9.25`).
    pub fn from_version(version: &str) -> Self {
        if version.contains('V') {
            Branch::Stable
        } else {
            Branch::Weekly
        }
    }

    /// Branch label used in notifications.
    pub fn label(&self) -> &'static str {
        match self {
            Branch::Stable => "Stable",
            Branch::Weekly => "Weekly",
        }
    }

    /// Branch key used by the device registry.
    pub fn registry_key(&self) -> &'static str {
        match self {
            Branch::Stable => "stable",
            Branch::Weekly => "weekly",
        }
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Artifact kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageType {
    Recovery,
    Fastboot,
}

impl PackageType {
    pub fn from_filename(filename: &str) -> Self {
        if filename.contains(".tgz") {
            PackageType::Fastboot
        } else {
            PackageType::Recovery
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PackageType::Recovery => "Recovery",
            PackageType::Fastboot => "Fastboot",
        }
    }
}

impl std::fmt::Display for PackageType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Distribution region shown to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    EeaGlobal,
    India,
    Russia,
    Global,
    China,
}

impl Region {
    pub fn from_filename(filename: &str) -> Self {
        let has = |needle: &str| filename.contains(needle);
        if has("eea_global") || has("EU") {
            Region::EeaGlobal
        } else if has("in_global") || has("IN") {
            Region::India
        } else if has("ru_global") || has("RU") {
            Region::Russia
        } else if has("global") || has("MI") {
            Region::Global
        } else {
            Region::China
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Region::EeaGlobal => "EEA Global",
            Region::India => "India",
            Region::Russia => "Russia",
            Region::Global => "Global",
            Region::China => "China",
        }
    }
}

impl std::fmt::Display for Region {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Coarse region used to match against the device registry's `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistryRegion {
    Global,
    China,
}

impl RegistryRegion {
    pub fn from_filename(filename: &str) -> Self {
        if filename.contains("MI") || filename.contains("Global") {
            RegistryRegion::Global
        } else {
            RegistryRegion::China
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RegistryRegion::Global => "Global",
            RegistryRegion::China => "China",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn branch_from_version() {
        assert_eq!(Branch::from_version("V12.0.1.0.QFJCNXM"), Branch::Stable);
        assert_eq!(Branch::from_version("20.9.25"), Branch::Weekly);
    }

    #[test]
    fn package_type_from_extension() {
        assert_eq!(
            PackageType::from_filename("cepheus_images_V12.0.1.0.QFACNXM_20200801.0000.00_10.0_cn_abc.tgz"),
            PackageType::Fastboot
        );
        assert_eq!(
            PackageType::from_filename("miui_MI9_V12.0.1.0.QFACNXM_abc_10.0.zip"),
            PackageType::Recovery
        );
    }

    #[test]
    fn region_checks_eea_before_global() {
        assert_eq!(
            Region::from_filename("miui_MI9EEAGlobal_EU_V12.zip"),
            Region::EeaGlobal
        );
        assert_eq!(
            Region::from_filename("cepheus_eea_global_images.tgz"),
            Region::EeaGlobal
        );
    }

    #[test]
    fn region_priority_order() {
        assert_eq!(Region::from_filename("miui_MI9IN_V12.zip"), Region::India);
        assert_eq!(
            Region::from_filename("cepheus_in_global_images.tgz"),
            Region::India
        );
        assert_eq!(Region::from_filename("miui_MI9RU_V12.zip"), Region::Russia);
        assert_eq!(
            Region::from_filename("cepheus_global_images.tgz"),
            Region::Global
        );
        assert_eq!(Region::from_filename("miui_MI9Global_V12.zip"), Region::Global);
        assert_eq!(Region::from_filename("miui_HMNote5_20.9.25.zip"), Region::China);
    }

    #[test]
    fn registry_region_is_case_sensitive_on_global() {
        assert_eq!(
            RegistryRegion::from_filename("miui_MI9Global_V12.zip"),
            RegistryRegion::Global
        );
        assert_eq!(
            RegistryRegion::from_filename("cepheus_global_images.tgz"),
            RegistryRegion::China
        );
        assert_eq!(
            RegistryRegion::from_filename("miui_HMNote5_20.9.25.zip"),
            RegistryRegion::China
        );
    }

    #[test]
    fn labels() {
        assert_eq!(Branch::Weekly.to_string(), "Weekly");
        assert_eq!(PackageType::Fastboot.to_string(), "Fastboot");
        assert_eq!(Region::EeaGlobal.to_string(), "EEA Global");
    }
}
