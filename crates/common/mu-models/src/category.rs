use serde::{Deserialize, Serialize};

use crate::{Branch, PackageType};

/// One of the four (branch × package type) feed partitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    StableRecovery,
    StableFastboot,
    WeeklyRecovery,
    WeeklyFastboot,
}

impl Category {
    /// Processing order for fetch, diff and notification.
    pub const ALL: [Category; 4] = [
        Category::StableRecovery,
        Category::StableFastboot,
        Category::WeeklyRecovery,
        Category::WeeklyFastboot,
    ];

    /// Snapshot file stem and upstream feed name.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::StableRecovery => "stable_recovery",
            Category::StableFastboot => "stable_fastboot",
            Category::WeeklyRecovery => "weekly_recovery",
            Category::WeeklyFastboot => "weekly_fastboot",
        }
    }

    pub fn branch(&self) -> Branch {
        match self {
            Category::StableRecovery | Category::StableFastboot => Branch::Stable,
            Category::WeeklyRecovery | Category::WeeklyFastboot => Branch::Weekly,
        }
    }

    pub fn package_type(&self) -> PackageType {
        match self {
            Category::StableRecovery | Category::WeeklyRecovery => PackageType::Recovery,
            Category::StableFastboot | Category::WeeklyFastboot => PackageType::Fastboot,
        }
    }

    /// Path of this category's feed relative to the tracker repository root,
    /// e.g. `stable_recovery/stable_recovery.json`.
    pub fn feed_path(&self) -> String {
        format!("{0}/{0}.json", self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("Unknown snapshot category: {}", s))
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
