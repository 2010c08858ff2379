use serde::{Deserialize, Serialize};

/// How a fresh snapshot is compared against the previous one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DiffStrategy {
    /// Index-aligned comparison of `version`, up to the shorter array.
    ///
    /// Assumes upstream ordering is stable between runs: a pure reorder is
    /// invisible and a shift misattributes changes.
    #[default]
    Positional,
    /// Keyed on the full entry codename. Entries new to the snapshot count as changes.
    Codename,
}

impl std::fmt::Display for DiffStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DiffStrategy::Positional => f.write_str("positional"),
            DiffStrategy::Codename => f.write_str("codename"),
        }
    }
}
