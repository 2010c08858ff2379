use std::collections::HashMap;

use mu_models::{DiffStrategy, UpdateEntry};

/// Entries of `current` that count as changed relative to `previous`.
pub fn changed_entries(
    strategy: DiffStrategy,
    current: &[UpdateEntry],
    previous: &[UpdateEntry],
) -> Vec<UpdateEntry> {
    match strategy {
        DiffStrategy::Positional => positional(current, previous),
        DiffStrategy::Codename => by_codename(current, previous),
    }
}

/// Index-aligned comparison up to the shorter length.
fn positional(current: &[UpdateEntry], previous: &[UpdateEntry]) -> Vec<UpdateEntry> {
    current
        .iter()
        .zip(previous)
        .filter(|(new, old)| new.version != old.version)
        .map(|(new, _)| new.clone())
        .collect()
}

fn by_codename(current: &[UpdateEntry], previous: &[UpdateEntry]) -> Vec<UpdateEntry> {
    let known: HashMap<&str, &str> = previous
        .iter()
        .map(|e| (e.codename.as_str(), e.version.as_str()))
        .collect();

    current
        .iter()
        .filter(|e| known.get(e.codename.as_str()) != Some(&e.version.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(codename: &str, version: &str) -> UpdateEntry {
        UpdateEntry {
            codename: codename.to_string(),
            device: "Redmi Note 5".to_string(),
            version: version.to_string(),
            android: "10.0".to_string(),
            filename: format!("miui_HMNote5_{version}_10.0.zip"),
            download: format!("https://example.com/{version}.zip"),
            extra: Default::default(),
        }
    }

    #[test]
    fn identical_snapshots_have_no_changes() {
        let snapshot = vec![entry("whyred", "20.9.24"), entry("whyred_global", "20.9.24")];
        assert!(changed_entries(DiffStrategy::Positional, &snapshot, &snapshot).is_empty());
        assert!(changed_entries(DiffStrategy::Codename, &snapshot, &snapshot).is_empty());
    }

    #[test]
    fn positional_reports_new_entry_at_changed_index() {
        let previous = vec![entry("whyred", "20.9.24"), entry("whyred_global", "20.9.17")];
        let current = vec![entry("whyred", "20.9.24"), entry("whyred_global", "20.9.25")];

        let changes = changed_entries(DiffStrategy::Positional, &current, &previous);
        assert_eq!(changes, vec![current[1].clone()]);
    }

    #[test]
    fn positional_ignores_entries_beyond_overlap() {
        let previous = vec![entry("whyred", "20.9.24")];
        let current = vec![entry("whyred", "20.9.24"), entry("whyred_global", "20.9.25")];

        assert!(changed_entries(DiffStrategy::Positional, &current, &previous).is_empty());
        assert!(changed_entries(DiffStrategy::Positional, &previous, &current).is_empty());
    }

    #[test]
    fn positional_misattributes_shifted_entries() {
        let previous = vec![entry("whyred", "20.9.24"), entry("whyred_global", "20.9.17")];
        let current = vec![entry("whyred_global", "20.9.17"), entry("whyred", "20.9.24")];

        assert_eq!(
            changed_entries(DiffStrategy::Positional, &current, &previous).len(),
            2
        );
        assert!(changed_entries(DiffStrategy::Codename, &current, &previous).is_empty());
    }

    #[test]
    fn codename_reports_new_and_changed() {
        let previous = vec![entry("whyred", "20.9.24")];
        let current = vec![entry("whyred", "20.9.25"), entry("whyred_global", "20.9.25")];

        let changes = changed_entries(DiffStrategy::Codename, &current, &previous);
        assert_eq!(changes, current);
    }
}
