//! On-disk snapshots of the update feeds for one device.
//!
//! Each category owns two slots inside the device directory: the current slot
//! `{category}.json`, written by this run, and the previous slot
//! `old_{category}.json`, holding what the current slot held at the end of the
//! last run. A run moves through `rotate` → `write` → `diff` → `clear`; the
//! previous slot only exists between `rotate` and `clear`.

use std::path::{Path, PathBuf};

use mu_models::{Category, DiffStrategy, UpdateEntry};
use tracing::{debug, info, warn};

mod diff;
mod error;

pub use diff::changed_entries;
pub use error::{Error, Result};

const PREVIOUS_PREFIX: &str = "old_";

/// Which of a category's two files to address.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    Current,
    Previous,
}

#[derive(Debug, Clone)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self, slot: Slot, category: Category) -> PathBuf {
        match slot {
            Slot::Current => self.dir.join(format!("{}.json", category)),
            Slot::Previous => self
                .dir
                .join(format!("{}{}.json", PREVIOUS_PREFIX, category)),
        }
    }

    /// Creates the device directory and moves every current slot into the
    /// previous slot. Returns the categories that were rotated.
    ///
    /// A previous slot left behind by an interrupted run is replaced.
    pub fn rotate(&self) -> Result<Vec<Category>> {
        std::fs::create_dir_all(&self.dir).map_err(|source| Error::CreateDir {
            path: self.dir.clone(),
            source,
        })?;

        let mut rotated = Vec::new();
        for category in Category::ALL {
            let current = self.path(Slot::Current, category);
            if !current.is_file() {
                continue;
            }
            let previous = self.path(Slot::Previous, category);
            if previous.exists() {
                warn!(
                    "Replacing stale {} left by an incomplete run",
                    previous.display()
                );
            }
            std::fs::rename(&current, &previous).map_err(|source| Error::Rotate {
                from: current.clone(),
                to: previous.clone(),
                source,
            })?;
            debug!("Rotated {} -> {}", current.display(), previous.display());
            rotated.push(category);
        }
        Ok(rotated)
    }

    /// Replaces the current slot with `entries`.
    pub fn write(&self, category: Category, entries: &[UpdateEntry]) -> Result<()> {
        mu_fs::write_json_pretty(self.path(Slot::Current, category), entries)
            .map_err(|source| Error::Write { category, source })?;
        debug!("Wrote {} {} entries", entries.len(), category);
        Ok(())
    }

    pub fn load(&self, slot: Slot, category: Category) -> Result<Option<Vec<UpdateEntry>>> {
        mu_fs::read_json_file_opt(&self.path(slot, category))
            .map_err(|source| Error::Load { category, source })
    }

    /// Entries of the current slot that changed relative to the previous slot.
    ///
    /// A missing previous slot means this category has never been seen and
    /// contributes nothing.
    pub fn diff(&self, category: Category, strategy: DiffStrategy) -> Result<Vec<UpdateEntry>> {
        let Some(previous) = self.load(Slot::Previous, category)? else {
            info!("Can't find previous {} snapshot, skipping", category);
            return Ok(Vec::new());
        };
        let Some(current) = self.load(Slot::Current, category)? else {
            warn!("Can't find current {} snapshot, skipping", category);
            return Ok(Vec::new());
        };

        let changes = changed_entries(strategy, &current, &previous);
        debug!(
            "{}: {} change(s) using {} diff",
            category,
            changes.len(),
            strategy
        );
        Ok(changes)
    }

    /// Deletes every previous slot. Returns how many files were removed.
    pub fn clear(&self) -> Result<usize> {
        let stale = mu_fs::list_files(&self.dir, |name| {
            name.starts_with(PREVIOUS_PREFIX) && name.ends_with(".json")
        })
        .map_err(Error::Clear)?;

        let mut removed = 0;
        for path in stale {
            if mu_fs::remove_file_if_exists(&path).map_err(Error::Clear)? {
                removed += 1;
            }
        }
        debug!("Removed {} previous snapshot(s)", removed);
        Ok(removed)
    }
}
