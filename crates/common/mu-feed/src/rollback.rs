use mu_models::{Branch, RegistryRegion, UpdateEntry, base_codename};
use tracing::{info, instrument};

use crate::{DeviceRegistry, Result};

/// Decides whether a changed entry republishes a version the registry already
/// knows for this device, branch and region.
///
/// Every call queries the registry; nothing is cached between entries.
pub struct RollbackClassifier<'a> {
    registry: &'a dyn DeviceRegistry,
    codename: &'a str,
}

impl<'a> RollbackClassifier<'a> {
    /// `codename` is the configured device codename; its base form selects the
    /// registry document.
    pub fn new(registry: &'a dyn DeviceRegistry, codename: &'a str) -> Self {
        Self { registry, codename }
    }

    #[instrument(skip_all, fields(version = %entry.version))]
    pub async fn is_rolled_back(&self, entry: &UpdateEntry) -> Result<bool> {
        let base = base_codename(self.codename);
        let history = match self.registry.release_history(base).await? {
            Some(history) => history,
            None => {
                info!("Working on {} for the first time!", self.codename);
                return Ok(false);
            }
        };

        let branch = Branch::from_version(&entry.version);
        let region = RegistryRegion::from_filename(&entry.filename);
        let rolled_back = history
            .iter()
            .any(|record| record.matches(branch, &entry.version, region));

        if rolled_back {
            info!("{}: {} is rolled back ROM!", self.codename, entry.version);
        }
        Ok(rolled_back)
    }
}
