use mu_models::{Branch, PackageType, Region, UpdateEntry};

const SIGNATURE: &str = "@MIUIUpdatesTracker | @XiaomiFirmwareUpdater";

/// Classification of one update as presented to subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateKind {
    pub branch: Branch,
    pub package_type: PackageType,
    pub region: Region,
}

impl UpdateKind {
    pub fn of(entry: &UpdateEntry) -> Self {
        Self {
            branch: Branch::from_version(&entry.version),
            package_type: PackageType::from_filename(&entry.filename),
            region: Region::from_filename(&entry.filename),
        }
    }
}

/// Renders the Markdown announcement for one update.
pub fn format_message(entry: &UpdateEntry, rolled_back: bool) -> String {
    let UpdateKind {
        branch,
        package_type,
        region,
    } = UpdateKind::of(entry);

    let mut message = if rolled_back {
        format!("Rolled back {branch} {package_type} update!\n")
    } else {
        format!("New {branch} {package_type} update available!\n")
    };
    message.push_str(&format!(
        "*Device:* {device} \n\
         *Codename:* #{codename} \n\
         *Region:* {region} \n\
         *Version:* `{version}` \n\
         *Android:* {android} \n\
         *Download*: [Here]({download}) \n\
         {SIGNATURE}",
        device = entry.device,
        codename = entry.base_codename(),
        version = entry.version,
        android = entry.android,
        download = entry.download,
    ));
    message
}
