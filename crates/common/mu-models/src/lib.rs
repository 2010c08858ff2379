//! Data types shared by the update poster crates.
//!
//! Feed entries, registry records and the snapshot categories live here, along
//! with the filename/version based classification rules used when describing
//! an update to subscribers.

mod category;
mod classify;
mod entry;
mod registry;
mod strategy;

pub use category::Category;
pub use classify::{Branch, PackageType, Region, RegistryRegion};
pub use entry::{UpdateEntry, base_codename};
pub use registry::{RegistryRecord, RegistryVersions};
pub use strategy::DiffStrategy;
