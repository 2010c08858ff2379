use std::path::PathBuf;

use mu_models::Category;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create snapshot directory {path}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to rotate {from} to {to}")]
    Rotate {
        from: PathBuf,
        to: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {category} snapshot")]
    Write {
        category: Category,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to load {category} snapshot")]
    Load {
        category: Category,
        #[source]
        source: anyhow::Error,
    },

    #[error("failed to clear previous snapshots")]
    Clear(#[source] anyhow::Error),
}
