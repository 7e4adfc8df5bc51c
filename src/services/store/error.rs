use std::path::PathBuf;

use thiserror::Error;

/// Errors from the local key-value store.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The backing file could not be read or written.
    #[error("store I/O failed at {path}: {source}")]
    Io {
        /// Backing file path.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The store contents could not be serialized.
    #[error("store serialization failed: {0}")]
    Serialize(#[from] serde_json::Error),
}
