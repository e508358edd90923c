use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building or loading a [`ModCatalog`](crate::ModCatalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read.
    #[error("failed to read catalog {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The catalog document is not valid JSON or has the wrong shape.
    #[error("malformed catalog: {0}")]
    Parse(#[from] serde_json::Error),

    /// Two entries share the same key.
    #[error("mod key '{key}' appears more than once")]
    DuplicateKey { key: String },
}
