//! Asset loading errors.

use thiserror::Error;

/// Why an asset failed to load. Surfaced to the host as-is; the loader does
/// not retry or fall back.
#[derive(Error, Debug)]
pub enum AssetError {
    /// The OBJ (or its index data) could not be read.
    #[error("failed to load OBJ {path}: {source}")]
    Obj {
        path: String,
        #[source]
        source: tobj::LoadError,
    },

    /// The file parsed but holds no vertices.
    #[error("{path} contains no geometry")]
    Empty { path: String },

    /// The loader worker could not be started.
    #[error("failed to start asset loader: {0}")]
    Spawn(#[from] std::io::Error),

    /// The loader went away without reporting a result.
    #[error("asset loader stopped before reporting a result")]
    Disconnected,
}

/// Result type for asset loading.
pub type AssetResult<T> = Result<T, AssetError>;
