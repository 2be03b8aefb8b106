//! Error types for the resolution engine.

use std::path::PathBuf;
use thiserror::Error;

/// A `_meta.yml` file exists but cannot be used.
#[derive(Debug, Error)]
pub enum MetadataError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed metadata in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml_ng::Error,
    },

    #[error("invalid header {name:?} in {path}: {reason}")]
    InvalidHeader {
        path: PathBuf,
        name: String,
        reason: String,
    },
}

/// Failure while resolving a request that is not a plain "not found".
#[derive(Debug, Error)]
pub enum ResolveError {
    /// The file passed the existence check but could not be read.
    #[error("failed to read mock file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
