//! Error types for the media module.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while classifying an input path.
#[derive(Debug, Error)]
pub enum DiscoveryError {
    /// The path does not exist.
    #[error("Path not found: {path}")]
    PathNotFound { path: PathBuf },

    /// The path exists but is neither a regular file nor a directory.
    #[error("Not a file or directory: {path}")]
    UnsupportedEntry { path: PathBuf },

    /// I/O error while inspecting the path.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
