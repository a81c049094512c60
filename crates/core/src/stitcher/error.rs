//! Error types for the stitcher module.

use std::path::PathBuf;
use thiserror::Error;

use crate::converter::ConverterError;
use crate::process::ToolError;

/// Errors that can occur while stitching.
#[derive(Debug, Error)]
pub enum StitchError {
    /// Fewer than two inputs were given.
    #[error("At least two images are required, got {count}")]
    TooFewInputs { count: usize },

    /// An input file does not exist.
    #[error("File not found: {path}")]
    PathNotFound { path: PathBuf },

    /// Converting an input to HEIC failed.
    #[error("Failed to convert {path} to HEIC: {source}")]
    Conversion {
        path: PathBuf,
        #[source]
        source: ConverterError,
    },

    /// Stitcher binary not found.
    #[error("Stitcher not found at path: {path}")]
    ToolNotFound { path: PathBuf },

    /// The stitcher exited unsuccessfully. `stderr` is the tool's own text.
    #[error("Stitching failed ({reason}): {stderr}")]
    StitchFailed { reason: String, stderr: String },

    /// Stitching timed out.
    #[error("Stitching timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error while preparing the output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ToolError> for StitchError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound { program } => Self::ToolNotFound { path: program },
            ToolError::Timeout { timeout_secs, .. } => Self::Timeout { timeout_secs },
            ToolError::Spawn { source, .. } | ToolError::Wait { source, .. } => Self::Io(source),
        }
    }
}
