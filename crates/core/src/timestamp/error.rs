//! Error types for the timestamp module.

use std::path::PathBuf;
use thiserror::Error;

use crate::process::ToolError;

/// Fatal errors raised before any timestamp is written.
#[derive(Debug, Error)]
pub enum TimestampError {
    /// The base datetime could not be parsed.
    #[error("Invalid datetime '{input}', expected YYYY-MM-DD HH:MM:SS")]
    InvalidDatetime { input: String },

    /// Step must be at least one second.
    #[error("Invalid step: {0} seconds (must be at least 1)")]
    InvalidStep(u32),

    /// The last timestamp of the sequence is out of range.
    #[error("Timestamp for item {index} is out of range")]
    Overflow { index: usize },
}

/// Errors reported by a metadata writer for a single file.
#[derive(Debug, Error)]
pub enum WriterError {
    /// Writer binary not found.
    #[error("Metadata writer not found at path: {path}")]
    ToolNotFound { path: PathBuf },

    /// The writer exited unsuccessfully. `stderr` is the tool's own text.
    #[error("Timestamp write failed ({reason}): {stderr}")]
    WriteFailed { reason: String, stderr: String },

    /// The writer ran past its deadline.
    #[error("Timestamp write timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error while running the writer.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<ToolError> for WriterError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound { program } => Self::ToolNotFound { path: program },
            ToolError::Timeout { timeout_secs, .. } => Self::Timeout { timeout_secs },
            ToolError::Spawn { source, .. } | ToolError::Wait { source, .. } => Self::Io(source),
        }
    }
}
