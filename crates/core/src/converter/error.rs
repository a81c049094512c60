//! Error types for the converter module.

use std::path::PathBuf;
use thiserror::Error;

use crate::process::ToolError;

/// Errors that can occur during conversion.
#[derive(Debug, Error)]
pub enum ConverterError {
    /// Converter binary not found.
    #[error("Converter not found at path: {path}")]
    ToolNotFound { path: PathBuf },

    /// The converter exited unsuccessfully. `stderr` is the tool's own text.
    #[error("Conversion failed ({reason}): {stderr}")]
    ConversionFailed { reason: String, stderr: String },

    /// The converter claimed success but produced no output file.
    #[error("Output file not created: {path}")]
    OutputMissing { path: PathBuf },

    /// Conversion timed out.
    #[error("Conversion timed out after {timeout_secs} seconds")]
    Timeout { timeout_secs: u64 },

    /// I/O error during conversion.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ConverterError {
    /// Creates a new conversion failed error with the tool's diagnostic.
    pub fn conversion_failed(reason: impl Into<String>, stderr: impl Into<String>) -> Self {
        Self::ConversionFailed {
            reason: reason.into(),
            stderr: stderr.into(),
        }
    }
}

impl From<ToolError> for ConverterError {
    fn from(err: ToolError) -> Self {
        match err {
            ToolError::NotFound { program } => Self::ToolNotFound { path: program },
            ToolError::Timeout { timeout_secs, .. } => Self::Timeout { timeout_secs },
            ToolError::Spawn { source, .. } | ToolError::Wait { source, .. } => Self::Io(source),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conversion_failed_keeps_stderr_verbatim() {
        let err = ConverterError::conversion_failed("exit status 1", "Error: unsupported file");
        assert_eq!(
            err.to_string(),
            "Conversion failed (exit status 1): Error: unsupported file"
        );
    }

    #[test]
    fn test_from_tool_error() {
        let err: ConverterError = ToolError::NotFound {
            program: PathBuf::from("/usr/bin/sips"),
        }
        .into();
        assert!(matches!(err, ConverterError::ToolNotFound { .. }));

        let err: ConverterError = ToolError::Timeout {
            program: PathBuf::from("magick"),
            timeout_secs: 30,
        }
        .into();
        assert!(matches!(err, ConverterError::Timeout { timeout_secs: 30 }));
    }
}
