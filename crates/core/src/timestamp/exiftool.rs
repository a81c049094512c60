//! `exiftool`-based metadata writer.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::WriterError;
use super::writer::MetadataWriter;
use crate::config::ToolsConfig;
use crate::process::{probe_tool, run_tool, ToolCommand};

/// EXIF date syntax.
const EXIF_DATETIME_FORMAT: &str = "%Y:%m:%d %H:%M:%S";

/// Writes `DateTimeOriginal`, `CreateDate` and `ModifyDate` via exiftool's
/// `-AllDates` shortcut, replacing the file in place.
pub struct ExiftoolWriter {
    program: PathBuf,
    timeout_secs: Option<u64>,
}

impl ExiftoolWriter {
    pub fn new(program: PathBuf, timeout_secs: Option<u64>) -> Self {
        Self {
            program,
            timeout_secs,
        }
    }

    pub fn from_tools(tools: &ToolsConfig) -> Self {
        Self::new(tools.exiftool_path.clone(), tools.timeout_secs)
    }

    pub fn with_defaults() -> Self {
        Self::from_tools(&ToolsConfig::default())
    }

    /// Builds `exiftool -overwrite_original -AllDates=<ts> <path>`.
    fn build_command(&self, path: &Path, timestamp: NaiveDateTime) -> ToolCommand {
        ToolCommand::new(&self.program)
            .arg("-overwrite_original")
            .arg(format!(
                "-AllDates={}",
                timestamp.format(EXIF_DATETIME_FORMAT)
            ))
            .path_arg(path)
    }
}

#[async_trait]
impl MetadataWriter for ExiftoolWriter {
    fn name(&self) -> &str {
        "exiftool"
    }

    async fn set_timestamp(
        &self,
        path: &Path,
        timestamp: NaiveDateTime,
    ) -> Result<(), WriterError> {
        let command = self.build_command(path, timestamp);
        let output = run_tool(&command, self.timeout_secs.map(Duration::from_secs)).await?;

        if !output.success {
            let reason = match output.status_code {
                Some(code) => format!("exiftool exited with code {}", code),
                None => "exiftool terminated by signal".to_string(),
            };
            return Err(WriterError::WriteFailed {
                reason,
                stderr: output.diagnostic(),
            });
        }
        Ok(())
    }

    async fn validate(&self) -> Result<(), WriterError> {
        probe_tool(&ToolCommand::new(&self.program).arg("-ver")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_build_command_uses_exif_syntax() {
        let writer = ExiftoolWriter::new(PathBuf::from("/opt/homebrew/bin/exiftool"), None);
        let ts = NaiveDate::from_ymd_opt(2024, 5, 1)
            .unwrap()
            .and_hms_opt(9, 3, 7)
            .unwrap();

        let command = writer.build_command(Path::new("/photos/with space.jpg"), ts);
        assert_eq!(
            command.args,
            vec![
                "-overwrite_original",
                "-AllDates=2024:05:01 09:03:07",
                "/photos/with space.jpg",
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_binary_is_reported() {
        let writer = ExiftoolWriter::new(PathBuf::from("/nonexistent/exiftool"), None);
        let ts = NaiveDate::from_ymd_opt(2024, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let err = writer
            .set_timestamp(Path::new("/tmp/a.jpg"), ts)
            .await
            .unwrap_err();
        assert!(matches!(err, WriterError::ToolNotFound { .. }));
    }
}
