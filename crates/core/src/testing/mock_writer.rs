//! Mock metadata writer for testing.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::timestamp::{MetadataWriter, WriterError};

/// Mock implementation of the MetadataWriter trait.
///
/// Records every `(path, timestamp)` it is asked to write, in call order,
/// including the ones it fails.
#[derive(Debug, Clone, Default)]
pub struct MockMetadataWriter {
    fail_paths: HashSet<PathBuf>,
    writes: Arc<RwLock<Vec<(PathBuf, NaiveDateTime)>>>,
}

impl MockMetadataWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every write to `path`.
    pub fn fail_on(mut self, path: impl AsRef<Path>) -> Self {
        self.fail_paths.insert(path.as_ref().to_path_buf());
        self
    }

    /// Get all recorded writes.
    pub async fn writes(&self) -> Vec<(PathBuf, NaiveDateTime)> {
        self.writes.read().await.clone()
    }
}

#[async_trait]
impl MetadataWriter for MockMetadataWriter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn set_timestamp(
        &self,
        path: &Path,
        timestamp: NaiveDateTime,
    ) -> Result<(), WriterError> {
        self.writes
            .write()
            .await
            .push((path.to_path_buf(), timestamp));

        if self.fail_paths.contains(path) {
            return Err(WriterError::WriteFailed {
                reason: "mock exited with code 1".to_string(),
                stderr: format!("Error: file format error - {}", path.display()),
            });
        }
        Ok(())
    }

    async fn validate(&self) -> Result<(), WriterError> {
        Ok(())
    }
}
