//! Mock converter for testing.

use async_trait::async_trait;
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::converter::{ConversionJob, Converter, ConverterError};

/// Mock implementation of the Converter trait.
///
/// Provides controllable behavior for testing:
/// - Writes the output file so callers can verify it
/// - Fails for selected input paths
/// - Tracks how many conversions run at once
/// - Records every submitted job
///
/// Clones share their recorded state.
#[derive(Debug, Clone, Default)]
pub struct MockConverter {
    /// Inputs whose conversion fails.
    fail_paths: HashSet<PathBuf>,
    /// Simulated conversion duration.
    delay: Duration,
    /// Report success without writing the output.
    skip_output: bool,
    /// Recorded jobs, in submission order.
    jobs: Arc<RwLock<Vec<ConversionJob>>>,
    in_flight: Arc<AtomicUsize>,
    max_in_flight: Arc<AtomicUsize>,
}

impl MockConverter {
    /// Create a new mock converter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail every conversion of `path`.
    pub fn fail_on(mut self, path: impl AsRef<Path>) -> Self {
        self.fail_paths.insert(path.as_ref().to_path_buf());
        self
    }

    /// Set the simulated conversion duration.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Claim success without producing the output file.
    pub fn without_output(mut self) -> Self {
        self.skip_output = true;
        self
    }

    /// Get all recorded jobs.
    pub async fn jobs(&self) -> Vec<ConversionJob> {
        self.jobs.read().await.clone()
    }

    /// Get the number of conversions performed.
    pub async fn conversion_count(&self) -> usize {
        self.jobs.read().await.len()
    }

    /// Highest number of conversions observed running at once.
    pub fn max_in_flight(&self) -> usize {
        self.max_in_flight.load(Ordering::SeqCst)
    }

    async fn run(&self, job: &ConversionJob) -> Result<(), ConverterError> {
        if self.delay > Duration::ZERO {
            tokio::time::sleep(self.delay).await;
        } else {
            tokio::task::yield_now().await;
        }

        if self.fail_paths.contains(&job.input_path) {
            return Err(ConverterError::conversion_failed(
                "mock exited with code 1",
                format!("Error: cannot decode {}", job.input_path.display()),
            ));
        }

        if !self.skip_output {
            tokio::fs::write(&job.output_path, b"converted").await?;
        }
        Ok(())
    }
}

#[async_trait]
impl Converter for MockConverter {
    fn name(&self) -> &str {
        "mock"
    }

    async fn convert(&self, job: &ConversionJob) -> Result<(), ConverterError> {
        self.jobs.write().await.push(job.clone());

        let running = self.in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_in_flight.fetch_max(running, Ordering::SeqCst);
        let result = self.run(job).await;
        self.in_flight.fetch_sub(1, Ordering::SeqCst);

        result
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::TargetFormat;
    use tempfile::TempDir;

    fn job(dir: &Path, name: &str) -> ConversionJob {
        let input_path = dir.join(name);
        ConversionJob {
            output_path: TargetFormat::Heic.output_path_for(&input_path),
            input_path,
            format: TargetFormat::Heic,
        }
    }

    #[tokio::test]
    async fn test_writes_output_and_records() {
        let dir = TempDir::new().unwrap();
        let converter = MockConverter::new();

        converter.convert(&job(dir.path(), "a.jpg")).await.unwrap();

        assert!(dir.path().join("a.heic").exists());
        assert_eq!(converter.conversion_count().await, 1);
        assert_eq!(converter.max_in_flight(), 1);
    }

    #[tokio::test]
    async fn test_failure_injection() {
        let dir = TempDir::new().unwrap();
        let converter = MockConverter::new().fail_on(dir.path().join("bad.png"));

        let err = converter
            .convert(&job(dir.path(), "bad.png"))
            .await
            .unwrap_err();
        assert!(err.to_string().contains("cannot decode"));
        assert!(!dir.path().join("bad.heic").exists());
        assert_eq!(converter.jobs().await.len(), 1);
    }

    #[tokio::test]
    async fn test_without_output() {
        let dir = TempDir::new().unwrap();
        let converter = MockConverter::new().without_output();

        converter.convert(&job(dir.path(), "a.jpg")).await.unwrap();
        assert!(!dir.path().join("a.heic").exists());
    }
}
