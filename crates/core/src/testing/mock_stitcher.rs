//! Mock stitcher for testing.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::stitcher::{StitchDirection, StitchError, Stitcher};

/// A recorded stitch call for test assertions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedStitch {
    pub inputs: Vec<PathBuf>,
    pub direction: StitchDirection,
    pub output: PathBuf,
}

/// Mock implementation of the Stitcher trait. Writes the output file and
/// records the call.
#[derive(Debug, Clone, Default)]
pub struct MockStitcher {
    calls: Arc<RwLock<Vec<RecordedStitch>>>,
}

impl MockStitcher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded calls.
    pub async fn calls(&self) -> Vec<RecordedStitch> {
        self.calls.read().await.clone()
    }
}

#[async_trait]
impl Stitcher for MockStitcher {
    fn name(&self) -> &str {
        "mock"
    }

    async fn stitch(
        &self,
        inputs: &[PathBuf],
        direction: StitchDirection,
        output: &Path,
    ) -> Result<(), StitchError> {
        self.calls.write().await.push(RecordedStitch {
            inputs: inputs.to_vec(),
            direction,
            output: output.to_path_buf(),
        });
        tokio::fs::write(output, b"stitched").await?;
        Ok(())
    }

    async fn validate(&self) -> Result<(), StitchError> {
        Ok(())
    }
}
