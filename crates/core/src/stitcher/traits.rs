//! Trait definitions for the stitcher module.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use super::error::StitchError;
use super::types::StitchDirection;

/// A collaborator that joins images into one output file.
#[async_trait]
pub trait Stitcher: Send + Sync {
    /// Returns the name of this stitcher implementation.
    fn name(&self) -> &str;

    /// Joins `inputs` in order and writes the result to `output`.
    async fn stitch(
        &self,
        inputs: &[PathBuf],
        direction: StitchDirection,
        output: &Path,
    ) -> Result<(), StitchError>;

    /// Validates that the stitcher is properly configured and ready.
    async fn validate(&self) -> Result<(), StitchError>;
}
