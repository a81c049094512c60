//! Trait definitions for metadata writers.

use async_trait::async_trait;
use chrono::NaiveDateTime;
use std::path::Path;

use super::error::WriterError;

/// A collaborator that rewrites a file's capture timestamps in place.
///
/// The on-the-wire timestamp syntax belongs to the implementation; callers
/// only pass the value.
#[async_trait]
pub trait MetadataWriter: Send + Sync {
    /// Returns the name of this writer implementation.
    fn name(&self) -> &str;

    /// Sets every date tag of the file at `path` to `timestamp`.
    async fn set_timestamp(&self, path: &Path, timestamp: NaiveDateTime)
        -> Result<(), WriterError>;

    /// Validates that the writer is properly configured and ready.
    async fn validate(&self) -> Result<(), WriterError>;
}
