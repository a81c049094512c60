//! Error types for the dispatcher module.

use thiserror::Error;

/// Fatal errors raised before any conversion starts.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// Concurrency must be at least 1.
    #[error("Invalid concurrency: {0} (must be at least 1)")]
    InvalidConcurrency(usize),
}
