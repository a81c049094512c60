//! Run reporting.
//!
//! Components do not log run progress through a global; they receive a
//! [`RunReporter`] handle and call it as items finish. [`TracingReporter`]
//! is the production sink, `testing::CapturingReporter` records calls for
//! assertions.

mod reporter;
mod types;

pub use reporter::{RunReporter, TracingReporter};
pub use types::{ItemFailure, ItemOutcome, OutcomeStatus, RunSummary};
