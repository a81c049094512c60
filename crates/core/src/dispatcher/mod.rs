//! Conversion dispatcher.
//!
//! Runs one conversion task per discovered item across a bounded pool. A
//! semaphore caps the number of converter invocations in flight; every task
//! is joined before [`ConversionDispatcher::convert_all`] returns. Per-item
//! failures are collected into the [`RunSummary`](crate::report::RunSummary)
//! and never abort the batch.
//!
//! Source files are deleted only after the converter succeeded and the
//! output file was verified to exist.

mod config;
mod error;
mod plan;
mod pool;

pub use config::DispatchConfig;
pub use error::DispatchError;
pub use plan::{plan_conversions, PlannedConversion};
pub use pool::ConversionDispatcher;
