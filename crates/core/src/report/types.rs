//! Types for the report module.

use chrono::NaiveDateTime;
use serde::Serialize;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;

use crate::media::MediaItem;

/// How a single item ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OutcomeStatus {
    Succeeded,
    /// Nothing to do, e.g. the file is already in the target format.
    Skipped,
    Failed,
}

/// Outcome of processing one item.
#[derive(Debug, Clone, Serialize)]
pub struct ItemOutcome {
    /// Position of the item in the discovered sequence.
    pub index: usize,
    pub item: MediaItem,
    pub status: OutcomeStatus,
    /// Failure message, including the tool's diagnostic text verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub elapsed_ms: u64,
    /// Converted file, for conversions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_path: Option<PathBuf>,
    /// Timestamp assigned, for timestamp runs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<NaiveDateTime>,
}

impl ItemOutcome {
    pub fn succeeded(index: usize, item: MediaItem, elapsed: Duration) -> Self {
        Self::new(index, item, OutcomeStatus::Succeeded, None, elapsed)
    }

    pub fn skipped(index: usize, item: MediaItem) -> Self {
        Self::new(index, item, OutcomeStatus::Skipped, None, Duration::ZERO)
    }

    pub fn failed(
        index: usize,
        item: MediaItem,
        error: impl Into<String>,
        elapsed: Duration,
    ) -> Self {
        Self::new(
            index,
            item,
            OutcomeStatus::Failed,
            Some(error.into()),
            elapsed,
        )
    }

    fn new(
        index: usize,
        item: MediaItem,
        status: OutcomeStatus,
        error: Option<String>,
        elapsed: Duration,
    ) -> Self {
        Self {
            index,
            item,
            status,
            error,
            elapsed_ms: elapsed.as_millis() as u64,
            output_path: None,
            timestamp: None,
        }
    }

    pub fn with_output_path(mut self, path: PathBuf) -> Self {
        self.output_path = Some(path);
        self
    }

    pub fn with_timestamp(mut self, timestamp: NaiveDateTime) -> Self {
        self.timestamp = Some(timestamp);
        self
    }
}

/// A failed item, as listed in the summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ItemFailure {
    pub path: PathBuf,
    pub message: String,
}

/// Aggregate outcome record for one batch invocation.
#[derive(Debug, Clone, Serialize)]
pub struct RunSummary {
    /// What the run did, e.g. "convert".
    pub operation: String,
    pub total: usize,
    pub succeeded: usize,
    pub skipped: usize,
    pub failed: usize,
    pub elapsed_ms: u64,
    pub failures: Vec<ItemFailure>,
    pub outcomes: Vec<ItemOutcome>,
}

impl RunSummary {
    /// Creates an empty summary for `total` items.
    pub fn new(operation: impl Into<String>, total: usize) -> Self {
        Self {
            operation: operation.into(),
            total,
            succeeded: 0,
            skipped: 0,
            failed: 0,
            elapsed_ms: 0,
            failures: Vec::new(),
            outcomes: Vec::with_capacity(total),
        }
    }

    /// Adds one item outcome.
    pub fn record(&mut self, outcome: ItemOutcome) {
        match outcome.status {
            OutcomeStatus::Succeeded => self.succeeded += 1,
            OutcomeStatus::Skipped => self.skipped += 1,
            OutcomeStatus::Failed => {
                self.failed += 1;
                self.failures.push(ItemFailure {
                    path: outcome.item.path.clone(),
                    message: outcome.error.clone().unwrap_or_default(),
                });
            }
        }
        self.outcomes.push(outcome);
    }

    /// Number of outcomes recorded so far.
    pub fn completed(&self) -> usize {
        self.succeeded + self.skipped + self.failed
    }

    /// Stamps the elapsed time and puts outcomes back in sequence order.
    pub fn finish(mut self, elapsed: Duration) -> Self {
        self.elapsed_ms = elapsed.as_millis() as u64;
        self.outcomes.sort_by_key(|o| o.index);
        self.failures = self
            .outcomes
            .iter()
            .filter(|o| o.status == OutcomeStatus::Failed)
            .map(|o| ItemFailure {
                path: o.item.path.clone(),
                message: o.error.clone().unwrap_or_default(),
            })
            .collect();
        self
    }

    pub fn elapsed(&self) -> Duration {
        Duration::from_millis(self.elapsed_ms)
    }

    pub fn all_succeeded(&self) -> bool {
        self.failed == 0
    }
}

impl fmt::Display for RunSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} finished: {} items, {} succeeded, {} skipped, {} failed in {:.2}s",
            self.operation,
            self.total,
            self.succeeded,
            self.skipped,
            self.failed,
            self.elapsed().as_secs_f64()
        )
    }
}
