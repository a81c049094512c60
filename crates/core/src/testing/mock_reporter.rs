//! Capturing reporter for testing.

use std::sync::{Arc, Mutex};

use crate::report::{ItemOutcome, OutcomeStatus, RunReporter, RunSummary};

/// One reporter callback, as captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportedEvent {
    Started { operation: String, total: usize },
    Item {
        index: usize,
        status: OutcomeStatus,
        completed: usize,
        total: usize,
    },
    Finished { succeeded: usize, skipped: usize, failed: usize },
}

/// Records every reporter callback in arrival order.
#[derive(Debug, Clone, Default)]
pub struct CapturingReporter {
    events: Arc<Mutex<Vec<ReportedEvent>>>,
}

impl CapturingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<ReportedEvent> {
        self.lock().clone()
    }

    /// `completed` counters of the item events, in arrival order.
    pub fn completed_counts(&self) -> Vec<usize> {
        self.lock()
            .iter()
            .filter_map(|event| match event {
                ReportedEvent::Item { completed, .. } => Some(*completed),
                _ => None,
            })
            .collect()
    }

    fn push(&self, event: ReportedEvent) {
        self.lock().push(event);
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<ReportedEvent>> {
        self.events
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl RunReporter for CapturingReporter {
    fn run_started(&self, operation: &str, total: usize, _detail: &str) {
        self.push(ReportedEvent::Started {
            operation: operation.to_string(),
            total,
        });
    }

    fn item_finished(&self, outcome: &ItemOutcome, completed: usize, total: usize) {
        self.push(ReportedEvent::Item {
            index: outcome.index,
            status: outcome.status,
            completed,
            total,
        });
    }

    fn run_finished(&self, summary: &RunSummary) {
        self.push(ReportedEvent::Finished {
            succeeded: summary.succeeded,
            skipped: summary.skipped,
            failed: summary.failed,
        });
    }
}
