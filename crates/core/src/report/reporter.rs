//! Reporter sinks.

use tracing::{error, info, warn};

use super::types::{ItemOutcome, OutcomeStatus, RunSummary};

/// Side-effecting sink for run progress. Implementations must not fail.
pub trait RunReporter: Send + Sync {
    /// Called once before any item is processed.
    fn run_started(&self, operation: &str, total: usize, detail: &str);

    /// Called after each item, with the number of items done so far.
    fn item_finished(&self, outcome: &ItemOutcome, completed: usize, total: usize);

    /// Called once with the final summary, even when every item failed.
    fn run_finished(&self, summary: &RunSummary);
}

/// Reports through `tracing` events.
#[derive(Debug, Default, Clone)]
pub struct TracingReporter;

impl RunReporter for TracingReporter {
    fn run_started(&self, operation: &str, total: usize, detail: &str) {
        info!("Starting {} of {} items ({})", operation, total, detail);
    }

    fn item_finished(&self, outcome: &ItemOutcome, completed: usize, total: usize) {
        let path = outcome.item.path.display();
        match outcome.status {
            OutcomeStatus::Succeeded => match (&outcome.output_path, &outcome.timestamp) {
                (Some(output), _) => info!(
                    "Converted ({}/{}): {} -> {}",
                    completed,
                    total,
                    path,
                    output.display()
                ),
                (None, Some(ts)) => info!(
                    "Updated ({}/{}): {} at {}",
                    completed,
                    total,
                    outcome.item.file_name(),
                    ts
                ),
                (None, None) => info!("Done ({}/{}): {}", completed, total, path),
            },
            OutcomeStatus::Skipped => {
                info!("Skipped ({}/{}): {} already in target format", completed, total, path)
            }
            OutcomeStatus::Failed => error!(
                "Failed ({}/{}): {}\n  error: {}",
                completed,
                total,
                path,
                outcome.error.as_deref().unwrap_or("unknown error")
            ),
        }
    }

    fn run_finished(&self, summary: &RunSummary) {
        if summary.all_succeeded() {
            info!("{}", summary);
        } else {
            warn!("{}", summary);
        }
    }
}
