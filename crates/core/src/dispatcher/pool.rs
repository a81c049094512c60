//! Bounded conversion pool.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::Semaphore;
use tracing::{debug, warn};

use crate::converter::{ConversionJob, Converter, ConverterError, TargetFormat};
use crate::media::MediaItem;
use crate::report::{ItemOutcome, RunReporter, RunSummary};

use super::config::DispatchConfig;
use super::error::DispatchError;
use super::plan::{plan_conversions, PlannedConversion};

/// Drives per-file conversions across a bounded worker pool.
pub struct ConversionDispatcher {
    converter: Arc<dyn Converter>,
    reporter: Arc<dyn RunReporter>,
    concurrency: usize,
    preserve_originals: bool,
}

/// State shared by every task of one run.
struct RunContext {
    converter: Arc<dyn Converter>,
    reporter: Arc<dyn RunReporter>,
    semaphore: Arc<Semaphore>,
    completed: AtomicUsize,
    total: usize,
    preserve_originals: bool,
}

impl RunContext {
    fn report(&self, outcome: &ItemOutcome) {
        let completed = self.completed.fetch_add(1, Ordering::SeqCst) + 1;
        self.reporter.item_finished(outcome, completed, self.total);
    }
}

impl ConversionDispatcher {
    /// Creates a dispatcher. Fails when the configured concurrency is 0.
    pub fn new(
        config: DispatchConfig,
        converter: Arc<dyn Converter>,
        reporter: Arc<dyn RunReporter>,
    ) -> Result<Self, DispatchError> {
        let concurrency = config.resolve_concurrency()?;
        Ok(Self {
            converter,
            reporter,
            concurrency,
            preserve_originals: config.preserve_originals,
        })
    }

    /// Number of conversions allowed in flight.
    pub fn concurrency(&self) -> usize {
        self.concurrency
    }

    /// Converts every item to `format` and waits for all of them.
    ///
    /// Tasks run in no particular order. The summary lists outcomes in
    /// sequence order.
    pub async fn convert_all(&self, items: Vec<MediaItem>, format: TargetFormat) -> RunSummary {
        let start = Instant::now();
        let total = items.len();
        let mut summary = RunSummary::new("convert", total);

        self.reporter.run_started(
            "convert",
            total,
            &format!(
                "target {}, {} workers, converter {}",
                format,
                self.concurrency,
                self.converter.name()
            ),
        );

        let ctx = Arc::new(RunContext {
            converter: Arc::clone(&self.converter),
            reporter: Arc::clone(&self.reporter),
            semaphore: Arc::new(Semaphore::new(self.concurrency.min(Semaphore::MAX_PERMITS))),
            completed: AtomicUsize::new(0),
            total,
            preserve_originals: self.preserve_originals,
        });

        let mut handles = Vec::with_capacity(total);
        for plan in plan_conversions(items, format) {
            match plan {
                PlannedConversion::AlreadyTarget { index, item } => {
                    let outcome = ItemOutcome::skipped(index, item);
                    ctx.report(&outcome);
                    summary.record(outcome);
                }
                PlannedConversion::Convert { index, item, job } => {
                    let task_ctx = Arc::clone(&ctx);
                    let task_item = item.clone();
                    let handle = tokio::spawn(async move {
                        let outcome = convert_one(&task_ctx, index, task_item, job).await;
                        task_ctx.report(&outcome);
                        outcome
                    });
                    handles.push((index, item, handle));
                }
            }
        }

        for (index, item, handle) in handles {
            match handle.await {
                Ok(outcome) => summary.record(outcome),
                Err(e) => {
                    warn!(path = %item.path.display(), "Conversion task did not finish: {}", e);
                    let outcome = ItemOutcome::failed(
                        index,
                        item,
                        format!("conversion task did not finish: {}", e),
                        start.elapsed(),
                    );
                    ctx.report(&outcome);
                    summary.record(outcome);
                }
            }
        }

        let summary = summary.finish(start.elapsed());
        self.reporter.run_finished(&summary);
        summary
    }
}

/// Converts one file, then verifies the output before touching the source.
async fn convert_one(
    ctx: &RunContext,
    index: usize,
    item: MediaItem,
    job: ConversionJob,
) -> ItemOutcome {
    let _permit = match ctx.semaphore.acquire().await {
        Ok(permit) => permit,
        Err(_) => {
            return ItemOutcome::failed(
                index,
                item,
                "conversion pool closed",
                std::time::Duration::ZERO,
            )
        }
    };
    let started = Instant::now();

    if let Err(e) = ctx.converter.convert(&job).await {
        return ItemOutcome::failed(index, item, e.to_string(), started.elapsed());
    }

    let output_exists = tokio::fs::metadata(&job.output_path)
        .await
        .map(|meta| meta.is_file())
        .unwrap_or(false);
    if !output_exists {
        let err = ConverterError::OutputMissing {
            path: job.output_path.clone(),
        };
        return ItemOutcome::failed(index, item, err.to_string(), started.elapsed());
    }

    if !ctx.preserve_originals && job.input_path != job.output_path {
        match tokio::fs::remove_file(&job.input_path).await {
            Ok(()) => debug!(path = %job.input_path.display(), "Removed source after conversion"),
            Err(e) => warn!(
                path = %job.input_path.display(),
                "Converted but failed to remove source: {}",
                e
            ),
        }
    }

    ItemOutcome::succeeded(index, item, started.elapsed()).with_output_path(job.output_path)
}
