//! Sequential timestamp assigner.

use chrono::NaiveDateTime;
use std::sync::Arc;
use std::time::Instant;
use tracing::debug;

use super::error::TimestampError;
use super::plan::TimestampPlan;
use super::writer::MetadataWriter;
use crate::media::MediaItem;
use crate::report::{ItemOutcome, RunReporter, RunSummary};

/// Walks an ordered item list and stamps each file through a
/// [`MetadataWriter`], one invocation at a time.
pub struct TimestampAssigner {
    writer: Arc<dyn MetadataWriter>,
    reporter: Arc<dyn RunReporter>,
}

impl TimestampAssigner {
    pub fn new(writer: Arc<dyn MetadataWriter>, reporter: Arc<dyn RunReporter>) -> Self {
        Self { writer, reporter }
    }

    /// Stamps `items[i]` with `plan.timestamp_for(i)`, in order.
    ///
    /// A failed write is recorded and the run moves on; the next item still
    /// gets its own slot in the sequence. Only an out-of-range plan is fatal,
    /// and that is checked before the first write.
    pub async fn assign(
        &self,
        items: Vec<MediaItem>,
        plan: &TimestampPlan,
    ) -> Result<RunSummary, TimestampError> {
        plan.validate_len(items.len())?;

        let start = Instant::now();
        let total = items.len();
        let mut summary = RunSummary::new("time", total);

        self.reporter.run_started(
            "time",
            total,
            &format!(
                "base {}, step {}s, writer {}",
                plan.base(),
                plan.step_secs(),
                self.writer.name()
            ),
        );

        for (index, item) in items.into_iter().enumerate() {
            let timestamp = plan.timestamp_for(index)?;
            let outcome = self.write_one(index, item, timestamp).await;
            self.reporter.item_finished(&outcome, index + 1, total);
            summary.record(outcome);
        }

        let summary = summary.finish(start.elapsed());
        self.reporter.run_finished(&summary);
        Ok(summary)
    }

    /// Stamps one file with exactly `base`.
    pub async fn assign_single(
        &self,
        item: MediaItem,
        base: NaiveDateTime,
    ) -> Result<RunSummary, TimestampError> {
        self.assign(vec![item], &TimestampPlan::single(base)).await
    }

    async fn write_one(
        &self,
        index: usize,
        item: MediaItem,
        timestamp: NaiveDateTime,
    ) -> ItemOutcome {
        let started = Instant::now();
        debug!(path = %item.path.display(), %timestamp, "Writing timestamp");

        match self.writer.set_timestamp(&item.path, timestamp).await {
            Ok(()) => ItemOutcome::succeeded(index, item, started.elapsed()),
            Err(e) => ItemOutcome::failed(index, item, e.to_string(), started.elapsed()),
        }
        .with_timestamp(timestamp)
    }
}
