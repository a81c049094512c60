//! Sequential timestamp assignment.
//!
//! Items are processed strictly one after another on the calling task. Item
//! `i` of the ordered sequence always receives `base + i * step`, whether or
//! not earlier items failed, so the written timestamps are strictly
//! increasing and never duplicated.
//!
//! # Example
//!
//! ```ignore
//! use fxphoto_core::timestamp::{parse_base_datetime, ExiftoolWriter, TimestampAssigner, TimestampPlan};
//!
//! let base = parse_base_datetime("2024-05-01 09:30:00")?;
//! let plan = TimestampPlan::new(base, 1)?;
//! let assigner = TimestampAssigner::new(Arc::new(ExiftoolWriter::with_defaults()), reporter);
//! let summary = assigner.assign(items, &plan).await?;
//! ```

mod assigner;
mod error;
mod exiftool;
mod plan;
mod writer;

pub use assigner::TimestampAssigner;
pub use error::{TimestampError, WriterError};
pub use exiftool::ExiftoolWriter;
pub use plan::{parse_base_datetime, TimestampPlan, INPUT_DATETIME_FORMAT};
pub use writer::MetadataWriter;
