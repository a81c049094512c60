//! Media discovery: path classification, filtering, and ordering.
//!
//! A run starts by classifying the input path once into a [`PathKind`], then
//! discovering the eligible [`MediaItem`]s below it. The returned sequence is
//! always sorted by the filter's [`OrderingRule`], so downstream stages see
//! the same order no matter how the filesystem enumerates entries.
//!
//! # Example
//!
//! ```ignore
//! use fxphoto_core::media::{classify, discover, DiscoveryFilter, OrderingRule};
//!
//! let kind = classify(Path::new("~/Pictures/trip"))?;
//! let filter = DiscoveryFilter::new(["jpg", "png"], OrderingRule::NumericSuffix);
//! for item in discover(&kind, &filter) {
//!     println!("{}", item.path.display());
//! }
//! ```

mod classify;
mod discover;
mod error;
mod types;

pub use classify::{classify, PathKind};
pub use discover::discover;
pub use error::DiscoveryError;
pub use types::{DiscoveryFilter, MediaItem, OrderingRule};
