//! Image stitching.
//!
//! Joins two or more images side by side or top to bottom through an
//! external tool. Inputs that are not HEIC yet are converted first (their
//! originals are kept) so the stitched result is always HEIC.

mod error;
mod magick;
mod planner;
mod traits;
mod types;

pub use error::StitchError;
pub use magick::MagickStitcher;
pub use planner::StitchPlanner;
pub use traits::Stitcher;
pub use types::StitchDirection;
