//! Testing utilities and mock implementations.
//!
//! Mocks stand in for the external tools so runs can be exercised end to
//! end against a temporary directory.
//!
//! # Example
//!
//! ```rust,ignore
//! use fxphoto_core::testing::{CapturingReporter, MockConverter};
//!
//! let converter = MockConverter::new()
//!     .fail_on("/photos/broken.jpg")
//!     .with_delay(Duration::from_millis(20));
//! let reporter = CapturingReporter::new();
//!
//! // Hand Arc::new(converter.clone()) to a dispatcher, then:
//! assert_eq!(converter.max_in_flight(), 2);
//! ```

mod mock_converter;
mod mock_reporter;
mod mock_stitcher;
mod mock_writer;

pub use mock_converter::MockConverter;
pub use mock_reporter::{CapturingReporter, ReportedEvent};
pub use mock_stitcher::{MockStitcher, RecordedStitch};
pub use mock_writer::MockMetadataWriter;

/// Test fixtures and helper functions.
pub mod fixtures {
    use std::path::{Path, PathBuf};

    use crate::media::MediaItem;

    /// Writes a small placeholder file, creating parent directories.
    pub fn touch(dir: &Path, rel: &str) -> PathBuf {
        let path = dir.join(rel);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("create fixture directory");
        }
        std::fs::write(&path, b"fixture").expect("write fixture file");
        path
    }

    /// A media item for a path that need not exist.
    pub fn media_item(path: impl Into<PathBuf>) -> MediaItem {
        MediaItem::from_path(path).expect("fixture path has a file name")
    }
}
