//! File discovery.

use tracing::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use super::classify::PathKind;
use super::types::{DiscoveryFilter, MediaItem};

/// Collects the eligible files under `root`, sorted per the filter's
/// ordering rule.
///
/// A single file yields at most one item; a non-matching file yields an
/// empty sequence rather than an error. Directories are walked recursively,
/// skipping dot-hidden entries below the root. Unreadable entries are logged
/// and skipped. Discovery has no side effects and can be re-run.
pub fn discover(root: &PathKind, filter: &DiscoveryFilter) -> Vec<MediaItem> {
    let mut items = match root {
        PathKind::SingleFile(path) => {
            if filter.accepts(path) {
                MediaItem::from_path(path.clone()).into_iter().collect()
            } else {
                debug!(path = %path.display(), "File extension not accepted");
                Vec::new()
            }
        }
        PathKind::Directory(dir) => WalkDir::new(dir)
            .into_iter()
            .filter_entry(|entry| entry.depth() == 0 || !is_hidden(entry))
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    warn!("Skipping unreadable entry: {}", e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file() && filter.accepts(entry.path()))
            .filter_map(|entry| MediaItem::from_path(entry.into_path()))
            .collect(),
    };

    filter.ordering().sort(&mut items);
    debug!(
        root = %root.path().display(),
        count = items.len(),
        ordering = %filter.ordering(),
        "Discovery finished"
    );
    items
}

fn is_hidden(entry: &DirEntry) -> bool {
    entry
        .file_name()
        .to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::media::{classify, OrderingRule};
    use std::fs;
    use tempfile::TempDir;

    fn touch(dir: &TempDir, rel: &str) {
        let path = dir.path().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, b"data").unwrap();
    }

    #[test]
    fn test_discover_recursive_with_filter() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "x.jpg");
        touch(&dir, "x.png");
        touch(&dir, "notes.txt");
        touch(&dir, "nested/deeper/y.JPEG");

        let filter = DiscoveryFilter::new(["jpg", "jpeg", "png"], OrderingRule::Name);
        let items = discover(&classify(dir.path()).unwrap(), &filter);

        let names: Vec<_> = items.iter().map(|i| i.file_name()).collect();
        assert_eq!(names, vec!["x.jpg", "x.png", "y.JPEG"]);
        assert!(items.iter().all(|i| i.path.is_absolute()));
    }

    #[test]
    fn test_discover_skips_hidden_entries() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "visible.jpg");
        touch(&dir, ".hidden.jpg");
        touch(&dir, ".cache/inner.jpg");

        let filter = DiscoveryFilter::new(["jpg"], OrderingRule::Name);
        let items = discover(&classify(dir.path()).unwrap(), &filter);

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].file_name(), "visible.jpg");
    }

    #[test]
    fn test_discover_single_file() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "one.png");
        touch(&dir, "two.txt");
        let filter = DiscoveryFilter::new(["png"], OrderingRule::Name);

        let hit = discover(&classify(&dir.path().join("one.png")).unwrap(), &filter);
        assert_eq!(hit.len(), 1);

        let miss = discover(&classify(&dir.path().join("two.txt")).unwrap(), &filter);
        assert!(miss.is_empty());
    }

    #[test]
    fn test_discover_numeric_suffix_order() {
        let dir = TempDir::new().unwrap();
        for name in ["a-2.jpg", "a-10.jpg", "a-1.jpg"] {
            touch(&dir, name);
        }

        let filter = DiscoveryFilter::new(["jpg"], OrderingRule::NumericSuffix);
        let items = discover(&classify(dir.path()).unwrap(), &filter);
        let names: Vec<_> = items.iter().map(|i| i.base_name.as_str()).collect();
        assert_eq!(names, vec!["a-1", "a-2", "a-10"]);
    }

    #[test]
    fn test_discover_is_restartable() {
        let dir = TempDir::new().unwrap();
        touch(&dir, "b.jpg");
        touch(&dir, "a.jpg");
        let kind = classify(dir.path()).unwrap();
        let filter = DiscoveryFilter::new(["jpg"], OrderingRule::Name);

        assert_eq!(discover(&kind, &filter), discover(&kind, &filter));
    }
}
