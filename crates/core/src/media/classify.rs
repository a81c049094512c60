//! Path classification.

use std::path::{Path, PathBuf};

use super::error::DiscoveryError;

/// What an input path points at. Paths are absolute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathKind {
    SingleFile(PathBuf),
    Directory(PathBuf),
}

impl PathKind {
    /// The classified path.
    pub fn path(&self) -> &Path {
        match self {
            PathKind::SingleFile(path) | PathKind::Directory(path) => path,
        }
    }
}

/// Classifies `path` as a single file or a directory.
///
/// Symlinks are resolved. A missing path is fatal for the run.
pub fn classify(path: &Path) -> Result<PathKind, DiscoveryError> {
    let resolved = std::fs::canonicalize(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            DiscoveryError::PathNotFound {
                path: path.to_path_buf(),
            }
        } else {
            DiscoveryError::Io {
                path: path.to_path_buf(),
                source: e,
            }
        }
    })?;

    let metadata = std::fs::metadata(&resolved).map_err(|e| DiscoveryError::Io {
        path: resolved.clone(),
        source: e,
    })?;

    if metadata.is_dir() {
        Ok(PathKind::Directory(resolved))
    } else if metadata.is_file() {
        Ok(PathKind::SingleFile(resolved))
    } else {
        Err(DiscoveryError::UnsupportedEntry { path: resolved })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_classify_directory() {
        let dir = TempDir::new().unwrap();
        let kind = classify(dir.path()).unwrap();
        assert!(matches!(kind, PathKind::Directory(_)));
        assert!(kind.path().is_absolute());
    }

    #[test]
    fn test_classify_file() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("a.jpg");
        std::fs::write(&file, b"x").unwrap();

        let kind = classify(&file).unwrap();
        assert!(matches!(kind, PathKind::SingleFile(_)));
        assert_eq!(kind.path().file_name().unwrap(), "a.jpg");
    }

    #[test]
    fn test_classify_missing_path() {
        let dir = TempDir::new().unwrap();
        let err = classify(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, DiscoveryError::PathNotFound { .. }));
    }
}
