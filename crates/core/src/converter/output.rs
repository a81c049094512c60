//! Output path allocation.

use std::collections::HashSet;
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use tracing::warn;

use super::types::TargetFormat;

/// Hands out conversion output paths that never overwrite anything.
///
/// A path is taken when it was claimed earlier in the same run or when
/// something already exists there on disk. A converter therefore always
/// writes to a fresh path, and "the output exists" after a conversion means
/// the converter produced it.
#[derive(Debug, Default)]
pub struct OutputClaims {
    claimed: HashSet<PathBuf>,
}

impl OutputClaims {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserves `path` without allocating it, e.g. for an input of the run.
    pub fn claim(&mut self, path: impl Into<PathBuf>) {
        self.claimed.insert(path.into());
    }

    /// Whether `path` is claimed or occupied on disk.
    pub fn is_taken(&self, path: &Path) -> bool {
        self.claimed.contains(path) || std::fs::symlink_metadata(path).is_ok()
    }

    /// Picks and claims the output for converting `input` to `format`.
    ///
    /// Prefers the input with its extension swapped (`x.jpg` -> `x.heic`).
    /// When that is taken the source extension stays in the name
    /// (`x.jpg.heic`), then a counter is added (`x.jpg-2.heic`).
    pub fn allocate(&mut self, input: &Path, format: TargetFormat) -> PathBuf {
        let preferred = format.output_path_for(input);
        let output = if self.is_taken(&preferred) {
            let fallback = self.disambiguated(input, format);
            warn!(
                "{} would overwrite {}, writing {} instead",
                input.display(),
                preferred.display(),
                fallback.display()
            );
            fallback
        } else {
            preferred
        };
        self.claimed.insert(output.clone());
        output
    }

    fn disambiguated(&self, input: &Path, format: TargetFormat) -> PathBuf {
        let file_name = input.file_name().unwrap_or_default();
        let with_suffix = |suffix: &str| {
            let mut name = OsString::from(file_name);
            name.push(suffix);
            name.push(".");
            name.push(format.extension());
            input.with_file_name(name)
        };

        let candidate = with_suffix("");
        if !self.is_taken(&candidate) {
            return candidate;
        }
        (2u64..)
            .map(|n| with_suffix(&format!("-{}", n)))
            .find(|candidate| !self.is_taken(candidate))
            .unwrap_or(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_prefers_swapped_extension() {
        let dir = TempDir::new().unwrap();
        let mut claims = OutputClaims::new();
        let out = claims.allocate(&dir.path().join("a.jpg"), TargetFormat::Heic);
        assert_eq!(out, dir.path().join("a.heic"));
    }

    #[test]
    fn test_existing_file_is_never_reused() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x.heic"), b"keep me").unwrap();

        let mut claims = OutputClaims::new();
        let out = claims.allocate(&dir.path().join("x.jpg"), TargetFormat::Heic);
        assert_eq!(out, dir.path().join("x.jpg.heic"));
    }

    #[test]
    fn test_claims_within_a_run() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("x.jpg.heic"), b"").unwrap();

        let mut claims = OutputClaims::new();
        claims.claim(dir.path().join("x.heic"));
        let first = claims.allocate(&dir.path().join("x.jpg"), TargetFormat::Heic);
        let second = claims.allocate(&dir.path().join("x.jpg"), TargetFormat::Heic);

        assert_eq!(first, dir.path().join("x.jpg-2.heic"));
        assert_eq!(second, dir.path().join("x.jpg-3.heic"));
    }
}
