//! Types for the media module.

use once_cell::sync::Lazy;
use regex_lite::Regex;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::collections::BTreeSet;
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Trailing `-<digits>` on a base name, e.g. `img-10`.
static SUFFIX_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(.*)-(\d+)$").expect("suffix pattern is valid"));

/// A single discovered file plus its parsed naming metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MediaItem {
    /// Absolute path to the file.
    pub path: PathBuf,
    /// File name without its extension.
    pub base_name: String,
    /// Lower-cased extension, empty when the file has none.
    pub extension: String,
    /// Base name with any trailing `-<digits>` removed.
    pub prefix: String,
    /// Parsed trailing number, 0 when absent.
    pub numeric_suffix: u64,
}

impl MediaItem {
    /// Builds an item from a file path. Returns `None` for paths without a
    /// file name component.
    pub fn from_path(path: impl Into<PathBuf>) -> Option<Self> {
        let path = path.into();
        let base_name = path.file_stem()?.to_string_lossy().to_string();
        let extension = path
            .extension()
            .map(|e| e.to_string_lossy().to_lowercase())
            .unwrap_or_default();
        let (prefix, numeric_suffix) = split_numeric_suffix(&base_name);

        Some(Self {
            path,
            base_name,
            extension,
            prefix,
            numeric_suffix,
        })
    }

    /// The file name including its extension.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default()
    }
}

/// Splits `img-10` into `("img", 10)`. Names without a suffix, or with one
/// too large for `u64`, keep the whole name as prefix and get 0.
fn split_numeric_suffix(base_name: &str) -> (String, u64) {
    if let Some(caps) = SUFFIX_PATTERN.captures(base_name) {
        if let (Some(prefix), Some(digits)) = (caps.get(1), caps.get(2)) {
            if let Ok(n) = digits.as_str().parse::<u64>() {
                return (prefix.as_str().to_string(), n);
            }
        }
    }
    (base_name.to_string(), 0)
}

/// Comparator used to produce a deterministic processing sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderingRule {
    /// Lexicographic by file name.
    #[default]
    Name,
    /// By prefix, then by the numeric suffix compared as an integer.
    NumericSuffix,
}

impl OrderingRule {
    /// Total order over items. Ties fall back to file name, then path.
    pub fn compare(&self, a: &MediaItem, b: &MediaItem) -> Ordering {
        let primary = match self {
            OrderingRule::Name => Ordering::Equal,
            OrderingRule::NumericSuffix => a
                .prefix
                .cmp(&b.prefix)
                .then(a.numeric_suffix.cmp(&b.numeric_suffix)),
        };
        primary
            .then_with(|| a.file_name().cmp(&b.file_name()))
            .then_with(|| a.path.cmp(&b.path))
    }

    /// Sorts items in place.
    pub fn sort(&self, items: &mut [MediaItem]) {
        items.sort_by(|a, b| self.compare(a, b));
    }
}

impl fmt::Display for OrderingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderingRule::Name => write!(f, "name"),
            OrderingRule::NumericSuffix => write!(f, "numeric_suffix"),
        }
    }
}

impl FromStr for OrderingRule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "name" => Ok(OrderingRule::Name),
            "numeric_suffix" | "numeric" => Ok(OrderingRule::NumericSuffix),
            other => Err(format!("unknown ordering rule: {}", other)),
        }
    }
}

/// Accepted extensions plus the ordering applied to discovered items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryFilter {
    extensions: BTreeSet<String>,
    ordering: OrderingRule,
}

impl DiscoveryFilter {
    /// Creates a filter. Extensions are matched case-insensitively and may be
    /// given with or without a leading dot.
    pub fn new<I, S>(extensions: I, ordering: OrderingRule) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let extensions = extensions
            .into_iter()
            .map(|e| e.as_ref().trim_start_matches('.').to_lowercase())
            .filter(|e| !e.is_empty())
            .collect();
        Self {
            extensions,
            ordering,
        }
    }

    /// Returns the ordering rule.
    pub fn ordering(&self) -> OrderingRule {
        self.ordering
    }

    /// Whether the file at `path` has an accepted extension.
    pub fn accepts(&self, path: &Path) -> bool {
        path.extension()
            .map(|e| self.extensions.contains(&e.to_string_lossy().to_lowercase()))
            .unwrap_or(false)
    }
}
