use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::converter::{ConverterBackend, TargetFormat};
use crate::media::OrderingRule;
use crate::stitcher::StitchDirection;

/// Root configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub tools: ToolsConfig,
    #[serde(default)]
    pub convert: ConvertConfig,
    #[serde(default)]
    pub time: TimeConfig,
    #[serde(default)]
    pub stitch: StitchConfig,
}

/// Locations of the external tools
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ToolsConfig {
    /// Path to the macOS `sips` binary.
    #[serde(default = "default_sips_path")]
    pub sips_path: PathBuf,
    /// Path to the ImageMagick `magick` binary.
    #[serde(default = "default_magick_path")]
    pub magick_path: PathBuf,
    /// Path to the `exiftool` binary.
    #[serde(default = "default_exiftool_path")]
    pub exiftool_path: PathBuf,
    /// Per-invocation timeout in seconds. Unset means wait forever.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            sips_path: default_sips_path(),
            magick_path: default_magick_path(),
            exiftool_path: default_exiftool_path(),
            timeout_secs: None,
        }
    }
}

fn default_sips_path() -> PathBuf {
    PathBuf::from("/usr/bin/sips")
}

fn default_magick_path() -> PathBuf {
    PathBuf::from("magick")
}

fn default_exiftool_path() -> PathBuf {
    PathBuf::from("exiftool")
}

/// `convert` command configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ConvertConfig {
    #[serde(default)]
    pub backend: ConverterBackend,
    #[serde(default)]
    pub target_format: TargetFormat,
    #[serde(default = "default_convert_extensions")]
    pub extensions: Vec<String>,
    /// Worker count. Unset means one per available CPU.
    #[serde(default)]
    pub threads: Option<usize>,
    /// Keep source files after a verified conversion.
    #[serde(default)]
    pub preserve_originals: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            backend: ConverterBackend::default(),
            target_format: TargetFormat::default(),
            extensions: default_convert_extensions(),
            threads: None,
            preserve_originals: false,
        }
    }
}

fn default_convert_extensions() -> Vec<String> {
    vec!["jpg".to_string(), "jpeg".to_string(), "png".to_string()]
}

/// `time` command configuration
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TimeConfig {
    #[serde(default = "default_time_extensions")]
    pub extensions: Vec<String>,
    #[serde(default = "default_step_secs")]
    pub step_secs: u32,
    #[serde(default = "default_time_ordering")]
    pub ordering: OrderingRule,
}

impl Default for TimeConfig {
    fn default() -> Self {
        Self {
            extensions: default_time_extensions(),
            step_secs: default_step_secs(),
            ordering: default_time_ordering(),
        }
    }
}

fn default_time_extensions() -> Vec<String> {
    ["jpg", "jpeg", "png", "heic", "tiff"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_step_secs() -> u32 {
    1
}

fn default_time_ordering() -> OrderingRule {
    OrderingRule::NumericSuffix
}

/// `append` command configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StitchConfig {
    #[serde(default)]
    pub direction: StitchDirection,
    /// Where stitched output goes when the inputs live in different
    /// directories. Unset means `$HOME/Desktop`.
    #[serde(default)]
    pub fallback_dir: Option<PathBuf>,
}

impl StitchConfig {
    /// Resolves the fallback output directory.
    pub fn resolved_fallback_dir(&self) -> PathBuf {
        if let Some(dir) = &self.fallback_dir {
            return dir.clone();
        }
        std::env::var_os("HOME")
            .map(|home| PathBuf::from(home).join("Desktop"))
            .unwrap_or_else(|| PathBuf::from("."))
    }
}
