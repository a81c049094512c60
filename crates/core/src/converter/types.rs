//! Types for the converter module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

/// Image format a conversion produces.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetFormat {
    #[default]
    #[serde(alias = "heif")]
    Heic,
    #[serde(alias = "jpg")]
    Jpeg,
    Png,
    #[serde(alias = "tif")]
    Tiff,
}

impl TargetFormat {
    /// Canonical file extension for output files.
    pub fn extension(&self) -> &'static str {
        match self {
            TargetFormat::Heic => "heic",
            TargetFormat::Jpeg => "jpg",
            TargetFormat::Png => "png",
            TargetFormat::Tiff => "tiff",
        }
    }

    /// Every extension that already denotes this format.
    pub fn aliases(&self) -> &'static [&'static str] {
        match self {
            TargetFormat::Heic => &["heic", "heif"],
            TargetFormat::Jpeg => &["jpg", "jpeg"],
            TargetFormat::Png => &["png"],
            TargetFormat::Tiff => &["tiff", "tif"],
        }
    }

    /// Format name as the converter tools spell it.
    pub fn tool_name(&self) -> &'static str {
        match self {
            TargetFormat::Heic => "heic",
            TargetFormat::Jpeg => "jpeg",
            TargetFormat::Png => "png",
            TargetFormat::Tiff => "tiff",
        }
    }

    /// Whether a (lower-cased) extension is already in this format.
    pub fn matches_extension(&self, extension: &str) -> bool {
        self.aliases()
            .iter()
            .any(|alias| alias.eq_ignore_ascii_case(extension))
    }

    /// `input` with its extension replaced by the canonical one.
    pub fn output_path_for(&self, input: &Path) -> PathBuf {
        input.with_extension(self.extension())
    }
}

impl fmt::Display for TargetFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tool_name())
    }
}

impl FromStr for TargetFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim_start_matches('.').to_lowercase();
        [
            TargetFormat::Heic,
            TargetFormat::Jpeg,
            TargetFormat::Png,
            TargetFormat::Tiff,
        ]
        .into_iter()
        .find(|format| format.matches_extension(&lowered))
        .ok_or_else(|| format!("unsupported target format: {}", s))
    }
}

/// External tool that performs conversions.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConverterBackend {
    #[default]
    Sips,
    Magick,
}

impl FromStr for ConverterBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "sips" => Ok(ConverterBackend::Sips),
            "magick" | "imagemagick" => Ok(ConverterBackend::Magick),
            other => Err(format!("unknown converter backend: {}", other)),
        }
    }
}

/// A single file conversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionJob {
    /// Path to the input file.
    pub input_path: PathBuf,
    /// Path where the converted file should be written.
    pub output_path: PathBuf,
    /// Format to produce.
    pub format: TargetFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_replaces_extension() {
        let out = TargetFormat::Heic.output_path_for(Path::new("/photos/a b/IMG-1.JPG"));
        assert_eq!(out, PathBuf::from("/photos/a b/IMG-1.heic"));
    }

    #[test]
    fn test_matches_extension_aliases() {
        assert!(TargetFormat::Jpeg.matches_extension("jpeg"));
        assert!(TargetFormat::Jpeg.matches_extension("JPG"));
        assert!(TargetFormat::Heic.matches_extension("heif"));
        assert!(!TargetFormat::Heic.matches_extension("png"));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("HEIC".parse::<TargetFormat>().unwrap(), TargetFormat::Heic);
        assert_eq!(".jpg".parse::<TargetFormat>().unwrap(), TargetFormat::Jpeg);
        assert_eq!("tif".parse::<TargetFormat>().unwrap(), TargetFormat::Tiff);
        assert!("bmp".parse::<TargetFormat>().is_err());
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&TargetFormat::Jpeg).unwrap();
        assert_eq!(json, "\"jpeg\"");
        let parsed: TargetFormat = serde_json::from_str("\"jpg\"").unwrap();
        assert_eq!(parsed, TargetFormat::Jpeg);
        let backend: ConverterBackend = serde_json::from_str("\"magick\"").unwrap();
        assert_eq!(backend, ConverterBackend::Magick);
    }
}
