//! Types for the stitcher module.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which way images are joined.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StitchDirection {
    /// Left to right.
    #[default]
    Horizontal,
    /// Top to bottom.
    Vertical,
}

impl StitchDirection {
    /// ImageMagick append operator.
    pub fn magick_flag(&self) -> &'static str {
        match self {
            StitchDirection::Horizontal => "+append",
            StitchDirection::Vertical => "-append",
        }
    }
}

impl fmt::Display for StitchDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StitchDirection::Horizontal => write!(f, "horizontal"),
            StitchDirection::Vertical => write!(f, "vertical"),
        }
    }
}

impl FromStr for StitchDirection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "horizontal" | "h" => Ok(StitchDirection::Horizontal),
            "vertical" | "v" => Ok(StitchDirection::Vertical),
            other => Err(format!(
                "unknown direction: {} (expected horizontal or vertical)",
                other
            )),
        }
    }
}
