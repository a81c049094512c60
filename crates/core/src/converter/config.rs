//! Configuration for the converter module.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Arc;

use super::magick::MagickConverter;
use super::sips::SipsConverter;
use super::traits::Converter;
use super::types::ConverterBackend;
use crate::config::ToolsConfig;

/// Configuration for a tool-backed converter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConverterConfig {
    /// Which tool performs conversions.
    #[serde(default)]
    pub backend: ConverterBackend,

    /// Path to the tool binary.
    pub program: PathBuf,

    /// Timeout for a single conversion in seconds. Unset means no limit.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::from_tools(ConverterBackend::default(), &ToolsConfig::default())
    }
}

impl ConverterConfig {
    /// Picks the binary for `backend` out of the tools section.
    pub fn from_tools(backend: ConverterBackend, tools: &ToolsConfig) -> Self {
        let program = match backend {
            ConverterBackend::Sips => tools.sips_path.clone(),
            ConverterBackend::Magick => tools.magick_path.clone(),
        };
        Self {
            backend,
            program,
            timeout_secs: tools.timeout_secs,
        }
    }

    /// Sets the binary path.
    pub fn with_program(mut self, program: PathBuf) -> Self {
        self.program = program;
        self
    }

    /// Sets the timeout in seconds.
    pub fn with_timeout(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = Some(timeout_secs);
        self
    }
}

/// Builds the converter selected by `config.backend`.
pub fn create_converter(config: &ConverterConfig) -> Arc<dyn Converter> {
    match config.backend {
        ConverterBackend::Sips => Arc::new(SipsConverter::new(config.clone())),
        ConverterBackend::Magick => Arc::new(MagickConverter::new(config.clone())),
    }
}
