//! `sips`-based converter implementation.

use async_trait::async_trait;

use super::config::ConverterConfig;
use super::error::ConverterError;
use super::tool::run_converter;
use super::traits::Converter;
use super::types::ConversionJob;
use crate::process::{probe_tool, ToolCommand};

/// Converter backed by macOS `sips`.
pub struct SipsConverter {
    config: ConverterConfig,
}

impl SipsConverter {
    /// Creates a new sips converter with the given configuration.
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Creates a converter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::default())
    }

    /// Builds `sips -s format <fmt> <input> --out <output>`.
    fn build_command(&self, job: &ConversionJob) -> ToolCommand {
        ToolCommand::new(&self.config.program)
            .args(["-s", "format", job.format.tool_name()])
            .path_arg(&job.input_path)
            .arg("--out")
            .path_arg(&job.output_path)
    }
}

#[async_trait]
impl Converter for SipsConverter {
    fn name(&self) -> &str {
        "sips"
    }

    async fn convert(&self, job: &ConversionJob) -> Result<(), ConverterError> {
        run_converter(&self.build_command(job), self.config.timeout_secs).await
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        probe_tool(&ToolCommand::new(&self.config.program).arg("--help")).await?;
        Ok(())
    }
}
