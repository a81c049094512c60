//! ImageMagick-based converter implementation.

use async_trait::async_trait;

use super::config::ConverterConfig;
use super::error::ConverterError;
use super::tool::run_converter;
use super::traits::Converter;
use super::types::{ConversionJob, ConverterBackend};
use crate::config::ToolsConfig;
use crate::process::{probe_tool, ToolCommand};

/// Converter backed by ImageMagick's `magick`, which picks the output
/// format from the output file extension.
pub struct MagickConverter {
    config: ConverterConfig,
}

impl MagickConverter {
    /// Creates a new magick converter with the given configuration.
    pub fn new(config: ConverterConfig) -> Self {
        Self { config }
    }

    /// Creates a converter with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(ConverterConfig::from_tools(
            ConverterBackend::Magick,
            &ToolsConfig::default(),
        ))
    }

    /// Builds `magick <input> <output>`.
    fn build_command(&self, job: &ConversionJob) -> ToolCommand {
        ToolCommand::new(&self.config.program)
            .path_arg(&job.input_path)
            .path_arg(&job.output_path)
    }
}

#[async_trait]
impl Converter for MagickConverter {
    fn name(&self) -> &str {
        "magick"
    }

    async fn convert(&self, job: &ConversionJob) -> Result<(), ConverterError> {
        run_converter(&self.build_command(job), self.config.timeout_secs).await
    }

    async fn validate(&self) -> Result<(), ConverterError> {
        probe_tool(&ToolCommand::new(&self.config.program).arg("-version")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::TargetFormat;
    use std::path::PathBuf;

    #[test]
    fn test_build_command() {
        let converter = MagickConverter::with_defaults();
        let job = ConversionJob {
            input_path: PathBuf::from("/in/a.png"),
            output_path: PathBuf::from("/in/a.jpg"),
            format: TargetFormat::Jpeg,
        };
        let command = converter.build_command(&job);
        assert_eq!(command.program, PathBuf::from("magick"));
        assert_eq!(command.args, vec!["/in/a.png", "/in/a.jpg"]);
    }

    #[tokio::test]
    async fn test_validate_missing_binary() {
        let converter = MagickConverter::new(
            ConverterConfig::default().with_program(PathBuf::from("/nonexistent/magick")),
        );
        let err = converter.validate().await.unwrap_err();
        assert!(matches!(err, ConverterError::ToolNotFound { .. }));
    }
}
