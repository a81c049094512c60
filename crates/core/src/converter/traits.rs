//! Trait definitions for the converter module.

use async_trait::async_trait;

use super::error::ConverterError;
use super::types::{ConversionJob, TargetFormat};

/// A converter that can change the format of an image file.
#[async_trait]
pub trait Converter: Send + Sync {
    /// Returns the name of this converter implementation.
    fn name(&self) -> &str;

    /// Converts `job.input_path` into `job.output_path`.
    ///
    /// Returns an error carrying the tool's diagnostic text on a nonzero
    /// exit. Verifying the output file is left to the caller.
    async fn convert(&self, job: &ConversionJob) -> Result<(), ConverterError>;

    /// Validates that the converter is properly configured and ready.
    async fn validate(&self) -> Result<(), ConverterError>;

    /// Returns the formats this converter can produce.
    fn supported_output_formats(&self) -> &[TargetFormat] {
        &[
            TargetFormat::Heic,
            TargetFormat::Jpeg,
            TargetFormat::Png,
            TargetFormat::Tiff,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    struct NoopConverter;

    #[async_trait]
    impl Converter for NoopConverter {
        fn name(&self) -> &str {
            "noop"
        }

        async fn convert(&self, _job: &ConversionJob) -> Result<(), ConverterError> {
            Ok(())
        }

        async fn validate(&self) -> Result<(), ConverterError> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_trait_object_convert() {
        let converter: Box<dyn Converter> = Box::new(NoopConverter);
        let job = ConversionJob {
            input_path: PathBuf::from("/test/input.jpg"),
            output_path: PathBuf::from("/test/input.heic"),
            format: TargetFormat::Heic,
        };
        assert!(converter.convert(&job).await.is_ok());
        assert_eq!(converter.name(), "noop");
    }

    #[test]
    fn test_supported_formats() {
        let converter = NoopConverter;
        assert!(converter
            .supported_output_formats()
            .contains(&TargetFormat::Heic));
    }
}
