//! Converter module for changing image formats.
//!
//! This module provides the `Converter` trait and implementations that shell
//! out to an external tool. The orchestrator never touches image bytes; it
//! only hands paths to the tool and checks the result.
//!
//! # Backends
//!
//! - `sips`: the macOS scriptable image processing system
//! - `magick`: ImageMagick 7
//!
//! # Example
//!
//! ```ignore
//! use fxphoto_core::converter::{Converter, ConversionJob, SipsConverter, TargetFormat};
//!
//! let converter = SipsConverter::with_defaults();
//! converter.validate().await?;
//!
//! let input = PathBuf::from("/photos/IMG-1.jpg");
//! let job = ConversionJob {
//!     output_path: TargetFormat::Heic.output_path_for(&input),
//!     input_path: input,
//!     format: TargetFormat::Heic,
//! };
//! converter.convert(&job).await?;
//! ```

mod config;
mod error;
mod magick;
mod output;
mod sips;
mod tool;
mod traits;
mod types;

pub use config::{create_converter, ConverterConfig};
pub use error::ConverterError;
pub use magick::MagickConverter;
pub use output::OutputClaims;
pub use sips::SipsConverter;
pub use traits::Converter;
pub use types::{ConversionJob, ConverterBackend, TargetFormat};
