//! Stitch planning: input checks, HEIC preparation and output naming.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing::{debug, info};

use super::error::StitchError;
use super::traits::Stitcher;
use super::types::StitchDirection;
use crate::converter::{ConversionJob, Converter, ConverterError, OutputClaims, TargetFormat};

/// Prepares inputs for a [`Stitcher`] and decides where the result goes.
pub struct StitchPlanner {
    converter: Arc<dyn Converter>,
    stitcher: Arc<dyn Stitcher>,
    fallback_dir: PathBuf,
}

impl StitchPlanner {
    pub fn new(
        converter: Arc<dyn Converter>,
        stitcher: Arc<dyn Stitcher>,
        fallback_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            converter,
            stitcher,
            fallback_dir: fallback_dir.into(),
        }
    }

    /// Stitches `paths` in the given order and returns the output path.
    ///
    /// Non-HEIC inputs are converted next to the original first; originals
    /// are never removed and no existing file is overwritten, so `a.jpg` and
    /// `a.png` become `a.heic` and `a.png.heic`. The output lands in the
    /// inputs' shared directory, or in the fallback directory when they live
    /// in different places, and is named after the input stems joined with
    /// `_`, plus a `-<n>` counter when that name is taken.
    pub async fn stitch_images(
        &self,
        paths: &[PathBuf],
        direction: StitchDirection,
    ) -> Result<PathBuf, StitchError> {
        if paths.len() < 2 {
            return Err(StitchError::TooFewInputs { count: paths.len() });
        }

        for path in paths {
            let is_file = tokio::fs::metadata(path)
                .await
                .map(|meta| meta.is_file())
                .unwrap_or(false);
            if !is_file {
                return Err(StitchError::PathNotFound { path: path.clone() });
            }
        }

        let mut claims = OutputClaims::new();
        for path in paths {
            claims.claim(path.clone());
        }

        let mut heic_paths = Vec::with_capacity(paths.len());
        for path in paths {
            heic_paths.push(self.ensure_heic(path, &mut claims).await?);
        }

        let output_dir = self.output_dir(&heic_paths);
        tokio::fs::create_dir_all(&output_dir).await?;
        let output = fresh_output(&output_dir, &output_stem(&heic_paths), &claims);

        info!(
            count = heic_paths.len(),
            direction = %direction,
            output = %output.display(),
            stitcher = self.stitcher.name(),
            "Stitching images"
        );
        self.stitcher.stitch(&heic_paths, direction, &output).await?;
        Ok(output)
    }

    async fn ensure_heic(
        &self,
        path: &Path,
        claims: &mut OutputClaims,
    ) -> Result<PathBuf, StitchError> {
        let is_heic = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| TargetFormat::Heic.matches_extension(ext))
            .unwrap_or(false);
        if is_heic {
            return Ok(path.to_path_buf());
        }

        let job = ConversionJob {
            input_path: path.to_path_buf(),
            output_path: claims.allocate(path, TargetFormat::Heic),
            format: TargetFormat::Heic,
        };
        debug!(input = %path.display(), "Converting stitch input to HEIC");

        let conversion_error = |source: ConverterError| StitchError::Conversion {
            path: path.to_path_buf(),
            source,
        };
        self.converter.convert(&job).await.map_err(conversion_error)?;

        let exists = tokio::fs::metadata(&job.output_path)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if !exists {
            return Err(conversion_error(ConverterError::OutputMissing {
                path: job.output_path,
            }));
        }
        Ok(job.output_path)
    }

    fn output_dir(&self, inputs: &[PathBuf]) -> PathBuf {
        let parents: BTreeSet<&Path> = inputs.iter().filter_map(|p| p.parent()).collect();
        match parents.into_iter().collect::<Vec<_>>().as_slice() {
            [shared] => shared.to_path_buf(),
            _ => self.fallback_dir.clone(),
        }
    }
}

fn output_stem(inputs: &[PathBuf]) -> String {
    inputs
        .iter()
        .map(|p| {
            p.file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or_default()
        })
        .collect::<Vec<_>>()
        .join("_")
}

/// `<dir>/<stem>.heic`, or `<dir>/<stem>-<n>.heic` when that is taken.
fn fresh_output(dir: &Path, stem: &str, claims: &OutputClaims) -> PathBuf {
    let extension = TargetFormat::Heic.extension();
    let preferred = dir.join(format!("{}.{}", stem, extension));
    if !claims.is_taken(&preferred) {
        return preferred;
    }
    (2u64..)
        .map(|n| dir.join(format!("{}-{}.{}", stem, n, extension)))
        .find(|candidate| !claims.is_taken(candidate))
        .unwrap_or(preferred)
}
