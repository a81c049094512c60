//! ImageMagick-based stitcher.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::error::StitchError;
use super::traits::Stitcher;
use super::types::StitchDirection;
use crate::config::ToolsConfig;
use crate::process::{probe_tool, run_tool, ToolCommand};

/// Stitches with `magick <inputs...> +append|-append <output>`.
pub struct MagickStitcher {
    program: PathBuf,
    timeout_secs: Option<u64>,
}

impl MagickStitcher {
    pub fn new(program: PathBuf, timeout_secs: Option<u64>) -> Self {
        Self {
            program,
            timeout_secs,
        }
    }

    pub fn from_tools(tools: &ToolsConfig) -> Self {
        Self::new(tools.magick_path.clone(), tools.timeout_secs)
    }

    fn build_command(
        &self,
        inputs: &[PathBuf],
        direction: StitchDirection,
        output: &Path,
    ) -> ToolCommand {
        inputs
            .iter()
            .fold(ToolCommand::new(&self.program), |cmd, input| cmd.path_arg(input))
            .arg(direction.magick_flag())
            .path_arg(output)
    }
}

#[async_trait]
impl Stitcher for MagickStitcher {
    fn name(&self) -> &str {
        "magick"
    }

    async fn stitch(
        &self,
        inputs: &[PathBuf],
        direction: StitchDirection,
        output: &Path,
    ) -> Result<(), StitchError> {
        let command = self.build_command(inputs, direction, output);
        let result = run_tool(&command, self.timeout_secs.map(Duration::from_secs)).await?;

        if !result.success {
            let reason = match result.status_code {
                Some(code) => format!("magick exited with code {}", code),
                None => "magick terminated by signal".to_string(),
            };
            return Err(StitchError::StitchFailed {
                reason,
                stderr: result.diagnostic(),
            });
        }
        Ok(())
    }

    async fn validate(&self) -> Result<(), StitchError> {
        probe_tool(&ToolCommand::new(&self.program).arg("-version")).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_command_vertical() {
        let stitcher = MagickStitcher::from_tools(&ToolsConfig::default());
        let command = stitcher.build_command(
            &[PathBuf::from("/p/a.heic"), PathBuf::from("/p/b.heic")],
            StitchDirection::Vertical,
            Path::new("/p/a_b.heic"),
        );
        assert_eq!(
            command.args,
            vec!["/p/a.heic", "/p/b.heic", "-append", "/p/a_b.heic"]
        );
    }
}
