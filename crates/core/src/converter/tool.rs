//! Shared invocation path for tool-backed converters.

use std::time::Duration;
use tracing::debug;

use super::error::ConverterError;
use crate::process::{run_tool, ToolCommand};

/// Runs a conversion command and maps a nonzero exit to
/// [`ConverterError::ConversionFailed`] carrying the tool's diagnostic.
pub(super) async fn run_converter(
    command: &ToolCommand,
    timeout_secs: Option<u64>,
) -> Result<(), ConverterError> {
    let output = run_tool(command, timeout_secs.map(Duration::from_secs)).await?;

    if !output.success {
        let reason = match output.status_code {
            Some(code) => format!("{} exited with code {}", command.program.display(), code),
            None => format!("{} terminated by signal", command.program.display()),
        };
        return Err(ConverterError::conversion_failed(reason, output.diagnostic()));
    }

    debug!(command = %command, "Converter finished");
    Ok(())
}
