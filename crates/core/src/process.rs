//! External tool invocation.
//!
//! Every collaborator (converter, metadata writer, stitcher) runs through
//! [`run_tool`]. The child is spawned with piped output, both streams are
//! drained concurrently, and the process is always waited on, including the
//! timeout path where it is killed first. `kill_on_drop` covers callers that
//! cancel the future.

use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use std::time::Duration;
use thiserror::Error;
use tokio::io::{AsyncRead, AsyncReadExt};
use tokio::process::Command;
use tracing::{debug, warn};

/// Timeout for availability probes.
const PROBE_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors raised while running an external tool.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The binary could not be found.
    #[error("Tool not found: {program}")]
    NotFound { program: PathBuf },

    /// The process could not be started.
    #[error("Failed to start {program}: {source}")]
    Spawn {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Waiting for the process failed.
    #[error("Failed to wait for {program}: {source}")]
    Wait {
        program: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The process ran past its deadline and was killed.
    #[error("{program} timed out after {timeout_secs} seconds")]
    Timeout { program: PathBuf, timeout_secs: u64 },
}

/// A program plus its arguments. Arguments are passed directly, never
/// through a shell, so paths with spaces need no quoting. Paths are kept as
/// OS strings and reach the tool byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: PathBuf,
    pub args: Vec<OsString>,
}

impl ToolCommand {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    pub fn arg(mut self, arg: impl Into<OsString>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn path_arg(self, path: &Path) -> Self {
        self.arg(path.as_os_str())
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<OsString>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl fmt::Display for ToolCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program.display())?;
        for arg in &self.args {
            write!(f, " {}", arg.to_string_lossy())?;
        }
        Ok(())
    }
}

/// Captured result of a finished tool.
#[derive(Debug, Clone)]
pub struct ToolOutput {
    /// Exit code, `None` when terminated by a signal.
    pub status_code: Option<i32>,
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl ToolOutput {
    /// The tool's own diagnostic text: stderr, else stdout, else the exit
    /// status.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.status_code {
            Some(code) => format!("exited with status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

/// Runs a tool to completion and captures its output.
///
/// A nonzero exit is not an error here; callers inspect
/// [`ToolOutput::success`].
pub async fn run_tool(
    command: &ToolCommand,
    timeout: Option<Duration>,
) -> Result<ToolOutput, ToolError> {
    debug!(command = %command, "Running external tool");

    let mut child = Command::new(&command.program)
        .args(&command.args)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .kill_on_drop(true)
        .spawn()
        .map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                ToolError::NotFound {
                    program: command.program.clone(),
                }
            } else {
                ToolError::Spawn {
                    program: command.program.clone(),
                    source: e,
                }
            }
        })?;

    let stdout_task = tokio::spawn(drain(child.stdout.take()));
    let stderr_task = tokio::spawn(drain(child.stderr.take()));

    let status = match timeout {
        Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
            Ok(status) => status,
            Err(_) => {
                // kill() also reaps the child
                if let Err(e) = child.kill().await {
                    warn!(program = %command.program.display(), "Failed to kill timed out tool: {}", e);
                }
                return Err(ToolError::Timeout {
                    program: command.program.clone(),
                    timeout_secs: limit.as_secs(),
                });
            }
        },
        None => child.wait().await,
    }
    .map_err(|e| ToolError::Wait {
        program: command.program.clone(),
        source: e,
    })?;

    let stdout = stdout_task.await.unwrap_or_default();
    let stderr = stderr_task.await.unwrap_or_default();

    Ok(ToolOutput {
        status_code: status.code(),
        success: status.success(),
        stdout,
        stderr,
    })
}

/// Checks that a tool can be started. The exit status is ignored.
pub async fn probe_tool(command: &ToolCommand) -> Result<(), ToolError> {
    match run_tool(command, Some(PROBE_TIMEOUT)).await {
        Ok(_) | Err(ToolError::Timeout { .. }) => Ok(()),
        Err(e) => Err(e),
    }
}

async fn drain<R: AsyncRead + Unpin>(reader: Option<R>) -> String {
    let mut buf = Vec::new();
    if let Some(mut reader) = reader {
        if let Err(e) = reader.read_to_end(&mut buf).await {
            debug!("Failed to read tool output: {}", e);
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn sh(script: &str) -> ToolCommand {
        ToolCommand::new("sh").args(["-c", script])
    }

    #[tokio::test]
    async fn test_run_tool_success() {
        let output = run_tool(&sh("echo hello"), None).await.unwrap();
        assert!(output.success);
        assert_eq!(output.status_code, Some(0));
        assert_eq!(output.stdout.trim(), "hello");
    }

    #[tokio::test]
    async fn test_run_tool_nonzero_exit_keeps_stderr() {
        let output = run_tool(&sh("echo broken input >&2; exit 3"), None)
            .await
            .unwrap();
        assert!(!output.success);
        assert_eq!(output.status_code, Some(3));
        assert_eq!(output.diagnostic(), "broken input");
    }

    #[tokio::test]
    async fn test_diagnostic_falls_back_to_status() {
        let output = run_tool(&sh("exit 4"), None).await.unwrap();
        assert_eq!(output.diagnostic(), "exited with status 4");
    }

    #[tokio::test]
    async fn test_run_tool_missing_binary() {
        let command = ToolCommand::new("/nonexistent/fx-photo-tool");
        let err = run_tool(&command, None).await.unwrap_err();
        assert!(matches!(err, ToolError::NotFound { .. }));
    }

    #[tokio::test]
    async fn test_run_tool_timeout() {
        let err = run_tool(&sh("sleep 5"), Some(Duration::from_millis(100)))
            .await
            .unwrap_err();
        assert!(matches!(err, ToolError::Timeout { .. }));
    }

    #[tokio::test]
    async fn test_probe_tool() {
        assert!(probe_tool(&sh("exit 1")).await.is_ok());
        assert!(probe_tool(&ToolCommand::new("/nonexistent/tool")).await.is_err());
    }

    #[test]
    fn test_command_display() {
        let command = ToolCommand::new("/usr/bin/sips")
            .args(["-s", "format", "heic"])
            .path_arg(Path::new("/a b/c.jpg"));
        assert_eq!(command.to_string(), "/usr/bin/sips -s format heic /a b/c.jpg");
    }

    #[test]
    fn test_non_utf8_path_is_passed_unchanged() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let name = OsStr::from_bytes(b"/photos/caf\xe9.jpg");
        let command = ToolCommand::new("/usr/bin/sips").path_arg(Path::new(name));
        assert_eq!(command.args, vec![name.to_os_string()]);
    }

    #[cfg(target_os = "linux")]
    #[tokio::test]
    async fn test_non_utf8_argument_reaches_tool() {
        use std::ffi::OsStr;
        use std::os::unix::ffi::OsStrExt;

        let dir = tempfile::TempDir::new().unwrap();
        let target = dir.path().join(OsStr::from_bytes(b"caf\xe9.heic"));
        let command = sh("touch \"$0\"").path_arg(&target);

        let output = run_tool(&command, None).await.unwrap();
        assert!(output.success);
        assert!(target.exists());
    }
}
