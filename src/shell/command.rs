//! Shell command execution.

use std::process::{Command, Stdio};
use std::time::{Duration, Instant};

use crate::error::{Result, WizError};

/// What to do with a child's stdout and stderr.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Streams {
    /// Share the launcher's terminal.
    Inherit,
    /// Throw output away; only the exit status matters.
    Discard,
}

/// Outcome of a shell command. Output is never captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommandStatus {
    /// Exit code (None if killed by signal).
    pub exit_code: Option<i32>,

    /// Execution duration.
    pub duration: Duration,
}

impl CommandStatus {
    /// Build a status from an exit code.
    pub fn from_code(code: i32) -> Self {
        Self {
            exit_code: Some(code),
            duration: Duration::ZERO,
        }
    }

    /// Whether command succeeded (exit code 0).
    pub fn success(&self) -> bool {
        self.exit_code == Some(0)
    }
}

/// Runs a command string through the platform shell.
///
/// Commands are passed verbatim; implementations must not quote or escape
/// anything.
pub trait Shell {
    /// Run `command` and wait for it to finish.
    fn execute(&self, command: &str, streams: Streams) -> Result<CommandStatus>;
}

/// The real shell: `sh -c` on Unix, `cmd /C` on Windows.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl Shell for SystemShell {
    fn execute(&self, command: &str, streams: Streams) -> Result<CommandStatus> {
        let start = Instant::now();
        let (shell, flag) = shell_program();

        let mut cmd = Command::new(shell);
        cmd.arg(flag);
        cmd.arg(command);
        cmd.stdin(Stdio::inherit());

        match streams {
            Streams::Inherit => {
                cmd.stdout(Stdio::inherit());
                cmd.stderr(Stdio::inherit());
            }
            Streams::Discard => {
                cmd.stdout(Stdio::null());
                cmd.stderr(Stdio::null());
            }
        }

        tracing::debug!("Executing ({:?}): {}", streams, command);

        let status = cmd.status().map_err(|e| {
            tracing::debug!("Failed to spawn {}: {}", shell, e);
            WizError::CommandFailed {
                command: command.to_string(),
                code: None,
            }
        })?;

        let result = CommandStatus {
            exit_code: status.code(),
            duration: start.elapsed(),
        };
        tracing::debug!(
            "Finished with {:?} in {}ms: {}",
            result.exit_code,
            result.duration.as_millis(),
            command
        );
        Ok(result)
    }
}

/// The shell program and the flag that makes it run one command string.
fn shell_program() -> (&'static str, &'static str) {
    if cfg!(target_os = "windows") {
        ("cmd", "/C")
    } else {
        ("sh", "-c")
    }
}
