//! The [`CommandRunner`] seam and its system implementation.

use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::spec::{CommandOutput, CommandSpec, ProcessError};

/// Runs external commands to completion.
///
/// Implementations must be shareable with the background install thread.
pub trait CommandRunner: Send + Sync {
    /// Run the command and wait for it to exit.
    ///
    /// A nonzero exit status is not an error here; it is reported through
    /// [`CommandOutput::success`]. Errors mean the command never ran.
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError>;

    /// Whether `program` can be found on `PATH`.
    fn is_available(&self, program: &str) -> bool;
}

/// Runs commands with [`std::process::Command`].
///
/// Standard input is closed and both output streams are captured, so
/// child processes never draw over the terminal UI.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        let program = which::which(spec.program())
            .map_err(|_| ProcessError::NotFound(spec.program().to_string()))?;

        debug!(command = %spec, cwd = ?spec.working_dir(), "Running command");

        let mut command = Command::new(&program);
        command
            .args(spec.arguments())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = spec.working_dir() {
            command.current_dir(dir);
        }

        let output = command.output().map_err(|source| ProcessError::Spawn {
            program: spec.program().to_string(),
            source,
        })?;

        let result = CommandOutput {
            code: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        trace!(command = %spec, code = ?result.code, "Command finished");
        Ok(result)
    }

    fn is_available(&self, program: &str) -> bool {
        which::which(program).is_ok()
    }
}
