//! Command descriptions and captured results.

use std::fmt;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised before a command produced an exit status.
#[derive(Debug, Error)]
pub enum ProcessError {
    /// The executable could not be located on `PATH`.
    #[error("command not found: {0}")]
    NotFound(String),

    /// The process could not be spawned or waited on.
    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },
}

/// A single external command invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Create a command for `program` with no arguments.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Run a script through `bash -c`.
    pub fn shell(script: impl Into<String>) -> Self {
        Self::new("bash").arg("-c").arg(script)
    }

    /// Append one argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command inside `dir` instead of the process working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn arguments(&self) -> &[String] {
        &self.args
    }

    pub fn working_dir(&self) -> Option<&Path> {
        self.cwd.as_deref()
    }
}

impl fmt::Display for CommandSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.contains(' ') {
                write!(f, " '{}'", arg)?;
            } else {
                write!(f, " {}", arg)?;
            }
        }
        Ok(())
    }
}

/// Exit status and captured output of a finished command.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandOutput {
    /// Exit code, `None` when the process was terminated by a signal.
    pub code: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// A successful result with empty output.
    pub fn ok() -> Self {
        Self {
            code: Some(0),
            ..Self::default()
        }
    }

    /// A failed result with the given exit code and stderr.
    pub fn failed(code: i32, stderr: impl Into<String>) -> Self {
        Self {
            code: Some(code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    pub fn success(&self) -> bool {
        self.code == Some(0)
    }

    /// Best available diagnostic text for a failed command.
    ///
    /// Prefers stderr, then stdout, then the bare exit status.
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr.trim();
        if !stderr.is_empty() {
            return stderr.to_string();
        }
        let stdout = self.stdout.trim();
        if !stdout.is_empty() {
            return stdout.to_string();
        }
        match self.code {
            Some(code) => format!("exit status {}", code),
            None => "terminated by signal".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_collects_arguments() {
        let spec = CommandSpec::new("pixi")
            .arg("run")
            .args(["npm", "install", "-g", "@openai/codex"])
            .current_dir("/tmp/env");

        assert_eq!(spec.program(), "pixi");
        assert_eq!(spec.arguments(), &["run", "npm", "install", "-g", "@openai/codex"]);
        assert_eq!(spec.working_dir(), Some(Path::new("/tmp/env")));
    }

    #[test]
    fn test_shell_wraps_script() {
        let spec = CommandSpec::shell("curl -fsSL https://example.com | sh");
        assert_eq!(spec.program(), "bash");
        assert_eq!(spec.arguments()[0], "-c");
        assert_eq!(spec.to_string(), "bash -c 'curl -fsSL https://example.com | sh'");
    }

    #[test]
    fn test_diagnostic_prefers_stderr() {
        let output = CommandOutput {
            code: Some(1),
            stdout: "some stdout".to_string(),
            stderr: "  npm ERR! 404  \n".to_string(),
        };
        assert_eq!(output.diagnostic(), "npm ERR! 404");
    }

    #[test]
    fn test_diagnostic_falls_back_to_status() {
        let output = CommandOutput::failed(127, "");
        assert!(!output.success());
        assert_eq!(output.diagnostic(), "exit status 127");

        let killed = CommandOutput {
            code: None,
            ..CommandOutput::default()
        };
        assert_eq!(killed.diagnostic(), "terminated by signal");
    }
}
