//! A scriptable [`CommandRunner`] that records every invocation.
//!
//! Used by the test suites of both crates to walk the whole pipeline
//! without touching the system.

use std::collections::HashSet;
use std::sync::RwLock;

use super::runner::CommandRunner;
use super::spec::{CommandOutput, CommandSpec, ProcessError};

/// Records commands and answers them from a small rule table.
///
/// Every command succeeds unless its rendered form contains one of the
/// configured failure patterns. Programs reported as unavailable by
/// [`RecordingRunner::without_program`] fail with [`ProcessError::NotFound`].
#[derive(Debug, Default)]
pub struct RecordingRunner {
    calls: RwLock<Vec<CommandSpec>>,
    failures: Vec<(String, String)>,
    missing: HashSet<String>,
}

impl RecordingRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail any command whose rendered form contains `pattern`.
    pub fn fail_when(mut self, pattern: impl Into<String>, stderr: impl Into<String>) -> Self {
        self.failures.push((pattern.into(), stderr.into()));
        self
    }

    /// Pretend `program` is not installed.
    pub fn without_program(mut self, program: impl Into<String>) -> Self {
        self.missing.insert(program.into());
        self
    }

    /// All commands run so far, in order.
    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.read().map(|c| c.clone()).unwrap_or_default()
    }

    /// Rendered command lines, handy for assertions.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls().iter().map(|c| c.to_string()).collect()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
        if let Ok(mut calls) = self.calls.write() {
            calls.push(spec.clone());
        }
        if self.missing.contains(spec.program()) {
            return Err(ProcessError::NotFound(spec.program().to_string()));
        }

        let line = spec.to_string();
        let failure = self
            .failures
            .iter()
            .find(|(pattern, _)| line.contains(pattern.as_str()));
        Ok(match failure {
            Some((_, stderr)) => CommandOutput::failed(1, stderr.clone()),
            None => CommandOutput::ok(),
        })
    }

    fn is_available(&self, program: &str) -> bool {
        !self.missing.contains(program)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_and_matches_failures() {
        let runner = RecordingRunner::new()
            .fail_when("@qodo/command", "npm ERR! 404")
            .without_program("code");

        let ok = runner.run(&CommandSpec::new("pixi").arg("add").arg("uv")).unwrap();
        assert!(ok.success());

        let failed = runner
            .run(&CommandSpec::new("pixi").args(["run", "npm", "install", "-g", "@qodo/command"]))
            .unwrap();
        assert!(!failed.success());
        assert_eq!(failed.diagnostic(), "npm ERR! 404");

        assert!(!runner.is_available("code"));
        assert!(runner.run(&CommandSpec::new("code")).is_err());

        assert_eq!(
            runner.command_lines(),
            vec![
                "pixi add uv",
                "pixi run npm install -g @qodo/command",
                "code",
            ]
        );
    }
}
