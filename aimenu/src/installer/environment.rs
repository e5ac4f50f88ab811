//! The shared pixi environment every install runs in.
//!
//! Provisioning is idempotent: the project is only initialised when its
//! manifest is missing, and each prerequisite is only added when its marker
//! does not already appear in the manifest.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{info, warn};

use crate::process::{CommandRunner, CommandSpec};

use super::progress::{InstallProgress, ProgressSink};

/// Default name of the environment directory under the install path.
pub const DEFAULT_ENVIRONMENT_DIR: &str = "ai-dev-pixi";

/// Manifest file name inside the environment directory.
pub const MANIFEST_FILE: &str = "pixi.toml";

/// A package the environment must contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Prerequisite {
    /// Argument to `pixi add`.
    pub spec: &'static str,
    /// Substring whose presence in the manifest means "already added".
    pub marker: &'static str,
    /// Human-readable name for progress lines.
    pub label: &'static str,
}

/// Node 22, Python 3.12 and uv, in the order they are added.
pub const PREREQUISITES: [Prerequisite; 3] = [
    Prerequisite {
        spec: "nodejs=22.*",
        marker: "nodejs",
        label: "nodejs 22.*",
    },
    Prerequisite {
        spec: "python=3.12.*",
        marker: "python",
        label: "python 3.12.*",
    },
    Prerequisite {
        spec: "uv",
        marker: "uv",
        label: "uv",
    },
];

/// Fatal provisioning failures. Any of these aborts the whole run.
#[derive(Debug, Error)]
pub enum EnvironmentError {
    #[error("failed to create directory {}: {source}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to add {spec}: {detail}")]
    AddPackage { spec: String, detail: String },
}

/// Where the environment lives on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvironmentLayout {
    env_dir: PathBuf,
}

impl EnvironmentLayout {
    /// The environment directory `install_path/dir_name`.
    pub fn new(install_path: &Path, dir_name: &str) -> Self {
        Self {
            env_dir: install_path.join(dir_name),
        }
    }

    pub fn env_dir(&self) -> &Path {
        &self.env_dir
    }

    pub fn manifest_path(&self) -> PathBuf {
        self.env_dir.join(MANIFEST_FILE)
    }

    /// Commands [`provision`](Self::provision) would run against the
    /// environment as it is on disk right now.
    pub fn pending_commands(&self) -> Vec<CommandSpec> {
        let manifest_path = self.manifest_path();
        let mut commands = Vec::new();
        if !manifest_path.exists() {
            commands.push(self.init_command());
        }
        let manifest = fs::read_to_string(&manifest_path).unwrap_or_default();
        commands.extend(
            PREREQUISITES
                .iter()
                .filter(|p| !manifest.contains(p.marker))
                .map(|p| self.add_command(p)),
        );
        commands
    }

    /// Create and populate the environment.
    pub fn provision(
        &self,
        runner: &dyn CommandRunner,
        sink: &dyn ProgressSink,
    ) -> Result<(), EnvironmentError> {
        sink.emit(InstallProgress::message(
            "Ensuring core dependencies (Node 22.*, Python 3.12.*, and uv) are available...",
        ));

        fs::create_dir_all(&self.env_dir).map_err(|source| EnvironmentError::CreateDir {
            path: self.env_dir.clone(),
            source,
        })?;
        sink.emit(InstallProgress::message(format!(
            "Environment directory: {}",
            self.env_dir.display()
        )));

        let manifest_path = self.manifest_path();
        if !manifest_path.exists() {
            self.init_project(runner, sink);
        }

        // An unreadable manifest means nothing is known to be present.
        let manifest = fs::read_to_string(&manifest_path).unwrap_or_default();

        for prerequisite in PREREQUISITES {
            if manifest.contains(prerequisite.marker) {
                sink.emit(InstallProgress::message(format!(
                    "✓ {} already in pixi environment, skipping",
                    prerequisite.label
                )));
                continue;
            }
            self.add_package(runner, sink, &prerequisite)?;
        }

        sink.emit(InstallProgress::message("✓ Core dependencies are ready"));
        info!(env_dir = %self.env_dir.display(), "Environment provisioned");
        Ok(())
    }

    fn init_project(&self, runner: &dyn CommandRunner, sink: &dyn ProgressSink) {
        sink.emit(InstallProgress::message("Initializing pixi project..."));
        let failure = match runner.run(&self.init_command()) {
            Ok(output) if output.success() => None,
            Ok(output) => Some(output.diagnostic()),
            Err(e) => Some(e.to_string()),
        };
        if let Some(detail) = failure {
            warn!(error = %detail, "pixi init failed");
            sink.emit(InstallProgress::warning(format!(
                "Pixi init failed, project may already exist: {}",
                detail
            )));
        }
    }

    fn init_command(&self) -> CommandSpec {
        CommandSpec::new("pixi")
            .args(["init", "--platform", "linux-64", "--platform", "linux-aarch64"])
            .current_dir(&self.env_dir)
    }

    fn add_command(&self, prerequisite: &Prerequisite) -> CommandSpec {
        CommandSpec::new("pixi")
            .arg("add")
            .arg(prerequisite.spec)
            .current_dir(&self.env_dir)
    }

    fn add_package(
        &self,
        runner: &dyn CommandRunner,
        sink: &dyn ProgressSink,
        prerequisite: &Prerequisite,
    ) -> Result<(), EnvironmentError> {
        sink.emit(InstallProgress::message(format!(
            "Adding {} to pixi environment...",
            prerequisite.label
        )));
        let detail = match runner.run(&self.add_command(prerequisite)) {
            Ok(output) if output.success() => None,
            Ok(output) => Some(output.diagnostic()),
            Err(e) => Some(e.to_string()),
        };
        match detail {
            None => {
                sink.emit(InstallProgress::message(format!(
                    "✓ {} added to pixi environment",
                    prerequisite.label
                )));
                Ok(())
            }
            Some(detail) => Err(EnvironmentError::AddPackage {
                spec: prerequisite.spec.to_string(),
                detail,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::installer::RecordingSink;
    use crate::process::RecordingRunner;
    use tempfile::TempDir;

    #[test]
    fn test_fresh_directory_runs_init_and_all_adds() {
        let temp = TempDir::new().unwrap();
        let layout = EnvironmentLayout::new(temp.path(), DEFAULT_ENVIRONMENT_DIR);
        let runner = RecordingRunner::new();

        layout.provision(&runner, &RecordingSink::new()).unwrap();

        assert!(layout.env_dir().is_dir());
        assert_eq!(
            runner.command_lines(),
            vec![
                "pixi init --platform linux-64 --platform linux-aarch64",
                "pixi add nodejs=22.*",
                "pixi add python=3.12.*",
                "pixi add uv",
            ]
        );
        for call in runner.calls() {
            assert_eq!(call.working_dir(), Some(layout.env_dir()));
        }
    }

    #[test]
    fn test_pending_commands_follow_manifest() {
        let temp = TempDir::new().unwrap();
        let layout = EnvironmentLayout::new(temp.path(), DEFAULT_ENVIRONMENT_DIR);
        let lines = |layout: &EnvironmentLayout| -> Vec<String> {
            layout
                .pending_commands()
                .iter()
                .map(ToString::to_string)
                .collect()
        };

        assert_eq!(lines(&layout).len(), 4);
        assert!(lines(&layout)[0].starts_with("pixi init"));

        fs::create_dir_all(layout.env_dir()).unwrap();
        fs::write(layout.manifest_path(), "[dependencies]\nnodejs = \"22.*\"\n").unwrap();
        assert_eq!(lines(&layout), vec!["pixi add python=3.12.*", "pixi add uv"]);
    }

    #[test]
    fn test_existing_manifest_skips_present_markers() {
        let temp = TempDir::new().unwrap();
        let layout = EnvironmentLayout::new(temp.path(), DEFAULT_ENVIRONMENT_DIR);
        fs::create_dir_all(layout.env_dir()).unwrap();
        fs::write(
            layout.manifest_path(),
            "[dependencies]\nnodejs = \"22.*\"\npython = \"3.12.*\"\n",
        )
        .unwrap();
        let runner = RecordingRunner::new();

        layout.provision(&runner, &RecordingSink::new()).unwrap();

        assert_eq!(runner.command_lines(), vec!["pixi add uv"]);
    }

    #[test]
    fn test_init_failure_is_only_a_warning() {
        let temp = TempDir::new().unwrap();
        let layout = EnvironmentLayout::new(temp.path(), DEFAULT_ENVIRONMENT_DIR);
        let runner = RecordingRunner::new().fail_when("pixi init", "already initialised");
        let sink = RecordingSink::new();

        layout.provision(&runner, &sink).unwrap();

        assert_eq!(sink.warnings().len(), 1);
        assert!(sink.warnings()[0].contains("already initialised"));
    }

    #[test]
    fn test_add_failure_is_fatal_and_stops_further_adds() {
        let temp = TempDir::new().unwrap();
        let layout = EnvironmentLayout::new(temp.path(), DEFAULT_ENVIRONMENT_DIR);
        let runner = RecordingRunner::new().fail_when("python=3.12", "solve failed");

        let err = layout.provision(&runner, &RecordingSink::new()).unwrap_err();

        assert!(matches!(
            err,
            EnvironmentError::AddPackage { ref spec, .. } if spec == "python=3.12.*"
        ));
        assert!(!runner.command_lines().contains(&"pixi add uv".to_string()));
    }

    #[test]
    fn test_missing_pixi_is_fatal() {
        let temp = TempDir::new().unwrap();
        let layout = EnvironmentLayout::new(temp.path(), DEFAULT_ENVIRONMENT_DIR);
        let runner = RecordingRunner::new().without_program("pixi");

        let err = layout.provision(&runner, &RecordingSink::new()).unwrap_err();
        assert!(err.to_string().contains("command not found: pixi"));
    }

    #[test]
    fn test_uncreatable_directory_is_fatal() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("file");
        fs::write(&blocker, "not a directory").unwrap();
        let layout = EnvironmentLayout::new(&blocker, DEFAULT_ENVIRONMENT_DIR);
        let runner = RecordingRunner::new();

        let err = layout.provision(&runner, &RecordingSink::new()).unwrap_err();

        assert!(matches!(err, EnvironmentError::CreateDir { .. }));
        assert!(runner.calls().is_empty());
    }
}
