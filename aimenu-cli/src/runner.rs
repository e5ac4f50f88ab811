//! CLI runner for common setup and operations.
//!
//! Encapsulates config loading, logging initialization and orchestrator
//! construction to reduce duplication across command handlers.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use aimenu::catalog::Catalog;
use aimenu::config::{resolve_path, ConfigFile};
use aimenu::installer::InstallOrchestrator;
use aimenu::logging::{init_logging, LoggingGuard, LoggingOptions};
use aimenu::process::CommandRunner;
use aimenu::shell::ShellIntegrationWriter;
use tracing::info;

use crate::error::CliError;

/// Runner that manages CLI lifecycle and common operations.
pub struct CliRunner {
    /// Logging guard - keeps logging active while runner exists
    #[allow(dead_code)]
    logging_guard: LoggingGuard,
    /// Loaded configuration file
    config: ConfigFile,
    catalog: Arc<Catalog>,
}

impl CliRunner {
    /// Create a new CLI runner with optional debug logging.
    ///
    /// When stdout is a TTY, stdout logging is disabled to prevent
    /// interference with the menu.
    ///
    /// # Arguments
    ///
    /// * `debug_mode` - When true, enables debug-level logging regardless of RUST_LOG
    pub fn with_debug(debug_mode: bool) -> Result<Self, CliError> {
        // Load config file (or use defaults if not present)
        let config = ConfigFile::load()?;

        // The menu owns the screen on a TTY; log lines there would tear it
        let stdout_enabled = !atty::is(atty::Stream::Stdout);

        let logging_guard = init_logging(&LoggingOptions {
            file: config.logging.file.clone(),
            stdout: stdout_enabled,
            debug: debug_mode,
        })
        .map_err(|e| CliError::LoggingInit(e.to_string()))?;

        Ok(Self {
            logging_guard,
            config,
            catalog: Arc::new(Catalog::builtin()),
        })
    }

    /// Get the loaded configuration.
    pub fn config(&self) -> &ConfigFile {
        &self.config
    }

    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// Log startup information for a command.
    pub fn log_startup(&self, command: &str) {
        info!("aimenu v{}", aimenu::VERSION);
        info!("aimenu CLI: {} command", command);
    }

    /// Install directory: `--path` if given, then the config file, then the
    /// current working directory. Relative paths are taken from the
    /// working directory.
    pub fn install_directory(&self, requested: Option<&str>) -> PathBuf {
        resolve_install_directory(&self.config, requested, &current_dir())
    }

    /// Build an orchestrator wired to the configured shell file and
    /// environment directory name.
    pub fn orchestrator(&self, runner: Arc<dyn CommandRunner>) -> InstallOrchestrator {
        InstallOrchestrator::new(
            self.catalog(),
            runner,
            ShellIntegrationWriter::new(&self.config.shell.rc_file),
        )
        .with_environment_dir(&self.config.install.environment_dir)
    }
}

fn current_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn resolve_install_directory(
    config: &ConfigFile,
    requested: Option<&str>,
    cwd: &Path,
) -> PathBuf {
    match requested.map(str::trim).filter(|p| !p.is_empty()) {
        Some(path) => resolve_path(path, cwd),
        None => cwd.join(config.install_directory_or(cwd)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_requested_path_wins() {
        let mut config = ConfigFile::default();
        config.install.directory = Some(PathBuf::from("/srv/tools"));

        let path = resolve_install_directory(&config, Some("/opt/ai"), Path::new("/work"));
        assert_eq!(path, PathBuf::from("/opt/ai"));
    }

    #[test]
    fn test_config_directory_before_cwd() {
        let mut config = ConfigFile::default();
        config.install.directory = Some(PathBuf::from("/srv/tools"));

        let path = resolve_install_directory(&config, None, Path::new("/work"));
        assert_eq!(path, PathBuf::from("/srv/tools"));
    }

    #[test]
    fn test_blank_request_falls_back_to_cwd() {
        let config = ConfigFile::default();

        let path = resolve_install_directory(&config, Some("   "), Path::new("/work"));
        assert_eq!(path, PathBuf::from("/work"));
    }

    #[test]
    fn test_relative_paths_anchor_at_cwd() {
        let mut config = ConfigFile::default();

        let path = resolve_install_directory(&config, Some("tools"), Path::new("/work"));
        assert_eq!(path, PathBuf::from("/work/tools"));

        config.install.directory = Some(PathBuf::from("shared"));
        let path = resolve_install_directory(&config, None, Path::new("/work"));
        assert_eq!(path, PathBuf::from("/work/shared"));
    }
}
