//! CLI error handling with user-friendly messages.
//!
//! Centralizes error handling for the CLI, providing consistent formatting
//! and appropriate exit codes.

use std::fmt;
use std::io;
use std::process;

use aimenu::catalog::Category;
use aimenu::config::{config_file_path, ConfigFileError};

/// CLI-specific errors with user-friendly messages.
#[derive(Debug)]
pub enum CliError {
    /// Failed to initialize logging
    LoggingInit(String),
    /// Configuration error
    Config(String),
    /// Configuration file could not be read or written
    ConfigFile(ConfigFileError),
    /// The interactive menu was started without a terminal
    NotATty,
    /// Terminal setup or drawing failed
    Terminal(io::Error),
    /// Failed to start the background install thread
    Spawn(io::Error),
    /// A name given on the command line is not in the catalog
    UnknownItem { category: Category, name: String },
    /// Prerequisite provisioning failed, nothing was installed
    InstallAborted(String),
    /// The install thread stopped before the run finished
    InstallInterrupted(String),
    /// Some installations failed
    InstallFailed { failed: usize, total: usize },
}

impl CliError {
    /// Exit the process with an appropriate error message and code.
    pub fn exit(&self) -> ! {
        eprintln!("Error: {}", self);

        match self {
            CliError::NotATty => {
                eprintln!();
                eprintln!("Install without the menu instead, for example:");
                eprintln!("  aimenu install --cli gemini --tool ripgrep --path ~/dev");
                eprintln!("Run 'aimenu list' to see every available name.");
            }
            CliError::UnknownItem { category, .. } => {
                eprintln!();
                eprintln!("Names match the display name, package id or alias of an entry.");
                eprintln!(
                    "Run 'aimenu list' to see the available {}.",
                    category.title()
                );
            }
            CliError::ConfigFile(_) => {
                eprintln!();
                eprintln!("Check the file at {}", config_file_path().display());
            }
            CliError::InstallAborted(_) => {
                eprintln!();
                eprintln!("Common issues:");
                eprintln!("  1. pixi not installed: curl -fsSL https://pixi.sh/install.sh | bash");
                eprintln!("  2. No network access to conda-forge");
                eprintln!("  3. Install directory is not writable");
            }
            CliError::InstallInterrupted(_) => {
                eprintln!();
                eprintln!("Items listed above were handled before the installer stopped.");
                eprintln!("Run with --debug and check the log file for details.");
            }
            _ => {}
        }

        process::exit(1)
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::LoggingInit(msg) => write!(f, "Failed to initialize logging: {}", msg),
            CliError::Config(msg) => write!(f, "Configuration error: {}", msg),
            CliError::ConfigFile(e) => write!(f, "{}", e),
            CliError::NotATty => write!(f, "The interactive menu needs a terminal"),
            CliError::Terminal(e) => write!(f, "Terminal error: {}", e),
            CliError::Spawn(e) => write!(f, "Failed to start installer: {}", e),
            CliError::UnknownItem { category, name } => {
                write!(f, "Unknown {} '{}'", category.slug(), name)
            }
            CliError::InstallAborted(msg) => write!(f, "Installation aborted: {}", msg),
            CliError::InstallInterrupted(msg) => write!(f, "Installation interrupted: {}", msg),
            CliError::InstallFailed { failed, total } => {
                write!(f, "{} of {} installations failed", failed, total)
            }
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::ConfigFile(e) => Some(e),
            CliError::Terminal(e) => Some(e),
            CliError::Spawn(e) => Some(e),
            _ => None,
        }
    }
}

impl From<ConfigFileError> for CliError {
    fn from(e: ConfigFileError) -> Self {
        CliError::ConfigFile(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    #[test]
    fn test_unknown_item_message() {
        let err = CliError::UnknownItem {
            category: Category::SpecialTool,
            name: "vim".to_string(),
        };
        assert_eq!(err.to_string(), "Unknown tool 'vim'");
    }

    #[test]
    fn test_install_failed_message() {
        let err = CliError::InstallFailed {
            failed: 2,
            total: 5,
        };
        assert_eq!(err.to_string(), "2 of 5 installations failed");
    }

    #[test]
    fn test_source_chain() {
        let err = CliError::Terminal(io::Error::new(io::ErrorKind::Other, "no tty"));
        assert!(err.source().is_some());
        assert!(CliError::NotATty.source().is_none());
    }
}
