//! Configuration management CLI commands.
//!
//! Provides `config get`, `config set`, `config list`, `config path` and
//! `config init` for viewing and modifying configuration settings from the
//! command line.

use std::path::Path;

use aimenu::config::{config_file_path, ConfigFile, ConfigKey};
use clap::Subcommand;

use super::output::{ConsoleOutput, Output};
use crate::error::CliError;

/// Config subcommands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Get a configuration value
    Get {
        /// Configuration key in format section.key (e.g., shell.rc_file)
        key: String,
    },

    /// Set a configuration value
    Set {
        /// Configuration key in format section.key (e.g., shell.rc_file)
        key: String,

        /// Value to set
        value: String,
    },

    /// List all configuration settings
    List,

    /// Show the configuration file path
    Path,

    /// Write a configuration file with default values if none exists
    Init,
}

/// Run a config subcommand.
pub fn run(command: ConfigCommands) -> Result<(), CliError> {
    let path = config_file_path();
    let out = ConsoleOutput;
    match command {
        ConfigCommands::Get { key } => run_get(&out, &path, &key),
        ConfigCommands::Set { key, value } => run_set(&out, &path, &key, &value),
        ConfigCommands::List => run_list(&out, &path),
        ConfigCommands::Path => {
            out.println(&path.display().to_string());
            Ok(())
        }
        ConfigCommands::Init => run_init(&out),
    }
}

fn parse_key(key: &str) -> Result<ConfigKey, CliError> {
    key.parse().map_err(|_| {
        CliError::Config(format!(
            "Unknown configuration key '{}'. Use 'aimenu config list' to see available keys.",
            key
        ))
    })
}

/// Get a configuration value.
fn run_get(out: &dyn Output, path: &Path, key: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;
    let config = ConfigFile::load_from(path)?;
    let value = config_key.get(&config);

    if value.is_empty() {
        out.println("(not set)");
    } else {
        out.println(&value);
    }

    Ok(())
}

/// Set a configuration value.
fn run_set(out: &dyn Output, path: &Path, key: &str, value: &str) -> Result<(), CliError> {
    let config_key = parse_key(key)?;

    let mut config = ConfigFile::load_from(path)?;
    config_key
        .set(&mut config, value)
        .map_err(|e| CliError::Config(e.to_string()))?;
    config.save_to(path)?;

    out.println(&format!("Set {} = {}", config_key.name(), config_key.get(&config)));

    Ok(())
}

/// List all configuration settings.
fn run_list(out: &dyn Output, path: &Path) -> Result<(), CliError> {
    let config = ConfigFile::load_from(path)?;

    out.header("Configuration Settings");
    out.newline();

    let mut current_section = "";

    for key in ConfigKey::all() {
        let section = key.section();

        // Print section header when section changes
        if section != current_section {
            if !current_section.is_empty() {
                out.newline();
            }
            out.println(&format!("[{}]", section));
            current_section = section;
        }

        let value = key.get(&config);
        let key_name = key.key_name();

        if value.is_empty() {
            out.indented(&format!("{} = (not set)", key_name));
        } else {
            out.indented(&format!("{} = {}", key_name, value));
        }
    }

    Ok(())
}

fn run_init(out: &dyn Output) -> Result<(), CliError> {
    let existed = config_file_path().exists();
    let path = ConfigFile::ensure_exists()?;
    if existed {
        out.println(&format!("Configuration already exists at {}", path.display()));
    } else {
        out.println(&format!("Created {}", path.display()));
    }
    Ok(())
}
