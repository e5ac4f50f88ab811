//! Configuration key access and validation.
//!
//! This module provides a type-safe interface for getting and setting
//! configuration values by key name, with validation via the Specification Pattern.

use std::path::Path;
use std::str::FromStr;
use thiserror::Error;

use super::parser::{expand_tilde, parse_bool, validate_dir_name};
use super::settings::ConfigFile;

/// Errors that can occur when getting or setting configuration values.
#[derive(Debug, Error)]
pub enum ConfigKeyError {
    /// Unknown configuration key.
    #[error("Unknown configuration key '{0}'")]
    UnknownKey(String),

    /// Validation failed for the value.
    #[error("Invalid value for {key}: {reason}")]
    ValidationFailed { key: String, reason: String },
}

/// Supported configuration keys.
///
/// Each key maps to a specific field in [`ConfigFile`] and knows how to
/// get and set its value with proper validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    InstallDirectory,
    InstallEnvironmentDir,
    MenuShowEnhancers,
    ShellRcFile,
    LoggingFile,
}

impl FromStr for ConfigKey {
    type Err = ConfigKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        ConfigKey::all()
            .iter()
            .copied()
            .find(|key| key.name() == lower)
            .ok_or_else(|| ConfigKeyError::UnknownKey(s.to_string()))
    }
}

impl ConfigKey {
    /// Get the canonical key name (e.g., "shell.rc_file").
    pub fn name(&self) -> &'static str {
        match self {
            ConfigKey::InstallDirectory => "install.directory",
            ConfigKey::InstallEnvironmentDir => "install.environment_dir",
            ConfigKey::MenuShowEnhancers => "menu.show_enhancers",
            ConfigKey::ShellRcFile => "shell.rc_file",
            ConfigKey::LoggingFile => "logging.file",
        }
    }

    /// Get the section name (e.g., "shell").
    pub fn section(&self) -> &'static str {
        self.name().split('.').next().unwrap_or("")
    }

    /// Get the key name within the section (e.g., "rc_file").
    pub fn key_name(&self) -> &'static str {
        self.name().split('.').nth(1).unwrap_or(self.name())
    }

    /// Get the value from a config file as a string.
    pub fn get(&self, config: &ConfigFile) -> String {
        match self {
            ConfigKey::InstallDirectory => config
                .install
                .directory
                .as_deref()
                .map(path_to_display)
                .unwrap_or_default(),
            ConfigKey::InstallEnvironmentDir => config.install.environment_dir.clone(),
            ConfigKey::MenuShowEnhancers => config.menu.show_enhancers.to_string(),
            ConfigKey::ShellRcFile => path_to_display(&config.shell.rc_file),
            ConfigKey::LoggingFile => path_to_display(&config.logging.file),
        }
    }

    /// Set the value in a config file.
    ///
    /// Validates the value according to the key's specification before setting.
    pub fn set(&self, config: &mut ConfigFile, value: &str) -> Result<(), ConfigKeyError> {
        self.validate(value)?;
        let value = value.trim();
        match self {
            ConfigKey::InstallDirectory => {
                config.install.directory = if value.is_empty() {
                    None
                } else {
                    Some(expand_tilde(value))
                };
            }
            ConfigKey::InstallEnvironmentDir => {
                config.install.environment_dir = value.to_string();
            }
            ConfigKey::MenuShowEnhancers => config.menu.show_enhancers = parse_bool(value),
            ConfigKey::ShellRcFile => config.shell.rc_file = expand_tilde(value),
            ConfigKey::LoggingFile => config.logging.file = expand_tilde(value),
        }
        Ok(())
    }

    /// Validate a value according to this key's specification.
    pub fn validate(&self, value: &str) -> Result<(), ConfigKeyError> {
        self.specification()
            .is_satisfied_by(value.trim())
            .map_err(|reason| ConfigKeyError::ValidationFailed {
                key: self.name().to_string(),
                reason,
            })
    }

    /// Short description shown by `config list`.
    pub fn description(&self) -> &'static str {
        match self {
            ConfigKey::InstallDirectory => "Parent directory of the tool environment",
            ConfigKey::InstallEnvironmentDir => "Environment directory name",
            ConfigKey::MenuShowEnhancers => "Show the CLI enhancers step",
            ConfigKey::ShellRcFile => "Shell startup file for aliases",
            ConfigKey::LoggingFile => "Log file path",
        }
    }

    fn specification(&self) -> Box<dyn ValueSpecification> {
        match self {
            ConfigKey::InstallDirectory => Box::new(OptionalPathSpec),
            ConfigKey::InstallEnvironmentDir => Box::new(DirectoryNameSpec),
            ConfigKey::MenuShowEnhancers => Box::new(BooleanSpec),
            ConfigKey::ShellRcFile => Box::new(PathSpec),
            ConfigKey::LoggingFile => Box::new(PathSpec),
        }
    }

    /// All keys, in `config list` order.
    pub fn all() -> &'static [ConfigKey] {
        &[
            ConfigKey::InstallDirectory,
            ConfigKey::InstallEnvironmentDir,
            ConfigKey::MenuShowEnhancers,
            ConfigKey::ShellRcFile,
            ConfigKey::LoggingFile,
        ]
    }
}

// ============================================================================
// Value Specifications (Specification Pattern)
// ============================================================================

/// Trait for value validation specifications.
trait ValueSpecification {
    /// Returns Ok(()) if valid, Err(reason) if invalid.
    fn is_satisfied_by(&self, value: &str) -> Result<(), String>;
}

struct BooleanSpec;

impl ValueSpecification for BooleanSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        let lower = value.to_lowercase();
        let valid = ["true", "false", "yes", "no", "1", "0", "on", "off"];
        if valid.contains(&lower.as_str()) {
            Ok(())
        } else {
            Err("must be true/false, yes/no, 1/0, or on/off".to_string())
        }
    }
}

/// Non-empty path.
struct PathSpec;

impl ValueSpecification for PathSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        if value.is_empty() {
            Err("must be a valid path".to_string())
        } else {
            Ok(())
        }
    }
}

/// Empty clears the value.
struct OptionalPathSpec;

impl ValueSpecification for OptionalPathSpec {
    fn is_satisfied_by(&self, _value: &str) -> Result<(), String> {
        Ok(())
    }
}

struct DirectoryNameSpec;

impl ValueSpecification for DirectoryNameSpec {
    fn is_satisfied_by(&self, value: &str) -> Result<(), String> {
        validate_dir_name(value)
    }
}

/// Convert path to display string, collapsing home dir to ~.
fn path_to_display(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_config_key_parsing() {
        assert_eq!(
            "shell.rc_file".parse::<ConfigKey>().unwrap(),
            ConfigKey::ShellRcFile
        );
        assert_eq!(
            "MENU.SHOW_ENHANCERS".parse::<ConfigKey>().unwrap(),
            ConfigKey::MenuShowEnhancers
        );
        assert!(matches!(
            "cache.directory".parse::<ConfigKey>(),
            Err(ConfigKeyError::UnknownKey(_))
        ));
    }

    #[test]
    fn test_key_name_parts() {
        let key = ConfigKey::InstallEnvironmentDir;
        assert_eq!(key.section(), "install");
        assert_eq!(key.key_name(), "environment_dir");
    }

    #[test]
    fn test_get_value() {
        let config = ConfigFile::default();
        assert_eq!(ConfigKey::InstallDirectory.get(&config), "");
        assert_eq!(ConfigKey::InstallEnvironmentDir.get(&config), "ai-dev-pixi");
        assert_eq!(ConfigKey::MenuShowEnhancers.get(&config), "true");
    }

    #[test]
    fn test_set_value() {
        let mut config = ConfigFile::default();

        ConfigKey::InstallDirectory.set(&mut config, "/srv/tools").unwrap();
        assert_eq!(config.install.directory, Some(PathBuf::from("/srv/tools")));

        ConfigKey::MenuShowEnhancers.set(&mut config, "off").unwrap();
        assert!(!config.menu.show_enhancers);

        ConfigKey::ShellRcFile.set(&mut config, "/etc/bash.bashrc").unwrap();
        assert_eq!(config.shell.rc_file, PathBuf::from("/etc/bash.bashrc"));
    }

    #[test]
    fn test_clear_optional_value() {
        let mut config = ConfigFile::default();
        ConfigKey::InstallDirectory.set(&mut config, "/srv/tools").unwrap();
        ConfigKey::InstallDirectory.set(&mut config, "").unwrap();
        assert!(config.install.directory.is_none());
    }

    #[test]
    fn test_set_invalid_value_fails() {
        let mut config = ConfigFile::default();

        let err = ConfigKey::MenuShowEnhancers
            .set(&mut config, "sometimes")
            .unwrap_err();
        assert!(err.to_string().contains("menu.show_enhancers"));
        assert!(config.menu.show_enhancers);

        assert!(ConfigKey::InstallEnvironmentDir.set(&mut config, "a/b").is_err());
        assert!(ConfigKey::ShellRcFile.set(&mut config, "  ").is_err());
    }

    #[test]
    fn test_all_keys_round_trip_through_names() {
        for key in ConfigKey::all() {
            assert_eq!(key.name().parse::<ConfigKey>().unwrap(), *key);
            assert!(!key.description().is_empty());
        }
    }
}
