//! Configuration file handling for ~/.aimenu/config.ini.
//!
//! Loads and saves user configuration with sensible defaults.
//! Settings structs live in [`super::settings`], constants in [`super::defaults`],
//! parsing in [`super::parser`], and serialization in [`super::writer`].

use ini::Ini;
use std::path::{Path, PathBuf};
use thiserror::Error;

use super::settings::ConfigFile;

/// Configuration file errors.
#[derive(Debug, Error)]
pub enum ConfigFileError {
    /// Failed to read config file
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] ini::Error),

    /// Failed to write config file
    #[error("Failed to write config file: {0}")]
    WriteError(String),

    /// Invalid configuration value
    #[error("Invalid configuration: {section}.{key} = '{value}' - {reason}")]
    InvalidValue {
        section: String,
        key: String,
        value: String,
        reason: String,
    },

    /// Failed to create config directory
    #[error("Failed to create config directory: {0}")]
    DirectoryError(std::io::Error),
}

impl ConfigFile {
    /// Load configuration from the default path (~/.aimenu/config.ini).
    pub fn load() -> Result<Self, ConfigFileError> {
        Self::load_from(&config_file_path())
    }

    /// Load configuration from a specific path.
    ///
    /// If the file doesn't exist, returns defaults.
    pub fn load_from(path: &Path) -> Result<Self, ConfigFileError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let ini = Ini::load_from_file(path)?;
        super::parser::parse_ini(&ini)
    }

    /// Save configuration to the default path.
    pub fn save(&self) -> Result<(), ConfigFileError> {
        self.save_to(&config_file_path())
    }

    /// Save configuration to a specific path.
    pub fn save_to(&self, path: &Path) -> Result<(), ConfigFileError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(ConfigFileError::DirectoryError)?;
        }

        let content = super::writer::to_config_string(self);
        std::fs::write(path, content).map_err(|e| ConfigFileError::WriteError(e.to_string()))
    }

    /// Create the default config file if it doesn't exist.
    ///
    /// Returns the path to the config file.
    pub fn ensure_exists() -> Result<PathBuf, ConfigFileError> {
        let path = config_file_path();
        if !path.exists() {
            Self::default().save_to(&path)?;
        }
        Ok(path)
    }

    /// Install directory, falling back to `cwd`.
    pub fn install_directory_or(&self, cwd: &Path) -> PathBuf {
        self.install
            .directory
            .clone()
            .unwrap_or_else(|| cwd.to_path_buf())
    }
}

/// Get the path to the config directory (~/.aimenu).
pub fn config_directory() -> PathBuf {
    super::defaults::home_dir().join(".aimenu")
}

/// Get the path to the config file (~/.aimenu/config.ini).
pub fn config_file_path() -> PathBuf {
    config_directory().join("config.ini")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_RC_FILE;

    #[test]
    fn test_default_config() {
        let config = ConfigFile::default();

        assert!(config.install.directory.is_none());
        assert_eq!(config.install.environment_dir, "ai-dev-pixi");
        assert!(config.menu.show_enhancers);
        assert!(config.shell.rc_file.ends_with(DEFAULT_RC_FILE));
        assert!(config.logging.file.ends_with("logs/aimenu.log"));
    }

    #[test]
    fn test_load_nonexistent_returns_defaults() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nonexistent.ini");

        let config = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(config, ConfigFile::default());
    }

    #[test]
    fn test_save_and_reload() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let config_path = temp_dir.path().join("nested").join("config.ini");

        let mut config = ConfigFile::default();
        config.install.directory = Some(PathBuf::from("/opt/ai"));
        config.menu.show_enhancers = false;
        config.shell.rc_file = PathBuf::from("/tmp/test-bashrc");
        config.save_to(&config_path).unwrap();

        let loaded = ConfigFile::load_from(&config_path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_install_directory_fallback() {
        let mut config = ConfigFile::default();
        assert_eq!(
            config.install_directory_or(Path::new("/work")),
            PathBuf::from("/work")
        );

        config.install.directory = Some(PathBuf::from("/opt/ai"));
        assert_eq!(
            config.install_directory_or(Path::new("/work")),
            PathBuf::from("/opt/ai")
        );
    }
}
