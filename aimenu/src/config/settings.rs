//! Settings structs for all configuration sections.
//!
//! Each struct represents one `[section]` of the INI config file.
//! These are pure data types with no parsing or serialization logic.

use std::path::PathBuf;

/// Complete application configuration loaded from config.ini.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    /// Install location settings
    pub install: InstallSettings,
    /// Interactive menu settings
    pub menu: MenuSettings,
    /// Shell integration settings
    pub shell: ShellSettings,
    /// Logging settings
    pub logging: LoggingSettings,
}

/// Where tools get installed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallSettings {
    /// Parent directory of the environment. `None` means the working
    /// directory at launch.
    pub directory: Option<PathBuf>,
    /// Name of the environment directory created under `directory`.
    pub environment_dir: String,
}

/// Interactive menu configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuSettings {
    /// Show the CLI enhancers step
    pub show_enhancers: bool,
}

/// Shell startup file configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellSettings {
    /// File that receives alias lines
    pub rc_file: PathBuf,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoggingSettings {
    /// Log file path
    pub file: PathBuf,
}
