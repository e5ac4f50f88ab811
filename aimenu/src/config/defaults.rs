//! Default values and constants for all configuration settings.

use std::path::PathBuf;

use super::settings::*;
use crate::installer::DEFAULT_ENVIRONMENT_DIR;

/// Default shell startup file, relative to the home directory.
pub const DEFAULT_RC_FILE: &str = ".zshrc";

/// Default log file name inside the logs directory.
pub const DEFAULT_LOG_FILE: &str = "aimenu.log";

/// Home directory, or `.` when it cannot be determined.
pub(super) fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}

impl Default for ConfigFile {
    fn default() -> Self {
        let config_dir = super::file::config_directory();

        Self {
            install: InstallSettings {
                directory: None,
                environment_dir: DEFAULT_ENVIRONMENT_DIR.to_string(),
            },
            menu: MenuSettings {
                show_enhancers: true,
            },
            shell: ShellSettings {
                rc_file: home_dir().join(DEFAULT_RC_FILE),
            },
            logging: LoggingSettings {
                file: config_dir.join("logs").join(DEFAULT_LOG_FILE),
            },
        }
    }
}
