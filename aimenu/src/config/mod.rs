//! User configuration stored in `~/.aimenu/config.ini`.
//!
//! A missing file means defaults. Sections:
//!
//! - `[install]` - parent directory and environment directory name
//! - `[menu]` - whether the enhancers step is shown
//! - `[shell]` - startup file that receives aliases
//! - `[logging]` - log file location
//!
//! # Example
//!
//! ```
//! use aimenu::config::{ConfigFile, ConfigKey};
//!
//! let mut config = ConfigFile::default();
//! ConfigKey::MenuShowEnhancers.set(&mut config, "no").unwrap();
//! assert!(!config.menu.show_enhancers);
//! ```

mod defaults;
mod file;
mod keys;
mod parser;
mod settings;
mod writer;

pub use defaults::{DEFAULT_LOG_FILE, DEFAULT_RC_FILE};
pub use file::{config_directory, config_file_path, ConfigFileError};
pub use keys::{ConfigKey, ConfigKeyError};
pub use parser::{expand_tilde, resolve_path};
pub use settings::{ConfigFile, InstallSettings, LoggingSettings, MenuSettings, ShellSettings};
