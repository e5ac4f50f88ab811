//! INI serialization logic for converting `ConfigFile` → INI string.
//!
//! This module contains the `to_config_string()` function that produces
//! the commented INI representation written to `config.ini`.

use std::path::Path;

use super::settings::ConfigFile;

/// Convert a `ConfigFile` to a commented INI string for saving.
pub(super) fn to_config_string(config: &ConfigFile) -> String {
    let directory = config
        .install
        .directory
        .as_ref()
        .map(|p| path_to_string(p))
        .unwrap_or_default();
    let show_enhancers = if config.menu.show_enhancers {
        "true"
    } else {
        "false"
    };

    format!(
        r#"[install]
; Parent directory for the tool environment.
; If empty, the directory aimenu is started from is used.
; Example: directory = ~/dev-tools
directory = {}
; Name of the pixi environment directory created under `directory` (default: ai-dev-pixi)
environment_dir = {}

[menu]
; Show the CLI enhancers step in the interactive menu (default: true)
show_enhancers = {}

[shell]
; Shell startup file that receives tool aliases (default: ~/.zshrc)
rc_file = {}

[logging]
; Log file path (default: ~/.aimenu/logs/aimenu.log)
; The file is cleared at the start of every session
file = {}
"#,
        directory,
        config.install.environment_dir,
        show_enhancers,
        path_to_string(&config.shell.rc_file),
        path_to_string(&config.logging.file),
    )
}

/// Convert path to string, replacing home dir with ~.
fn path_to_string(path: &Path) -> String {
    if let Some(home) = dirs::home_dir() {
        if let Ok(stripped) = path.strip_prefix(&home) {
            return format!("~/{}", stripped.display());
        }
    }
    path.display().to_string()
}
