//! INI parsing logic for converting `Ini` → `ConfigFile`.
//!
//! This module contains the `parse_ini()` function and its helpers.
//! It is the single place where INI key names are mapped to struct fields.

use ini::Ini;
use std::path::{Path, PathBuf};

use super::file::ConfigFileError;
use super::settings::ConfigFile;

/// Parse an `Ini` object into a `ConfigFile`.
///
/// Starts from `ConfigFile::default()` and overlays any values found in the INI.
pub(super) fn parse_ini(ini: &Ini) -> Result<ConfigFile, ConfigFileError> {
    let mut config = ConfigFile::default();

    // [install] section
    if let Some(section) = ini.section(Some("install")) {
        if let Some(v) = section.get("directory") {
            let v = v.trim();
            if !v.is_empty() {
                config.install.directory = Some(expand_tilde(v));
            }
        }
        if let Some(v) = section.get("environment_dir") {
            let v = v.trim();
            validate_dir_name(v).map_err(|reason| ConfigFileError::InvalidValue {
                section: "install".to_string(),
                key: "environment_dir".to_string(),
                value: v.to_string(),
                reason,
            })?;
            config.install.environment_dir = v.to_string();
        }
    }

    // [menu] section
    if let Some(section) = ini.section(Some("menu")) {
        if let Some(v) = section.get("show_enhancers") {
            config.menu.show_enhancers = parse_bool(v);
        }
    }

    // [shell] section
    if let Some(section) = ini.section(Some("shell")) {
        if let Some(v) = section.get("rc_file") {
            let v = v.trim();
            if !v.is_empty() {
                config.shell.rc_file = expand_tilde(v);
            }
        }
    }

    // [logging] section
    if let Some(section) = ini.section(Some("logging")) {
        if let Some(v) = section.get("file") {
            let v = v.trim();
            if !v.is_empty() {
                config.logging.file = expand_tilde(v);
            }
        }
    }

    Ok(config)
}

/// Parse a boolean value from a config string.
/// Accepts: true/false, yes/no, 1/0, on/off (case-insensitive)
pub(super) fn parse_bool(value: &str) -> bool {
    let v = value.trim().to_lowercase();
    v == "true" || v == "1" || v == "yes" || v == "on"
}

/// Expand a leading `~` to the home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if path == "~" {
        if let Some(home) = dirs::home_dir() {
            return home;
        }
    }
    if let Some(stripped) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(stripped);
        }
    }
    PathBuf::from(path)
}

/// Expand `~` and anchor a relative result at `base`.
pub fn resolve_path(path: &str, base: &Path) -> PathBuf {
    let expanded = expand_tilde(path);
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

/// A single path component: non-empty, no separators, not `.` or `..`.
pub(super) fn validate_dir_name(value: &str) -> Result<(), String> {
    if value.is_empty() || value == "." || value == ".." || value.contains(['/', '\\']) {
        Err("must be a single directory name".to_string())
    } else {
        Ok(())
    }
}
