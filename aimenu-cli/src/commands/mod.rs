//! CLI command implementations.
//!
//! Each subcommand has its own module with argument definitions and handlers.
//!
//! # Command Modules
//!
//! - [`config`] - Configuration management (get, set, list, path, init)
//! - [`install`] - Headless installation
//! - [`list`] - Catalog listing
//! - [`menu`] - Interactive menu (default command)

pub mod config;
pub mod install;
pub mod list;
pub mod menu;
pub mod output;
