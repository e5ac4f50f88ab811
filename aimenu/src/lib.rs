//! aimenu - curated installer for AI developer tooling
//!
//! This library holds everything behind the `aimenu` terminal menu: the
//! catalog of installable tools, the selection state machine, and the
//! installation pipeline that provisions a shared pixi environment and
//! wires shell aliases.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use aimenu::catalog::{Catalog, Category};
//! use aimenu::installer::{InstallOrchestrator, InstallRequest, NullSink};
//! use aimenu::process::SystemCommandRunner;
//! use aimenu::selection::Selections;
//! use aimenu::shell::ShellIntegrationWriter;
//! use tokio_util::sync::CancellationToken;
//!
//! let orchestrator = InstallOrchestrator::new(
//!     Arc::new(Catalog::builtin()),
//!     Arc::new(SystemCommandRunner::new()),
//!     ShellIntegrationWriter::new("/home/dev/.zshrc"),
//! );
//! let request = InstallRequest::new(
//!     "/home/dev/tools",
//!     Selections::new().with(Category::CliTool, "OpenCode"),
//! );
//! let report = orchestrator.run(&request, &NullSink, &CancellationToken::new());
//! println!("{} installed", report.succeeded_count());
//! ```

pub mod catalog;
pub mod config;
pub mod installer;
pub mod logging;
pub mod process;
pub mod selection;
pub mod shell;

/// Version of the aimenu library and CLI.
///
/// This is synchronized across all components in the workspace.
/// The version is defined in `Cargo.toml` and injected at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
