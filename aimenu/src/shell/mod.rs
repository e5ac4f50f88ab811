//! Shell startup file integration.
//!
//! Successful installs are made reachable through `alias` lines appended to
//! the user's shell startup file (`~/.zshrc` by default). Writing is
//! append-only and idempotent: a line already present in the file is never
//! written again, so re-running an install leaves the file unchanged.

mod alias;
mod writer;

pub use alias::ShellAlias;
pub use writer::{AliasReport, ShellError, ShellIntegrationWriter};

/// Marker written above aliases for CLI tools and enhancers.
pub const CLI_TOOLS_MARKER: &str = "# AI Menu CLI Tool Aliases";

/// Marker written above aliases for auxiliary tools.
pub const SPECIAL_TOOLS_MARKER: &str = "# AI Menu Special Tools Aliases";
