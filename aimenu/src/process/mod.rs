//! External process execution.
//!
//! Every installation step ultimately shells out to a package manager, an
//! editor CLI or a downloaded install script. This module hides that behind
//! the [`CommandRunner`] trait so the orchestrator can be driven by a
//! recording mock in tests.
//!
//! # Architecture
//!
//! - [`CommandSpec`] - What to run (program, arguments, working directory)
//! - [`CommandOutput`] - Captured exit status and output streams
//! - [`CommandRunner`] - The seam; [`SystemCommandRunner`] is the real thing
//! - [`RecordingRunner`] - Scriptable stand-in used by the test suites

mod recording;
mod runner;
mod spec;

pub use recording::RecordingRunner;
pub use runner::{CommandRunner, SystemCommandRunner};
pub use spec::{CommandOutput, CommandSpec, ProcessError};
