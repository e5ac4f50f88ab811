//! Installation orchestration.
//!
//! An install run takes an [`InstallRequest`] (parent directory plus the
//! per-category selections) and:
//!
//! 1. Provisions the shared pixi environment (`<path>/ai-dev-pixi`) with
//!    Node 22, Python 3.12 and uv. Failure here aborts the run.
//! 2. Installs CLI tools, editor extensions, special tools and enhancers,
//!    in that order, one external command per item.
//! 3. Registers shell aliases for every category with at least one success.
//!
//! [`InstallOrchestrator::plan`] computes the same sequence without running
//! it, for dry runs.
//!
//! Progress is pushed through a [`ProgressSink`]; [`InstallHandle`] runs the
//! whole thing on a background thread and exposes the events over a channel.

mod category;
mod environment;
mod handle;
mod orchestrator;
mod outcome;
mod plan;
mod progress;

pub use category::{CategoryDescriptor, GenericTemplate};
pub use environment::{
    EnvironmentError, EnvironmentLayout, Prerequisite, DEFAULT_ENVIRONMENT_DIR, MANIFEST_FILE,
    PREREQUISITES,
};
pub use handle::InstallHandle;
pub use orchestrator::{InstallOrchestrator, InstallRequest};
pub use outcome::{InstallOutcome, InstallReport};
pub use plan::{InstallPlan, PlannedStep};
pub use progress::{InstallProgress, NullSink, ProgressSink, RecordingSink};
