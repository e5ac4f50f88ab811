//! What an install run would do, computed without running anything.

use std::path::{Path, PathBuf};

use crate::catalog::Category;
use crate::process::CommandSpec;
use crate::shell::ShellAlias;

/// One step of a planned run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedStep {
    /// `None` for environment provisioning.
    pub category: Option<Category>,
    pub label: String,
    /// `None` when the item has no install recipe and would be skipped.
    pub command: Option<CommandSpec>,
}

/// Result of [`InstallOrchestrator::plan`](super::InstallOrchestrator::plan).
///
/// Aliases assume every item succeeds; lines already present in the shell
/// file are listed too and would be skipped at write time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallPlan {
    pub env_dir: PathBuf,
    pub steps: Vec<PlannedStep>,
    pub aliases: Vec<ShellAlias>,
    pub warnings: Vec<String>,
}

impl InstallPlan {
    pub(super) fn new(env_dir: &Path) -> Self {
        Self {
            env_dir: env_dir.to_path_buf(),
            steps: Vec::new(),
            aliases: Vec::new(),
            warnings: Vec::new(),
        }
    }

    pub(super) fn push_alias(&mut self, alias: ShellAlias) {
        if !self.aliases.contains(&alias) {
            self.aliases.push(alias);
        }
    }

    /// Steps that install catalog items.
    pub fn item_steps(&self) -> impl Iterator<Item = &PlannedStep> {
        self.steps.iter().filter(|s| s.category.is_some())
    }

    /// Steps that set up the environment.
    pub fn provisioning_steps(&self) -> impl Iterator<Item = &PlannedStep> {
        self.steps.iter().filter(|s| s.category.is_none())
    }
}
