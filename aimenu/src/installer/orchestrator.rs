//! The install pipeline.
//!
//! A run provisions the shared environment, then walks the categories in
//! fixed order. Within a category the catalog order decides the sequence, so
//! the outcome list is deterministic regardless of how items were selected.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::{debug, info, warn};

use crate::catalog::{Catalog, CatalogItem, Category};
use crate::process::CommandRunner;
use crate::selection::Selections;
use crate::shell::{ShellAlias, ShellIntegrationWriter};

use super::category::CategoryDescriptor;
use super::environment::{EnvironmentLayout, DEFAULT_ENVIRONMENT_DIR};
use super::outcome::{InstallOutcome, InstallReport};
use super::plan::{InstallPlan, PlannedStep};
use super::progress::{InstallProgress, ProgressSink};

/// What to install and where.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallRequest {
    /// Parent directory of the environment. Never empty.
    pub install_path: PathBuf,
    pub selections: Selections,
}

impl InstallRequest {
    pub fn new(install_path: impl Into<PathBuf>, selections: Selections) -> Self {
        Self {
            install_path: install_path.into(),
            selections,
        }
    }
}

/// Runs install requests against a catalog.
pub struct InstallOrchestrator {
    catalog: Arc<Catalog>,
    runner: Arc<dyn CommandRunner>,
    shell: ShellIntegrationWriter,
    environment_dir: String,
}

impl InstallOrchestrator {
    pub fn new(
        catalog: Arc<Catalog>,
        runner: Arc<dyn CommandRunner>,
        shell: ShellIntegrationWriter,
    ) -> Self {
        Self {
            catalog,
            runner,
            shell,
            environment_dir: DEFAULT_ENVIRONMENT_DIR.to_string(),
        }
    }

    /// Use a different environment directory name under the install path.
    pub fn with_environment_dir(mut self, name: impl Into<String>) -> Self {
        self.environment_dir = name.into();
        self
    }

    pub fn layout_for(&self, install_path: &Path) -> EnvironmentLayout {
        EnvironmentLayout::new(install_path, &self.environment_dir)
    }

    pub fn shell_rc_path(&self) -> &Path {
        self.shell.rc_path()
    }

    /// Execute a request to completion on the calling thread.
    ///
    /// Cancellation is checked between items; an item already running is
    /// always allowed to finish.
    pub fn run(
        &self,
        request: &InstallRequest,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
    ) -> InstallReport {
        let layout = self.layout_for(&request.install_path);
        info!(
            install_path = %request.install_path.display(),
            selected = request.selections.total(),
            "Starting install run"
        );

        if let Err(e) = layout.provision(self.runner.as_ref(), sink) {
            warn!(error = %e, "Prerequisite provisioning failed");
            sink.emit(InstallProgress::message(format!("✗ {}", e)));
            return InstallReport::aborted(e.to_string());
        }

        let mut report = InstallReport::default();
        for category in Category::ALL {
            let descriptor = CategoryDescriptor::for_category(category);
            let stopped =
                self.install_category(&descriptor, request, &layout, sink, cancel, &mut report);
            if stopped {
                report.cancelled = true;
                sink.emit(InstallProgress::warning("Installation cancelled"));
                break;
            }
        }

        info!(
            succeeded = report.succeeded_count(),
            failed = report.failed_count(),
            aliases = report.aliases_added,
            cancelled = report.cancelled,
            "Install run finished"
        );
        report
    }

    /// Describe what [`run`](Self::run) would execute for `request` without
    /// executing it or touching the shell file.
    pub fn plan(&self, request: &InstallRequest) -> InstallPlan {
        let layout = self.layout_for(&request.install_path);
        let env_dir = layout.env_dir();
        let mut plan = InstallPlan::new(env_dir);

        for command in layout.pending_commands() {
            plan.steps.push(PlannedStep {
                category: None,
                label: "environment".to_string(),
                command: Some(command),
            });
        }

        for category in Category::ALL {
            let descriptor = CategoryDescriptor::for_category(category);
            let items = self.selected_items(category, &request.selections);
            if items.is_empty() {
                continue;
            }
            if let Some((program, warning)) = descriptor.requires {
                if !self.runner.is_available(program) {
                    plan.warnings.push(warning.to_string());
                    continue;
                }
            }

            for item in &items {
                plan.steps.push(PlannedStep {
                    category: Some(category),
                    label: item.run_alias().to_string(),
                    command: descriptor.command_for(item, env_dir),
                });
            }

            if descriptor.alias_marker.is_some() {
                let aliases = items
                    .iter()
                    .filter(|item| descriptor.command_for(item, env_dir).is_some())
                    .filter_map(|item| ShellAlias::for_item(item, env_dir))
                    .chain((descriptor.extra_aliases)(env_dir));
                for alias in aliases {
                    plan.push_alias(alias);
                }
            }
        }
        plan
    }

    /// Selected items of `category`, in catalog order.
    fn selected_items(&self, category: Category, selections: &Selections) -> Vec<&CatalogItem> {
        let selected = selections.get(category);
        self.catalog
            .items(category)
            .iter()
            .filter(|item| selected.contains(item.display_name()))
            .collect()
    }

    /// Install one category. Returns `true` when cancellation stopped it.
    fn install_category(
        &self,
        descriptor: &CategoryDescriptor,
        request: &InstallRequest,
        layout: &EnvironmentLayout,
        sink: &dyn ProgressSink,
        cancel: &CancellationToken,
        report: &mut InstallReport,
    ) -> bool {
        let category = descriptor.category;
        let items = self.selected_items(category, &request.selections);

        if items.is_empty() {
            return false;
        }
        if cancel.is_cancelled() {
            return true;
        }

        if let Some((program, warning)) = descriptor.requires {
            if !self.runner.is_available(program) {
                warn!(%category, program, "Required program missing, skipping category");
                sink.emit(InstallProgress::warning(warning));
                return false;
            }
        }

        sink.emit(InstallProgress::CategoryStarted(category));
        let mut installed = Vec::new();
        let mut stopped = false;
        for item in items {
            if cancel.is_cancelled() {
                stopped = true;
                break;
            }

            let Some(command) = descriptor.command_for(item, layout.env_dir()) else {
                sink.emit(InstallProgress::warning(format!(
                    "Unknown tool: {}, skipping",
                    item.display_name()
                )));
                continue;
            };

            let name = item.run_alias();
            sink.emit(InstallProgress::ItemStarted {
                category,
                name: name.to_string(),
            });
            debug!(item = name, command = %command, "Installing item");

            let outcome = match self.runner.run(&command) {
                Ok(output) if output.success() => InstallOutcome::success(category, name),
                Ok(output) => InstallOutcome::failure(category, name, output.diagnostic()),
                Err(e) => InstallOutcome::failure(category, name, e.to_string()),
            };
            if outcome.succeeded() {
                installed.push(item);
            } else {
                warn!(item = name, error = ?outcome.error_detail(), "Install failed");
            }
            sink.emit(InstallProgress::ItemFinished(outcome.clone()));
            report.outcomes.push(outcome);
        }

        if !installed.is_empty() {
            self.register_aliases(descriptor, layout, &installed, sink, report);
        }
        stopped
    }

    fn register_aliases(
        &self,
        descriptor: &CategoryDescriptor,
        layout: &EnvironmentLayout,
        installed: &[&CatalogItem],
        sink: &dyn ProgressSink,
        report: &mut InstallReport,
    ) {
        let Some(marker) = descriptor.alias_marker else {
            return;
        };

        let env_dir = layout.env_dir();
        let mut aliases: Vec<ShellAlias> = installed
            .iter()
            .filter_map(|item| ShellAlias::for_item(item, env_dir))
            .collect();
        aliases.extend((descriptor.extra_aliases)(env_dir));
        if aliases.is_empty() {
            return;
        }

        let rc = self.shell.rc_path().display().to_string();
        match self.shell.register(marker, &aliases) {
            Ok(written) if written.added > 0 => {
                report.aliases_added += written.added;
                sink.emit(InstallProgress::message(format!(
                    "✓ Added {} alias(es) to {}",
                    written.added, rc
                )));
            }
            Ok(_) => sink.emit(InstallProgress::message(format!(
                "Aliases already exist in {}",
                rc
            ))),
            Err(e) => {
                warn!(error = %e, "Could not update shell startup file");
                sink.emit(InstallProgress::warning(e.to_string()));
            }
        }
    }
}
