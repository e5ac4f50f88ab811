//! `aimenu install` - headless installation.
//!
//! Resolves names given on the command line against the catalog and runs
//! the same pipeline the menu uses, printing progress lines as they arrive.
//! With `--dry-run` the commands and aliases are listed instead.

use std::path::Path;
use std::sync::Arc;

use aimenu::catalog::{Catalog, Category};
use aimenu::installer::{
    InstallOrchestrator, InstallPlan, InstallProgress, InstallReport, InstallRequest, ProgressSink,
};
use aimenu::process::SystemCommandRunner;
use aimenu::selection::Selections;
use clap::Args;
use tokio_util::sync::CancellationToken;
use tracing::info;

use super::output::{ConsoleOutput, Output};
use crate::error::CliError;
use crate::runner::CliRunner;

/// Selects every item of a category.
const ALL_ITEMS: &str = "all";

#[derive(Debug, Default, Args)]
pub struct InstallArgs {
    /// AI CLI tool to install (display name, package or alias; "all" for every one)
    #[arg(long = "cli", value_name = "NAME")]
    pub cli: Vec<String>,

    /// VS Code extension to install
    #[arg(long = "extension", value_name = "NAME")]
    pub extensions: Vec<String>,

    /// Special tool to install
    #[arg(long = "tool", value_name = "NAME")]
    pub tools: Vec<String>,

    /// CLI enhancer to install
    #[arg(long = "enhancer", value_name = "NAME")]
    pub enhancers: Vec<String>,

    /// Parent directory of the environment (default: config, then current directory)
    #[arg(long)]
    pub path: Option<String>,

    /// Print what would run without running it
    #[arg(long)]
    pub dry_run: bool,
}

impl InstallArgs {
    fn names(&self, category: Category) -> &[String] {
        match category {
            Category::CliTool => &self.cli,
            Category::Extension => &self.extensions,
            Category::SpecialTool => &self.tools,
            Category::Enhancer => &self.enhancers,
        }
    }
}

pub fn run(args: InstallArgs, debug: bool) -> Result<(), CliError> {
    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("install");

    let selections = resolve_selections(&runner.catalog(), &args)?;
    let request = InstallRequest::new(runner.install_directory(args.path.as_deref()), selections);
    let orchestrator = runner.orchestrator(Arc::new(SystemCommandRunner::new()));

    execute(&orchestrator, &request, args.dry_run, &ConsoleOutput)
}

/// Run or plan `request`, reporting through `out`.
pub fn execute(
    orchestrator: &InstallOrchestrator,
    request: &InstallRequest,
    dry_run: bool,
    out: &dyn Output,
) -> Result<(), CliError> {
    if dry_run {
        print_plan(out, &orchestrator.plan(request));
        return Ok(());
    }

    info!(
        path = %request.install_path.display(),
        selected = request.selections.total(),
        "Headless install"
    );
    let report = orchestrator.run(request, &OutputSink { out }, &CancellationToken::new());
    out.newline();
    print_report(out, &report, orchestrator.shell_rc_path());
    report_status(&report)
}

/// Map command line names onto catalog display names.
pub fn resolve_selections(catalog: &Catalog, args: &InstallArgs) -> Result<Selections, CliError> {
    let mut selections = Selections::new();
    for category in Category::ALL {
        for name in args.names(category) {
            let set = selections.get_mut(category);
            if name.eq_ignore_ascii_case(ALL_ITEMS) {
                for display in catalog.display_names(category) {
                    set.insert(display);
                }
                continue;
            }
            let item = catalog
                .lookup(category, name)
                .ok_or_else(|| CliError::UnknownItem {
                    category,
                    name: name.clone(),
                })?;
            set.insert(item.display_name());
        }
    }
    Ok(selections)
}

/// Forwards progress lines to an [`Output`].
struct OutputSink<'a> {
    out: &'a dyn Output,
}

impl ProgressSink for OutputSink<'_> {
    fn emit(&self, event: InstallProgress) {
        if let Some(line) = event.display_line() {
            self.out.println(&line);
        }
    }
}

fn print_plan(out: &dyn Output, plan: &InstallPlan) {
    out.header("Dry Run");
    out.println(&format!("Environment: {}", plan.env_dir.display()));

    out.newline();
    out.subheader("Commands");
    for step in &plan.steps {
        match &step.command {
            Some(command) => out.indented(&command.to_string()),
            None => out.indented(&format!("(skipped: no install recipe for {})", step.label)),
        }
    }

    if !plan.aliases.is_empty() {
        out.newline();
        out.subheader("Aliases");
        for alias in &plan.aliases {
            out.indented(&alias.line());
        }
    }

    for warning in &plan.warnings {
        out.newline();
        out.println(&format!("⚠️  {}", warning));
    }

    out.newline();
    out.println("[DRY RUN] No changes made.");
}

/// Final summary: counts, one line per outcome and the reload reminder.
pub fn print_report(out: &dyn Output, report: &InstallReport, rc_path: &Path) {
    if let Some(error) = &report.prerequisite_error {
        out.header("Installation Aborted");
        out.println(&format!("✗ {}", error));
        return;
    }

    out.header(if report.worker_error.is_some() {
        "Installation Interrupted"
    } else if report.cancelled {
        "Installation Cancelled"
    } else {
        "Installation Complete"
    });

    let succeeded = report.succeeded_count();
    let failed = report.failed_count();
    if succeeded > 0 {
        out.println(&format!("✓ {} tools installed successfully", succeeded));
    }
    if failed > 0 {
        out.println(&format!("✗ {} tools failed to install", failed));
    }
    if report.outcomes.is_empty() {
        out.println("No tools were installed.");
    }
    if let Some(error) = &report.worker_error {
        out.println(&format!("✗ {}", error));
    }

    out.newline();
    for outcome in &report.outcomes {
        match outcome.error_detail() {
            None => out.indented(&format!("✓ {}", outcome.name())),
            Some(detail) => out.indented(&format!(
                "✗ {}: {}",
                outcome.name(),
                detail.lines().next().unwrap_or_default()
            )),
        }
    }

    if report.aliases_added > 0 {
        out.newline();
        out.println("⚠️  Important: To use the new aliases, run:");
        out.indented(&format!("source {}", rc_path.display()));
    }
}

/// Exit status for a finished run: aborted and partially failed runs are errors.
pub fn report_status(report: &InstallReport) -> Result<(), CliError> {
    if let Some(error) = &report.prerequisite_error {
        return Err(CliError::InstallAborted(error.clone()));
    }
    if let Some(error) = &report.worker_error {
        return Err(CliError::InstallInterrupted(error.clone()));
    }
    let failed = report.failed_count();
    if failed > 0 {
        return Err(CliError::InstallFailed {
            failed,
            total: report.outcomes.len(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::output::testing::MockOutput;
    use aimenu::installer::InstallOutcome;
    use aimenu::process::RecordingRunner;
    use aimenu::shell::ShellIntegrationWriter;
    use std::fs;
    use tempfile::TempDir;

    fn orchestrator(temp: &TempDir, runner: RecordingRunner) -> InstallOrchestrator {
        InstallOrchestrator::new(
            Arc::new(Catalog::builtin()),
            Arc::new(runner),
            ShellIntegrationWriter::new(temp.path().join(".zshrc")),
        )
    }

    #[test]
    fn test_resolve_by_alias_package_and_display_name() {
        let args = InstallArgs {
            cli: vec!["gemini".to_string(), "opencode-ai".to_string()],
            tools: vec!["Ripgrep".to_string()],
            enhancers: vec!["Claude Flow".to_string()],
            ..InstallArgs::default()
        };

        let selections = resolve_selections(&Catalog::builtin(), &args).unwrap();

        let cli = selections.get(Category::CliTool);
        assert!(cli.contains("Gemini CLI by Google"));
        assert!(cli.contains("OpenCode"));
        assert!(selections.get(Category::SpecialTool).contains("ripgrep"));
        assert!(selections.get(Category::Enhancer).contains("Claude Flow"));
        assert!(selections.get(Category::Extension).is_empty());
    }

    #[test]
    fn test_resolve_all_keyword() {
        let catalog = Catalog::builtin();
        let args = InstallArgs {
            extensions: vec!["all".to_string()],
            ..InstallArgs::default()
        };

        let selections = resolve_selections(&catalog, &args).unwrap();

        assert!(selections.all_selected(&catalog, Category::Extension));
        assert_eq!(selections.total(), catalog.len(Category::Extension));
    }

    #[test]
    fn test_resolve_unknown_name_fails() {
        let args = InstallArgs {
            tools: vec!["emacs".to_string()],
            ..InstallArgs::default()
        };

        let err = resolve_selections(&Catalog::builtin(), &args).unwrap_err();
        assert!(matches!(
            err,
            CliError::UnknownItem { category: Category::SpecialTool, ref name } if name == "emacs"
        ));
    }

    #[test]
    fn test_dry_run_prints_plan_and_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new();
        let orchestrator = orchestrator(&temp, runner);
        let request = InstallRequest::new(
            temp.path(),
            Selections::new().with(Category::CliTool, "OpenCode"),
        );
        let out = MockOutput::new();

        execute(&orchestrator, &request, true, &out).unwrap();

        assert!(out.contains("pixi init --platform linux-64 --platform linux-aarch64"));
        assert!(out.contains("pixi run npm install -g opencode-ai"));
        assert!(out.contains("alias opencode='pixi run --manifest-path"));
        assert!(out.contains("[DRY RUN] No changes made."));
        assert!(!temp.path().join("ai-dev-pixi").exists());
        assert!(!temp.path().join(".zshrc").exists());
    }

    #[test]
    fn test_run_reports_outcomes_and_reminder() {
        let temp = TempDir::new().unwrap();
        let orchestrator = orchestrator(&temp, RecordingRunner::new());
        let request = InstallRequest::new(
            temp.path(),
            Selections::new().with(Category::SpecialTool, "jq"),
        );
        let out = MockOutput::new();

        execute(&orchestrator, &request, false, &out).unwrap();

        assert!(out.contains("✓ jq installed successfully"));
        assert!(out.contains("Installation Complete"));
        assert!(out.contains("✓ 1 tools installed successfully"));
        // jq has no alias target, so nothing was written
        assert!(!out.contains("source "));
        assert!(!temp.path().join(".zshrc").exists());
    }

    #[test]
    fn test_run_with_alias_prints_reload_reminder() {
        let temp = TempDir::new().unwrap();
        let orchestrator = orchestrator(&temp, RecordingRunner::new());
        let request = InstallRequest::new(
            temp.path(),
            Selections::new().with(Category::SpecialTool, "bat"),
        );
        let out = MockOutput::new();

        execute(&orchestrator, &request, false, &out).unwrap();

        let rc = temp.path().join(".zshrc");
        assert!(fs::read_to_string(&rc).unwrap().contains("alias bat='batcat'"));
        assert!(out.contains(&format!("source {}", rc.display())));
    }

    #[test]
    fn test_failed_item_is_an_error() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new().fail_when("apt-get install -y jq", "E: no jq");
        let orchestrator = orchestrator(&temp, runner);
        let request = InstallRequest::new(
            temp.path(),
            Selections::new()
                .with(Category::SpecialTool, "jq")
                .with(Category::SpecialTool, "yq"),
        );
        let out = MockOutput::new();

        let err = execute(&orchestrator, &request, false, &out).unwrap_err();

        assert!(matches!(err, CliError::InstallFailed { failed: 1, total: 2 }));
        assert!(out.contains("✗ jq: E: no jq"));
        assert!(out.contains("✓ yq"));
    }

    #[test]
    fn test_provisioning_failure_aborts() {
        let temp = TempDir::new().unwrap();
        let runner = RecordingRunner::new().fail_when("pixi add nodejs", "solve failed");
        let orchestrator = orchestrator(&temp, runner);
        let request = InstallRequest::new(
            temp.path(),
            Selections::new().with(Category::SpecialTool, "jq"),
        );
        let out = MockOutput::new();

        let err = execute(&orchestrator, &request, false, &out).unwrap_err();

        assert!(matches!(err, CliError::InstallAborted(_)));
        assert!(out.contains("Installation Aborted"));
    }

    #[test]
    fn test_interrupted_run_keeps_finished_items() {
        let report = InstallReport::interrupted(
            vec![InstallOutcome::success(Category::CliTool, "gemini")],
            "install thread stopped unexpectedly",
        );
        let out = MockOutput::new();

        print_report(&out, &report, Path::new("/home/dev/.zshrc"));

        assert!(out.contains("Installation Interrupted"));
        assert!(out.contains("✓ 1 tools installed successfully"));
        assert!(out.contains("✓ gemini"));
        assert!(out.contains("✗ install thread stopped unexpectedly"));
        assert!(matches!(
            report_status(&report),
            Err(CliError::InstallInterrupted(_))
        ));
    }
}
