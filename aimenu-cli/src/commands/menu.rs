//! `aimenu menu` - the interactive selection menu.

use std::sync::Arc;

use aimenu::process::SystemCommandRunner;
use aimenu::selection::MenuState;
use clap::Args;

use super::install::{print_report, report_status};
use super::output::ConsoleOutput;
use crate::error::CliError;
use crate::runner::CliRunner;
use crate::tui_app::{run_tui, TuiAppConfig};
use crate::ui::MenuLabels;

#[derive(Debug, Default, Args)]
pub struct MenuArgs {
    /// Default parent directory offered on the path page
    #[arg(long)]
    pub path: Option<String>,

    /// Skip the CLI enhancers step
    #[arg(long)]
    pub no_enhancers: bool,
}

pub fn run(args: MenuArgs, debug: bool) -> Result<(), CliError> {
    if !atty::is(atty::Stream::Stdout) {
        return Err(CliError::NotATty);
    }

    let runner = CliRunner::with_debug(debug)?;
    runner.log_startup("menu");

    let show_enhancers = runner.config().menu.show_enhancers && !args.no_enhancers;
    let state = MenuState::new(runner.catalog(), runner.install_directory(args.path.as_deref()))
        .with_enhancers(show_enhancers);
    let orchestrator = Arc::new(runner.orchestrator(Arc::new(SystemCommandRunner::new())));
    let labels = MenuLabels {
        env_dir_name: runner.config().install.environment_dir.clone(),
        rc_path: orchestrator.shell_rc_path().to_path_buf(),
    };

    let report = run_tui(TuiAppConfig {
        orchestrator: Arc::clone(&orchestrator),
        state,
        labels,
    })?;

    // The alternate screen is gone; leave the results in the scrollback
    match report {
        Some(report) => {
            print_report(&ConsoleOutput, &report, orchestrator.shell_rc_path());
            report_status(&report)
        }
        None => Ok(()),
    }
}
