//! Interactive menu application.
//!
//! Owns the event loop that ties the terminal, the selection state machine
//! and a background install together:
//!
//! - draw the active view
//! - wait up to one tick for a key press and apply it
//! - drain progress from the install thread without blocking
//!
//! The loop ends when the state machine reaches `Quit`. A quit requested
//! while installing cancels the run and the loop keeps going until the
//! item in progress has finished.

use std::sync::Arc;
use std::time::Duration;

use aimenu::installer::{InstallHandle, InstallOrchestrator, InstallProgress, InstallReport};
use aimenu::selection::{MenuCommand, MenuState, View};
use tracing::{debug, info, warn};

use crate::error::CliError;
use crate::ui::menu::apply;
use crate::ui::{Menu, MenuLabels, ProgressFeed};

/// UI refresh interval; also the spinner frame rate.
const TICK_RATE: Duration = Duration::from_millis(100);

/// Configuration for starting the menu.
pub struct TuiAppConfig {
    /// Pipeline shared with the install thread.
    pub orchestrator: Arc<InstallOrchestrator>,
    /// Initial state (default path and enhancer step already applied).
    pub state: MenuState,
    /// Environment name and shell file shown on screen.
    pub labels: MenuLabels,
}

/// Run the menu until the user leaves it.
///
/// Returns the report of the install run, if one was started.
pub fn run_tui(config: TuiAppConfig) -> Result<Option<InstallReport>, CliError> {
    let TuiAppConfig {
        orchestrator,
        mut state,
        labels,
    } = config;

    let mut menu = Menu::new(labels).map_err(CliError::Terminal)?;
    let mut feed = ProgressFeed::new();
    let mut install: Option<InstallHandle> = None;

    while state.view() != View::Quit {
        menu.draw(&state, &feed).map_err(CliError::Terminal)?;

        if let Some(input) = menu
            .poll_input(state.view(), TICK_RATE)
            .map_err(CliError::Terminal)?
        {
            match apply(&mut state, input) {
                Some(MenuCommand::StartInstall(request)) => {
                    info!(
                        path = %request.install_path.display(),
                        selected = request.selections.total(),
                        "Starting install from menu"
                    );
                    let handle = InstallHandle::spawn(Arc::clone(&orchestrator), request)
                        .map_err(CliError::Spawn)?;
                    install = Some(handle);
                    feed.clear();
                    state.begin_installing();
                }
                Some(MenuCommand::CancelInstall) => {
                    if let Some(handle) = &install {
                        warn!("Install cancelled by user");
                        handle.cancel();
                    }
                }
                None => {}
            }
        }

        let mut finished = false;
        if let Some(handle) = install.as_mut() {
            while let Some(event) = handle.try_recv() {
                feed.push(&event);
                if let InstallProgress::Finished(report) = event {
                    debug!(
                        succeeded = report.succeeded_count(),
                        failed = report.failed_count(),
                        cancelled = report.cancelled,
                        "Install thread finished"
                    );
                    state.finish_installing(report);
                    finished = true;
                    break;
                }
            }
        }
        if finished {
            install = None;
        }

        if state.is_installing() {
            feed.tick();
        }
    }

    menu.restore().map_err(CliError::Terminal)?;
    Ok(state.report().cloned())
}
