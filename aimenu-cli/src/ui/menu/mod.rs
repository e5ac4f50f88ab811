//! Interactive menu terminal.
//!
//! Owns the raw-mode alternate screen for the lifetime of the menu and
//! restores the terminal on drop, including when the caller unwinds.

mod feed;
mod input;
mod render;

use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::Duration;

use aimenu::selection::{MenuState, View};
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

pub use feed::ProgressFeed;
pub use input::{apply, MenuInput};
pub use render::render_menu;

use input::map_key;

/// Static text the menu needs from configuration.
#[derive(Debug, Clone)]
pub struct MenuLabels {
    /// Environment directory name shown in path previews.
    pub env_dir_name: String,
    /// Shell startup file named in the reload reminder.
    pub rc_path: PathBuf,
}

/// The menu terminal.
pub struct Menu {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    labels: MenuLabels,
    restored: bool,
}

impl Menu {
    /// Enter raw mode and the alternate screen.
    ///
    /// If anything after raw mode fails the terminal is put back before the
    /// error is returned.
    pub fn new(labels: MenuLabels) -> io::Result<Self> {
        enable_raw_mode()?;
        let terminal = or_rollback(
            || {
                let mut stdout = io::stdout();
                execute!(stdout, EnterAlternateScreen)?;
                let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
                terminal.hide_cursor()?;
                Ok(terminal)
            },
            || {
                let _ = execute!(io::stdout(), LeaveAlternateScreen);
                let _ = disable_raw_mode();
            },
        )?;

        Ok(Self {
            terminal,
            labels,
            restored: false,
        })
    }

    /// Restore terminal to normal state.
    pub fn restore(&mut self) -> io::Result<()> {
        if self.restored {
            return Ok(());
        }
        self.restored = true;
        disable_raw_mode()?;
        execute!(self.terminal.backend_mut(), LeaveAlternateScreen)?;
        self.terminal.show_cursor()?;
        Ok(())
    }

    pub fn draw(&mut self, state: &MenuState, feed: &ProgressFeed) -> io::Result<()> {
        let labels = &self.labels;
        self.terminal
            .draw(|frame| render_menu(frame, state, feed, labels))?;
        Ok(())
    }

    /// Wait up to `timeout` for a key press and map it for `view`.
    ///
    /// Key releases and repeats are ignored so each press acts once on
    /// terminals that report all three.
    pub fn poll_input(&mut self, view: View, timeout: Duration) -> io::Result<Option<MenuInput>> {
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(map_key(key, view));
                }
            }
        }
        Ok(None)
    }
}

impl Drop for Menu {
    fn drop(&mut self) {
        let _ = self.restore();
    }
}

/// Run `setup`, calling `rollback` first if it fails.
fn or_rollback<T>(
    setup: impl FnOnce() -> io::Result<T>,
    rollback: impl FnOnce(),
) -> io::Result<T> {
    match setup() {
        Ok(value) => Ok(value),
        Err(e) => {
            rollback();
            Err(e)
        }
    }
}
