//! Menu navigation state machine.
//!
//! ```text
//! CliTools -> Extensions -> SpecialTools -> [Enhancers] -> PathInput
//!     -> Summary -> Installing -> Done -> Quit
//! ```
//!
//! `Quit` is reachable from every view through [`MenuState::cancel`]. The
//! machine never performs side effects; starting or cancelling an install is
//! returned to the caller as a [`MenuCommand`].

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::catalog::{Catalog, CatalogItem, Category};
use crate::config::resolve_path;
use crate::installer::{InstallReport, InstallRequest};

use super::set::Selections;

/// The active screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum View {
    CliTools,
    Extensions,
    SpecialTools,
    Enhancers,
    PathInput,
    Summary,
    Installing,
    Done,
    Quit,
}

impl View {
    /// The category listed by a selection view.
    pub fn category(&self) -> Option<Category> {
        match self {
            View::CliTools => Some(Category::CliTool),
            View::Extensions => Some(Category::Extension),
            View::SpecialTools => Some(Category::SpecialTool),
            View::Enhancers => Some(Category::Enhancer),
            _ => None,
        }
    }

    pub fn is_selection(&self) -> bool {
        self.category().is_some()
    }
}

/// Side effects requested by a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    StartInstall(InstallRequest),
    CancelInstall,
}

/// Complete menu state: view, cursor, selections and the path buffer.
#[derive(Debug, Clone)]
pub struct MenuState {
    catalog: Arc<Catalog>,
    view: View,
    cursor: usize,
    selections: Selections,
    show_enhancers: bool,
    default_path: PathBuf,
    path_input: String,
    install_path: PathBuf,
    installing: bool,
    cancel_requested: bool,
    report: Option<InstallReport>,
}

impl MenuState {
    /// Start on the CLI tools view. `default_path` is used when the path
    /// input is left empty.
    pub fn new(catalog: Arc<Catalog>, default_path: impl Into<PathBuf>) -> Self {
        let default_path = default_path.into();
        Self {
            catalog,
            view: View::CliTools,
            cursor: 0,
            selections: Selections::new(),
            show_enhancers: true,
            install_path: default_path.clone(),
            default_path,
            path_input: String::new(),
            installing: false,
            cancel_requested: false,
            report: None,
        }
    }

    /// Include or skip the enhancer step.
    pub fn with_enhancers(mut self, show: bool) -> Self {
        self.show_enhancers = show;
        self
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn view(&self) -> View {
        self.view
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn shows_enhancers(&self) -> bool {
        self.show_enhancers
    }

    pub fn path_input(&self) -> &str {
        &self.path_input
    }

    pub fn default_path(&self) -> &Path {
        &self.default_path
    }

    /// The path leaving `PathInput` now would commit.
    ///
    /// Blank input keeps the default. Typed paths expand `~` and relative
    /// ones are anchored at the working directory.
    pub fn typed_path(&self) -> PathBuf {
        let typed = self.path_input.trim();
        if typed.is_empty() {
            return self.default_path.clone();
        }
        let cwd = std::env::current_dir().unwrap_or_else(|_| self.default_path.clone());
        resolve_path(typed, &cwd)
    }

    /// The committed install path (the default until `PathInput` is left).
    pub fn install_path(&self) -> &Path {
        &self.install_path
    }

    pub fn is_installing(&self) -> bool {
        self.installing
    }

    pub fn cancel_requested(&self) -> bool {
        self.cancel_requested
    }

    pub fn report(&self) -> Option<&InstallReport> {
        self.report.as_ref()
    }

    /// Rows in the active view, counting the "Select All" row.
    pub fn item_count(&self) -> usize {
        match self.view.category() {
            Some(category) => self.catalog.len(category) + 1,
            None => 1,
        }
    }

    /// Catalog items listed by the active view (empty for other views).
    pub fn visible_items(&self) -> &[CatalogItem] {
        match self.view.category() {
            Some(category) => self.catalog.items(category),
            None => &[],
        }
    }

    pub fn is_selected(&self, category: Category, display_name: &str) -> bool {
        self.selections.get(category).contains(display_name)
    }

    pub fn all_selected(&self, category: Category) -> bool {
        self.selections.all_selected(&self.catalog, category)
    }

    // ========================================================================
    // Transitions
    // ========================================================================

    /// Move forward. Returns a command when the summary is confirmed.
    pub fn advance(&mut self) -> Option<MenuCommand> {
        match self.view {
            View::CliTools => self.go_to(View::Extensions),
            View::Extensions => self.go_to(View::SpecialTools),
            View::SpecialTools if self.show_enhancers => self.go_to(View::Enhancers),
            View::SpecialTools | View::Enhancers => self.go_to(View::PathInput),
            View::PathInput => {
                self.commit_path();
                self.go_to(View::Summary);
            }
            View::Summary => {
                if self.installing {
                    return None;
                }
                return Some(MenuCommand::StartInstall(InstallRequest::new(
                    self.install_path.clone(),
                    self.selections.clone(),
                )));
            }
            View::Done => self.go_to(View::Quit),
            View::Installing | View::Quit => {}
        }
        None
    }

    /// Step back one view. Returns `false` when there is nowhere to go.
    pub fn back(&mut self) -> bool {
        let previous = match self.view {
            View::Extensions => View::CliTools,
            View::SpecialTools => View::Extensions,
            View::Enhancers => View::SpecialTools,
            View::PathInput if self.show_enhancers => View::Enhancers,
            View::PathInput => View::SpecialTools,
            View::Summary => View::PathInput,
            View::CliTools | View::Installing | View::Done | View::Quit => return false,
        };
        self.go_to(previous);
        true
    }

    /// Leave the menu, or request cancellation of a running install.
    pub fn cancel(&mut self) -> Option<MenuCommand> {
        if self.view == View::Installing {
            if self.cancel_requested {
                return None;
            }
            self.cancel_requested = true;
            return Some(MenuCommand::CancelInstall);
        }
        self.go_to(View::Quit);
        None
    }

    /// Record that the install thread is running.
    pub fn begin_installing(&mut self) {
        self.installing = true;
        self.cancel_requested = false;
        self.report = None;
        self.go_to(View::Installing);
    }

    /// Record the finished run and show the results, or quit if a
    /// cancellation had been requested.
    pub fn finish_installing(&mut self, report: InstallReport) {
        self.installing = false;
        self.report = Some(report);
        let next = if self.cancel_requested {
            View::Quit
        } else {
            View::Done
        };
        self.go_to(next);
    }

    pub fn move_cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_down(&mut self) {
        if self.cursor + 1 < self.item_count() {
            self.cursor += 1;
        }
    }

    /// Toggle the row under the cursor. Row 0 is "Select All".
    pub fn toggle_current_item(&mut self) {
        let Some(category) = self.view.category() else {
            return;
        };

        if self.cursor == 0 {
            let select_all = !self.all_selected(category);
            let names: Vec<String> = self
                .catalog
                .items(category)
                .iter()
                .map(|item| item.display_name().to_string())
                .collect();
            let set = self.selections.get_mut(category);
            set.clear();
            if select_all {
                for name in names {
                    set.insert(name);
                }
            }
            return;
        }

        if let Some(item) = self.catalog.get(category, self.cursor - 1) {
            let name = item.display_name().to_string();
            self.selections.get_mut(category).toggle(&name);
        }
    }

    pub fn insert_char(&mut self, c: char) {
        if self.view == View::PathInput && !c.is_control() {
            self.path_input.push(c);
        }
    }

    pub fn delete_char(&mut self) {
        if self.view == View::PathInput {
            self.path_input.pop();
        }
    }

    fn commit_path(&mut self) {
        self.install_path = self.typed_path();
    }

    fn go_to(&mut self, view: View) {
        self.view = view;
        self.cursor = 0;
    }
}
