//! Terminal UI for aimenu.
//!
//! Provides the interactive selection menu: category checklists, the path
//! page, the summary, live install progress and the results page.

pub mod menu;
pub mod widgets;

pub use menu::{Menu, MenuLabels, ProgressFeed};
