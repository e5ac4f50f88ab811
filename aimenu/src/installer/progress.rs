//! Progress events streamed out of an install run.

use std::sync::mpsc::Sender;
use std::sync::RwLock;

use crate::catalog::Category;

use super::outcome::{InstallOutcome, InstallReport};

/// One event from a running install.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstallProgress {
    /// Informational status line.
    Message(String),
    /// Something was skipped or could not be done, but the run continues.
    Warning(String),
    /// A category's installs are starting.
    CategoryStarted(Category),
    /// An item's install command is about to run.
    ItemStarted { category: Category, name: String },
    /// An item finished, successfully or not.
    ItemFinished(InstallOutcome),
    /// The run is over. Always the last event.
    Finished(InstallReport),
}

impl InstallProgress {
    pub fn message(text: impl Into<String>) -> Self {
        InstallProgress::Message(text.into())
    }

    pub fn warning(text: impl Into<String>) -> Self {
        InstallProgress::Warning(text.into())
    }

    /// The line shown in the progress feed, if the event has one.
    pub fn display_line(&self) -> Option<String> {
        match self {
            InstallProgress::Message(text) => Some(text.clone()),
            InstallProgress::Warning(text) => Some(format!("⚠️  {}", text)),
            InstallProgress::CategoryStarted(category) => {
                Some(format!("Installing {}...", category.title()))
            }
            InstallProgress::ItemStarted { name, .. } => Some(format!("Installing {}...", name)),
            InstallProgress::ItemFinished(outcome) => Some(outcome.status_message().to_string()),
            InstallProgress::Finished(_) => None,
        }
    }
}

/// Receives progress events from the orchestrator.
pub trait ProgressSink: Send + Sync {
    fn emit(&self, event: InstallProgress);
}

impl ProgressSink for Sender<InstallProgress> {
    fn emit(&self, event: InstallProgress) {
        // The receiver going away (UI closed) must not stop the run.
        let _ = self.send(event);
    }
}

/// Discards every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ProgressSink for NullSink {
    fn emit(&self, _event: InstallProgress) {}
}

/// Collects events in memory.
#[derive(Debug, Default)]
pub struct RecordingSink {
    events: RwLock<Vec<InstallProgress>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<InstallProgress> {
        self.events.read().map(|e| e.clone()).unwrap_or_default()
    }

    /// Display lines of all recorded events.
    pub fn lines(&self) -> Vec<String> {
        self.events()
            .iter()
            .filter_map(InstallProgress::display_line)
            .collect()
    }

    pub fn warnings(&self) -> Vec<String> {
        self.events()
            .into_iter()
            .filter_map(|e| match e {
                InstallProgress::Warning(text) => Some(text),
                _ => None,
            })
            .collect()
    }
}

impl ProgressSink for RecordingSink {
    fn emit(&self, event: InstallProgress) {
        if let Ok(mut events) = self.events.write() {
            events.push(event);
        }
    }
}
