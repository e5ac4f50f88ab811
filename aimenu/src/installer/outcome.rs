//! Results of an install run.

use crate::catalog::Category;

/// The recorded result of one attempted installation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallOutcome {
    name: String,
    category: Category,
    succeeded: bool,
    error_detail: Option<String>,
    status_message: String,
}

impl InstallOutcome {
    pub fn success(category: Category, name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            status_message: format!("✓ {} installed successfully", name),
            name,
            category,
            succeeded: true,
            error_detail: None,
        }
    }

    pub fn failure(
        category: Category,
        name: impl Into<String>,
        detail: impl Into<String>,
    ) -> Self {
        let name = name.into();
        let detail = detail.into();
        Self {
            status_message: format!("✗ Failed to install {}: {}", name, first_line(&detail)),
            name,
            category,
            succeeded: false,
            error_detail: Some(detail),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn succeeded(&self) -> bool {
        self.succeeded
    }

    pub fn error_detail(&self) -> Option<&str> {
        self.error_detail.as_deref()
    }

    pub fn status_message(&self) -> &str {
        &self.status_message
    }
}

fn first_line(text: &str) -> &str {
    text.lines().next().unwrap_or_default()
}

/// Everything a finished run produced.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallReport {
    /// Outcomes in category order, then catalog order.
    pub outcomes: Vec<InstallOutcome>,
    /// Alias lines appended to the shell startup file.
    pub aliases_added: usize,
    /// Set when prerequisite provisioning failed and nothing was installed.
    pub prerequisite_error: Option<String>,
    /// Set when the run stopped early on request.
    pub cancelled: bool,
    /// Set when the install thread died mid-run. `outcomes` then holds
    /// only what was reported before it stopped.
    pub worker_error: Option<String>,
}

impl InstallReport {
    /// A report for a run that never got past provisioning.
    pub fn aborted(error: impl Into<String>) -> Self {
        Self {
            prerequisite_error: Some(error.into()),
            ..Self::default()
        }
    }

    /// A report for a run whose worker stopped after producing `outcomes`.
    pub fn interrupted(outcomes: Vec<InstallOutcome>, error: impl Into<String>) -> Self {
        Self {
            outcomes,
            worker_error: Some(error.into()),
            ..Self::default()
        }
    }

    pub fn succeeded_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.succeeded()).count()
    }

    pub fn failed_count(&self) -> usize {
        self.outcomes.len() - self.succeeded_count()
    }

    pub fn failures(&self) -> impl Iterator<Item = &InstallOutcome> {
        self.outcomes.iter().filter(|o| !o.succeeded())
    }

    /// Whether the run counts as fully successful.
    pub fn is_success(&self) -> bool {
        self.prerequisite_error.is_none()
            && self.worker_error.is_none()
            && !self.cancelled
            && self.failed_count() == 0
    }
}
