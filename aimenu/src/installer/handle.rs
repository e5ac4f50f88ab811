//! Background execution of an install run.

use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::sync::Arc;
use std::thread::{self, JoinHandle};

use tokio_util::sync::CancellationToken;
use tracing::error;

use super::orchestrator::{InstallOrchestrator, InstallRequest};
use super::outcome::{InstallOutcome, InstallReport};
use super::progress::{InstallProgress, ProgressSink};

/// Handle to an install running on its own thread.
///
/// Progress is polled with [`InstallHandle::try_recv`] so a UI loop never
/// blocks. The last event is always [`InstallProgress::Finished`].
pub struct InstallHandle {
    rx: Receiver<InstallProgress>,
    cancel: CancellationToken,
    thread: Option<JoinHandle<()>>,
    /// Outcomes seen so far, kept in case the worker dies.
    seen: Vec<InstallOutcome>,
}

impl InstallHandle {
    /// Start `request` on a new thread.
    pub fn spawn(
        orchestrator: Arc<InstallOrchestrator>,
        request: InstallRequest,
    ) -> std::io::Result<Self> {
        let (tx, rx) = mpsc::channel();
        let cancel = CancellationToken::new();
        let thread_cancel = cancel.clone();

        let thread = thread::Builder::new()
            .name("aimenu-install".to_string())
            .spawn(move || {
                let report = orchestrator.run(&request, &tx, &thread_cancel);
                tx.emit(InstallProgress::Finished(report));
            })?;

        Ok(Self {
            rx,
            cancel,
            thread: Some(thread),
            seen: Vec::new(),
        })
    }

    /// Next pending event, if any.
    ///
    /// Returns `None` when nothing is queued. A worker that died without
    /// reporting is surfaced once as an [`InstallProgress::Finished`] whose
    /// report carries the outcomes received so far and a `worker_error`.
    pub fn try_recv(&mut self) -> Option<InstallProgress> {
        match self.rx.try_recv() {
            Ok(event) => {
                if let InstallProgress::ItemFinished(outcome) = &event {
                    self.seen.push(outcome.clone());
                }
                Some(event)
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => self.reap(),
        }
    }

    /// Ask the run to stop after the item in progress.
    pub fn cancel(&self) {
        self.cancel.cancel();
    }

    fn reap(&mut self) -> Option<InstallProgress> {
        let thread = self.thread.take()?;
        match thread.join() {
            Ok(()) => None,
            Err(_) => {
                error!(completed = self.seen.len(), "Install thread panicked");
                Some(InstallProgress::Finished(InstallReport::interrupted(
                    std::mem::take(&mut self.seen),
                    "install thread stopped unexpectedly",
                )))
            }
        }
    }
}

impl Drop for InstallHandle {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{Catalog, Category};
    use crate::process::{
        CommandOutput, CommandRunner, CommandSpec, ProcessError, RecordingRunner,
    };
    use crate::selection::Selections;
    use crate::shell::ShellIntegrationWriter;
    use std::time::{Duration, Instant};
    use tempfile::TempDir;

    fn drain_until_finished(handle: &mut InstallHandle) -> Vec<InstallProgress> {
        let deadline = Instant::now() + Duration::from_secs(10);
        let mut events = Vec::new();
        while Instant::now() < deadline {
            match handle.try_recv() {
                Some(event) => {
                    let done = matches!(event, InstallProgress::Finished(_));
                    events.push(event);
                    if done {
                        return events;
                    }
                }
                None => thread::sleep(Duration::from_millis(5)),
            }
        }
        panic!("install did not finish");
    }

    #[test]
    fn test_spawned_run_streams_events_and_finishes() {
        let temp = TempDir::new().unwrap();
        let orchestrator = Arc::new(InstallOrchestrator::new(
            Arc::new(Catalog::builtin()),
            Arc::new(RecordingRunner::new()),
            ShellIntegrationWriter::new(temp.path().join(".zshrc")),
        ));
        let request = InstallRequest::new(
            temp.path(),
            Selections::new().with(Category::CliTool, "OpenCode"),
        );

        let mut handle = InstallHandle::spawn(orchestrator, request).unwrap();
        let events = drain_until_finished(&mut handle);

        assert!(events
            .iter()
            .any(|e| matches!(e, InstallProgress::ItemFinished(o) if o.name() == "opencode")));
        match events.last() {
            Some(InstallProgress::Finished(report)) => assert_eq!(report.succeeded_count(), 1),
            other => panic!("unexpected last event {:?}", other),
        }
        assert!(handle.try_recv().is_none());
    }

    /// Delegates to a [`RecordingRunner`] but panics on matching commands.
    struct PanickingRunner {
        inner: RecordingRunner,
        pattern: &'static str,
    }

    impl PanickingRunner {
        fn on(pattern: &'static str) -> Self {
            Self {
                inner: RecordingRunner::new(),
                pattern,
            }
        }
    }

    impl CommandRunner for PanickingRunner {
        fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, ProcessError> {
            if spec.to_string().contains(self.pattern) {
                panic!("runner exploded");
            }
            self.inner.run(spec)
        }

        fn is_available(&self, program: &str) -> bool {
            self.inner.is_available(program)
        }
    }

    #[test]
    fn test_dead_worker_reports_worker_error() {
        let temp = TempDir::new().unwrap();
        let orchestrator = Arc::new(InstallOrchestrator::new(
            Arc::new(Catalog::builtin()),
            Arc::new(PanickingRunner::on("pixi")),
            ShellIntegrationWriter::new(temp.path().join(".zshrc")),
        ));
        let request = InstallRequest::new(temp.path(), Selections::new());

        let mut handle = InstallHandle::spawn(orchestrator, request).unwrap();
        let events = drain_until_finished(&mut handle);

        match events.last() {
            Some(InstallProgress::Finished(report)) => {
                assert!(report.prerequisite_error.is_none());
                assert!(report.worker_error.is_some());
                assert!(report.outcomes.is_empty());
                assert!(!report.is_success());
            }
            other => panic!("unexpected last event {:?}", other),
        }
    }

    #[test]
    fn test_dead_worker_keeps_finished_outcomes() {
        let temp = TempDir::new().unwrap();
        let orchestrator = Arc::new(InstallOrchestrator::new(
            Arc::new(Catalog::builtin()),
            Arc::new(PanickingRunner::on(" jq")),
            ShellIntegrationWriter::new(temp.path().join(".zshrc")),
        ));
        let request = InstallRequest::new(
            temp.path(),
            Selections::new()
                .with(Category::CliTool, "OpenCode")
                .with(Category::SpecialTool, "jq"),
        );

        let mut handle = InstallHandle::spawn(orchestrator, request).unwrap();
        let events = drain_until_finished(&mut handle);

        match events.last() {
            Some(InstallProgress::Finished(report)) => {
                assert_eq!(report.succeeded_count(), 1);
                assert_eq!(report.outcomes[0].name(), "opencode");
                assert_eq!(
                    report.worker_error.as_deref(),
                    Some("install thread stopped unexpectedly")
                );
                assert!(!report.is_success());
            }
            other => panic!("unexpected last event {:?}", other),
        }
        assert!(handle.try_recv().is_none());
    }
}
