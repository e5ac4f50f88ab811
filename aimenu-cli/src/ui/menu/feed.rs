//! Scrolling progress feed shown while installing.

use aimenu::installer::InstallProgress;

/// Spinner animation frames.
pub const SPINNER_FRAMES: &[char] = &['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧', '⠇', '⠏'];

/// Number of progress lines kept on screen.
pub const VISIBLE_LINES: usize = 10;

/// Progress lines received so far plus the spinner position.
#[derive(Debug, Clone, Default)]
pub struct ProgressFeed {
    lines: Vec<String>,
    current_item: Option<String>,
    spinner_frame: usize,
}

impl ProgressFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an event from the install thread.
    pub fn push(&mut self, event: &InstallProgress) {
        match event {
            InstallProgress::ItemStarted { name, .. } => self.current_item = Some(name.clone()),
            InstallProgress::ItemFinished(_) | InstallProgress::Finished(_) => {
                self.current_item = None
            }
            _ => {}
        }
        if let Some(line) = event.display_line() {
            self.lines.push(line);
        }
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.current_item = None;
    }

    /// The most recent [`VISIBLE_LINES`] lines, oldest first.
    pub fn recent(&self) -> &[String] {
        let start = self.lines.len().saturating_sub(VISIBLE_LINES);
        &self.lines[start..]
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Name of the item whose command is running.
    pub fn current_item(&self) -> Option<&str> {
        self.current_item.as_deref()
    }

    /// Advance the spinner by one frame.
    pub fn tick(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> char {
        SPINNER_FRAMES[self.spinner_frame]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aimenu::catalog::Category;
    use aimenu::installer::{InstallOutcome, InstallReport};

    #[test]
    fn test_keeps_only_recent_lines_visible() {
        let mut feed = ProgressFeed::new();
        for i in 0..15 {
            feed.push(&InstallProgress::message(format!("line {}", i)));
        }

        assert_eq!(feed.len(), 15);
        let recent = feed.recent();
        assert_eq!(recent.len(), VISIBLE_LINES);
        assert_eq!(recent[0], "line 5");
        assert_eq!(recent[9], "line 14");
    }

    #[test]
    fn test_tracks_current_item() {
        let mut feed = ProgressFeed::new();
        feed.push(&InstallProgress::ItemStarted {
            category: Category::SpecialTool,
            name: "jq".to_string(),
        });
        assert_eq!(feed.current_item(), Some("jq"));

        feed.push(&InstallProgress::ItemFinished(InstallOutcome::success(
            Category::SpecialTool,
            "jq",
        )));
        assert_eq!(feed.current_item(), None);
        assert_eq!(feed.recent(), ["Installing jq...", "✓ jq installed successfully"]);
    }

    #[test]
    fn test_finished_adds_no_line() {
        let mut feed = ProgressFeed::new();
        feed.push(&InstallProgress::Finished(InstallReport::default()));
        assert!(feed.is_empty());
    }

    #[test]
    fn test_spinner_wraps() {
        let mut feed = ProgressFeed::new();
        let first = feed.spinner();
        for _ in 0..SPINNER_FRAMES.len() {
            feed.tick();
        }
        assert_eq!(feed.spinner(), first);
    }
}
