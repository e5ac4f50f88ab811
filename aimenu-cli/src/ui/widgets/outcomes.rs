//! Results of a finished install run.

use std::path::Path;

use aimenu::installer::InstallReport;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use super::ACCENT;

/// Counts, one line per outcome and the shell reload reminder.
pub struct OutcomesWidget<'a> {
    report: &'a InstallReport,
    rc_path: &'a Path,
}

impl<'a> OutcomesWidget<'a> {
    pub fn new(report: &'a InstallReport, rc_path: &'a Path) -> Self {
        Self { report, rc_path }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let summary = Style::default()
            .fg(Color::Rgb(0xFF, 0xA5, 0x00))
            .add_modifier(Modifier::BOLD);
        let ok = Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD);
        let failed = Style::default().fg(Color::Red);
        let mut lines = Vec::new();

        if let Some(error) = &self.report.prerequisite_error {
            lines.push(Line::styled(format!("✗ {}", error), failed));
            lines.push(Line::default());
            lines.push(Line::styled(
                "No tools were installed. Check that pixi is installed and on your PATH.",
                Style::default().fg(Color::DarkGray),
            ));
            return lines;
        }

        let succeeded = self.report.succeeded_count();
        let failures = self.report.failed_count();
        if succeeded > 0 {
            lines.push(Line::styled(
                format!("✓ {} tools installed successfully", succeeded),
                summary,
            ));
        }
        if failures > 0 {
            lines.push(Line::styled(
                format!("✗ {} tools failed to install", failures),
                Style::default().fg(Color::DarkGray),
            ));
        }
        if self.report.outcomes.is_empty() {
            lines.push(Line::styled("No tools were installed.", summary));
        }
        if let Some(error) = &self.report.worker_error {
            lines.push(Line::styled(format!("✗ {}", error), failed));
        }
        lines.push(Line::default());

        for outcome in &self.report.outcomes {
            match outcome.error_detail() {
                None => lines.push(Line::styled(format!("✓ {}", outcome.name()), ok)),
                Some(detail) => lines.push(Line::styled(
                    format!(
                        "✗ {}: {}",
                        outcome.name(),
                        detail.lines().next().unwrap_or_default()
                    ),
                    failed,
                )),
            }
        }

        if self.report.aliases_added > 0 {
            lines.push(Line::default());
            lines.push(Line::styled(
                "⚠️  Important: To use the new aliases, run:",
                summary,
            ));
            lines.push(Line::from(Span::styled(
                format!("  source {}", self.rc_path.display()),
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            )));
        }
        lines
    }
}

impl Widget for OutcomesWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(self.lines())
            .wrap(Wrap { trim: false })
            .render(area, buf);
    }
}
