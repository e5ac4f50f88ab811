//! Multi-select checklist with a leading "Select All" row.

use aimenu::catalog::CatalogItem;
use aimenu::selection::SelectionSet;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use super::ACCENT;

/// Checklist of catalog items.
///
/// Cursor row 0 is "Select All"; row `i` is item `i - 1`. The list scrolls
/// to keep the cursor visible.
pub struct ChecklistWidget<'a> {
    items: &'a [CatalogItem],
    selected: &'a SelectionSet,
    cursor: usize,
    all_selected: bool,
}

impl<'a> ChecklistWidget<'a> {
    pub fn new(items: &'a [CatalogItem], selected: &'a SelectionSet, cursor: usize) -> Self {
        Self {
            items,
            selected,
            cursor,
            all_selected: false,
        }
    }

    /// Check the "Select All" row, as decided by the selection state.
    pub fn all_selected(mut self, all_selected: bool) -> Self {
        self.all_selected = all_selected;
        self
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::with_capacity(self.items.len() + 2);
        lines.push(row(self.cursor == 0, self.all_selected, "Select All", ""));
        lines.push(Line::default());
        for (i, item) in self.items.iter().enumerate() {
            lines.push(row(
                self.cursor == i + 1,
                self.selected.contains(item.display_name()),
                item.display_name(),
                item.description(),
            ));
        }
        lines
    }

    /// Screen line of the cursor; the blank spacer shifts items down by one.
    fn cursor_line(&self) -> usize {
        if self.cursor == 0 {
            0
        } else {
            self.cursor + 1
        }
    }
}

fn row<'a>(focused: bool, checked: bool, label: &'a str, description: &'a str) -> Line<'a> {
    let pointer = if focused { ">" } else { " " };
    let (mark, mark_style) = if checked {
        (
            "[✓]",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("[ ]", Style::default().fg(Color::DarkGray))
    };
    let label_style = if focused {
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    };

    let mut spans = vec![
        Span::styled(format!("{} ", pointer), label_style),
        Span::styled(mark, mark_style),
        Span::raw(" "),
        Span::styled(label, label_style),
    ];
    if !description.is_empty() {
        spans.push(Span::styled(
            format!("  {}", description),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

impl Widget for ChecklistWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = area.height as usize;
        let offset = (self.cursor_line() + 1).saturating_sub(height);
        Paragraph::new(self.lines())
            .scroll((offset as u16, 0))
            .render(area, buf);
    }
}
