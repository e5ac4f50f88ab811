//! Menu widgets.
//!
//! - `ChecklistWidget` - multi-select list with a "Select All" row
//! - `OutcomesWidget` - per-item results of a finished run

use ratatui::style::Color;

mod checklist;
mod outcomes;

pub use checklist::ChecklistWidget;
pub use outcomes::OutcomesWidget;

/// Title and focus colour.
pub const ACCENT: Color = Color::Rgb(0x7D, 0x56, 0xF4);

/// Plain text of a buffer, one line per row with trailing blanks trimmed.
#[cfg(test)]
pub fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let width = buf.area.width.max(1) as usize;
    buf.content()
        .chunks(width)
        .map(|row| {
            let line: String = row.iter().map(|cell| cell.symbol()).collect();
            line.trim_end().to_string()
        })
        .collect::<Vec<_>>()
        .join("\n")
}
