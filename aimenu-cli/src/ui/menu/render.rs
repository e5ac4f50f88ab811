//! Menu rendering.
//!
//! ```text
//! ┌──────────────────────────────────────────┐
//! │ Title (3 lines)                          │
//! └──────────────────────────────────────────┘
//!   Body (view specific)
//!
//!   Help (1 line)
//! ```

use aimenu::selection::{MenuState, View};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::feed::ProgressFeed;
use super::MenuLabels;
use crate::ui::widgets::{ChecklistWidget, OutcomesWidget, ACCENT};

const SUMMARY: Color = Color::Rgb(0xFF, 0xA5, 0x00);

/// Render the whole menu for the active view.
pub fn render_menu(
    frame: &mut Frame,
    state: &MenuState,
    feed: &ProgressFeed,
    labels: &MenuLabels,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Title
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Help
        ])
        .split(frame.area());

    render_title(frame, chunks[0], state.view());

    let body = Rect {
        x: chunks[1].x + 1,
        width: chunks[1].width.saturating_sub(2),
        ..chunks[1]
    };
    match state.view() {
        View::CliTools | View::Extensions | View::SpecialTools | View::Enhancers => {
            if let Some(category) = state.view().category() {
                frame.render_widget(
                    ChecklistWidget::new(
                        state.visible_items(),
                        state.selections().get(category),
                        state.cursor(),
                    )
                    .all_selected(state.all_selected(category)),
                    body,
                );
            }
        }
        View::PathInput => render_path_input(frame, body, state, labels),
        View::Summary => render_summary(frame, body, state, labels),
        View::Installing => render_installing(frame, body, state, feed),
        View::Done => {
            if let Some(report) = state.report() {
                frame.render_widget(OutcomesWidget::new(report, &labels.rc_path), body);
            }
        }
        View::Quit => {}
    }

    frame.render_widget(
        Paragraph::new(Span::styled(
            help_text(state.view()),
            Style::default().fg(Color::DarkGray),
        )),
        Rect {
            x: chunks[2].x + 1,
            width: chunks[2].width.saturating_sub(2),
            ..chunks[2]
        },
    );
}

fn title_text(view: View) -> &'static str {
    match view {
        View::CliTools => "🚀 Select CLI Tools to Install",
        View::Extensions => "🔌 Select VS Code Extensions to Install",
        View::SpecialTools => "🔧 Select Special Tools to Install",
        View::Enhancers => "✨ Select CLI Enhancers to Install",
        View::PathInput => "📁 Enter Installation Directory",
        View::Summary => "📦 Selected Software for Installation",
        View::Installing => "⏳ Installing...",
        View::Done => "✅ Installation Complete!",
        View::Quit => "Goodbye",
    }
}

fn help_text(view: View) -> &'static str {
    match view {
        View::CliTools => "↑/k up • ↓/j down • space toggle • enter next • q quit",
        View::Extensions | View::SpecialTools | View::Enhancers => {
            "↑/k up • ↓/j down • space toggle • enter next • esc back • q quit"
        }
        View::PathInput => "enter confirm • esc back",
        View::Summary => "enter to start installation • esc back • q quit without installing",
        View::Installing => "Please wait... Installation in progress • q cancel",
        View::Done => "Press enter or q to exit",
        View::Quit => "",
    }
}

fn render_title(frame: &mut Frame, area: Rect, view: View) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(ACCENT));
    let title = Paragraph::new(Span::styled(
        format!(" {}", title_text(view)),
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    ))
    .block(block);
    frame.render_widget(title, area);
}

fn render_path_input(frame: &mut Frame, area: Rect, state: &MenuState, labels: &MenuLabels) {
    let typed = state.path_input();
    let effective = state.typed_path();

    let input_line = if typed.is_empty() {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ACCENT)),
            Span::styled(
                format!("{} (default)", state.default_path().display()),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled("> ", Style::default().fg(ACCENT)),
            Span::styled(typed, Style::default().fg(Color::White)),
            Span::styled("█", Style::default().fg(ACCENT)),
        ])
    };

    let lines = vec![
        Line::from("Enter the directory where the environment will be created:"),
        Line::default(),
        input_line,
        Line::default(),
        Line::from(vec![
            Span::styled("Installation path: ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                effective.join(&labels.env_dir_name).display().to_string(),
                Style::default().fg(SUMMARY),
            ),
        ]),
        Line::default(),
        Line::styled(
            format!(
                "A pixi environment named '{}' will be created with Node.js 22, Python 3.12 and uv.",
                labels.env_dir_name
            ),
            Style::default().fg(Color::DarkGray),
        ),
        Line::styled(
            "Supports: linux-64, linux-aarch64",
            Style::default().fg(Color::DarkGray),
        ),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_summary(frame: &mut Frame, area: Rect, state: &MenuState, labels: &MenuLabels) {
    let heading = Style::default().fg(SUMMARY).add_modifier(Modifier::BOLD);
    let mut lines = vec![
        Line::styled("Installation Path:", heading),
        Line::from(format!(
            "  📁 {}",
            state
                .install_path()
                .join(&labels.env_dir_name)
                .display()
        )),
        Line::default(),
    ];

    if state.selections().is_empty() {
        lines.push(Line::styled(
            "No items selected for installation.",
            Style::default().fg(Color::DarkGray),
        ));
        lines.push(Line::styled(
            "The environment will still be prepared.",
            Style::default().fg(Color::DarkGray),
        ));
    }

    let catalog = state.catalog();
    for category in aimenu::catalog::Category::ALL {
        let chosen: Vec<&str> = catalog
            .items(category)
            .iter()
            .map(|item| item.display_name())
            .filter(|name| state.is_selected(category, name))
            .collect();
        if chosen.is_empty() {
            continue;
        }
        lines.push(Line::styled(format!("{}:", category.title()), heading));
        for name in chosen {
            lines.push(Line::from(vec![
                Span::styled("  • ", Style::default().fg(Color::Green)),
                Span::raw(name),
            ]));
        }
        lines.push(Line::default());
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

fn render_installing(frame: &mut Frame, area: Rect, state: &MenuState, feed: &ProgressFeed) {
    let status = match feed.current_item() {
        Some(name) => format!("Installing {}...", name),
        None => "Preparing...".to_string(),
    };
    let mut lines = vec![
        Line::from(vec![
            Span::styled(
                format!("{} ", feed.spinner()),
                Style::default().fg(Color::Cyan),
            ),
            Span::styled(status, Style::default().add_modifier(Modifier::BOLD)),
        ]),
        Line::default(),
    ];
    if state.cancel_requested() {
        lines.push(Line::styled(
            "Cancelling after the current item...",
            Style::default().fg(Color::Yellow),
        ));
        lines.push(Line::default());
    }
    for line in feed.recent() {
        lines.push(Line::styled(line.as_str(), Style::default().fg(Color::Gray)));
    }
    frame.render_widget(Paragraph::new(lines), area);
}
