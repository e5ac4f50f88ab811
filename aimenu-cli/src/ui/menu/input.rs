//! Key handling for the menu.
//!
//! [`map_key`] turns a key press into a [`MenuInput`] for the active view
//! and [`apply`] feeds it to the state machine. Neither touches the
//! terminal, so the whole keyboard contract is testable.

use aimenu::selection::{MenuCommand, MenuState, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A user intent, independent of the key that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuInput {
    Up,
    Down,
    Toggle,
    Confirm,
    Back,
    Quit,
    Char(char),
    Backspace,
}

/// Map a key press to an input for `view`.
///
/// On the path input page printable keys (including `q`, `j` and `k`) are
/// text; Ctrl+C quits from every view.
pub fn map_key(key: KeyEvent, view: View) -> Option<MenuInput> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') | KeyCode::Char('C') => Some(MenuInput::Quit),
            _ => None,
        };
    }

    match view {
        View::PathInput => match key.code {
            KeyCode::Enter => Some(MenuInput::Confirm),
            KeyCode::Esc => Some(MenuInput::Back),
            KeyCode::Backspace => Some(MenuInput::Backspace),
            KeyCode::Char(c) => Some(MenuInput::Char(c)),
            _ => None,
        },
        View::Installing => match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuInput::Quit),
            _ => None,
        },
        View::Done => match key.code {
            KeyCode::Enter => Some(MenuInput::Confirm),
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(MenuInput::Quit),
            _ => None,
        },
        View::Quit => None,
        _ => match key.code {
            KeyCode::Up | KeyCode::Char('k') => Some(MenuInput::Up),
            KeyCode::Down | KeyCode::Char('j') => Some(MenuInput::Down),
            KeyCode::Char(' ') => Some(MenuInput::Toggle),
            KeyCode::Enter => Some(MenuInput::Confirm),
            KeyCode::Esc => Some(MenuInput::Back),
            KeyCode::Char('q') | KeyCode::Char('Q') => Some(MenuInput::Quit),
            _ => None,
        },
    }
}

/// Apply an input to the state machine, returning any side effect it asks for.
pub fn apply(state: &mut MenuState, input: MenuInput) -> Option<MenuCommand> {
    match input {
        MenuInput::Up => state.move_cursor_up(),
        MenuInput::Down => state.move_cursor_down(),
        MenuInput::Toggle => state.toggle_current_item(),
        MenuInput::Confirm => return state.advance(),
        MenuInput::Back => {
            state.back();
        }
        MenuInput::Quit => return state.cancel(),
        MenuInput::Char(c) => state.insert_char(c),
        MenuInput::Backspace => state.delete_char(),
    }
    None
}
