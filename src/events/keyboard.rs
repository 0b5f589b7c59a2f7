//! Keyboard event handling by input mode.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, InputField, Panel};

use super::Action;

/// Handle keyboard events and return the appropriate action.
pub fn handle_key_event(app: &App, key: KeyEvent) -> Action {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    if app.open_input().is_some() {
        handle_draft_mode(key)
    } else {
        handle_normal_mode(app, key)
    }
}

fn focused_input(app: &App) -> Option<InputField> {
    match app.focus {
        Panel::DialogInput => Some(InputField::Dialog),
        Panel::PopoverInput => Some(InputField::Popover),
        _ => None,
    }
}

fn handle_normal_mode(app: &App, key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('q') => Action::Quit,

        KeyCode::Tab => Action::FocusNext,
        KeyCode::BackTab => Action::FocusPrev,
        KeyCode::Char(c @ '1'..='5') => {
            let idx = (c as usize) - ('1' as usize);
            Action::Focus(Panel::ALL[idx])
        }

        KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,
        KeyCode::Char('g') | KeyCode::Home => Action::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => Action::SelectLast,

        KeyCode::Char('h') | KeyCode::Left => Action::ColumnPrev,
        KeyCode::Char('l') | KeyCode::Right => Action::ColumnNext,

        KeyCode::Char('d') => Action::OpenDateInput(app.preferred_input),
        KeyCode::Enter | KeyCode::Char(' ') => {
            focused_input(app).map_or(Action::None, Action::OpenDateInput)
        }
        KeyCode::Char('x') | KeyCode::Delete | KeyCode::Backspace => {
            focused_input(app).map_or(Action::None, Action::ClearDateInput)
        }

        _ => Action::None,
    }
}

fn handle_draft_mode(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => Action::CancelDateInput,
        KeyCode::Enter => Action::SubmitDateInput,

        KeyCode::Char('j') | KeyCode::Down => Action::SelectNext,
        KeyCode::Char('k') | KeyCode::Up => Action::SelectPrev,
        KeyCode::Char('g') | KeyCode::Home => Action::SelectFirst,
        KeyCode::Char('G') | KeyCode::End => Action::SelectLast,

        KeyCode::Char('h') | KeyCode::Left | KeyCode::BackTab => Action::ColumnPrev,
        KeyCode::Char('l') | KeyCode::Right | KeyCode::Tab => Action::ColumnNext,

        _ => Action::None,
    }
}
