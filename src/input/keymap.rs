//! Key Mapping
//!
//! Translates terminal key events into keypad keys and app actions.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::notes::{Key, Symbol};

/// What a terminal key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Key(Key),
    ScrollUp,
    ScrollDown,
    ShowHelp,
    Quit,
    Confirm,
    Cancel,
    None,
}

pub fn keypad_action(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('c'), KeyModifiers::CONTROL) | (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('z'), KeyModifiers::CONTROL) | (KeyCode::Char('u'), KeyModifiers::NONE) => Action::Key(Key::Undo),
        (KeyCode::Char('y'), KeyModifiers::CONTROL) | (KeyCode::Char('r'), KeyModifiers::CONTROL) => Action::Key(Key::Redo),
        (KeyCode::Char('s'), KeyModifiers::CONTROL) | (KeyCode::Char('e'), KeyModifiers::NONE) => Action::Key(Key::Export),
        (KeyCode::Char('y'), KeyModifiers::NONE) => Action::Key(Key::Copy),
        (KeyCode::Char('c'), KeyModifiers::NONE) | (KeyCode::Delete, _) => Action::Key(Key::Clear),
        (KeyCode::Char('o'), KeyModifiers::NONE) | (KeyCode::Char(' '), _) | (KeyCode::Tab, _) => Action::Key(Key::Ok),
        (KeyCode::Char('?'), _) => Action::ShowHelp,
        (KeyCode::Backspace, _) => Action::Key(Key::Backspace),
        (KeyCode::Enter, _) => Action::Key(Key::Enter),
        (KeyCode::PageUp, _) => Action::ScrollUp,
        (KeyCode::PageDown, _) => Action::ScrollDown,
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            Symbol::from_char(c).map_or(Action::None, |s| Action::Key(Key::Symbol(s)))
        }
        _ => Action::None,
    }
}

pub fn confirm_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => Action::Confirm,
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Action::Cancel,
        _ => Action::None,
    }
}

pub fn help_action(key: KeyEvent) -> Action {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('?') | KeyCode::Enter => Action::Cancel,
        _ => Action::None,
    }
}
