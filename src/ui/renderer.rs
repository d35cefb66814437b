//! Frame Renderer
//!
//! Lays out the notes display, keypad and status bars, then draws any popup
//! on top.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use super::components::{
    keypad, ConfirmDialog, ExportDialog, ExportDialogWidget, HelpBar, HelpPopup, Keypad,
    MessageType, NoteDisplay, StatusLine,
};
use crate::input::InputMode;
use crate::notes::{Key, Session};

/// Screen regions, shared by drawing and mouse hit testing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppLayout {
    pub display: Rect,
    pub keypad: Rect,
    pub status: Rect,
    pub help: Rect,
}

impl AppLayout {
    pub fn new(area: Rect) -> Self {
        // Keep at least three note lines visible on short terminals
        let keypad_height = keypad::HEIGHT.min(area.height.saturating_sub(2 + 5));
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(3),
                Constraint::Length(keypad_height),
                Constraint::Length(1),
                Constraint::Length(1),
            ])
            .split(area);

        Self {
            display: chunks[0],
            keypad: chunks[1],
            status: chunks[2],
            help: chunks[3],
        }
    }
}

pub struct UiState<'a> {
    pub mode: InputMode,
    pub session: &'a Session,
    pub scroll_back: usize,
    pub message: Option<(&'a str, MessageType)>,
    pub confirm_message: Option<&'a str>,
    pub export_dialog: Option<&'a ExportDialog>,
}

pub struct Renderer;

impl Renderer {
    pub fn render(frame: &mut Frame, state: &UiState) {
        let area = frame.area();
        let layout = AppLayout::new(area);

        frame.render_widget(NoteDisplay::new(state.session.text()).scroll_back(state.scroll_back), layout.display);

        let session = state.session;
        let enabled = |key: Key| session.accepts(key);
        frame.render_widget(Keypad::new(&enabled), layout.keypad);

        frame.render_widget(status_line(state), layout.status);
        frame.render_widget(HelpBar::for_mode(state.mode), layout.help);

        Self::render_popup(frame, state, area);
    }

    fn render_popup(frame: &mut Frame, state: &UiState, area: Rect) {
        match state.mode {
            InputMode::Export => {
                if let Some(dialog) = state.export_dialog {
                    frame.render_widget(ExportDialogWidget::new(dialog), area);
                }
            }
            InputMode::Confirm => {
                let message = state.confirm_message.unwrap_or("Are you sure?");
                frame.render_widget(ConfirmDialog::new(" Confirm ", message), area);
            }
            InputMode::Help => frame.render_widget(HelpPopup, area),
            InputMode::Keypad => {}
        }
    }
}

fn status_line<'a>(state: &UiState<'a>) -> StatusLine<'a> {
    let history = state.session.history();
    let status = StatusLine::new(state.mode)
        .entry(state.session.document().entry_number())
        .history(history.position(), history.snapshot_count());

    match state.message {
        Some((msg, msg_type)) => status.message(msg, msg_type),
        None => status,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_stacks_regions() {
        let layout = AppLayout::new(Rect::new(0, 0, 60, 40));
        assert_eq!(layout.keypad.height, keypad::HEIGHT);
        assert_eq!(layout.status.y, 38);
        assert_eq!(layout.help.y, 39);
        assert_eq!(layout.display.height, 40 - keypad::HEIGHT - 2);
    }

    #[test]
    fn test_layout_shrinks_keypad_on_short_terminal() {
        let layout = AppLayout::new(Rect::new(0, 0, 60, 14));
        assert_eq!(layout.keypad.height, 7);
        assert_eq!(layout.display.height, 5);
    }
}
