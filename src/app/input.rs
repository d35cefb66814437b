use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use crate::input::keymap::{confirm_action, help_action, keypad_action, Action};
use crate::input::modes::InputMode;
use crate::notes::Key;
use crate::ui::components::export_dialog::ExportField;
use crate::ui::components::{keypad, layout::contains};
use crate::ui::renderer::AppLayout;

use super::App;

impl App {
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        let action = match self.mode_state.mode {
            InputMode::Keypad => keypad_action(key),
            InputMode::Confirm => confirm_action(key),
            InputMode::Help => help_action(key),
            InputMode::Export => {
                self.handle_export_key(key);
                Action::None
            }
        };
        self.execute_action(action);
    }

    fn execute_action(&mut self, action: Action) {
        match action {
            Action::Key(key) => self.press(key),
            Action::ScrollUp => self.scroll_up(),
            Action::ScrollDown => self.scroll_down(),
            Action::ShowHelp => self.mode_state.to_help(),
            Action::Quit => self.request_quit(),
            Action::Confirm => self.confirm_pending(),
            Action::Cancel => self.cancel_pending(),
            Action::None => {}
        }
    }

    fn handle_export_key(&mut self, key: KeyEvent) {
        match (key.code, key.modifiers) {
            (KeyCode::Esc, _) => self.cancel_export(),
            (KeyCode::Enter, KeyModifiers::NONE) => self.execute_export(),
            _ => {
                let Some(dialog) = self.export_dialog.as_mut() else {
                    return;
                };
                match key.code {
                    KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => dialog.next_field(),
                    KeyCode::Left | KeyCode::Right if dialog.active_field == ExportField::Format => {
                        dialog.cycle_format()
                    }
                    _ => dialog.handle_text_key(key.code, key.modifiers),
                }
            }
        }
    }

    /// Left clicks press keypad buttons; a click on the notes is a
    /// backspace. The wheel scrolls the notes.
    pub fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        if !self.mode_state.mode.is_keypad() {
            return;
        }

        let layout = AppLayout::new(self.terminal_size);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if contains(layout.display, mouse.column, mouse.row) {
                    self.press(Key::Backspace);
                } else if let Some(key) = keypad::hit(layout.keypad, mouse.column, mouse.row) {
                    self.press(key);
                }
            }
            MouseEventKind::ScrollUp if contains(layout.display, mouse.column, mouse.row) => self.scroll_up(),
            MouseEventKind::ScrollDown if contains(layout.display, mouse.column, mouse.row) => self.scroll_down(),
            _ => {}
        }
    }
}
