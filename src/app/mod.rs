//! Application State
//!
//! Ties the editing session to the terminal: input routing, popups,
//! clipboard and export.

mod clipboard;
mod config;
mod input;
pub mod logging;
mod shell;

use chrono::Local;
use ratatui::{layout::Rect, Frame};
use tracing::{error, info};

use crate::input::modes::ModeState;
use crate::notes::export::export_to_file;
use crate::notes::{Key, Session};
use crate::ui::components::scroll::max_scroll_back;
use crate::ui::components::{ExportDialog, MessageType};
use crate::ui::renderer::{AppLayout, Renderer, UiState};

pub use config::{AppConfig, PendingAction};
pub use shell::Shell;

/// Lines moved per PageUp/PageDown or wheel notch
const SCROLL_STEP: usize = 3;

pub struct App {
    pub config: AppConfig,
    pub session: Session,
    pub shell: Shell,
    pub mode_state: ModeState,
    pub terminal_size: Rect,
    pub export_dialog: Option<ExportDialog>,
    pub pending_action: Option<PendingAction>,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let shell = Shell::new(config.copied_indicator_timeout, config.message_timeout);
        Self {
            config,
            session: Session::new(),
            shell,
            mode_state: ModeState::new(),
            terminal_size: Rect::default(),
            export_dialog: None,
            pending_action: None,
            should_quit: false,
        }
    }

    pub fn render(&mut self, frame: &mut Frame) {
        self.terminal_size = frame.area();
        self.shell.expire_message(std::time::Instant::now());

        let message = self.shell.message.as_ref().map(|m| (m.text.as_str(), m.kind));
        let confirm_message = self.pending_action.as_ref().map(|a| a.confirm_message());

        let state = UiState {
            mode: self.mode_state.mode,
            session: &self.session,
            scroll_back: self.shell.scroll.back,
            message,
            confirm_message,
            export_dialog: self.export_dialog.as_ref(),
        };

        Renderer::render(frame, &state);
    }

    pub fn set_message(&mut self, msg: &str, msg_type: MessageType) {
        self.shell.set_message(msg, msg_type);
    }

    /// Feeds one keypad key to the session
    pub fn press(&mut self, key: Key) {
        self.session.handle_key(key, &mut self.shell);

        if let Some(content) = self.shell.pending_export.take() {
            self.open_export_dialog(content);
        }
    }

    fn open_export_dialog(&mut self, content: String) {
        let today = Local::now().date_naive();
        self.export_dialog = Some(ExportDialog::new(
            content,
            &self.config.export_dir,
            today,
            self.config.export_format,
        ));
        self.mode_state.to_export();
    }

    pub fn cancel_export(&mut self) {
        self.export_dialog = None;
        self.mode_state.to_keypad();
    }

    /// Writes the dialog's content. Failures stay in the dialog so the path
    /// can be corrected.
    pub fn execute_export(&mut self) {
        let Some(dialog) = self.export_dialog.as_mut() else {
            return;
        };

        let path = match dialog.validate() {
            Ok(path) => path,
            Err(e) => {
                dialog.error = Some(e);
                return;
            }
        };

        if let Err(e) = export_to_file(&dialog.content, &path) {
            error!(path = %path.display(), error = %e, "export failed");
            dialog.error = Some(e.to_string());
            return;
        }

        info!(path = %path.display(), "notes exported");
        self.config.export_format = dialog.format;
        self.cancel_export();
        self.set_message(&format!("Exported to {}", path.display()), MessageType::Success);
    }

    pub fn request_quit(&mut self) {
        if self.session.document().is_minimal() {
            self.should_quit = true;
            return;
        }
        self.pending_action = Some(PendingAction::Quit);
        self.mode_state.to_confirm();
    }

    pub fn confirm_pending(&mut self) {
        match self.pending_action.take() {
            Some(PendingAction::Quit) => self.should_quit = true,
            None => {}
        }
        self.mode_state.to_keypad();
    }

    pub fn cancel_pending(&mut self) {
        self.pending_action = None;
        self.mode_state.to_keypad();
    }

    fn max_scroll(&self) -> usize {
        let inner_height = AppLayout::new(self.terminal_size).display.height.saturating_sub(2);
        let line_count = self.session.text().split('\n').count();
        max_scroll_back(line_count, inner_height as usize)
    }

    pub fn scroll_up(&mut self) {
        let max = self.max_scroll();
        self.shell.scroll.scroll_up(SCROLL_STEP, max);
    }

    pub fn scroll_down(&mut self) {
        self.shell.scroll.scroll_down(SCROLL_STEP);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputMode;
    use ratatui::{backend::TestBackend, Terminal};
    use tempfile::TempDir;

    fn app_in(dir: &TempDir) -> App {
        let config = AppConfig {
            export_dir: dir.path().to_path_buf(),
            log_dir: dir.path().to_path_buf(),
            ..AppConfig::default()
        };
        App::new(config)
    }

    fn type_keys(app: &mut App, keys: &str) {
        for name in keys.split_whitespace() {
            app.press(name.parse().unwrap());
        }
    }

    #[test]
    fn test_export_key_opens_dialog_with_normalized_text() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        type_keys(&mut app, "0 9 0 5 export");
        assert_eq!(app.mode_state.mode, InputMode::Export);
        let dialog = app.export_dialog.as_ref().unwrap();
        assert_eq!(dialog.content, "1)\n(09:05)");
        assert!(dialog.path.content().ends_with(".txt"));
    }

    #[test]
    fn test_execute_export_writes_file() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        type_keys(&mut app, "0 9 0 5 export");
        let path = app.export_dialog.as_ref().unwrap().validate().unwrap();
        app.execute_export();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "1)\n(09:05)");
        assert!(app.export_dialog.is_none());
        assert_eq!(app.mode_state.mode, InputMode::Keypad);
        assert!(app.shell.message.is_some());
    }

    #[test]
    fn test_export_with_empty_path_stays_open() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.press(Key::Export);
        app.export_dialog.as_mut().unwrap().path.set_content("");
        app.execute_export();

        let dialog = app.export_dialog.as_ref().unwrap();
        assert!(dialog.error.is_some());
        assert_eq!(app.mode_state.mode, InputMode::Export);
    }

    #[test]
    fn test_quit_on_minimal_buffer_is_immediate() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        app.request_quit();
        assert!(app.should_quit);
    }

    #[test]
    fn test_quit_with_notes_asks_first() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);

        type_keys(&mut app, "1");
        app.request_quit();
        assert!(!app.should_quit);
        assert_eq!(app.mode_state.mode, InputMode::Confirm);

        app.cancel_pending();
        assert!(!app.should_quit);
        assert_eq!(app.mode_state.mode, InputMode::Keypad);

        app.request_quit();
        app.confirm_pending();
        assert!(app.should_quit);
    }

    fn draw(app: &mut App, width: u16, height: u16) {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }

    #[test]
    fn test_short_terminals_render_in_every_mode() {
        let dir = TempDir::new().unwrap();

        for height in 1..=10 {
            let mut app = app_in(&dir);
            type_keys(&mut app, "0 9 3");
            draw(&mut app, 60, height);

            app.request_quit();
            assert_eq!(app.mode_state.mode, InputMode::Confirm);
            draw(&mut app, 60, height);
            app.cancel_pending();

            app.mode_state.to_help();
            draw(&mut app, 60, height);
            app.mode_state.to_keypad();

            app.press(Key::Export);
            draw(&mut app, 60, height);
            app.export_dialog.as_mut().unwrap().error = Some("Output path is required".into());
            draw(&mut app, 60, height);
        }
    }

    #[test]
    fn test_scroll_is_bounded_by_content() {
        let dir = TempDir::new().unwrap();
        let mut app = app_in(&dir);
        app.terminal_size = Rect::new(0, 0, 40, 30);

        app.scroll_up();
        assert_eq!(app.shell.scroll.back, 0);

        for _ in 0..8 {
            type_keys(&mut app, "1 2 3 4 enter");
        }
        app.scroll_up();
        assert!(app.shell.scroll.back > 0);

        type_keys(&mut app, "5");
        assert!(app.shell.scroll.is_following());
    }
}
