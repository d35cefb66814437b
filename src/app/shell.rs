//! Terminal Surface
//!
//! What the session talks to: the note display's scroll position, the
//! system clipboard and the export dialog request.

use std::time::{Duration, Instant};

use tracing::info;

use super::clipboard::SystemClipboard;
use crate::notes::Surface;
use crate::ui::components::{MessageType, ScrollState};

pub struct StatusMessage {
    pub text: String,
    pub kind: MessageType,
    pub expires_at: Instant,
}

pub struct Shell {
    pub scroll: ScrollState,
    pub message: Option<StatusMessage>,
    /// Normalized text waiting for the export dialog to open
    pub pending_export: Option<String>,
    clipboard: SystemClipboard,
    copied_timeout: Duration,
    message_timeout: Duration,
}

impl Shell {
    pub fn new(copied_timeout: Duration, message_timeout: Duration) -> Self {
        Self {
            scroll: ScrollState::default(),
            message: None,
            pending_export: None,
            clipboard: SystemClipboard::new(),
            copied_timeout,
            message_timeout,
        }
    }

    pub fn set_message(&mut self, text: &str, kind: MessageType) {
        self.show(text, kind, self.message_timeout);
    }

    fn show(&mut self, text: &str, kind: MessageType, timeout: Duration) {
        self.message = Some(StatusMessage {
            text: text.to_string(),
            kind,
            expires_at: Instant::now() + timeout,
        });
    }

    pub fn expire_message(&mut self, now: Instant) {
        if self.message.as_ref().is_some_and(|m| now >= m.expires_at) {
            self.message = None;
        }
    }
}

impl Surface for Shell {
    fn render(&mut self, _text: &str) {
        self.scroll.follow_tail();
    }

    fn copy(&mut self, text: &str) {
        match self.clipboard.copy(text) {
            Ok(()) => {
                info!(bytes = text.len(), "copied to clipboard");
                self.show("Copied", MessageType::Success, self.copied_timeout);
            }
            Err(e) => self.set_message(&e.to_string(), MessageType::Error),
        }
    }

    fn export(&mut self, text: &str) {
        self.pending_export = Some(text.to_string());
    }
}
