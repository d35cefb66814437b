//! System clipboard access.
//!
//! The handle is kept for the whole session: on X11 the copied text is only
//! served while the owning `Clipboard` is alive.

use arboard::Clipboard;
use tracing::warn;

use crate::notes::{NotesError, NotesResult};

#[derive(Default)]
pub struct SystemClipboard {
    inner: Option<Clipboard>,
}

impl SystemClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    fn handle(&mut self) -> NotesResult<&mut Clipboard> {
        if self.inner.is_none() {
            let clipboard = Clipboard::new().map_err(|e| NotesError::Clipboard(e.to_string()))?;
            self.inner = Some(clipboard);
        }
        self.inner
            .as_mut()
            .ok_or_else(|| NotesError::Clipboard("clipboard unavailable".into()))
    }

    pub fn copy(&mut self, text: &str) -> NotesResult<()> {
        let result = self
            .handle()?
            .set_text(text.to_owned())
            .map_err(|e| NotesError::Clipboard(e.to_string()));

        if let Err(e) = &result {
            warn!(error = %e, "clipboard write failed");
            self.inner = None;
        }
        result
    }
}
