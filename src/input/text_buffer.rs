//! Text Buffer
//!
//! Single-line editing buffer with a character cursor, used by the export
//! path field.

use crossterm::event::{KeyCode, KeyModifiers};

/// Handle common line-editing keys, returns true if key was handled
pub fn handle_text_key(buf: &mut TextBuffer, code: KeyCode, mods: KeyModifiers) -> bool {
    match (code, mods) {
        (KeyCode::Backspace, KeyModifiers::CONTROL | KeyModifiers::ALT) => buf.delete_word(),
        (KeyCode::Char('w'), KeyModifiers::CONTROL) => buf.delete_word(),
        (KeyCode::Backspace, _) => buf.delete_char(),
        (KeyCode::Delete, _) => buf.delete_char_forward(),
        (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => buf.cursor_home(),
        (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => buf.cursor_end(),
        (KeyCode::Char('u'), KeyModifiers::CONTROL) => buf.clear_to_start(),
        (KeyCode::Left, _) => buf.cursor_left(),
        (KeyCode::Right, _) => buf.cursor_right(),
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => buf.insert_char(c),
        _ => return false,
    }
    true
}

/// Start of the path component or word before `from` (in chars)
pub fn find_word_boundary_back(s: &str, from: usize) -> usize {
    let chars: Vec<char> = s.chars().take(from).collect();
    let mut pos = chars.len();
    let is_separator = |c: char| c == '/' || c == '\\' || c.is_whitespace();

    while pos > 0 && is_separator(chars[pos - 1]) {
        pos -= 1;
    }
    while pos > 0 && !is_separator(chars[pos - 1]) {
        pos -= 1;
    }
    pos
}

#[derive(Debug, Clone, Default)]
pub struct TextBuffer {
    content: String,
    /// Cursor position in chars
    cursor: usize,
}

impl TextBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_content(content: impl Into<String>) -> Self {
        let content = content.into();
        let cursor = content.chars().count();
        Self { content, cursor }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    pub fn set_content(&mut self, content: &str) {
        self.content = content.to_string();
        self.cursor = self.len();
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.content
            .char_indices()
            .nth(char_pos)
            .map_or(self.content.len(), |(i, _)| i)
    }

    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.content.insert(at, c);
        self.cursor += 1;
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_offset(self.cursor);
        self.content.remove(at);
    }

    pub fn delete_char_forward(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.content.remove(at);
    }

    pub fn delete_word(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let new_cursor = find_word_boundary_back(&self.content, self.cursor);
        let (start, end) = (self.byte_offset(new_cursor), self.byte_offset(self.cursor));
        self.content.drain(start..end);
        self.cursor = new_cursor;
    }

    pub fn clear_to_start(&mut self) {
        let end = self.byte_offset(self.cursor);
        self.content.drain(..end);
        self.cursor = 0;
    }

    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    pub fn cursor_end(&mut self) {
        self.cursor = self.len();
    }
}
