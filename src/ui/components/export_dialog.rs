//! Export Dialog Component
//!
//! Dialog for choosing the export format and output path.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Clear, Widget},
};

use super::input_field::InputField;
use super::layout::{centered_rect_fixed, create_popup_block, fill_background, has_row};
use crate::input::{handle_text_key, TextBuffer};
use crate::notes::export::{default_export_path, with_format_extension, ExportFormat};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportField {
    Format,
    Path,
}

impl ExportField {
    fn toggle(self) -> Self {
        match self {
            Self::Format => Self::Path,
            Self::Path => Self::Format,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ExportDialog {
    pub active_field: ExportField,
    pub format: ExportFormat,
    pub path: TextBuffer,
    /// Normalized notes captured when the dialog opened
    pub content: String,
    pub error: Option<String>,
}

impl ExportDialog {
    pub fn new(content: String, dir: &Path, date: NaiveDate, format: ExportFormat) -> Self {
        let path = default_export_path(dir, date, format);
        Self {
            active_field: ExportField::Path,
            format,
            path: TextBuffer::with_content(path.to_string_lossy().into_owned()),
            content,
            error: None,
        }
    }

    pub fn next_field(&mut self) {
        self.active_field = self.active_field.toggle();
        self.path.cursor_end();
    }

    pub fn cycle_format(&mut self) {
        self.format = self.format.cycle();
        let updated = with_format_extension(self.path.content(), self.format);
        self.path.set_content(&updated);
    }

    pub fn handle_text_key(&mut self, code: KeyCode, mods: KeyModifiers) {
        match self.active_field {
            ExportField::Path => {
                handle_text_key(&mut self.path, code, mods);
                self.error = None;
            }
            ExportField::Format if code == KeyCode::Char(' ') => self.cycle_format(),
            ExportField::Format => {}
        }
    }

    pub fn validate(&self) -> Result<PathBuf, String> {
        let path = self.path.content().trim();
        if path.is_empty() {
            return Err("Output path is required".into());
        }
        Ok(PathBuf::from(path))
    }
}

pub struct ExportDialogWidget<'a> {
    dialog: &'a ExportDialog,
}

impl<'a> ExportDialogWidget<'a> {
    pub fn new(dialog: &'a ExportDialog) -> Self {
        Self { dialog }
    }
}

const LABEL_WIDTH: u16 = 9;

fn label_style(is_active: bool) -> Style {
    if is_active {
        Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn render_format_field(dialog: &ExportDialog, buf: &mut Buffer, inner: Rect, y: u16) {
    let is_active = dialog.active_field == ExportField::Format;
    buf.set_string(inner.x, y, "Format:", label_style(is_active));

    let value_x = inner.x + LABEL_WIDTH;
    let value_width = inner.width.saturating_sub(LABEL_WIDTH);
    let bg = if is_active { Color::DarkGray } else { Color::Black };
    fill_background(buf, value_x, y, value_width, bg);

    let display = format!("{}  [⎵]", dialog.format.display_name());
    buf.set_stringn(value_x, y, &display, value_width as usize, Style::default().fg(Color::Yellow).bg(bg));
}

fn render_path_field(dialog: &ExportDialog, buf: &mut Buffer, inner: Rect, y: u16) {
    let is_active = dialog.active_field == ExportField::Path;
    buf.set_string(inner.x, y, "Path:", label_style(is_active));

    let value_area = Rect::new(inner.x + LABEL_WIDTH, y, inner.width.saturating_sub(LABEL_WIDTH), 1);
    InputField::new(dialog.path.content(), dialog.path.cursor())
        .active(is_active)
        .render(value_area, buf);
}

impl Widget for ExportDialogWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let height = if self.dialog.error.is_some() { 8 } else { 7 };
        let form_area = centered_rect_fixed(64, height, area);
        Clear.render(form_area, buf);

        let block = create_popup_block(" Export Notes ", Color::Magenta);
        let inner = block.inner(form_area);
        block.render(form_area, buf);

        if has_row(inner, inner.y) {
            render_format_field(self.dialog, buf, inner, inner.y);
        }
        if has_row(inner, inner.y + 2) {
            render_path_field(self.dialog, buf, inner, inner.y + 2);
        }

        if has_row(inner, inner.y + 4) {
            let lines = self.dialog.content.lines().count();
            let summary = format!("{} lines of notes", lines);
            buf.set_string(inner.x, inner.y + 4, &summary, Style::default().fg(Color::DarkGray));
        }

        if let Some(err) = self.dialog.error.as_ref().filter(|_| has_row(inner, inner.y + 5)) {
            buf.set_stringn(inner.x, inner.y + 5, err, inner.width as usize, Style::default().fg(Color::Red));
        }
    }
}
