//! Input field widget

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::Widget,
};

use super::layout::fill_background;

/// A single-line text value that scrolls to keep the cursor visible
pub struct InputField<'a> {
    value: &'a str,
    cursor: usize,
    active: bool,
}

impl<'a> InputField<'a> {
    pub fn new(value: &'a str, cursor: usize) -> Self {
        Self { value, cursor, active: false }
    }

    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

impl Widget for InputField<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let bg = if self.active { Color::DarkGray } else { Color::Black };
        fill_background(buf, area.x, area.y, area.width, bg);

        let scroll = compute_scroll_offset(self.cursor, area.width);
        let visible: String = self.value.chars().skip(scroll).take(area.width as usize).collect();
        buf.set_string(area.x, area.y, &visible, Style::default().fg(Color::Blue).bg(bg));

        if self.active {
            render_cursor(buf, area.x, area.y, self.cursor.saturating_sub(scroll), area.width);
        }
    }
}

pub fn compute_scroll_offset(cursor: usize, width: u16) -> usize {
    let width = width as usize;
    if cursor >= width.saturating_sub(1) {
        cursor.saturating_sub(width.saturating_sub(2))
    } else {
        0
    }
}

fn render_cursor(buf: &mut Buffer, x: u16, y: u16, cursor: usize, width: u16) {
    let cursor_x = x + cursor as u16;
    if cursor_x >= x + width {
        return;
    }
    if let Some(cell) = buf.cell_mut((cursor_x, y)) {
        cell.set_style(Style::default().bg(Color::White).fg(Color::Black));
    }
}
