//! Note Display
//!
//! Shows the raw document line by line with a block cursor after the last
//! character. Clicking anywhere in it is a backspace.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::scroll::first_visible_line;
use crate::notes::buffer::parse_header;

pub struct NoteDisplay<'a> {
    text: &'a str,
    scroll_back: usize,
}

impl<'a> NoteDisplay<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text, scroll_back: 0 }
    }

    pub fn scroll_back(mut self, back: usize) -> Self {
        self.scroll_back = back;
        self
    }

    pub fn block() -> Block<'static> {
        Block::default()
            .title(" Notes ")
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Magenta))
    }
}

fn line_style(line: &str) -> Style {
    if parse_header(line).is_some() {
        Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White)
    }
}

fn cursor_style() -> Style {
    Style::default().bg(Color::White).fg(Color::Black)
}

impl Widget for NoteDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Self::block();
        let inner = block.inner(area);
        block.render(area, buf);

        let lines: Vec<&str> = self.text.split('\n').collect();
        let height = inner.height as usize;
        let first = first_visible_line(lines.len(), height, self.scroll_back);
        let last_index = lines.len() - 1;

        for (row, (index, text)) in lines.iter().enumerate().skip(first).take(height).enumerate() {
            let mut spans = vec![Span::styled(*text, line_style(text))];
            if index == last_index {
                spans.push(Span::styled(" ", cursor_style()));
            }
            buf.set_line(inner.x, inner.y + row as u16, &Line::from(spans), inner.width);
        }
    }
}
