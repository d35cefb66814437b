//! Visual Keypad
//!
//! The on-screen keyboard. Geometry is a pure function of the area so the
//! same math draws the buttons and resolves mouse clicks.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, BorderType, Borders, Widget},
};

use super::layout::split_even;
use crate::notes::{Connector, Key, Symbol};

const fn digit(d: u8) -> Key {
    Key::Symbol(Symbol::Digit(d))
}

pub const ROWS: [&[Key]; 5] = [
    &[Key::Undo, Key::Redo, Key::Clear, Key::Copy, Key::Export],
    &[digit(7), digit(8), digit(9), Key::Symbol(Symbol::Open), Key::Symbol(Symbol::Close)],
    &[digit(4), digit(5), digit(6), Key::Symbol(Symbol::Colon), Key::Symbol(Symbol::Connector(Connector::Plus))],
    &[digit(1), digit(2), digit(3), Key::Symbol(Symbol::Connector(Connector::Comma)), Key::Symbol(Symbol::Connector(Connector::Minus))],
    &[digit(0), Key::Backspace, Key::Ok, Key::Enter],
];

/// Preferred height: bordered buttons three cells tall
pub const HEIGHT: u16 = ROWS.len() as u16 * 3;

pub fn button_rect(area: Rect, row: usize, col: usize) -> Rect {
    let (y, height) = split_even(area.y, area.height, ROWS.len() as u16, row as u16);
    let (x, width) = split_even(area.x, area.width, ROWS[row].len() as u16, col as u16);
    Rect::new(x, y, width, height)
}

/// Key under a mouse click, if any
pub fn hit(area: Rect, column: u16, row: u16) -> Option<Key> {
    ROWS.iter().enumerate().find_map(|(r, keys)| {
        keys.iter().enumerate().find_map(|(c, key)| {
            super::layout::contains(button_rect(area, r, c), column, row).then_some(*key)
        })
    })
}

pub struct Keypad<'a> {
    enabled: &'a dyn Fn(Key) -> bool,
}

impl<'a> Keypad<'a> {
    pub fn new(enabled: &'a dyn Fn(Key) -> bool) -> Self {
        Self { enabled }
    }
}

fn key_color(key: Key) -> Color {
    match key {
        Key::Symbol(Symbol::Digit(_)) => Color::White,
        Key::Symbol(_) => Color::Yellow,
        Key::Enter | Key::Ok => Color::Green,
        Key::Backspace | Key::Clear => Color::Red,
        Key::Undo | Key::Redo | Key::Copy | Key::Export => Color::Blue,
    }
}

fn render_button(buf: &mut Buffer, rect: Rect, key: Key, enabled: bool) {
    if rect.height == 0 {
        return;
    }

    let color = if enabled { key_color(key) } else { Color::DarkGray };
    let mut label_style = Style::default().fg(color);
    if enabled {
        label_style = label_style.add_modifier(Modifier::BOLD);
    }

    let inner = if rect.height >= 3 {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(color));
        let inner = block.inner(rect);
        block.render(rect, buf);
        inner
    } else {
        rect
    };

    let label = key.label();
    let width = label.chars().count() as u16;
    let x = inner.x + inner.width.saturating_sub(width) / 2;
    let y = inner.y + inner.height.saturating_sub(1) / 2;
    buf.set_stringn(x, y, &label, inner.width as usize, label_style);
}

impl Widget for Keypad<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for (r, keys) in ROWS.iter().enumerate() {
            for (c, key) in keys.iter().enumerate() {
                render_button(buf, button_rect(area, r, c), *key, (self.enabled)(*key));
            }
        }
    }
}
