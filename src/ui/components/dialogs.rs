//! Dialog popups (confirm, help)

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Clear, Paragraph, Widget, Wrap},
};

use super::layout::{centered_rect_fixed, create_popup_block, has_row, render_footer};

pub struct ConfirmDialog<'a> {
    title: &'a str,
    message: &'a str,
}

impl<'a> ConfirmDialog<'a> {
    pub fn new(title: &'a str, message: &'a str) -> Self {
        Self { title, message }
    }
}

impl Widget for ConfirmDialog<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect_fixed(50, 6, area);
        Clear.render(popup_area, buf);

        let block = create_popup_block(self.title, Color::Yellow);
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        Paragraph::new(self.message)
            .style(Style::default().fg(Color::White))
            .wrap(Wrap { trim: true })
            .render(Rect::new(inner.x, inner.y, inner.width, inner.height.min(2)), buf);

        let hint_y = inner.y + 3;
        if has_row(inner, hint_y) {
            render_confirm_hint(buf, inner.x, hint_y);
        }
    }
}

fn render_confirm_hint(buf: &mut Buffer, x: u16, y: u16) {
    let hint = Line::from(vec![
        Span::styled("[y]", Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)),
        Span::raw(" Yes  "),
        Span::styled("[n]", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)),
        Span::raw(" No"),
    ]);
    buf.set_line(x, y, &hint, 20);
}

const BINDINGS: &[(&str, &str)] = &[
    ("0-9", "hour and minute digits"),
    (": ( ) + - ,", "timestamp symbols"),
    ("space / o / tab", "ok: pad and finish the field"),
    ("enter", "finish entry / drop empty entry"),
    ("backspace", "delete last character"),
    ("c / del", "clear current entry"),
    ("ctrl+z / u", "undo"),
    ("ctrl+y / ctrl+r", "redo"),
    ("y", "copy notes"),
    ("e / ctrl+s", "export notes"),
    ("pgup / pgdn", "scroll notes"),
    ("click", "press keypad key; on notes: backspace"),
    ("q / ctrl+c", "quit"),
];

pub struct HelpPopup;

impl Widget for HelpPopup {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup_area = centered_rect_fixed(56, BINDINGS.len() as u16 + 4, area);
        Clear.render(popup_area, buf);

        let block = create_popup_block(" Keys ", Color::Green);
        let inner = block.inner(popup_area);
        block.render(popup_area, buf);

        let key_style = Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD);
        let desc_style = Style::default().fg(Color::Gray);

        for (i, (keys, desc)) in BINDINGS.iter().enumerate().take(inner.height as usize) {
            let y = inner.y + i as u16;
            buf.set_stringn(inner.x + 1, y, keys, 18, key_style);
            buf.set_stringn(inner.x + 20, y, desc, inner.width.saturating_sub(20) as usize, desc_style);
        }

        render_footer(buf, popup_area, " esc to close ");
    }
}
