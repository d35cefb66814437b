//! Status Line Component
//!
//! Displays mode indicator, transient messages, entry and history position.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

use crate::input::InputMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    Success,
    Error,
}

impl MessageType {
    pub fn color(&self) -> Color {
        match self {
            Self::Success => Color::Green,
            Self::Error => Color::Red,
        }
    }
}

pub struct StatusLine<'a> {
    mode: InputMode,
    message: Option<(&'a str, MessageType)>,
    entry: Option<usize>,
    history: Option<(usize, usize)>,
}

impl<'a> StatusLine<'a> {
    pub fn new(mode: InputMode) -> Self {
        Self {
            mode,
            message: None,
            entry: None,
            history: None,
        }
    }

    pub fn message(mut self, msg: &'a str, msg_type: MessageType) -> Self {
        self.message = Some((msg, msg_type));
        self
    }

    pub fn entry(mut self, number: usize) -> Self {
        self.entry = Some(number);
        self
    }

    /// Zero-based position and length of the undo history
    pub fn history(mut self, position: usize, len: usize) -> Self {
        self.history = Some((position, len));
        self
    }
}

fn mode_style(mode: InputMode) -> Style {
    let base = Style::default().fg(Color::Black);
    match mode {
        InputMode::Keypad => base.bg(Color::Magenta),
        InputMode::Export => base.bg(Color::Red),
        InputMode::Confirm => base.bg(Color::Yellow),
        InputMode::Help => base.bg(Color::Green),
    }
}

fn render_mode_indicator(buf: &mut Buffer, area: Rect, mode: InputMode) -> u16 {
    let style = mode_style(mode).add_modifier(Modifier::BOLD);
    let mode_text = format!(" {} ", mode.indicator());
    buf.set_string(area.x, area.y, &mode_text, style);
    mode_text.len() as u16
}

fn render_right_section(buf: &mut Buffer, area: Rect, entry: Option<usize>, history: Option<(usize, usize)>) {
    let mut spans: Vec<Span> = Vec::new();
    let bg = Style::default().bg(Color::DarkGray);

    if let Some(number) = entry {
        spans.push(Span::styled("Entry ", bg.fg(Color::Gray)));
        spans.push(Span::styled(number.to_string(), bg.fg(Color::Cyan).add_modifier(Modifier::BOLD)));
    }

    if let Some((position, len)) = history {
        if !spans.is_empty() {
            spans.push(Span::styled(" | ", bg.fg(Color::White)));
        }
        spans.push(Span::styled("Step ", bg.fg(Color::Gray)));
        spans.push(Span::styled((position + 1).to_string(), bg.fg(Color::Cyan).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled("/", bg.fg(Color::White)));
        spans.push(Span::styled(len.to_string(), bg.fg(Color::Cyan)));
    }

    let line = Line::from(spans);
    let width = line.width() as u16;
    let x = area.x + area.width.saturating_sub(width + 1);
    buf.set_line(x, area.y, &line, width);
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        buf.set_style(area, Style::default().bg(Color::DarkGray));

        let x = area.x + render_mode_indicator(buf, area, self.mode) + 1;

        if let Some((msg, msg_type)) = self.message {
            buf.set_string(x, area.y, msg, Style::default().bg(Color::DarkGray).fg(msg_type.color()));
        }

        render_right_section(buf, area, self.entry, self.history);
    }
}

pub struct HelpBar<'a> {
    hints: Vec<(&'a str, &'a str)>,
}

impl HelpBar<'_> {
    pub fn for_mode(mode: InputMode) -> Self {
        Self { hints: hints_for_mode(mode) }
    }
}

fn hints_for_mode(mode: InputMode) -> Vec<(&'static str, &'static str)> {
    match mode {
        InputMode::Keypad => vec![
            ("0-9 : ( ) + - ,", "type"),
            ("space", "ok"),
            ("enter", "next entry"),
            ("^z/^y", "undo/redo"),
            ("y", "copy"),
            ("e", "export"),
            ("?", "help"),
        ],
        InputMode::Export => vec![
            ("tab", "cycle field"),
            ("space", "cycle format"),
            ("enter", "export"),
            ("esc", "cancel"),
        ],
        InputMode::Confirm => vec![("y", "yes"), ("n", "no")],
        InputMode::Help => vec![("esc", "close")],
    }
}

fn build_hint_spans<'a>(hints: &[(&'a str, &'a str)]) -> Vec<Span<'a>> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD)));
        spans.push(Span::styled(format!(" {}", desc), Style::default().fg(Color::Gray)));
    }

    spans
}

impl Widget for HelpBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }
        let line = Line::from(build_hint_spans(&self.hints));
        buf.set_line(area.x, area.y, &line, area.width);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_text(buf: &Buffer, width: u16) -> String {
        (0..width).map(|x| buf[(x, 0)].symbol().to_string()).collect()
    }

    #[test]
    fn test_status_line_shows_mode_message_and_position() {
        let area = Rect::new(0, 0, 60, 1);
        let mut buf = Buffer::empty(area);
        StatusLine::new(InputMode::Keypad)
            .message("Copied", MessageType::Success)
            .entry(3)
            .history(4, 9)
            .render(area, &mut buf);

        let text = row_text(&buf, 60);
        assert!(text.starts_with(" KEYPAD  Copied"));
        assert!(text.contains("Entry 3 | Step 5/9"));
    }

    #[test]
    fn test_help_bar_lists_hints() {
        let area = Rect::new(0, 0, 80, 1);
        let mut buf = Buffer::empty(area);
        HelpBar::for_mode(InputMode::Confirm).render(area, &mut buf);
        assert!(row_text(&buf, 80).starts_with("y yes │ n no"));
    }
}
