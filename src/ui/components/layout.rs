//! Layout helpers and common rendering utilities

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Borders},
};

/// Fixed sized rect centered in `r`, clamped to fit
pub fn centered_rect_fixed(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect::new(x, y, width, height)
}

pub fn create_popup_block(title: &str, color: Color) -> Block<'_> {
    Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(color))
        .style(Style::default().bg(Color::Black))
}

pub fn render_footer(buf: &mut Buffer, popup: Rect, text: &str) {
    if popup.height == 0 {
        return;
    }
    let y = popup.y + popup.height.saturating_sub(1);
    let x = popup.x + (popup.width.saturating_sub(text.chars().count() as u16)) / 2;
    buf.set_string(x, y, text, Style::default().fg(Color::DarkGray));
}

pub fn fill_background(buf: &mut Buffer, x: u16, y: u16, width: u16, color: Color) {
    for px in x..x.saturating_add(width) {
        if let Some(cell) = buf.cell_mut((px, y)) {
            cell.set_bg(color);
        }
    }
}

/// Splits `total` cells into `parts` spans; the last span takes the remainder
pub fn split_even(start: u16, total: u16, parts: u16, index: u16) -> (u16, u16) {
    let parts = parts.max(1);
    let size = total / parts;
    let offset = start + size * index;
    let len = if index + 1 == parts { total - size * index } else { size };
    (offset, len)
}

/// Whether row `y` lies inside `area`; popups shrunk by a short terminal
/// lose their lower rows
pub fn has_row(area: Rect, y: u16) -> bool {
    y >= area.y && y < area.bottom()
}

pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x && column < area.x + area.width && row >= area.y && row < area.y + area.height
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed_clamps() {
        let r = Rect::new(0, 0, 20, 10);
        assert_eq!(centered_rect_fixed(10, 4, r), Rect::new(5, 3, 10, 4));
        assert_eq!(centered_rect_fixed(40, 40, r), r);
    }

    #[test]
    fn test_split_even_gives_remainder_to_last() {
        assert_eq!(split_even(0, 10, 3, 0), (0, 3));
        assert_eq!(split_even(0, 10, 3, 1), (3, 3));
        assert_eq!(split_even(0, 10, 3, 2), (6, 4));
    }

    #[test]
    fn test_has_row() {
        let r = Rect::new(0, 2, 10, 3);
        assert!(has_row(r, 2));
        assert!(has_row(r, 4));
        assert!(!has_row(r, 5));
        assert!(!has_row(Rect::new(0, 2, 10, 0), 2));
    }

    #[test]
    fn test_contains() {
        let r = Rect::new(2, 2, 3, 3);
        assert!(contains(r, 2, 2));
        assert!(contains(r, 4, 4));
        assert!(!contains(r, 5, 4));
        assert!(!contains(r, 1, 3));
    }
}
