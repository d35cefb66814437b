//! Scroll state for the note display
//!
//! The display follows the tail of the document. Scrolling back moves the
//! window up; any render from the session snaps it back to the tail.

#[derive(Debug, Default, Clone)]
pub struct ScrollState {
    /// Lines scrolled back from the bottom
    pub back: usize,
}

impl ScrollState {
    pub fn follow_tail(&mut self) {
        self.back = 0;
    }

    pub fn scroll_up(&mut self, amount: usize, max: usize) {
        self.back = (self.back + amount).min(max);
    }

    pub fn scroll_down(&mut self, amount: usize) {
        self.back = self.back.saturating_sub(amount);
    }

    pub fn is_following(&self) -> bool {
        self.back == 0
    }
}

/// How far back the view can scroll
pub fn max_scroll_back(line_count: usize, height: usize) -> usize {
    line_count.saturating_sub(height)
}

/// Index of the first line shown in a window of `height` lines
pub fn first_visible_line(line_count: usize, height: usize, back: usize) -> usize {
    let back = back.min(max_scroll_back(line_count, height));
    line_count.saturating_sub(height + back)
}
