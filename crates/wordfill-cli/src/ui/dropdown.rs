//! Scroll window for the suggestion dropdown.
//!
//! The active index lives in the widget state; this only decides which rows
//! are on screen so the active option is always visible.

use std::ops::Range;

#[derive(Debug, Clone)]
pub struct DropdownWindow {
    visible_count: usize,
    /// Rows that fit on screen at the last `follow`, never above `visible_count`.
    shown: usize,
    scroll_offset: usize,
}

impl DropdownWindow {
    /// Window showing at most `visible_count` rows (at least one).
    pub fn new(visible_count: usize) -> Self {
        let visible_count = visible_count.max(1);
        Self {
            visible_count,
            shown: visible_count,
            scroll_offset: 0,
        }
    }

    pub const fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub const fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Adjust the scroll offset so `active` is inside the window of a list of
    /// `len` items, when at most `max_rows` rows fit on screen.
    pub fn follow(&mut self, active: usize, len: usize, max_rows: usize) {
        self.shown = self.visible_count.min(max_rows).max(1);
        if len <= self.shown {
            self.scroll_offset = 0;
            return;
        }
        if active < self.scroll_offset {
            self.scroll_offset = active;
        } else if active >= self.scroll_offset + self.shown {
            self.scroll_offset = active + 1 - self.shown;
        }
        self.scroll_offset = self.scroll_offset.min(len - self.shown);
    }

    /// Indices currently on screen for a list of `len` items.
    pub fn visible_range(&self, len: usize) -> Range<usize> {
        let start = self.scroll_offset.min(len);
        let end = (start + self.shown).min(len);
        start..end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_list_never_scrolls() {
        let mut window = DropdownWindow::new(8);
        window.follow(2, 3, 8);
        assert_eq!(window.scroll_offset(), 0);
        assert_eq!(window.visible_range(3), 0..3);
    }

    #[test]
    fn scrolls_down_to_keep_active_visible() {
        let mut window = DropdownWindow::new(5);
        for active in 0..=7 {
            window.follow(active, 20, 5);
        }
        assert_eq!(window.scroll_offset(), 3);
        assert_eq!(window.visible_range(20), 3..8);
    }

    #[test]
    fn scrolls_up_when_active_moves_above() {
        let mut window = DropdownWindow::new(5);
        window.follow(10, 20, 5);
        window.follow(4, 20, 5);
        assert_eq!(window.scroll_offset(), 4);
    }

    #[test]
    fn list_replacement_resets_window() {
        let mut window = DropdownWindow::new(5);
        window.follow(15, 20, 5);
        window.follow(0, 2, 5);
        assert_eq!(window.visible_range(2), 0..2);
    }

    #[test]
    fn short_screen_shrinks_window() {
        let mut window = DropdownWindow::new(8);
        window.follow(5, 20, 3);
        assert_eq!(window.visible_range(20), 3..6);
        assert!(window.visible_range(20).contains(&5));

        window.follow(5, 20, 8);
        assert_eq!(window.visible_range(20), 3..11);
    }

    #[test]
    fn no_room_still_shows_active_row() {
        let mut window = DropdownWindow::new(8);
        window.follow(4, 10, 0);
        assert_eq!(window.visible_range(10), 4..5);
    }

    #[test]
    fn zero_rows_is_clamped_to_one() {
        let window = DropdownWindow::new(0);
        assert_eq!(window.visible_count(), 1);
    }
}
