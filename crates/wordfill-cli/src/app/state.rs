//! Application state and text editing.
//!
//! `App` wraps the widget state with what only the terminal host needs: a
//! cursor, the dropdown scroll window, and the screen areas the renderer
//! last drew (for mouse hit-testing). Every edit produces the new full text
//! and hands it to the widget reducer.

use ratatui::layout::{Position, Rect};
use wordfill_core::{AutocompleteState, Effect, NavKey, StalePolicy};

use crate::ui::DropdownWindow;

/// Screen areas drawn in the last frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WidgetLayout {
    /// Bordered input box.
    pub input: Rect,
    /// Bordered dropdown, when drawn.
    pub dropdown: Option<Rect>,
}

/// Where a click landed relative to the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    Input,
    /// Absolute index into the suggestion list.
    Option(usize),
    /// Inside the dropdown frame but not on an option row.
    DropdownChrome,
    Outside,
}

/// TUI application state.
pub struct App {
    pub widget: AutocompleteState,
    /// Byte offset of the cursor in the input text.
    pub cursor_pos: usize,
    pub dropdown: DropdownWindow,
    /// Set each frame by the renderer.
    pub layout: WidgetLayout,
    pub status: String,
    pub should_quit: bool,
    /// Whether the user finished with Ctrl+D (text is printed on exit).
    pub submitted: bool,
}

impl App {
    pub fn new(stale_policy: StalePolicy, visible_options: usize) -> Self {
        Self {
            widget: AutocompleteState::new(stale_policy),
            cursor_pos: 0,
            dropdown: DropdownWindow::new(visible_options),
            layout: WidgetLayout::default(),
            status: String::new(),
            should_quit: false,
            submitted: false,
        }
    }

    pub fn input(&self) -> &str {
        self.widget.input()
    }

    /// Cursor clamped to a char boundary of the current text.
    fn cursor(&self) -> usize {
        let input = self.widget.input();
        let mut pos = self.cursor_pos.min(input.len());
        while pos > 0 && !input.is_char_boundary(pos) {
            pos -= 1;
        }
        pos
    }

    fn prev_boundary(&self, pos: usize) -> usize {
        self.widget.input()[..pos]
            .chars()
            .next_back()
            .map_or(0, |c| pos - c.len_utf8())
    }

    fn next_boundary(&self, pos: usize) -> usize {
        self.widget.input()[pos..]
            .chars()
            .next()
            .map_or(pos, |c| pos + c.len_utf8())
    }

    pub fn insert_char(&mut self, c: char) -> Effect {
        let pos = self.cursor();
        let mut text = self.widget.input().to_string();
        text.insert(pos, c);
        self.cursor_pos = pos + c.len_utf8();
        self.widget.on_text_change(text)
    }

    pub fn insert_str(&mut self, s: &str) -> Effect {
        let pos = self.cursor();
        let mut text = self.widget.input().to_string();
        text.insert_str(pos, s);
        self.cursor_pos = pos + s.len();
        self.widget.on_text_change(text)
    }

    pub fn backspace(&mut self) -> Effect {
        let pos = self.cursor();
        if pos == 0 {
            return Effect::None;
        }
        let prev = self.prev_boundary(pos);
        let mut text = self.widget.input().to_string();
        text.replace_range(prev..pos, "");
        self.cursor_pos = prev;
        self.widget.on_text_change(text)
    }

    pub fn delete(&mut self) -> Effect {
        let pos = self.cursor();
        let next = self.next_boundary(pos);
        if next == pos {
            return Effect::None;
        }
        let mut text = self.widget.input().to_string();
        text.replace_range(pos..next, "");
        self.widget.on_text_change(text)
    }

    pub fn move_left(&mut self) {
        self.cursor_pos = self.prev_boundary(self.cursor());
    }

    pub fn move_right(&mut self) {
        self.cursor_pos = self.next_boundary(self.cursor());
    }

    pub const fn move_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor_pos = self.widget.input().len();
    }

    /// ENTER / UP / DOWN.
    pub fn navigate(&mut self, key: NavKey) -> Effect {
        let effect = self.widget.on_key_navigate(key);
        if key == NavKey::Enter {
            self.move_end();
        }
        effect
    }

    /// Accept the option at absolute `index` (mouse click).
    pub fn accept_option(&mut self, index: usize) -> Effect {
        let Some(choice) = self.widget.suggestions().get(index).cloned() else {
            return Effect::None;
        };
        let effect = self.widget.on_accept(Some(&choice));
        self.move_end();
        effect
    }

    /// Classify a click at terminal cell (`column`, `row`).
    pub fn hit_test(&self, column: u16, row: u16) -> HitTarget {
        let point = Position::new(column, row);
        if let Some(area) = self.layout.dropdown
            && self.widget.dropdown_visible()
            && area.contains(point)
        {
            let first_row = area.y.saturating_add(1);
            let rows = area.height.saturating_sub(2);
            if row >= first_row && row < first_row.saturating_add(rows) {
                let index = self.dropdown.scroll_offset() + usize::from(row - first_row);
                if index < self.widget.suggestions().len() {
                    return HitTarget::Option(index);
                }
            }
            return HitTarget::DropdownChrome;
        }
        if self.layout.input.contains(point) {
            return HitTarget::Input;
        }
        HitTarget::Outside
    }
}
