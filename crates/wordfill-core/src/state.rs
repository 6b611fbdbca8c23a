//! Autocomplete widget state and reducers.
//!
//! Every UI event maps to one method on [`AutocompleteState`]. Methods only
//! touch the struct; anything that must happen outside it (arming or
//! cancelling the debounced search) is returned as an [`Effect`] for the
//! host loop to carry out.

use serde::{Deserialize, Serialize};

use crate::highlight::{self, Segment};
use crate::token;

/// What to do with a suggestion response that arrives after a newer search
/// was scheduled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StalePolicy {
    /// Apply every response in arrival order, even if a newer search exists.
    #[default]
    Accept,
    /// Apply only the response for the most recently scheduled search.
    DropStale,
}

/// Navigation keys consumed by the widget. All other keys are text editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavKey {
    Enter,
    Up,
    Down,
}

/// Side effect requested by a reducer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing to do.
    None,
    /// Arm (or re-arm) the debounced search for `word`.
    Search { word: String, generation: u64 },
    /// Drop any pending debounced search.
    CancelSearch,
}

/// State of a single autocomplete input.
#[derive(Debug, Clone, Default)]
pub struct AutocompleteState {
    input: String,
    search_token: String,
    suggestions: Vec<String>,
    active_index: usize,
    visible: bool,
    focused: bool,
    generation: u64,
    stale_policy: StalePolicy,
}

impl AutocompleteState {
    /// Create an empty, focused input.
    pub fn new(stale_policy: StalePolicy) -> Self {
        Self {
            focused: true,
            stale_policy,
            ..Self::default()
        }
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// The word the current suggestions were requested for.
    pub fn search_token(&self) -> &str {
        &self.search_token
    }

    pub fn suggestions(&self) -> &[String] {
        &self.suggestions
    }

    pub const fn active_index(&self) -> usize {
        self.active_index
    }

    pub const fn is_focused(&self) -> bool {
        self.focused
    }

    /// Id of the most recently scheduled search.
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Whether the dropdown should be drawn. Never true for an empty list.
    pub fn dropdown_visible(&self) -> bool {
        self.visible && !self.suggestions.is_empty()
    }

    /// The input text changed (keystroke, paste, deletion).
    pub fn on_text_change(&mut self, text: impl Into<String>) -> Effect {
        self.input = text.into();

        let Some(word) = token::search_token(&self.input) else {
            self.clear_suggestions();
            self.visible = false;
            self.generation += 1;
            return Effect::CancelSearch;
        };

        word.clone_into(&mut self.search_token);
        self.generation += 1;
        Effect::Search {
            word: self.search_token.clone(),
            generation: self.generation,
        }
    }

    /// A fetch for `generation` succeeded with `list`.
    ///
    /// Returns `false` if the response was discarded as stale.
    pub fn on_suggestions_ready(&mut self, generation: u64, list: Vec<String>) -> bool {
        if self.stale_policy == StalePolicy::DropStale && generation != self.generation {
            tracing::debug!(
                generation,
                latest = self.generation,
                "Dropping stale suggestions"
            );
            return false;
        }
        self.suggestions = list;
        self.active_index = 0;
        self.visible = true;
        true
    }

    /// Accept `suggestion`, or the typed text as-is when there is none.
    pub fn on_accept(&mut self, suggestion: Option<&str>) -> Effect {
        match suggestion {
            None => self.input.push(' '),
            Some(s) => self.input = token::replace_trailing_token(&self.input, s),
        }
        self.clear_suggestions();
        self.focused = true;
        self.generation += 1;
        Effect::CancelSearch
    }

    /// Handle a navigation key.
    pub fn on_key_navigate(&mut self, key: NavKey) -> Effect {
        match key {
            NavKey::Enter => {
                let choice = self.suggestions.get(self.active_index).cloned();
                self.on_accept(choice.as_deref())
            }
            NavKey::Up => {
                self.active_index = self.active_index.saturating_sub(1);
                Effect::None
            }
            NavKey::Down => {
                if self.active_index + 1 < self.suggestions.len() {
                    self.active_index += 1;
                }
                Effect::None
            }
        }
    }

    /// A click or tap landed outside the widget.
    ///
    /// Hides the dropdown but keeps the suggestions for the next display.
    pub const fn on_outside_interaction(&mut self) {
        self.visible = false;
        self.focused = false;
    }

    /// The input itself was clicked.
    pub const fn on_focus(&mut self) {
        self.focused = true;
    }

    /// Split `candidate` into plain and matched runs of the search token.
    pub fn render_highlighted<'a>(&self, candidate: &'a str) -> Vec<Segment<'a>> {
        highlight::highlight_segments(candidate, &self.search_token)
    }

    fn clear_suggestions(&mut self) {
        self.suggestions.clear();
        self.active_index = 0;
    }
}
