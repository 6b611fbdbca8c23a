//! `wordfill` Core Library
//!
//! Headless pieces of the autocomplete input widget:
//! - Explicit widget state with one reducer per UI event
//! - Trailing-token extraction and splicing
//! - Safe highlight segmentation of suggestions
//! - Cancellable debouncing and the suggestion engine
//! - Suggestion sources (HTTP API, offline word list)
//! - Configuration resolution and common error types

pub mod config;
pub mod debounce;
pub mod engine;
pub mod error;
pub mod fetcher;
pub mod highlight;
pub mod state;
pub mod token;
pub mod tracing_init;

pub use config::Config;
pub use engine::{FetchOutcome, SuggestionEngine, apply_outcome};
pub use error::{Error, Result};
pub use fetcher::SuggestionFetcher;
pub use state::{AutocompleteState, Effect, NavKey, StalePolicy};
