//! Suggestion sources.
//!
//! A [`SuggestionFetcher`] turns a word into candidate completions. The HTTP
//! source talks to a remote word API; the word-list source works offline.

mod http;
mod word_list;


use std::future::Future;

pub use http::{HttpFetcher, HttpFetcherConfig};
pub use word_list::WordListFetcher;

use crate::error::Result;

/// Produces completion candidates for a word.
pub trait SuggestionFetcher: Send + Sync + 'static {
    /// Fetch candidates for `word`. Errors on transport failure.
    fn fetch(&self, word: &str) -> impl Future<Output = Result<Vec<String>>> + Send;
}

/// Runtime-selected suggestion source.
#[derive(Debug)]
pub enum AnyFetcher {
    Http(HttpFetcher),
    WordList(WordListFetcher),
}

impl SuggestionFetcher for AnyFetcher {
    async fn fetch(&self, word: &str) -> Result<Vec<String>> {
        match self {
            Self::Http(f) => f.fetch(word).await,
            Self::WordList(f) => f.fetch(word).await,
        }
    }
}
