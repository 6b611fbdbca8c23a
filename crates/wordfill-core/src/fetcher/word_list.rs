//! Offline suggestion source backed by a word list.
//!
//! Prefix matches come first in list order; the remaining slots are filled
//! with fzf-style fuzzy matches ranked by score.

use std::path::Path;

use nucleo_matcher::pattern::{Atom, AtomKind, CaseMatching, Normalization};
use nucleo_matcher::{Config, Matcher, Utf32Str};

use super::SuggestionFetcher;
use crate::error::{Error, Result};

#[derive(Debug, Clone)]
pub struct WordListFetcher {
    words: Vec<String>,
    max_results: usize,
}

impl WordListFetcher {
    /// Build from an iterator of words. Blank entries and duplicates are dropped.
    pub fn from_words<I, S>(words: I, max_results: usize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut seen = std::collections::HashSet::new();
        let words = words
            .into_iter()
            .map(Into::into)
            .map(|w: String| w.trim().to_string())
            .filter(|w| !w.is_empty() && seen.insert(w.clone()))
            .collect();
        Self { words, max_results }
    }

    /// Load a newline-delimited word list. Lines starting with `#` are skipped.
    pub fn from_file(path: &Path, max_results: usize) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::Config(format!("Failed to read word list {}: {e}", path.display()))
        })?;
        let fetcher = Self::from_words(
            content.lines().filter(|l| !l.trim_start().starts_with('#')),
            max_results,
        );
        tracing::info!(path = %path.display(), words = fetcher.len(), "Loaded word list");
        Ok(fetcher)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Rank candidates for `word`.
    pub fn complete(&self, word: &str) -> Vec<String> {
        if word.is_empty() || self.max_results == 0 {
            return Vec::new();
        }

        let needle = word.to_lowercase();
        let mut results: Vec<String> = self
            .words
            .iter()
            .filter(|w| w.to_lowercase().starts_with(&needle))
            .take(self.max_results)
            .cloned()
            .collect();
        if results.len() == self.max_results {
            return results;
        }

        let mut matcher = Matcher::new(Config::DEFAULT);
        let atom = Atom::new(
            word,
            CaseMatching::Ignore,
            Normalization::Smart,
            AtomKind::Fuzzy,
            false,
        );
        let mut buf = Vec::new();
        let mut fuzzy: Vec<(u16, &String)> = self
            .words
            .iter()
            .filter(|w| !results.contains(*w))
            .filter_map(|w| {
                let score = atom.score(Utf32Str::new(w, &mut buf), &mut matcher)?;
                Some((score, w))
            })
            .collect();
        // Stable sort keeps list order among equal scores.
        fuzzy.sort_by(|a, b| b.0.cmp(&a.0));

        let room = self.max_results - results.len();
        results.extend(fuzzy.into_iter().take(room).map(|(_, w)| w.clone()));
        results
    }
}

impl SuggestionFetcher for WordListFetcher {
    async fn fetch(&self, word: &str) -> Result<Vec<String>> {
        Ok(self.complete(word))
    }
}
