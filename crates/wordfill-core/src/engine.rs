//! Suggestion engine: debouncer in front of a fetcher.
//!
//! The engine owns the debounce timer. When a search survives its quiet
//! period the fetch runs on its own task and the [`FetchOutcome`] is sent to
//! the receiver returned by [`SuggestionEngine::new`], where the UI loop
//! applies it to the widget state.
//!
//! In-flight fetches are never cancelled, so outcomes may arrive out of
//! order. Whether a late outcome is applied is decided by the state's
//! [`StalePolicy`](crate::state::StalePolicy).

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use crate::debounce::Debouncer;
use crate::error::Result;
use crate::fetcher::SuggestionFetcher;
use crate::state::{AutocompleteState, Effect};

/// Result of one fetch, tagged with the search it answers.
#[derive(Debug)]
pub struct FetchOutcome {
    pub word: String,
    pub generation: u64,
    pub result: Result<Vec<String>>,
}

#[derive(Debug)]
struct SearchRequest {
    word: String,
    generation: u64,
}

/// Debounced front-end to a [`SuggestionFetcher`].
#[derive(Debug)]
pub struct SuggestionEngine {
    debouncer: Debouncer<SearchRequest>,
}

impl SuggestionEngine {
    /// Start the engine. Must be called from within a tokio runtime.
    pub fn new<F: SuggestionFetcher>(
        fetcher: F,
        delay: Duration,
    ) -> (Self, mpsc::Receiver<FetchOutcome>) {
        let fetcher = Arc::new(fetcher);
        let (request_tx, mut request_rx) = mpsc::channel::<SearchRequest>(16);
        let (outcome_tx, outcome_rx) = mpsc::channel(16);

        // Ends once the debouncer (and its sender) is dropped.
        tokio::spawn(async move {
            while let Some(req) = request_rx.recv().await {
                spawn_fetch(Arc::clone(&fetcher), outcome_tx.clone(), req);
            }
            trace!("Suggestion dispatcher stopped");
        });

        let engine = Self {
            debouncer: Debouncer::new(delay, request_tx),
        };
        (engine, outcome_rx)
    }

    /// Schedule a debounced fetch for `word`, replacing any pending one.
    pub fn request(&mut self, word: String, generation: u64) {
        self.debouncer.schedule(SearchRequest { word, generation });
    }

    /// Drop the pending debounced fetch.
    pub fn cancel(&mut self) {
        self.debouncer.cancel();
    }

    pub fn is_pending(&self) -> bool {
        self.debouncer.is_pending()
    }

    /// Carry out an effect returned by a state reducer.
    pub fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Search { word, generation } => self.request(word, generation),
            Effect::CancelSearch => self.cancel(),
            Effect::None => {}
        }
    }
}

fn spawn_fetch<F: SuggestionFetcher>(
    fetcher: Arc<F>,
    tx: mpsc::Sender<FetchOutcome>,
    req: SearchRequest,
) {
    tokio::spawn(async move {
        debug!(word = %req.word, generation = req.generation, "Fetching suggestions");
        let result = fetcher.fetch(&req.word).await;
        let outcome = FetchOutcome {
            word: req.word,
            generation: req.generation,
            result,
        };
        if tx.send(outcome).await.is_err() {
            trace!("Outcome receiver dropped");
        }
    });
}

/// Apply a fetch outcome to the widget state.
///
/// Failures are logged and leave the state untouched. Returns whether the
/// suggestion list was replaced.
pub fn apply_outcome(state: &mut AutocompleteState, outcome: FetchOutcome) -> bool {
    match outcome.result {
        Ok(list) => {
            debug!(
                word = %outcome.word,
                count = list.len(),
                "Suggestions ready"
            );
            state.on_suggestions_ready(outcome.generation, list)
        }
        Err(e) => {
            warn!(word = %outcome.word, error = %e, "Suggestion fetch failed");
            false
        }
    }
}
