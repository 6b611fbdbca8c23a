//! Headless (non-interactive) mode.
//!
//! Completes the trailing word of a given text once, with no debounce, and
//! returns one line per suggestion with matched runs wrapped in `[` `]`.

use tracing::debug;

use wordfill_core::SuggestionFetcher;
use wordfill_core::highlight::{Segment, highlight_segments};
use wordfill_core::token::search_token;

/// Fetch and format suggestions for the trailing word of `text`.
///
/// Text that is empty or ends in whitespace yields no lines. Unlike the
/// interactive widget, a fetch failure is returned to the caller.
pub async fn run<F: SuggestionFetcher>(
    fetcher: &F,
    text: &str,
) -> wordfill_core::Result<Vec<String>> {
    let Some(word) = search_token(text) else {
        debug!("No trailing word to complete");
        return Ok(Vec::new());
    };
    let suggestions = fetcher.fetch(word).await?;
    debug!(word, count = suggestions.len(), "Headless suggestions");
    Ok(suggestions
        .iter()
        .map(|s| format_highlighted(&highlight_segments(s, word)))
        .collect())
}

/// Render segments as plain text with matches bracketed.
pub fn format_highlighted(segments: &[Segment<'_>]) -> String {
    let mut out = String::new();
    for seg in segments {
        if seg.is_match {
            out.push('[');
            out.push_str(seg.text);
            out.push(']');
        } else {
            out.push_str(seg.text);
        }
    }
    out
}
