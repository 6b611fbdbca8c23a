//! Trailing-token extraction.
//!
//! The unit being completed is always the last whitespace-delimited word of
//! the input text. These helpers find it and splice a suggestion in its place.

/// Byte offset where the trailing token starts (just past the last whitespace).
fn token_start(text: &str) -> usize {
    text.char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map_or(0, |(i, c)| i + c.len_utf8())
}

/// Return the trailing word being typed, if any.
///
/// Returns `None` when `text` is empty or ends in whitespace: there is no
/// word under construction in either case.
pub fn search_token(text: &str) -> Option<&str> {
    if text.chars().next_back().is_none_or(char::is_whitespace) {
        return None;
    }
    let token = &text[token_start(text)..];
    (!token.is_empty()).then_some(token)
}

/// Replace the trailing token of `text` with `suggestion` followed by a space.
///
/// Everything up to and including the last whitespace character is kept as
/// typed. When `text` ends in whitespace the suggestion is appended.
pub fn replace_trailing_token(text: &str, suggestion: &str) -> String {
    let prefix = &text[..token_start(text)];
    let mut out = String::with_capacity(prefix.len() + suggestion.len() + 1);
    out.push_str(prefix);
    out.push_str(suggestion);
    out.push(' ');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_is_last_word() {
        assert_eq!(search_token("hel wor"), Some("wor"));
        assert_eq!(search_token("hello"), Some("hello"));
        assert_eq!(search_token("  spaced   out"), Some("out"));
    }

    #[test]
    fn no_token_for_empty_or_trailing_space() {
        assert_eq!(search_token(""), None);
        assert_eq!(search_token("hello "), None);
        assert_eq!(search_token("hello\t"), None);
        assert_eq!(search_token("   "), None);
    }

    #[test]
    fn token_handles_multibyte_text() {
        assert_eq!(search_token("naïve café"), Some("café"));
        assert_eq!(search_token("日本\u{3000}語"), Some("語"));
    }

    #[test]
    fn replace_swaps_trailing_word() {
        assert_eq!(replace_trailing_token("hel wor", "world"), "hel world ");
        assert_eq!(replace_trailing_token("wor", "world"), "world ");
    }

    #[test]
    fn replace_keeps_inner_whitespace() {
        assert_eq!(replace_trailing_token("a  b\tc", "cat"), "a  b\tcat ");
    }

    #[test]
    fn replace_appends_after_trailing_space() {
        assert_eq!(replace_trailing_token("hello ", "world"), "hello world ");
    }

    #[test]
    fn replace_on_empty_text() {
        assert_eq!(replace_trailing_token("", "world"), "world ");
    }
}
