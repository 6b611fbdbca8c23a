//! Highlight segmentation for suggestion rendering.
//!
//! A suggestion is split into plain and matched runs so the UI can style the
//! matched parts without ever interpreting the suggestion as markup.

use regex::RegexBuilder;

/// A contiguous run of a suggestion, either matching the search token or not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    pub text: &'a str,
    pub is_match: bool,
}

impl<'a> Segment<'a> {
    const fn plain(text: &'a str) -> Self {
        Self {
            text,
            is_match: false,
        }
    }

    const fn matched(text: &'a str) -> Self {
        Self {
            text,
            is_match: true,
        }
    }
}

/// Split `candidate` on every case-insensitive occurrence of `token`.
///
/// `token` is matched literally. Matches are found left to right and never
/// overlap. Joining the returned segment texts yields `candidate` unchanged.
pub fn highlight_segments<'a>(candidate: &'a str, token: &str) -> Vec<Segment<'a>> {
    if candidate.is_empty() {
        return Vec::new();
    }
    if token.is_empty() {
        return vec![Segment::plain(candidate)];
    }

    let re = match RegexBuilder::new(&regex::escape(token))
        .case_insensitive(true)
        .build()
    {
        Ok(re) => re,
        Err(e) => {
            tracing::debug!(?e, token, "Highlight pattern rejected, rendering plain");
            return vec![Segment::plain(candidate)];
        }
    };

    let mut segments = Vec::new();
    let mut last = 0;
    for m in re.find_iter(candidate) {
        if m.start() > last {
            segments.push(Segment::plain(&candidate[last..m.start()]));
        }
        segments.push(Segment::matched(m.as_str()));
        last = m.end();
    }
    if last < candidate.len() {
        segments.push(Segment::plain(&candidate[last..]));
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    fn joined(segments: &[Segment<'_>]) -> String {
        segments.iter().map(|s| s.text).collect()
    }

    #[test]
    fn prefix_match() {
        let segs = highlight_segments("world", "wor");
        assert_eq!(segs, vec![Segment::matched("wor"), Segment::plain("ld")]);
    }

    #[test]
    fn case_insensitive_keeps_original_case() {
        let segs = highlight_segments("WordWORK", "wor");
        assert_eq!(
            segs,
            vec![
                Segment::matched("Wor"),
                Segment::plain("d"),
                Segment::matched("WOR"),
                Segment::plain("K"),
            ]
        );
    }

    #[test]
    fn no_match_is_single_plain_segment() {
        let segs = highlight_segments("apple", "xyz");
        assert_eq!(segs, vec![Segment::plain("apple")]);
    }

    #[test]
    fn token_is_literal_not_a_pattern() {
        let segs = highlight_segments("a.b axb", ".");
        assert_eq!(
            segs,
            vec![
                Segment::plain("a"),
                Segment::matched("."),
                Segment::plain("b axb"),
            ]
        );
    }

    #[test]
    fn markup_in_candidate_stays_text() {
        let candidate = "<img src=x onerror=alert(1)>";
        let segs = highlight_segments(candidate, "img");
        assert_eq!(joined(&segs), candidate);
        assert!(segs.iter().any(|s| s.is_match && s.text == "img"));
    }

    #[test]
    fn matches_do_not_overlap() {
        let segs = highlight_segments("aaaa", "aa");
        assert_eq!(segs, vec![Segment::matched("aa"), Segment::matched("aa")]);
    }

    #[test]
    fn empty_inputs() {
        assert!(highlight_segments("", "a").is_empty());
        assert_eq!(highlight_segments("abc", ""), vec![Segment::plain("abc")]);
    }
}
