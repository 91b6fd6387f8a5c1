//! Quoted-span detection.
//!
//! No break rule may fire inside a string literal, so every rule shares one
//! scan: double-quote positions are paired consecutively (1st with 2nd, 3rd
//! with 4th, …) into half-open spans, and a position is "quoted" when some
//! span contains it. An odd trailing quote has no partner and opens no span,
//! which keeps unterminated strings inert instead of swallowing the rest of
//! the line.

/// A half-open interval `[start, end)` of character positions lying between a
/// pair of double quotes on one line.
///
/// `start` is the opening quote's own offset and `end` the closing quote's,
/// so the content between the quotes tests as inside while the closing quote
/// itself does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StringSpan {
    /// Offset of the opening quote (inclusive).
    pub start: usize,
    /// Offset of the closing quote (exclusive).
    pub end: usize,
}

impl StringSpan {
    /// Create a span covering `[start, end)`.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check whether the span contains `pos`.
    pub fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }
}

/// Scan one line and pair its double quotes into spans.
///
/// Offsets are character offsets into `text`. The scan is a single left to
/// right pass; a quote with no later partner is dropped.
pub fn quoted_spans(text: &str) -> Vec<StringSpan> {
    let mut spans = Vec::new();
    let mut open: Option<usize> = None;

    for (idx, ch) in text.chars().enumerate() {
        if ch != '"' {
            continue;
        }
        match open.take() {
            Some(start) => spans.push(StringSpan::new(start, idx)),
            None => open = Some(idx),
        }
    }

    spans
}

/// Check whether `pos` falls inside any of `spans`.
pub fn inside_any(spans: &[StringSpan], pos: usize) -> bool {
    spans.iter().any(|span| span.contains(pos))
}

/// All character offsets of `target` in `text` that are outside every span.
pub fn positions_outside_spans(text: &str, target: char, spans: &[StringSpan]) -> Vec<usize> {
    text.chars()
        .enumerate()
        .filter(|&(idx, ch)| ch == target && !inside_any(spans, idx))
        .map(|(idx, _)| idx)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_contains() {
        let span = StringSpan::new(4, 8);
        assert!(span.contains(4));
        assert!(span.contains(7));
        assert!(!span.contains(8));
        assert!(!span.contains(3));
    }

    #[test]
    fn test_quotes_pair_consecutively() {
        // foo("a b", "c d")
        let spans = quoted_spans(r#"foo("a b", "c d")"#);
        assert_eq!(spans, vec![StringSpan::new(4, 8), StringSpan::new(11, 15)]);
    }

    #[test]
    fn test_odd_trailing_quote_opens_no_span() {
        let spans = quoted_spans(r#"say "hi"#);
        assert!(spans.is_empty());

        // Three quotes: the first two pair up, the third is dropped.
        let spans = quoted_spans(r#""ab" "cd"#);
        assert_eq!(spans, vec![StringSpan::new(0, 3)]);
    }

    #[test]
    fn test_no_quotes_means_nothing_is_quoted() {
        let text = "Seq(1, 2, 3)";
        let spans = quoted_spans(text);
        assert!(spans.is_empty());

        for idx in 0..text.chars().count() {
            assert!(!inside_any(&spans, idx));
        }
    }

    #[test]
    fn test_positions_outside_spans_skips_quoted_matches() {
        let text = r#"foo("a b", "c d")"#;
        let spans = quoted_spans(text);

        // Only the space between the two literals survives the filter.
        assert_eq!(positions_outside_spans(text, ' ', &spans), vec![10]);
        assert_eq!(positions_outside_spans(text, '(', &spans), vec![3]);
    }

    #[test]
    fn test_offsets_are_characters_not_bytes() {
        // The emoji occupies several bytes but exactly one scanned position.
        let text = "x🦀(\"a b\")";
        let spans = quoted_spans(text);
        assert_eq!(spans, vec![StringSpan::new(3, 7)]);
        assert_eq!(positions_outside_spans(text, '(', &spans), vec![2]);
        assert!(positions_outside_spans(text, ' ', &spans).is_empty());
    }
}
