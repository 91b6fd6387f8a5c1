//! Line-addressable document view.
//!
//! The formatter consumes a document through the same surface a host editor
//! exposes: a line count plus per-line text access. [`Document`] wraps the
//! full text in a rope so line lookup stays O(log n) even for the very long
//! captured outputs that collection assertions tend to produce.

use ropey::Rope;

/// A read-only, line-addressable view of one document's text.
///
/// Offsets reported against a document are **character offsets** (Unicode
/// scalar values), never bytes. Line boundaries follow the rope's line-break
/// set (LF, CRLF, lone CR, and the other Unicode breaks); the line accessor
/// strips the terminator so rules never see it. Every consumer of a
/// document's lines must go through this view, so formatter and applier
/// agree on line numbering for any input.
pub struct Document {
    rope: Rope,
}

impl Document {
    /// Create an empty document.
    pub fn new() -> Self {
        Self { rope: Rope::new() }
    }

    /// Build a document view from the full source text.
    pub fn from_text(text: &str) -> Self {
        Self {
            rope: Rope::from_str(text),
        }
    }

    /// Total number of logical lines.
    ///
    /// Follows rope semantics: an empty document has one (empty) line, and a
    /// trailing newline opens a final empty line.
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    /// Text of the given line without its terminator, or `None` when `line`
    /// is out of range.
    pub fn line_text(&self, line: usize) -> Option<String> {
        if line >= self.rope.len_lines() {
            return None;
        }

        let mut text = self.rope.line(line).to_string();
        strip_line_terminator(&mut text);
        Some(text)
    }

    /// Total character count (Unicode scalar values).
    pub fn char_count(&self) -> usize {
        self.rope.len_chars()
    }

    /// The full document text.
    pub fn text(&self) -> String {
        self.rope.to_string()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

// Rope lines keep their terminator; remove it. The candidates are the rope's
// recognized breaks: CRLF first, then any single break character (LF, VT, FF,
// CR, NEL, LS, PS).
fn strip_line_terminator(text: &mut String) {
    if text.ends_with("\r\n") {
        text.truncate(text.len() - 2);
        return;
    }
    if text.ends_with([
        '\n', '\u{000B}', '\u{000C}', '\r', '\u{0085}', '\u{2028}', '\u{2029}',
    ]) {
        text.pop();
    }
}
