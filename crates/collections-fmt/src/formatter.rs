//! The line formatter: positional break rules over captured failure output.
//!
//! One scan per line classifies every position as quoted or not, then a small
//! fixed rule set decides where breaks go:
//!
//! - after the first unquoted `(`
//! - after the first unquoted `(` past the diagnostic phrase (when present
//!   and distinct from the first)
//! - after every unquoted space outside the diagnostic phrase
//! - a blank line on each side of the diagnostic phrase
//!
//! All rules are heuristics hard-coded to one assertion message shape; none of
//! this is a grammar. Absence of a pattern yields no edit; there are no error
//! conditions here.

use crate::document::Document;
use crate::edit::InsertionEdit;
use crate::spans::{positions_outside_spans, quoted_spans};

/// The assertion message fragment that marks a collection-equality failure.
///
/// The trailing space is part of the phrase: the message always reads
/// `<actual> did not contain the same elements as <expected>`.
pub const DIAGNOSTIC_PHRASE: &str = "did not contain the same elements as ";

/// Blank line inserted on each side of the diagnostic phrase.
const PHRASE_SEPARATOR: &str = "\n\n";

/// The indentation unit inserted after each break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndentUnit {
    /// A literal tab character.
    Tab,
    /// The given number of spaces.
    Spaces(usize),
}

/// Options that control how breaks are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormatOptions {
    /// Indentation unit inserted after each break.
    pub indent: IndentUnit,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            indent: IndentUnit::Tab,
        }
    }
}

/// Character-offset location of the diagnostic phrase within one line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PhraseLocation {
    /// Offset of the phrase's first character.
    start: usize,
    /// Offset one past the phrase's trailing space.
    end: usize,
}

fn phrase_location(text: &str) -> Option<PhraseLocation> {
    let byte_start = text.find(DIAGNOSTIC_PHRASE)?;
    let start = text[..byte_start].chars().count();
    let end = start + DIAGNOSTIC_PHRASE.chars().count();
    Some(PhraseLocation { start, end })
}

/// The formatter: scans each line of a captured failure document and emits
/// the insertion edits that break collection diffs apart.
///
/// The formatter holds no document state; one value can format any number of
/// documents. Edits are computed against original line text and returned as a
/// batch sorted by `(line, character)` for the host to apply in one step (see
/// [`apply_insertions`](crate::apply_insertions)).
///
/// A second pass over already-formatted output is **not** a no-op: inserted
/// whitespace matches the space rule again. That is inherent to the rule set;
/// hosts format a captured document once.
#[derive(Debug, Clone)]
pub struct LineFormatter {
    break_text: String,
}

impl LineFormatter {
    /// Create a formatter with the given options.
    pub fn new(options: FormatOptions) -> Self {
        let mut break_text = String::from("\n");
        match options.indent {
            IndentUnit::Tab => break_text.push('\t'),
            IndentUnit::Spaces(count) => {
                for _ in 0..count {
                    break_text.push(' ');
                }
            }
        }
        Self { break_text }
    }

    /// Compute the insertion edits for an entire document.
    ///
    /// Lines are independent; the batch covers the whole document ordered by
    /// `(line, character)`.
    pub fn format(&self, document: &Document) -> Vec<InsertionEdit> {
        let mut edits = Vec::new();

        for line in 0..document.line_count() {
            let Some(text) = document.line_text(line) else {
                continue;
            };
            edits.extend(self.format_line(line, &text));
        }

        edits
    }

    /// Compute the insertion edits for a single line.
    ///
    /// Edits are ordered by character offset; edits sharing an offset keep
    /// rule order (breaks before phrase separators).
    pub fn format_line(&self, line: usize, text: &str) -> Vec<InsertionEdit> {
        let spans = quoted_spans(text);
        let phrase = phrase_location(text);

        let brackets = positions_outside_spans(text, '(', &spans);
        let spaces = positions_outside_spans(text, ' ', &spans);

        let mut edits = Vec::new();

        // Break after the first unquoted bracket.
        let first_bracket = brackets.first().copied();
        if let Some(idx) = first_bracket {
            edits.push(self.break_after(line, idx));
        }

        // Break after the first unquoted bracket past the phrase. Phrase-less
        // lines skip this rule, and a bracket the first rule already broke is
        // not broken twice.
        if let Some(phrase) = phrase
            && let Some(idx) = brackets.iter().copied().find(|&idx| idx > phrase.start)
            && Some(idx) != first_bracket
        {
            edits.push(self.break_after(line, idx));
        }

        // Break after every unquoted space outside the phrase.
        for idx in spaces {
            let in_phrase = phrase.is_some_and(|p| idx >= p.start && idx <= p.end);
            if !in_phrase {
                edits.push(self.break_after(line, idx));
            }
        }

        // Isolate the phrase with a blank line on each side.
        if let Some(phrase) = phrase {
            edits.push(InsertionEdit::new(line, phrase.start, PHRASE_SEPARATOR));
            edits.push(InsertionEdit::new(line, phrase.end, PHRASE_SEPARATOR));
        }

        // Stable by construction: equal offsets keep rule emission order.
        edits.sort_by_key(|edit| edit.character);
        edits
    }

    fn break_after(&self, line: usize, idx: usize) -> InsertionEdit {
        InsertionEdit::new(line, idx + 1, self.break_text.clone())
    }
}

impl Default for LineFormatter {
    fn default() -> Self {
        Self::new(FormatOptions::default())
    }
}
