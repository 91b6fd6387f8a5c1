//! Positional insertion edits and batch application.
//!
//! The formatter never mutates text itself. It describes changes as a batch
//! of position-based insertions that the host applies in one step, so every
//! offset in the batch refers to the **original** line text. This module
//! defines that edit format plus [`apply_insertions`], the host-side batch
//! application used by tests, demos, and headless integrations.

use std::collections::BTreeMap;

use crate::document::Document;

/// A single insertion expressed in character offsets.
///
/// Semantics:
/// - `line` is a zero-based logical line index.
/// - `character` is a character offset into that line's **original** text;
///   valid positions are `0..=line length`.
/// - Insertions never delete or reorder existing characters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InsertionEdit {
    /// Zero-based logical line index.
    pub line: usize,
    /// Character offset within the line's original text.
    pub character: usize,
    /// Text inserted at the offset.
    pub text: String,
}

impl InsertionEdit {
    /// Create a new insertion edit.
    pub fn new(line: usize, character: usize, text: impl Into<String>) -> Self {
        Self {
            line,
            character,
            text: text.into(),
        }
    }
}

/// Errors from applying an insertion batch to source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApplyError {
    /// An edit referenced a line or character position outside the document.
    InvalidPosition {
        /// Line index of the offending edit.
        line: usize,
        /// Character offset of the offending edit.
        character: usize,
    },
}

impl std::fmt::Display for ApplyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidPosition { line, character } => {
                write!(
                    f,
                    "insertion position {}:{} is outside the document",
                    line, character
                )
            }
        }
    }
}

impl std::error::Error for ApplyError {}

/// Apply a batch of insertion edits to `text` in one step.
///
/// All offsets are interpreted against the original text, the way a host
/// editor applies a formatter's result: edits never shift one another. Edits
/// that share a position are inserted in batch order. Lines are derived from
/// the same [`Document`] view the formatter scans, so a formatter-produced
/// batch always addresses lines the applier can see; every line terminator in
/// the input (CRLF, lone CR, and the other recognized breaks) comes out as LF.
///
/// Returns [`ApplyError::InvalidPosition`] if any edit lies outside the
/// document. Batches produced by the formatter are valid by construction.
pub fn apply_insertions(text: &str, edits: &[InsertionEdit]) -> Result<String, ApplyError> {
    let document = Document::from_text(text);
    let line_count = document.line_count();

    let mut by_line: BTreeMap<usize, Vec<&InsertionEdit>> = BTreeMap::new();
    for edit in edits {
        if edit.line >= line_count {
            return Err(ApplyError::InvalidPosition {
                line: edit.line,
                character: edit.character,
            });
        }
        by_line.entry(edit.line).or_default().push(edit);
    }

    let mut out_lines = Vec::with_capacity(line_count);
    for line_no in 0..line_count {
        let line = document.line_text(line_no).unwrap_or_default();

        let Some(line_edits) = by_line.get_mut(&line_no) else {
            out_lines.push(line);
            continue;
        };

        // Stable sort: equal offsets keep batch order.
        line_edits.sort_by_key(|edit| edit.character);

        let chars: Vec<char> = line.chars().collect();
        let mut rebuilt = String::with_capacity(line.len());
        let mut cursor = 0usize;

        for edit in line_edits.iter() {
            if edit.character > chars.len() {
                return Err(ApplyError::InvalidPosition {
                    line: edit.line,
                    character: edit.character,
                });
            }
            rebuilt.extend(&chars[cursor..edit.character]);
            rebuilt.push_str(&edit.text);
            cursor = edit.character;
        }
        rebuilt.extend(&chars[cursor..]);

        out_lines.push(rebuilt);
    }

    Ok(out_lines.join("\n"))
}
