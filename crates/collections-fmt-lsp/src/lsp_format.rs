//! The `textDocument/formatting` provider surface.
//!
//! This module intentionally avoids pulling in a full `lsp-types` dependency.
//! It parses the small subset needed to:
//! - answer a formatting request with insertion edits
//! - honor the client's `tabSize` / `insertSpaces` options
//! - apply a provider response back to text (for hosts and tests)

use collections_fmt::{
    ApplyError, Document, FormatOptions, IndentUnit, InsertionEdit, LineFormatter,
    apply_insertions,
};
use serde_json::{Value, json};
use thiserror::Error;

use crate::lsp_positions::{LspPosition, LspRange, position_for_char_offset, utf16_to_char_offset};

/// Language identifier hosts register the formatting provider under.
pub const LANGUAGE_ID: &str = "scala-collections";

/// Errors surfaced by the provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The request params were not shaped like `textDocument/formatting` params.
    #[error("malformed formatting params: {0}")]
    MalformedParams(&'static str),
    /// An edit carried a non-collapsed range; the provider only emits insertions.
    #[error("edit at {line}:{character} is not an insertion")]
    NotAnInsertion {
        /// Line of the offending edit.
        line: u32,
        /// UTF-16 character offset of the offending edit.
        character: u32,
    },
    /// Applying resolved insertions to the document failed.
    #[error(transparent)]
    Apply(#[from] ApplyError),
}

/// A minimal representation of an LSP `TextEdit`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LspTextEdit {
    /// The range to replace (UTF-16 based line/character positions).
    pub range: LspRange,
    /// Replacement text (may contain newlines).
    pub new_text: String,
}

impl LspTextEdit {
    /// An insertion: a zero-width range at `position`.
    pub fn insert(position: LspPosition, new_text: impl Into<String>) -> Self {
        Self {
            range: LspRange::collapsed(position),
            new_text: new_text.into(),
        }
    }

    /// Parse a `TextEdit`-shaped JSON value.
    pub fn from_value(value: &Value) -> Option<Self> {
        let range = value.get("range")?;
        let start = position_from_value(range.get("start")?)?;
        let end = position_from_value(range.get("end")?)?;

        let new_text = value
            .get("newText")
            .and_then(Value::as_str)
            .unwrap_or("")
            .to_string();

        Some(Self {
            range: LspRange::new(start, end),
            new_text,
        })
    }

    /// Serialize as a `TextEdit`-shaped JSON value.
    pub fn to_value(&self) -> Value {
        json!({
            "range": {
                "start": { "line": self.range.start.line, "character": self.range.start.character },
                "end": { "line": self.range.end.line, "character": self.range.end.character },
            },
            "newText": self.new_text,
        })
    }
}

fn position_from_value(value: &Value) -> Option<LspPosition> {
    Some(LspPosition {
        line: value.get("line")?.as_u64()? as u32,
        character: value.get("character")?.as_u64()? as u32,
    })
}

/// The `tabSize` / `insertSpaces` pair from `textDocument/formatting` params.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormattingOptions {
    /// Spaces per indent level, used when `insert_spaces` is set.
    pub tab_size: usize,
    /// Indent with spaces instead of a tab character.
    pub insert_spaces: bool,
}

impl FormattingOptions {
    /// Upper bound applied to client-supplied `tabSize` values.
    pub const MAX_TAB_SIZE: usize = 16;

    /// Parse an `options`-shaped JSON value; missing fields keep defaults,
    /// and `tabSize` clamps to [`Self::MAX_TAB_SIZE`] so a bad client value
    /// cannot request an arbitrarily large indent allocation.
    pub fn from_value(value: &Value) -> Self {
        let defaults = Self::default();
        Self {
            tab_size: value
                .get("tabSize")
                .and_then(Value::as_u64)
                .map(|n| (n as usize).min(Self::MAX_TAB_SIZE))
                .unwrap_or(defaults.tab_size),
            insert_spaces: value
                .get("insertSpaces")
                .and_then(Value::as_bool)
                .unwrap_or(defaults.insert_spaces),
        }
    }

    /// The indent unit these options select.
    pub fn indent_unit(&self) -> IndentUnit {
        if self.insert_spaces {
            IndentUnit::Spaces(self.tab_size)
        } else {
            IndentUnit::Tab
        }
    }
}

impl Default for FormattingOptions {
    fn default() -> Self {
        Self {
            tab_size: 4,
            insert_spaces: false,
        }
    }
}

/// Compute formatting edits for a captured document.
///
/// Every edit is an insertion positioned in UTF-16 code units against the
/// original text, ordered by `(line, character)`.
pub fn formatting_edits(text: &str, options: FormattingOptions) -> Vec<LspTextEdit> {
    let document = Document::from_text(text);
    let formatter = LineFormatter::new(FormatOptions {
        indent: options.indent_unit(),
    });

    formatter
        .format(&document)
        .into_iter()
        .map(|edit| {
            let line_text = document.line_text(edit.line).unwrap_or_default();
            let position = position_for_char_offset(&line_text, edit.line, edit.character);
            LspTextEdit::insert(position, edit.text)
        })
        .collect()
}

/// Handle a `textDocument/formatting` request against already-loaded text.
///
/// `params` is the request's params object; the document text itself comes
/// from the host's sync layer. Returns the JSON array of `TextEdit`s for the
/// response's `result` field.
pub fn handle_formatting_request(
    document_text: &str,
    params: &Value,
) -> Result<Value, ProviderError> {
    let text_document = params
        .get("textDocument")
        .ok_or(ProviderError::MalformedParams("missing textDocument"))?;
    if text_document.get("uri").and_then(Value::as_str).is_none() {
        return Err(ProviderError::MalformedParams("missing textDocument.uri"));
    }

    let options = params
        .get("options")
        .map(FormattingOptions::from_value)
        .unwrap_or_default();

    let edits = formatting_edits(document_text, options);
    Ok(Value::Array(edits.iter().map(LspTextEdit::to_value).collect()))
}

/// Apply provider edits to `text`, resolving UTF-16 positions back into
/// character offsets.
///
/// Rejects edits with non-collapsed ranges; the provider only ever emits
/// insertions.
pub fn apply_formatting_edits(text: &str, edits: &[LspTextEdit]) -> Result<String, ProviderError> {
    let document = Document::from_text(text);

    let mut insertions = Vec::with_capacity(edits.len());
    for edit in edits {
        if !edit.range.is_collapsed() {
            return Err(ProviderError::NotAnInsertion {
                line: edit.range.start.line,
                character: edit.range.start.character,
            });
        }

        let line = edit.range.start.line as usize;
        let line_text = document.line_text(line).unwrap_or_default();
        let character = utf16_to_char_offset(&line_text, edit.range.start.character as usize);
        insertions.push(InsertionEdit::new(line, character, edit.new_text.clone()));
    }

    Ok(apply_insertions(text, &insertions)?)
}
