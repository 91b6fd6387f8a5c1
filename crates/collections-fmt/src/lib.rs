#![warn(missing_docs)]
//! Collections Fmt - Headless Formatter for Collection Assertion Failures
//!
//! # Overview
//!
//! `collections-fmt` reformats the one-line failure messages that collection
//! equality assertions print, such as ScalaTest's
//! `List(1, 2) did not contain the same elements as List(2, 3)`, into a
//! vertical layout where the differing elements line up for eyeball diffing.
//! It is headless: the formatter computes position-based insertion edits and
//! the host (an editor plugin, a CI log viewer, a CLI) decides how to apply
//! them. No text is ever removed or reordered.
//!
//! # How It Works
//!
//! Each line is processed independently:
//!
//! - Double-quote pairs are scanned into string spans; everything inside a
//!   span is exempt from the rules below.
//! - A break (newline plus one indent unit) goes after the first unquoted
//!   `(`, after the first unquoted `(` past the diagnostic phrase, and after
//!   every unquoted space outside the phrase.
//! - The phrase `did not contain the same elements as ` is isolated with a
//!   blank line on each side.
//!
//! All offsets are character offsets (Unicode scalar values), line-local.
//! The UTF-16 code unit mapping protocol hosts need lives in
//! `collections-fmt-lsp`.
//!
//! # Quick Start
//!
//! ```rust
//! use collections_fmt::{Document, LineFormatter, apply_insertions};
//!
//! let text = "List(1, 2) did not contain the same elements as List(2, 3)";
//! let document = Document::from_text(text);
//!
//! let formatter = LineFormatter::default();
//! let edits = formatter.format(&document);
//! let formatted = apply_insertions(text, &edits).unwrap();
//!
//! // Each collection opens onto its own indented lines...
//! assert!(formatted.contains("List(\n\t1, \n\t2"));
//! // ...and the diagnostic phrase sits alone between blank lines.
//! assert!(formatted.contains("\n\ndid not contain the same elements as \n\n"));
//! ```
//!
//! # Module Description
//!
//! - [`document`] - Rope-backed line access over captured failure text
//! - [`spans`] - Double-quote pairing and position classification
//! - [`formatter`] - The break rules; turns lines into insertion edits
//! - [`edit`] - The insertion edit type and a reference applier
//!
//! # Unicode Support
//!
//! - UTF-8 internal encoding
//! - Edit offsets count characters, not bytes
//! - via `collections-fmt-lsp` provides UTF-16 code unit coordinate
//!   conversion (for upper-layer protocols/integrations)

pub mod document;
pub mod edit;
pub mod formatter;
pub mod spans;

pub use document::Document;
pub use edit::{ApplyError, InsertionEdit, apply_insertions};
pub use formatter::{DIAGNOSTIC_PHRASE, FormatOptions, IndentUnit, LineFormatter};
pub use spans::{StringSpan, inside_any, positions_outside_spans, quoted_spans};
