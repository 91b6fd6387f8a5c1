#![warn(missing_docs)]
//! `collections-fmt-lsp` - LSP integration for `collections-fmt`.
//!
//! This crate contains the protocol-specific half of the formatter: UTF-16
//! coordinate conversion, a minimal `TextEdit` JSON representation, and a
//! `textDocument/formatting` handler hosts wire into their JSON-RPC loop.
//! The core crate stays protocol-free and counts characters; everything here
//! speaks UTF-16 code units.

pub mod lsp_format;
pub mod lsp_positions;

pub use lsp_format::{
    FormattingOptions, LANGUAGE_ID, LspTextEdit, ProviderError, apply_formatting_edits,
    formatting_edits, handle_formatting_request,
};
pub use lsp_positions::{
    LspPosition, LspRange, char_offset_to_utf16, position_for_char_offset, utf16_to_char_offset,
};
