//! LSP position model and UTF-16 coordinate conversion.
//!
//! The core crate counts characters (Unicode scalar values); the protocol
//! counts UTF-16 code units. Everything crossing the protocol boundary goes
//! through this module.

/// LSP Position (based on UTF-16 code units)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LspPosition {
    /// Line number (0-based)
    pub line: u32,
    /// Character offset (UTF-16 code units, 0-based)
    pub character: u32,
}

impl LspPosition {
    /// Create a new LSP position (UTF-16 based).
    pub fn new(line: u32, character: u32) -> Self {
        Self { line, character }
    }
}

/// LSP Range
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LspRange {
    /// Range start position (inclusive).
    pub start: LspPosition,
    /// Range end position (exclusive).
    pub end: LspPosition,
}

impl LspRange {
    /// Create a new LSP range.
    pub fn new(start: LspPosition, end: LspPosition) -> Self {
        Self { start, end }
    }

    /// A zero-width range, as used by pure insertions.
    pub fn collapsed(position: LspPosition) -> Self {
        Self {
            start: position,
            end: position,
        }
    }

    /// Whether start and end coincide.
    pub fn is_collapsed(&self) -> bool {
        self.start == self.end
    }
}

/// Convert a character offset within `line_text` to UTF-16 code units.
pub fn char_offset_to_utf16(line_text: &str, char_offset: usize) -> usize {
    line_text
        .chars()
        .take(char_offset)
        .map(|c| c.len_utf16())
        .sum()
}

/// Convert a UTF-16 code unit offset within `line_text` to a character offset.
///
/// Offsets past the end of the line clamp to the line's character count; an
/// offset landing inside a surrogate pair resolves to the next boundary.
pub fn utf16_to_char_offset(line_text: &str, utf16_offset: usize) -> usize {
    let mut current_utf16 = 0;
    let mut char_count = 0;

    for ch in line_text.chars() {
        if current_utf16 >= utf16_offset {
            break;
        }
        current_utf16 += ch.len_utf16();
        char_count += 1;
    }

    char_count
}

/// Build the protocol position for a character offset within one line.
pub fn position_for_char_offset(line_text: &str, line: usize, char_offset: usize) -> LspPosition {
    let utf16 = char_offset_to_utf16(line_text, char_offset);
    LspPosition::new(line as u32, utf16 as u32)
}
