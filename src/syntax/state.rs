//! Scanner state carried from one line to the next
//!
//! The lexer never looks at previous lines. Everything it needs to know
//! about them lives in a [`ScanState`], threaded through a buffer by the
//! caller.

use super::span::Span;

/// Lexer state at a line boundary
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanState {
    /// Inside an unterminated block comment
    pub in_block_comment: bool,
    /// Inside an unterminated string (only set when string carrying is on)
    pub in_string: bool,
    /// Quote character that will close the open string
    pub string_delimiter: Option<char>,
}

impl ScanState {
    /// State for a line that continues a block comment
    pub fn in_comment() -> Self {
        Self {
            in_block_comment: true,
            ..Self::default()
        }
    }

    /// State for a line that continues a string opened with `quote`
    pub fn in_string(quote: char) -> Self {
        Self {
            in_string: true,
            string_delimiter: Some(quote),
            ..Self::default()
        }
    }

    /// Check if no multi-line construct is open
    pub fn is_normal(&self) -> bool {
        !self.in_block_comment && !self.in_string
    }
}

/// Result of highlighting a single line
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightResult {
    /// Classified spans, left to right
    pub spans: Vec<Span>,
    /// State at end of line (for next line)
    pub end_state: ScanState,
}
