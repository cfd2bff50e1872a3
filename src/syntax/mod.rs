//! Syntax highlighting
//!
//! This module provides the lexical side of rendering:
//! - Language grammars and the table that looks them up
//! - The single-pass line lexer and the state it carries between lines
//! - Spans and lines, the classified output of the lexer

mod builtin;
mod language;
mod lexer;
mod span;
mod state;
mod table;
mod tokens;

pub use language::LanguageGrammar;
pub use lexer::{comment_body, highlight_line, Lexer};
pub use span::{Line, LineKind, Span};
pub use state::{HighlightResult, ScanState};
pub use table::GrammarTable;
pub use tokens::TokenClass;
