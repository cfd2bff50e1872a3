//! Single-pass line lexer
//!
//! Scans one line left to right and classifies every character. Nothing is
//! ever re-scanned and the only lookahead is within the current line, so a
//! buffer is highlighted by threading a [`ScanState`] from line to line.
//!
//! Rules, in priority order at each position:
//!
//! 1. continue an open block comment up to its closer (or end of line)
//! 2. a block comment opener starts a comment the same way
//! 3. a line comment marker swallows the rest of the line
//! 4. a quote starts a string, `\` escapes the next character
//! 5. a digit starts a number (digits and dots)
//! 6. `[A-Za-z_]` starts an identifier: keyword, function, type or variable
//! 7. whitespace runs are plain, anything else is a one-character operator
//!
//! The lexer is total: the span texts of a line always concatenate back to
//! the line.

use crate::reflow::decorative::decorative_char;

use super::language::LanguageGrammar;
use super::span::Span;
use super::state::{HighlightResult, ScanState};
use super::tokens::TokenClass;

/// Line lexer bound to one grammar
#[derive(Debug, Clone, Copy)]
pub struct Lexer<'g> {
    grammar: &'g LanguageGrammar,
    carry_strings: bool,
}

impl<'g> Lexer<'g> {
    pub fn new(grammar: &'g LanguageGrammar) -> Self {
        Self {
            grammar,
            carry_strings: false,
        }
    }

    /// Keep unterminated strings open into the next line.
    ///
    /// Off by default: a string missing its closing quote ends at the end of
    /// its line.
    pub fn carry_strings(mut self, carry: bool) -> Self {
        self.carry_strings = carry;
        self
    }

    pub fn grammar(&self) -> &'g LanguageGrammar {
        self.grammar
    }

    /// Highlight a single line of text
    ///
    /// Takes the line text and the state from the previous line.
    /// Returns spans and the state for the next line.
    pub fn highlight_line(&self, text: &str, prev_state: ScanState) -> HighlightResult {
        let mut spans = Vec::new();
        let mut state = prev_state;
        let mut pos = 0;

        if !self.carry_strings {
            state.in_string = false;
            state.string_delimiter = None;
        }
        if self.grammar.block_comment().is_none() {
            state.in_block_comment = false;
        }

        if state.in_string {
            let quote = state.string_delimiter.unwrap_or('"');
            let (end, closed) = scan_string(text, 0, quote);
            push(&mut spans, TokenClass::String, &text[..end]);
            if !closed {
                return HighlightResult {
                    spans,
                    end_state: state,
                };
            }
            pos = end;
            state = ScanState::default();
        }

        while pos < text.len() {
            if state.in_block_comment {
                match self.find_block_close(text, pos) {
                    Some(end) => {
                        push(&mut spans, TokenClass::Comment, &text[pos..end]);
                        pos = end;
                        state.in_block_comment = false;
                        continue;
                    }
                    None => {
                        push(&mut spans, TokenClass::Comment, &text[pos..]);
                        return HighlightResult {
                            spans,
                            end_state: state,
                        };
                    }
                }
            }

            if let Some(open) = self.grammar.block_open_at(text, pos) {
                match self.find_block_close(text, pos + open.len()) {
                    Some(end) => {
                        push(&mut spans, TokenClass::Comment, &text[pos..end]);
                        pos = end;
                    }
                    None => {
                        push(&mut spans, TokenClass::Comment, &text[pos..]);
                        state.in_block_comment = true;
                        return HighlightResult {
                            spans,
                            end_state: state,
                        };
                    }
                }
                continue;
            }

            if self.grammar.line_comment_at(text, pos).is_some() {
                push(&mut spans, TokenClass::Comment, &text[pos..]);
                break;
            }

            let Some(ch) = text[pos..].chars().next() else {
                break;
            };

            if self.grammar.is_quote(ch) {
                let (end, closed) = scan_string(text, pos + ch.len_utf8(), ch);
                push(&mut spans, TokenClass::String, &text[pos..end]);
                pos = end;
                if !closed && self.carry_strings {
                    state = ScanState::in_string(ch);
                }
                continue;
            }

            if ch.is_ascii_digit() {
                let end = scan_while(text, pos, |c| c.is_ascii_digit() || c == '.');
                push(&mut spans, TokenClass::Number, &text[pos..end]);
                pos = end;
                continue;
            }

            if ch.is_ascii_alphabetic() || ch == '_' {
                let end = scan_while(text, pos, |c| c.is_ascii_alphanumeric() || c == '_');
                let word = &text[pos..end];
                push(&mut spans, self.classify_word(word, &text[end..]), word);
                pos = end;
                continue;
            }

            if ch.is_whitespace() {
                let end = scan_while(text, pos, char::is_whitespace);
                push(&mut spans, TokenClass::Plain, &text[pos..end]);
                pos = end;
                continue;
            }

            let end = pos + ch.len_utf8();
            push(&mut spans, TokenClass::Operator, &text[pos..end]);
            pos = end;
        }

        HighlightResult {
            spans,
            end_state: state,
        }
    }

    /// Byte offset just past the block comment closer at or after `from`
    fn find_block_close(&self, text: &str, from: usize) -> Option<usize> {
        let (_, close) = self.grammar.block_comment()?;
        let rest = text.get(from..)?;
        rest.find(close).map(|idx| from + idx + close.len())
    }

    fn classify_word(&self, word: &str, rest: &str) -> TokenClass {
        if self.grammar.is_keyword(word) {
            TokenClass::Keyword
        } else if rest.starts_with('(') {
            TokenClass::Function
        } else if word.starts_with(|c: char| c.is_ascii_uppercase()) {
            TokenClass::Type
        } else {
            TokenClass::Variable
        }
    }
}

/// Highlight one line with a fresh lexer (string carrying off)
pub fn highlight_line(text: &str, grammar: &LanguageGrammar, state: ScanState) -> HighlightResult {
    Lexer::new(grammar).highlight_line(text, state)
}

/// Extract the prose of a comment-only line.
///
/// Strips the comment markers (a block opener and closer, or one line
/// marker with any repeats of it), the leading `*` of javadoc-style
/// continuation lines, and surrounding whitespace.
pub fn comment_body(text: &str, grammar: &LanguageGrammar) -> String {
    let mut body = text.trim();
    let mut stripped_line_marker = false;

    for marker in grammar.line_comments() {
        if let Some(rest) = body.strip_prefix(marker.as_str()) {
            let repeat: &[char] = &marker.chars().collect::<Vec<_>>();
            body = rest.trim_start_matches(repeat);
            body = body.strip_prefix('!').unwrap_or(body);
            stripped_line_marker = true;
            break;
        }
    }

    if !stripped_line_marker {
        if let Some((open, close)) = grammar.block_comment() {
            body = body.strip_prefix(open).unwrap_or(body);
            body = body.strip_suffix(close).unwrap_or(body);
            if decorative_char(body).is_none() {
                body = body.trim_start().trim_start_matches('*');
            }
        }
    }

    body.trim().to_string()
}

/// Scan a string body starting after its opening quote.
///
/// Returns the end byte offset and whether the closing quote was found.
fn scan_string(text: &str, start: usize, quote: char) -> (usize, bool) {
    let mut chars = text[start..].char_indices();
    while let Some((idx, ch)) = chars.next() {
        if ch == '\\' {
            chars.next();
        } else if ch == quote {
            return (start + idx + ch.len_utf8(), true);
        }
    }
    (text.len(), false)
}

fn scan_while(text: &str, start: usize, pred: impl Fn(char) -> bool) -> usize {
    text[start..]
        .char_indices()
        .find(|&(_, c)| !pred(c))
        .map_or(text.len(), |(idx, _)| start + idx)
}

fn push(spans: &mut Vec<Span>, class: TokenClass, text: &str) {
    if !text.is_empty() {
        spans.push(Span::new(class, text));
    }
}
