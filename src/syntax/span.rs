//! Classified spans and the lines built from them

use crate::reflow::decorative::decorative_char;
use crate::reflow::width::text_width;

use super::tokens::TokenClass;

/// A classified fragment of one line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    /// Lexical category
    pub class: TokenClass,
    /// Raw text (not escaped)
    pub text: String,
}

impl Span {
    /// Create a new span
    pub fn new(class: TokenClass, text: impl Into<String>) -> Self {
        Self {
            class,
            text: text.into(),
        }
    }

    /// Get the length of this span in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Check if span is empty
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    pub fn is_comment(&self) -> bool {
        self.class == TokenClass::Comment
    }

    /// Whitespace-only plain run
    pub fn is_blank(&self) -> bool {
        self.class == TokenClass::Plain && self.text.trim().is_empty()
    }
}

/// Kind of a line, derived from its content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Code,
    Comment,
    Decorative,
    Blank,
}

/// One highlighted line
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Line {
    spans: Vec<Span>,
}

impl Line {
    pub fn new(spans: Vec<Span>) -> Self {
        Self { spans }
    }

    /// A line made of a single comment span
    pub fn comment(text: impl Into<String>) -> Self {
        let text = text.into();
        if text.is_empty() {
            return Self::default();
        }
        Self::new(vec![Span::new(TokenClass::Comment, text)])
    }

    pub fn blank() -> Self {
        Self::default()
    }

    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    pub fn into_spans(self) -> Vec<Span> {
        self.spans
    }

    /// The unescaped text of the line
    pub fn text(&self) -> String {
        self.spans.iter().map(|s| s.text.as_str()).collect()
    }

    /// Display width in columns
    pub fn width(&self) -> usize {
        self.spans.iter().map(|s| text_width(&s.text)).sum()
    }

    /// True when the only non-whitespace span is a single comment
    pub fn is_comment_only(&self) -> bool {
        let mut content = self.spans.iter().filter(|s| !s.is_blank());
        matches!((content.next(), content.next()), (Some(span), None) if span.is_comment())
    }

    /// Derive the kind of this line from its spans
    pub fn kind(&self) -> LineKind {
        let text = self.text();
        if text.trim().is_empty() {
            LineKind::Blank
        } else if decorative_char(&text).is_some() {
            LineKind::Decorative
        } else if self.is_comment_only() {
            LineKind::Comment
        } else {
            LineKind::Code
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_len() {
        let span = Span::new(TokenClass::Keyword, "let");
        assert_eq!(span.len(), 3);
        assert!(!span.is_empty());
        assert!(!span.is_blank());
        assert!(Span::new(TokenClass::Plain, "   ").is_blank());
    }

    #[test]
    fn test_line_kinds() {
        assert_eq!(Line::blank().kind(), LineKind::Blank);
        assert_eq!(
            Line::new(vec![Span::new(TokenClass::Plain, "  ")]).kind(),
            LineKind::Blank
        );

        let comment = Line::new(vec![
            Span::new(TokenClass::Plain, "    "),
            Span::new(TokenClass::Comment, "// note"),
        ]);
        assert_eq!(comment.kind(), LineKind::Comment);

        let code = Line::new(vec![
            Span::new(TokenClass::Variable, "x"),
            Span::new(TokenClass::Plain, " "),
            Span::new(TokenClass::Comment, "// note"),
        ]);
        assert_eq!(code.kind(), LineKind::Code);

        let banner = Line::new(vec![Span::new(TokenClass::Comment, "#####")]);
        assert_eq!(banner.kind(), LineKind::Decorative);
        assert!(banner.is_comment_only());
    }

    #[test]
    fn test_line_text_and_width() {
        let line = Line::new(vec![
            Span::new(TokenClass::Keyword, "let"),
            Span::new(TokenClass::Plain, " "),
            Span::new(TokenClass::Variable, "x"),
        ]);
        assert_eq!(line.text(), "let x");
        assert_eq!(line.width(), 5);
    }
}
