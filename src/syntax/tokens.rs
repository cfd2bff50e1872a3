//! Token classes for syntax highlighting
//!
//! This module defines the lexical categories a span can belong to and
//! the names used for them in CSS and in style overrides.

/// Lexical category of a span
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// Line and block comments
    Comment,
    /// Reserved words of the grammar
    Keyword,
    /// Quoted string literals
    String,
    /// Numeric literals (digits and dots)
    Number,
    /// Identifiers immediately followed by `(`
    Function,
    /// Identifiers starting with an uppercase letter
    Type,
    /// Any other identifier
    Variable,
    /// Any other single character
    Operator,
    /// Whitespace runs (unstyled)
    Plain,
}

impl TokenClass {
    /// Every class that carries a color in a style profile
    pub const STYLED: [TokenClass; 8] = [
        TokenClass::Comment,
        TokenClass::Keyword,
        TokenClass::String,
        TokenClass::Number,
        TokenClass::Function,
        TokenClass::Type,
        TokenClass::Variable,
        TokenClass::Operator,
    ];

    /// Lowercase name, used as override key and CSS suffix
    pub fn name(&self) -> &'static str {
        match self {
            TokenClass::Comment => "comment",
            TokenClass::Keyword => "keyword",
            TokenClass::String => "string",
            TokenClass::Number => "number",
            TokenClass::Function => "function",
            TokenClass::Type => "type",
            TokenClass::Variable => "variable",
            TokenClass::Operator => "operator",
            TokenClass::Plain => "plain",
        }
    }

    /// Parse a class from its name (case-insensitive)
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "comment" => Some(TokenClass::Comment),
            "keyword" => Some(TokenClass::Keyword),
            "string" => Some(TokenClass::String),
            "number" => Some(TokenClass::Number),
            "function" => Some(TokenClass::Function),
            "type" => Some(TokenClass::Type),
            "variable" => Some(TokenClass::Variable),
            "operator" => Some(TokenClass::Operator),
            "plain" => Some(TokenClass::Plain),
            _ => None,
        }
    }

    /// CSS class attached to spans of this class, `None` for plain text
    pub fn css_class(&self) -> Option<&'static str> {
        match self {
            TokenClass::Comment => Some("tok-comment"),
            TokenClass::Keyword => Some("tok-keyword"),
            TokenClass::String => Some("tok-string"),
            TokenClass::Number => Some("tok-number"),
            TokenClass::Function => Some("tok-function"),
            TokenClass::Type => Some("tok-type"),
            TokenClass::Variable => Some("tok-variable"),
            TokenClass::Operator => Some("tok-operator"),
            TokenClass::Plain => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_name_roundtrip() {
        for class in TokenClass::STYLED {
            assert_eq!(TokenClass::from_name(class.name()), Some(class));
        }
        assert_eq!(TokenClass::from_name("Keyword"), Some(TokenClass::Keyword));
    }

    #[test]
    fn test_from_name_invalid() {
        assert_eq!(TokenClass::from_name("Macro"), None);
        assert_eq!(TokenClass::from_name(""), None);
    }

    #[test]
    fn test_plain_has_no_css_class() {
        assert_eq!(TokenClass::Plain.css_class(), None);
        assert_eq!(TokenClass::Comment.css_class(), Some("tok-comment"));
    }
}
