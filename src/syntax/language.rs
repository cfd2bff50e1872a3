//! Language grammars for syntax highlighting
//!
//! A grammar is everything the lexer knows about a language: its reserved
//! words, comment markers and quote characters. Grammars are built once and
//! then only read.

use std::collections::BTreeSet;

/// Lexical description of one language
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LanguageGrammar {
    /// Language id (e.g., "javascript", "python")
    id: String,
    /// File extensions (e.g., ["js", "mjs"])
    extensions: Vec<String>,
    /// Alternative ids (e.g., ["js"])
    aliases: Vec<String>,
    /// Reserved words, case-sensitive
    keywords: BTreeSet<String>,
    /// Line comment markers, tried in order
    line_comments: Vec<String>,
    /// Block comment opener and closer
    block_comment: Option<(String, String)>,
    /// Characters that open and close strings
    quotes: Vec<char>,
}

impl LanguageGrammar {
    /// Create a new empty grammar
    pub fn new(id: &str) -> Self {
        Self {
            id: id.to_lowercase(),
            extensions: Vec::new(),
            aliases: Vec::new(),
            keywords: BTreeSet::new(),
            line_comments: Vec::new(),
            block_comment: None,
            quotes: Vec::new(),
        }
    }

    /// Add a file extension
    pub fn add_extension(&mut self, ext: &str) {
        self.extensions.push(ext.to_lowercase());
    }

    /// Add an alternative id
    pub fn add_alias(&mut self, alias: &str) {
        self.aliases.push(alias.to_lowercase());
    }

    /// Add reserved words
    pub fn add_keywords(&mut self, words: &[&str]) {
        self.keywords.extend(words.iter().map(|w| w.to_string()));
    }

    /// Add a line comment marker
    pub fn add_line_comment(&mut self, marker: &str) {
        if !marker.is_empty() {
            self.line_comments.push(marker.to_string());
        }
    }

    /// Set the block comment delimiters
    pub fn set_block_comment(&mut self, open: &str, close: &str) {
        if !open.is_empty() && !close.is_empty() {
            self.block_comment = Some((open.to_string(), close.to_string()));
        }
    }

    /// Set the string quote characters
    pub fn set_quotes(&mut self, quotes: &[char]) {
        self.quotes = quotes.to_vec();
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn extensions(&self) -> &[String] {
        &self.extensions
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn keywords(&self) -> impl Iterator<Item = &str> {
        self.keywords.iter().map(String::as_str)
    }

    pub fn line_comments(&self) -> &[String] {
        &self.line_comments
    }

    pub fn block_comment(&self) -> Option<(&str, &str)> {
        self.block_comment
            .as_ref()
            .map(|(open, close)| (open.as_str(), close.as_str()))
    }

    pub fn is_keyword(&self, word: &str) -> bool {
        self.keywords.contains(word)
    }

    pub fn is_quote(&self, ch: char) -> bool {
        self.quotes.contains(&ch)
    }

    /// Line comment marker starting at byte `pos`, if any
    pub fn line_comment_at(&self, text: &str, pos: usize) -> Option<&str> {
        let rest = text.get(pos..)?;
        self.line_comments
            .iter()
            .find(|marker| rest.starts_with(marker.as_str()))
            .map(String::as_str)
    }

    /// Block comment opener starting at byte `pos`, if any
    pub fn block_open_at(&self, text: &str, pos: usize) -> Option<&str> {
        let rest = text.get(pos..)?;
        let (open, _) = self.block_comment()?;
        rest.starts_with(open).then_some(open)
    }
}
