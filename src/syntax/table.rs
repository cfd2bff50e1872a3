//! Grammar lookup table
//!
//! Maps language ids, aliases and file extensions to grammars. Unknown ids
//! resolve to the plain-text fallback grammar, so a lookup never fails.

use std::collections::HashMap;
use std::path::Path;

use super::builtin;
use super::language::LanguageGrammar;

/// Immutable-after-setup table of language grammars
#[derive(Debug, Clone)]
pub struct GrammarTable {
    /// Grammars by lowercase id
    grammars: HashMap<String, LanguageGrammar>,
    /// Alias to id mapping
    aliases: HashMap<String, String>,
    /// Extension to id mapping
    extension_map: HashMap<String, String>,
    /// Grammar used for unknown ids
    fallback: LanguageGrammar,
}

impl GrammarTable {
    /// Create a table with the built-in languages
    pub fn new() -> Self {
        let mut table = Self::with_fallback(builtin::text_language());
        for grammar in builtin::all_languages() {
            table.add_grammar(grammar);
        }
        table
    }

    /// Create a table that only knows its fallback grammar
    pub fn with_fallback(fallback: LanguageGrammar) -> Self {
        let mut table = Self {
            grammars: HashMap::new(),
            aliases: HashMap::new(),
            extension_map: HashMap::new(),
            fallback: fallback.clone(),
        };
        table.add_grammar(fallback);
        table
    }

    /// Add a grammar, replacing any grammar with the same id
    pub fn add_grammar(&mut self, grammar: LanguageGrammar) {
        let id = grammar.id().to_string();
        for ext in grammar.extensions() {
            self.extension_map.insert(ext.clone(), id.clone());
        }
        for alias in grammar.aliases() {
            self.aliases.insert(alias.clone(), id.clone());
        }
        self.grammars.insert(id, grammar);
    }

    /// Get a grammar by id or alias (case-insensitive)
    pub fn get(&self, id: &str) -> Option<&LanguageGrammar> {
        let id = id.trim().to_lowercase();
        self.grammars.get(&id).or_else(|| {
            self.aliases
                .get(&id)
                .and_then(|target| self.grammars.get(target))
        })
    }

    /// Get a grammar by id, falling back to the default grammar
    pub fn lookup(&self, id: &str) -> &LanguageGrammar {
        self.get(id).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &LanguageGrammar {
        &self.fallback
    }

    /// Detect language from filename
    pub fn detect_language(&self, filename: &Path) -> Option<&str> {
        let ext = filename.extension()?.to_str()?.to_lowercase();
        self.extension_map.get(&ext).map(|s| s.as_str())
    }

    /// List available languages
    pub fn list_languages(&self) -> Vec<&str> {
        let mut names: Vec<_> = self.grammars.keys().map(|s| s.as_str()).collect();
        names.sort();
        names
    }
}

impl Default for GrammarTable {
    fn default() -> Self {
        Self::new()
    }
}
