//! TOML grammar

use crate::syntax::language::LanguageGrammar;

/// Create TOML grammar
pub fn toml_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("toml");
    lang.add_extension("toml");
    lang.add_keywords(&["true", "false"]);
    lang.add_line_comment("#");
    lang.set_quotes(&['"', '\'']);
    lang
}
