//! Fallback grammar for unknown languages

use crate::syntax::language::LanguageGrammar;

/// Create the plain-text grammar.
///
/// No keywords; recognises the most common comment and quote syntax so that
/// unknown source files still get comments and strings highlighted.
pub fn text_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("text");
    lang.add_extension("txt");
    lang.add_alias("plain");
    lang.add_alias("plaintext");

    lang.add_line_comment("//");
    lang.add_line_comment("#");
    lang.set_block_comment("/*", "*/");
    lang.set_quotes(&['"', '\'', '`']);
    lang
}
