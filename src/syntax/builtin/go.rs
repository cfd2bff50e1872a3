//! Go grammar

use crate::syntax::language::LanguageGrammar;

/// Create Go grammar
pub fn go_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("go");
    lang.add_extension("go");
    lang.add_alias("golang");

    lang.add_keywords(&[
        "break", "case", "chan", "const", "continue", "default", "defer", "else",
        "fallthrough", "false", "for", "func", "go", "goto", "if", "import", "interface",
        "iota", "map", "nil", "package", "range", "return", "select", "struct", "switch",
        "true", "type", "var",
    ]);

    lang.add_line_comment("//");
    lang.set_block_comment("/*", "*/");
    lang.set_quotes(&['"', '\'', '`']);
    lang
}
