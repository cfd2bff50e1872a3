//! CSS grammar

use crate::syntax::language::LanguageGrammar;

/// Create CSS grammar
pub fn css_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("css");
    for ext in ["css", "scss", "less"] {
        lang.add_extension(ext);
    }

    // at-rule names and global values
    lang.add_keywords(&[
        "auto", "charset", "font", "import", "important", "inherit", "initial", "keyframes",
        "media", "none", "supports", "unset",
    ]);

    lang.set_block_comment("/*", "*/");
    lang.set_quotes(&['"', '\'']);
    lang
}
