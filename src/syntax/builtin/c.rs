//! C/C++ grammar

use crate::syntax::language::LanguageGrammar;

/// Create C grammar (also works for C++)
pub fn c_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("c");
    for ext in ["c", "h", "cpp", "hpp", "cc", "cxx"] {
        lang.add_extension(ext);
    }
    lang.add_alias("cpp");
    lang.add_alias("c++");

    // C keywords
    lang.add_keywords(&[
        "auto", "break", "case", "char", "const", "continue", "default", "do", "double", "else",
        "enum", "extern", "float", "for", "goto", "if", "inline", "int", "long", "register",
        "restrict", "return", "short", "signed", "sizeof", "static", "struct", "switch",
        "typedef", "union", "unsigned", "void", "volatile", "while",
    ]);

    // C++ keywords
    lang.add_keywords(&[
        "bool", "catch", "class", "constexpr", "delete", "explicit", "false", "friend",
        "mutable", "namespace", "new", "noexcept", "nullptr", "operator", "private",
        "protected", "public", "template", "this", "throw", "true", "try", "typename", "using",
        "virtual",
    ]);

    lang.add_line_comment("//");
    lang.set_block_comment("/*", "*/");
    lang.set_quotes(&['"', '\'']);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{highlight_line, ScanState, TokenClass};

    #[test]
    fn test_c_preprocessor_is_operator_then_word() {
        let lang = c_language();
        let result = highlight_line("#include <stdio.h>", &lang, ScanState::default());
        assert_eq!(result.spans[0].class, TokenClass::Operator);
        assert_eq!(result.spans[1].class, TokenClass::Variable);
    }

    #[test]
    fn test_c_block_comment_opens() {
        let lang = c_language();
        let result = highlight_line("int x; /* trailing", &lang, ScanState::default());
        assert!(result.end_state.in_block_comment);
    }
}
