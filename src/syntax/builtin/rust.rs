//! Rust grammar

use crate::syntax::language::LanguageGrammar;

/// Create Rust grammar
pub fn rust_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("rust");
    lang.add_extension("rs");
    lang.add_alias("rs");

    lang.add_keywords(&[
        "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
        "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
        "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait",
        "true", "type", "unsafe", "use", "where", "while",
    ]);

    lang.add_line_comment("//");
    lang.set_block_comment("/*", "*/");
    // `'` is left out so lifetimes do not open strings
    lang.set_quotes(&['"']);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{highlight_line, ScanState, TokenClass};

    #[test]
    fn test_rust_keywords() {
        let lang = rust_language();
        let result = highlight_line("let mut x = 5;", &lang, ScanState::default());
        let keywords: Vec<_> = result
            .spans
            .iter()
            .filter(|s| s.class == TokenClass::Keyword)
            .map(|s| s.text.as_str())
            .collect();
        assert_eq!(keywords, vec!["let", "mut"]);
    }

    #[test]
    fn test_rust_lifetime_not_string() {
        let lang = rust_language();
        let result = highlight_line("fn f<'a>(x: &'a str) {}", &lang, ScanState::default());
        assert!(result.spans.iter().all(|s| s.class != TokenClass::String));
    }

    #[test]
    fn test_rust_comment() {
        let lang = rust_language();
        let result = highlight_line("// this is a comment", &lang, ScanState::default());

        // Entire line should be comment
        assert_eq!(result.spans.len(), 1);
        assert_eq!(result.spans[0].class, TokenClass::Comment);
    }

    #[test]
    fn test_rust_self_type_is_keyword() {
        let lang = rust_language();
        let result = highlight_line("Self::new()", &lang, ScanState::default());
        assert_eq!(result.spans[0].class, TokenClass::Keyword);
    }
}
