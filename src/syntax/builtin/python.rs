//! Python grammar

use crate::syntax::language::LanguageGrammar;

/// Create Python grammar
pub fn python_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("python");
    lang.add_extension("py");
    lang.add_extension("pyw");
    lang.add_extension("pyi");
    lang.add_alias("py");

    lang.add_keywords(&[
        "False", "None", "True", "and", "as", "assert", "async", "await", "break", "class",
        "continue", "def", "del", "elif", "else", "except", "finally", "for", "from", "global",
        "if", "import", "in", "is", "lambda", "nonlocal", "not", "or", "pass", "raise",
        "return", "try", "while", "with", "yield",
    ]);

    lang.add_line_comment("#");
    lang.set_quotes(&['"', '\'']);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{highlight_line, ScanState, TokenClass};

    #[test]
    fn test_python_constants_are_keywords() {
        let lang = python_language();
        let result = highlight_line("x = None", &lang, ScanState::default());
        assert_eq!(result.spans.last().map(|s| s.class), Some(TokenClass::Keyword));
    }

    #[test]
    fn test_hash_inside_string() {
        let lang = python_language();
        let result = highlight_line("s = '#not comment'  # comment", &lang, ScanState::default());
        let classes: Vec<_> = result
            .spans
            .iter()
            .filter(|s| s.class != TokenClass::Plain)
            .map(|s| s.class)
            .collect();
        assert_eq!(
            classes,
            vec![
                TokenClass::Variable,
                TokenClass::Operator,
                TokenClass::String,
                TokenClass::Comment,
            ]
        );
    }
}
