//! POSIX shell grammar (also bash and zsh)

use crate::syntax::language::LanguageGrammar;

/// Create shell grammar
pub fn shell_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("shell");
    for ext in ["sh", "bash", "zsh"] {
        lang.add_extension(ext);
    }
    lang.add_alias("sh");
    lang.add_alias("bash");
    lang.add_alias("zsh");

    lang.add_keywords(&[
        "case", "declare", "do", "done", "elif", "else", "esac", "exit", "export", "fi", "for",
        "function", "if", "in", "local", "readonly", "return", "select", "shift", "source",
        "then", "time", "until", "unset", "while",
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
    fn test_variable_expansion() {
        let lang = shell_language();
        let result = highlight_line("echo $HOME", &lang, ScanState::default());
        let texts: Vec<_> = result
            .spans
            .iter()
            .map(|s| (s.class, s.text.as_str()))
            .collect();
        assert_eq!(
            texts,
            vec![
                (TokenClass::Variable, "echo"),
                (TokenClass::Plain, " "),
                (TokenClass::Operator, "$"),
                (TokenClass::Type, "HOME"),
            ]
        );
    }
}
