//! JavaScript and TypeScript grammars

use crate::syntax::language::LanguageGrammar;

const JS_KEYWORDS: &[&str] = &[
    "async", "await", "break", "case", "catch", "class", "const", "continue", "debugger",
    "default", "delete", "do", "else", "export", "extends", "false", "finally", "for", "from",
    "function", "get", "if", "import", "in", "instanceof", "let", "new", "null", "of", "return",
    "set", "static", "super", "switch", "this", "throw", "true", "try", "typeof", "undefined",
    "var", "void", "while", "with", "yield",
];

const TS_KEYWORDS: &[&str] = &[
    "abstract", "any", "as", "boolean", "declare", "enum", "implements", "interface", "is",
    "keyof", "module", "namespace", "never", "number", "private", "protected", "public",
    "readonly", "string", "symbol", "type", "unknown",
];

fn c_style(grammar: &mut LanguageGrammar) {
    grammar.add_line_comment("//");
    grammar.set_block_comment("/*", "*/");
    grammar.set_quotes(&['"', '\'', '`']);
}

/// Create JavaScript grammar
pub fn javascript_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("javascript");
    for ext in ["js", "mjs", "cjs", "jsx"] {
        lang.add_extension(ext);
    }
    lang.add_alias("js");
    lang.add_alias("node");
    lang.add_keywords(JS_KEYWORDS);
    c_style(&mut lang);
    lang
}

/// Create TypeScript grammar (JavaScript plus type-level keywords)
pub fn typescript_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("typescript");
    for ext in ["ts", "mts", "cts", "tsx"] {
        lang.add_extension(ext);
    }
    lang.add_alias("ts");
    lang.add_keywords(JS_KEYWORDS);
    lang.add_keywords(TS_KEYWORDS);
    c_style(&mut lang);
    lang
}
