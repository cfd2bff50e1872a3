//! SQL grammar

use crate::syntax::language::LanguageGrammar;

const SQL_KEYWORDS: &[&str] = &[
    "and", "as", "asc", "begin", "by", "case", "commit", "create", "delete", "desc",
    "distinct", "drop", "else", "end", "exists", "from", "group", "having", "in", "index",
    "inner", "insert", "into", "is", "join", "left", "like", "limit", "not", "null", "on", "or",
    "order", "outer", "primary", "key", "right", "rollback", "select", "set", "table", "then",
    "union", "update", "values", "when", "where", "with",
];

/// Create SQL grammar
///
/// Keywords match in lowercase and uppercase spelling.
pub fn sql_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("sql");
    lang.add_extension("sql");

    let upper: Vec<String> = SQL_KEYWORDS.iter().map(|k| k.to_uppercase()).collect();
    let upper: Vec<&str> = upper.iter().map(String::as_str).collect();
    lang.add_keywords(SQL_KEYWORDS);
    lang.add_keywords(&upper);

    lang.add_line_comment("--");
    lang.set_block_comment("/*", "*/");
    lang.set_quotes(&['\'', '"']);
    lang
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_both_cases() {
        let lang = sql_language();
        assert!(lang.is_keyword("select"));
        assert!(lang.is_keyword("SELECT"));
        assert!(!lang.is_keyword("Select"));
    }
}
