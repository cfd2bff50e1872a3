//! HTML/XML grammar

use crate::syntax::language::LanguageGrammar;

/// Create HTML grammar (also used for XML and SVG)
pub fn html_language() -> LanguageGrammar {
    let mut lang = LanguageGrammar::new("html");
    for ext in ["html", "htm", "xhtml", "xml", "svg"] {
        lang.add_extension(ext);
    }
    lang.add_alias("xml");

    lang.add_keywords(&[
        "a", "body", "button", "div", "form", "head", "html", "img", "input", "li", "link",
        "meta", "ol", "p", "script", "span", "style", "table", "td", "th", "title", "tr", "ul",
    ]);

    lang.set_block_comment("<!--", "-->");
    lang.set_quotes(&['"', '\'']);
    lang
}
