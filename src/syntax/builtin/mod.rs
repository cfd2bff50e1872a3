//! Built-in language grammars
//!
//! This module provides grammars for common programming languages and the
//! plain-text fallback used for unknown ids.

mod c;
mod css;
mod go;
mod html;
mod javascript;
mod python;
mod rust;
mod shell;
mod sql;
mod text;
mod toml_lang;

use super::language::LanguageGrammar;

pub use text::text_language;

/// Get all built-in grammars (without the fallback)
pub fn all_languages() -> Vec<LanguageGrammar> {
    vec![
        javascript::javascript_language(),
        javascript::typescript_language(),
        rust::rust_language(),
        c::c_language(),
        python::python_language(),
        go::go_language(),
        shell::shell_language(),
        css::css_language(),
        html::html_language(),
        sql::sql_language(),
        toml_lang::toml_language(),
    ]
}
