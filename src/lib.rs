//! codeprint - render source files as styled, reflowed HTML pages
//!
//! Source lines are highlighted with a small line-oriented lexer, comment
//! blocks are reflowed as prose, decorative border lines are stretched to
//! the page width and over-width code is wrapped. The result is a
//! standalone HTML document whose styles come from a resolved
//! [`StyleProfile`].
//!
//! ```no_run
//! use codeprint::{render, resolve_style_profile, PresetRegistry};
//!
//! let presets = PresetRegistry::with_builtins();
//! let profile = resolve_style_profile("dark", &presets);
//! let doc = render("let x = 1; // one", "javascript", &profile);
//! println!("{}", doc.standalone_html);
//! ```

pub mod config;
pub mod error;
pub mod reflow;
pub mod render;
pub mod style;
pub mod syntax;

pub use config::Config;
pub use error::{CodeprintError, Result};
pub use render::{
    escape_html, render, render_in, render_plain, render_with, RenderOptions, RenderedDocument,
};
pub use style::{parse_style_spec, resolve_style_profile, PresetRegistry, StyleOverrides, StyleProfile, StyleSpec};
pub use syntax::{GrammarTable, LanguageGrammar, TokenClass};
