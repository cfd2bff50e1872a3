//! Fully resolved style profiles
//!
//! A [`StyleProfile`] always has every field set. Profiles are only ever
//! produced by merging override layers on top of a complete base, so there
//! is no way to end up with a half-filled one.

use crate::syntax::TokenClass;

use super::overrides::StyleOverrides;

/// Narrowest page width
pub const MIN_WIDTH: usize = 40;
/// Widest page width
pub const MAX_WIDTH: usize = 200;
/// Smallest font size in pixels
pub const MIN_FONT_SIZE: u32 = 6;
/// Largest font size in pixels
pub const MAX_FONT_SIZE: u32 = 72;

/// Colors per token class, plus page colors
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    pub comment: String,
    pub keyword: String,
    pub string: String,
    pub number: String,
    pub function: String,
    pub type_name: String,
    pub variable: String,
    pub operator: String,
    /// Page background
    pub background: String,
    /// Unclassified text
    pub foreground: String,
}

impl Palette {
    /// Color used for a token class
    pub fn get(&self, class: TokenClass) -> &str {
        match class {
            TokenClass::Comment => &self.comment,
            TokenClass::Keyword => &self.keyword,
            TokenClass::String => &self.string,
            TokenClass::Number => &self.number,
            TokenClass::Function => &self.function,
            TokenClass::Type => &self.type_name,
            TokenClass::Variable => &self.variable,
            TokenClass::Operator => &self.operator,
            TokenClass::Plain => &self.foreground,
        }
    }

    /// Mutable slot for an override key (class name, `background` or `foreground`)
    pub(crate) fn slot_mut(&mut self, key: &str) -> Option<&mut String> {
        match key {
            "background" => Some(&mut self.background),
            "foreground" | "text" => Some(&mut self.foreground),
            _ => match TokenClass::from_name(key)? {
                TokenClass::Comment => Some(&mut self.comment),
                TokenClass::Keyword => Some(&mut self.keyword),
                TokenClass::String => Some(&mut self.string),
                TokenClass::Number => Some(&mut self.number),
                TokenClass::Function => Some(&mut self.function),
                TokenClass::Type => Some(&mut self.type_name),
                TokenClass::Variable => Some(&mut self.variable),
                TokenClass::Operator => Some(&mut self.operator),
                TokenClass::Plain => Some(&mut self.foreground),
            },
        }
    }

    /// All override keys with their colors
    pub fn entries(&self) -> Vec<(&'static str, &str)> {
        let mut entries: Vec<(&'static str, &str)> = TokenClass::STYLED
            .iter()
            .map(|class| (class.name(), self.get(*class)))
            .collect();
        entries.push(("background", &self.background));
        entries.push(("foreground", &self.foreground));
        entries
    }
}

/// Font sizes in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontSizes {
    pub comment: u32,
    pub code: u32,
}

/// Font family lists (CSS syntax)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fonts {
    pub comment: String,
    pub code: String,
}

/// Weight and slant flags
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontStyles {
    pub comment_bold: bool,
    pub comment_italic: bool,
    pub code_bold: bool,
    pub code_italic: bool,
}

/// Complete set of rendering styles
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleProfile {
    /// Page width in columns
    pub max_width: usize,
    pub colors: Palette,
    pub font_sizes: FontSizes,
    pub fonts: Fonts,
    pub font_styles: FontStyles,
}

impl Default for StyleProfile {
    fn default() -> Self {
        Self {
            max_width: 80,
            colors: Palette {
                comment: "#6a737d".to_string(),
                keyword: "#d73a49".to_string(),
                string: "#032f62".to_string(),
                number: "#005cc5".to_string(),
                function: "#6f42c1".to_string(),
                type_name: "#e36209".to_string(),
                variable: "#24292e".to_string(),
                operator: "#24292e".to_string(),
                background: "#ffffff".to_string(),
                foreground: "#24292e".to_string(),
            },
            font_sizes: FontSizes {
                comment: 13,
                code: 13,
            },
            fonts: Fonts {
                comment: "Georgia, 'Times New Roman', serif".to_string(),
                code: "Menlo, Consolas, 'DejaVu Sans Mono', monospace".to_string(),
            },
            font_styles: FontStyles {
                comment_bold: false,
                comment_italic: true,
                code_bold: false,
                code_italic: false,
            },
        }
    }
}

impl StyleProfile {
    /// Resolve overrides on top of the built-in defaults
    pub fn resolve(overrides: &StyleOverrides) -> Self {
        Self::merge(&Self::default(), None, overrides)
    }

    /// Three-way merge: `base` ← `preset` ← `overrides`.
    ///
    /// Every field is taken from the highest layer that sets it to a valid
    /// value. Invalid values are skipped, never reported.
    pub fn merge(base: &StyleProfile, preset: Option<&StyleOverrides>, overrides: &StyleOverrides) -> Self {
        let mut profile = base.clone();
        if let Some(preset) = preset {
            preset.apply_to(&mut profile);
        }
        overrides.apply_to(&mut profile);
        profile
    }

    /// Derive a new profile with `overrides` applied on top of this one
    pub fn with_overrides(&self, overrides: &StyleOverrides) -> Self {
        Self::merge(self, None, overrides)
    }
}
