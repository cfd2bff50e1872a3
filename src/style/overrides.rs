//! Partial style overrides
//!
//! Overrides come from presets, inline JSON, base64 JSON or preset files.
//! They are read leniently: every field is extracted on its own, and a field
//! that is missing, of the wrong type or out of its valid domain is simply
//! not applied.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::config::parse_bool_opt;

use super::profile::{StyleProfile, MAX_FONT_SIZE, MAX_WIDTH, MIN_FONT_SIZE, MIN_WIDTH};

static COLOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:#(?:[0-9a-fA-F]{3,4}|[0-9a-fA-F]{6}|[0-9a-fA-F]{8})|(?:rgba?|hsla?)\([0-9.,%/\s+-]+\)|[a-zA-Z]+)$",
    )
    .expect("valid color regex")
});

/// Font size overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FontSizeOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<f64>,
}

impl FontSizeOverrides {
    pub fn is_empty(&self) -> bool {
        self.comment.is_none() && self.code.is_none()
    }
}

/// Font family overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FontOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
}

impl FontOverrides {
    pub fn is_empty(&self) -> bool {
        self.comment.is_none() && self.code.is_none()
    }
}

/// Weight and slant overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FontStyleOverrides {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment_italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code_italic: Option<bool>,
}

impl FontStyleOverrides {
    pub fn is_empty(&self) -> bool {
        self.comment_bold.is_none()
            && self.comment_italic.is_none()
            && self.code_bold.is_none()
            && self.code_italic.is_none()
    }
}

/// A partial style profile
///
/// Plain values come before nested tables so the TOML form stays valid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StyleOverrides {
    /// Name of the preset these overrides sit on
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_width: Option<f64>,
    /// Colors by lowercase key (token class, `background`, `foreground`)
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub colors: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "FontSizeOverrides::is_empty")]
    pub font_sizes: FontSizeOverrides,
    #[serde(skip_serializing_if = "FontOverrides::is_empty")]
    pub fonts: FontOverrides,
    #[serde(skip_serializing_if = "FontStyleOverrides::is_empty")]
    pub font_styles: FontStyleOverrides,
}

impl StyleOverrides {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides that only select a preset
    pub fn preset(name: &str) -> Self {
        Self {
            preset: Some(name.to_string()),
            ..Self::default()
        }
    }

    pub fn with_preset(mut self, name: &str) -> Self {
        self.preset = Some(name.to_string());
        self
    }

    pub fn with_max_width(mut self, width: f64) -> Self {
        self.max_width = Some(width);
        self
    }

    pub fn with_color(mut self, key: &str, color: &str) -> Self {
        self.colors.insert(key.to_ascii_lowercase(), color.to_string());
        self
    }

    pub fn with_font_sizes(mut self, comment: f64, code: f64) -> Self {
        self.font_sizes = FontSizeOverrides {
            comment: Some(comment),
            code: Some(code),
        };
        self
    }

    pub fn with_fonts(mut self, comment: &str, code: &str) -> Self {
        self.fonts = FontOverrides {
            comment: Some(comment.to_string()),
            code: Some(code.to_string()),
        };
        self
    }

    pub fn with_font_styles(mut self, styles: FontStyleOverrides) -> Self {
        self.font_styles = styles;
        self
    }

    /// True when these overrides change nothing
    pub fn is_empty(&self) -> bool {
        self.preset.is_none()
            && self.max_width.is_none()
            && self.colors.is_empty()
            && self.font_sizes.is_empty()
            && self.fonts.is_empty()
            && self.font_styles.is_empty()
    }

    /// Extract overrides from a JSON value, ignoring anything unusable.
    ///
    /// Keys are accepted in camelCase or snake_case.
    pub fn from_value(value: &Value) -> Self {
        let Some(obj) = value.as_object() else {
            return Self::default();
        };

        let colors = field(obj, &["colors", "colours"])
            .and_then(Value::as_object)
            .map(|colors| {
                colors
                    .iter()
                    .filter_map(|(key, value)| {
                        let color = value.as_str()?;
                        Some((key.to_ascii_lowercase(), color.to_string()))
                    })
                    .collect()
            })
            .unwrap_or_default();

        let sizes = field(obj, &["fontSizes", "font_sizes"]).and_then(Value::as_object);
        let fonts = field(obj, &["fonts"]).and_then(Value::as_object);
        let styles = field(obj, &["fontStyles", "font_styles"]).and_then(Value::as_object);

        Self {
            preset: field(obj, &["preset", "base"])
                .and_then(Value::as_str)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            max_width: field(obj, &["maxWidth", "max_width", "width"]).and_then(number),
            colors,
            font_sizes: FontSizeOverrides {
                comment: sizes.and_then(|m| field(m, &["comment"])).and_then(number),
                code: sizes.and_then(|m| field(m, &["code"])).and_then(number),
            },
            fonts: FontOverrides {
                comment: fonts
                    .and_then(|m| field(m, &["comment"]))
                    .and_then(Value::as_str)
                    .map(str::to_string),
                code: fonts
                    .and_then(|m| field(m, &["code"]))
                    .and_then(Value::as_str)
                    .map(str::to_string),
            },
            font_styles: FontStyleOverrides {
                comment_bold: styles
                    .and_then(|m| field(m, &["commentBold", "comment_bold"]))
                    .and_then(boolean),
                comment_italic: styles
                    .and_then(|m| field(m, &["commentItalic", "comment_italic"]))
                    .and_then(boolean),
                code_bold: styles
                    .and_then(|m| field(m, &["codeBold", "code_bold"]))
                    .and_then(boolean),
                code_italic: styles
                    .and_then(|m| field(m, &["codeItalic", "code_italic"]))
                    .and_then(boolean),
            },
        }
    }

    /// Apply every valid field onto `profile`
    pub(crate) fn apply_to(&self, profile: &mut StyleProfile) {
        if let Some(width) = self.max_width.and_then(valid_width) {
            profile.max_width = width;
        }

        for (key, color) in &self.colors {
            let color = color.trim();
            if !is_valid_color(color) {
                continue;
            }
            if let Some(slot) = profile.colors.slot_mut(key) {
                *slot = color.to_string();
            }
        }

        if let Some(size) = self.font_sizes.comment.and_then(valid_font_size) {
            profile.font_sizes.comment = size;
        }
        if let Some(size) = self.font_sizes.code.and_then(valid_font_size) {
            profile.font_sizes.code = size;
        }

        if let Some(font) = self.fonts.comment.as_deref().and_then(valid_font) {
            profile.fonts.comment = font;
        }
        if let Some(font) = self.fonts.code.as_deref().and_then(valid_font) {
            profile.fonts.code = font;
        }

        let styles = &self.font_styles;
        let target = &mut profile.font_styles;
        target.comment_bold = styles.comment_bold.unwrap_or(target.comment_bold);
        target.comment_italic = styles.comment_italic.unwrap_or(target.comment_italic);
        target.code_bold = styles.code_bold.unwrap_or(target.code_bold);
        target.code_italic = styles.code_italic.unwrap_or(target.code_italic);
    }
}

impl From<&StyleProfile> for StyleOverrides {
    /// Overrides that reproduce `profile` exactly
    fn from(profile: &StyleProfile) -> Self {
        Self {
            preset: None,
            max_width: Some(profile.max_width as f64),
            colors: profile
                .colors
                .entries()
                .into_iter()
                .map(|(key, color)| (key.to_string(), color.to_string()))
                .collect(),
            font_sizes: FontSizeOverrides {
                comment: Some(f64::from(profile.font_sizes.comment)),
                code: Some(f64::from(profile.font_sizes.code)),
            },
            fonts: FontOverrides {
                comment: Some(profile.fonts.comment.clone()),
                code: Some(profile.fonts.code.clone()),
            },
            font_styles: FontStyleOverrides {
                comment_bold: Some(profile.font_styles.comment_bold),
                comment_italic: Some(profile.font_styles.comment_italic),
                code_bold: Some(profile.font_styles.code_bold),
                code_italic: Some(profile.font_styles.code_italic),
            },
        }
    }
}

fn field<'a>(obj: &'a Map<String, Value>, keys: &[&str]) -> Option<&'a Value> {
    keys.iter().find_map(|key| obj.get(*key))
}

fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn boolean(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => parse_bool_opt(s),
        _ => None,
    }
}

/// Round and clamp a width, `None` for non-finite values
pub fn valid_width(width: f64) -> Option<usize> {
    if !width.is_finite() {
        return None;
    }
    let clamped = width.round().clamp(MIN_WIDTH as f64, MAX_WIDTH as f64);
    Some(clamped as usize)
}

/// Round and clamp a font size, `None` for non-finite or non-positive values
pub fn valid_font_size(size: f64) -> Option<u32> {
    if !size.is_finite() || size <= 0.0 {
        return None;
    }
    let clamped = size
        .round()
        .clamp(f64::from(MIN_FONT_SIZE), f64::from(MAX_FONT_SIZE));
    Some(clamped as u32)
}

/// Trimmed font family list, `None` if blank or unsafe to embed in CSS
pub fn valid_font(font: &str) -> Option<String> {
    let font = font.trim();
    if font.is_empty() || font.contains([';', '{', '}', '<', '>']) {
        return None;
    }
    Some(font.to_string())
}

/// Check a CSS color literal (hex, rgb/hsl function or name)
pub fn is_valid_color(color: &str) -> bool {
    COLOR_RE.is_match(color)
}
