//! Style specs: a preset name, inline JSON, or base64-encoded JSON

use base64::engine::general_purpose::STANDARD_NO_PAD;
use base64::Engine;
use serde_json::Value;

use crate::error::{CodeprintError, Result};

use super::overrides::StyleOverrides;
use super::presets::PresetRegistry;
use super::profile::StyleProfile;

/// Shortest input treated as base64
const MIN_BASE64_LEN: usize = 17;

/// A parsed style spec
#[derive(Debug, Clone, PartialEq)]
pub enum StyleSpec {
    /// A registered preset
    Preset(String),
    /// Overrides given inline (possibly naming a base preset)
    Inline(StyleOverrides),
}

impl StyleSpec {
    /// Parse a style spec strictly.
    ///
    /// An empty spec is the `default` preset. Malformed JSON or base64 and
    /// unknown names are errors.
    pub fn parse(input: &str, registry: &PresetRegistry) -> Result<Self> {
        let input = input.trim();
        if input.is_empty() {
            return Ok(StyleSpec::Preset("default".to_string()));
        }

        if input.starts_with('{') {
            return Self::from_json(input.as_bytes());
        }

        if registry.contains(input) {
            return Ok(StyleSpec::Preset(input.to_lowercase()));
        }

        if looks_like_base64(input) {
            let decoded = STANDARD_NO_PAD.decode(input.trim_end_matches('='))?;
            return Self::from_json(&decoded);
        }

        Err(CodeprintError::UnknownStyle(input.to_string()))
    }

    fn from_json(bytes: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(bytes)?;
        if !value.is_object() {
            return Err(CodeprintError::Message(
                "style overrides must be a JSON object".to_string(),
            ));
        }
        Ok(StyleSpec::Inline(StyleOverrides::from_value(&value)))
    }

    /// The overrides this spec stands for
    pub fn into_overrides(self) -> StyleOverrides {
        match self {
            StyleSpec::Preset(name) => StyleOverrides::preset(&name),
            StyleSpec::Inline(overrides) => overrides,
        }
    }

    /// Resolve strictly: any preset named must be registered
    pub fn resolve(&self, registry: &PresetRegistry) -> Result<StyleProfile> {
        let preset = match self {
            StyleSpec::Preset(name) => Some(name.as_str()),
            StyleSpec::Inline(overrides) => overrides.preset.as_deref(),
        };
        if let Some(name) = preset {
            if !registry.contains(name) {
                return Err(CodeprintError::UnknownStyle(name.to_string()));
            }
        }
        match self {
            StyleSpec::Preset(name) => registry
                .resolve_name(name)
                .ok_or_else(|| CodeprintError::UnknownStyle(name.clone())),
            StyleSpec::Inline(overrides) => Ok(registry.resolve(overrides)),
        }
    }
}

/// Parse a style spec into overrides
pub fn parse_style_spec(input: &str, registry: &PresetRegistry) -> Result<StyleOverrides> {
    StyleSpec::parse(input, registry).map(StyleSpec::into_overrides)
}

/// Resolve a style spec, falling back to the default profile on any problem
pub fn resolve_style_profile(input: &str, registry: &PresetRegistry) -> StyleProfile {
    match StyleSpec::parse(input, registry).and_then(|spec| spec.resolve(registry)) {
        Ok(profile) => profile,
        Err(err) => {
            tracing::warn!(error = %err, "unusable style, using defaults");
            StyleProfile::default()
        }
    }
}

fn looks_like_base64(input: &str) -> bool {
    input.len() >= MIN_BASE64_LEN
        && input
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'+' | b'/' | b'='))
}
