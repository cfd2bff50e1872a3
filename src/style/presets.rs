//! Named style presets
//!
//! A preset is a partial profile registered under a case-insensitive name.
//! Custom presets are loaded from (and saved to) TOML or JSON files whose
//! stem is the preset name.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde_json::Value;

use crate::error::{CodeprintError, Result};

use super::overrides::{FontStyleOverrides, StyleOverrides};
use super::profile::StyleProfile;

/// Registry of named presets
#[derive(Debug, Clone, Default)]
pub struct PresetRegistry {
    presets: HashMap<String, StyleOverrides>,
}

impl PresetRegistry {
    /// Empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding the built-in presets
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        for (name, preset) in builtin_presets() {
            registry.register(name, preset);
        }
        registry
    }

    /// Register a preset, returning the one it replaced
    pub fn register(&mut self, name: &str, mut preset: StyleOverrides) -> Option<StyleOverrides> {
        let name = name.trim().to_lowercase();
        // Presets do not chain
        preset.preset = None;
        tracing::debug!(preset = %name, "registered preset");
        self.presets.insert(name, preset)
    }

    pub fn lookup(&self, name: &str) -> Option<&StyleOverrides> {
        self.presets.get(&name.trim().to_lowercase())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.lookup(name).is_some()
    }

    /// Sorted preset names
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.presets.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Resolve overrides, using their `preset` key as the middle layer
    pub fn resolve(&self, overrides: &StyleOverrides) -> StyleProfile {
        let preset = overrides.preset.as_deref().and_then(|name| {
            let preset = self.lookup(name);
            if preset.is_none() {
                tracing::warn!(preset = %name, "unknown preset, using defaults");
            }
            preset
        });
        StyleProfile::merge(&StyleProfile::default(), preset, overrides)
    }

    /// Resolve a preset by name
    pub fn resolve_name(&self, name: &str) -> Option<StyleProfile> {
        let preset = self.lookup(name)?;
        Some(StyleProfile::merge(
            &StyleProfile::default(),
            Some(preset),
            &StyleOverrides::default(),
        ))
    }

    /// Load one preset file and register it under its file stem
    pub fn load_file(&mut self, path: &Path) -> Result<String> {
        let name = path
            .file_stem()
            .and_then(|stem| stem.to_str())
            .map(str::to_lowercase)
            .filter(|stem| !stem.is_empty())
            .ok_or_else(|| CodeprintError::InvalidPreset {
                path: path.to_path_buf(),
                reason: "file name is not a valid preset name".to_string(),
            })?;

        let value = read_preset_value(path)?;
        if !value.is_object() {
            return Err(CodeprintError::InvalidPreset {
                path: path.to_path_buf(),
                reason: "expected a table of style fields".to_string(),
            });
        }

        tracing::debug!(path = %path.display(), preset = %name, "loaded preset file");
        self.register(&name, StyleOverrides::from_value(&value));
        Ok(name)
    }

    /// Load every `.toml` and `.json` file in a directory.
    ///
    /// Returns the names loaded, sorted. A missing directory loads nothing.
    pub fn load_dir(&mut self, dir: &Path) -> Result<Vec<String>> {
        if !dir.is_dir() {
            return Ok(Vec::new());
        }

        let mut paths = Vec::new();
        for entry in fs::read_dir(dir)? {
            let path = entry?.path();
            if path.is_file() && preset_format(&path).is_some() {
                paths.push(path);
            }
        }
        paths.sort();

        let mut names = Vec::with_capacity(paths.len());
        for path in paths {
            names.push(self.load_file(&path)?);
        }
        Ok(names)
    }

    /// Write a registered preset to `path` (format from the extension)
    pub fn save_file(&self, name: &str, path: &Path) -> Result<()> {
        let preset = self
            .lookup(name)
            .ok_or_else(|| CodeprintError::UnknownStyle(name.to_string()))?;
        save_overrides(preset, path)
    }
}

/// Write overrides to a TOML or JSON preset file
pub fn save_overrides(overrides: &StyleOverrides, path: &Path) -> Result<()> {
    let contents = match preset_format(path) {
        Some(PresetFormat::Toml) => toml::to_string_pretty(overrides)?,
        Some(PresetFormat::Json) => serde_json::to_string_pretty(overrides)? + "\n",
        None => return Err(CodeprintError::UnsupportedPresetFormat(path.to_path_buf())),
    };
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    tracing::debug!(path = %path.display(), "saved preset file");
    Ok(())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PresetFormat {
    Toml,
    Json,
}

fn preset_format(path: &Path) -> Option<PresetFormat> {
    let ext = path.extension()?.to_str()?.to_ascii_lowercase();
    match ext.as_str() {
        "toml" => Some(PresetFormat::Toml),
        "json" => Some(PresetFormat::Json),
        _ => None,
    }
}

fn read_preset_value(path: &Path) -> Result<Value> {
    let format = preset_format(path)
        .ok_or_else(|| CodeprintError::UnsupportedPresetFormat(path.to_path_buf()))?;
    let contents = fs::read_to_string(path)?;
    let value = match format {
        PresetFormat::Toml => {
            let table: toml::Value = toml::from_str(&contents)?;
            serde_json::to_value(table)?
        }
        PresetFormat::Json => serde_json::from_str(&contents)?,
    };
    Ok(value)
}

fn builtin_presets() -> Vec<(&'static str, StyleOverrides)> {
    vec![
        ("default", StyleOverrides::new()),
        (
            "dark",
            StyleOverrides::new()
                .with_color("background", "#1e1e1e")
                .with_color("foreground", "#d4d4d4")
                .with_color("comment", "#6a9955")
                .with_color("keyword", "#569cd6")
                .with_color("string", "#ce9178")
                .with_color("number", "#b5cea8")
                .with_color("function", "#dcdcaa")
                .with_color("type", "#4ec9b0")
                .with_color("variable", "#9cdcfe")
                .with_color("operator", "#d4d4d4"),
        ),
        (
            "light",
            StyleOverrides::new()
                .with_color("background", "#fdf6e3")
                .with_color("foreground", "#657b83")
                .with_color("comment", "#93a1a1")
                .with_color("keyword", "#859900")
                .with_color("string", "#2aa198")
                .with_color("number", "#d33682")
                .with_color("function", "#268bd2")
                .with_color("type", "#b58900")
                .with_color("variable", "#657b83")
                .with_color("operator", "#586e75"),
        ),
        (
            "print",
            StyleOverrides::new()
                .with_color("background", "#ffffff")
                .with_color("foreground", "#000000")
                .with_color("comment", "#000000")
                .with_color("keyword", "#000000")
                .with_color("string", "#000000")
                .with_color("number", "#000000")
                .with_color("function", "#000000")
                .with_color("type", "#000000")
                .with_color("variable", "#000000")
                .with_color("operator", "#000000")
                .with_font_styles(FontStyleOverrides {
                    comment_italic: Some(true),
                    code_bold: Some(false),
                    ..FontStyleOverrides::default()
                }),
        ),
        (
            "compact",
            StyleOverrides::new()
                .with_max_width(100.0)
                .with_font_sizes(11.0, 11.0),
        ),
        ("large", StyleOverrides::new().with_font_sizes(18.0, 16.0)),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_builtin_names() {
        let registry = PresetRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec!["compact", "dark", "default", "large", "light", "print"]
        );
    }

    #[test]
    fn test_lookup_case_insensitive() {
        let registry = PresetRegistry::with_builtins();
        assert!(registry.contains("DARK"));
        assert!(registry.contains(" Dark "));
        assert!(!registry.contains("neon"));
    }

    #[test]
    fn test_register_returns_previous() {
        let mut registry = PresetRegistry::new();
        let first = StyleOverrides::new().with_max_width(60.0);
        assert_eq!(registry.register("Mine", first.clone()), None);
        let replaced = registry.register("mine", StyleOverrides::new().with_max_width(70.0));
        assert_eq!(replaced, Some(first));
        assert_eq!(registry.resolve_name("MINE").map(|p| p.max_width), Some(70));
    }

    #[test]
    fn test_resolve_uses_preset_layer() {
        let registry = PresetRegistry::with_builtins();
        let overrides = StyleOverrides::new()
            .with_preset("compact")
            .with_font_sizes(14.0, 14.0);
        let profile = registry.resolve(&overrides);
        assert_eq!(profile.max_width, 100);
        assert_eq!(profile.font_sizes.code, 14);
    }

    #[test]
    fn test_resolve_unknown_preset_uses_defaults() {
        let registry = PresetRegistry::with_builtins();
        let profile = registry.resolve(&StyleOverrides::new().with_preset("neon"));
        assert_eq!(profile, StyleProfile::default());
    }

    #[test]
    fn test_presets_do_not_chain() {
        let mut registry = PresetRegistry::with_builtins();
        registry.register("wide", StyleOverrides::new().with_preset("compact"));
        let profile = registry.resolve_name("wide").unwrap();
        assert_eq!(profile, StyleProfile::default());
    }

    #[test]
    fn test_load_toml_and_json() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(
            dir.path().join("Ocean.toml"),
            "max_width = 90\n\n[colors]\nkeyword = \"#0077be\"\n\n[fontStyles]\ncodeBold = true\n",
        )
        .unwrap();
        fs::write(
            dir.path().join("paper.json"),
            r#"{"fonts": {"code": "Courier New, monospace"}}"#,
        )
        .unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut registry = PresetRegistry::new();
        let names = registry.load_dir(dir.path()).unwrap();
        assert_eq!(names, vec!["ocean".to_string(), "paper".to_string()]);

        let ocean = registry.resolve_name("ocean").unwrap();
        assert_eq!(ocean.max_width, 90);
        assert_eq!(ocean.colors.keyword, "#0077be");
        assert!(ocean.font_styles.code_bold);

        let paper = registry.resolve_name("paper").unwrap();
        assert_eq!(paper.fonts.code, "Courier New, monospace");
    }

    #[test]
    fn test_load_invalid_files() {
        let dir = tempfile::tempdir().unwrap();
        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").unwrap();
        let list = dir.path().join("list.json");
        fs::write(&list, "[1, 2]").unwrap();
        let yaml = dir.path().join("style.yaml");
        fs::write(&yaml, "a: b").unwrap();

        let mut registry = PresetRegistry::new();
        assert!(matches!(registry.load_file(&broken), Err(CodeprintError::Json(_))));
        assert!(matches!(
            registry.load_file(&list),
            Err(CodeprintError::InvalidPreset { .. })
        ));
        assert!(matches!(
            registry.load_file(&yaml),
            Err(CodeprintError::UnsupportedPresetFormat(_))
        ));
        assert!(registry.names().is_empty());
    }

    #[test]
    fn test_missing_dir_loads_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let mut registry = PresetRegistry::new();
        assert!(registry.load_dir(&dir.path().join("absent")).unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PresetRegistry::with_builtins();

        for file in ["dark.toml", "dark.json"] {
            let path = dir.path().join("out").join(file);
            registry.save_file("dark", &path).unwrap();

            let mut reloaded = PresetRegistry::new();
            assert_eq!(reloaded.load_file(&path).unwrap(), "dark");
            assert_eq!(reloaded.resolve_name("dark"), registry.resolve_name("dark"));
        }
    }

    #[test]
    fn test_save_full_profile_as_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("snapshot.toml");
        let profile = PresetRegistry::with_builtins().resolve_name("large").unwrap();

        save_overrides(&StyleOverrides::from(&profile), &path).unwrap();

        let mut registry = PresetRegistry::new();
        registry.load_file(&path).unwrap();
        assert_eq!(registry.resolve_name("snapshot"), Some(profile));
    }

    #[test]
    fn test_save_unknown_or_unsupported() {
        let dir = tempfile::tempdir().unwrap();
        let registry = PresetRegistry::with_builtins();
        assert!(matches!(
            registry.save_file("neon", &dir.path().join("neon.toml")),
            Err(CodeprintError::UnknownStyle(_))
        ));
        assert!(matches!(
            registry.save_file("dark", &dir.path().join("dark.ini")),
            Err(CodeprintError::UnsupportedPresetFormat(_))
        ));
    }
}
