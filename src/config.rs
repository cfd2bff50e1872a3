//! Configuration file support
//!
//! Loads settings from ~/.codeprint.conf (or %USERPROFILE%\.codeprint.conf on Windows)
//!
//! Format: simple key=value pairs, one per line
//! Lines starting with # are comments
//!
//! Example:
//! ```text
//! # codeprint configuration
//! style = dark
//! max-width = 100
//! tab-width = 4
//! line-numbers = true
//! reflow-comments = true
//! raw-threshold = 1048576
//! presets-dir = /home/me/.codeprint-presets
//! ```

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::render::RenderOptions;
use crate::style::{MAX_WIDTH, MIN_WIDTH};

/// Default size above which files are shown as plain escaped text
pub const DEFAULT_RAW_THRESHOLD: u64 = 1024 * 1024;

/// Configuration settings
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Style spec used when none is given on the command line
    pub style: String,
    /// Page width override, already clamped
    pub max_width: Option<usize>,
    /// Tab stop width used when expanding tabs
    pub tab_width: usize,
    /// Whether to number output lines
    pub line_numbers: bool,
    /// Whether comment blocks are reflowed as prose
    pub reflow_comments: bool,
    /// Files larger than this many bytes skip highlighting
    pub raw_threshold: u64,
    /// Directory of custom preset files
    pub presets_dir: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            style: "default".to_string(),
            max_width: None,
            tab_width: 4,
            line_numbers: false,
            reflow_comments: true,
            raw_threshold: DEFAULT_RAW_THRESHOLD,
            presets_dir: None,
        }
    }
}

impl Config {
    fn home_dir() -> Option<PathBuf> {
        #[cfg(windows)]
        {
            std::env::var("USERPROFILE").ok().map(PathBuf::from)
        }

        #[cfg(not(windows))]
        {
            std::env::var("HOME").ok().map(PathBuf::from)
        }
    }

    /// Get the config file path
    pub fn config_path() -> Option<PathBuf> {
        Self::home_dir().map(|home| home.join(".codeprint.conf"))
    }

    /// Directory holding custom presets (configured or the default)
    pub fn presets_dir(&self) -> Option<PathBuf> {
        self.presets_dir
            .clone()
            .or_else(|| Self::home_dir().map(|home| home.join(".codeprint-presets")))
    }

    /// Load configuration from the default file
    pub fn load() -> Self {
        match Self::config_path() {
            Some(path) => Self::load_from(&path),
            None => Config::default(),
        }
    }

    /// Load configuration from a file, defaults if it cannot be read
    pub fn load_from(path: &Path) -> Self {
        let mut config = Config::default();

        if let Ok(contents) = fs::read_to_string(path) {
            let settings = Self::parse(&contents);
            config.apply(&settings);
            tracing::debug!(path = %path.display(), keys = settings.len(), "loaded config");
        }

        config
    }

    /// Parse config file contents into key-value pairs
    fn parse(contents: &str) -> HashMap<String, String> {
        let mut settings = HashMap::new();

        for line in contents.lines() {
            let line = line.trim();

            // Skip empty lines and comments
            if line.is_empty() || line.starts_with('#') {
                continue;
            }

            // Parse key = value
            if let Some((key, value)) = line.split_once('=') {
                let key = key.trim().to_lowercase();
                let value = value.trim().to_string();
                settings.insert(key, value);
            }
        }

        settings
    }

    /// Apply settings from parsed config
    fn apply(&mut self, settings: &HashMap<String, String>) {
        if let Some(value) = settings.get("style") {
            if !value.is_empty() {
                self.style = value.clone();
            }
        }

        if let Some(value) = settings.get("max-width") {
            if let Ok(n) = value.parse::<usize>() {
                self.max_width = Some(n.clamp(MIN_WIDTH, MAX_WIDTH));
            }
        }

        if let Some(value) = settings.get("tab-width") {
            if let Ok(n) = value.parse::<usize>() {
                self.tab_width = n.clamp(1, 16); // Between 1 and 16
            }
        }

        if let Some(value) = settings.get("line-numbers") {
            self.line_numbers = parse_bool(value);
        }

        if let Some(value) = settings.get("reflow-comments") {
            self.reflow_comments = parse_bool(value);
        }

        if let Some(value) = settings.get("raw-threshold") {
            if let Ok(n) = value.parse::<u64>() {
                self.raw_threshold = n.max(1024); // Minimum 1 KiB
            }
        }

        if let Some(value) = settings.get("presets-dir") {
            if !value.is_empty() {
                self.presets_dir = Some(PathBuf::from(value));
            }
        }
    }

    /// Render options carried by this configuration
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions {
            tab_width: self.tab_width,
            line_numbers: self.line_numbers,
            reflow_comments: self.reflow_comments,
            ..RenderOptions::default()
        }
    }

    /// Save current configuration to the default file
    pub fn save(&self) -> std::io::Result<()> {
        if let Some(path) = Self::config_path() {
            self.save_to(&path)?;
        }
        Ok(())
    }

    /// Save current configuration to a file
    pub fn save_to(&self, path: &Path) -> std::io::Result<()> {
        let mut contents = format!(
            "# codeprint configuration\n\
             # Generated automatically\n\n\
             style = {}\n\
             tab-width = {}\n\
             line-numbers = {}\n\
             reflow-comments = {}\n\
             raw-threshold = {}\n",
            self.style, self.tab_width, self.line_numbers, self.reflow_comments, self.raw_threshold
        );
        if let Some(width) = self.max_width {
            contents.push_str(&format!("max-width = {}\n", width));
        }
        if let Some(dir) = &self.presets_dir {
            contents.push_str(&format!("presets-dir = {}\n", dir.display()));
        }
        fs::write(path, contents)
    }
}

/// Parse a boolean value from string
pub fn parse_bool(s: &str) -> bool {
    parse_bool_opt(s).unwrap_or(false)
}

/// Parse a boolean value, `None` if the word is not a boolean
pub fn parse_bool_opt(s: &str) -> Option<bool> {
    match s.trim().to_lowercase().as_str() {
        "true" | "yes" | "on" | "1" => Some(true),
        "false" | "no" | "off" | "0" => Some(false),
        _ => None,
    }
}
