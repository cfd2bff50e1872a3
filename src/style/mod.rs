//! Style profiles
//!
//! - Fully resolved profiles and their defaults
//! - Partial overrides and the rules for accepting their values
//! - Named presets, including preset files
//! - Style specs given as names, JSON or base64 JSON

mod overrides;
mod presets;
mod profile;
mod spec;

pub use overrides::{
    is_valid_color, valid_font, valid_font_size, valid_width, FontOverrides, FontSizeOverrides,
    FontStyleOverrides, StyleOverrides,
};
pub use presets::{save_overrides, PresetRegistry};
pub use profile::{
    FontSizes, FontStyles, Fonts, Palette, StyleProfile, MAX_FONT_SIZE, MAX_WIDTH, MIN_FONT_SIZE,
    MIN_WIDTH,
};
pub use spec::{parse_style_spec, resolve_style_profile, StyleSpec};
