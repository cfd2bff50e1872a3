//! Width-bounded reflow: border lines, code wrapping and comment prose

pub mod decorative;
pub mod paragraph;
pub mod width;
pub mod wrap;

pub use decorative::{decorative_char, normalize_decorative};
pub use paragraph::reflow_comment_group;
pub use width::{expand_tabs, text_width};
pub use wrap::{wrap_highlighted, wrap_line, wrap_ranges, Fragment};
