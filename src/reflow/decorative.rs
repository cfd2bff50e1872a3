//! Decorative border lines
//!
//! A decorative line is three or more repetitions of a single border
//! character, optionally indented. Such lines are stretched (or shrunk) to
//! the page width instead of being wrapped.

use super::width::{leading_whitespace, text_width};

/// Characters that may form a border
pub const BORDER_CHARS: [char; 6] = ['=', '-', '*', '_', '#', '~'];

/// Shortest run of a border character that makes a line decorative
pub const MIN_BORDER_RUN: usize = 3;

/// Border character of a decorative line, `None` if the line is not one
pub fn decorative_char(text: &str) -> Option<char> {
    let body = text.trim();
    let mut chars = body.chars();
    let first = chars.next().filter(|c| BORDER_CHARS.contains(c))?;
    let mut count = 1;
    for ch in chars {
        if ch != first {
            return None;
        }
        count += 1;
    }
    (count >= MIN_BORDER_RUN).then_some(first)
}

/// Rewrite a decorative line to fill `width` columns.
///
/// Keeps the original indentation and repeats the border character over the
/// remaining columns. The run never gets shorter than [`MIN_BORDER_RUN`], so
/// the result is itself decorative even when the indentation leaves no room.
/// Returns `None` when the line is not decorative.
pub fn normalize_decorative(text: &str, width: usize) -> Option<String> {
    let ch = decorative_char(text)?;
    let indent = leading_whitespace(text);
    let fill = width
        .saturating_sub(text_width(indent))
        .max(MIN_BORDER_RUN);

    let mut out = String::with_capacity(indent.len() + fill);
    out.push_str(indent);
    out.extend(std::iter::repeat(ch).take(fill));
    Some(out)
}
