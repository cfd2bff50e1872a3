//! Column measurement helpers
//!
//! Widths are display columns: wide characters count two, characters
//! without a defined width (controls, tabs) count one.

use unicode_width::UnicodeWidthChar;

/// Display width of a single character
pub fn char_width(ch: char) -> usize {
    UnicodeWidthChar::width(ch).unwrap_or(1)
}

/// Display width of a string
pub fn text_width(text: &str) -> usize {
    text.chars().map(char_width).sum()
}

/// Leading whitespace of a line
pub fn leading_whitespace(text: &str) -> &str {
    let end = text
        .char_indices()
        .find(|&(_, c)| !c.is_whitespace())
        .map_or(text.len(), |(idx, _)| idx);
    &text[..end]
}

/// Replace tabs with spaces up to the next multiple of `tab_width`
pub fn expand_tabs(text: &str, tab_width: usize) -> String {
    if !text.contains('\t') {
        return text.to_string();
    }
    let tab_width = tab_width.max(1);
    let mut out = String::with_capacity(text.len() + tab_width * 2);
    let mut col = 0;
    for ch in text.chars() {
        if ch == '\t' {
            let pad = tab_width - col % tab_width;
            out.extend(std::iter::repeat(' ').take(pad));
            col += pad;
        } else {
            out.push(ch);
            col += char_width(ch);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width() {
        assert_eq!(text_width(""), 0);
        assert_eq!(text_width("abc"), 3);
        assert_eq!(text_width("日本"), 4);
        assert_eq!(text_width("a\tb"), 3);
    }

    #[test]
    fn test_leading_whitespace() {
        assert_eq!(leading_whitespace("    x = 1"), "    ");
        assert_eq!(leading_whitespace("x"), "");
        assert_eq!(leading_whitespace("   "), "   ");
    }

    #[test]
    fn test_expand_tabs() {
        assert_eq!(expand_tabs("\tx", 4), "    x");
        assert_eq!(expand_tabs("ab\tc", 4), "ab  c");
        assert_eq!(expand_tabs("abcd\te", 4), "abcd    e");
        assert_eq!(expand_tabs("no tabs", 4), "no tabs");
        assert_eq!(expand_tabs("\t", 0), " ");
    }
}
