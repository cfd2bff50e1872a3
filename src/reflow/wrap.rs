//! Greedy line wrapping
//!
//! A line wider than the page is cut at the last break character found in
//! the 30 columns before the width limit, never inside its indentation. When
//! the window holds no break character the line is cut exactly at the
//! limit. The first output line keeps the original indentation and
//! continuation lines repeat it while it leaves room for a full break window.

use std::ops::Range;

use crate::syntax::{Lexer, Line, ScanState, Span, TokenClass};

use super::width::{char_width, leading_whitespace, text_width};

/// Characters a line may be broken after
pub const BREAK_CHARS: [char; 12] = [' ', ',', ';', '.', '(', ')', '{', '}', '[', ']', '<', '>'];

/// Columns searched backwards from the width limit for a break character
pub const BREAK_WINDOW: usize = 30;

/// One output line of a wrapped input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragment<'a> {
    /// Indentation to print before the text (empty on the first fragment)
    pub indent: &'a str,
    /// Byte range of the input line shown on this output line
    pub range: Range<usize>,
}

/// Compute the fragments of `text` wrapped at `width` columns.
///
/// Always returns at least one fragment. A line that already fits, or holds
/// nothing but whitespace, comes back as a single fragment covering the
/// whole line. Indentation is only dropped from the first fragment when it
/// alone fills the page.
pub fn wrap_ranges(text: &str, width: usize) -> Vec<Fragment<'_>> {
    let lead = leading_whitespace(text);
    if width == 0 || lead.len() == text.len() || text_width(text) <= width {
        return vec![Fragment {
            indent: "",
            range: 0..text.len(),
        }];
    }

    let lead_width = text_width(lead);
    let mut start = if lead_width >= width { lead.len() } else { 0 };
    let indent = if lead_width + BREAK_WINDOW <= width { lead } else { "" };
    let indent_width = text_width(indent);

    let mut fragments = Vec::new();
    let mut first = true;

    while start < text.len() {
        let rest = &text[start..];
        let prefix_width = if first { 0 } else { indent_width };
        // Never break inside the indentation
        let min_col = if first && start == 0 { lead_width } else { prefix_width };

        if prefix_width + text_width(rest) <= width {
            fragments.push(fragment(text, indent, first, start..text.len()));
            break;
        }

        let mut col = prefix_width;
        let mut fit_end = start;
        let mut best_break = None;
        for (idx, ch) in rest.char_indices() {
            let w = char_width(ch);
            if col + w > width {
                break;
            }
            let char_col = col;
            col += w;
            fit_end = start + idx + ch.len_utf8();
            if char_col >= min_col && char_col + BREAK_WINDOW >= width && BREAK_CHARS.contains(&ch) {
                best_break = Some(fit_end);
            }
        }

        let end = match best_break {
            Some(end) => end,
            None if fit_end > start => fit_end,
            // A single character wider than the page still has to go somewhere
            None => start + rest.chars().next().map_or(rest.len(), char::len_utf8),
        };

        fragments.push(fragment(text, indent, first, start..end));
        start = end + leading_whitespace(&text[end..]).len();
        first = false;
    }

    fragments
}

fn fragment<'a>(text: &str, indent: &'a str, first: bool, range: Range<usize>) -> Fragment<'a> {
    let trimmed = text[range.clone()].trim_end().len();
    Fragment {
        indent: if first { "" } else { indent },
        range: range.start..range.start + trimmed,
    }
}

/// Wrap plain text at `width` columns
pub fn wrap_line(text: &str, width: usize) -> Vec<String> {
    wrap_ranges(text, width)
        .into_iter()
        .map(|f| format!("{}{}", f.indent, &text[f.range]))
        .collect()
}

/// Wrap a highlighted line at `width` columns.
///
/// Each output line is highlighted again from a clean state, except text
/// that belonged to a comment span, which stays a comment. A line that fits
/// is returned unchanged.
pub fn wrap_highlighted(line: &Line, width: usize, lexer: &Lexer<'_>) -> Vec<Line> {
    let text = line.text();
    let fragments = wrap_ranges(&text, width);
    if fragments.len() == 1 && fragments[0].range == (0..text.len()) {
        return vec![line.clone()];
    }

    let mut comments = Vec::new();
    let mut offset = 0;
    for span in line.spans() {
        if span.is_comment() {
            comments.push(offset..offset + span.len());
        }
        offset += span.len();
    }

    fragments
        .into_iter()
        .map(|frag| {
            let mut spans = Vec::new();
            if !frag.indent.is_empty() {
                spans.push(Span::new(TokenClass::Plain, frag.indent));
            }

            let mut pos = frag.range.start;
            for comment in &comments {
                if comment.end <= pos || comment.start >= frag.range.end {
                    continue;
                }
                if comment.start > pos {
                    relex(lexer, &text[pos..comment.start], &mut spans);
                }
                let end = comment.end.min(frag.range.end);
                let start = comment.start.max(pos);
                spans.push(Span::new(TokenClass::Comment, &text[start..end]));
                pos = end;
            }
            if pos < frag.range.end {
                relex(lexer, &text[pos..frag.range.end], &mut spans);
            }

            Line::new(spans)
        })
        .collect()
}

fn relex(lexer: &Lexer<'_>, text: &str, spans: &mut Vec<Span>) {
    spans.extend(lexer.highlight_line(text, ScanState::default()).spans);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::{highlight_line, LanguageGrammar};
    use pretty_assertions::assert_eq;

    fn grammar() -> LanguageGrammar {
        let mut grammar = LanguageGrammar::new("test");
        grammar.add_keywords(&["return"]);
        grammar.add_line_comment("//");
        grammar.set_quotes(&['"']);
        grammar
    }

    #[test]
    fn test_short_line_unchanged() {
        let line = "    let x = 1;";
        assert_eq!(wrap_line(line, 80), vec![line.to_string()]);
        assert_eq!(wrap_line(&"x".repeat(80), 80), vec!["x".repeat(80)]);
    }

    #[test]
    fn test_breaks_after_comma_and_keeps_indent() {
        let line = format!("    {},{}", "a".repeat(56), "b".repeat(29));
        assert_eq!(text_width(&line), 90);

        let wrapped = wrap_line(&line, 80);
        assert_eq!(
            wrapped,
            vec![
                format!("    {},", "a".repeat(56)),
                format!("    {}", "b".repeat(29)),
            ]
        );
    }

    #[test]
    fn test_hard_break_without_break_chars() {
        let line = "x".repeat(100);
        let wrapped = wrap_line(&line, 40);
        assert_eq!(wrapped, vec!["x".repeat(40), "x".repeat(40), "x".repeat(20)]);
    }

    #[test]
    fn test_break_outside_window_ignored() {
        // the only space sits outside the search window
        let line = format!("{} {}", "a".repeat(34), "b".repeat(60));
        let wrapped = wrap_line(&line, 80);
        assert_eq!(wrapped[0], format!("{} {}", "a".repeat(34), "b".repeat(45)));
    }

    #[test]
    fn test_prefers_last_break_in_window() {
        let line = format!("{} {} {}", "a".repeat(60), "b".repeat(10), "c".repeat(30));
        let wrapped = wrap_line(&line, 80);
        assert_eq!(
            wrapped,
            vec![
                format!("{} {}", "a".repeat(60), "b".repeat(10)),
                "c".repeat(30),
            ]
        );
    }

    #[test]
    fn test_wide_indent_kept_on_first_line_only() {
        let line = format!("{}{}", " ".repeat(30), "z".repeat(60));
        let wrapped = wrap_line(&line, 40);
        assert_eq!(
            wrapped,
            vec![
                format!("{}{}", " ".repeat(30), "z".repeat(10)),
                "z".repeat(40),
                "z".repeat(10),
            ]
        );
    }

    #[test]
    fn test_half_page_indent_preserved() {
        let code = "call(alpha, beta, gamma, delta, epsilon, zeta, eta);";
        let line = format!("{}{}", " ".repeat(40), code);
        let wrapped = wrap_line(&line, 80);
        assert_eq!(
            wrapped,
            vec![
                format!("{}call(alpha, beta, gamma, delta, epsilon,", " ".repeat(40)),
                format!("{}zeta, eta);", " ".repeat(40)),
            ]
        );
    }

    #[test]
    fn test_indent_filling_page_dropped_from_first_line() {
        let line = format!("{}{}", " ".repeat(50), "q".repeat(10));
        assert_eq!(wrap_line(&line, 40), vec!["q".repeat(10)]);
    }

    #[test]
    fn test_whitespace_only_line_kept() {
        let line = " ".repeat(100);
        assert_eq!(wrap_line(&line, 80), vec![line.clone()]);
        assert_eq!(wrap_ranges("\t  ", 2).len(), 1);
    }

    #[test]
    fn test_wide_chars_fit_by_columns() {
        let line = "日".repeat(30);
        let wrapped = wrap_line(&line, 40);
        assert_eq!(wrapped, vec!["日".repeat(20), "日".repeat(10)]);
    }

    #[test]
    fn test_highlighted_wrap_keeps_comment_text() {
        let grammar = grammar();
        let lexer = Lexer::new(&grammar);
        let text = format!("  return value; // {}", "note ".repeat(14).trim_end());
        let line = Line::new(highlight_line(&text, &grammar, ScanState::default()).spans);

        let wrapped = wrap_highlighted(&line, 50, &lexer);
        assert!(wrapped.len() > 1);
        assert_eq!(wrapped[0].spans()[1], Span::new(TokenClass::Keyword, "return"));

        let second = &wrapped[1];
        assert_eq!(second.spans()[0], Span::new(TokenClass::Plain, "  "));
        assert!(second.spans()[1..].iter().all(|s| s.is_comment()));
        assert!(second.text().starts_with("  note"));
    }

    #[test]
    fn test_highlighted_fragments_relexed() {
        let grammar = grammar();
        let lexer = Lexer::new(&grammar);
        let text = format!("call(\"{}\", other_value)", "s".repeat(40));
        let line = Line::new(highlight_line(&text, &grammar, ScanState::default()).spans);

        let wrapped = wrap_highlighted(&line, 50, &lexer);
        assert_eq!(wrapped.len(), 2);
        assert_eq!(wrapped[1].text(), "other_value)");
        assert_eq!(wrapped[1].spans()[0], Span::new(TokenClass::Variable, "other_value"));
    }

    #[test]
    fn test_highlighted_short_line_unchanged() {
        let grammar = grammar();
        let lexer = Lexer::new(&grammar);
        let line = Line::new(highlight_line("return 1;", &grammar, ScanState::default()).spans);
        assert_eq!(wrap_highlighted(&line, 80, &lexer), vec![line]);
    }
}
