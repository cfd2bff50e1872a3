//! Comment paragraph reflow
//!
//! A run of comment-only lines is treated as prose: comment markers are
//! dropped, consecutive lines are joined into paragraphs and the paragraphs
//! are wrapped again at the page width. Blank lines separate paragraphs and
//! decorative border lines are kept as structural delimiters.

use crate::syntax::{comment_body, LanguageGrammar, Line, Span, TokenClass};

use super::decorative::{decorative_char, normalize_decorative};
use super::width::{leading_whitespace, text_width};
use super::wrap::{wrap_line, BREAK_WINDOW};

/// Classification of one line inside a comment group
#[derive(Debug, Clone, PartialEq, Eq)]
enum Entry {
    Text(String),
    Border(Line),
    Blank,
}

fn classify(raw: &str, grammar: &LanguageGrammar, indent: &str, width: usize) -> Entry {
    if raw.trim().is_empty() {
        return Entry::Blank;
    }
    if let Some(border) = normalize_decorative(raw, width) {
        let lead = leading_whitespace(&border);
        return Entry::Border(comment_line(lead, &border[lead.len()..]));
    }

    let body = comment_body(raw, grammar);
    if body.is_empty() {
        Entry::Blank
    } else if decorative_char(&body).is_some() {
        let fill = width.saturating_sub(text_width(indent));
        let border = normalize_decorative(&body, fill).unwrap_or(body);
        Entry::Border(comment_line(indent, &border))
    } else {
        Entry::Text(body)
    }
}

/// A comment line, optionally indented by a plain span
fn comment_line(indent: &str, text: &str) -> Line {
    if indent.is_empty() {
        return Line::comment(text);
    }
    Line::new(vec![
        Span::new(TokenClass::Plain, indent),
        Span::new(TokenClass::Comment, text),
    ])
}

/// Reflow a group of comment-only and blank lines.
///
/// Returns comment lines holding the rewrapped prose, normalized borders and
/// single blank separators. Separators never lead or trail the result. The
/// group keeps the indentation of its first line unless that leaves less
/// than a break window of room.
pub fn reflow_comment_group(lines: &[&str], grammar: &LanguageGrammar, width: usize) -> Vec<Line> {
    let indent = lines
        .iter()
        .find(|raw| !raw.trim().is_empty())
        .map(|raw| leading_whitespace(*raw))
        .filter(|lead| text_width(lead) + BREAK_WINDOW <= width)
        .unwrap_or("");

    let mut out: Vec<Line> = Vec::new();
    let mut paragraph: Vec<String> = Vec::new();

    for raw in lines {
        match classify(raw, grammar, indent, width) {
            Entry::Text(body) => paragraph.push(body),
            Entry::Border(border) => {
                flush_paragraph(&mut paragraph, indent, width, &mut out);
                out.push(border);
            }
            Entry::Blank => {
                flush_paragraph(&mut paragraph, indent, width, &mut out);
                if out.last().is_some_and(|line| !line.spans().is_empty()) {
                    out.push(Line::blank());
                }
            }
        }
    }
    flush_paragraph(&mut paragraph, indent, width, &mut out);

    while out.last().is_some_and(|line| line.spans().is_empty()) {
        out.pop();
    }
    out
}

fn flush_paragraph(paragraph: &mut Vec<String>, indent: &str, width: usize, out: &mut Vec<Line>) {
    if paragraph.is_empty() {
        return;
    }
    let joined = paragraph.join(" ");
    let prose = joined.split_whitespace().collect::<Vec<_>>().join(" ");
    paragraph.clear();

    let room = width.saturating_sub(text_width(indent));
    out.extend(
        wrap_line(&prose, room)
            .iter()
            .map(|text| comment_line(indent, text)),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::LineKind;
    use pretty_assertions::assert_eq;

    fn slashes() -> LanguageGrammar {
        let mut grammar = LanguageGrammar::new("test");
        grammar.add_line_comment("//");
        grammar.set_block_comment("/*", "*/");
        grammar
    }

    fn texts(lines: &[Line]) -> Vec<String> {
        lines.iter().map(Line::text).collect()
    }

    #[test]
    fn test_paragraphs_and_separator() {
        let out = reflow_comment_group(&["// a", "// b", "", "// c"], &slashes(), 80);
        assert_eq!(texts(&out), vec!["a b", "", "c"]);
        assert_eq!(out[0].kind(), LineKind::Comment);
        assert_eq!(out[1].kind(), LineKind::Blank);
    }

    #[test]
    fn test_blank_runs_collapse_and_trim() {
        let out = reflow_comment_group(
            &["//", "// first", "", "", "//", "// second", "//"],
            &slashes(),
            80,
        );
        assert_eq!(texts(&out), vec!["first", "", "second"]);
    }

    #[test]
    fn test_whitespace_collapsed() {
        let out = reflow_comment_group(&["//   spaced    out", "//\tand  more"], &slashes(), 80);
        assert_eq!(texts(&out), vec!["spaced out and more"]);
    }

    #[test]
    fn test_long_paragraph_rewrapped() {
        let words = "lorem ipsum dolor sit amet ".repeat(4);
        let lines = [format!("// {}", words.trim())];
        let refs: Vec<&str> = lines.iter().map(String::as_str).collect();
        let out = reflow_comment_group(&refs, &slashes(), 40);

        assert!(out.len() > 1);
        for line in &out {
            assert!(line.width() <= 40);
            assert!(line.is_comment_only());
        }
        let rejoined = texts(&out).join(" ");
        assert_eq!(rejoined, words.trim());
    }

    #[test]
    fn test_border_splits_paragraphs() {
        let out = reflow_comment_group(
            &["// one", "// ======", "// two", "/**********/"],
            &slashes(),
            40,
        );
        assert_eq!(
            texts(&out),
            vec![
                "one".to_string(),
                "=".repeat(40),
                "two".to_string(),
                "*".repeat(40),
            ]
        );
        assert_eq!(out[1].kind(), LineKind::Decorative);
    }

    #[test]
    fn test_raw_border_keeps_indent() {
        let mut hash = LanguageGrammar::new("hash");
        hash.add_line_comment("#");
        let out = reflow_comment_group(&["  ##########", "  # text"], &hash, 40);
        assert_eq!(texts(&out), vec![format!("  {}", "#".repeat(38)), "  text".to_string()]);
        assert_eq!(out[0].kind(), LineKind::Decorative);
        assert_eq!(out[1].kind(), LineKind::Comment);
    }

    #[test]
    fn test_group_keeps_indent() {
        let out = reflow_comment_group(
            &["    // explain", "    // this step", "", "    // ----"],
            &slashes(),
            40,
        );
        assert_eq!(
            texts(&out),
            vec![
                "    explain this step".to_string(),
                String::new(),
                format!("    {}", "-".repeat(36)),
            ]
        );
        assert_eq!(out[0].spans()[0], Span::new(TokenClass::Plain, "    "));
        assert!(out.iter().all(|line| line.width() <= 40));
    }

    #[test]
    fn test_indented_paragraph_wraps_inside_indent() {
        let words = "word ".repeat(12);
        let raw = format!("        // {}", words.trim());
        let out = reflow_comment_group(&[raw.as_str()], &slashes(), 40);
        assert_eq!(out.len(), 2);
        for line in &out {
            assert!(line.text().starts_with("        word"));
            assert!(line.width() <= 40);
            assert!(line.is_comment_only());
        }
    }

    #[test]
    fn test_deep_indent_dropped() {
        let raw = format!("{}// note", " ".repeat(20));
        let out = reflow_comment_group(&[raw.as_str()], &slashes(), 40);
        assert_eq!(texts(&out), vec!["note"]);
    }

    #[test]
    fn test_block_comment_group() {
        let out = reflow_comment_group(
            &["/**", " * Adds two", " * numbers.", " */"],
            &slashes(),
            80,
        );
        assert_eq!(texts(&out), vec!["Adds two numbers."]);
    }
}
