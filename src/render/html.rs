//! HTML output
//!
//! Every output line becomes one `<div class="line">` holding a span per
//! classified token. Styles live in one inline stylesheet keyed by the
//! `tok-*` class names, so the markup itself carries no colors.

use std::fmt::Write as _;

use crate::style::StyleProfile;
use crate::syntax::{Line, LineKind, TokenClass};

/// Escape text for use in HTML content and attribute values
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        push_escaped_char(ch, &mut out);
    }
    out
}

fn push_escaped_char(ch: char, out: &mut String) {
    match ch {
        '&' => out.push_str("&amp;"),
        '<' => out.push_str("&lt;"),
        '>' => out.push_str("&gt;"),
        '"' => out.push_str("&quot;"),
        '\'' => out.push_str("&#39;"),
        _ => out.push(ch),
    }
}

/// Digits needed for the line-number gutter (minimum 3)
pub fn gutter_width(line_count: usize) -> usize {
    let mut digits = 1;
    let mut n = line_count;
    while n >= 10 {
        n /= 10;
        digits += 1;
    }
    digits.max(3)
}

/// Render one line as a `<div>`.
///
/// `gutter` holds the gutter width and the source line number to show in
/// it. Continuation lines pass no number and get an empty gutter.
pub fn render_line(line: &Line, gutter: Option<(usize, Option<usize>)>) -> String {
    let kind = match line.kind() {
        LineKind::Code => "line",
        LineKind::Comment => "line comment",
        LineKind::Decorative => "line decorative",
        LineKind::Blank => "line blank",
    };

    let mut html = format!("<div class=\"{}\">", kind);

    if let Some((width, number)) = gutter {
        let label = number.map(|n| n.to_string()).unwrap_or_default();
        let _ = write!(html, "<span class=\"ln\">{:>width$}</span>", label, width = width);
    }

    for span in line.spans() {
        match span.class.css_class() {
            Some(class) => {
                let _ = write!(html, "<span class=\"{}\">{}</span>", class, escape_html(&span.text));
            }
            None => html.push_str(&escape_html(&span.text)),
        }
    }

    html.push_str("</div>");
    html
}

/// Build the inline stylesheet for a profile
pub fn stylesheet(profile: &StyleProfile) -> String {
    let colors = &profile.colors;
    let fonts = &profile.fonts;
    let sizes = &profile.font_sizes;
    let styles = &profile.font_styles;

    let mut css = String::new();
    let _ = writeln!(
        css,
        "body {{ margin: 0; padding: 1em; background: {}; color: {}; }}",
        colors.background, colors.foreground
    );
    let _ = writeln!(
        css,
        ".code {{ font-family: {}; font-size: {}px; line-height: 1.4; font-weight: {}; font-style: {}; max-width: {}ch; }}",
        fonts.code,
        sizes.code,
        weight(styles.code_bold),
        slant(styles.code_italic),
        profile.max_width
    );
    css.push_str(".line { white-space: pre; min-height: 1.4em; }\n");
    css.push_str(".ln { user-select: none; -webkit-user-select: none; opacity: 0.5; padding-right: 1ch; }\n");

    for class in TokenClass::STYLED {
        if let Some(name) = class.css_class() {
            let _ = writeln!(css, ".{} {{ color: {}; }}", name, colors.get(class));
        }
    }

    let _ = writeln!(
        css,
        ".tok-comment {{ font-weight: {}; font-style: {}; }}",
        weight(styles.comment_bold),
        slant(styles.comment_italic)
    );
    let _ = writeln!(
        css,
        ".line.comment .tok-comment {{ font-family: {}; font-size: {}px; }}",
        fonts.comment, sizes.comment
    );
    css
}

fn weight(bold: bool) -> &'static str {
    if bold {
        "bold"
    } else {
        "normal"
    }
}

fn slant(italic: bool) -> &'static str {
    if italic {
        "italic"
    } else {
        "normal"
    }
}

fn head(title: &str, css: &str) -> String {
    let mut html = String::new();
    html.push_str("<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n");
    let _ = writeln!(html, "<title>{}</title>", escape_html(title));
    let _ = write!(html, "<style>\n{}</style>\n", css);
    html.push_str("</head>\n<body>\n<div class=\"code\">\n");
    html
}

/// Wrap rendered lines into a standalone document
pub fn document(title: &str, css: &str, lines: &[String]) -> String {
    let mut html = head(title, css);
    for line in lines {
        html.push_str(line);
        html.push('\n');
    }
    html.push_str("</div>\n</body>\n</html>\n");
    html
}

/// Standalone document of escaped text with no highlighting
pub fn render_plain(text: &str, title: &str) -> String {
    let mut css = stylesheet(&StyleProfile::default());
    css.push_str("pre.raw { margin: 0; white-space: pre-wrap; }\n");

    let mut html = head(title, &css);
    html.push_str("<pre class=\"raw\">");
    html.push_str(&escape_html(text));
    html.push_str("</pre>\n</div>\n</body>\n</html>\n");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Span;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_escape_html() {
        assert_eq!(
            escape_html(r#"<a href="x">Tom & 'Jerry'</a>"#),
            "&lt;a href=&quot;x&quot;&gt;Tom &amp; &#39;Jerry&#39;&lt;/a&gt;"
        );
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_render_line_spans() {
        let line = Line::new(vec![
            Span::new(TokenClass::Keyword, "if"),
            Span::new(TokenClass::Plain, " "),
            Span::new(TokenClass::Variable, "a"),
            Span::new(TokenClass::Operator, "<"),
            Span::new(TokenClass::Variable, "b"),
        ]);
        assert_eq!(
            render_line(&line, None),
            "<div class=\"line\"><span class=\"tok-keyword\">if</span> \
             <span class=\"tok-variable\">a</span><span class=\"tok-operator\">&lt;</span>\
             <span class=\"tok-variable\">b</span></div>"
        );
    }

    #[test]
    fn test_render_line_gutter() {
        let line = Line::comment("note");
        assert_eq!(
            render_line(&line, Some((3, Some(7)))),
            "<div class=\"line comment\"><span class=\"ln\">  7</span>\
             <span class=\"tok-comment\">note</span></div>"
        );
        assert_eq!(
            render_line(&Line::blank(), Some((3, None))),
            "<div class=\"line blank\"><span class=\"ln\">   </span></div>"
        );
    }

    #[test]
    fn test_gutter_width() {
        assert_eq!(gutter_width(0), 3);
        assert_eq!(gutter_width(999), 3);
        assert_eq!(gutter_width(1000), 4);
        assert_eq!(gutter_width(123_456), 6);
    }

    #[test]
    fn test_stylesheet_uses_profile() {
        let mut profile = StyleProfile::default();
        profile.colors.keyword = "#123456".to_string();
        profile.font_styles.comment_bold = true;
        let css = stylesheet(&profile);
        assert!(css.contains(".tok-keyword { color: #123456; }"));
        assert!(css.contains(".tok-comment { font-weight: bold; font-style: italic; }"));
        assert!(css.contains("max-width: 80ch"));
        assert!(!css.contains(".tok-plain"));
    }

    #[test]
    fn test_render_plain_escapes() {
        let html = render_plain("<script>alert(1)</script>", "a<b>.js");
        assert!(html.contains("<title>a&lt;b&gt;.js</title>"));
        assert!(html.contains("&lt;script&gt;alert(1)&lt;/script&gt;"));
        assert!(!html.contains("<script>"));
    }
}
