//! Render assembly
//!
//! Ties the pieces together: lex every line with the state carried from the
//! line before, reflow comment groups, normalize decorative lines, wrap
//! over-width code, and emit the HTML.

use crate::reflow::{expand_tabs, normalize_decorative, reflow_comment_group, wrap_highlighted};
use crate::reflow::width::leading_whitespace;
use crate::style::StyleProfile;
use crate::syntax::{GrammarTable, LanguageGrammar, Lexer, Line, LineKind, ScanState, Span, TokenClass};

use super::html;

/// Options that do not belong to the style profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Tab stop width used when expanding tabs
    pub tab_width: usize,
    /// Prefix lines with a line-number gutter
    pub line_numbers: bool,
    /// Reflow comment groups as prose
    pub reflow_comments: bool,
    /// Document title (defaults to "codeprint")
    pub title: Option<String>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            tab_width: 4,
            line_numbers: false,
            reflow_comments: true,
            title: None,
        }
    }
}

/// Result of rendering one source buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedDocument {
    /// One HTML fragment per output line
    pub lines: Vec<String>,
    /// Complete HTML document with inline styles
    pub standalone_html: String,
    /// Number of source lines
    pub line_count: usize,
    /// Profile the document was styled with
    pub profile: StyleProfile,
}

/// An output line and the source line number it starts, if any
struct OutputLine {
    number: Option<usize>,
    line: Line,
}

/// Render `source` with the built-in grammar for `language_id`.
///
/// Builds a fresh [`GrammarTable`] on every call. Callers rendering many
/// buffers should keep one table and use [`render_in`].
pub fn render(source: &str, language_id: &str, profile: &StyleProfile) -> RenderedDocument {
    render_in(source, &GrammarTable::new(), language_id, profile, &RenderOptions::default())
}

/// Render `source` with the grammar `table` holds for `language_id`
pub fn render_in(
    source: &str,
    table: &GrammarTable,
    language_id: &str,
    profile: &StyleProfile,
    options: &RenderOptions,
) -> RenderedDocument {
    render_with(source, table.lookup(language_id), profile, options)
}

/// Render `source` with an explicit grammar and options
pub fn render_with(
    source: &str,
    grammar: &LanguageGrammar,
    profile: &StyleProfile,
    options: &RenderOptions,
) -> RenderedDocument {
    let lexer = Lexer::new(grammar);
    let width = profile.max_width;

    let texts: Vec<String> = source
        .lines()
        .map(|line| expand_tabs(line, options.tab_width))
        .collect();

    let mut state = ScanState::default();
    let highlighted: Vec<Line> = texts
        .iter()
        .map(|text| {
            let result = lexer.highlight_line(text, state);
            state = result.end_state;
            Line::new(result.spans)
        })
        .collect();

    let mut output = Vec::with_capacity(highlighted.len());
    let mut idx = 0;
    while idx < highlighted.len() {
        if options.reflow_comments && highlighted[idx].is_comment_only() {
            let end = comment_group_end(&highlighted, idx);
            let raw: Vec<&str> = texts[idx..end].iter().map(String::as_str).collect();
            let reflowed = reflow_comment_group(&raw, grammar, width);
            push_numbered(&mut output, idx + 1, reflowed);
            idx = end;
            continue;
        }

        let line = &highlighted[idx];
        let lines = match line.kind() {
            LineKind::Decorative => vec![decorative_line(line, width)],
            _ => wrap_highlighted(line, width, &lexer),
        };
        push_numbered(&mut output, idx + 1, lines);
        idx += 1;
    }

    let gutter = options.line_numbers.then(|| html::gutter_width(texts.len()));
    let lines: Vec<String> = output
        .iter()
        .map(|out| html::render_line(&out.line, gutter.map(|w| (w, out.number))))
        .collect();

    let title = options.title.as_deref().unwrap_or("codeprint");
    let standalone_html = html::document(title, &html::stylesheet(profile), &lines);

    tracing::trace!(
        language = grammar.id(),
        source_lines = texts.len(),
        output_lines = lines.len(),
        "rendered"
    );

    RenderedDocument {
        lines,
        standalone_html,
        line_count: texts.len(),
        profile: profile.clone(),
    }
}

/// End (exclusive) of the comment group starting at `start`.
///
/// A group runs over comment-only lines and the blank lines between them.
/// Blank lines after the last comment line are not part of it.
fn comment_group_end(lines: &[Line], start: usize) -> usize {
    let mut end = start + 1;
    for (offset, line) in lines[start + 1..].iter().enumerate() {
        if line.is_comment_only() {
            end = start + 1 + offset + 1;
        } else if line.kind() != LineKind::Blank {
            break;
        }
    }
    end
}

fn push_numbered(output: &mut Vec<OutputLine>, number: usize, lines: Vec<Line>) {
    for (i, line) in lines.into_iter().enumerate() {
        output.push(OutputLine {
            number: (i == 0).then_some(number),
            line,
        });
    }
}

/// Stretch a decorative line to `width`, keeping the class of its characters
fn decorative_line(line: &Line, width: usize) -> Line {
    let text = line.text();
    let Some(border) = normalize_decorative(&text, width) else {
        return line.clone();
    };
    let class = line
        .spans()
        .iter()
        .find(|span| !span.is_blank())
        .map_or(TokenClass::Operator, |span| span.class);

    let indent = leading_whitespace(&border);
    let mut spans = Vec::with_capacity(2);
    if !indent.is_empty() {
        spans.push(Span::new(TokenClass::Plain, indent));
    }
    if border.len() > indent.len() {
        spans.push(Span::new(class, &border[indent.len()..]));
    }
    Line::new(spans)
}
