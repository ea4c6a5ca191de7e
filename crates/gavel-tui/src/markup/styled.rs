//! Convert [`MarkupNode`]s into styled Ratatui lines.
//!
//! Word-wraps to the pane width and applies the display styles; all node
//! content goes through [`Span`]s as literal text.

use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::markup::MarkupNode;
use crate::widgets::bullet;

/// A styled line ready for Ratatui rendering.
pub type StyledLines = Vec<Line<'static>>;

/// Lay out `nodes` as styled lines, wrapping at `wrap_width` display columns.
///
/// `ascii` — when true, use plain ASCII characters instead of Unicode
/// glyphs so that fonts without wide Unicode support render cleanly.
pub fn style_nodes(nodes: &[MarkupNode], wrap_width: u16, ascii: bool) -> StyledLines {
    let width = if wrap_width == 0 { 80 } else { wrap_width as usize };
    let mut lines: StyledLines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for node in nodes {
        match node {
            MarkupNode::Text(_)
            | MarkupNode::Strong(_)
            | MarkupNode::Emph(_)
            | MarkupNode::Code(_) => {
                push_inline(&mut lines, &mut current, node, Style::default(), width);
            }
            MarkupNode::Break => {
                push_line(&mut lines, &mut current);
            }
            MarkupNode::Heading { level, content } => {
                flush(&mut lines, &mut current);
                let style = heading_style(*level);
                for inline in content {
                    push_inline(&mut lines, &mut current, inline, style, width);
                }
                flush(&mut lines, &mut current);
            }
            MarkupNode::List(items) => {
                flush(&mut lines, &mut current);
                for item in items {
                    item_line(&mut lines, &mut current, item, width, ascii);
                }
            }
            MarkupNode::Item(content) => {
                flush(&mut lines, &mut current);
                item_line(&mut lines, &mut current, content, width, ascii);
            }
        }
    }

    flush(&mut lines, &mut current);
    lines
}

fn item_line(
    lines: &mut StyledLines,
    current: &mut Vec<Span<'static>>,
    content: &[MarkupNode],
    width: usize,
    ascii: bool,
) {
    current.push(Span::raw(format!("  {}", bullet(ascii))));
    for inline in content {
        push_inline(lines, current, inline, Style::default(), width);
    }
    flush(lines, current);
}

/// Append one inline node to the current line, word-wrapping at `width`.
fn push_inline(
    lines: &mut StyledLines,
    current: &mut Vec<Span<'static>>,
    node: &MarkupNode,
    base: Style,
    width: usize,
) {
    match node {
        MarkupNode::Text(t) => push_wrapped(lines, current, t, base, width),
        MarkupNode::Strong(t) => {
            push_wrapped(lines, current, t, base.add_modifier(Modifier::BOLD), width);
        }
        MarkupNode::Emph(t) => {
            push_wrapped(lines, current, t, base.add_modifier(Modifier::ITALIC), width);
        }
        MarkupNode::Code(t) => {
            // Code content is not word-wrapped, but embedded newlines still
            // produce new display lines.
            let style = code_style();
            let mut first = true;
            for segment in format!("`{t}`").split('\n') {
                if !first {
                    push_line(lines, current);
                }
                first = false;
                current.push(Span::styled(segment.to_string(), style));
            }
        }
        // Block nodes never appear as inline content.
        _ => {}
    }
}

/// Accumulate space-terminated words, breaking the line whenever the next
/// word would pass `width`.
fn push_wrapped(
    lines: &mut StyledLines,
    current: &mut Vec<Span<'static>>,
    text: &str,
    style: Style,
    width: usize,
) {
    let mut col = current_col(current);
    let mut buf = String::new();
    for word in text.split_inclusive(' ') {
        let word_cols = word.chars().count();
        if col + word_cols > width && !buf.is_empty() {
            current.push(Span::styled(buf.clone(), style));
            buf.clear();
            push_line(lines, current);
            col = 0;
        }
        buf.push_str(word);
        col += word_cols;
    }
    if !buf.is_empty() {
        current.push(Span::styled(buf, style));
    }
}

/// Word-wrap plain (non-markup) text with a single style.  Used by the card
/// view for questions, reasoning, and other service-free text.
pub(crate) fn wrap_styled(text: &str, wrap_width: u16, style: Style) -> StyledLines {
    let width = if wrap_width == 0 { 80 } else { wrap_width as usize };
    let mut lines = StyledLines::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut first = true;
    for segment in text.split('\n') {
        if !first {
            push_line(&mut lines, &mut current);
        }
        first = false;
        push_wrapped(&mut lines, &mut current, segment, style, width);
    }
    flush(&mut lines, &mut current);
    lines
}

fn push_line(lines: &mut StyledLines, spans: &mut Vec<Span<'static>>) {
    if spans.is_empty() {
        lines.push(Line::default());
    } else {
        lines.push(Line::from(std::mem::take(spans)));
    }
}

/// Like [`push_line`] but without emitting an empty line when there is no
/// pending content (block boundaries, not explicit breaks).
fn flush(lines: &mut StyledLines, spans: &mut Vec<Span<'static>>) {
    if !spans.is_empty() {
        lines.push(Line::from(std::mem::take(spans)));
    }
}

fn heading_style(level: u8) -> Style {
    match level {
        1 => Style::default().fg(Color::LightBlue).add_modifier(Modifier::BOLD),
        2 => Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
        _ => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
    }
}

fn code_style() -> Style {
    Style::default().fg(Color::Yellow).bg(Color::DarkGray)
}

fn current_col(spans: &[Span<'_>]) -> usize {
    spans.iter().map(|s| s.content.chars().count()).sum()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::markup::render;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    #[test]
    fn plain_text_is_one_line() {
        let lines = style_nodes(&render("hello world"), 80, false);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "hello world");
    }

    #[test]
    fn break_starts_a_new_line() {
        let lines = style_nodes(&render("a\nb"), 80, false);
        assert_eq!(lines.len(), 2);
        assert_eq!(line_text(&lines[0]), "a");
        assert_eq!(line_text(&lines[1]), "b");
    }

    #[test]
    fn strong_span_is_bold() {
        let lines = style_nodes(&render("**loud**"), 80, false);
        let span = &lines[0].spans[0];
        assert_eq!(span.content, "loud");
        assert!(span.style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn heading_gets_its_own_styled_line() {
        let lines = style_nodes(&render("# Title\nbody"), 80, false);
        assert_eq!(line_text(&lines[0]), "Title");
        assert!(lines[0].spans[0].style.add_modifier.contains(Modifier::BOLD));
        let rest: String = lines[1..].iter().map(line_text).collect();
        assert!(rest.contains("body"));
    }

    #[test]
    fn list_items_each_get_a_bulleted_line() {
        let lines = style_nodes(&render("* one\n* two"), 80, false);
        assert_eq!(lines.len(), 2);
        assert!(line_text(&lines[0]).contains("• one"));
        assert!(line_text(&lines[1]).contains("• two"));
    }

    #[test]
    fn ascii_mode_uses_dash_bullets() {
        let lines = style_nodes(&render("* one"), 80, true);
        assert!(line_text(&lines[0]).contains("- one"));
        assert!(!line_text(&lines[0]).contains('•'));
    }

    #[test]
    fn code_span_keeps_backticks_for_display() {
        let lines = style_nodes(&render("run `make` now"), 80, false);
        assert_eq!(line_text(&lines[0]), "run `make` now");
    }

    #[test]
    fn long_text_wraps_at_word_boundaries() {
        let lines = style_nodes(&render("aaa bbb ccc ddd"), 8, false);
        assert!(lines.len() >= 2, "expected a wrap; got {lines:?}");
        for line in &lines {
            assert!(
                line_text(line).trim_end().chars().count() <= 8,
                "line too wide: {:?}",
                line_text(line)
            );
        }
    }

    #[test]
    fn empty_input_styles_to_no_lines() {
        assert!(style_nodes(&render(""), 80, false).is_empty());
    }
}
