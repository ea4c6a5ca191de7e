// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Per-conversation card rendering: question header, markup-rendered answer,
//! feedback display, and the evaluation scorecard, with a coloured bar down
//! the left edge.

use gavel_core::Conversation;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::markup::styled::wrap_styled;
use crate::markup::{render, style_nodes, StyledLines};
use crate::view::scorecard::{evaluation_lines, feedback_lines};
use crate::widgets::bar_char;

/// Build the display lines for one conversation card.
///
/// `width` is the usable content width (pane inner width minus the bar
/// columns); the caller accounts for the bar before calling.
pub fn conversation_lines(
    conv: &Conversation,
    selected: bool,
    regenerating: bool,
    width: u16,
    ascii: bool,
) -> StyledLines {
    let mut inner = StyledLines::new();

    // Question section.
    inner.push(Line::from(Span::styled(
        "Question",
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
    )));
    inner.extend(wrap_styled(&conv.question, width, Style::default()));
    inner.push(timestamp_line(conv, regenerating));
    inner.push(Line::default());

    // Answer section.
    inner.push(Line::from(Span::styled(
        "Answer",
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    )));
    inner.extend(style_nodes(&render(&conv.answer), width, ascii));

    if let Some(feedback) = &conv.feedback {
        inner.push(Line::default());
        inner.extend(feedback_lines(feedback, ascii));
    }

    if let Some(eval) = &conv.evaluation {
        inner.push(Line::default());
        inner.extend(evaluation_lines(eval, width, ascii));
    }

    apply_bar(inner, bar_style(selected, regenerating), bar_char(ascii))
}

fn timestamp_line(conv: &Conversation, regenerating: bool) -> Line<'static> {
    let mut text = conv.created_at.format("%Y-%m-%d %H:%M:%S").to_string();
    if conv.was_regenerated() {
        text.push_str(&format!(
            " · regenerated {}",
            conv.last_updated_at.format("%H:%M:%S")
        ));
    }
    if regenerating {
        text.push_str(" · regenerating…");
    }
    Line::from(Span::styled(text, Style::default().fg(Color::DarkGray)))
}

fn bar_style(selected: bool, regenerating: bool) -> Style {
    if regenerating {
        Style::default().fg(Color::Yellow)
    } else if selected {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Prepend the coloured bar to every line of the card.
fn apply_bar(lines: StyledLines, style: Style, bar: &str) -> StyledLines {
    lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::styled(bar.to_string(), style)];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect()
}

/// Lines shown when no conversation exists yet.
pub fn empty_state_lines() -> StyledLines {
    let dim = Style::default().fg(Color::DarkGray);
    vec![
        Line::default(),
        Line::from(Span::styled(
            "  Ready for LLM-as-a-Judge evaluation",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::default(),
        Line::from(Span::styled(
            "  Ask a question to see the judge's verdict: quality scores,",
            dim,
        )),
        Line::from(Span::styled(
            "  reasoning, strengths, and objective ROUGE/BLEU metrics.",
            dim,
        )),
        Line::default(),
        Line::from(Span::styled("  Try questions like:", dim)),
        Line::from(Span::styled(
            "    \"How do I improve team productivity?\"",
            dim,
        )),
        Line::from(Span::styled(
            "    \"What's the best deployment strategy?\"",
            dim,
        )),
        Line::from(Span::styled(
            "    \"How to debug performance issues?\"",
            dim,
        )),
    ]
}

// ── Tests ─────────────────────────────────────────────────────────────────────
