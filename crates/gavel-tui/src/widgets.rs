// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::editor::TextEdit;
use crate::markup::StyledLines;
use crate::overlay::FeedbackComposer;

// ── Character sets ────────────────────────────────────────────────────────────

fn sep(ascii: bool) -> &'static str {
    if ascii { "|" } else { "│" }
}
fn busy_char(ascii: bool) -> &'static str {
    if ascii { "* " } else { "⠿ " }
}
pub(crate) fn bullet(ascii: bool) -> &'static str {
    if ascii { "- " } else { "• " }
}
pub(crate) fn bar_char(ascii: bool) -> &'static str {
    if ascii { "| " } else { "▌ " }
}
fn border_type(ascii: bool) -> BorderType {
    if ascii { BorderType::Plain } else { BorderType::Rounded }
}

// ── Draw functions ────────────────────────────────────────────────────────────

/// Draw the status bar at the top.
pub fn draw_status(
    frame: &mut Frame,
    area: Rect,
    endpoint: &str,
    asks_in_flight: usize,
    regenerating: bool,
    conversation_count: usize,
    ascii: bool,
) {
    let busy = asks_in_flight > 0 || regenerating;
    let busy_indicator = if busy { busy_char(ascii) } else { "  " };
    let separator = sep(ascii);

    let activity_span: Span<'static> = if regenerating {
        Span::styled(" regenerating… ", Style::default().fg(Color::Yellow))
    } else if asks_in_flight > 0 {
        Span::styled(
            format!(" evaluating ({asks_in_flight}) "),
            Style::default().fg(Color::Yellow),
        )
    } else {
        Span::raw("")
    };

    let line = Line::from(vec![
        Span::styled(
            format!(" {busy_indicator}"),
            Style::default().fg(if busy { Color::Yellow } else { Color::DarkGray }),
        ),
        Span::styled(format!(" {endpoint} "), Style::default().fg(Color::LightCyan)),
        Span::styled(separator, Style::default().fg(Color::DarkGray)),
        Span::styled(
            format!(" {conversation_count} answered "),
            Style::default().fg(Color::Gray),
        ),
        Span::styled(separator, Style::default().fg(Color::DarkGray)),
        activity_span,
        Span::styled(
            "  F1:help  Tab:focus  Enter:ask  r:regenerate  y/n:rate  c:comment  ^c:quit",
            Style::default().fg(Color::DarkGray),
        ),
    ]);
    frame.render_widget(Paragraph::new(line), area);
}

/// Draw the conversations pane.
pub fn draw_conversations(
    frame: &mut Frame,
    area: Rect,
    lines: &StyledLines,
    scroll_offset: u16,
    focused: bool,
    ascii: bool,
) {
    let block = pane_block("Conversations", focused, ascii);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let visible: Vec<Line<'static>> = lines
        .iter()
        .skip(scroll_offset as usize)
        .take(inner.height as usize)
        .cloned()
        .collect();

    let para = Paragraph::new(visible).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);
}

/// Draw the question input box.
pub fn draw_input(
    frame: &mut Frame,
    area: Rect,
    edit: &TextEdit,
    focused: bool,
    busy: bool,
    ascii: bool,
) {
    let title = if busy {
        "Ask  [waiting for the judge…]".to_string()
    } else {
        "Ask  [Enter:send  Shift+Enter:newline]".to_string()
    };

    let block = pane_block(&title, focused, ascii);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let para = Paragraph::new(edit.buffer.as_str()).wrap(Wrap { trim: false });
    frame.render_widget(para, inner);

    if focused {
        let (row, col) = edit.cursor_position(inner.width as usize);
        frame.set_cursor_position((inner.x + col as u16, inner.y + row as u16));
    }
}

/// Draw the transient error bar below the input box.
pub fn draw_error(frame: &mut Frame, area: Rect, message: &str) {
    let para = Paragraph::new(format!(" {message}  (x to dismiss)"))
        .style(Style::default().fg(Color::White).bg(Color::Red));
    frame.render_widget(para, area);
}

/// Draw the feedback composer as a centered modal overlay.
pub fn draw_composer(frame: &mut Frame, composer: &FeedbackComposer, ascii: bool) {
    let area = frame.area();
    let width = area.width.saturating_sub(8).clamp(20, 64).min(area.width);
    let height = 8u16.min(area.height);
    let rect = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let block = Block::default()
        .title(Span::styled(
            " Feedback  [Enter:submit  Esc:cancel] ",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::LightBlue),
        ))
        .borders(Borders::ALL)
        .border_type(border_type(ascii))
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = block.inner(rect);

    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);

    let mut lines = vec![Line::from(Span::styled(
        "What did you think about this answer?",
        Style::default().fg(Color::Gray),
    ))];
    for l in composer.edit.buffer.split('\n') {
        lines.push(Line::from(l.to_string()));
    }
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);

    // The prompt occupies the first row; the text starts one row below.
    let (row, col) = composer.edit.cursor_position(inner.width as usize);
    frame.set_cursor_position((inner.x + col as u16, inner.y + 1 + row as u16));
}

/// Draw the help overlay.
pub fn draw_help(frame: &mut Frame, ascii: bool) {
    let area = frame.area();
    let bt = border_type(ascii);

    let help_text = vec![
        Line::from(Span::styled(
            "  Gavel Key Bindings",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::LightBlue),
        )),
        Line::default(),
        Line::from(" Tab      Switch focus (input ↔ conversations)"),
        Line::from(" Enter    Submit question (Shift+Enter for newline)"),
        Line::from(" j/k ↑/↓  Select previous/next conversation"),
        Line::from(" ^u/^d    Half-page scroll"),
        Line::from(" g / G    Jump to newest/oldest"),
        Line::from(" r        Regenerate the selected answer"),
        Line::from(" y / n    Mark the selected answer helpful / not helpful"),
        Line::from(" c        Write comment feedback"),
        Line::from(" x        Dismiss the error message"),
        Line::from(" F1       Toggle this help"),
        Line::from(" ^q / ^c  Quit"),
        Line::default(),
        Line::from(Span::styled(
            "  press any key to close",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let width = 58u16.min(area.width);
    let height = (help_text.len() as u16 + 2).min(area.height);
    let rect = Rect::new(
        area.x + (area.width.saturating_sub(width)) / 2,
        area.y + (area.height.saturating_sub(height)) / 2,
        width,
        height,
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(bt)
        .border_style(Style::default().fg(Color::LightBlue));
    let inner = block.inner(rect);
    frame.render_widget(Clear, rect);
    frame.render_widget(block, rect);
    frame.render_widget(Paragraph::new(help_text), inner);
}

pub(crate) fn pane_block(title: &str, focused: bool, ascii: bool) -> Block<'static> {
    let border_style = if focused {
        Style::default().fg(Color::LightBlue)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Block::default()
        .title(Span::styled(
            format!(" {title} "),
            if focused {
                Style::default()
                    .add_modifier(Modifier::BOLD)
                    .fg(Color::LightBlue)
            } else {
                Style::default().fg(Color::Gray)
            },
        ))
        .borders(Borders::ALL)
        .border_type(border_type(ascii))
        .border_style(border_style)
}
