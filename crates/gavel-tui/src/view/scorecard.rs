// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Evaluation scorecard and feedback display lines.

use gavel_client::{EvalQuality, Evaluation, MetricsSummary};
use gavel_core::{Feedback, FeedbackKind};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};

use crate::markup::styled::wrap_styled;
use crate::markup::StyledLines;
use crate::widgets::bullet;

/// Render the judge's verdict for one conversation.
///
/// `quality = ERROR` is the judge's own failure: only the reasoning is shown
/// and every numeric display is suppressed.
pub fn evaluation_lines(eval: &Evaluation, width: u16, ascii: bool) -> StyledLines {
    if eval.quality == EvalQuality::Error {
        let mut lines = vec![Line::from(vec![
            Span::styled(
                format!("{} Judge Error", quality_glyph(EvalQuality::Error, ascii)),
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            ),
        ])];
        lines.extend(wrap_styled(
            &eval.reasoning,
            width,
            Style::default().fg(Color::Red),
        ));
        return lines;
    }

    let mut lines = StyledLines::new();

    // Judge header.
    let judge = eval.judge_model.as_deref().unwrap_or("LLM Judge");
    let quality_label = match eval.quality {
        EvalQuality::Good => "GOOD",
        EvalQuality::Bad => "BAD",
        EvalQuality::Error => unreachable!("handled above"),
    };
    lines.push(Line::from(vec![
        Span::styled(
            "LLM-as-a-Judge Evaluation  ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{judge} · confidence {}/10  ", fmt_score(eval.confidence)),
            Style::default().fg(Color::DarkGray),
        ),
        Span::styled(
            format!("{} {quality_label}", quality_glyph(eval.quality, ascii)),
            quality_style(eval.quality),
        ),
    ]));

    // Overall score.
    lines.push(Line::from(vec![
        Span::styled(
            format!("Overall Quality: {}/10", fmt_score(eval.score)),
            score_style(eval.score).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(
                "   Method: {}",
                eval.evaluation_method.as_deref().unwrap_or("LLM-as-a-Judge")
            ),
            Style::default().fg(Color::DarkGray),
        ),
    ]));

    // Detailed sub-scores.
    for (label, value) in [
        ("Content Depth", eval.content_depth),
        ("Actionability", eval.actionability),
        ("Clarity", eval.clarity),
        ("Comprehensiveness", eval.comprehensiveness),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<18}"), Style::default().fg(Color::Gray)),
            Span::styled(format!("{}/10", fmt_score(value)), score_style(value)),
        ]));
    }

    if let Some(metrics) = &eval.metrics_summary {
        lines.extend(metrics_lines(metrics, width));
    }

    if !eval.reasoning.is_empty() {
        lines.push(Line::from(Span::styled(
            "Reasoning",
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.extend(wrap_styled(&eval.reasoning, width, Style::default()));
    }

    if !eval.strengths.is_empty() {
        lines.push(Line::from(Span::styled(
            "Strengths",
            Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        )));
        for item in &eval.strengths {
            lines.push(Line::from(Span::styled(
                format!("  {}{item}", bullet(ascii)),
                Style::default().fg(Color::Green),
            )));
        }
    }

    if !eval.missing_elements.is_empty() {
        lines.push(Line::from(Span::styled(
            "Improvement Suggestions",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )));
        for item in &eval.missing_elements {
            lines.push(Line::from(Span::styled(
                format!("  {}{item}", bullet(ascii)),
                Style::default().fg(Color::Yellow),
            )));
        }
    }

    lines
}

/// Objective metrics block: values shown as percentages with one decimal.
fn metrics_lines(metrics: &MetricsSummary, width: u16) -> StyledLines {
    let mut lines = vec![Line::from(vec![
        Span::styled(
            "Objective NLP Metrics ",
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled("(supporting evidence)", Style::default().fg(Color::DarkGray)),
    ])];
    for (label, value) in [
        ("Overall Similarity", metrics.overall_similarity),
        ("ROUGE-1", metrics.rouge1_fmeasure),
        ("ROUGE-L", metrics.rouge_l_fmeasure),
        ("BLEU", metrics.bleu_score),
    ] {
        lines.push(Line::from(vec![
            Span::styled(format!("  {label:<18}"), Style::default().fg(Color::Gray)),
            Span::styled(format!("{:.1}%", value * 100.0), metric_style(value)),
        ]));
    }
    if !metrics.interpretation.is_empty() {
        lines.extend(wrap_styled(
            &metrics.interpretation,
            width,
            Style::default().fg(Color::DarkGray),
        ));
    }
    lines
}

/// Display lines for user feedback attached to an answer.
pub fn feedback_lines(feedback: &Feedback, ascii: bool) -> StyledLines {
    let (glyph, label, color) = match feedback.kind {
        FeedbackKind::ThumbsUp => (
            if ascii { "+" } else { "👍" },
            "You found this answer helpful",
            Color::Green,
        ),
        FeedbackKind::ThumbsDown => (
            if ascii { "-" } else { "👎" },
            "You found this answer not helpful",
            Color::Red,
        ),
        FeedbackKind::Comment => (
            if ascii { ">" } else { "💬" },
            "Your feedback",
            Color::Cyan,
        ),
    };

    let mut lines = vec![Line::from(vec![
        Span::styled(format!("{glyph} {label}"), Style::default().fg(color)),
        Span::styled(
            format!("  {}", feedback.timestamp.format("%Y-%m-%d %H:%M")),
            Style::default().fg(Color::DarkGray),
        ),
    ])];
    if let Some(comment) = &feedback.comment {
        lines.push(Line::from(Span::styled(
            format!("  \"{comment}\""),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

// ── Styling thresholds ────────────────────────────────────────────────────────

/// 0–10 score colour bands: ≥7 excellent, ≥5 good, ≥3 average, else poor.
fn score_style(score: f64) -> Style {
    let color = if score >= 7.0 {
        Color::Green
    } else if score >= 5.0 {
        Color::Cyan
    } else if score >= 3.0 {
        Color::Yellow
    } else {
        Color::Red
    };
    Style::default().fg(color)
}

/// [0, 1] metric colour bands: ≥0.7 / ≥0.5 / ≥0.3.
fn metric_style(value: f64) -> Style {
    let color = if value >= 0.7 {
        Color::Green
    } else if value >= 0.5 {
        Color::Cyan
    } else if value >= 0.3 {
        Color::Yellow
    } else {
        Color::Red
    };
    Style::default().fg(color)
}

fn quality_style(quality: EvalQuality) -> Style {
    match quality {
        EvalQuality::Good => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        EvalQuality::Bad => Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        EvalQuality::Error => Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    }
}

fn quality_glyph(quality: EvalQuality, ascii: bool) -> &'static str {
    match (quality, ascii) {
        (EvalQuality::Good, false) => "👍",
        (EvalQuality::Good, true) => "+",
        (EvalQuality::Bad, false) => "👎",
        (EvalQuality::Bad, true) => "-",
        (EvalQuality::Error, false) => "⚠",
        (EvalQuality::Error, true) => "!",
    }
}

/// Format a 0–10 score without a trailing `.0` for whole numbers.
fn fmt_score(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_client::sample_evaluation;
    use gavel_core::QuickFeedback;

    fn all_text(lines: &StyledLines) -> String {
        lines
            .iter()
            .map(|l| l.spans.iter().map(|s| s.content.as_ref()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn error_quality_renders_reasoning_only() {
        let eval = Evaluation {
            quality: EvalQuality::Error,
            reasoning: "judge timeout".into(),
            ..sample_evaluation()
        };
        let text = all_text(&evaluation_lines(&eval, 80, false));
        assert!(text.contains("judge timeout"));
        assert!(!text.contains("/10"), "score grid must be suppressed: {text}");
        assert!(!text.contains("Content Depth"));
    }

    #[test]
    fn full_scorecard_shows_all_subscores() {
        let text = all_text(&evaluation_lines(&sample_evaluation(), 80, false));
        for label in ["Content Depth", "Actionability", "Clarity", "Comprehensiveness"] {
            assert!(text.contains(label), "missing {label}: {text}");
        }
        assert!(text.contains("Overall Quality: 8/10"));
        assert!(text.contains("GOOD"));
    }

    #[test]
    fn metrics_render_as_percentages() {
        let mut eval = sample_evaluation();
        eval.metrics_summary = Some(MetricsSummary {
            overall_similarity: 0.72,
            rouge1_fmeasure: 0.615,
            rouge_l_fmeasure: 0.5,
            bleu_score: 0.0,
            interpretation: "decent overlap".into(),
        });
        let text = all_text(&evaluation_lines(&eval, 80, false));
        assert!(text.contains("72.0%"));
        assert!(text.contains("61.5%"));
        assert!(text.contains("decent overlap"));
    }

    #[test]
    fn fractional_scores_keep_one_decimal() {
        assert_eq!(fmt_score(8.0), "8");
        assert_eq!(fmt_score(8.5), "8.5");
        assert_eq!(fmt_score(0.0), "0");
    }

    #[test]
    fn quick_feedback_lines_have_no_comment() {
        let lines = feedback_lines(&Feedback::quick(QuickFeedback::ThumbsDown), false);
        let text = all_text(&lines);
        assert!(text.contains("not helpful"));
        assert!(!text.contains('"'));
    }

    #[test]
    fn comment_feedback_lines_quote_the_text() {
        let lines = feedback_lines(&Feedback::comment("needs examples".into()), true);
        let text = all_text(&lines);
        assert!(text.contains("Your feedback"));
        assert!(text.contains("\"needs examples\""));
    }
}
