// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Conversation record and feedback types.

use std::fmt;

use chrono::{DateTime, Local};
use gavel_client::Evaluation;

/// Identifier for one conversation.  Allocated by the store from a
/// monotonically increasing counter, so ids also encode creation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ConversationId(pub(crate) u64);

impl fmt::Display for ConversationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One question/answer exchange with its evaluation and optional feedback.
///
/// Regeneration mutates `answer`, `evaluation`, and `last_updated_at` in
/// place; the record itself (and its id) lives for the whole session.
#[derive(Debug, Clone)]
pub struct Conversation {
    pub id: ConversationId,
    /// The question as submitted (already trimmed).
    pub question: String,
    /// Raw answer text; rendered through the markup pipeline for display.
    pub answer: String,
    /// Absent when the exchange completed without a judge verdict.
    pub evaluation: Option<Evaluation>,
    pub created_at: DateTime<Local>,
    pub last_updated_at: DateTime<Local>,
    /// User reaction to the *current* answer.  Cleared on regeneration —
    /// feedback judges a specific answer, not the question.
    pub feedback: Option<Feedback>,
}

impl Conversation {
    /// True once the answer has been regenerated at least once.
    pub fn was_regenerated(&self) -> bool {
        self.last_updated_at > self.created_at
    }
}

/// The two one-keystroke reactions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuickFeedback {
    ThumbsUp,
    ThumbsDown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedbackKind {
    ThumbsUp,
    ThumbsDown,
    Comment,
}

/// User reaction attached to a conversation's current answer.
#[derive(Debug, Clone)]
pub struct Feedback {
    pub kind: FeedbackKind,
    /// Present only when `kind == Comment`.
    pub comment: Option<String>,
    pub timestamp: DateTime<Local>,
}

impl Feedback {
    pub fn quick(kind: QuickFeedback) -> Self {
        let kind = match kind {
            QuickFeedback::ThumbsUp => FeedbackKind::ThumbsUp,
            QuickFeedback::ThumbsDown => FeedbackKind::ThumbsDown,
        };
        Self { kind, comment: None, timestamp: Local::now() }
    }

    pub fn comment(text: String) -> Self {
        Self {
            kind: FeedbackKind::Comment,
            comment: Some(text),
            timestamp: Local::now(),
        }
    }
}
