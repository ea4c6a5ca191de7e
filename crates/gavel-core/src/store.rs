// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! The conversation store: single source of truth for every exchange.
//!
//! All mutation happens on the UI event loop — transport calls run in a
//! background task and come back as [`crate::ClientEvent`]s, so the store
//! never needs interior locking.  The one synchronization primitive in the
//! whole application is the regeneration slot: an owned
//! `Option<ConversationId>` that admits at most one regeneration across the
//! entire store, mutated only through the check-and-set in
//! [`ConversationStore::begin_regeneration`].

use chrono::Local;
use gavel_client::Evaluation;
use tracing::debug;

use crate::{Conversation, ConversationId, Feedback, QuickFeedback};

/// Why a `regenerate` request was refused (both cases are silent no-ops at
/// the UI; the reason is only logged).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegenerateRefusal {
    /// Another regeneration is already in flight.  Global admission control:
    /// this refuses regeneration of *any* conversation, not just the one
    /// currently regenerating.
    InFlight(ConversationId),
    /// The id does not reference a stored conversation.
    UnknownId,
}

#[derive(Default)]
pub struct ConversationStore {
    /// Newest-first: completed exchanges prepend.
    conversations: Vec<Conversation>,
    next_id: u64,
    /// The single in-flight regeneration slot.
    regenerating: Option<ConversationId>,
    /// Conversation whose feedback composer is open, if any.
    composer: Option<ConversationId>,
    /// Process-wide transient error surface, dismissible from the UI.
    transient_error: Option<String>,
    /// Number of `ask` calls currently in flight (asks are unconstrained:
    /// each completion creates its own independent conversation).
    asks_in_flight: usize,
}

impl ConversationStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Read access ───────────────────────────────────────────────────────────

    /// All conversations, newest first.
    pub fn conversations(&self) -> &[Conversation] {
        &self.conversations
    }

    pub fn get(&self, id: ConversationId) -> Option<&Conversation> {
        self.conversations.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.conversations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.conversations.is_empty()
    }

    pub fn regenerating(&self) -> Option<ConversationId> {
        self.regenerating
    }

    pub fn asks_in_flight(&self) -> usize {
        self.asks_in_flight
    }

    /// True while any transport call is outstanding.
    pub fn is_busy(&self) -> bool {
        self.asks_in_flight > 0 || self.regenerating.is_some()
    }

    pub fn transient_error(&self) -> Option<&str> {
        self.transient_error.as_deref()
    }

    pub fn composer_target(&self) -> Option<ConversationId> {
        self.composer
    }

    // ── Ask ───────────────────────────────────────────────────────────────────

    /// Validate a question for submission: trimmed and non-empty.
    /// Returns the trimmed text, or `None` for the silent no-op case.
    pub fn validate_question(text: &str) -> Option<String> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }

    /// Record that an `ask` transport call was issued.
    pub fn note_ask_started(&mut self) {
        self.asks_in_flight += 1;
    }

    /// Apply a successful `ask`: prepend a new conversation with a fresh id
    /// and no feedback.  Insertion order is completion order by construction
    /// — concurrent asks land in whatever order the service answers.
    pub fn complete_ask(
        &mut self,
        question: String,
        answer: String,
        evaluation: Option<Evaluation>,
    ) -> ConversationId {
        self.asks_in_flight = self.asks_in_flight.saturating_sub(1);
        self.next_id += 1;
        let id = ConversationId(self.next_id);
        let now = Local::now();
        self.conversations.insert(
            0,
            Conversation {
                id,
                question,
                answer,
                evaluation,
                created_at: now,
                last_updated_at: now,
                feedback: None,
            },
        );
        debug!(%id, total = self.conversations.len(), "conversation created");
        id
    }

    /// Apply a failed `ask`: no conversation is created, only the transient
    /// error surface changes.
    pub fn fail_ask(&mut self, message: String) {
        self.asks_in_flight = self.asks_in_flight.saturating_sub(1);
        self.transient_error = Some(message);
    }

    // ── Regenerate ────────────────────────────────────────────────────────────

    /// Claim the regeneration slot for `id` and return the original question
    /// text for the transport call.
    ///
    /// Check-and-set: the caller either gets the slot together with the
    /// question, or a refusal — there is no observable state in between, so
    /// two callers can never both proceed.
    pub fn begin_regeneration(
        &mut self,
        id: ConversationId,
    ) -> Result<String, RegenerateRefusal> {
        if let Some(pending) = self.regenerating {
            debug!(%id, %pending, "regeneration refused: one already in flight");
            return Err(RegenerateRefusal::InFlight(pending));
        }
        let question = match self.get(id) {
            Some(conv) => conv.question.clone(),
            None => return Err(RegenerateRefusal::UnknownId),
        };
        self.regenerating = Some(id);
        Ok(question)
    }

    /// Apply a successful regeneration: replace the answer and evaluation in
    /// place, refresh `last_updated_at`, clear feedback, release the slot.
    pub fn complete_regeneration(
        &mut self,
        id: ConversationId,
        answer: String,
        evaluation: Option<Evaluation>,
    ) {
        if self.regenerating == Some(id) {
            self.regenerating = None;
        }
        if let Some(conv) = self.conversations.iter_mut().find(|c| c.id == id) {
            conv.answer = answer;
            conv.evaluation = evaluation;
            conv.last_updated_at = Local::now();
            conv.feedback = None;
            debug!(%id, "conversation regenerated");
        }
    }

    /// Apply a failed regeneration: the conversation is left untouched, the
    /// slot is released, and the transient error is set.
    pub fn fail_regeneration(&mut self, id: ConversationId, message: String) {
        if self.regenerating == Some(id) {
            self.regenerating = None;
        }
        self.transient_error = Some(message);
    }

    // ── Feedback ──────────────────────────────────────────────────────────────

    /// Replace any existing feedback on `id` with a quick reaction.
    /// Returns false when `id` is unknown.
    pub fn set_quick_feedback(&mut self, id: ConversationId, kind: QuickFeedback) -> bool {
        match self.conversations.iter_mut().find(|c| c.id == id) {
            Some(conv) => {
                conv.feedback = Some(Feedback::quick(kind));
                true
            }
            None => false,
        }
    }

    /// Open the comment composer for `id`.  Modal and singular: a composer
    /// already open for another conversation is closed without saving.
    /// Returns false when `id` is unknown.
    pub fn open_composer(&mut self, id: ConversationId) -> bool {
        if self.get(id).is_none() {
            return false;
        }
        self.composer = Some(id);
        true
    }

    pub fn cancel_composer(&mut self) {
        self.composer = None;
    }

    /// Attach a comment to `id` and close the composer.
    ///
    /// No-op (returns false, composer stays open) when the trimmed text is
    /// empty or `id` is unknown.
    pub fn submit_comment(&mut self, id: ConversationId, text: &str) -> bool {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return false;
        }
        match self.conversations.iter_mut().find(|c| c.id == id) {
            Some(conv) => {
                conv.feedback = Some(Feedback::comment(trimmed.to_string()));
                self.composer = None;
                true
            }
            None => false,
        }
    }

    // ── Error surface ─────────────────────────────────────────────────────────

    pub fn set_error(&mut self, message: String) {
        self.transient_error = Some(message);
    }

    pub fn dismiss_error(&mut self) {
        self.transient_error = None;
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
