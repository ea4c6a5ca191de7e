// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Unified submission path — documentation and integration tests.
//!
//! # Ask lifecycle
//!
//! **Step 1** — `Action::Submit` (`app/dispatch.rs`) calls
//! [`App::submit_input`] with the input buffer.
//!
//! **Step 2** — `ConversationStore::validate_question` trims the text; an
//! empty result is a silent no-op (the buffer is left untouched so the user
//! sees nothing happened on a blank submit).
//!
//! **Step 3** — the buffer is cleared, the store counts the ask in flight,
//! and a `ClientRequest::Ask` goes to the background client task.  Asks are
//! unconstrained: submitting again while one is pending just runs a second
//! request; each completion creates its own conversation.
//!
//! **Step 4** — the client task answers with `ClientEvent::AskCompleted` /
//! `AskFailed` (`app/client_events.rs`), which the store turns into a new
//! head conversation or a transient error.
//!
//! # Regenerate lifecycle
//!
//! `Action::Regenerate` resolves the selected conversation and asks the
//! store for admission via the check-and-set `begin_regeneration`.  At most
//! one regeneration is in flight across the whole store; a refusal is a
//! silent no-op (logged at debug).  The claimed question is re-sent as
//! `ClientRequest::Regenerate`, and the completion replaces the answer in
//! place, clearing any feedback.

use tracing::debug;

use crate::app::App;
use crate::client_task::ClientRequest;
use gavel_core::ConversationStore;

impl App {
    // ── Submit path ───────────────────────────────────────────────────────────

    /// Validate and submit the input buffer as a new question.
    pub(crate) async fn submit_input(&mut self) {
        let Some(question) = ConversationStore::validate_question(&self.input.buffer) else {
            return;
        };
        self.input.clear();
        self.store.note_ask_started();
        if let Some(tx) = &self.client_tx {
            let _ = tx.send(ClientRequest::Ask { question }).await;
        }
        self.rebuild_display();
    }

    /// Request a fresh answer for the selected conversation.
    pub(crate) async fn regenerate_selected(&mut self) {
        let Some(id) = self.selected_id() else {
            return;
        };
        match self.store.begin_regeneration(id) {
            Ok(question) => {
                if let Some(tx) = &self.client_tx {
                    let _ = tx.send(ClientRequest::Regenerate { id, question }).await;
                }
                self.rebuild_display();
            }
            Err(refusal) => {
                debug!(%id, ?refusal, "regeneration not admitted");
            }
        }
    }
}

// ── Integration tests ─────────────────────────────────────────────────────────
//
// These exercise the full "user action → ClientRequest channel" path through
// the real App + ConversationStore machinery with a mock client receiver.
