// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
use gavel_client::Evaluation;

use crate::ConversationId;

/// Events emitted by the background client task when a transport call
/// resolves.  The UI loop applies each one to the [`crate::ConversationStore`];
/// no store mutation happens off the loop.
#[derive(Debug)]
pub enum ClientEvent {
    /// An `ask` call returned successfully.
    AskCompleted {
        question: String,
        answer: String,
        evaluation: Option<Evaluation>,
    },
    /// An `ask` call failed in transport; no conversation is created.
    AskFailed { message: String },
    /// The in-flight regeneration returned successfully.
    RegenerateCompleted {
        id: ConversationId,
        answer: String,
        evaluation: Option<Evaluation>,
    },
    /// The in-flight regeneration failed; the conversation is left untouched.
    RegenerateFailed { id: ConversationId, message: String },
}
