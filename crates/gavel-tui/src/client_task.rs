// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Background client task and its request channel type.

use std::sync::Arc;

use gavel_client::EvaluatorClient;
use gavel_core::{ClientEvent, ConversationId};
use tokio::sync::mpsc;
use tracing::debug;

/// Request sent from the UI to the background client task.
#[derive(Debug)]
pub enum ClientRequest {
    /// Submit a new question.
    Ask { question: String },
    /// Re-ask the original question for an existing conversation.  Admission
    /// (at most one in flight) is decided by the store before this is sent.
    Regenerate { id: ConversationId, question: String },
}

/// Background task that owns the transport client and forwards completions
/// back to the UI loop.
///
/// Each request runs in its own subtask, so several `Ask` calls may be in
/// flight at once; events arrive in completion order, which is exactly the
/// display order the store wants.
pub async fn client_task(
    client: Arc<dyn EvaluatorClient>,
    mut rx: mpsc::Receiver<ClientRequest>,
    tx: mpsc::Sender<ClientEvent>,
) {
    while let Some(req) = rx.recv().await {
        let client = client.clone();
        let tx = tx.clone();
        tokio::spawn(async move {
            let event = match req {
                ClientRequest::Ask { question } => match client.ask(&question).await {
                    Ok(resp) => ClientEvent::AskCompleted {
                        question,
                        answer: resp.answer,
                        evaluation: resp.evaluation,
                    },
                    Err(e) => {
                        debug!(error = %e, "ask failed");
                        ClientEvent::AskFailed { message: e.user_message() }
                    }
                },
                ClientRequest::Regenerate { id, question } => {
                    match client.ask(&question).await {
                        Ok(resp) => ClientEvent::RegenerateCompleted {
                            id,
                            answer: resp.answer,
                            evaluation: resp.evaluation,
                        },
                        Err(e) => {
                            debug!(%id, error = %e, "regeneration failed");
                            ClientEvent::RegenerateFailed { id, message: e.user_message() }
                        }
                    }
                }
            };
            let _ = tx.send(event).await;
        });
    }
}
