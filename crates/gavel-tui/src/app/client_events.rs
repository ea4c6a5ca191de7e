// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Client event handler: applies transport completions to the store.

use gavel_core::ClientEvent;

use crate::app::App;

impl App {
    // ── Client event handler ──────────────────────────────────────────────────

    pub(crate) fn handle_client_event(&mut self, event: ClientEvent) {
        match event {
            ClientEvent::AskCompleted { question, answer, evaluation } => {
                self.store.complete_ask(question, answer, evaluation);
                // The new exchange lands at the head; select it and show it.
                self.selected = 0;
                self.scroll_offset = 0;
            }
            ClientEvent::AskFailed { message } => {
                self.store.fail_ask(message);
            }
            ClientEvent::RegenerateCompleted { id, answer, evaluation } => {
                self.store.complete_regeneration(id, answer, evaluation);
            }
            ClientEvent::RegenerateFailed { id, message } => {
                self.store.fail_regeneration(id, message);
            }
        }
        self.rebuild_display();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_core::QuickFeedback;

    #[tokio::test]
    async fn completion_order_decides_display_order() {
        let (mut app, _rx) = App::for_testing();
        // Two asks issued in one order…
        app.store.note_ask_started();
        app.store.note_ask_started();
        // …but completing in the other.
        app.handle_client_event(ClientEvent::AskCompleted {
            question: "issued second".into(),
            answer: "a".into(),
            evaluation: None,
        });
        app.handle_client_event(ClientEvent::AskCompleted {
            question: "issued first".into(),
            answer: "b".into(),
            evaluation: None,
        });

        assert_eq!(app.store.conversations()[0].question, "issued first");
        assert_eq!(app.store.conversations()[1].question, "issued second");
    }

    #[tokio::test]
    async fn regeneration_clears_feedback() {
        let (mut app, _rx) = App::for_testing();
        let id = app.inject_conversation("q", "a");
        app.store.set_quick_feedback(id, QuickFeedback::ThumbsUp);
        app.store.begin_regeneration(id).unwrap();

        app.handle_client_event(ClientEvent::RegenerateCompleted {
            id,
            answer: "fresh".into(),
            evaluation: None,
        });

        let conv = app.store.get(id).unwrap();
        assert!(conv.feedback.is_none());
        assert_eq!(conv.answer, "fresh");
    }
}
