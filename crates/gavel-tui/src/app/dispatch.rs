// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Action dispatcher: maps every `Action` variant to `App` state mutations.

use gavel_core::QuickFeedback;

use crate::{
    app::{App, FocusPane},
    keys::Action,
    overlay::FeedbackComposer,
};

impl App {
    // ── Action dispatcher ─────────────────────────────────────────────────────

    pub(crate) async fn dispatch(&mut self, action: Action) -> bool {
        match action {
            Action::FocusInput => {
                self.focus = FocusPane::Input;
            }
            Action::FocusConversations => {
                self.focus = FocusPane::Conversations;
            }

            // ── Selection and scrolling ───────────────────────────────────────
            Action::SelectPrev => {
                self.selected = self.selected.saturating_sub(1);
                self.rebuild_display();
                self.scroll_to_selected();
            }
            Action::SelectNext => {
                if !self.store.is_empty() {
                    self.selected = (self.selected + 1).min(self.store.len() - 1);
                    self.rebuild_display();
                    self.scroll_to_selected();
                }
            }
            Action::ScrollPageUp => {
                self.scroll_offset = self.scroll_offset.saturating_sub(self.pane_height / 2);
            }
            Action::ScrollPageDown => {
                self.scroll_offset =
                    (self.scroll_offset + self.pane_height / 2).min(self.max_scroll());
            }
            Action::ScrollTop => {
                self.selected = 0;
                self.scroll_offset = 0;
                self.rebuild_display();
            }
            Action::ScrollBottom => {
                if !self.store.is_empty() {
                    self.selected = self.store.len() - 1;
                }
                self.rebuild_display();
                self.scroll_offset = self.max_scroll();
            }

            // ── Conversation operations ───────────────────────────────────────
            Action::Regenerate => {
                self.regenerate_selected().await;
            }
            Action::ThumbsUp => {
                if let Some(id) = self.selected_id() {
                    self.store.set_quick_feedback(id, QuickFeedback::ThumbsUp);
                    self.rebuild_display();
                }
            }
            Action::ThumbsDown => {
                if let Some(id) = self.selected_id() {
                    self.store.set_quick_feedback(id, QuickFeedback::ThumbsDown);
                    self.rebuild_display();
                }
            }
            Action::OpenComposer => {
                if let Some(id) = self.selected_id() {
                    if self.store.open_composer(id) {
                        self.composer = Some(FeedbackComposer::new(id));
                    }
                }
            }
            Action::DismissError => {
                self.store.dismiss_error();
            }

            // ── Input editing ─────────────────────────────────────────────────
            Action::InputChar(c) => self.input.insert_char(c),
            Action::InputNewline => self.input.insert_newline(),
            Action::InputBackspace => self.input.backspace(),
            Action::InputDelete => self.input.delete(),
            Action::InputMoveCursorLeft => self.input.move_left(),
            Action::InputMoveCursorRight => self.input.move_right(),
            Action::InputMoveLineStart => self.input.move_line_start(),
            Action::InputMoveLineEnd => self.input.move_line_end(),
            Action::InputDeleteToStart => self.input.delete_to_start(),
            Action::InputDeleteToEnd => self.input.delete_to_end(),
            Action::Submit => {
                self.submit_input().await;
            }

            // ── App ───────────────────────────────────────────────────────────
            Action::Help => {
                self.show_help = !self.show_help;
            }
            Action::Quit => return true,
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use gavel_core::FeedbackKind;

    #[tokio::test]
    async fn selection_moves_and_clamps() {
        let (mut app, _rx) = App::for_testing();
        app.inject_conversation("q1", "a1");
        app.inject_conversation("q2", "a2");

        assert_eq!(app.selected, 0);
        app.dispatch_action(Action::SelectNext).await;
        assert_eq!(app.selected, 1);
        app.dispatch_action(Action::SelectNext).await;
        assert_eq!(app.selected, 1, "selection clamps at the oldest card");
        app.dispatch_action(Action::SelectPrev).await;
        assert_eq!(app.selected, 0);
        app.dispatch_action(Action::SelectPrev).await;
        assert_eq!(app.selected, 0, "selection clamps at the newest card");
    }

    #[tokio::test]
    async fn thumbs_actions_set_feedback_on_selected() {
        let (mut app, _rx) = App::for_testing();
        let id = app.inject_conversation("q", "a");

        app.dispatch_action(Action::ThumbsUp).await;
        assert_eq!(
            app.store.get(id).unwrap().feedback.as_ref().unwrap().kind,
            FeedbackKind::ThumbsUp
        );

        app.dispatch_action(Action::ThumbsDown).await;
        assert_eq!(
            app.store.get(id).unwrap().feedback.as_ref().unwrap().kind,
            FeedbackKind::ThumbsDown
        );
    }

    #[tokio::test]
    async fn open_composer_targets_selected_conversation() {
        let (mut app, _rx) = App::for_testing();
        let id = app.inject_conversation("q", "a");

        app.dispatch_action(Action::OpenComposer).await;
        assert!(app.composer.is_some());
        assert_eq!(app.store.composer_target(), Some(id));
    }

    #[tokio::test]
    async fn composer_noop_with_no_conversations() {
        let (mut app, _rx) = App::for_testing();
        app.dispatch_action(Action::OpenComposer).await;
        assert!(app.composer.is_none());
    }

    #[tokio::test]
    async fn quit_returns_true() {
        let (mut app, _rx) = App::for_testing();
        assert!(app.dispatch_action(Action::Quit).await);
    }

    #[tokio::test]
    async fn dismiss_error_clears_surface() {
        let (mut app, _rx) = App::for_testing();
        app.store.set_error("boom".into());
        app.dispatch_action(Action::DismissError).await;
        assert!(app.store.transient_error().is_none());
    }
}
