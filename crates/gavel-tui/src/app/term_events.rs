// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Terminal event handler: keyboard, mouse, and resize dispatch.

use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseEventKind};

use crate::{
    app::{App, FocusPane},
    keys::map_key,
};

impl App {
    // ── Terminal event handler ────────────────────────────────────────────────

    pub(crate) async fn handle_term_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(k) if k.kind == KeyEventKind::Press => {
                if self.show_help {
                    self.show_help = false;
                    return false;
                }
                if self.composer.is_some() {
                    return self.handle_composer_key(k);
                }

                let in_input = self.focus == FocusPane::Input;
                match map_key(k, in_input) {
                    Some(action) => self.dispatch(action).await,
                    None => false,
                }
            }
            Event::Mouse(m) => {
                // Wheel events only scroll when the pointer is over the
                // conversations pane.
                let pos = ratatui::layout::Position::new(m.column, m.row);
                if self.last_conversations_pane.contains(pos) {
                    match m.kind {
                        MouseEventKind::ScrollUp => {
                            self.scroll_offset = self.scroll_offset.saturating_sub(3);
                        }
                        MouseEventKind::ScrollDown => {
                            self.scroll_offset =
                                (self.scroll_offset + 3).min(self.max_scroll());
                        }
                        _ => {}
                    }
                }
                false
            }
            // A resize is picked up by the size check at the top of the run
            // loop on the next iteration.
            _ => false,
        }
    }

    /// Keys while the feedback composer modal is open.  The modal swallows
    /// everything except quit.
    fn handle_composer_key(&mut self, k: KeyEvent) -> bool {
        let ctrl = k.modifiers.contains(KeyModifiers::CONTROL);
        let shift = k.modifiers.contains(KeyModifiers::SHIFT);

        let Some(composer) = &mut self.composer else {
            return false;
        };
        match k.code {
            KeyCode::Char('q') | KeyCode::Char('c') if ctrl => return true,
            KeyCode::Esc => {
                self.store.cancel_composer();
                self.composer = None;
            }
            KeyCode::Enter if shift => composer.edit.insert_newline(),
            KeyCode::Enter => {
                let id = composer.conversation;
                let text = composer.edit.buffer.clone();
                // Empty text is a no-op and the composer stays open.
                if self.store.submit_comment(id, &text) {
                    self.composer = None;
                    self.rebuild_display();
                }
            }
            KeyCode::Backspace => composer.edit.backspace(),
            KeyCode::Delete => composer.edit.delete(),
            KeyCode::Left => composer.edit.move_left(),
            KeyCode::Right => composer.edit.move_right(),
            KeyCode::Home => composer.edit.move_line_start(),
            KeyCode::End => composer.edit.move_line_end(),
            KeyCode::Char('u') if ctrl => composer.edit.delete_to_start(),
            KeyCode::Char('k') if ctrl => composer.edit.delete_to_end(),
            KeyCode::Char(c) if !ctrl => composer.edit.insert_char(c),
            _ => {}
        }
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::Action;
    use gavel_core::FeedbackKind;

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        })
    }

    #[tokio::test]
    async fn typing_reaches_the_input_buffer() {
        let (mut app, _rx) = App::for_testing();
        app.handle_term_event(key(KeyCode::Char('h'))).await;
        app.handle_term_event(key(KeyCode::Char('i'))).await;
        assert_eq!(app.input.buffer, "hi");
    }

    #[tokio::test]
    async fn composer_swallows_keys_and_submits_comment() {
        let (mut app, _rx) = App::for_testing();
        let id = app.inject_conversation("q", "a");
        app.dispatch_action(Action::OpenComposer).await;

        for c in "too vague".chars() {
            app.handle_term_event(key(KeyCode::Char(c))).await;
        }
        assert!(app.input.buffer.is_empty(), "input pane must not receive keys");

        app.handle_term_event(key(KeyCode::Enter)).await;
        assert!(app.composer.is_none(), "composer closes on submit");
        let feedback = app.store.get(id).unwrap().feedback.as_ref().unwrap();
        assert_eq!(feedback.kind, FeedbackKind::Comment);
        assert_eq!(feedback.comment.as_deref(), Some("too vague"));
    }

    #[tokio::test]
    async fn empty_comment_submit_keeps_composer_open() {
        let (mut app, _rx) = App::for_testing();
        let id = app.inject_conversation("q", "a");
        app.dispatch_action(Action::OpenComposer).await;

        app.handle_term_event(key(KeyCode::Char(' '))).await;
        app.handle_term_event(key(KeyCode::Enter)).await;

        assert!(app.composer.is_some(), "no-op submit keeps the composer open");
        assert!(app.store.get(id).unwrap().feedback.is_none());
        assert_eq!(app.store.composer_target(), Some(id));
    }

    #[tokio::test]
    async fn escape_cancels_composer_without_feedback() {
        let (mut app, _rx) = App::for_testing();
        let id = app.inject_conversation("q", "a");
        app.dispatch_action(Action::OpenComposer).await;

        app.handle_term_event(key(KeyCode::Char('x'))).await;
        app.handle_term_event(key(KeyCode::Esc)).await;

        assert!(app.composer.is_none());
        assert!(app.store.composer_target().is_none());
        assert!(app.store.get(id).unwrap().feedback.is_none());
    }

    #[tokio::test]
    async fn help_closes_on_any_key() {
        let (mut app, _rx) = App::for_testing();
        app.dispatch_action(Action::Help).await;
        assert!(app.show_help);
        app.handle_term_event(key(KeyCode::Char('z'))).await;
        assert!(!app.show_help);
    }
}
