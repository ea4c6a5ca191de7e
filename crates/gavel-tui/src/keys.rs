// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// All logical actions the TUI can perform, independent of key binding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Navigation
    FocusConversations,
    FocusInput,

    // Conversations pane
    SelectPrev,
    SelectNext,
    ScrollPageUp,
    ScrollPageDown,
    ScrollTop,
    ScrollBottom,
    Regenerate,
    ThumbsUp,
    ThumbsDown,
    OpenComposer,
    DismissError,

    // Input
    InputChar(char),
    InputNewline,
    InputBackspace,
    InputDelete,
    InputMoveCursorLeft,
    InputMoveCursorRight,
    InputMoveLineStart,
    InputMoveLineEnd,
    InputDeleteToEnd,
    InputDeleteToStart,
    Submit,

    // App
    Quit,
    Help,
}

/// Map a raw key event to an [`Action`], depending on which pane has focus.
/// The feedback composer intercepts keys before this map is consulted.
pub fn map_key(event: KeyEvent, in_input: bool) -> Option<Action> {
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let alt = event.modifiers.contains(KeyModifiers::ALT);
    let shift = event.modifiers.contains(KeyModifiers::SHIFT);
    // "plain" = no modifier that would make a char a control sequence
    let plain = !ctrl && !alt;

    match event.code {
        // ── Input-pane overrides come FIRST so they shadow global bindings ────
        // Ctrl+u — delete to line start
        KeyCode::Char('u') if ctrl && in_input => Some(Action::InputDeleteToStart),
        // Ctrl+k — delete to line end
        KeyCode::Char('k') if ctrl && in_input => Some(Action::InputDeleteToEnd),

        // ── Global bindings ───────────────────────────────────────────────────
        KeyCode::Char('q') if ctrl => Some(Action::Quit),
        KeyCode::Char('c') if ctrl => Some(Action::Quit),
        KeyCode::Tab => Some(if in_input {
            Action::FocusConversations
        } else {
            Action::FocusInput
        }),
        KeyCode::F(1) => Some(Action::Help),

        // ── Rest of input pane ────────────────────────────────────────────────
        KeyCode::Enter if in_input && !shift => Some(Action::Submit),
        KeyCode::Enter if in_input && shift => Some(Action::InputNewline),
        KeyCode::Backspace if in_input => Some(Action::InputBackspace),
        KeyCode::Delete if in_input => Some(Action::InputDelete),
        KeyCode::Left if in_input => Some(Action::InputMoveCursorLeft),
        KeyCode::Right if in_input => Some(Action::InputMoveCursorRight),
        KeyCode::Home if in_input => Some(Action::InputMoveLineStart),
        KeyCode::End if in_input => Some(Action::InputMoveLineEnd),
        // Printable characters — only when no ctrl/alt modifier
        KeyCode::Char(c) if in_input && plain => Some(Action::InputChar(c)),

        // ── Conversations pane ────────────────────────────────────────────────
        KeyCode::Up | KeyCode::Char('k') if !in_input && plain => Some(Action::SelectPrev),
        KeyCode::Down | KeyCode::Char('j') if !in_input && plain => Some(Action::SelectNext),
        KeyCode::Char('u') if ctrl && !in_input => Some(Action::ScrollPageUp),
        KeyCode::Char('d') if ctrl && !in_input => Some(Action::ScrollPageDown),
        KeyCode::Char('g') if !in_input && plain => Some(Action::ScrollTop),
        KeyCode::Char('G') if !in_input => Some(Action::ScrollBottom),
        KeyCode::Char('r') if !in_input && plain => Some(Action::Regenerate),
        KeyCode::Char('y') if !in_input && plain => Some(Action::ThumbsUp),
        KeyCode::Char('n') if !in_input && plain => Some(Action::ThumbsDown),
        KeyCode::Char('c') if !in_input && plain => Some(Action::OpenComposer),
        KeyCode::Char('x') if !in_input && plain => Some(Action::DismissError),
        KeyCode::Esc if !in_input => Some(Action::FocusInput),

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn enter_submits_from_input() {
        let a = map_key(key(KeyCode::Enter, KeyModifiers::NONE), true);
        assert_eq!(a, Some(Action::Submit));
    }

    #[test]
    fn shift_enter_inserts_newline() {
        let a = map_key(key(KeyCode::Enter, KeyModifiers::SHIFT), true);
        assert_eq!(a, Some(Action::InputNewline));
    }

    #[test]
    fn ctrl_c_quits_everywhere() {
        for in_input in [true, false] {
            let a = map_key(key(KeyCode::Char('c'), KeyModifiers::CONTROL), in_input);
            assert_eq!(a, Some(Action::Quit));
        }
    }

    #[test]
    fn plain_c_types_in_input_but_opens_composer_in_conversations() {
        let typed = map_key(key(KeyCode::Char('c'), KeyModifiers::NONE), true);
        assert_eq!(typed, Some(Action::InputChar('c')));
        let composer = map_key(key(KeyCode::Char('c'), KeyModifiers::NONE), false);
        assert_eq!(composer, Some(Action::OpenComposer));
    }

    #[test]
    fn regenerate_only_outside_input() {
        assert_eq!(
            map_key(key(KeyCode::Char('r'), KeyModifiers::NONE), false),
            Some(Action::Regenerate)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('r'), KeyModifiers::NONE), true),
            Some(Action::InputChar('r'))
        );
    }

    #[test]
    fn tab_toggles_focus() {
        assert_eq!(
            map_key(key(KeyCode::Tab, KeyModifiers::NONE), true),
            Some(Action::FocusConversations)
        );
        assert_eq!(
            map_key(key(KeyCode::Tab, KeyModifiers::NONE), false),
            Some(Action::FocusInput)
        );
    }

    #[test]
    fn ctrl_u_is_kill_in_input_and_page_in_conversations() {
        assert_eq!(
            map_key(key(KeyCode::Char('u'), KeyModifiers::CONTROL), true),
            Some(Action::InputDeleteToStart)
        );
        assert_eq!(
            map_key(key(KeyCode::Char('u'), KeyModifiers::CONTROL), false),
            Some(Action::ScrollPageUp)
        );
    }
}
