// Copyright (c) 2024-2026 Gavel Contributors
//
// SPDX-License-Identifier: MIT
//! Top-level TUI application state and event loop.

pub(crate) mod client_events;
pub(crate) mod dispatch;
pub(crate) mod term_events;

use std::sync::Arc;

use crossterm::event::EventStream;
use futures::StreamExt;
use gavel_client::EvaluatorClient;
use gavel_config::Config;
use gavel_core::{ClientEvent, ConversationId, ConversationStore};
use ratatui::layout::Rect;
use ratatui::DefaultTerminal;
use ratatui::Frame;
use tokio::sync::mpsc;

use crate::{
    client_task::{client_task, ClientRequest},
    editor::TextEdit,
    layout::AppLayout,
    markup::StyledLines,
    overlay::FeedbackComposer,
    view::cards::{conversation_lines, empty_state_lines},
    widgets::{
        draw_composer, draw_conversations, draw_error, draw_help, draw_input, draw_status,
    },
};

/// Options passed when constructing the TUI app.
pub struct AppOptions {
    /// Question submitted automatically on startup (from the CLI positional).
    pub initial_question: Option<String>,
    /// Force ASCII rendering regardless of config.
    pub ascii: bool,
}

/// Which pane currently holds keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusPane {
    Conversations,
    Input,
}

/// The top-level TUI application state.
pub struct App {
    pub(crate) config: Arc<Config>,
    /// Single source of truth for all conversation state.
    pub(crate) store: ConversationStore,
    pub(crate) focus: FocusPane,
    /// Pre-rendered display lines for the conversations pane.
    pub(crate) lines: StyledLines,
    /// For each conversation index: `(start_line, end_line)` in `lines`.
    /// Rebuilt whenever `rebuild_display` runs.
    pub(crate) card_ranges: Vec<(usize, usize)>,
    pub(crate) scroll_offset: u16,
    /// Index into `store.conversations()` of the selected card.
    pub(crate) selected: usize,
    pub(crate) input: TextEdit,
    /// Active feedback composer modal, if any.
    pub(crate) composer: Option<FeedbackComposer>,
    pub(crate) show_help: bool,
    pub(crate) client_tx: Option<mpsc::Sender<ClientRequest>>,
    pub(crate) event_rx: Option<mpsc::Receiver<ClientEvent>>,
    pub(crate) endpoint_label: String,
    /// Last known inner width of the conversations pane (sans border).
    /// Used to pre-wrap content to the exact available width.
    pub(crate) last_inner_width: u16,
    pub(crate) pane_height: u16,
    pub(crate) last_conversations_pane: Rect,
    pub(crate) ascii_override: bool,
    initial_question: Option<String>,
}

impl App {
    pub fn new(config: Arc<Config>, opts: AppOptions) -> Self {
        let endpoint_label = if config.service.display_name.is_empty() {
            config.service.base_url.clone()
        } else {
            config.service.display_name.clone()
        };
        Self {
            config,
            store: ConversationStore::new(),
            focus: FocusPane::Input,
            lines: Vec::new(),
            card_ranges: Vec::new(),
            scroll_offset: 0,
            selected: 0,
            input: TextEdit::default(),
            composer: None,
            show_help: false,
            client_tx: None,
            event_rx: None,
            endpoint_label,
            // Reasonable defaults before the first frame is drawn.
            last_inner_width: 78,
            pane_height: 24,
            last_conversations_pane: Rect::default(),
            ascii_override: opts.ascii,
            initial_question: opts.initial_question,
        }
    }

    /// Run the TUI event loop against the given transport client.
    pub async fn run(
        mut self,
        mut terminal: DefaultTerminal,
        client: Arc<dyn EvaluatorClient>,
    ) -> anyhow::Result<()> {
        let (req_tx, req_rx) = mpsc::channel::<ClientRequest>(64);
        let (event_tx, event_rx) = mpsc::channel::<ClientEvent>(256);

        self.client_tx = Some(req_tx);
        self.event_rx = Some(event_rx);
        tokio::spawn(client_task(client, req_rx, event_tx));

        if let Some(question) = self.initial_question.take() {
            self.input.set(&question);
            self.submit_input().await;
        }
        self.rebuild_display();

        let mut term_events = EventStream::new();

        loop {
            if let Ok(size) = terminal.size() {
                let layout = AppLayout::compute(
                    Rect::new(0, 0, size.width, size.height),
                    self.store.transient_error().is_some(),
                );
                self.pane_height = layout.conversations_inner_height().max(1);
                let inner_width = layout.conversations_pane.width.saturating_sub(2).max(20);
                if inner_width != self.last_inner_width {
                    self.last_inner_width = inner_width;
                    self.rebuild_display();
                }
                self.last_conversations_pane = layout.conversations_pane;
            }

            terminal.draw(|frame| self.draw_frame(frame))?;

            tokio::select! {
                Some(event) = self.recv_client_event() => {
                    self.handle_client_event(event);
                }
                Some(Ok(term_event)) = term_events.next() => {
                    if self.handle_term_event(term_event).await {
                        break;
                    }
                }
            }
        }

        Ok(())
    }

    fn draw_frame(&mut self, frame: &mut Frame) {
        let ascii = self.ascii();
        let layout = AppLayout::new(frame, self.store.transient_error().is_some());

        draw_status(
            frame,
            layout.status_bar,
            &self.endpoint_label,
            self.store.asks_in_flight(),
            self.store.regenerating().is_some(),
            self.store.len(),
            ascii,
        );
        draw_conversations(
            frame,
            layout.conversations_pane,
            &self.lines,
            self.scroll_offset,
            self.focus == FocusPane::Conversations,
            ascii,
        );
        draw_input(
            frame,
            layout.input_pane,
            &self.input,
            self.focus == FocusPane::Input && self.composer.is_none(),
            self.store.is_busy(),
            ascii,
        );
        if let Some(message) = self.store.transient_error() {
            draw_error(frame, layout.error_bar, message);
        }
        if let Some(composer) = &self.composer {
            draw_composer(frame, composer, ascii);
        }
        if self.show_help {
            draw_help(frame, ascii);
        }
    }

    async fn recv_client_event(&mut self) -> Option<ClientEvent> {
        if let Some(rx) = &mut self.event_rx { rx.recv().await } else { None }
    }

    pub(crate) fn ascii(&self) -> bool {
        if std::env::var("GAVEL_ASCII").as_deref() == Ok("1") {
            return true;
        }
        self.ascii_override || self.config.tui.ascii
    }

    // ── Display ───────────────────────────────────────────────────────────────

    /// Rebuild `lines` and `card_ranges` from the store.
    pub(crate) fn rebuild_display(&mut self) {
        let ascii = self.ascii();
        let bar_cols: u16 = 2;
        let effective_width = self.last_inner_width.saturating_sub(bar_cols).max(20);
        let render_width = if self.config.tui.wrap_width == 0 {
            effective_width
        } else {
            self.config.tui.wrap_width.min(effective_width)
        };

        if !self.store.is_empty() {
            self.selected = self.selected.min(self.store.len() - 1);
        } else {
            self.selected = 0;
        }

        let mut all_lines = StyledLines::new();
        let mut ranges = Vec::new();

        if self.store.is_empty() {
            all_lines = empty_state_lines();
        } else {
            for (i, conv) in self.store.conversations().iter().enumerate() {
                let regenerating = self.store.regenerating() == Some(conv.id);
                let card = conversation_lines(
                    conv,
                    i == self.selected,
                    regenerating,
                    render_width,
                    ascii,
                );
                let start = all_lines.len();
                all_lines.extend(card);
                all_lines.push(ratatui::text::Line::default());
                ranges.push((start, all_lines.len()));
            }
        }

        self.lines = all_lines;
        self.card_ranges = ranges;
        self.clamp_scroll();
    }

    pub(crate) fn selected_id(&self) -> Option<ConversationId> {
        self.store.conversations().get(self.selected).map(|c| c.id)
    }

    // ── Scroll helpers ────────────────────────────────────────────────────────

    pub(crate) fn max_scroll(&self) -> u16 {
        (self.lines.len() as u16).saturating_sub(self.pane_height)
    }

    pub(crate) fn clamp_scroll(&mut self) {
        self.scroll_offset = self.scroll_offset.min(self.max_scroll());
    }

    /// Scroll so the selected card's first line is visible.
    pub(crate) fn scroll_to_selected(&mut self) {
        let Some(&(start, end)) = self.card_ranges.get(self.selected) else {
            return;
        };
        let start = start as u16;
        let end = end as u16;
        if start < self.scroll_offset {
            self.scroll_offset = start;
        } else if end > self.scroll_offset + self.pane_height {
            // Show as much of the card as fits, keeping its first line on screen.
            self.scroll_offset = start.min(self.max_scroll());
        }
    }
}

// ── Test helpers ──────────────────────────────────────────────────────────────

#[cfg(test)]
impl App {
    /// Construct a minimal `App` suitable for integration tests.
    ///
    /// The returned receiver is the mock client channel; call `rx.try_recv()`
    /// to assert on requests dispatched by submit actions.
    pub fn for_testing() -> (Self, mpsc::Receiver<ClientRequest>) {
        let config = Arc::new(Config::default());
        let opts = AppOptions { initial_question: None, ascii: true };
        let (tx, rx) = mpsc::channel(64);
        let mut app = Self::new(config, opts);
        app.client_tx = Some(tx);
        (app, rx)
    }

    /// Set the input buffer as if the user typed `text`.
    pub fn inject_input(&mut self, text: &str) {
        self.input.set(text);
    }

    /// Drive `dispatch()` from tests (it is normally private).
    pub async fn dispatch_action(&mut self, action: crate::keys::Action) -> bool {
        self.dispatch(action).await
    }

    /// Seed a completed conversation directly into the store.
    pub fn inject_conversation(&mut self, question: &str, answer: &str) -> ConversationId {
        self.store.note_ask_started();
        let id = self.store.complete_ask(
            question.to_string(),
            answer.to_string(),
            Some(gavel_client::sample_evaluation()),
        );
        self.rebuild_display();
        id
    }
}
