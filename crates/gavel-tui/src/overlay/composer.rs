//! Feedback composer modal: free-text comment entry for one conversation.

use gavel_core::ConversationId;

use crate::editor::TextEdit;

/// Active feedback composer state.  The target conversation is also tracked
/// by the store (which enforces the one-composer-at-a-time rule); this holds
/// the text being edited.  Opening always starts from an empty buffer, even
/// when quick feedback already exists on the conversation.
pub struct FeedbackComposer {
    pub conversation: ConversationId,
    pub edit: TextEdit,
}

impl FeedbackComposer {
    pub fn new(conversation: ConversationId) -> Self {
        Self { conversation, edit: TextEdit::default() }
    }
}
