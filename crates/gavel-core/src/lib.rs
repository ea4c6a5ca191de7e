mod conversation;
mod events;
mod store;

pub use conversation::{Conversation, ConversationId, Feedback, FeedbackKind, QuickFeedback};
pub use events::ClientEvent;
pub use store::{ConversationStore, RegenerateRefusal};
