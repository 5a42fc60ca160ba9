// Feedback capture and persistence
//
// The store is the only mutable state in the engine. Records are append-only
// JSONL, written through a single serialized path so concurrent callers can
// never tear or lose a write.

mod context;
mod record;
mod store;

pub use context::ConversationContext;
pub use record::FeedbackRecord;
pub use store::FeedbackStore;
