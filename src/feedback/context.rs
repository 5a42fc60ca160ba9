// Validated conversation context

use crate::error::{EngineError, Result};

/// A sanitized, length-bounded conversation context.
///
/// Construction is the single validation point: downstream components
/// (classifier, store) assume a `ConversationContext` is non-empty and
/// within bounds. Control characters are stripped so the text is safe to
/// persist as a single JSONL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversationContext(String);

impl ConversationContext {
    pub fn new(raw: &str, max_chars: usize) -> Result<Self> {
        let sanitized: String = raw
            .trim()
            .chars()
            .filter(|c| !c.is_control())
            .collect();

        if sanitized.is_empty() {
            return Err(EngineError::Validation(
                "context is empty".to_string(),
            ));
        }

        let len = sanitized.chars().count();
        if len > max_chars {
            return Err(EngineError::Validation(format!(
                "context is {} characters, maximum is {}",
                len, max_chars
            )));
        }

        Ok(Self(sanitized))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl std::fmt::Display for ConversationContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
