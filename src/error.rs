// Engine error taxonomy
//
// Every fallible engine operation returns one of these; nothing in the
// engine panics or terminates the process. Pool exhaustion is deliberately
// absent: generation degrades to a fallback instead of failing.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Precondition violation: empty or over-length context
    #[error("validation error: {0}")]
    Validation(String),

    /// The chosen reply was not among the candidates shown
    #[error("invalid feedback: chosen reply is not one of the offered candidates")]
    InvalidFeedback,

    /// I/O failure while touching the feedback log or model artifacts
    #[error("storage error: {0}")]
    Storage(#[from] std::io::Error),

    /// A record or snapshot could not be (de)serialized
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result alias for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = EngineError::Validation("context is empty".to_string());
        assert!(err.to_string().contains("context is empty"));

        let err = EngineError::InvalidFeedback;
        assert!(err.to_string().contains("not one of the offered"));
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: EngineError = io.into();
        assert!(matches!(err, EngineError::Storage(_)));
    }

    #[test]
    fn test_serde_error_converts() {
        let parse = serde_json::from_str::<serde_json::Value>("{broken").unwrap_err();
        let err: EngineError = parse.into();
        assert!(matches!(err, EngineError::Serialization(_)));
    }
}
