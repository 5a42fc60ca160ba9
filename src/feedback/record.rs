// Feedback record type

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One labeled feedback example: what was asked, what was shown, what the
/// human picked. Immutable once written; (timestamp, sequence) is the
/// unique key within a log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FeedbackRecord {
    /// Unique ID for this record
    pub id: String,

    /// Position in the append-only log, starting at 0
    pub sequence: u64,

    /// When the feedback was submitted
    pub timestamp: DateTime<Utc>,

    /// The sanitized conversation context
    pub context: String,

    /// Candidates shown to the human, in display order
    pub candidates: Vec<String>,

    /// The candidate the human picked (always one of `candidates`)
    pub chosen: String,
}

impl FeedbackRecord {
    pub fn new(sequence: u64, context: String, candidates: Vec<String>, chosen: String) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            sequence,
            timestamp: Utc::now(),
            context,
            candidates,
            chosen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_assigns_id_and_timestamp() {
        let before = Utc::now();
        let record = FeedbackRecord::new(
            3,
            "feeling sad".to_string(),
            vec!["a".to_string(), "b".to_string()],
            "b".to_string(),
        );
        let after = Utc::now();

        assert!(!record.id.is_empty());
        assert_eq!(record.sequence, 3);
        assert!(record.timestamp >= before && record.timestamp <= after);
    }

    #[test]
    fn test_serde_roundtrip() {
        let record = FeedbackRecord::new(
            0,
            "ctx".to_string(),
            vec!["x".to_string()],
            "x".to_string(),
        );
        let json = serde_json::to_string(&record).unwrap();
        let back: FeedbackRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, record.id);
        assert_eq!(back.sequence, 0);
        assert_eq!(back.chosen, "x");
    }
}
