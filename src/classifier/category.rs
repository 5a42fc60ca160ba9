// Conversation categories

use serde::{Deserialize, Serialize};

/// Emotional/intent bucket a context classifies into.
///
/// The variant order is the match priority: when a context matches keywords
/// from more than one category, the earlier variant wins. `General` is the
/// total-function fallback and never has keywords of its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Greeting,
    Sadness,
    Happiness,
    General,
}

impl Category {
    /// All categories in match-priority order
    pub const ALL: [Category; 4] = [
        Category::Greeting,
        Category::Sadness,
        Category::Happiness,
        Category::General,
    ];

    /// Stable lowercase name, matching the serialized form
    pub fn name(&self) -> &'static str {
        match self {
            Category::Greeting => "greeting",
            Category::Sadness => "sadness",
            Category::Happiness => "happiness",
            Category::General => "general",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_roundtrip_uses_lowercase() {
        let json = serde_json::to_string(&Category::Sadness).unwrap();
        assert_eq!(json, "\"sadness\"");

        let back: Category = serde_json::from_str("\"greeting\"").unwrap();
        assert_eq!(back, Category::Greeting);
    }

    #[test]
    fn test_priority_order() {
        assert_eq!(Category::ALL[0], Category::Greeting);
        assert_eq!(Category::ALL[3], Category::General);
    }
}
