// Keyword-based context matcher

use super::category::Category;

/// Single-word keywords match whole words of the normalized context;
/// multi-word phrases match as substrings. Listed per category in the
/// priority order of `Category::ALL`.
const GREETING_KEYWORDS: &[&str] = &[
    "hello",
    "hi",
    "hey",
    "howdy",
    "greetings",
    "good morning",
    "good afternoon",
    "good evening",
    "what's up",
];

const SADNESS_KEYWORDS: &[&str] = &[
    "sad",
    "down",
    "unhappy",
    "depressed",
    "lonely",
    "heartbroken",
    "crying",
    "cried",
    "upset",
    "miserable",
    "miss you",
    "miss her",
    "miss him",
    "broke up",
];

const HAPPINESS_KEYWORDS: &[&str] = &[
    "happy",
    "glad",
    "great",
    "excited",
    "wonderful",
    "amazing",
    "awesome",
    "fantastic",
    "joy",
    "love",
    "best day",
];

/// Classifies a conversation context into exactly one category.
///
/// Classification is total: input that matches nothing falls back to
/// `Category::General`. The caller is responsible for validating the raw
/// input first (non-empty, length-bounded); this matcher assumes it holds.
pub struct ContextClassifier;

impl ContextClassifier {
    pub fn new() -> Self {
        Self
    }

    /// Classify normalized context text, first match wins
    pub fn classify(&self, context: &str) -> Category {
        let normalized = normalize(context);
        let words = tokenize(&normalized);

        for category in Category::ALL {
            let keywords = match category {
                Category::Greeting => GREETING_KEYWORDS,
                Category::Sadness => SADNESS_KEYWORDS,
                Category::Happiness => HAPPINESS_KEYWORDS,
                Category::General => continue,
            };

            if keywords.iter().any(|kw| matches(kw, &normalized, &words)) {
                tracing::debug!(category = %category, "Context matched category");
                return category;
            }
        }

        Category::General
    }
}

impl Default for ContextClassifier {
    fn default() -> Self {
        Self::new()
    }
}

fn normalize(text: &str) -> String {
    text.trim().to_lowercase()
}

/// Split into words, stripping punctuation but keeping in-word apostrophes
/// so "what's" and "i'm" survive as single tokens.
fn tokenize(normalized: &str) -> Vec<String> {
    normalized
        .split_whitespace()
        .map(|word| {
            word.chars()
                .filter(|c| c.is_alphanumeric() || *c == '\'')
                .collect::<String>()
        })
        .filter(|word| !word.is_empty())
        .collect()
}

fn matches(keyword: &str, normalized: &str, words: &[String]) -> bool {
    if keyword.contains(' ') {
        normalized.contains(keyword)
    } else {
        words.iter().any(|w| w == keyword)
    }
}
