// Template pool library

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::classifier::Category;

/// Per-category reply template pools.
///
/// Ships with built-in pools; a deployment can replace them wholesale with a
/// JSON file (`pool_file` in the config). Missing categories in the file
/// fall back to empty pools, which the generator degrades around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TemplateLibrary {
    #[serde(default)]
    pub greeting: Vec<String>,
    #[serde(default)]
    pub sadness: Vec<String>,
    #[serde(default)]
    pub happiness: Vec<String>,
    #[serde(default)]
    pub general: Vec<String>,
}

impl TemplateLibrary {
    /// Built-in template pools
    pub fn builtin() -> Self {
        Self {
            greeting: vec![
                "Hey there! How's your day going?".to_string(),
                "Hi! It's really nice to hear from you.".to_string(),
                "Hello! What have you been up to?".to_string(),
                "Hey! I was hoping you'd write.".to_string(),
                "Hi there! Tell me something good about your day.".to_string(),
                "Well hello! You just made my day better.".to_string(),
            ],
            sadness: vec![
                "I'm sorry to hear that. Is there anything I can do to help?".to_string(),
                "It's okay to feel sad sometimes. I'm here for you.".to_string(),
                "Sending you a virtual hug.".to_string(),
                "I'm here to listen if you want to talk about it.".to_string(),
                "Remember that this feeling will pass. You're strong.".to_string(),
                "Let me know if there's anything I can do to make you feel better.".to_string(),
                "You are not alone - I'm right here with you.".to_string(),
            ],
            happiness: vec![
                "You have a great smile!".to_string(),
                "I'm not a photographer, but I can picture us together.".to_string(),
                "Are you a magician? Because whenever I look at you, everyone else disappears."
                    .to_string(),
                "Do you believe in love at first sight, or should I walk by again?".to_string(),
                "If you were a vegetable, you'd be a cute-cumber.".to_string(),
                "Is it hot in here, or is it just our conversation?".to_string(),
                "If beauty were time, you'd be eternity.".to_string(),
            ],
            general: vec![
                "That's interesting - tell me more!".to_string(),
                "I hadn't thought about it that way before.".to_string(),
                "What happened next?".to_string(),
                "How did that make you feel?".to_string(),
                "I'd love to hear more about that.".to_string(),
                "Sounds like quite a story!".to_string(),
            ],
        }
    }

    /// Load template pools from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read template pool file: {}", path.display()))?;

        let library: TemplateLibrary =
            serde_json::from_str(&contents).context("Failed to parse template pool file")?;

        tracing::info!(path = %path.display(), "Loaded template pools");
        Ok(library)
    }

    /// Templates for one category
    pub fn pool(&self, category: Category) -> &[String] {
        match category {
            Category::Greeting => &self.greeting,
            Category::Sadness => &self.sadness,
            Category::Happiness => &self.happiness,
            Category::General => &self.general,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_builtin_pools_are_nonempty() {
        let library = TemplateLibrary::builtin();
        for category in Category::ALL {
            assert!(
                !library.pool(category).is_empty(),
                "empty builtin pool for {}",
                category
            );
        }
    }

    #[test]
    fn test_load_from_file_with_missing_categories() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{\"sadness\": [\"There, there.\"]}}").unwrap();

        let library = TemplateLibrary::load_from_file(file.path()).unwrap();
        assert_eq!(library.sadness, vec!["There, there.".to_string()]);
        assert!(library.greeting.is_empty());
    }

    #[test]
    fn test_load_from_missing_file_fails() {
        assert!(TemplateLibrary::load_from_file(Path::new("/nonexistent/pools.json")).is_err());
    }
}
