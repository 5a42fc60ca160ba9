// Content filter for candidate replies

use anyhow::{Context, Result};
use regex::RegexBuilder;

/// Case-insensitive denylist filter.
///
/// Tokens match on word boundaries, so "kill" flags "kill it" but not
/// "skillet". The list is language-agnostic: tokens are matched literally
/// after regex escaping, no stemming.
pub struct ContentFilter {
    pattern: Option<regex::Regex>,
}

impl ContentFilter {
    pub fn new(denylist: &[String]) -> Result<Self> {
        if denylist.is_empty() {
            return Ok(Self { pattern: None });
        }

        let alternation = denylist
            .iter()
            .map(|token| regex::escape(token))
            .collect::<Vec<_>>()
            .join("|");

        let pattern = RegexBuilder::new(&format!(r"\b(?:{})\b", alternation))
            .case_insensitive(true)
            .build()
            .context("Failed to compile denylist pattern")?;

        Ok(Self {
            pattern: Some(pattern),
        })
    }

    /// True when the text contains no denylisted token
    pub fn is_clean(&self, text: &str) -> bool {
        match &self.pattern {
            Some(pattern) => !pattern.is_match(text),
            None => true,
        }
    }
}
