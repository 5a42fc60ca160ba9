// Candidate reply generation
//
// Pure over (category, pool state, randomness): never touches storage.
// Generation fails closed - when a pool cannot yield enough clean
// candidates the result is padded with a marked fallback instead of
// erroring.

mod filter;
mod pool;

pub use filter::ContentFilter;
pub use pool::TemplateLibrary;

use rand::seq::SliceRandom;

use crate::classifier::Category;

/// Returned in place of missing candidates when a pool is exhausted.
/// The bracket tag lets the caller render it differently.
pub const FALLBACK_RESPONSE: &str =
    "[fallback] I'm not sure what to say to that, but I'm glad we're talking!";

pub struct ResponseGenerator {
    library: TemplateLibrary,
    filter: ContentFilter,
}

impl ResponseGenerator {
    pub fn new(library: TemplateLibrary, filter: ContentFilter) -> Self {
        Self { library, filter }
    }

    /// Produce up to `count` distinct clean candidates for `category`.
    ///
    /// Templates that trip the content filter are dropped and replaced by
    /// further draws. If the pool cannot yield `count` clean candidates the
    /// shortfall is covered by a single appended fallback string; that is a
    /// degraded outcome, not an error.
    pub fn generate(&self, category: Category, count: usize) -> Vec<String> {
        if count == 0 {
            return Vec::new();
        }

        let pool = self.library.pool(category);
        let clean: Vec<&String> = pool.iter().filter(|t| self.filter.is_clean(t)).collect();

        let rejected = pool.len() - clean.len();
        if rejected > 0 {
            tracing::debug!(
                category = %category,
                rejected,
                "Dropped templates that failed the content filter"
            );
        }

        let mut rng = rand::thread_rng();
        let mut candidates: Vec<String> = clean
            .choose_multiple(&mut rng, count)
            .map(|s| (*s).clone())
            .collect();
        // choose_multiple does not promise a random order
        candidates.shuffle(&mut rng);

        if candidates.len() < count {
            tracing::warn!(
                category = %category,
                requested = count,
                available = candidates.len(),
                "Template pool exhausted, appending fallback"
            );
            candidates.push(FALLBACK_RESPONSE.to_string());
        }

        candidates
    }
}
