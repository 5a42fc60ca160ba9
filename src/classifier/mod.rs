// Context classification
//
// Maps free-text conversation context to a closed category set. Pure and
// deterministic: the same input always lands in the same bucket.

mod category;
mod matcher;

pub use category::Category;
pub use matcher::ContextClassifier;
