// Engine facade
//
// Owns the classifier, generator, feedback store and trainer, and exposes
// the four public operations the outer layers (CLI, web) call. Callers
// never touch the feedback log directly; the store is an exclusively-owned
// resource behind this API.

use anyhow::Context;

use crate::classifier::{Category, ContextClassifier};
use crate::config::EngineConfig;
use crate::error::Result;
use crate::feedback::{ConversationContext, FeedbackRecord, FeedbackStore};
use crate::generator::{ContentFilter, ResponseGenerator, TemplateLibrary};
use crate::trainer::{ModelMetadata, ModelSnapshot, ModelTrainer};

pub struct Engine {
    config: EngineConfig,
    classifier: ContextClassifier,
    generator: ResponseGenerator,
    store: FeedbackStore,
    trainer: ModelTrainer,
}

impl Engine {
    pub fn new(config: EngineConfig) -> anyhow::Result<Self> {
        let library = match &config.pool_file {
            Some(path) => TemplateLibrary::load_from_file(path)?,
            None => TemplateLibrary::builtin(),
        };
        let filter = ContentFilter::new(&config.denylist)?;

        let store = FeedbackStore::open(config.feedback_log_path())
            .context("Failed to open feedback store")?;
        let trainer = ModelTrainer::new(
            config.models_dir(),
            config.target_threshold,
            config.version_stages,
        );

        Ok(Self {
            config,
            classifier: ContextClassifier::new(),
            generator: ResponseGenerator::new(library, filter),
            store,
            trainer,
        })
    }

    /// Validate and classify a raw context string
    pub fn classify(&self, raw_context: &str) -> Result<Category> {
        let context = ConversationContext::new(raw_context, self.config.max_context_chars)?;
        Ok(self.classifier.classify(context.as_str()))
    }

    /// Generate candidate replies for a category. Never fails: pool
    /// exhaustion degrades to fewer candidates plus a fallback.
    pub fn generate(&self, category: Category, count: usize) -> Vec<String> {
        self.generator.generate(category, count)
    }

    /// Persist one human choice as a feedback record
    pub async fn record(
        &self,
        raw_context: &str,
        candidates: &[String],
        chosen: &str,
    ) -> Result<FeedbackRecord> {
        let context = ConversationContext::new(raw_context, self.config.max_context_chars)?;
        self.store.record(&context, candidates, chosen).await
    }

    /// Recompute model metadata from the accumulated feedback
    pub async fn recompute(&self) -> Result<ModelMetadata> {
        self.trainer.recompute(&self.store).await
    }

    /// Last persisted training snapshot, for reporting
    pub fn last_snapshot(&self) -> Result<Option<ModelSnapshot>> {
        self.trainer.load_snapshot()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }
}
