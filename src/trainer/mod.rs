// Model "training": deriving quality metrics from the feedback log
//
// There is no statistical model here. Training means re-deriving a metadata
// snapshot (record count, quality score, version stage) from the immutable
// feedback log. The derivation is pure and idempotent: recomputing with an
// unchanged log yields byte-identical metadata, which also makes it
// restart-safe.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::fs;
use std::path::PathBuf;

use crate::classifier::ContextClassifier;
use crate::error::Result;
use crate::feedback::{FeedbackRecord, FeedbackStore};

/// Lifecycle of the derived model. Transitions are monotone: once
/// `Converged`, additional records keep the score pinned at 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrainingState {
    Uninitialized,
    Training,
    Converged,
}

impl std::fmt::Display for TrainingState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TrainingState::Uninitialized => "uninitialized",
            TrainingState::Training => "training",
            TrainingState::Converged => "converged",
        };
        f.write_str(name)
    }
}

/// Derived model metadata. Never hand-edited: every field is a function of
/// the feedback log contents. `last_trained` is the newest record's
/// timestamp rather than the wall clock, so recomputation stays idempotent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelMetadata {
    pub record_count: usize,
    pub quality_score: f64,
    pub state: TrainingState,
    pub version: String,
    pub last_trained: Option<DateTime<Utc>>,
}

/// Aggregate statistics over the feedback log, for reporting
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingAnalysis {
    pub total_examples: usize,
    pub unique_contexts: usize,
    pub unique_responses: usize,
    pub avg_context_length: f64,
    pub avg_response_length: f64,
    pub category_counts: BTreeMap<String, usize>,
}

/// What `recompute` persists to `model_metadata.json`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelSnapshot {
    pub metadata: ModelMetadata,
    pub analysis: TrainingAnalysis,
}

pub struct ModelTrainer {
    models_dir: PathBuf,
    target_threshold: usize,
    version_stages: usize,
    classifier: ContextClassifier,
}

impl ModelTrainer {
    pub fn new(models_dir: PathBuf, target_threshold: usize, version_stages: usize) -> Self {
        Self {
            models_dir,
            // A zero threshold would make the score undefined
            target_threshold: target_threshold.max(1),
            version_stages: version_stages.max(1),
            classifier: ContextClassifier::new(),
        }
    }

    /// Recompute model metadata from the full feedback log.
    ///
    /// Reads the entire store on every call. That is a deliberate
    /// scalability limit: the log is expected to stay small (hundreds of
    /// records), and a full pass keeps the derivation trivially
    /// deterministic with no incremental state to corrupt.
    pub async fn recompute(&self, store: &FeedbackStore) -> Result<ModelMetadata> {
        let records = store.read_all().await?;

        let metadata = self.derive_metadata(&records);
        let analysis = self.analyze(&records);

        tracing::info!(
            records = metadata.record_count,
            score = metadata.quality_score,
            version = %metadata.version,
            state = %metadata.state,
            "Recomputed model metadata"
        );

        let snapshot = ModelSnapshot {
            metadata: metadata.clone(),
            analysis,
        };
        self.persist(&snapshot)?;

        Ok(metadata)
    }

    /// Read back the last persisted snapshot, if any
    pub fn load_snapshot(&self) -> Result<Option<ModelSnapshot>> {
        let path = self.snapshot_path();
        if !path.exists() {
            return Ok(None);
        }
        let contents = fs::read_to_string(&path)?;
        let snapshot: ModelSnapshot = serde_json::from_str(&contents)?;
        Ok(Some(snapshot))
    }

    pub fn snapshot_path(&self) -> PathBuf {
        self.models_dir.join("model_metadata.json")
    }

    pub fn model_card_path(&self) -> PathBuf {
        self.models_dir.join("model.txt")
    }

    fn derive_metadata(&self, records: &[FeedbackRecord]) -> ModelMetadata {
        let record_count = records.len();
        let quality_score = (record_count as f64 / self.target_threshold as f64).min(1.0);

        let stage = (quality_score * self.version_stages as f64).floor() as usize;
        let version = format!("v{}", stage);

        let state = if record_count == 0 {
            TrainingState::Uninitialized
        } else if quality_score >= 1.0 {
            TrainingState::Converged
        } else {
            TrainingState::Training
        };

        ModelMetadata {
            record_count,
            quality_score,
            state,
            version,
            last_trained: records.last().map(|r| r.timestamp),
        }
    }

    fn analyze(&self, records: &[FeedbackRecord]) -> TrainingAnalysis {
        let total_examples = records.len();

        let unique_contexts = records
            .iter()
            .map(|r| r.context.as_str())
            .collect::<HashSet<_>>()
            .len();

        let all_responses: Vec<&str> = records
            .iter()
            .flat_map(|r| r.candidates.iter().map(String::as_str))
            .collect();
        let unique_responses = all_responses.iter().copied().collect::<HashSet<_>>().len();

        let avg_context_length = if total_examples > 0 {
            records.iter().map(|r| r.context.chars().count()).sum::<usize>() as f64
                / total_examples as f64
        } else {
            0.0
        };

        let avg_response_length = if !all_responses.is_empty() {
            all_responses.iter().map(|r| r.chars().count()).sum::<usize>() as f64
                / all_responses.len() as f64
        } else {
            0.0
        };

        let mut category_counts: BTreeMap<String, usize> = BTreeMap::new();
        for record in records {
            let category = self.classifier.classify(&record.context);
            *category_counts.entry(category.name().to_string()).or_insert(0) += 1;
        }

        TrainingAnalysis {
            total_examples,
            unique_contexts,
            unique_responses,
            avg_context_length,
            avg_response_length,
            category_counts,
        }
    }

    /// Write the snapshot and a human-readable model card, whole-file
    /// replace via temp-then-rename so readers never see a partial file.
    fn persist(&self, snapshot: &ModelSnapshot) -> Result<()> {
        fs::create_dir_all(&self.models_dir)?;

        let json = serde_json::to_string_pretty(snapshot)?;
        write_atomically(&self.snapshot_path(), &json)?;

        let card = render_model_card(snapshot);
        write_atomically(&self.model_card_path(), &card)?;

        Ok(())
    }
}

fn write_atomically(path: &std::path::Path, contents: &str) -> Result<()> {
    let tmp = path.with_extension("tmp");
    fs::write(&tmp, contents)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn render_model_card(snapshot: &ModelSnapshot) -> String {
    let meta = &snapshot.metadata;
    let analysis = &snapshot.analysis;

    let last_trained = meta
        .last_trained
        .map(|t| t.to_rfc3339())
        .unwrap_or_else(|| "never".to_string());

    format!(
        "Banter response model ({version})\n\
         State: {state}\n\
         Quality score: {score:.2}\n\
         Feedback records: {count}\n\
         Unique contexts: {contexts}\n\
         Unique responses: {responses}\n\
         Last trained: {last_trained}\n",
        version = meta.version,
        state = meta.state,
        score = meta.quality_score,
        count = meta.record_count,
        contexts = analysis.unique_contexts,
        responses = analysis.unique_responses,
        last_trained = last_trained,
    )
}
