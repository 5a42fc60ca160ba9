// Integration tests for the response-generation-and-learning engine

use anyhow::Result;
use std::collections::HashSet;
use std::sync::Arc;

use banter::classifier::Category;
use banter::config::EngineConfig;
use banter::generator::ContentFilter;
use banter::trainer::TrainingState;
use banter::Engine;

fn engine_in(dir: &std::path::Path) -> Engine {
    let config = EngineConfig {
        data_dir: dir.to_path_buf(),
        ..Default::default()
    };
    Engine::new(config).unwrap()
}

#[tokio::test]
async fn test_sad_context_end_to_end() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let engine = engine_in(dir.path());

    let category = engine.classify("I'm feeling sad today")?;
    assert_eq!(category, Category::Sadness);

    let candidates = engine.generate(category, 5);
    assert_eq!(candidates.len(), 5);

    let unique: HashSet<_> = candidates.iter().collect();
    assert_eq!(unique.len(), 5, "candidates must be distinct");
    assert!(candidates.iter().all(|c| !c.is_empty()));

    let filter = ContentFilter::new(&[
        "hate".to_string(),
        "kill".to_string(),
        "die".to_string(),
    ])?;
    assert!(candidates.iter().all(|c| filter.is_clean(c)));

    let record = engine
        .record("I'm feeling sad today", &candidates, &candidates[0])
        .await?;
    assert_eq!(record.sequence, 0);
    assert_eq!(record.candidates, candidates);

    Ok(())
}

#[tokio::test]
async fn test_invalid_feedback_leaves_store_unchanged() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let engine = engine_in(dir.path());

    let candidates = engine.generate(Category::General, 5);
    engine
        .record("something happened", &candidates, &candidates[1])
        .await?;

    let result = engine
        .record("something happened", &candidates, "never offered")
        .await;
    assert!(result.is_err());

    let metadata = engine.recompute().await?;
    assert_eq!(metadata.record_count, 1);

    Ok(())
}

#[tokio::test]
async fn test_concurrent_writers_lose_no_records() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let engine = Arc::new(engine_in(dir.path()));

    const WRITERS: usize = 32;
    let mut handles = Vec::new();

    for i in 0..WRITERS {
        let engine = Arc::clone(&engine);
        handles.push(tokio::spawn(async move {
            let context = format!("writer {} checking in", i);
            let candidates = engine.generate(Category::General, 5);
            engine.record(&context, &candidates, &candidates[0]).await
        }));
    }

    let mut sequences = HashSet::new();
    for handle in handles {
        let record = handle.await??;
        sequences.insert(record.sequence);
    }

    // Every writer got a distinct sequence and every record survived
    assert_eq!(sequences.len(), WRITERS);
    let metadata = engine.recompute().await?;
    assert_eq!(metadata.record_count, WRITERS);

    Ok(())
}

#[tokio::test]
async fn test_records_survive_restart() -> Result<()> {
    let dir = tempfile::tempdir()?;

    {
        let engine = engine_in(dir.path());
        let candidates = engine.generate(Category::Greeting, 5);
        engine.record("hi there", &candidates, &candidates[0]).await?;
        engine
            .record("hello again", &candidates, &candidates[1])
            .await?;
    }

    // New engine over the same data dir sees the earlier records
    let engine = engine_in(dir.path());
    let metadata = engine.recompute().await?;
    assert_eq!(metadata.record_count, 2);

    let candidates = engine.generate(Category::Greeting, 5);
    let record = engine
        .record("hey, back once more", &candidates, &candidates[0])
        .await?;
    assert_eq!(record.sequence, 2);

    Ok(())
}

#[tokio::test]
async fn test_quality_score_lifecycle() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let engine = engine_in(dir.path());

    // Uninitialized
    let metadata = engine.recompute().await?;
    assert_eq!(metadata.record_count, 0);
    assert_eq!(metadata.quality_score, 0.0);
    assert_eq!(metadata.version, "v0");
    assert_eq!(metadata.state, TrainingState::Uninitialized);

    let candidates = engine.generate(Category::General, 5);

    // Training at 25%
    for i in 0..25 {
        engine
            .record(&format!("context {}", i), &candidates, &candidates[0])
            .await?;
    }
    let metadata = engine.recompute().await?;
    assert!((metadata.quality_score - 0.25).abs() < f64::EPSILON);
    assert_eq!(metadata.version, "v1");
    assert_eq!(metadata.state, TrainingState::Training);

    // Converged at the threshold
    for i in 25..100 {
        engine
            .record(&format!("context {}", i), &candidates, &candidates[0])
            .await?;
    }
    let metadata = engine.recompute().await?;
    assert_eq!(metadata.quality_score, 1.0);
    assert_eq!(metadata.version, "v4");
    assert_eq!(metadata.state, TrainingState::Converged);

    // One more record keeps the score pinned
    engine
        .record("context 100", &candidates, &candidates[0])
        .await?;
    let metadata = engine.recompute().await?;
    assert_eq!(metadata.record_count, 101);
    assert_eq!(metadata.quality_score, 1.0);
    assert_eq!(metadata.state, TrainingState::Converged);

    Ok(())
}

#[tokio::test]
async fn test_recompute_idempotent_across_calls() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let engine = engine_in(dir.path());

    let candidates = engine.generate(Category::Happiness, 5);
    for i in 0..10 {
        engine
            .record(&format!("so happy about {}", i), &candidates, &candidates[0])
            .await?;
    }

    let first = engine.recompute().await?;
    let second = engine.recompute().await?;
    assert_eq!(first, second);

    Ok(())
}

#[tokio::test]
async fn test_classification_table() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let engine = engine_in(dir.path());

    let cases = [
        ("hello, how are you doing?", Category::Greeting),
        ("I'm feeling sad today", Category::Sadness),
        ("I am so happy right now", Category::Happiness),
        ("the meeting got moved to tuesday", Category::General),
    ];

    for (context, expected) in cases {
        assert_eq!(engine.classify(context)?, expected, "context: {}", context);
    }

    Ok(())
}
