// CLI for the banter engine
//
// Thin layer over the engine's four operations: an interactive feedback
// collection loop, a train command, and a status report.

mod chat;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;
use crate::engine::Engine;

#[derive(Parser)]
#[command(name = "banter")]
#[command(about = "Conversational reply assistant that learns from your picks", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to a config file (default: ~/.banter/config.toml)
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactively collect feedback: context in, candidates out, pick one
    Chat,
    /// Recompute model metadata from the feedback log and print a report
    Train,
    /// Show the current model status
    Status,
}

pub async fn run() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => config::load_config_from(path)?,
        None => config::load_config()?,
    };
    let engine = Engine::new(config)?;

    match cli.command {
        Commands::Chat => chat::run(&engine).await,
        Commands::Train => run_train(&engine).await,
        Commands::Status => run_status(&engine).await,
    }
}

async fn run_train(engine: &Engine) -> Result<()> {
    let metadata = engine.recompute().await?;

    println!("Training complete.");
    print_metadata(&metadata);

    if let Some(snapshot) = engine.last_snapshot()? {
        let analysis = &snapshot.analysis;
        println!();
        println!("Training data:");
        println!("  Unique contexts:     {}", analysis.unique_contexts);
        println!("  Unique responses:    {}", analysis.unique_responses);
        println!("  Avg context length:  {:.1}", analysis.avg_context_length);
        println!("  Avg response length: {:.1}", analysis.avg_response_length);
        if !analysis.category_counts.is_empty() {
            println!("  Categories:");
            for (category, count) in &analysis.category_counts {
                println!("    {:<10} {}", category, count);
            }
        }
    }

    Ok(())
}

async fn run_status(engine: &Engine) -> Result<()> {
    let metadata = engine.recompute().await?;
    print_metadata(&metadata);
    Ok(())
}

fn print_metadata(metadata: &crate::trainer::ModelMetadata) {
    println!("Model version:   {}", metadata.version);
    println!("State:           {}", metadata.state);
    println!("Quality score:   {:.2}", metadata.quality_score);
    println!("Feedback records: {}", metadata.record_count);
    if let Some(last) = metadata.last_trained {
        println!("Last feedback:   {}", last.to_rfc3339());
    }
}
