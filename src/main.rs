// Banter - conversational reply assistant
// Main entry point

use anyhow::Result;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (RUST_LOG controls verbosity)
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    banter::cli::run().await
}
