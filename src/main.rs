//! nerd - named-entity recognition microservice.
//!
//! Accepts raw text over HTTP and returns named-entity annotations produced
//! by a pre-trained tagging model loaded once at process start.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (before anything else)
    let _ = dotenvy::dotenv();

    // Initialize logging based on verbosity
    let default_filter = if nerd::cli::is_verbose() {
        "nerd=info,tower_http=debug"
    } else {
        "nerd=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Run CLI
    nerd::cli::run().await
}
