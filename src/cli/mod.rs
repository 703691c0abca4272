//! Command-line interface.
//!
//! This module contains the CLI parser and dispatches to command-specific
//! modules.

mod extract;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "nerd")]
#[command(about = "Named-entity recognition microservice")]
#[command(version)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP service
    Serve {
        /// Bind address: port, host, or host:port
        #[arg(long, env = "NERD_BIND", default_value = "127.0.0.1:8000")]
        bind: String,

        /// Path to a model artifact (defaults to the embedded model)
        #[arg(long, env = "NERD_MODEL")]
        model: Option<PathBuf>,
    },

    /// Extract entities from text and print them as JSON
    Extract {
        /// Text to annotate (reads stdin when omitted)
        text: Option<String>,

        /// Read the text from a file instead
        #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Path to a model artifact (defaults to the embedded model)
        #[arg(long, env = "NERD_MODEL")]
        model: Option<PathBuf>,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { bind, model } => serve::cmd_serve(&bind, model).await,
        Commands::Extract { text, file, model } => extract::cmd_extract(text, file, model).await,
    }
}
