//! Mint CLI Entry Point
//!
//! Command-line interface for the pixel-art NFT mint pipeline.
//!
//! Configuration is loaded from environment variables (via .env file);
//! command-line arguments override environment variables.
//!
//! Usage:
//!   mint mint --image cat.png --name "Pixel Cat" --description "8x8" --price 0.05
//!   mint upload cat.png   - upload a single asset, print its URI
//!   mint health           - check content store and marketplace gateway
//!   mint config show      - show effective configuration

mod commands;
mod error;
mod handler;
mod output;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use commands::Cli;

#[tokio::main]
async fn main() {
    // Load .env file (ignore if not found)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    if cli.verbose {
        init_logging();
    }

    if let Err(e) = handler::run(cli).await {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

/// Initialize logging with tracing
fn init_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mint_cli=debug,mint_pipeline=debug,mint_store=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}
