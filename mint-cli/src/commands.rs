//! CLI Commands
//!
//! Argument definitions for the mint command-line interface.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Pixel-art NFT mint CLI
#[derive(Parser, Debug)]
#[command(name = "mint")]
#[command(version)]
#[command(about = "Mint pixel-art NFTs: upload assets and list them on the marketplace")]
#[command(long_about = "A command-line tool for minting pixel-art NFTs.\n\n\
    Uploads the image and its metadata document to a content-addressed store, \
    then submits the listing through the marketplace gateway.")]
pub struct Cli {
    /// Content store API URL (env: MINT_STORE_API_URL)
    #[arg(
        long,
        env = "MINT_STORE_API_URL",
        default_value = "https://ipfs.infura.io:5001"
    )]
    pub store_api_url: String,

    /// Gateway base for retrieval URIs (env: MINT_STORE_GATEWAY_URL)
    #[arg(
        long,
        env = "MINT_STORE_GATEWAY_URL",
        default_value = "https://ipfs.infura.io/ipfs"
    )]
    pub gateway_url: String,

    /// Marketplace gateway URL (env: MINT_MARKET_URL)
    #[arg(long, env = "MINT_MARKET_URL", default_value = "http://127.0.0.1:4001")]
    pub market_url: String,

    /// Content store backend (env: MINT_STORE)
    #[arg(long, env = "MINT_STORE", default_value = "ipfs")]
    pub store: StoreBackend,

    /// Wallet account to list from (env: MINT_ACCOUNT)
    #[arg(long, env = "MINT_ACCOUNT")]
    pub account: Option<String>,

    /// Output format (json, table, plain)
    #[arg(short, long, default_value = "table")]
    pub format: OutputFormat,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Table format (human-readable)
    Table,
    /// Plain text
    Plain,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Table
    }
}

/// Content store backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum StoreBackend {
    /// IPFS HTTP API client
    Ipfs,
    /// In-memory store for offline development runs
    Mem,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Mint an NFT: upload image and metadata, then list it for sale
    Mint {
        /// Path to the image file
        #[arg(short, long)]
        image: PathBuf,
        /// NFT display name
        #[arg(short, long)]
        name: String,
        /// NFT description
        #[arg(short, long)]
        description: String,
        /// Listing price (decimal)
        #[arg(short, long)]
        price: String,
    },

    /// Upload a single asset to the content store and print its URI
    Upload {
        /// Path to the file to upload
        file: PathBuf,
    },

    /// Check health of the content store and marketplace gateway
    Health,

    /// Inspect configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration subcommands
#[derive(Subcommand, Debug)]
pub enum ConfigCommands {
    /// Print the effective configuration
    Show,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_mint_command_parses() {
        let cli = Cli::parse_from([
            "mint", "mint", "--image", "cat.png", "--name", "Pixel Cat", "--description", "8x8",
            "--price", "0.05",
        ]);
        match cli.command {
            Commands::Mint { name, price, .. } => {
                assert_eq!(name, "Pixel Cat");
                assert_eq!(price, "0.05");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_format_default() {
        let cli = Cli::parse_from(["mint", "health"]);
        assert_eq!(cli.format, OutputFormat::Table);
    }

    #[test]
    fn test_store_backend_flag() {
        let cli = Cli::parse_from(["mint", "health"]);
        assert_eq!(cli.store, StoreBackend::Ipfs);

        let cli = Cli::parse_from(["mint", "--store", "mem", "health"]);
        assert_eq!(cli.store, StoreBackend::Mem);
    }

    #[test]
    fn test_config_show_parses() {
        let cli = Cli::parse_from(["mint", "config", "show"]);
        assert!(matches!(
            cli.command,
            Commands::Config {
                command: ConfigCommands::Show
            }
        ));
    }
}
