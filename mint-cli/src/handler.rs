//! Command Handlers
//!
//! Dispatches parsed CLI commands onto the pipeline library. The content
//! store backend is chosen up front; every command body is generic over
//! [`ContentStore`].

use serde_json::json;

use mint_core::{ImageSource, MintForm};
use mint_pipeline::{Account, HttpMarketplace, MarketConfig, Marketplace, MintPipeline};
use mint_store::{ContentStore, IpfsClient, MemoryStore, StoreConfig};

use crate::commands::{Cli, Commands, ConfigCommands, OutputFormat, StoreBackend};
use crate::error::{CliError, CliResult};
use crate::output::{self, ConsoleNotifier};

/// Run the parsed CLI command
pub async fn run(cli: Cli) -> CliResult<()> {
    match cli.store {
        StoreBackend::Ipfs => {
            let store = IpfsClient::new(store_config(&cli))?;
            dispatch(cli, store).await
        }
        StoreBackend::Mem => {
            let store = MemoryStore::new(cli.gateway_url.clone());
            dispatch(cli, store).await
        }
    }
}

/// Effective store configuration: environment first, CLI flags on top
fn store_config(cli: &Cli) -> StoreConfig {
    StoreConfig {
        api_url: cli.store_api_url.clone(),
        gateway_url: cli.gateway_url.clone(),
        ..StoreConfig::from_env()
    }
}

/// Effective marketplace configuration: environment first, CLI flags on top
fn market_config(cli: &Cli) -> MarketConfig {
    MarketConfig {
        base_url: cli.market_url.clone(),
        ..MarketConfig::from_env()
    }
}

async fn dispatch<S: ContentStore>(cli: Cli, store: S) -> CliResult<()> {
    match cli.command {
        Commands::Mint {
            ref image,
            ref name,
            ref description,
            ref price,
        } => {
            let account = cli
                .account
                .as_deref()
                .map(Account::new)
                .ok_or_else(|| CliError::config("No wallet account: set --account or MINT_ACCOUNT"))?;

            let bytes = tokio::fs::read(image).await?;
            if bytes.is_empty() {
                return Err(CliError::invalid_arg(format!(
                    "image file is empty: {}",
                    image.display()
                )));
            }

            let mut form = MintForm::new();
            form.set_name(name);
            form.set_description(description);
            form.set_price(price);
            form.set_image(ImageSource::Bytes(bytes));

            let market = HttpMarketplace::new(market_config(&cli))?;
            let mut pipeline = MintPipeline::new(store, market, ConsoleNotifier);

            match pipeline.submit(&form, &account).await {
                Ok(outcome) => {
                    if let Some(receipt) = &outcome.receipt {
                        output::print_receipt(receipt, outcome.route, cli.format);
                    }
                    Ok(())
                }
                Err(e) => {
                    if let Some(route) = e.route() {
                        eprintln!("Fix the listing details and retry: {}", route.path());
                    }
                    Err(e.into())
                }
            }
        }

        Commands::Upload { ref file } => {
            let bytes = tokio::fs::read(file).await?;
            let asset = store.add(&bytes).await?;
            output::print_asset(&asset, cli.format);
            Ok(())
        }

        Commands::Health => {
            let market = HttpMarketplace::new(market_config(&cli))?;

            let store_result = store.ping().await;
            let market_result = market.ping().await;

            if cli.format == OutputFormat::Json {
                output::print_output(
                    &json!({
                        "content_store": store_result.is_ok(),
                        "marketplace": market_result.is_ok(),
                    }),
                    cli.format,
                );
            } else {
                println!("Mint Service Health");
                println!("====================");
                output::print_health(
                    "content store",
                    store_result.is_ok(),
                    store_result.as_ref().err().map(|e| e.to_string()).as_deref(),
                );
                output::print_health(
                    "marketplace",
                    market_result.is_ok(),
                    market_result.as_ref().err().map(|e| e.to_string()).as_deref(),
                );
            }

            store_result?;
            market_result?;
            Ok(())
        }

        Commands::Config {
            command: ConfigCommands::Show,
        } => {
            let store_config = store_config(&cli);
            let market_config = market_config(&cli);
            output::print_output(
                &json!({
                    "store_backend": format!("{:?}", cli.store).to_lowercase(),
                    "store_api_url": store_config.api_url,
                    "gateway_url": store_config.gateway_url,
                    "store_timeout_secs": store_config.timeout_secs,
                    "market_url": market_config.base_url,
                    "market_timeout_secs": market_config.timeout_secs,
                    "account": cli.account,
                }),
                cli.format,
            );
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_market_config_reads_env_timeout() {
        std::env::set_var("MINT_MARKET_TIMEOUT", "45");
        let cli = Cli::parse_from(["mint", "--market-url", "http://localhost:9000", "health"]);
        let config = market_config(&cli);
        assert_eq!(config.base_url, "http://localhost:9000");
        assert_eq!(config.timeout_secs, 45);
        std::env::remove_var("MINT_MARKET_TIMEOUT");
    }

    #[tokio::test]
    async fn test_upload_with_memory_store_reads_file() {
        let path = std::env::temp_dir().join("mint-cli-upload-test.bin");
        std::fs::write(&path, [0xAB; 32]).unwrap();

        let cli = Cli::parse_from([
            "mint",
            "--store",
            "mem",
            "upload",
            path.to_str().unwrap(),
        ]);
        run(cli).await.unwrap();
    }
}
