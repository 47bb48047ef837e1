//! Output Formatting
//!
//! Rendering for CLI output plus the console notifier that plays the role
//! of the front-end's toasts and progress spinner.

use serde::Serialize;

use mint_core::{ContentAsset, MintReceipt, MintStage, Route};
use mint_pipeline::Notifier;

use crate::commands::OutputFormat;

/// Format and print data based on output format
pub fn print_output<T: Serialize>(data: &T, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(data),
        OutputFormat::Table | OutputFormat::Plain => print_json(data),
    }
}

/// Print as JSON
fn print_json<T: Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Error formatting JSON: {}", e),
    }
}

/// Print a mint receipt
pub fn print_receipt(receipt: &MintReceipt, route: Option<Route>, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(receipt),
        OutputFormat::Table | OutputFormat::Plain => {
            println!("Mint Result");
            println!("============");
            println!("Attempt:  {}", receipt.attempt_id);
            println!("Stage:    {}", receipt.stage);
            if let Some(image) = &receipt.image {
                println!("Image:    {}", image.uri);
            }
            if let Some(metadata) = &receipt.metadata {
                println!("Metadata: {}", metadata.uri);
            }
            if let Some(sale) = &receipt.sale {
                println!();
                println!("Listing:");
                println!("  ID:      {}", sale.listing_id);
                println!("  Tx hash: {}", sale.tx_hash);
            }
            if let Some(route) = route {
                println!();
                println!("Next: {}", route.path());
            }
        }
    }
}

/// Print an uploaded asset
pub fn print_asset(asset: &ContentAsset, format: OutputFormat) {
    match format {
        OutputFormat::Json => print_json(asset),
        OutputFormat::Table | OutputFormat::Plain => {
            println!("Uploaded");
            println!("=========");
            println!("Path: {}", asset.path);
            println!("URI:  {}", asset.uri);
            println!("Size: {} bytes", asset.size);
        }
    }
}

/// Print a health check line
pub fn print_health(component: &str, healthy: bool, detail: Option<&str>) {
    let status = if healthy { "ok" } else { "unreachable" };
    print!("  - {}: {}", component, status);
    if let Some(detail) = detail {
        print!(" ({})", detail);
    }
    println!();
}

/// Notifier that renders notifications on the terminal
///
/// Success and prompts go to stdout, errors to stderr, stage changes render
/// as progress lines - the CLI equivalent of the toast/spinner surface.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, title: &str, detail: &str) {
        println!("{}: {}", title, detail);
    }

    fn notify_error(&self, title: &str, detail: &str) {
        eprintln!("{}: {}", title, detail);
    }

    fn notify_prompt(&self, message: &str) {
        println!("{}", message);
    }

    fn stage_changed(&self, _stage: MintStage, label: &str) {
        println!("... {}", label);
    }
}
