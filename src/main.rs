// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Open the CSV export and write the header
// 3. Hand the HTTP page source to the catalog walk
//    (brand index -> models -> years -> engines, see src/walk.rs)
// 4. Report the row total, or exit 1 if anything failed
// =============================================================================

// Module declarations - tells Rust about our other source files
mod cli; // src/cli.rs - command-line parsing
mod export; // src/export.rs - CSV output
mod fetch; // src/fetch.rs - page sources, HTTP client
mod scrape; // src/scrape/ - per-level extraction logic
mod walk; // src/walk.rs - the catalog traversal

use anyhow::{Context, Result};
use clap::Parser;
use url::Url;

use cli::Cli;

/// Production base URL of the catalog site
pub const BASE_URL: &str = "https://www.dominanz.rs";

#[tokio::main]
async fn main() {
    let exit_code = match run().await {
        Ok(()) => 0,
        Err(e) => {
            // {:#} prints the whole anyhow context chain on one line
            eprintln!("Error: {:#}", e);
            1
        }
    };

    std::process::exit(exit_code);
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    let base = Url::parse(&cli.base_url)
        .with_context(|| format!("invalid base URL '{}'", cli.base_url))?;
    let source = fetch::HttpSource::new()?;
    let mut export = export::CsvExport::create(&cli.output)?;

    walk::walk_catalog(&source, &base, &walk::Delays::polite(), &mut export).await?;

    let rows = export.finish()?;
    println!("\n✅ Wrote {} row(s) to {}", rows, cli.output.display());

    Ok(())
}
