// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
// The scraper is single-purpose, so there are no subcommands: every run
// walks the whole catalog (brand -> model -> year -> engine) and writes one
// CSV file. The only knobs are where the CSV goes and which host to hit,
// the latter mostly so the crawl can be pointed at a local mirror.
// =============================================================================

use clap::Parser;
use std::path::PathBuf;

// This struct represents our entire CLI application
//
// #[derive(Parser)] tells clap to automatically generate parsing code
// The #[command(...)] attributes configure how the CLI behaves
#[derive(Parser, Debug)]
#[command(
    name = "dominanz-scraper",
    version = "0.1.0",
    about = "Scrape the dominanz.rs tuning catalog into a flat CSV",
    long_about = "dominanz-scraper walks the four-level tuning catalog on dominanz.rs \
                  (brand -> model -> year/generation -> engine) and writes one CSV row \
                  per engine variant, with mapping ratios and stock/tuned figures."
)]
pub struct Cli {
    /// Path of the CSV file to write
    ///
    /// The file is created (or truncated) at startup and the header row is
    /// written immediately, so an empty catalog still produces a valid CSV.
    #[arg(long, default_value = "dominanz_tuning_all.csv")]
    pub output: PathBuf,

    /// Base URL of the catalog site
    ///
    /// Override this to run the scraper against a staging copy or a local
    /// mirror of the site.
    #[arg(long, default_value = crate::BASE_URL)]
    pub base_url: String,
}
