// src/walk.rs
// =============================================================================
// The catalog traversal: brand index -> models -> years -> engines.
//
// The walk is parameterized over a PageSource, so the whole traversal can be
// driven by canned pages in tests; production wires in the HTTP source. It
// is deliberately sequential with fixed sleeps between requests - this is a
// politeness crawl of someone else's site, not a throughput problem. Any
// fetch or I/O failure aborts the walk; there is no retry and no
// partial-result recovery.
// =============================================================================

use anyhow::Result;
use std::io::Write;
use std::time::Duration;
use tokio::time::sleep;
use url::Url;

use crate::export::CsvExport;
use crate::fetch::PageSource;
use crate::scrape;

// Pause lengths between page fetches
pub struct Delays {
    pub brand: Duration,
    pub page: Duration,
}

impl Delays {
    // A brand fans out into many more requests than a single model or year
    // page, so it gets a longer pause.
    pub fn polite() -> Self {
        Self {
            brand: Duration::from_millis(1000),
            page: Duration::from_millis(500),
        }
    }
}

// Walks the whole catalog, writing one CSV row per engine variant found
//
// Every model under every brand and every year under every model is visited,
// in listing order; progress goes to stdout along the way.
pub async fn walk_catalog<S: PageSource, W: Write>(
    source: &S,
    base: &Url,
    delays: &Delays,
    export: &mut CsvExport<W>,
) -> Result<()> {
    println!("🔍 Scraping brand index: {}", base.join(scrape::START_PATH)?);
    let brands = scrape::scrape_brands(source, base).await?;
    println!("📄 Found {} brand(s)", brands.len());

    for brand in &brands {
        println!("\n🏷️  {} ({})", brand.name, brand.path);
        sleep(delays.brand).await;

        let models = scrape::scrape_models(source, base, &brand.path).await?;
        println!("   {} model(s)", models.len());

        for model in &models {
            println!("   Model: {} ({})", model.name, model.path);
            sleep(delays.page).await;

            let years = scrape::scrape_years(source, base, &model.path).await?;
            println!("      {} generation(s)", years.len());

            for year in &years {
                println!("      Year: {} ({})", year.label, year.path);
                sleep(delays.page).await;

                let engines = scrape::scrape_engines(source, base, &year.path).await?;
                println!("         {} engine(s)", engines.len());

                for engine in &engines {
                    export.write_row(base, brand, model, year, engine)?;
                }
            }
        }
    }

    Ok(())
}
