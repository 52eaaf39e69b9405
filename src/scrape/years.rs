// src/scrape/years.rs
// =============================================================================
// Scrapes a model page for its year/generation entries.
//
// Year links don't have a distinguishing class of their own; they are found
// by href shape: catalog links that extend the model's own path by one more
// segment (e.g. /sr/services/tuning/audi/a4 -> .../audi/a4/2015-2019).
// Navigation links pointing elsewhere in the catalog are filtered out by the
// prefix check.
// =============================================================================

use anyhow::Result;
use scraper::{Html, Selector};
use url::Url;

use super::card::{self, MappingInfo};
use crate::fetch::PageSource;

// One year/generation under a model
#[derive(Debug, Clone)]
pub struct YearGen {
    /// Display label (e.g. "2015 - 2019" or a generation name)
    pub label: String,
    /// Catalog path of the year's engine listing
    pub path: String,
    pub info: String,
    pub mapping: MappingInfo,
}

// Fetches a model page and returns all year/generation entries on it
pub async fn scrape_years<S: PageSource>(
    source: &S,
    base: &Url,
    model_path: &str,
) -> Result<Vec<YearGen>> {
    let html = source.get(base, model_path).await?;
    Ok(parse_years(&html, model_path))
}

fn parse_years(html: &str, model_path: &str) -> Vec<YearGen> {
    let document = Html::parse_document(html);
    let link_selector = Selector::parse(r#"a[href^="/sr/services/tuning/"]"#).unwrap();
    let card_selector = Selector::parse("div.flex.flex-col.relative.overflow-hidden").unwrap();
    let name_selector = Selector::parse("h3.text-lg.font-semibold").unwrap();
    let subtitle_selector = Selector::parse("p.text-sm").unwrap();

    // Year links extend the model's own path
    let prefix = model_path.trim_end_matches('/');

    let mut years = Vec::new();

    for link in document.select(&link_selector) {
        let Some(href) = link.value().attr("href") else {
            continue;
        };
        if !href.starts_with(prefix) {
            continue;
        }

        let Some(card) = link.select(&card_selector).next() else {
            continue;
        };
        let Some(name_el) = card.select(&name_selector).next() else {
            continue;
        };
        let Some(subtitle_el) = card.select(&subtitle_selector).next() else {
            continue;
        };

        years.push(YearGen {
            label: card::normalized_text(name_el),
            path: href.to_string(),
            info: card::normalized_text(subtitle_el),
            mapping: card::parse_mapping_info(card),
        });
    }

    years
}
