// src/scrape/brands.rs
// =============================================================================
// Scrapes the brand index (the catalog's start page).
//
// Brand cards are told apart from decorative cards by their logo image
// (alt text ends in "logo": "Audi logo", "Alfa Romeo logo", ...). A card
// only counts if it is wrapped in a link into the catalog tree.
// =============================================================================

use anyhow::Result;
use scraper::{Html, Selector};
use url::Url;

use super::card::{self, MappingInfo};
use crate::fetch::PageSource;

// One brand on the index page
#[derive(Debug, Clone)]
pub struct Brand {
    pub name: String,
    /// Catalog path of the brand's model listing (e.g. "/sr/services/tuning/audi")
    pub path: String,
    /// Display string under the name (e.g. "42 modela")
    pub models_count: String,
    pub mapping: MappingInfo,
}

// Fetches the start page and returns all brands found on it
pub async fn scrape_brands<S: PageSource>(source: &S, base: &Url) -> Result<Vec<Brand>> {
    let html = source.get(base, super::START_PATH).await?;
    Ok(parse_brands(&html))
}

fn parse_brands(html: &str) -> Vec<Brand> {
    let document = Html::parse_document(html);
    let card_selector = Selector::parse("div.flex.flex-col.relative.overflow-hidden").unwrap();
    let name_selector = Selector::parse("h3.text-lg.font-semibold").unwrap();
    let subtitle_selector = Selector::parse("p.text-sm").unwrap();
    let logo_selector = Selector::parse(r#"img[alt$="logo"]"#).unwrap();

    let mut brands = Vec::new();

    for card in document.select(&card_selector) {
        let Some(name_el) = card.select(&name_selector).next() else {
            continue;
        };
        let Some(subtitle_el) = card.select(&subtitle_selector).next() else {
            continue;
        };

        // Only cards with a brand logo are actual brands
        if card.select(&logo_selector).next().is_none() {
            continue;
        }

        // The card must link into the catalog tree
        let Some(href) = card::enclosing_link(card) else {
            continue;
        };
        if !href.starts_with(super::CATALOG_PREFIX) {
            continue;
        }

        brands.push(Brand {
            name: card::normalized_text(name_el),
            path: href,
            models_count: card::normalized_text(subtitle_el),
            mapping: card::parse_mapping_info(card),
        });
    }

    brands
}
