// src/scrape/models.rs
// =============================================================================
// Scrapes a brand page for the brand's models.
//
// Model cards share the listing-card markup but carry no logo image; the one
// card with a logo on a brand page is the brand header repeated at the top,
// and must be skipped.
// =============================================================================

use anyhow::Result;
use scraper::{Html, Selector};
use url::Url;

use super::card::{self, MappingInfo};
use crate::fetch::PageSource;

// One model under a brand
#[derive(Debug, Clone)]
pub struct Model {
    pub name: String,
    /// Catalog path of the model's year listing
    pub path: String,
    /// Display string under the name (generation count, year span, ...)
    pub info: String,
    pub mapping: MappingInfo,
}

// Fetches a brand page and returns all models found on it
//
// `brand_path` is the catalog path from the brand record, relative to the base.
pub async fn scrape_models<S: PageSource>(
    source: &S,
    base: &Url,
    brand_path: &str,
) -> Result<Vec<Model>> {
    let html = source.get(base, brand_path).await?;
    Ok(parse_models(&html))
}

fn parse_models(html: &str) -> Vec<Model> {
    let document = Html::parse_document(html);
    let card_selector = Selector::parse("div.flex.flex-col.relative.overflow-hidden").unwrap();
    let name_selector = Selector::parse("h3.text-lg.font-semibold").unwrap();
    let subtitle_selector = Selector::parse("p.text-sm").unwrap();
    let logo_selector = Selector::parse(r#"img[alt$="logo"]"#).unwrap();

    let mut models = Vec::new();

    for card in document.select(&card_selector) {
        let Some(name_el) = card.select(&name_selector).next() else {
            continue;
        };
        let Some(subtitle_el) = card.select(&subtitle_selector).next() else {
            continue;
        };

        // The brand-header card has the logo; model cards don't
        if card.select(&logo_selector).next().is_some() {
            continue;
        }

        let Some(href) = card::enclosing_link(card) else {
            continue;
        };

        models.push(Model {
            name: card::normalized_text(name_el),
            path: href,
            info: card::normalized_text(subtitle_el),
            mapping: card::parse_mapping_info(card),
        });
    }

    models
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRAND_PAGE: &str = r#"
        <a href="/sr/services/tuning/audi">
          <div class="flex flex-col relative overflow-hidden">
            <img alt="Audi logo">
            <h3 class="text-lg font-semibold">Audi</h3>
            <p class="text-sm">42 modela</p>
          </div>
        </a>
        <a href="/sr/services/tuning/audi/a4">
          <div class="flex flex-col relative overflow-hidden">
            <h3 class="text-lg font-semibold">A4</h3>
            <p class="text-sm">5 generacija</p>
            <div class="flex justify-between text-sm">
              <span>Mapirano</span><span>18/24</span>
            </div>
            <span>75% Dostupno</span>
          </div>
        </a>
        <a href="/sr/services/tuning/audi/a6">
          <div class="flex flex-col relative overflow-hidden">
            <h3 class="text-lg font-semibold">A6</h3>
            <p class="text-sm">4 generacije</p>
          </div>
        </a>
    "#;

    #[test]
    fn test_parses_models_and_skips_brand_header() {
        let models = parse_models(BRAND_PAGE);
        assert_eq!(models.len(), 2);

        assert_eq!(models[0].name, "A4");
        assert_eq!(models[0].path, "/sr/services/tuning/audi/a4");
        assert_eq!(models[0].info, "5 generacija");
        assert_eq!(models[0].mapping.mapped.as_deref(), Some("18"));
        assert_eq!(models[0].mapping.total.as_deref(), Some("24"));
        assert_eq!(models[0].mapping.percent.as_deref(), Some("75%"));

        // Second model has no mapping row at all
        assert_eq!(models[1].name, "A6");
        assert_eq!(models[1].mapping, MappingInfo::default());
    }

    #[test]
    fn test_card_without_subtitle_is_skipped() {
        let html = r#"
            <a href="/sr/services/tuning/audi/a4">
              <div class="flex flex-col relative overflow-hidden">
                <h3 class="text-lg font-semibold">A4</h3>
              </div>
            </a>
        "#;
        assert!(parse_models(html).is_empty());
    }
}
