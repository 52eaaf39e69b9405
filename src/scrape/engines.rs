// src/scrape/engines.rs
// =============================================================================
// Scrapes a year page for its engine variants (the catalog's leaf level).
//
// Engine cards don't link anywhere. Each card has the engine name in an
// <h4>, then two labelled stat sections headed by their own <h4>:
//
//   Snaga (power)            Obrtni moment (torque)
//     Fabrički   150 KS        Fabrički   320 Nm
//     Mapiran    190 KS        Mapiran    400 Nm
//
// The stat rows reuse the "flex justify-between text-sm" class, so rows are
// assigned to power vs. torque by which heading precedes them in document
// order, and to stock vs. tuned by their label span.
// =============================================================================

use anyhow::Result;
use scraper::{ElementRef, Html, Selector};
use url::Url;

use super::card;
use crate::fetch::PageSource;

// One engine variant with its stock and tuned figures
//
// All figures are optional: a card missing a section (or a row) yields None
// for the fields that section would have filled.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Engine {
    pub name: String,
    pub stock_hp: Option<String>,
    pub tuned_hp: Option<String>,
    pub stock_nm: Option<String>,
    pub tuned_nm: Option<String>,
}

// Which stat section the walk is currently inside
enum Section {
    None,
    Power,
    Torque,
}

// Fetches a year page and returns all engine variants on it
pub async fn scrape_engines<S: PageSource>(
    source: &S,
    base: &Url,
    year_path: &str,
) -> Result<Vec<Engine>> {
    let html = source.get(base, year_path).await?;
    Ok(parse_engines(&html))
}

fn parse_engines(html: &str) -> Vec<Engine> {
    let document = Html::parse_document(html);
    let card_selector =
        Selector::parse("section .grid > div.flex.flex-col.relative.overflow-hidden").unwrap();
    let name_selector = Selector::parse("h4.text-lg.font-semibold").unwrap();

    let mut engines = Vec::new();

    for card in document.select(&card_selector) {
        let Some(name_el) = card.select(&name_selector).next() else {
            continue;
        };
        let mut engine = Engine {
            name: card::normalized_text(name_el),
            ..Engine::default()
        };
        collect_stats(card, &mut engine);
        engines.push(engine);
    }

    engines
}

// Walks a card in document order, filling in the four stat fields
fn collect_stats(card: ElementRef, engine: &mut Engine) {
    let span_selector = Selector::parse("span").unwrap();
    let mut section = Section::None;

    for node in card.descendants() {
        let Some(element) = ElementRef::wrap(node) else {
            continue;
        };

        if element.value().name() == "h4" {
            let heading = card::normalized_text(element);
            if heading.contains("Snaga") {
                section = Section::Power;
            } else if heading.contains("Obrtni moment") {
                section = Section::Torque;
            }
            continue;
        }

        if !is_stat_row(&element) {
            continue;
        }
        let spans: Vec<ElementRef> = element.select(&span_selector).collect();
        if spans.len() < 2 {
            continue;
        }
        let label = card::normalized_text(spans[0]);
        let value = card::normalized_text(spans[spans.len() - 1]);

        let slot = match section {
            Section::Power if label.contains("Fabrički") => &mut engine.stock_hp,
            Section::Power if label.contains("Mapiran") => &mut engine.tuned_hp,
            Section::Torque if label.contains("Fabrički") => &mut engine.stock_nm,
            Section::Torque if label.contains("Mapiran") => &mut engine.tuned_nm,
            _ => continue,
        };
        *slot = Some(value);
    }
}

// A stat row is a <div class="flex justify-between text-sm">
fn is_stat_row(element: &ElementRef) -> bool {
    if element.value().name() != "div" {
        return false;
    }
    let classes: Vec<&str> = element.value().classes().collect();
    ["flex", "justify-between", "text-sm"]
        .iter()
        .all(|class| classes.contains(class))
}
