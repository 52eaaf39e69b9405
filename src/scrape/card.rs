// src/scrape/card.rs
// =============================================================================
// Shared helpers for the catalog's "card" markup.
//
// Brand, model and year listings all render their entries as the same card:
//
//   <a href="/sr/services/tuning/...">
//     <div class="flex flex-col relative overflow-hidden">
//       <h3 class="text-lg font-semibold">Audi</h3>
//       <p class="text-sm">42 modela</p>
//       <div class="flex justify-between text-sm">
//         <span>Mapirano</span><span>120/150</span>
//       </div>
//       <span>85% Dostupno</span>
//     </div>
//   </a>
//
// This module extracts the pieces every level needs: the mapping ratio and
// availability badge, the catalog link wrapping a card, and whitespace-
// normalized element text.
// =============================================================================

use scraper::{ElementRef, Selector};

// Mapping-completion info shown on a card
//
// Every field is optional: cards without the expected row or badge simply
// produce None, they never fail the card.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MappingInfo {
    /// Left side of the "mapped/total" ratio
    pub mapped: Option<String>,
    /// Right side of the "mapped/total" ratio
    pub total: Option<String>,
    /// Availability percentage, "%" sign retained (e.g. "85%")
    pub percent: Option<String>,
}

// Extracts the mapping ratio and availability percentage from a card
//
// The ratio lives in the last <span> of the first "flex justify-between
// text-sm" row, as "mapped/total". The percentage is the first token of a
// <span> badge whose text contains both "%" and "Dostupno".
pub fn parse_mapping_info(card: ElementRef) -> MappingInfo {
    // Selectors are constant and known to be valid, so unwrap is fine here
    let row_selector = Selector::parse("div.flex.justify-between.text-sm").unwrap();
    let span_selector = Selector::parse("span").unwrap();

    let mut info = MappingInfo::default();

    if let Some(row) = card.select(&row_selector).next() {
        let spans: Vec<ElementRef> = row.select(&span_selector).collect();
        if spans.len() >= 2 {
            let ratio = normalized_text(spans[spans.len() - 1]);
            if let Some((left, right)) = ratio.split_once('/') {
                info.mapped = Some(left.trim().to_string());
                info.total = Some(right.trim().to_string());
            }
        }
    }

    for span in card.select(&span_selector) {
        let text = normalized_text(span);
        if text.contains('%') && text.contains("Dostupno") {
            if let Some(first) = text.split_whitespace().next() {
                info.percent = Some(first.to_string());
            }
            break;
        }
    }

    info
}

// Finds the href of the nearest <a> ancestor wrapping a card
//
// Listing cards are wrapped in the link to their next catalog level. An <a>
// ancestor without an href is skipped, not treated as a match.
pub fn enclosing_link(card: ElementRef) -> Option<String> {
    for node in card.ancestors() {
        if let Some(element) = ElementRef::wrap(node) {
            if element.value().name() == "a" {
                if let Some(href) = element.value().attr("href") {
                    return Some(href.to_string());
                }
            }
        }
    }
    None
}

// Collects an element's text content with whitespace normalized
//
// The site's markup is heavily indented, so raw text comes with newlines and
// runs of spaces; collapsing them gives us the value as it renders.
pub fn normalized_text(element: ElementRef) -> String {
    element
        .text()
        .collect::<String>()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Html;

    // Parses a fixture and runs `f` on the first element matching `selector`
    fn with_first<F: FnOnce(ElementRef)>(html: &str, selector: &str, f: F) {
        let document = Html::parse_document(html);
        let sel = Selector::parse(selector).unwrap();
        let element = document
            .select(&sel)
            .next()
            .expect("fixture should contain the element");
        f(element);
    }

    #[test]
    fn test_ratio_splits_into_mapped_and_total() {
        let html = r#"
            <div class="card">
              <div class="flex justify-between text-sm">
                <span>Mapirano</span>
                <span>120/150</span>
              </div>
            </div>
        "#;
        with_first(html, "div.card", |card| {
            let info = parse_mapping_info(card);
            assert_eq!(info.mapped.as_deref(), Some("120"));
            assert_eq!(info.total.as_deref(), Some("150"));
        });
    }

    #[test]
    fn test_percent_badge_keeps_percent_sign() {
        let html = r#"
            <div class="card">
              <span>85% Dostupno</span>
            </div>
        "#;
        with_first(html, "div.card", |card| {
            let info = parse_mapping_info(card);
            assert_eq!(info.percent.as_deref(), Some("85%"));
        });
    }

    #[test]
    fn test_missing_markup_yields_none_fields() {
        let html = r#"<div class="card"><h3>Empty card</h3></div>"#;
        with_first(html, "div.card", |card| {
            let info = parse_mapping_info(card);
            assert_eq!(info, MappingInfo::default());
        });
    }

    #[test]
    fn test_ratio_without_slash_is_ignored() {
        let html = r#"
            <div class="card">
              <div class="flex justify-between text-sm">
                <span>Mapirano</span>
                <span>uskoro</span>
              </div>
            </div>
        "#;
        with_first(html, "div.card", |card| {
            let info = parse_mapping_info(card);
            assert_eq!(info.mapped, None);
            assert_eq!(info.total, None);
        });
    }

    #[test]
    fn test_enclosing_link_walks_up_to_anchor() {
        let html = r#"
            <a href="/sr/services/tuning/audi">
              <div><div class="card">Audi</div></div>
            </a>
        "#;
        with_first(html, "div.card", |card| {
            assert_eq!(
                enclosing_link(card).as_deref(),
                Some("/sr/services/tuning/audi")
            );
        });
    }

    #[test]
    fn test_enclosing_link_none_without_anchor() {
        let html = r#"<div><div class="card">Audi</div></div>"#;
        with_first(html, "div.card", |card| {
            assert_eq!(enclosing_link(card), None);
        });
    }

    #[test]
    fn test_normalized_text_collapses_whitespace() {
        let html = "<p>  42\n        modela </p>";
        with_first(html, "p", |p| {
            assert_eq!(normalized_text(p), "42 modela");
        });
    }
}
