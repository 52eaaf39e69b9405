// src/scrape/mod.rs
// =============================================================================
// This module contains the per-level extraction logic for the catalog.
//
// Submodules, one per catalog level plus the shared card helpers:
// - card: mapping-ratio / percent-badge parsing and other card helpers
// - brands: the brand index (start page)
// - models: a brand's model listing
// - years: a model's year/generation listing
// - engines: a year's engine variants (the leaf level)
//
// Each level exposes an async scrape_* function (fetch + parse); the pure
// parse_* functions underneath are exercised directly by the fixture tests.
// =============================================================================

mod brands;
mod card;
mod engines;
mod models;
mod years;

// Re-export the record types and scrape entry points so callers can write
// `scrape::scrape_models()` instead of `scrape::models::scrape_models()`
pub use brands::{scrape_brands, Brand};
pub use card::MappingInfo;
pub use engines::{scrape_engines, Engine};
pub use models::{scrape_models, Model};
pub use years::{scrape_years, YearGen};

/// Path of the brand index, relative to the site base
pub const START_PATH: &str = "/sr/services/tuning";

/// Every catalog link lives under this prefix
pub const CATALOG_PREFIX: &str = "/sr/services/tuning/";
