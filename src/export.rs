// src/export.rs
// =============================================================================
// This module writes the flat CSV export.
//
// The output is one row per engine variant, joining the brand, model and
// year records it was found under - 23 columns total. The header is written
// as soon as the file is created, so even a run that finds nothing leaves a
// valid (if empty) CSV behind.
//
// Relative catalog paths are resolved against the base URL here, so the
// *_url columns always hold absolute URLs. Missing optional fields come out
// as empty cells.
// =============================================================================

use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;
use url::Url;

use crate::scrape::{Brand, Engine, Model, YearGen};

/// The fixed 23-column header, in output order
pub const HEADER: [&str; 23] = [
    "brand_name",
    "brand_url",
    "brand_models_count",
    "brand_mapped",
    "brand_total",
    "brand_percent",
    "model_name",
    "model_url",
    "model_info",
    "model_mapped",
    "model_total",
    "model_percent",
    "year_label",
    "year_url",
    "year_info",
    "year_mapped",
    "year_total",
    "year_percent",
    "engine_name",
    "stock_hp",
    "tuned_hp",
    "stock_nm",
    "tuned_nm",
];

// One output row; field order must match HEADER
//
// The serde derive is what the csv writer consumes; None serializes as an
// empty cell.
#[derive(Debug, Serialize)]
struct Row<'a> {
    brand_name: &'a str,
    brand_url: String,
    brand_models_count: &'a str,
    brand_mapped: Option<&'a str>,
    brand_total: Option<&'a str>,
    brand_percent: Option<&'a str>,
    model_name: &'a str,
    model_url: String,
    model_info: &'a str,
    model_mapped: Option<&'a str>,
    model_total: Option<&'a str>,
    model_percent: Option<&'a str>,
    year_label: &'a str,
    year_url: String,
    year_info: &'a str,
    year_mapped: Option<&'a str>,
    year_total: Option<&'a str>,
    year_percent: Option<&'a str>,
    engine_name: &'a str,
    stock_hp: Option<&'a str>,
    tuned_hp: Option<&'a str>,
    stock_nm: Option<&'a str>,
    tuned_nm: Option<&'a str>,
}

// The open CSV export, appended to in traversal order
pub struct CsvExport<W: Write> {
    writer: csv::Writer<W>,
    rows: usize,
}

impl CsvExport<File> {
    // Creates (or truncates) the CSV file and writes the header row
    pub fn create(path: &Path) -> Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("creating output file {}", path.display()))?;
        Self::from_writer(file)
    }
}

impl<W: Write> CsvExport<W> {
    // Wraps any writer; used directly by the tests
    //
    // The header comes from HEADER rather than the Row field names, so it is
    // present even when no row is ever serialized.
    pub fn from_writer(writer: W) -> Result<Self> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(writer);
        writer.write_record(HEADER).context("writing CSV header")?;
        Ok(Self { writer, rows: 0 })
    }

    // Writes one engine row, joined with its brand/model/year ancestry
    pub fn write_row(
        &mut self,
        base: &Url,
        brand: &Brand,
        model: &Model,
        year: &YearGen,
        engine: &Engine,
    ) -> Result<()> {
        let row = Row {
            brand_name: &brand.name,
            brand_url: absolute(base, &brand.path),
            brand_models_count: &brand.models_count,
            brand_mapped: brand.mapping.mapped.as_deref(),
            brand_total: brand.mapping.total.as_deref(),
            brand_percent: brand.mapping.percent.as_deref(),
            model_name: &model.name,
            model_url: absolute(base, &model.path),
            model_info: &model.info,
            model_mapped: model.mapping.mapped.as_deref(),
            model_total: model.mapping.total.as_deref(),
            model_percent: model.mapping.percent.as_deref(),
            year_label: &year.label,
            year_url: absolute(base, &year.path),
            year_info: &year.info,
            year_mapped: year.mapping.mapped.as_deref(),
            year_total: year.mapping.total.as_deref(),
            year_percent: year.mapping.percent.as_deref(),
            engine_name: &engine.name,
            stock_hp: engine.stock_hp.as_deref(),
            tuned_hp: engine.tuned_hp.as_deref(),
            stock_nm: engine.stock_nm.as_deref(),
            tuned_nm: engine.tuned_nm.as_deref(),
        };
        self.writer.serialize(row).context("writing CSV row")?;
        self.rows += 1;
        Ok(())
    }

    // Flushes the export and returns the number of data rows written
    pub fn finish(mut self) -> Result<usize> {
        self.writer.flush().context("flushing CSV output")?;
        Ok(self.rows)
    }

    // Test-only: hands back the underlying csv writer so traversal tests can
    // read back what was written
    #[cfg(test)]
    pub fn into_writer(self) -> csv::Writer<W> {
        self.writer
    }
}

// Resolves a catalog path against the site base
//
// Paths come straight out of href attributes and always join cleanly; if one
// somehow doesn't, it is passed through untouched rather than dropped.
fn absolute(base: &Url, path: &str) -> String {
    base.join(path)
        .map(|url| url.to_string())
        .unwrap_or_else(|_| path.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scrape::MappingInfo;

    fn base() -> Url {
        Url::parse("https://www.dominanz.rs").unwrap()
    }

    fn sample_brand() -> Brand {
        Brand {
            name: "Audi".to_string(),
            path: "/sr/services/tuning/audi".to_string(),
            models_count: "42 modela".to_string(),
            mapping: MappingInfo {
                mapped: Some("120".to_string()),
                total: Some("150".to_string()),
                percent: Some("80%".to_string()),
            },
        }
    }

    fn sample_model() -> Model {
        Model {
            name: "A4".to_string(),
            path: "/sr/services/tuning/audi/a4".to_string(),
            info: "5 generacija".to_string(),
            mapping: MappingInfo::default(),
        }
    }

    fn sample_year() -> YearGen {
        YearGen {
            label: "2015 - 2019".to_string(),
            path: "/sr/services/tuning/audi/a4/2015-2019".to_string(),
            info: "B9".to_string(),
            mapping: MappingInfo::default(),
        }
    }

    fn sample_engine() -> Engine {
        Engine {
            name: "2.0 TDI".to_string(),
            stock_hp: Some("150 KS".to_string()),
            tuned_hp: Some("190 KS".to_string()),
            stock_nm: None,
            tuned_nm: None,
        }
    }

    // Writes the given rows into memory and parses the result back
    fn roundtrip(rows: usize) -> Vec<csv::StringRecord> {
        let mut export = CsvExport::from_writer(Vec::new()).unwrap();
        for _ in 0..rows {
            export
                .write_row(
                    &base(),
                    &sample_brand(),
                    &sample_model(),
                    &sample_year(),
                    &sample_engine(),
                )
                .unwrap();
        }
        assert_eq!(export.rows, rows);

        let data = export
            .writer
            .into_inner()
            .unwrap_or_else(|_| panic!("flushing in-memory CSV should not fail"));
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(false)
            .from_reader(data.as_slice());
        reader.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn test_header_written_even_with_no_rows() {
        let records = roundtrip(0);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].len(), 23);
        assert_eq!(&records[0][0], "brand_name");
        assert_eq!(&records[0][22], "tuned_nm");
    }

    #[test]
    fn test_every_row_has_23_fields() {
        let records = roundtrip(2);
        assert_eq!(records.len(), 3);
        for record in &records {
            assert_eq!(record.len(), HEADER.len());
        }
    }

    #[test]
    fn test_urls_are_absolute_and_none_is_empty() {
        let records = roundtrip(1);
        let row = &records[1];

        assert_eq!(&row[0], "Audi");
        assert_eq!(&row[1], "https://www.dominanz.rs/sr/services/tuning/audi");
        assert_eq!(&row[7], "https://www.dominanz.rs/sr/services/tuning/audi/a4");

        // Model mapping fields were None
        assert_eq!(&row[9], "");
        assert_eq!(&row[10], "");
        assert_eq!(&row[11], "");

        assert_eq!(&row[18], "2.0 TDI");
        assert_eq!(&row[19], "150 KS");
        assert_eq!(&row[21], ""); // stock_nm was None
    }
}
