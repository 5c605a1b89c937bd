// src/file/metrics.rs
use super::FileHandler;
use crate::config::{Metric, MetricValue, MetricValues};
use crate::error::AtlasError;
use anyhow::{Result, Context};
use std::collections::HashMap;
use std::io::Read;
use std::path::Path;

pub const JOIN_KEY: &str = "country_code";

/// Metric rows keyed by country code. Catalog metrics with no column are absent from each row.
#[derive(Debug, Clone, Default)]
pub struct MetricsTable {
    pub rows: HashMap<String, MetricValues>,
}

#[derive(Debug)]
pub struct MetricsFileHandler;

impl MetricsFileHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn parse<R: Read>(&self, reader: R) -> Result<MetricsTable> {
        let mut reader = csv::ReaderBuilder::new()
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?
            .iter()
            .map(normalize_column)
            .collect();

        let key_column = headers.iter()
            .position(|h| h == JOIN_KEY)
            .ok_or(AtlasError::MissingJoinKey { source_name: "metrics", key: JOIN_KEY.to_string() })?;

        let metric_columns: Vec<(usize, Metric)> = headers.iter()
            .enumerate()
            .filter_map(|(i, h)| Metric::from_identifier(h).ok().map(|m| (i, m)))
            .collect();

        for metric in Metric::ALL {
            if !metric_columns.iter().any(|(_, m)| *m == metric) {
                tracing::warn!(metric = metric.identifier(), "metrics table has no column; every country shows no data");
            }
        }

        let mut table = MetricsTable::default();
        for (line, record) in reader.records().enumerate() {
            let record = record.with_context(|| format!("Failed to read metrics row {}", line + 1))?;
            let Some(code) = record.get(key_column).map(str::trim).filter(|c| !c.is_empty()) else {
                tracing::warn!(row = line + 1, "skipping metrics row without a country code");
                continue;
            };

            let mut values = MetricValues::new();
            for (column, metric) in &metric_columns {
                let cell = record.get(*column).unwrap_or("");
                let value = MetricValue::from_cell(cell).unwrap_or_else(|| {
                    tracing::warn!(country_code = code, metric = metric.identifier(), cell, "non-numeric metric value");
                    MetricValue::NoData
                });
                values.insert(*metric, value);
            }

            if table.rows.contains_key(code) {
                tracing::warn!(country_code = code, "duplicate country code in metrics table; keeping the first row");
                continue;
            }
            table.rows.insert(code.to_string(), values);
        }

        Ok(table)
    }
}

impl FileHandler<MetricsTable> for MetricsFileHandler {
    fn load(&self, path: &Path) -> Result<MetricsTable> {
        let file = std::fs::File::open(path)
            .with_context(|| format!("Failed to open metrics table {}", path.display()))?;
        self.parse(file)
            .with_context(|| format!("Failed to parse metrics table {}", path.display()))
    }
}

/// Lower-case, trimmed, with spaces and dashes folded to underscores.
pub fn normalize_column(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace([' ', '-'], "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_normalizes_headers() {
        let csv = "Country,Country Code,ladder,Count-Nob\nNorway,NOR,2,13\nFrance,FRA,23,\n";
        let table = MetricsFileHandler::new().parse(csv.as_bytes()).unwrap();

        assert_eq!(table.rows.len(), 2);
        let norway = &table.rows["NOR"];
        assert_eq!(norway[&Metric::Ladder], MetricValue::Value(2.0));
        assert_eq!(norway[&Metric::CountNob], MetricValue::Value(13.0));
        assert_eq!(table.rows["FRA"][&Metric::CountNob], MetricValue::NoData);
        assert!(!norway.contains_key(&Metric::CountSat));
    }

    #[test]
    fn test_missing_join_key() {
        let csv = "country,ladder\nNorway,2\n";
        let err = MetricsFileHandler::new().parse(csv.as_bytes()).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AtlasError>(),
            Some(AtlasError::MissingJoinKey { source_name: "metrics", .. })
        ));
    }

    #[test]
    fn test_duplicate_codes_keep_first() {
        let csv = "country_code,ladder\nNOR,2\nNOR,99\n";
        let table = MetricsFileHandler::new().parse(csv.as_bytes()).unwrap();
        assert_eq!(table.rows["NOR"][&Metric::Ladder], MetricValue::Value(2.0));
    }

    #[test]
    fn test_non_numeric_becomes_no_data() {
        let csv = "country_code,count_sat\nUSA,lots\n";
        let table = MetricsFileHandler::new().parse(csv.as_bytes()).unwrap();
        assert_eq!(table.rows["USA"][&Metric::CountSat], MetricValue::NoData);
    }
}
