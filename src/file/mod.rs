// src/file/mod.rs
use anyhow::Result;
use geojson::Feature;
use std::path::Path;
use crate::config::{CountryRecord, JoinedTable, Settings, record::no_data_values};

pub mod geometry;
pub mod metrics;

use geometry::{GeometryFileHandler, GeometryRow, into_rows};
use metrics::{MetricsFileHandler, MetricsTable};

// Core trait for file operations
pub trait FileHandler<T> {
    fn load(&self, path: &Path) -> Result<T>;
}

/// Reads both input files and produces the joined per-country table.
#[derive(Debug)]
pub struct DatasetLoader {
    metrics_handler: MetricsFileHandler,
    geometry_handler: GeometryFileHandler,
}

impl DatasetLoader {
    pub fn new() -> Self {
        Self {
            metrics_handler: MetricsFileHandler::new(),
            geometry_handler: GeometryFileHandler::new(),
        }
    }

    pub fn load(&self, settings: &Settings) -> Result<JoinedTable> {
        let metrics = self.metrics_handler.load(&settings.metrics_path)?;
        let mut features = self.geometry_handler.load(&settings.geometry_path)?;

        // By position, before the feature is looked at: its properties may be broken too.
        if let Some(index) = settings.malformed_feature_index {
            drop_malformed_feature(&mut features, index);
        }

        let rows = into_rows(features)?;
        let table = join(rows, &metrics);
        tracing::info!(
            countries = table.len(),
            metric_rows = metrics.rows.len(),
            "dataset loaded"
        );
        Ok(table)
    }
}

fn drop_malformed_feature(features: &mut Vec<Feature>, index: usize) {
    if index < features.len() {
        let dropped = features.remove(index);
        let name = dropped.property("admin").and_then(|v| v.as_str()).unwrap_or("?");
        tracing::debug!(index, country = name, "dropped malformed boundary feature");
    } else {
        tracing::warn!(index, rows = features.len(), "malformed row index is past the end of the boundary file");
    }
}

/// Left join on country code: every geometry row survives; unmatched rows get no data everywhere.
pub fn join(rows: Vec<GeometryRow>, metrics: &MetricsTable) -> JoinedTable {
    let mut matched = 0;
    let records = rows.into_iter()
        .map(|row| {
            let mut values = no_data_values();
            if let Some(found) = metrics.rows.get(&row.country_code) {
                matched += 1;
                values.extend(found.iter().map(|(m, v)| (*m, *v)));
            }
            CountryRecord {
                country_code: row.country_code,
                country: row.country,
                geometry: row.geometry,
                metrics: values,
            }
        })
        .collect::<Vec<_>>();

    if matched == 0 && !records.is_empty() {
        tracing::warn!("no boundary row matched the metrics table; the map will show no data");
    }

    JoinedTable { records }
}
