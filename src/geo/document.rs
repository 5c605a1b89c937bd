// src/geo/document.rs
use anyhow::{Result, Context};
use geojson::{Feature, FeatureCollection, GeoJson, JsonObject};
use serde_json::Value as JsonValue;

use crate::config::{JoinedTable, Metric};
use crate::error::AtlasError;

pub const COUNTRY: &str = "country";
pub const COUNTRY_CODE: &str = "country_code";

/// The joined table as GeoJSON text, built once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoDocument {
    json: String,
}

impl GeoDocument {
    pub fn from_table(table: &JoinedTable) -> Self {
        let features = table.records.iter()
            .map(|record| {
                let mut properties = JsonObject::new();
                properties.insert(COUNTRY.to_string(), JsonValue::from(record.country.as_str()));
                properties.insert(COUNTRY_CODE.to_string(), JsonValue::from(record.country_code.as_str()));
                for metric in Metric::ALL {
                    properties.insert(metric.identifier().to_string(), record.value(metric).to_json());
                }

                Feature {
                    bbox: None,
                    geometry: record.geometry.clone(),
                    id: None,
                    properties: Some(properties),
                    foreign_members: None,
                }
            })
            .collect();

        let collection = FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        };

        Self {
            json: GeoJson::from(collection).to_string(),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.json
    }

    pub fn features(&self) -> Result<Vec<Feature>> {
        match self.json.parse::<GeoJson>().context("Failed to parse geo document")? {
            GeoJson::FeatureCollection(collection) => Ok(collection.features),
            other => Err(AtlasError::InvalidDocument(
                format!("expected a FeatureCollection, found {}", type_name(&other))
            ).into()),
        }
    }
}

fn type_name(doc: &GeoJson) -> &'static str {
    match doc {
        GeoJson::Geometry(_) => "a Geometry",
        GeoJson::Feature(_) => "a Feature",
        GeoJson::FeatureCollection(_) => "a FeatureCollection",
    }
}
