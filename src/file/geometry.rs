// src/file/geometry.rs
use super::FileHandler;
use crate::error::AtlasError;
use anyhow::{Result, Context};
use geojson::{Feature, GeoJson};
use std::fs;
use std::path::Path;

// Property names in the boundary file, and what they are called after loading.
const NAME_PROPERTIES: [&str; 2] = ["admin", "country"];
const CODE_PROPERTIES: [&str; 2] = ["adm0_a3", "country_code"];

/// One boundary feature, renamed to the table's column names.
#[derive(Debug, Clone, PartialEq)]
pub struct GeometryRow {
    pub country: String,
    pub country_code: String,
    pub geometry: Option<geojson::Geometry>,
}

#[derive(Debug)]
pub struct GeometryFileHandler;

impl GeometryFileHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn parse(&self, content: &str) -> Result<Vec<Feature>> {
        let features = match content.parse::<GeoJson>()? {
            GeoJson::FeatureCollection(collection) => collection.features,
            GeoJson::Feature(feature) => vec![feature],
            GeoJson::Geometry(_) => {
                return Err(AtlasError::InvalidDocument(
                    "expected a FeatureCollection, found a bare geometry".to_string()
                ).into());
            }
        };

        Ok(features)
    }
}

/// Rename each feature's properties to the table's columns. Every feature must carry a country code.
pub fn into_rows(features: Vec<Feature>) -> Result<Vec<GeometryRow>> {
    features.into_iter()
        .enumerate()
        .map(|(index, feature)| row_from_feature(index, feature))
        .collect()
}

impl FileHandler<Vec<Feature>> for GeometryFileHandler {
    fn load(&self, path: &Path) -> Result<Vec<Feature>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read boundary file {}", path.display()))?;
        self.parse(&content)
            .with_context(|| format!("Failed to parse boundary file {}", path.display()))
    }
}

fn row_from_feature(index: usize, feature: Feature) -> Result<GeometryRow> {
    let text_property = |names: &[&str]| {
        names.iter()
            .find_map(|name| feature.property(name).and_then(|v| v.as_str()))
            .map(str::to_string)
    };

    let country_code = text_property(&CODE_PROPERTIES)
        .ok_or(AtlasError::MissingJoinKey { source_name: "geometry", key: CODE_PROPERTIES[0].to_string() })
        .with_context(|| format!("Boundary feature {} has no country code", index))?;
    let country = text_property(&NAME_PROPERTIES).unwrap_or_else(|| country_code.clone());

    if feature.geometry.is_none() {
        tracing::warn!(index, country_code = %country_code, "boundary feature has no geometry");
    }

    Ok(GeometryRow {
        country,
        country_code,
        geometry: feature.geometry,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_renames_properties() {
        let doc = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"admin":"Chile","adm0_a3":"CHL"},
             "geometry":{"type":"Polygon","coordinates":[[[0,0],[1,0],[1,1],[0,0]]]}}]}"#;
        let rows = into_rows(GeometryFileHandler::new().parse(doc).unwrap()).unwrap();

        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].country, "Chile");
        assert_eq!(rows[0].country_code, "CHL");
        assert!(rows[0].geometry.is_some());
    }

    #[test]
    fn test_missing_code_property() {
        let doc = r#"{"type":"FeatureCollection","features":[
            {"type":"Feature","properties":{"admin":"Chile"},"geometry":null}]}"#;
        let features = GeometryFileHandler::new().parse(doc).unwrap();
        let err = into_rows(features).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<AtlasError>(),
            Some(AtlasError::MissingJoinKey { source_name: "geometry", .. })
        ));
    }

    #[test]
    fn test_bare_geometry_rejected() {
        let doc = r#"{"type":"Point","coordinates":[0,0]}"#;
        assert!(GeometryFileHandler::new().parse(doc).is_err());
    }
}
