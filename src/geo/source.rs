// src/geo/source.rs
use ::geo::{BoundingRect, Contains, Geometry, MultiPolygon, Point, Polygon};
use anyhow::Result;
use geojson::{Feature, Value};
use serde_json::Value as JsonValue;

use super::document::{GeoDocument, COUNTRY, COUNTRY_CODE};
use super::mesh::FillMesh;
use crate::config::{Metric, MetricValue, MetricValues};

/// One country as the map draws it: its outline, fill meshes and the properties read back from the document.
#[derive(Debug, Clone, PartialEq)]
pub struct GeoPatch {
    pub country: String,
    pub country_code: String,
    pub values: MetricValues,
    pub shape: MultiPolygon<f64>,
    pub meshes: Vec<FillMesh>,
}

impl GeoPatch {
    pub fn value(&self, metric: Metric) -> MetricValue {
        self.values.get(&metric).copied().unwrap_or_default()
    }

    pub fn contains(&self, [x, y]: [f64; 2]) -> bool {
        self.shape.contains(&Point::new(x, y))
    }
}

/// Renderable view over a [`GeoDocument`]. Built once; every plot reads from it.
#[derive(Debug, Clone, Default)]
pub struct GeoSource {
    patches: Vec<GeoPatch>,
}

impl GeoSource {
    pub fn from_document(document: &GeoDocument) -> Result<Self> {
        let patches: Vec<GeoPatch> = document.features()?
            .into_iter()
            .map(patch_from_feature)
            .collect();

        let empty = patches.iter().filter(|p| p.shape.0.is_empty()).count();
        if empty > 0 {
            tracing::warn!(countries = empty, "countries without drawable outlines");
        }
        tracing::debug!(countries = patches.len(), "geo source ready");

        Ok(Self { patches })
    }

    pub fn patches(&self) -> &[GeoPatch] {
        &self.patches
    }

    pub fn len(&self) -> usize {
        self.patches.len()
    }

    /// Index of the country under `point` (lon, lat), if any.
    pub fn hit_test(&self, point: [f64; 2]) -> Option<usize> {
        self.patches.iter().position(|p| p.contains(point))
    }

    /// `[[min_x, min_y], [max_x, max_y]]` over every outline.
    pub fn bounds(&self) -> Option<[[f64; 2]; 2]> {
        self.patches.iter()
            .filter_map(|p| p.shape.bounding_rect())
            .map(|r| [[r.min().x, r.min().y], [r.max().x, r.max().y]])
            .reduce(|[[ax0, ay0], [ax1, ay1]], [[bx0, by0], [bx1, by1]]| {
                [[ax0.min(bx0), ay0.min(by0)], [ax1.max(bx1), ay1.max(by1)]]
            })
    }
}

fn patch_from_feature(feature: Feature) -> GeoPatch {
    let text = |key: &str| {
        feature.property(key)
            .and_then(JsonValue::as_str)
            .unwrap_or_default()
            .to_string()
    };

    let values = Metric::ALL.into_iter()
        .map(|m| (m, MetricValue::from_json(feature.property(m.identifier()))))
        .collect();

    let country_code = text(COUNTRY_CODE);
    let shape = feature.geometry.as_ref()
        .map(|g| to_multi_polygon(&country_code, &g.value))
        .unwrap_or_else(|| MultiPolygon::new(Vec::new()));
    let meshes = shape.0.iter()
        .filter_map(FillMesh::from_polygon)
        .collect();

    GeoPatch {
        country: text(COUNTRY),
        country_code,
        values,
        shape,
        meshes,
    }
}

fn to_multi_polygon(country_code: &str, value: &Value) -> MultiPolygon<f64> {
    match Geometry::<f64>::try_from(value) {
        Ok(geometry) => MultiPolygon::new(polygons(geometry)),
        Err(e) => {
            tracing::warn!(country_code, error = %e, "unreadable outline");
            MultiPolygon::new(Vec::new())
        }
    }
}

// Points and lines have no area to fill.
fn polygons(geometry: Geometry<f64>) -> Vec<Polygon<f64>> {
    match geometry {
        Geometry::Polygon(polygon) => vec![polygon],
        Geometry::MultiPolygon(multi) => multi.0,
        Geometry::GeometryCollection(collection) => collection.0
            .into_iter()
            .flat_map(polygons)
            .collect(),
        _ => Vec::new(),
    }
}
