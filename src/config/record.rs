// src/config/record.rs
use serde_json::Value as JsonValue;
use std::collections::BTreeMap;

use super::Metric;

/// Placeholder shown wherever a metric is missing.
pub const NO_DATA: &str = "No data";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    Value(f64),
    NoData,
}

impl MetricValue {
    /// Parse a raw table cell. Blank and null-like cells become `NoData`.
    pub fn from_cell(cell: &str) -> Option<Self> {
        let cell = cell.trim();
        if cell.is_empty()
            || cell == NO_DATA
            || ["nan", "na", "null", "none"].contains(&cell.to_ascii_lowercase().as_str())
        {
            return Some(MetricValue::NoData);
        }
        cell.parse::<f64>().ok()
            .filter(|v| v.is_finite())
            .map(MetricValue::Value)
    }

    pub fn from_json(value: Option<&JsonValue>) -> Self {
        match value.and_then(JsonValue::as_f64) {
            Some(v) if v.is_finite() => MetricValue::Value(v),
            _ => MetricValue::NoData,
        }
    }

    pub fn to_json(self) -> JsonValue {
        match self {
            MetricValue::Value(v) => serde_json::Number::from_f64(v)
                .map(JsonValue::Number)
                .unwrap_or_else(|| JsonValue::String(NO_DATA.to_string())),
            MetricValue::NoData => JsonValue::String(NO_DATA.to_string()),
        }
    }

    pub fn as_f64(self) -> Option<f64> {
        match self {
            MetricValue::Value(v) => Some(v),
            MetricValue::NoData => None,
        }
    }
}

impl Default for MetricValue {
    fn default() -> Self {
        MetricValue::NoData
    }
}

/// Per-metric values for one country; every metric in the catalog has an entry.
pub type MetricValues = BTreeMap<Metric, MetricValue>;

pub fn no_data_values() -> MetricValues {
    Metric::ALL.into_iter().map(|m| (m, MetricValue::NoData)).collect()
}

/// One row of the joined table.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryRecord {
    pub country_code: String,
    pub country: String,
    pub geometry: Option<geojson::Geometry>,
    pub metrics: MetricValues,
}

impl CountryRecord {
    pub fn value(&self, metric: Metric) -> MetricValue {
        self.metrics.get(&metric).copied().unwrap_or_default()
    }
}

/// Geometry rows joined with the metrics table, in geometry order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct JoinedTable {
    pub records: Vec<CountryRecord>,
}

impl JoinedTable {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[cfg(test)]
    pub fn get(&self, country_code: &str) -> Option<&CountryRecord> {
        self.records.iter().find(|r| r.country_code == country_code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cells() {
        assert_eq!(MetricValue::from_cell(" 42.5 "), Some(MetricValue::Value(42.5)));
        assert_eq!(MetricValue::from_cell(""), Some(MetricValue::NoData));
        assert_eq!(MetricValue::from_cell("NaN"), Some(MetricValue::NoData));
        assert_eq!(MetricValue::from_cell("No data"), Some(MetricValue::NoData));
        assert_eq!(MetricValue::from_cell("plenty"), None);
    }

    #[test]
    fn test_json_sentinel() {
        assert_eq!(MetricValue::NoData.to_json(), JsonValue::String("No data".into()));
        assert_eq!(MetricValue::from_json(Some(&JsonValue::String("No data".into()))), MetricValue::NoData);
        assert_eq!(MetricValue::from_json(None), MetricValue::NoData);
        assert_eq!(MetricValue::from_json(Some(&serde_json::json!(7))), MetricValue::Value(7.0));
    }
}
