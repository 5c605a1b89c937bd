// src/config/catalog.rs
use serde::{Serialize, Deserialize};
use std::fmt;

use crate::error::AtlasError;
use crate::plot::format::NumeralFormat;
use super::palette;

/// Static rendering configuration for one metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub identifier: &'static str,
    pub min: f64,
    pub max: f64,
    pub format: &'static str,
    pub label: &'static str,
    pub palette: &'static str,
    pub palette_size: usize,
}

/// The ten statistics the map can show.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    Ladder,
    AverageWineRating,
    SpiritServings,
    WineServings,
    TotalLitresOfPureAlcohol,
    #[serde(rename = "rest_top_50_count")]
    RestTop50Count,
    DataScientistAvSalary,
    DataEngineerAvSalary,
    CountNob,
    CountSat,
}

// Dropdown order.
static FIELD_SPECS: [FieldSpec; 10] = [
    FieldSpec { identifier: "ladder", min: 1.0, max: 156.0, format: "0",
        label: "World Happiness Report ranking", palette: "Greens", palette_size: 9 },
    FieldSpec { identifier: "average_wine_rating", min: 83.0, max: 92.0, format: "90,0",
        label: "Average rating of wine", palette: "Reds", palette_size: 9 },
    FieldSpec { identifier: "spirit_servings", min: 0.0, max: 380.0, format: "0",
        label: "Total servings of spirit per year", palette: "GnBu", palette_size: 9 },
    FieldSpec { identifier: "wine_servings", min: 0.0, max: 380.0, format: "0",
        label: "Total servings of wine per year", palette: "Reds", palette_size: 9 },
    FieldSpec { identifier: "total_litres_of_pure_alcohol", min: 0.0, max: 15.0, format: "0,0",
        label: "Total liters of alcohol per year", palette: "RdPu", palette_size: 9 },
    FieldSpec { identifier: "rest_top_50_count", min: 0.0, max: 7.0, format: "0",
        label: "Number of restaurants in top 50", palette: "Greens", palette_size: 9 },
    FieldSpec { identifier: "data_scientist_av_salary", min: 17000.0, max: 300000.0, format: "$100,000",
        label: "Average yearly data scientist salary", palette: "Oranges", palette_size: 9 },
    FieldSpec { identifier: "data_engineer_av_salary", min: 9000.0, max: 185000.0, format: "$100,000",
        label: "Average yearly data engineer salary", palette: "Purples", palette_size: 9 },
    FieldSpec { identifier: "count_nob", min: 1.0, max: 276.0, format: "0",
        label: "Number of Nobel prizes", palette: "BuGn", palette_size: 9 },
    FieldSpec { identifier: "count_sat", min: 1.0, max: 181.0, format: "0",
        label: "Number of active satellites", palette: "YlOrRd", palette_size: 9 },
];

impl Metric {
    pub const ALL: [Metric; 10] = [
        Metric::Ladder,
        Metric::AverageWineRating,
        Metric::SpiritServings,
        Metric::WineServings,
        Metric::TotalLitresOfPureAlcohol,
        Metric::RestTop50Count,
        Metric::DataScientistAvSalary,
        Metric::DataEngineerAvSalary,
        Metric::CountNob,
        Metric::CountSat,
    ];

    pub fn spec(self) -> &'static FieldSpec {
        &FIELD_SPECS[self as usize]
    }

    pub fn identifier(self) -> &'static str {
        self.spec().identifier
    }

    pub fn label(self) -> &'static str {
        self.spec().label
    }

    pub fn from_identifier(identifier: &str) -> Result<Self, AtlasError> {
        Self::ALL.into_iter()
            .find(|m| m.identifier() == identifier)
            .ok_or_else(|| AtlasError::UnknownMetric(identifier.to_string()))
    }

    pub fn from_label(label: &str) -> Result<Self, AtlasError> {
        Self::ALL.into_iter()
            .find(|m| m.label() == label)
            .ok_or_else(|| AtlasError::UnknownLabel(label.to_string()))
    }
}

impl Default for Metric {
    fn default() -> Self {
        Metric::Ladder
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.identifier())
    }
}

/// Startup check over the whole catalog: ranges, formats and palettes.
pub fn validate() -> Result<(), AtlasError> {
    for metric in Metric::ALL {
        let spec = metric.spec();
        if !(spec.min < spec.max) {
            return Err(AtlasError::InvalidFieldSpec {
                metric: spec.identifier,
                reason: format!("min {} is not below max {}", spec.min, spec.max),
            });
        }
        NumeralFormat::parse(spec.format)?;
        if palette::brewer(spec.palette, spec.palette_size).is_none() {
            return Err(AtlasError::UnknownPalette {
                name: spec.palette.to_string(),
                size: spec.palette_size,
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_is_valid() {
        validate().unwrap();
        for metric in Metric::ALL {
            let spec = metric.spec();
            assert!(spec.min < spec.max, "{metric}");
            let colors = palette::brewer(spec.palette, spec.palette_size).unwrap();
            assert!(!colors.is_empty());
        }
    }

    #[test]
    fn test_enum_matches_table_order() {
        // `spec()` indexes by discriminant, so the identifier must match the variant's serde name.
        for metric in Metric::ALL {
            let name = serde_json::to_string(&metric).unwrap();
            assert_eq!(name.trim_matches('"'), metric.identifier());
        }
    }

    #[test]
    fn test_labels_and_identifiers_are_unique() {
        let labels: HashSet<_> = Metric::ALL.iter().map(|m| m.label()).collect();
        let ids: HashSet<_> = Metric::ALL.iter().map(|m| m.identifier()).collect();
        assert_eq!(labels.len(), 10);
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_nobel_label_resolves() {
        let metric = Metric::from_label("Number of Nobel prizes").unwrap();
        assert_eq!(metric, Metric::CountNob);
        let spec = metric.spec();
        assert_eq!(spec.identifier, "count_nob");
        assert_eq!((spec.min, spec.max), (1.0, 276.0));
        assert_eq!(spec.palette, "BuGn");
        assert_eq!(spec.format, "0");
    }

    #[test]
    fn test_data_scientist_salary_label_resolves() {
        let metric = Metric::from_label("Average yearly data scientist salary").unwrap();
        let spec = metric.spec();
        assert_eq!(spec.identifier, "data_scientist_av_salary");
        assert_eq!((spec.min, spec.max), (17000.0, 300000.0));
        assert_eq!(spec.format, "$100,000");
    }

    #[test]
    fn test_lookup_misses() {
        assert!(matches!(Metric::from_label("Median rent"), Err(AtlasError::UnknownLabel(_))));
        assert!(matches!(Metric::from_identifier("rent"), Err(AtlasError::UnknownMetric(_))));
        assert_eq!(Metric::from_identifier("count_sat").unwrap(), Metric::CountSat);
    }
}
