// src/config/settings.rs
use anyhow::{Context, Result};
use ::config::{Config, ConfigBuilder, Environment, builder::DefaultState};
use serde::{Serialize, Deserialize};
use std::path::PathBuf;

use super::Metric;

const ENV_PREFIX: &str = "ATLAS";

/// Startup settings: built-in defaults, overridable with `ATLAS_*` environment variables.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Settings {
    pub metrics_path: PathBuf,
    pub geometry_path: PathBuf,
    /// Position of the geometry row with a broken outline; dropped before joining.
    pub malformed_feature_index: Option<usize>,
    pub initial_metric: Metric,
}

impl Settings {
    pub fn load() -> Result<Self> {
        Self::from_environment(Environment::with_prefix(ENV_PREFIX))
    }

    fn from_environment(environment: Environment) -> Result<Self> {
        Self::defaults()?
            .add_source(environment)
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("metrics_path", "hap_df.csv")?
            .set_default("geometry_path", "countries.geo.json")?
            .set_default("malformed_feature_index", 159_i64)?
            .set_default("initial_metric", "ladder")?)
    }
}
