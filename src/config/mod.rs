// src/config/mod.rs
pub mod catalog;
pub mod palette;
pub mod record;
pub mod settings;

// Re-export commonly used types
pub use catalog::Metric;
pub use record::{CountryRecord, JoinedTable, MetricValue, MetricValues, NO_DATA};
pub use settings::Settings;
