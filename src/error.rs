// src/error.rs
use thiserror::Error;

/// Domain failures raised while loading data or resolving plot configuration.
#[derive(Debug, Error)]
pub enum AtlasError {
    #[error("join key `{key}` is missing from the {source_name} source")]
    MissingJoinKey { source_name: &'static str, key: String },

    #[error("unknown metric identifier `{0}`")]
    UnknownMetric(String),

    #[error("no metric is labelled `{0}`")]
    UnknownLabel(String),

    #[error("invalid field spec for `{metric}`: {reason}")]
    InvalidFieldSpec { metric: &'static str, reason: String },

    #[error("palette {name}{size} is not available")]
    UnknownPalette { name: String, size: usize },

    #[error("malformed number format `{0}`")]
    InvalidFormat(String),

    #[error("invalid geo document: {0}")]
    InvalidDocument(String),
}
