// src/geo/mod.rs
pub mod document;
pub mod mesh;
pub mod source;

pub use document::GeoDocument;
pub use source::{GeoPatch, GeoSource};
