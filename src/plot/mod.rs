// src/plot/mod.rs
pub mod builder;
pub mod color;
pub mod format;
pub mod ticks;

// Re-export commonly used types
pub use builder::{PlotBuilder, Visual};
