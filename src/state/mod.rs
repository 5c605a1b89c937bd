// src/state/mod.rs
pub mod session;

pub use session::Session;
