// src/ui/mod.rs
pub mod color_bar;
pub mod map;
pub mod selector;
