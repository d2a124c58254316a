//! Text widgets composed by the report renderer

pub mod card;
pub mod daily;
pub mod fields;
pub mod graph;
pub mod heatmap;
