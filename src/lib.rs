//! Colorful terminal stats for WakaTime and Wakapi

pub mod cli;
pub mod render;
pub mod services;
pub mod types;
