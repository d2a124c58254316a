//! Services for fetching and aggregating stats

pub mod aggregator;
pub mod api;
pub mod config;
pub mod range;

pub use aggregator::{AggregatedRange, Aggregator};
pub use api::ApiClient;
pub use config::ApiConfig;
pub use range::StatsRange;
