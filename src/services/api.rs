//! Blocking client for the WakaTime-compatible REST API
//!
//! Two endpoints are used:
//! - `/users/current/stats/{range}`: one server-side rollup for a predefined range
//! - `/users/current/summaries?start&end`: one breakdown per day, for custom
//!   spans and the daily table/heatmap

use crate::services::config::ApiConfig;
use crate::services::range::StatsRange;
use crate::types::{ApiError, Result, StatsResponse, SummaryResponse};
use base64::{engine::general_purpose, Engine as _};
use chrono::{Duration, Local, NaiveDate};
use reqwest::header::AUTHORIZATION;
use serde::de::DeserializeOwned;
use tracing::{debug, info};

/// HTTP request timeout in seconds
const REQUEST_TIMEOUT_SECS: u64 = 10;

pub struct ApiClient {
    client: reqwest::blocking::Client,
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self { client, config })
    }

    /// Fetch the server-side rollup for a predefined range
    pub fn fetch_stats(&self, range: StatsRange) -> Result<StatsResponse> {
        let url = stats_url(&self.config.api_url, range);
        self.get_json(&url)
    }

    /// Fetch per-day summaries for the last `days` days, today included
    pub fn fetch_summaries(&self, days: u32) -> Result<SummaryResponse> {
        let today = Local::now().date_naive();
        let url = summaries_url(&self.config.api_url, days, today);
        self.get_json(&url)
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        info!(%url, "requesting");

        let response = self
            .client
            .get(url)
            .header(AUTHORIZATION, basic_auth_value(&self.config.api_key))
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    ApiError::Timeout(REQUEST_TIMEOUT_SECS)
                } else {
                    debug!(error = %e, "request failed");
                    ApiError::Unreachable
                }
            })?;

        let status = response.status();
        debug!(status = status.as_u16(), "response received");
        if !status.is_success() {
            return Err(ApiError::from_status(status.as_u16()).into());
        }

        let body = response.json::<T>().map_err(|e| {
            debug!(error = %e, "decode failed");
            ApiError::InvalidBody
        })?;
        Ok(body)
    }
}

/// `Basic <base64(api_key)>`; WakaTime takes the bare key, no `user:` prefix
pub fn basic_auth_value(api_key: &str) -> String {
    format!("Basic {}", general_purpose::STANDARD.encode(api_key))
}

/// Base URL with the `/v1` segment, added only if not already present
fn versioned_base(api_url: &str) -> String {
    let base = api_url.trim_end_matches('/');
    if base.ends_with("/v1") {
        base.to_string()
    } else {
        format!("{base}/v1")
    }
}

pub fn stats_url(api_url: &str, range: StatsRange) -> String {
    format!(
        "{}/users/current/stats/{}",
        versioned_base(api_url),
        range.api_name()
    )
}

pub fn summaries_url(api_url: &str, days: u32, today: NaiveDate) -> String {
    let start = today - Duration::days(i64::from(days.max(1)) - 1);
    format!(
        "{}/users/current/summaries?start={}&end={}",
        versioned_base(api_url),
        start.format("%Y-%m-%d"),
        today.format("%Y-%m-%d")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_value() {
        // base64("waka_123")
        assert_eq!(basic_auth_value("waka_123"), "Basic d2FrYV8xMjM=");
    }

    #[test]
    fn test_stats_url_inserts_version() {
        assert_eq!(
            stats_url("https://wakapi.dev/api", StatsRange::Last7Days),
            "https://wakapi.dev/api/v1/users/current/stats/last_7_days"
        );
        assert_eq!(
            stats_url("https://wakapi.dev/api/", StatsRange::AllTime),
            "https://wakapi.dev/api/v1/users/current/stats/all_time"
        );
    }

    #[test]
    fn test_stats_url_keeps_existing_version() {
        assert_eq!(
            stats_url("https://api.wakatime.com/api/v1", StatsRange::Today),
            "https://api.wakatime.com/api/v1/users/current/stats/today"
        );
    }

    #[test]
    fn test_summaries_url_span() {
        let today = NaiveDate::from_ymd_opt(2024, 3, 10).unwrap();
        assert_eq!(
            summaries_url("https://wakapi.dev/api", 7, today),
            "https://wakapi.dev/api/v1/users/current/summaries?start=2024-03-04&end=2024-03-10"
        );
        assert_eq!(
            summaries_url("https://wakapi.dev/api", 1, today),
            "https://wakapi.dev/api/v1/users/current/summaries?start=2024-03-10&end=2024-03-10"
        );
    }

    #[test]
    #[ignore] // Network required
    fn test_unreachable_server() {
        let client = ApiClient::new(ApiConfig {
            api_url: "http://127.0.0.1:9".into(),
            api_key: "k".into(),
        })
        .unwrap();
        assert!(client.fetch_stats(StatsRange::Today).is_err());
    }
}
