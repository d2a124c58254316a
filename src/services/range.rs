//! Predefined query ranges and their display labels

use crate::types::{Result, WakaError};
use std::fmt;
use std::str::FromStr;

/// Predefined range accepted by `--range`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatsRange {
    Today,
    #[default]
    Last7Days,
    Last30Days,
    Last6Months,
    LastYear,
    AllTime,
}

impl StatsRange {
    pub const ALL: [StatsRange; 6] = [
        Self::Today,
        Self::Last7Days,
        Self::Last30Days,
        Self::Last6Months,
        Self::LastYear,
        Self::AllTime,
    ];

    /// Short flag form (`7d`, `1y`, ...)
    pub fn flag(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Last7Days => "7d",
            Self::Last30Days => "30d",
            Self::Last6Months => "6m",
            Self::LastYear => "1y",
            Self::AllTime => "all",
        }
    }

    /// Range identifier used by the `/stats/{range}` endpoint
    pub fn api_name(self) -> &'static str {
        match self {
            Self::Today => "today",
            Self::Last7Days => "last_7_days",
            Self::Last30Days => "last_30_days",
            Self::Last6Months => "last_6_months",
            Self::LastYear => "last_year",
            Self::AllTime => "all_time",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Last7Days => "Last 7 days",
            Self::Last30Days => "Last 30 days",
            Self::Last6Months => "Last 6 months",
            Self::LastYear => "Last year",
            Self::AllTime => "All time",
        }
    }

    /// Day count for the per-day endpoint; `all` has no fixed span
    pub fn days(self) -> Result<u32> {
        match self {
            Self::Today => Ok(1),
            Self::Last7Days => Ok(7),
            Self::Last30Days => Ok(30),
            Self::Last6Months => Ok(183),
            Self::LastYear => Ok(365),
            Self::AllTime => Err(WakaError::UnsupportedRange(
                "This range isn't supported with `--daily` or `--heatmap` flags. Use `--days` instead"
                    .into(),
            )),
        }
    }
}

impl FromStr for StatsRange {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let flag = s.trim().to_lowercase();
        Self::ALL
            .into_iter()
            .find(|r| r.flag() == flag)
            .ok_or_else(|| {
                format!("Invalid range: '{s}', must be one of today, 7d, 30d, 6m, 1y, all")
            })
    }
}

impl fmt::Display for StatsRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.flag())
    }
}

/// Heading for a range identifier as reported by the server
/// (`last_7_days` → `Last 7 days`); unknown ids are capitalized
pub fn range_heading(api_range: &str) -> String {
    let lower = api_range.trim().to_lowercase();
    if let Some(range) = StatsRange::ALL.iter().find(|r| r.api_name() == lower) {
        return range.label().to_string();
    }
    if lower == "yesterday" {
        return "Yesterday".to_string();
    }

    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Heading for a custom `--days N` request
pub fn days_heading(days: u32) -> String {
    if days == 1 {
        "Today".to_string()
    } else {
        format!("Last {days} days")
    }
}
