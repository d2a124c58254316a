//! Wire and domain types for WakaTime-compatible stats

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One named time bucket (a language, project, editor, ...)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StatItem {
    pub name: String,
    #[serde(default)]
    pub total_seconds: f64,
}

impl StatItem {
    pub fn new(name: impl Into<String>, total_seconds: f64) -> Self {
        Self {
            name: name.into(),
            total_seconds,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GrandTotal {
    #[serde(default)]
    pub digital: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub total_seconds: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DayRange {
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub timezone: String,
}

/// A single calendar day's breakdown from the summaries endpoint
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DayData {
    #[serde(default)]
    pub languages: Vec<StatItem>,
    #[serde(default)]
    pub projects: Vec<StatItem>,
    #[serde(default)]
    pub editors: Vec<StatItem>,
    #[serde(default)]
    pub operating_systems: Vec<StatItem>,
    #[serde(default)]
    pub categories: Vec<StatItem>,
    #[serde(default)]
    pub machines: Vec<StatItem>,
    #[serde(default)]
    pub entities: Vec<StatItem>,
    #[serde(default)]
    pub branches: Vec<StatItem>,
    #[serde(default)]
    pub grand_total: GrandTotal,
    #[serde(default)]
    pub range: DayRange,
}

impl DayData {
    pub fn total_seconds(&self) -> f64 {
        self.grand_total.total_seconds
    }

    /// Raw date string of this day, `range.date` preferred over `range.start`
    pub fn day_key(&self) -> &str {
        if self.range.date.is_empty() {
            &self.range.start
        } else {
            &self.range.date
        }
    }

    /// ISO date-only portion of [`Self::day_key`]
    pub fn date_str(&self) -> &str {
        date_only(self.day_key())
    }

    pub fn date(&self) -> Option<NaiveDate> {
        parse_date(self.day_key())
    }

    /// True when any dimension reported an entry
    pub fn has_entries(&self) -> bool {
        Dimension::ALL.iter().any(|d| !d.items(self).is_empty())
    }
}

/// Categorical facet of time-tracking data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    Languages,
    Projects,
    Editors,
    OperatingSystems,
    Categories,
    Machines,
    Entities,
    Branches,
}

impl Dimension {
    pub const ALL: [Dimension; 8] = [
        Self::Languages,
        Self::Projects,
        Self::Editors,
        Self::OperatingSystems,
        Self::Categories,
        Self::Machines,
        Self::Entities,
        Self::Branches,
    ];

    /// Selector for this dimension's entries on a day
    pub fn items(self, day: &DayData) -> &[StatItem] {
        match self {
            Self::Languages => &day.languages,
            Self::Projects => &day.projects,
            Self::Editors => &day.editors,
            Self::OperatingSystems => &day.operating_systems,
            Self::Categories => &day.categories,
            Self::Machines => &day.machines,
            Self::Entities => &day.entities,
            Self::Branches => &day.branches,
        }
    }

    /// Card title used when this dimension gets its own panel
    pub fn title(self) -> &'static str {
        match self {
            Self::Languages => "Languages",
            Self::Projects => "Projects",
            Self::Editors => "Editors",
            Self::OperatingSystems => "Operating Systems",
            Self::Categories => "Categories",
            Self::Machines => "Machines",
            Self::Entities => "Entities",
            Self::Branches => "Branches",
        }
    }
}

/// Service-computed rollup for a whole predefined range (`/stats/{range}`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct RangeStats {
    #[serde(default)]
    pub range: String,
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
    #[serde(default)]
    pub total_seconds: f64,
    #[serde(default)]
    pub daily_average: f64,
    #[serde(default)]
    pub days_including_holidays: u32,
    #[serde(default)]
    pub human_readable_range: String,
    #[serde(default)]
    pub human_readable_total: String,
    #[serde(default)]
    pub human_readable_daily_average: String,
    #[serde(default)]
    pub languages: Vec<StatItem>,
    #[serde(default)]
    pub projects: Vec<StatItem>,
    #[serde(default)]
    pub editors: Vec<StatItem>,
    #[serde(default)]
    pub operating_systems: Vec<StatItem>,
    #[serde(default)]
    pub categories: Vec<StatItem>,
    #[serde(default)]
    pub machines: Vec<StatItem>,
    #[serde(default)]
    pub branches: Vec<StatItem>,
}

impl RangeStats {
    /// No entries in any dimension and no tracked time
    pub fn is_empty(&self) -> bool {
        self.total_seconds == 0.0
            && [
                &self.languages,
                &self.projects,
                &self.editors,
                &self.operating_systems,
                &self.categories,
                &self.machines,
                &self.branches,
            ]
            .iter()
            .all(|items| items.is_empty())
    }
}

/// `/stats/{range}` response envelope
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct StatsResponse {
    #[serde(default)]
    pub data: RangeStats,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct CumulativeTotal {
    #[serde(default)]
    pub seconds: f64,
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub digital: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct DailyAverage {
    #[serde(default)]
    pub days_including_holidays: u32,
    #[serde(default)]
    pub days_minus_holidays: u32,
    #[serde(default)]
    pub holidays: u32,
    #[serde(default)]
    pub seconds: f64,
    #[serde(default)]
    pub text: String,
}

/// `/summaries` response: one [`DayData`] per calendar day
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SummaryResponse {
    #[serde(default)]
    pub data: Vec<DayData>,
    #[serde(default)]
    pub cumulative_total: CumulativeTotal,
    #[serde(default)]
    pub daily_average: DailyAverage,
    #[serde(default)]
    pub start: String,
    #[serde(default)]
    pub end: String,
}

impl SummaryResponse {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
            || (self.cumulative_total.seconds == 0.0
                && self
                    .data
                    .iter()
                    .all(|d| d.total_seconds() == 0.0 && !d.has_entries()))
    }
}

/// Decoded response, tagged by which endpoint produced it
#[derive(Debug, Clone, PartialEq)]
pub enum Report {
    /// Server-side rollup, rendered as-is
    Range(RangeStats),
    /// Per-day series, aggregated locally before rendering
    Days(SummaryResponse),
}

/// Strip a time-of-day/timezone suffix: `2024-01-15T00:00:00Z` → `2024-01-15`
pub fn date_only(raw: &str) -> &str {
    let raw = raw.trim();
    raw.split(['T', ' ']).next().unwrap_or(raw)
}

pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date_only(raw), "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_only_strips_time_suffix() {
        assert_eq!(date_only("2024-01-15T00:00:00+01:00"), "2024-01-15");
        assert_eq!(date_only("2024-01-15 23:59:59"), "2024-01-15");
        assert_eq!(date_only("2024-01-15"), "2024-01-15");
        assert_eq!(date_only(""), "");
    }

    #[test]
    fn test_parse_date_malformed() {
        assert_eq!(
            parse_date("2024-01-15T10:00:00Z"),
            NaiveDate::from_ymd_opt(2024, 1, 15)
        );
        assert!(parse_date("15/01/2024").is_none());
        assert!(parse_date("").is_none());
    }

    #[test]
    fn test_day_key_prefers_date() {
        let mut day = DayData::default();
        day.range.start = "2024-01-14T23:00:00Z".into();
        assert_eq!(day.date_str(), "2024-01-14");
        day.range.date = "2024-01-15".into();
        assert_eq!(day.date_str(), "2024-01-15");
    }

    #[test]
    fn test_deserialize_summary_with_missing_fields() {
        let json = r#"{
            "data": [{
                "languages": [{"name": "Rust", "total_seconds": 120.5, "percent": 100}],
                "grand_total": {"total_seconds": 120.5, "text": "2 mins"},
                "range": {"date": "2024-01-15", "start": "2024-01-15T00:00:00Z"}
            }],
            "cumulative_total": {"seconds": 120.5},
            "daily_average": {"days_including_holidays": 1, "days_minus_holidays": 1, "seconds": 120.5}
        }"#;
        let resp: SummaryResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.data.len(), 1);
        assert_eq!(resp.data[0].languages[0].name, "Rust");
        assert!(resp.data[0].projects.is_empty());
        assert!(!resp.is_empty());
    }

    #[test]
    fn test_range_stats_is_empty() {
        let mut stats = RangeStats::default();
        assert!(stats.is_empty());
        stats.machines.push(StatItem::new("laptop", 0.0));
        assert!(!stats.is_empty());
    }

    #[test]
    fn test_summary_all_zero_days_is_empty() {
        let resp = SummaryResponse {
            data: vec![DayData::default(), DayData::default()],
            ..Default::default()
        };
        assert!(resp.is_empty());
    }

    #[test]
    fn test_dimension_selectors_cover_all_fields() {
        let day = DayData {
            branches: vec![StatItem::new("main", 60.0)],
            ..Default::default()
        };
        assert_eq!(Dimension::Branches.items(&day).len(), 1);
        assert!(Dimension::Languages.items(&day).is_empty());
        assert!(day.has_entries());
    }
}
