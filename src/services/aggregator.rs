//! Aggregator service for collapsing a per-day series into range totals

use crate::types::{DayData, Dimension, StatItem, SummaryResponse};
use std::collections::HashMap;

/// The day with the most tracked time
#[derive(Debug, Clone, PartialEq)]
pub struct BusiestDay {
    /// Raw date string as reported by the server
    pub date: String,
    pub seconds: f64,
}

/// Active vs. total day counts, as accounted by the server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActiveDays {
    pub active: u32,
    pub total: u32,
}

/// Range-level view built from a sequence of [`DayData`]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AggregatedRange {
    ranked: HashMap<Dimension, Vec<StatItem>>,
    pub cumulative_seconds: f64,
    pub daily_average: f64,
    pub busiest_day: Option<BusiestDay>,
    pub active_days: ActiveDays,
    pub day_count: usize,
}

impl AggregatedRange {
    /// Ranked entries for a dimension (empty if not aggregated or no data)
    pub fn items(&self, dimension: Dimension) -> &[StatItem] {
        self.ranked.get(&dimension).map(Vec::as_slice).unwrap_or(&[])
    }
}

/// Aggregator for computing range statistics from daily breakdowns
pub struct Aggregator;

impl Aggregator {
    /// Sum one dimension across all days, sorted by duration descending.
    /// Equal durations are ordered by name ascending.
    pub fn rank(days: &[DayData], dimension: Dimension) -> Vec<StatItem> {
        let mut totals: HashMap<&str, f64> = HashMap::new();

        for day in days {
            for item in dimension.items(day) {
                *totals.entry(item.name.as_str()).or_insert(0.0) += item.total_seconds;
            }
        }

        let mut result: Vec<StatItem> = totals
            .into_iter()
            .map(|(name, seconds)| StatItem::new(name, seconds))
            .collect();
        sort_ranked(&mut result);
        result
    }

    /// Rank every requested dimension and compute range-wide totals
    pub fn aggregate(days: &[DayData], dimensions: &[Dimension]) -> AggregatedRange {
        let ranked = dimensions
            .iter()
            .map(|&dimension| (dimension, Self::rank(days, dimension)))
            .collect();

        let cumulative_seconds = Self::cumulative(days);
        let day_count = days.len();
        let daily_average = if day_count == 0 {
            0.0
        } else {
            cumulative_seconds / day_count as f64
        };

        AggregatedRange {
            ranked,
            cumulative_seconds,
            daily_average,
            busiest_day: Self::busiest_day(days),
            active_days: ActiveDays {
                active: 0,
                total: day_count as u32,
            },
            day_count,
        }
    }

    /// Aggregate a summaries response over all dimensions, preferring the
    /// server's own daily average and active-day accounting
    pub fn summarize(response: &SummaryResponse) -> AggregatedRange {
        let mut range = Self::aggregate(&response.data, &Dimension::ALL);

        let upstream = &response.daily_average;
        if upstream.seconds > 0.0 {
            range.daily_average = upstream.seconds;
        }
        range.active_days = ActiveDays {
            active: upstream.days_minus_holidays,
            total: if upstream.days_including_holidays > 0 {
                upstream.days_including_holidays
            } else {
                range.day_count as u32
            },
        };
        range
    }

    /// Sum of every day's grand total
    pub fn cumulative(days: &[DayData]) -> f64 {
        days.iter().map(DayData::total_seconds).sum()
    }

    /// Day with the highest grand total; the first one wins on ties.
    /// None when the series is empty or has no tracked time.
    pub fn busiest_day(days: &[DayData]) -> Option<BusiestDay> {
        let mut best: Option<BusiestDay> = None;

        for day in days {
            let seconds = day.total_seconds();
            let is_better = match &best {
                None => seconds > 0.0,
                Some(current) => seconds > current.seconds,
            };
            if is_better {
                best = Some(BusiestDay {
                    date: day.day_key().to_string(),
                    seconds,
                });
            }
        }

        best
    }
}

/// Duration descending, then name ascending
pub fn sort_ranked(items: &mut [StatItem]) {
    items.sort_by(|a, b| {
        b.total_seconds
            .total_cmp(&a.total_seconds)
            .then_with(|| a.name.cmp(&b.name))
    });
}
