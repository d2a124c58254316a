//! Daily breakdown table - one row per day, newest first

use crate::render::text::{
    format_short_date, pad_left, pad_right, time_fmt, top_item_name, visible_width, RenderBlock,
    MIN_VISIBLE_SECONDS,
};
use crate::render::theme::{Palette, Role};
use crate::render::widgets::graph::{bar_length, BAR_CHAR};
use crate::types::DayData;

/// Maximum inline bar cells in the Time column
pub const TABLE_BAR_WIDTH: usize = 10;

const COLUMN_SEPARATOR: &str = " │ ";
const HEADERS: [&str; 4] = ["Date", "Time", "Language", "Project"];

/// Rendered table plus the number of data rows it contains
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DailyTable {
    pub block: RenderBlock,
    pub rows: usize,
}

impl DailyTable {
    /// No day reached the one-minute floor
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }
}

struct Row {
    date: String,
    seconds: f64,
    duration: String,
    language: String,
    project: String,
}

/// Widest printed value, but never narrower than the header label
fn column_width(header: &str, widest: Option<usize>) -> usize {
    widest.unwrap_or(0).max(visible_width(header))
}

/// Header, separator, then one row per day with at least a minute tracked.
/// Bars scale against the busiest day in the table.
pub fn daily_table(days: &[DayData], palette: &Palette) -> DailyTable {
    let mut sorted: Vec<&DayData> = days
        .iter()
        .filter(|d| d.total_seconds() >= MIN_VISIBLE_SECONDS)
        .collect();
    sorted.sort_by(|a, b| b.date_str().cmp(a.date_str()));

    let rows: Vec<Row> = sorted
        .iter()
        .map(|day| Row {
            date: format_short_date(day.day_key()),
            seconds: day.total_seconds(),
            duration: time_fmt(day.total_seconds()),
            language: top_item_name(&day.languages, false).to_string(),
            project: top_item_name(&day.projects, true).to_string(),
        })
        .collect();

    let max_seconds = rows.iter().map(|r| r.seconds).fold(0.0, f64::max);
    let duration_width = rows.iter().map(|r| r.duration.len()).max().unwrap_or(0);

    let widths = [
        column_width(HEADERS[0], rows.iter().map(|r| visible_width(&r.date)).max()),
        column_width(HEADERS[1], Some(duration_width + 1 + TABLE_BAR_WIDTH)),
        column_width(HEADERS[2], rows.iter().map(|r| visible_width(&r.language)).max()),
        column_width(HEADERS[3], rows.iter().map(|r| visible_width(&r.project)).max()),
    ];

    let separator = palette.paint(Role::Border, COLUMN_SEPARATOR);
    let mut lines = Vec::with_capacity(rows.len() + 2);

    lines.push(
        HEADERS
            .iter()
            .zip(widths)
            .map(|(h, w)| palette.paint(Role::Accent, &pad_right(h, w)))
            .collect::<Vec<_>>()
            .join(separator.as_str()),
    );
    lines.push(palette.paint(
        Role::Border,
        &widths
            .iter()
            .map(|w| "─".repeat(*w))
            .collect::<Vec<_>>()
            .join("─┼─"),
    ));

    for row in &rows {
        let bar = BAR_CHAR.repeat(bar_length(row.seconds, max_seconds, TABLE_BAR_WIDTH));
        let time = format!("{} {bar}", pad_left(&row.duration, duration_width));
        lines.push(
            [
                pad_right(&row.date, widths[0]),
                palette.paint(Role::Bar, &pad_right(&time, widths[1])),
                pad_right(&row.language, widths[2]),
                pad_right(&row.project, widths[3]),
            ]
            .join(separator.as_str()),
        );
    }

    let total_width = widths.iter().sum::<usize>() + COLUMN_SEPARATOR.chars().count() * 3;
    DailyTable {
        block: RenderBlock::with_width(lines, total_width),
        rows: rows.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::text::strip_ansi;
    use crate::render::theme::Theme;
    use crate::types::{DayRange, GrandTotal, StatItem};

    fn make_day(date: &str, total: f64, lang: &str, projects: &[&str]) -> DayData {
        DayData {
            languages: vec![StatItem::new(lang, total)],
            projects: projects.iter().map(|p| StatItem::new(*p, total)).collect(),
            grand_total: GrandTotal {
                total_seconds: total,
                ..Default::default()
            },
            range: DayRange {
                start: format!("{date}T00:00:00Z"),
                ..Default::default()
            },
            ..Default::default()
        }
    }

    #[test]
    fn test_rows_sorted_newest_first() {
        let days = vec![
            make_day("2024-01-01", 3600.0, "Rust", &["a"]),
            make_day("2024-01-03", 1800.0, "Go", &["b"]),
            make_day("2024-01-02", 600.0, "C", &["c"]),
        ];

        let table = daily_table(&days, &Palette::plain());

        assert_eq!(table.rows, 3);
        assert!(table.block.lines[2].starts_with("Jan 3"));
        assert!(table.block.lines[3].starts_with("Jan 2"));
        assert!(table.block.lines[4].starts_with("Jan 1"));
    }

    #[test]
    fn test_sub_minute_days_skipped() {
        let days = vec![make_day("2024-01-01", 59.0, "Rust", &["a"])];

        let table = daily_table(&days, &Palette::plain());

        assert!(table.is_empty());
        assert_eq!(table.block.lines.len(), 2);
        assert!(table.block.lines[0].starts_with("Date"));
    }

    #[test]
    fn test_single_day_full_bar() {
        let days = vec![make_day("2024-01-01", 7200.0, "Rust", &["a"])];

        let table = daily_table(&days, &Palette::plain());

        assert_eq!(table.block.lines[2].matches(BAR_CHAR).count(), TABLE_BAR_WIDTH);
    }

    #[test]
    fn test_bars_scale_to_busiest_day() {
        let days = vec![
            make_day("2024-01-01", 4000.0, "Rust", &["a"]),
            make_day("2024-01-02", 1000.0, "Rust", &["a"]),
            make_day("2024-01-03", 61.0, "Rust", &["a"]),
        ];

        let table = daily_table(&days, &Palette::plain());
        let bars: Vec<usize> = table.block.lines[2..]
            .iter()
            .map(|l| l.matches(BAR_CHAR).count())
            .collect();

        // Jan 3, Jan 2, Jan 1
        assert_eq!(bars, vec![1, 2, 10]);
    }

    #[test]
    fn test_top_project_skips_unknown() {
        let days = vec![make_day("2024-01-01", 600.0, "Rust", &["unknown", "wakastat"])];

        let table = daily_table(&days, &Palette::plain());

        assert!(table.block.lines[2].contains("wakastat"));
        assert!(!table.block.lines[2].contains("unknown"));
    }

    #[test]
    fn test_column_widths_and_alignment() {
        let days = vec![
            make_day("2024-01-01", 45_000.0, "TypeScript", &["monorepo-frontend"]),
            make_day("2024-01-02", 120.0, "Go", &["x"]),
        ];

        let table = daily_table(&days, &Palette::colored(Theme::Dark));

        for line in &table.block.lines {
            assert_eq!(visible_width(line), table.block.width);
        }
        // "12h 30m" + space + 10-cell bar
        let header = strip_ansi(&table.block.lines[0]);
        let expected = format!("Date  │ Time{} │ Language   │ Project", " ".repeat(14));
        assert!(header.starts_with(&expected));
    }

    #[test]
    fn test_malformed_date_falls_back_to_raw() {
        let mut day = make_day("2024-01-01", 600.0, "Rust", &["a"]);
        day.range.start = "yesterday-ish".into();

        let table = daily_table(&[day], &Palette::plain());

        assert!(table.block.lines[2].starts_with("yesterday-ish"));
    }
}
