//! Report layout: picks panels per response type and display mode

use crate::render::text::{format_date_range, format_long_date, time_fmt, top_item_name};
use crate::render::theme::{Palette, Role};
use crate::render::widgets::card::{cardify, Layout, Panel, CARD_OVERHEAD};
use crate::render::widgets::daily::daily_table;
use crate::render::widgets::fields::{fields, DisplayField};
use crate::render::widgets::graph::graph;
use crate::render::widgets::heatmap::heatmap;
use crate::services::{AggregatedRange, Aggregator};
use crate::types::{DayData, Dimension, RangeStats, Report, StatItem, SummaryResponse};
use tracing::debug;

/// Gap between the language card and the bare stats panel
const COMPACT_GAP: usize = 2;
/// Gap between card columns in full mode
const FULL_GAP: usize = 1;
/// Row cap for the long-tail panels
const TAIL_LIMIT: usize = 5;

const DAILY_TITLE: &str = "Daily Breakdown";
const HEATMAP_TITLE: &str = "Heatmap";

const NO_DAILY_DATA: &str = "No daily data available";

/// Rendered lines, or the single warning shown instead of them
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    Lines(Vec<String>),
    Empty(String),
}

impl RenderOutput {
    fn no_data(heading: &str) -> Self {
        Self::Empty(format!(
            "No data available for the selected period: '{heading}'"
        ))
    }

    pub fn lines(&self) -> &[String] {
        match self {
            Self::Lines(lines) => lines,
            Self::Empty(_) => &[],
        }
    }
}

/// Styling and terminal size for one render pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderContext {
    pub palette: Palette,
    pub columns: u16,
}

impl RenderContext {
    pub fn new(palette: Palette, columns: u16) -> Self {
        Self { palette, columns }
    }

    /// Widest grid that still fits inside a card
    fn heatmap_width(&self) -> usize {
        usize::from(self.columns).saturating_sub(CARD_OVERHEAD)
    }
}

/// Everything the layout needs, independent of which endpoint produced it
struct Payload<'a> {
    heading: String,
    fields: Vec<DisplayField>,
    ranked: Vec<(Dimension, &'a [StatItem])>,
}

impl Payload<'_> {
    fn items(&self, dimension: Dimension) -> &[StatItem] {
        self.ranked
            .iter()
            .find(|(d, _)| *d == dimension)
            .map(|(_, items)| *items)
            .unwrap_or(&[])
    }
}

/// Render whichever response the fetch layer produced
pub fn render(report: &Report, full: bool, heading: &str, ctx: &RenderContext) -> RenderOutput {
    match report {
        Report::Range(stats) => render_stats(stats, full, heading, ctx),
        Report::Days(summary) => render_summary(summary, full, heading, ctx),
    }
}

/// Server-side rollup for a predefined range
pub fn render_stats(
    stats: &RangeStats,
    full: bool,
    heading: &str,
    ctx: &RenderContext,
) -> RenderOutput {
    if stats.is_empty() {
        return RenderOutput::no_data(heading);
    }

    let heading = if stats.range == "all_time" {
        heading.to_string()
    } else {
        with_date_range(heading, &stats.start, &stats.end)
    };

    let mut items = vec![DisplayField::new("Total Time", time_fmt(stats.total_seconds))];
    if stats.days_including_holidays > 1 {
        items.push(DisplayField::new("Daily Avg", time_fmt(stats.daily_average)));
    }
    items.extend(common_fields(
        &stats.projects,
        &stats.editors,
        &stats.operating_systems,
        &stats.languages,
    ));

    let payload = Payload {
        heading,
        fields: items,
        ranked: vec![
            (Dimension::Languages, stats.languages.as_slice()),
            (Dimension::Projects, stats.projects.as_slice()),
            (Dimension::Editors, stats.editors.as_slice()),
            (Dimension::OperatingSystems, stats.operating_systems.as_slice()),
            (Dimension::Categories, stats.categories.as_slice()),
            (Dimension::Machines, stats.machines.as_slice()),
            (Dimension::Branches, stats.branches.as_slice()),
        ],
    };

    RenderOutput::Lines(layout(&payload, full, ctx))
}

/// Per-day series: aggregate locally, then lay out like a rollup.
/// Full mode appends the daily table and heatmap cards.
pub fn render_summary(
    summary: &SummaryResponse,
    full: bool,
    heading: &str,
    ctx: &RenderContext,
) -> RenderOutput {
    if summary.is_empty() {
        return RenderOutput::no_data(heading);
    }

    let range = Aggregator::summarize(summary);
    let payload = Payload {
        heading: with_date_range(heading, &summary.start, &summary.end),
        fields: summary_fields(summary, &range),
        ranked: Dimension::ALL
            .iter()
            .map(|&d| (d, range.items(d)))
            .collect(),
    };

    let mut lines = layout(&payload, full, ctx);

    if full {
        let table = daily_table(&summary.data, &ctx.palette);
        if table.is_empty() {
            debug!("no day above the one-minute floor, omitting daily card");
            lines.push(ctx.palette.paint(Role::Warning, NO_DAILY_DATA));
        } else {
            lines.extend(cardify(&table.block, DAILY_TITLE, &ctx.palette).lines);
        }
        let grid = heatmap(&summary.data, ctx.heatmap_width(), &ctx.palette);
        lines.extend(cardify(&grid, HEATMAP_TITLE, &ctx.palette).lines);
    }

    RenderOutput::Lines(lines)
}

/// Daily table card titled with `heading`, followed by the heatmap card
pub fn render_daily_breakdown(days: &[DayData], heading: &str, ctx: &RenderContext) -> RenderOutput {
    if days.is_empty() {
        return RenderOutput::Empty(NO_DAILY_DATA.into());
    }

    let table = daily_table(days, &ctx.palette);
    if table.is_empty() {
        return RenderOutput::Empty(NO_DAILY_DATA.into());
    }

    let mut lines = cardify(&table.block, heading, &ctx.palette).lines;
    let grid = heatmap(days, ctx.heatmap_width(), &ctx.palette);
    lines.extend(cardify(&grid, HEATMAP_TITLE, &ctx.palette).lines);

    RenderOutput::Lines(lines)
}

/// Heatmap card on its own
pub fn render_heatmap(days: &[DayData], heading: &str, ctx: &RenderContext) -> RenderOutput {
    if days.is_empty() {
        return RenderOutput::Empty(NO_DAILY_DATA.into());
    }

    let grid = heatmap(days, ctx.heatmap_width(), &ctx.palette);
    if grid.is_empty() {
        return RenderOutput::Empty("No heatmap data available".into());
    }

    RenderOutput::Lines(cardify(&grid, heading, &ctx.palette).lines)
}

fn with_date_range(heading: &str, start: &str, end: &str) -> String {
    let range = format_date_range(start, end);
    if range.is_empty() {
        heading.to_string()
    } else {
        format!("{heading} ({range})")
    }
}

fn summary_fields(summary: &SummaryResponse, range: &AggregatedRange) -> Vec<DisplayField> {
    let mut items = vec![DisplayField::new("Total Time", time_fmt(range.cumulative_seconds))];

    if summary.data.len() > 1 {
        let best = match &range.busiest_day {
            Some(day) => format!("{} ({})", format_long_date(&day.date), time_fmt(day.seconds)),
            None => format!("{} ({})", format_long_date(""), time_fmt(0.0)),
        };
        items.push(DisplayField::new("Daily Avg", time_fmt(range.daily_average)));
        items.push(DisplayField::new(
            "Active Days",
            format!("{}/{} days", range.active_days.active, range.active_days.total),
        ));
        items.push(DisplayField::new("Best Day", best));
    }

    items.extend(common_fields(
        range.items(Dimension::Projects),
        range.items(Dimension::Editors),
        range.items(Dimension::OperatingSystems),
        range.items(Dimension::Languages),
    ));
    items
}

fn common_fields(
    projects: &[StatItem],
    editors: &[StatItem],
    operating_systems: &[StatItem],
    languages: &[StatItem],
) -> [DisplayField; 5] {
    [
        DisplayField::new("Top Project", top_item_name(projects, true)),
        DisplayField::new("Top Editor", top_item_name(editors, false)),
        DisplayField::new("Top OS", top_item_name(operating_systems, false)),
        DisplayField::new("Languages", languages.len().to_string()),
        DisplayField::new("Projects", projects.len().to_string()),
    ]
}

fn layout(payload: &Payload<'_>, full: bool, ctx: &RenderContext) -> Vec<String> {
    let palette = &ctx.palette;
    let summary = fields(&payload.heading, &payload.fields, palette);
    let languages = graph(payload.items(Dimension::Languages), summary.height(), palette);

    if !full {
        let layout = Layout::new(ctx.columns, COMPACT_GAP);
        return layout.compose(
            vec![Panel::card(Dimension::Languages.title(), languages)],
            vec![Panel::bare(summary)],
            palette,
        );
    }

    let panel = |dimension: Dimension, limit: usize| {
        let block = graph(payload.items(dimension), limit, palette);
        if block.is_empty() {
            debug!(panel = dimension.title(), "no entries, panel omitted");
        }
        Panel::card(dimension.title(), block)
    };

    let left = vec![
        Panel::card(Dimension::Languages.title(), languages),
        panel(Dimension::Projects, 0),
        panel(Dimension::Categories, 0),
        panel(Dimension::Entities, TAIL_LIMIT),
    ];
    let right = vec![
        Panel::card("Stats", summary),
        panel(Dimension::Editors, 0),
        panel(Dimension::OperatingSystems, 0),
        panel(Dimension::Machines, 0),
        panel(Dimension::Branches, TAIL_LIMIT),
    ];

    Layout::new(ctx.columns, FULL_GAP).compose(left, right, palette)
}
