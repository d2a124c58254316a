//! Calendar heatmap: one cell per day, brightness by tracked time

use crate::render::text::{pad_right, RenderBlock, MIN_VISIBLE_SECONDS};
use crate::render::theme::Palette;
use crate::types::DayData;
use chrono::{Duration, NaiveDate};
use std::collections::BTreeMap;

/// Rows before the grid starts growing taller (one week per column)
pub const BASE_ROWS: usize = 7;

pub const HEAT_CHAR: &str = "■";

/// Glyph + separating space
const CELL_WIDTH: usize = 2;

/// Map intensity to a shade when colors are off
pub fn shade(intensity: u8) -> &'static str {
    match intensity {
        0 => "·",
        1..=63 => "░",
        64..=127 => "▒",
        128..=191 => "▓",
        _ => "█",
    }
}

/// `round(255 * seconds / max)`, 0 when there is no maximum
pub fn intensity(seconds: f64, max_seconds: f64) -> u8 {
    if max_seconds <= 0.0 || seconds <= 0.0 {
        return 0;
    }
    (255.0 * (seconds / max_seconds)).round().clamp(0.0, 255.0) as u8
}

/// A single day in the grid
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeatCell {
    pub date: NaiveDate,
    pub seconds: f64,
    pub intensity: u8,
}

/// One cell for every calendar day from the first to the last reported day.
/// Missing days and days under a minute are zero-intensity cells.
pub fn build_cells(days: &[DayData]) -> Vec<HeatCell> {
    let mut totals: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for day in days {
        if let Some(date) = day.date() {
            *totals.entry(date).or_insert(0.0) += day.total_seconds();
        }
    }

    let (Some((&first, _)), Some((&last, _))) = (totals.first_key_value(), totals.last_key_value())
    else {
        return Vec::new();
    };

    let counted = |secs: f64| if secs >= MIN_VISIBLE_SECONDS { secs } else { 0.0 };
    let max_seconds = totals.values().copied().map(counted).fold(0.0, f64::max);

    let span = (last - first).num_days() + 1;
    (0..span)
        .map(|offset| {
            let date = first + Duration::days(offset);
            let seconds = totals.get(&date).copied().unwrap_or(0.0);
            HeatCell {
                date,
                seconds,
                intensity: intensity(counted(seconds), max_seconds),
            }
        })
        .collect()
}

fn grid_width(cells: usize, rows: usize) -> usize {
    let columns = cells.div_ceil(rows);
    (columns * CELL_WIDTH).saturating_sub(1)
}

/// Start at [`BASE_ROWS`] and add rows until the grid fits `max_width`
pub fn rows_for_width(cells: usize, max_width: usize) -> usize {
    if cells == 0 {
        return 0;
    }
    let mut rows = BASE_ROWS.min(cells);
    while rows < cells && grid_width(cells, rows) > max_width {
        rows += 1;
    }
    rows
}

/// Column-major grid of cells no wider than `max_width` (when possible)
pub fn heatmap(days: &[DayData], max_width: usize, palette: &Palette) -> RenderBlock {
    let cells = build_cells(days);
    if cells.is_empty() {
        return RenderBlock::empty();
    }

    let rows = rows_for_width(cells.len(), max_width);
    let width = grid_width(cells.len(), rows);

    let mut grid: Vec<Vec<String>> = vec![Vec::new(); rows];
    for (i, cell) in cells.iter().enumerate() {
        let glyph = if palette.is_enabled() {
            palette.heat(cell.intensity, HEAT_CHAR)
        } else {
            shade(cell.intensity).to_string()
        };
        grid[i % rows].push(glyph);
    }

    let lines = grid
        .into_iter()
        .map(|row| pad_right(&row.join(" "), width))
        .collect();

    RenderBlock::with_width(lines, width)
}
