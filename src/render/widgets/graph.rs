//! Horizontal bar graph for a ranked list of durations

use crate::render::text::{
    pad_left, pad_right, time_fmt, visible_width, RenderBlock, MIN_VISIBLE_SECONDS,
};
use crate::render::theme::{Palette, Role};
use crate::types::StatItem;

/// Bar cells for the top entry
pub const BAR_WIDTH: usize = 25;

pub const BAR_CHAR: &str = "━";

/// Filled cells for `seconds` relative to `top`: floored, at least one for
/// any nonzero value, never more than `width`
pub fn bar_length(seconds: f64, top: f64, width: usize) -> usize {
    if top <= 0.0 || seconds <= 0.0 {
        return 0;
    }
    let len = ((seconds / top) * width as f64).floor() as usize;
    len.clamp(1, width)
}

/// Render one line per item:
/// `name  ━━━━━━━━━━━━━━━━━━━━━━━━━ 1h 0m`
///
/// Bars scale against the first item. `limit` of 0 shows everything.
/// Returns an empty block when there is nothing worth drawing.
pub fn graph(items: &[StatItem], limit: usize, palette: &Palette) -> RenderBlock {
    let Some(top) = items.first() else {
        return RenderBlock::empty();
    };
    if top.total_seconds <= 0.0 {
        return RenderBlock::empty();
    }

    let count = if limit > 0 { limit.min(items.len()) } else { items.len() };
    let visible: Vec<&StatItem> = items[..count]
        .iter()
        .filter(|i| i.total_seconds >= MIN_VISIBLE_SECONDS)
        .collect();
    if visible.is_empty() {
        return RenderBlock::empty();
    }

    let durations: Vec<String> = visible.iter().map(|i| time_fmt(i.total_seconds)).collect();
    let name_width = visible.iter().map(|i| visible_width(&i.name)).max().unwrap_or(0);
    let duration_width = durations.iter().map(|d| d.len()).max().unwrap_or(0);

    let lines = visible
        .iter()
        .zip(&durations)
        .map(|(item, duration)| {
            let filled = bar_length(item.total_seconds, top.total_seconds, BAR_WIDTH);
            let track = if palette.is_enabled() {
                palette.paint(Role::Track, &BAR_CHAR.repeat(BAR_WIDTH - filled))
            } else {
                " ".repeat(BAR_WIDTH - filled)
            };
            format!(
                "{} {}{} {}",
                pad_right(&item.name, name_width),
                palette.paint(Role::Bar, &BAR_CHAR.repeat(filled)),
                track,
                palette.paint(Role::Bar, &pad_left(duration, duration_width)),
            )
        })
        .collect();

    RenderBlock::with_width(lines, name_width + 1 + BAR_WIDTH + 1 + duration_width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::text::strip_ansi;
    use crate::render::theme::Theme;

    fn filled_cells(line: &str) -> usize {
        // Plain palette draws the track as spaces, so only the bar uses BAR_CHAR
        line.matches(BAR_CHAR).count()
    }

    #[test]
    fn test_bar_length_floors() {
        assert_eq!(bar_length(3600.0, 3600.0, 25), 25);
        assert_eq!(bar_length(1800.0, 3600.0, 25), 12);
        assert_eq!(bar_length(1.0, 3600.0, 25), 1);
        assert_eq!(bar_length(0.0, 3600.0, 25), 0);
        assert_eq!(bar_length(100.0, 0.0, 25), 0);
        assert_eq!(bar_length(7200.0, 3600.0, 25), 25);
    }

    #[test]
    fn test_graph_two_items() {
        let items = vec![StatItem::new("Go", 3600.0), StatItem::new("Python", 1800.0)];

        let block = graph(&items, 0, &Palette::plain());

        assert_eq!(block.lines.len(), 2);
        assert_eq!(filled_cells(&block.lines[0]), 25);
        assert_eq!(filled_cells(&block.lines[1]), 12);
        assert!(block.lines[1].ends_with("30m 0s"));
        assert!(block.lines[0].ends_with(" 1h 0m"));
        assert!(block.lines[0].starts_with("Go     "));
    }

    #[test]
    fn test_graph_declared_width() {
        let items = vec![StatItem::new("Go", 3600.0), StatItem::new("Python", 1800.0)];

        let block = graph(&items, 0, &Palette::colored(Theme::Dark));

        assert_eq!(block.width, 6 + 1 + BAR_WIDTH + 1 + 6);
        for line in &block.lines {
            assert_eq!(visible_width(line), block.width);
        }
    }

    #[test]
    fn test_graph_bars_non_increasing() {
        let items: Vec<StatItem> = [9000.0, 7000.0, 4000.0, 900.0, 61.0]
            .iter()
            .enumerate()
            .map(|(i, s)| StatItem::new(format!("lang{i}"), *s))
            .collect();

        let block = graph(&items, 0, &Palette::plain());
        let lengths: Vec<usize> = block.lines.iter().map(|l| filled_cells(l)).collect();

        assert_eq!(lengths.len(), 5);
        assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
        assert!(lengths.iter().all(|&l| (1..=BAR_WIDTH).contains(&l)));
    }

    #[test]
    fn test_graph_drops_sub_minute_items() {
        let items = vec![StatItem::new("Rust", 600.0), StatItem::new("Make", 59.0)];

        let block = graph(&items, 0, &Palette::plain());

        assert_eq!(block.lines.len(), 1);
        assert!(block.lines[0].starts_with("Rust"));
    }

    #[test]
    fn test_graph_limit() {
        let items = vec![
            StatItem::new("a", 600.0),
            StatItem::new("b", 500.0),
            StatItem::new("c", 400.0),
        ];
        assert_eq!(graph(&items, 2, &Palette::plain()).lines.len(), 2);
        assert_eq!(graph(&items, 10, &Palette::plain()).lines.len(), 3);
    }

    #[test]
    fn test_graph_scales_against_first_item_not_limited_max() {
        let items = vec![StatItem::new("a", 1000.0), StatItem::new("b", 500.0)];

        let block = graph(&items, 0, &Palette::plain());

        assert_eq!(filled_cells(&block.lines[1]), 12);
    }

    #[test]
    fn test_graph_empty_cases() {
        assert!(graph(&[], 0, &Palette::plain()).is_empty());
        let zeros = vec![StatItem::new("a", 0.0), StatItem::new("b", 0.0)];
        assert!(graph(&zeros, 0, &Palette::plain()).is_empty());
        let tiny = vec![StatItem::new("a", 30.0)];
        assert!(graph(&tiny, 0, &Palette::plain()).is_empty());
    }

    #[test]
    fn test_colored_track_is_drawn() {
        let items = vec![StatItem::new("Go", 3600.0), StatItem::new("Python", 1800.0)];

        let block = graph(&items, 0, &Palette::colored(Theme::Dark));

        // Bar + track always span the full bar width
        assert_eq!(strip_ansi(&block.lines[1]).matches(BAR_CHAR).count(), BAR_WIDTH);
    }
}
