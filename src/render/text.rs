//! Width, duration and date primitives shared by all widgets

use crate::types::{date_only, parse_date, StatItem};
use unicode_width::UnicodeWidthStr;

/// Entries below this many seconds are not drawn
pub const MIN_VISIBLE_SECONDS: f64 = 60.0;

/// Pre-styled lines plus their display width
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RenderBlock {
    pub lines: Vec<String>,
    pub width: usize,
}

impl RenderBlock {
    /// Width is taken from the widest visible line
    pub fn new(lines: Vec<String>) -> Self {
        let width = lines.iter().map(|l| visible_width(l)).max().unwrap_or(0);
        Self { lines, width }
    }

    pub fn with_width(lines: Vec<String>, width: usize) -> Self {
        Self { lines, width }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn height(&self) -> usize {
        self.lines.len()
    }
}

/// Remove CSI escape sequences (`ESC [ ... final`) and two-byte escapes
pub fn strip_ansi(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars();

    while let Some(c) = chars.next() {
        if c != '\x1b' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('[') => {
                for c in chars.by_ref() {
                    if ('@'..='~').contains(&c) {
                        break;
                    }
                }
            }
            Some(_) | None => {}
        }
    }

    out
}

/// Display width of a possibly styled line; escape sequences count as zero
pub fn visible_width(s: &str) -> usize {
    if s.contains('\x1b') {
        UnicodeWidthStr::width(strip_ansi(s).as_str())
    } else {
        UnicodeWidthStr::width(s)
    }
}

/// Pad on the right to `width` display columns
pub fn pad_right(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{s}{}", " ".repeat(width - w))
}

/// Pad on the left to `width` display columns
pub fn pad_left(s: &str, width: usize) -> String {
    let w = visible_width(s);
    if w >= width {
        return s.to_string();
    }
    format!("{}{s}", " ".repeat(width - w))
}

/// `XhYm` for an hour or more, `XmYs` below
pub fn time_fmt(seconds: f64) -> String {
    let sec = seconds.max(0.0) as u64;
    if sec < 3600 {
        return format!("{}m {}s", sec / 60, sec % 60);
    }
    format!("{}h {}m", sec / 3600, (sec % 3600) / 60)
}

/// `Jan 2`; malformed dates come back unchanged
pub fn format_short_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%b %-d").to_string(),
        None => raw.to_string(),
    }
}

/// `January 2, 2006`; empty input means there was no such day
pub fn format_long_date(raw: &str) -> String {
    if raw.is_empty() {
        return "None".to_string();
    }
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// `Jan 1 to Jan 7`, or a single date when both ends fall on the same day
pub fn format_date_range(start: &str, end: &str) -> String {
    if start.is_empty() || end.is_empty() {
        return String::new();
    }
    if date_only(start) == date_only(end) {
        return format_short_date(start);
    }
    format!("{} to {}", format_short_date(start), format_short_date(end))
}

/// Name of the top entry, optionally passing over a leading `unknown`
pub fn top_item_name(items: &[StatItem], skip_unknown: bool) -> &str {
    match items {
        [] => "None",
        [first, second, ..] if skip_unknown && first.name == "unknown" => &second.name,
        [first, ..] => &first.name,
    }
}
