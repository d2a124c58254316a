//! Key/value summary panel

use crate::render::text::{pad_right, visible_width, RenderBlock};
use crate::render::theme::{Palette, Role};

/// One scalar fact for the summary panel
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayField {
    pub label: String,
    pub value: String,
}

impl DisplayField {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Heading, a dashed underline, then aligned `Label  value` rows.
/// The part of the heading before ` (` is emphasized.
pub fn fields(heading: &str, items: &[DisplayField], palette: &Palette) -> RenderBlock {
    if items.is_empty() {
        return RenderBlock::empty();
    }

    let label_width = items.iter().map(|f| visible_width(&f.label)).max().unwrap_or(0) + 2;
    let heading_width = visible_width(heading);
    let width = items
        .iter()
        .map(|f| label_width + visible_width(&f.value))
        .max()
        .unwrap_or(0)
        .max(heading_width);

    let mut lines = Vec::with_capacity(items.len() + 2);

    let (main, rest) = match heading.find(" (") {
        Some(idx) => heading.split_at(idx),
        None => (heading, ""),
    };
    lines.push(pad_right(
        &format!(
            "{}{}",
            palette.paint(Role::Heading, main),
            palette.paint(Role::Accent, rest)
        ),
        width,
    ));
    lines.push(pad_right(&"-".repeat(heading_width), width));

    for field in items {
        let line = format!(
            "{}{}",
            palette.paint(Role::Heading, &pad_right(&field.label, label_width)),
            field.value
        );
        lines.push(pad_right(&line, width));
    }

    RenderBlock::with_width(lines, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::theme::Theme;

    #[test]
    fn test_fields_layout() {
        let items = vec![
            DisplayField::new("Total Time", "12h 3m"),
            DisplayField::new("Top OS", "Linux"),
        ];

        let block = fields("Last 7 days (Jan 1 to Jan 7)", &items, &Palette::plain());

        assert_eq!(block.width, 28);
        assert_eq!(block.lines.len(), 4);
        assert_eq!(block.lines[0], "Last 7 days (Jan 1 to Jan 7)");
        assert_eq!(block.lines[1], "-".repeat(28));
        assert!(block.lines[2].starts_with("Total Time  12h 3m"));
        assert!(block.lines[3].starts_with("Top OS      Linux"));
        for line in &block.lines {
            assert_eq!(visible_width(line), 28);
        }
    }

    #[test]
    fn test_fields_wider_than_heading() {
        let items = vec![DisplayField::new("Top Project", "a-really-long-project-name")];

        let block = fields("Today", &items, &Palette::colored(Theme::Dark));

        assert_eq!(block.width, 13 + 26);
        assert!(block.lines.iter().all(|l| visible_width(l) == block.width));
    }

    #[test]
    fn test_fields_empty() {
        assert!(fields("Today", &[], &Palette::plain()).is_empty());
    }
}
