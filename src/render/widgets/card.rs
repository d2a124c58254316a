//! Bordered cards and the two-column layout they are composed into

use crate::render::text::{pad_right, visible_width, RenderBlock};
use crate::render::theme::{Palette, Role};
use tracing::debug;

/// Below this many terminal columns, two-column sections are stacked
pub const NARROW_COLUMNS: u16 = 96;

/// `│ ` + content + ` │`
pub const CARD_OVERHEAD: usize = 4;

const BORDER_TOP_LEFT: &str = "╭";
const BORDER_TOP_RIGHT: &str = "╮";
const BORDER_BOTTOM_LEFT: &str = "╰";
const BORDER_BOTTOM_RIGHT: &str = "╯";
const BORDER_HORIZONTAL: &str = "─";
const BORDER_VERTICAL: &str = "│";

/// Wrap a block in a rounded frame with a centered title
pub fn cardify(block: &RenderBlock, title: &str, palette: &Palette) -> RenderBlock {
    cardify_to(block, title, block.width, palette)
}

/// Like [`cardify`], with the interior at least `min_interior` wide.
/// Empty blocks produce an empty card.
pub fn cardify_to(
    block: &RenderBlock,
    title: &str,
    min_interior: usize,
    palette: &Palette,
) -> RenderBlock {
    if block.is_empty() {
        return RenderBlock::empty();
    }

    let title_width = visible_width(title);
    let interior = block.width.max(min_interior).max(title_width);
    let card_width = interior + CARD_OVERHEAD;

    // Odd leftover goes to the right of the title
    let available = card_width - title_width - 2;
    let left = available / 2;
    let right = available - left;

    let horizontal = |n: usize| palette.paint(Role::Border, &BORDER_HORIZONTAL.repeat(n));
    let vertical = palette.paint(Role::Border, BORDER_VERTICAL);

    let mut lines = Vec::with_capacity(block.lines.len() + 2);
    lines.push(format!(
        "{}{}{}{}{}",
        palette.paint(Role::Border, BORDER_TOP_LEFT),
        horizontal(left),
        palette.paint(Role::Title, title),
        horizontal(right),
        palette.paint(Role::Border, BORDER_TOP_RIGHT),
    ));
    for line in &block.lines {
        lines.push(format!("{vertical} {} {vertical}", pad_right(line, interior)));
    }
    lines.push(format!(
        "{}{}{}",
        palette.paint(Role::Border, BORDER_BOTTOM_LEFT),
        horizontal(card_width - 2),
        palette.paint(Role::Border, BORDER_BOTTOM_RIGHT),
    ));

    RenderBlock::with_width(lines, card_width)
}

/// A block destined for a layout column, framed when it has a title
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub title: Option<String>,
    pub block: RenderBlock,
}

impl Panel {
    pub fn card(title: impl Into<String>, block: RenderBlock) -> Self {
        Self {
            title: Some(title.into()),
            block,
        }
    }

    pub fn bare(block: RenderBlock) -> Self {
        Self { title: None, block }
    }

    /// Width this panel needs once framed
    fn outer_width(&self) -> usize {
        match &self.title {
            Some(title) => self.block.width.max(visible_width(title)) + CARD_OVERHEAD,
            None => self.block.width,
        }
    }
}

/// Stack panels into one column of equal width. Empty panels are skipped.
pub fn column(panels: &[Panel], palette: &Palette) -> RenderBlock {
    let panels: Vec<&Panel> = panels.iter().filter(|p| !p.block.is_empty()).collect();
    let width = panels.iter().map(|p| p.outer_width()).max().unwrap_or(0);

    let mut lines = Vec::new();
    for panel in panels {
        match &panel.title {
            Some(title) => {
                let card = cardify_to(&panel.block, title, width - CARD_OVERHEAD, palette);
                lines.extend(card.lines);
            }
            None => lines.extend(panel.block.lines.iter().map(|l| pad_right(l, width))),
        }
    }

    RenderBlock::with_width(lines, width)
}

/// Print two blocks next to each other row by row. Rows missing from the
/// shorter side are filled with blanks of that side's width.
pub fn side_by_side(left: &RenderBlock, right: &RenderBlock, gap: usize) -> RenderBlock {
    if right.is_empty() {
        return left.clone();
    }
    if left.is_empty() {
        return right.clone();
    }

    let rows = left.height().max(right.height());
    let spacer = " ".repeat(gap);
    let lines = (0..rows)
        .map(|i| {
            let l = left.lines.get(i).map_or("", String::as_str);
            let r = right.lines.get(i).map_or("", String::as_str);
            format!(
                "{}{spacer}{}",
                pad_right(l, left.width),
                pad_right(r, right.width)
            )
        })
        .collect();

    RenderBlock::with_width(lines, left.width + gap + right.width)
}

/// Responsive two-column composition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    pub columns: u16,
    pub gap: usize,
}

impl Layout {
    pub fn new(columns: u16, gap: usize) -> Self {
        Self { columns, gap }
    }

    pub fn is_narrow(&self) -> bool {
        self.columns < NARROW_COLUMNS
    }

    /// Two columns side by side, or (narrow terminals) one column with the
    /// left and right panels interleaved in order.
    pub fn compose(&self, left: Vec<Panel>, right: Vec<Panel>, palette: &Palette) -> Vec<String> {
        if self.is_narrow() {
            debug!(columns = self.columns, "narrow terminal, stacking panels");
            let mut stacked = Vec::with_capacity(left.len() + right.len());
            let mut left = left.into_iter();
            let mut right = right.into_iter();
            loop {
                let (l, r) = (left.next(), right.next());
                if l.is_none() && r.is_none() {
                    break;
                }
                stacked.extend(l);
                stacked.extend(r);
            }
            return column(&stacked, palette).lines;
        }

        let left = column(&left, palette);
        let right = column(&right, palette);
        side_by_side(&left, &right, self.gap).lines
    }
}
