//! Terminal rendering: palette, width primitives, widgets and the report layout

pub mod report;
pub mod text;
pub mod theme;
pub mod widgets;

pub use report::{RenderContext, RenderOutput};
pub use text::RenderBlock;
pub use theme::{Palette, Role, Theme};
