//! Terminal theme detection and the palette handed to every widget

use crossterm::style::{style, Color, Stylize};

/// Terminal color scheme (dark or light background)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    /// Auto-detect terminal theme from background luminance.
    /// Falls back to Dark if detection fails.
    pub fn detect() -> Self {
        match terminal_light::luma() {
            Ok(luma) if luma > 0.6 => Self::Light,
            _ => Self::Dark,
        }
    }

    /// Headings and table headers
    pub fn accent(self) -> Color {
        match self {
            Self::Dark => Color::Blue,
            Self::Light => Color::AnsiValue(25), // dark blue (ANSI 256)
        }
    }

    /// Card titles and warnings
    pub fn title(self) -> Color {
        match self {
            Self::Dark => Color::Yellow,
            Self::Light => Color::AnsiValue(130), // dark orange/yellow (ANSI 256)
        }
    }

    /// Filled bar segments and durations
    pub fn bar(self) -> Color {
        match self {
            Self::Dark => Color::Green,
            Self::Light => Color::AnsiValue(22), // dark green (ANSI 256)
        }
    }

    /// Empty bar track
    pub fn track(self) -> Color {
        match self {
            Self::Dark => Color::DarkGrey,
            Self::Light => Color::AnsiValue(252),
        }
    }

    /// Card borders and separators
    pub fn border(self) -> Color {
        match self {
            Self::Dark => Color::Rgb {
                r: 128,
                g: 128,
                b: 128,
            },
            Self::Light => Color::Grey,
        }
    }

    pub fn error(self) -> Color {
        match self {
            Self::Dark => Color::Red,
            Self::Light => Color::AnsiValue(124), // dark red (ANSI 256)
        }
    }

    /// Heatmap cell color for an intensity in 0..=255.
    /// 0 is off (black on dark, near-white on light), 255 is full green.
    pub fn heat(self, intensity: u8) -> Color {
        let i = u16::from(intensity);
        match self {
            Self::Dark => Color::Rgb {
                r: 0,
                g: intensity,
                b: 0,
            },
            Self::Light => Color::Rgb {
                r: (230 - i * 230 / 255) as u8,
                g: (230 - i * 100 / 255) as u8,
                b: (230 - i * 230 / 255) as u8,
            },
        }
    }
}

/// What a piece of text means; the palette decides how it looks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// Bold heading / field labels
    Heading,
    /// Secondary heading text and table headers
    Accent,
    Title,
    Bar,
    Track,
    Border,
    Warning,
    Error,
}

/// Styling context. A disabled palette returns text untouched, so widths
/// computed on styled output stay the same either way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Palette {
    enabled: bool,
    theme: Theme,
}

impl Palette {
    pub fn plain() -> Self {
        Self {
            enabled: false,
            theme: Theme::Dark,
        }
    }

    pub fn colored(theme: Theme) -> Self {
        Self {
            enabled: true,
            theme,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn paint(&self, role: Role, text: &str) -> String {
        if !self.enabled || text.is_empty() {
            return text.to_string();
        }
        let t = self.theme;
        let styled = match role {
            Role::Heading => style(text).with(t.accent()).bold(),
            Role::Accent => style(text).with(t.accent()),
            Role::Title => style(text).with(t.title()).bold(),
            Role::Bar => style(text).with(t.bar()),
            Role::Track => style(text).with(t.track()),
            Role::Border => style(text).with(t.border()),
            Role::Warning => style(text).with(t.title()),
            Role::Error => style(text).with(t.error()),
        };
        styled.to_string()
    }

    /// Paint a heatmap glyph at the given intensity
    pub fn heat(&self, intensity: u8, glyph: &str) -> String {
        if !self.enabled {
            return glyph.to_string();
        }
        style(glyph).with(self.theme.heat(intensity)).to_string()
    }
}
