//! Theme configuration - Monochrome grayscale chrome around colored swatches

pub mod borders;
pub mod palette;

pub use borders::BorderStyle;
pub use palette::Palette;

use ratatui::style::Color;
use shades::Rgb;

/// Active theme configuration
#[derive(Debug, Clone)]
pub struct Theme {
    pub palette: Palette,
}

impl Theme {
    pub fn new() -> Self {
        Self {
            palette: Palette::MONO,
        }
    }

    pub fn border_set(&self, focused: bool) -> ratatui::symbols::border::Set<'static> {
        BorderStyle::for_focus(focused).to_border_set()
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::new()
    }
}

/// Get the theme (always Mono)
pub fn get_theme() -> Theme {
    Theme::new()
}

/// Terminal color for a generated swatch.
pub fn swatch_color(rgb: Rgb) -> Color {
    Color::Rgb(rgb.r, rgb.g, rgb.b)
}
