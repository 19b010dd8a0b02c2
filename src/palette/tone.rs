//! Light/dark/grey classification of a source color in LCH.

use super::PaletteKind;
use crate::color::{rgb2lch, Lch, Rgb};
use serde::{Deserialize, Serialize};

/// LCH cut-offs for the classification.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Thresholds {
    /// Colors at or below this lightness count as dark.
    pub dark_max_lightness: f64,
    /// Colors at or above this lightness count as light.
    pub light_min_lightness: f64,
    /// Colors at or below this chroma count as grey.
    pub grey_max_chroma: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            dark_max_lightness: 38.0,
            light_min_lightness: 62.0,
            grey_max_chroma: 30.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Tone {
    pub light: bool,
    pub dark: bool,
    pub grey: bool,
}

impl Tone {
    pub fn of(lch: Lch, thresholds: &Thresholds) -> Self {
        Self {
            light: lch.lightness >= thresholds.light_min_lightness,
            dark: lch.lightness <= thresholds.dark_max_lightness,
            grey: lch.chroma <= thresholds.grey_max_chroma,
        }
    }

    pub fn of_rgb(rgb: Rgb, thresholds: &Thresholds) -> Self {
        Self::of(rgb2lch(rgb), thresholds)
    }

    /// Whether a generated scale of `kind` makes sense for this source.
    /// The light and dark scales only apply to near-grey sources.
    pub fn enables(self, kind: PaletteKind) -> bool {
        match kind {
            PaletteKind::Accent => true,
            PaletteKind::Light => self.light && self.grey,
            PaletteKind::Dark => self.dark && self.grey,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex2rgb;

    fn tone(hex: &str) -> Tone {
        Tone::of_rgb(hex2rgb(hex).unwrap(), &Thresholds::default())
    }

    #[test]
    fn test_light_grey() {
        let t = tone("fafafa");
        assert!(t.light && t.grey && !t.dark);
        assert!(t.enables(PaletteKind::Light));
        assert!(!t.enables(PaletteKind::Dark));
    }

    #[test]
    fn test_dark_grey() {
        let t = tone("121212");
        assert!(t.dark && t.grey && !t.light);
        assert!(t.enables(PaletteKind::Dark));
        assert!(!t.enables(PaletteKind::Light));
    }

    #[test]
    fn test_saturated_only_enables_accent() {
        let t = tone("ff0000");
        assert!(!t.grey);
        assert!(t.enables(PaletteKind::Accent));
        assert!(!t.enables(PaletteKind::Light));
        assert!(!t.enables(PaletteKind::Dark));
    }

    #[test]
    fn test_mid_grey_is_neither_light_nor_dark() {
        let t = tone("777777");
        assert!(t.grey && !t.light && !t.dark);
    }

    #[test]
    fn test_custom_thresholds() {
        let loose = Thresholds {
            grey_max_chroma: 200.0,
            ..Thresholds::default()
        };
        let t = Tone::of_rgb(hex2rgb("ff0000").unwrap(), &loose);
        assert!(t.grey);
    }
}
