//! 10-step tint/shade scales generated from one source color.
//!
//! Palettes are stored in ascending shade order (50 first). Presentation
//! code that wants the design-tool order (900 first) goes through
//! [`Palette::display`].

pub mod disabled;
pub mod tone;

use crate::color::{hsb2rgb, rgb2hsb, Hsb, Rgb};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shade weight labels, lightest first.
pub const SHADES: [u16; 10] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900];

/// Index of shade 500, where the accent scale keeps the source color.
const MID: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PaletteKind {
    Light,
    Dark,
    Accent,
}

impl PaletteKind {
    /// Display order used by the UI and the CLI.
    pub const ALL: [PaletteKind; 3] = [PaletteKind::Accent, PaletteKind::Light, PaletteKind::Dark];

    pub fn label(self) -> &'static str {
        match self {
            PaletteKind::Light => "light",
            PaletteKind::Dark => "dark",
            PaletteKind::Accent => "accent",
        }
    }
}

impl fmt::Display for PaletteKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PaletteKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "light" => Ok(PaletteKind::Light),
            "dark" => Ok(PaletteKind::Dark),
            "accent" => Ok(PaletteKind::Accent),
            other => Err(format!("unknown palette kind {other:?} (expected light, dark or accent)")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    kind: PaletteKind,
    colors: [Rgb; 10],
}

impl Palette {
    pub const fn new(kind: PaletteKind, colors: [Rgb; 10]) -> Self {
        Self { kind, colors }
    }

    pub fn kind(&self) -> PaletteKind {
        self.kind
    }

    /// Colors in ascending shade order.
    pub fn colors(&self) -> &[Rgb; 10] {
        &self.colors
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn shade(&self, weight: u16) -> Option<Rgb> {
        SHADES
            .iter()
            .position(|&s| s == weight)
            .map(|i| self.colors[i])
    }

    /// `(shade, color)` pairs, heaviest shade first.
    pub fn display(&self) -> impl DoubleEndedIterator<Item = (u16, Rgb)> + '_ {
        SHADES.iter().copied().zip(self.colors.iter().copied()).rev()
    }

    /// Shade label of the entry exactly equal to `rgb`. Flat scales (pure
    /// black or white sources) repeat colors; the match nearest shade 500
    /// wins, ties going to the lighter shade.
    pub fn find(&self, rgb: Rgb) -> Option<u16> {
        let mut order: [usize; 10] = std::array::from_fn(|i| i);
        order.sort_by_key(|&i| i.abs_diff(MID));
        order
            .into_iter()
            .find(|&i| crate::color::equals(self.colors[i], rgb))
            .map(|i| SHADES[i])
    }
}

fn tint(src: Hsb, t: f64) -> Rgb {
    hsb2rgb(Hsb::new(
        src.hue,
        src.saturation * (1.0 - t),
        src.brightness + (1.0 - src.brightness) * t,
    ))
}

fn shade(src: Hsb, t: f64) -> Rgb {
    hsb2rgb(Hsb::new(
        src.hue,
        (src.saturation * (1.0 + 0.25 * t)).min(1.0),
        src.brightness * (1.0 - t),
    ))
}

/// Interpolates toward white. Shade 900 stays closest to the source; the
/// gap between neighbouring shades widens on the way to shade 50.
pub fn generate_light_palette(rgb: Rgb) -> Palette {
    let src = rgb2hsb(rgb);
    let colors = std::array::from_fn(|i| {
        let step = (SHADES.len() - i) as f64 / SHADES.len() as f64;
        tint(src, 0.95 * step * step)
    });
    Palette::new(PaletteKind::Light, colors)
}

/// Interpolates toward black. Shade 50 is the source, shade 100 the first
/// step down and shade 900 the darkest. Since shade 50 reproduces the
/// source exactly, an enabled dark row always highlights shade 50.
pub fn generate_dark_palette(rgb: Rgb) -> Palette {
    let src = rgb2hsb(rgb);
    let colors = std::array::from_fn(|i| match i {
        0 => rgb,
        k => shade(src, 0.09 * k as f64),
    });
    Palette::new(PaletteKind::Dark, colors)
}

/// Tints above shade 500, shades below it, and the source itself at 500.
pub fn generate_accent_palette(rgb: Rgb) -> Palette {
    let src = rgb2hsb(rgb);
    let colors = std::array::from_fn(|i| match i.cmp(&MID) {
        std::cmp::Ordering::Less => tint(src, 0.18 * (MID - i) as f64),
        std::cmp::Ordering::Equal => rgb,
        std::cmp::Ordering::Greater => shade(src, 0.18 * (i - MID) as f64),
    });
    Palette::new(PaletteKind::Accent, colors)
}

pub fn generate(kind: PaletteKind, rgb: Rgb) -> Palette {
    match kind {
        PaletteKind::Light => generate_light_palette(rgb),
        PaletteKind::Dark => generate_dark_palette(rgb),
        PaletteKind::Accent => generate_accent_palette(rgb),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{equals, hex2rgb};
    use proptest::prelude::*;

    fn max_channel(c: Rgb) -> u8 {
        c.r.max(c.g).max(c.b)
    }

    #[test]
    fn test_accent_keeps_source_at_500() {
        let src = Rgb::new(250, 250, 250);
        let palette = generate_accent_palette(src);
        assert_eq!(palette.shade(500), Some(src));
        assert_eq!(palette.find(src), Some(500));
    }

    #[test]
    fn test_find_prefers_shade_500_on_flat_scales() {
        let palette = generate_accent_palette(Rgb::BLACK);
        assert_eq!(palette.shade(900), Some(Rgb::BLACK));
        assert_eq!(palette.find(Rgb::BLACK), Some(500));

        let dark = generate_dark_palette(Rgb::BLACK);
        assert_eq!(dark.find(Rgb::BLACK), Some(500));
        assert_eq!(dark.find(Rgb::WHITE), None);
    }

    #[test]
    fn test_display_order_is_descending() {
        let palette = generate_accent_palette(hex2rgb("3f51b5").unwrap());
        let shades: Vec<u16> = palette.display().map(|(s, _)| s).collect();
        assert_eq!(shades, vec![900, 800, 700, 600, 500, 400, 300, 200, 100, 50]);
        let (first_shade, first) = palette.display().next().unwrap();
        assert_eq!(first_shade, 900);
        assert_eq!(first, palette.colors()[9]);
    }

    #[test]
    fn test_accent_tints_lighter_shades_darker() {
        let src = hex2rgb("3f51b5").unwrap();
        let palette = generate_accent_palette(src);
        let colors = palette.colors();
        for w in colors.windows(2) {
            assert!(max_channel(w[0]) >= max_channel(w[1]), "{:?}", colors);
        }
        assert!(max_channel(colors[0]) > max_channel(src));
        assert!(max_channel(colors[9]) < max_channel(src));
    }

    #[test]
    fn test_light_palette_of_white_is_white() {
        let palette = generate_light_palette(Rgb::WHITE);
        assert!(palette.colors().iter().all(|&c| c == Rgb::WHITE));
    }

    #[test]
    fn test_dark_palette_ends_near_black() {
        let palette = generate_dark_palette(hex2rgb("595959").unwrap());
        assert_eq!(palette.shade(50), Some(Rgb::new(0x59, 0x59, 0x59)));
        let darkest = palette.shade(900).unwrap();
        assert!(max_channel(darkest) < 0x20);
    }

    #[test]
    fn test_dark_palette_reproduces_source_at_50() {
        let src = hex2rgb("121212").unwrap();
        let palette = generate_dark_palette(src);
        assert_eq!(palette.find(src), Some(50));
    }

    #[test]
    fn test_grey_stays_grey() {
        let src = hex2rgb("808080").unwrap();
        for kind in PaletteKind::ALL {
            for c in generate(kind, src).colors() {
                assert!(c.r == c.g && c.g == c.b, "{kind}: {c}");
            }
        }
    }

    #[test]
    fn test_kind_from_str() {
        assert_eq!("Accent".parse::<PaletteKind>(), Ok(PaletteKind::Accent));
        assert!("neon".parse::<PaletteKind>().is_err());
    }

    proptest! {
        #[test]
        fn every_palette_has_ten_entries(r: u8, g: u8, b: u8) {
            let c = Rgb::new(r, g, b);
            prop_assert_eq!(generate_light_palette(c).len(), 10);
            prop_assert_eq!(generate_dark_palette(c).len(), 10);
            prop_assert_eq!(generate_accent_palette(c).len(), 10);
        }

        #[test]
        fn accent_reproduces_source(r: u8, g: u8, b: u8) {
            let c = Rgb::new(r, g, b);
            let palette = generate_accent_palette(c);
            prop_assert!(palette.colors().iter().any(|&e| equals(e, c)));
            prop_assert_eq!(palette.colors()[MID], c);
        }

        #[test]
        fn light_brightens_toward_shade_50(r: u8, g: u8, b: u8) {
            let palette = generate_light_palette(Rgb::new(r, g, b));
            for w in palette.colors().windows(2) {
                prop_assert!(max_channel(w[0]) >= max_channel(w[1]));
            }
        }

        #[test]
        fn light_steps_widen_toward_shade_50(r: u8, g: u8, b: u8) {
            let palette = generate_light_palette(Rgb::new(r, g, b));
            let m: Vec<i32> = palette.colors().iter().map(|&c| i32::from(max_channel(c))).collect();
            let steps: Vec<i32> = m.windows(2).map(|w| w[0] - w[1]).collect();
            // one unit of slack for rounding
            for w in steps.windows(2) {
                prop_assert!(w[0] + 1 >= w[1], "steps {:?}", steps);
            }
        }

        #[test]
        fn dark_darkens_toward_shade_900(r: u8, g: u8, b: u8) {
            let palette = generate_dark_palette(Rgb::new(r, g, b));
            for w in palette.colors().windows(2) {
                prop_assert!(max_channel(w[0]) >= max_channel(w[1]));
            }
        }

        #[test]
        fn generation_is_deterministic(rgb in any::<[u8; 3]>(), kind in prop_oneof![
            Just(PaletteKind::Light),
            Just(PaletteKind::Dark),
            Just(PaletteKind::Accent),
        ]) {
            let c = Rgb::new(rgb[0], rgb[1], rgb[2]);
            prop_assert_eq!(generate(kind, c), generate(kind, c));
        }
    }
}
