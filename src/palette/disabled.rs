//! Static grey scales shown in place of a scale that does not apply to
//! the current source.

use super::{Palette, PaletteKind};
use crate::color::Rgb;

const fn grey(v: u8) -> Rgb {
    Rgb::new(v, v, v)
}

const LIGHT: Palette = Palette::new(
    PaletteKind::Light,
    [
        grey(0xfa),
        grey(0xf5),
        grey(0xee),
        grey(0xe0),
        grey(0xd6),
        grey(0xc9),
        grey(0xbd),
        grey(0xb0),
        grey(0xa3),
        grey(0x96),
    ],
);

const DARK: Palette = Palette::new(
    PaletteKind::Dark,
    [
        grey(0x59),
        grey(0x54),
        grey(0x4f),
        grey(0x47),
        grey(0x40),
        grey(0x38),
        grey(0x30),
        grey(0x29),
        grey(0x1f),
        grey(0x12),
    ],
);

/// Placeholder scale for `kind`. The accent scale is always generated and
/// has none.
pub fn disabled_palette(kind: PaletteKind) -> Option<Palette> {
    match kind {
        PaletteKind::Light => Some(LIGHT),
        PaletteKind::Dark => Some(DARK),
        PaletteKind::Accent => None,
    }
}
