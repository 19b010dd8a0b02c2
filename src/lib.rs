//! Palette generation from a single source color.
//!
//! The [`color`] module holds the conversions between hex, RGB, HSB and LCH
//! plus contrast and equality helpers. The [`palette`] module expands one
//! source color into 10-step light, dark and accent scales.

pub mod color;
pub mod palette;

pub use color::contrast::{label_color, ratio};
pub use color::{
    equals, hex2lch, hex2rgb, hsb2rgb, parse_hex, rgb2hex, rgb2hsb, rgb2lch, ColorError, Hsb,
    Lch, Rgb,
};
pub use palette::disabled::disabled_palette;
pub use palette::tone::{Thresholds, Tone};
pub use palette::{
    generate, generate_accent_palette, generate_dark_palette, generate_light_palette, Palette,
    PaletteKind, SHADES,
};
