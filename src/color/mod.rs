//! Single-color representations and the conversions between them.

pub mod contrast;
pub mod lab;

use serde::Serialize;
use std::fmt;

pub use lab::{hex2lch, rgb2lch, Lch};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ColorError {
    #[error("invalid hex color {input:?}: expected exactly 6 hexadecimal digits")]
    InvalidFormat { input: String },
}

/// 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Self = Self::new(0, 0, 0);
    pub const WHITE: Self = Self::new(255, 255, 255);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build from channels in `[0, 1]`, rounding to nearest and clamping
    /// anything that drifted outside the range.
    pub fn from_unit(r: f64, g: f64, b: f64) -> Self {
        Self::new(unit_to_u8(r), unit_to_u8(g), unit_to_u8(b))
    }

    pub fn channels(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", rgb2hex(*self))
    }
}

fn unit_to_u8(v: f64) -> u8 {
    if v.is_nan() {
        return 0;
    }
    (v * 255.0).round().clamp(0.0, 255.0) as u8
}

/// Hue in degrees `[0, 360)`, saturation and brightness in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Hsb {
    pub hue: f64,
    pub saturation: f64,
    pub brightness: f64,
}

impl Hsb {
    /// Normalizes the hue onto the color wheel and clamps the other
    /// components.
    pub fn new(hue: f64, saturation: f64, brightness: f64) -> Self {
        let hue = if hue.is_finite() { hue.rem_euclid(360.0) } else { 0.0 };
        // rem_euclid can land exactly on 360.0 for tiny negative inputs.
        let hue = if hue >= 360.0 { 0.0 } else { hue };
        Self {
            hue,
            saturation: clamp_unit(saturation),
            brightness: clamp_unit(brightness),
        }
    }
}

fn clamp_unit(v: f64) -> f64 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

/// Parse exactly six hexadecimal digits, in either case.
pub fn hex2rgb(hex: &str) -> Result<Rgb, ColorError> {
    let mut buf = [0u8; 3];
    hex::decode_to_slice(hex, &mut buf).map_err(|_| ColorError::InvalidFormat {
        input: hex.to_string(),
    })?;
    Ok(Rgb::new(buf[0], buf[1], buf[2]))
}

/// Like [`hex2rgb`], but tolerates a single leading `#` as typed by users.
pub fn parse_hex(input: &str) -> Result<Rgb, ColorError> {
    let digits = input.strip_prefix('#').unwrap_or(input);
    hex2rgb(digits).map_err(|_| ColorError::InvalidFormat {
        input: input.to_string(),
    })
}

/// Six lowercase hex digits, without the `#`.
pub fn rgb2hex(rgb: Rgb) -> String {
    hex::encode(rgb.channels())
}

pub fn rgb2hsb(rgb: Rgb) -> Hsb {
    let max = rgb.r.max(rgb.g).max(rgb.b);
    let min = rgb.r.min(rgb.g).min(rgb.b);

    let r = f64::from(rgb.r) / 255.0;
    let g = f64::from(rgb.g) / 255.0;
    let b = f64::from(rgb.b) / 255.0;
    let brightness = f64::from(max) / 255.0;
    let delta = f64::from(max - min) / 255.0;

    if max == min {
        return Hsb::new(0.0, 0.0, brightness);
    }

    let saturation = delta / brightness;
    let hue = if max == rgb.r {
        60.0 * ((g - b) / delta).rem_euclid(6.0)
    } else if max == rgb.g {
        60.0 * ((b - r) / delta + 2.0)
    } else {
        60.0 * ((r - g) / delta + 4.0)
    };

    Hsb::new(hue, saturation, brightness)
}

pub fn hsb2rgb(hsb: Hsb) -> Rgb {
    let Hsb {
        hue,
        saturation,
        brightness,
    } = Hsb::new(hsb.hue, hsb.saturation, hsb.brightness);

    let chroma = brightness * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let m = brightness - chroma;

    let (r, g, b) = match sector.floor() as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };

    Rgb::from_unit(r + m, g + m, b + m)
}

/// Exact per-channel equality, used to find the swatch that reproduces the
/// source color.
pub fn equals(a: Rgb, b: Rgb) -> bool {
    a.r == b.r && a.g == b.g && a.b == b.b
}
