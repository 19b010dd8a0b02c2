//! sRGB → XYZ → Lab → LCH, D65 white point.

use super::{hex2rgb, ColorError, Rgb};
use serde::Serialize;

const WHITE_D65: [f64; 3] = [0.95047, 1.0, 1.08883];

// CIE constants as exact rationals.
const EPSILON: f64 = 216.0 / 24389.0;
const KAPPA: f64 = 24389.0 / 27.0;

/// Cylindrical Lab: lightness in `[0, 100]`, chroma `>= 0`, hue in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Lch {
    pub lightness: f64,
    pub chroma: f64,
    pub hue: f64,
}

/// sRGB gamma expansion of one 8-bit channel.
pub(crate) fn srgb_to_linear(channel: u8) -> f64 {
    let v = f64::from(channel) / 255.0;
    if v <= 0.04045 {
        v / 12.92
    } else {
        ((v + 0.055) / 1.055).powf(2.4)
    }
}

fn rgb_to_xyz(rgb: Rgb) -> [f64; 3] {
    let r = srgb_to_linear(rgb.r);
    let g = srgb_to_linear(rgb.g);
    let b = srgb_to_linear(rgb.b);
    [
        0.4124564 * r + 0.3575761 * g + 0.1804375 * b,
        0.2126729 * r + 0.7151522 * g + 0.0721750 * b,
        0.0193339 * r + 0.1191920 * g + 0.9503041 * b,
    ]
}

fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn xyz_to_lab(xyz: [f64; 3]) -> [f64; 3] {
    let fx = lab_f(xyz[0] / WHITE_D65[0]);
    let fy = lab_f(xyz[1] / WHITE_D65[1]);
    let fz = lab_f(xyz[2] / WHITE_D65[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

fn lab_to_lch([l, a, b]: [f64; 3]) -> Lch {
    let chroma = (a * a + b * b).sqrt();
    // atan2(0, 0) is meaningless for neutral greys.
    let hue = if chroma < 1e-10 {
        0.0
    } else {
        b.atan2(a).to_degrees().rem_euclid(360.0)
    };
    Lch {
        lightness: l,
        chroma,
        hue,
    }
}

pub fn rgb2lch(rgb: Rgb) -> Lch {
    lab_to_lch(xyz_to_lab(rgb_to_xyz(rgb)))
}

pub fn hex2lch(hex: &str) -> Result<Lch, ColorError> {
    hex2rgb(hex).map(rgb2lch)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 0.05;

    #[test]
    fn test_white_and_black() {
        let white = hex2lch("ffffff").unwrap();
        assert!((white.lightness - 100.0).abs() < EPS);
        assert!(white.chroma < 0.1);

        let black = hex2lch("000000").unwrap();
        assert!(black.lightness.abs() < EPS);
        assert_eq!(black.hue, 0.0);
    }

    #[test]
    fn test_grey_has_no_chroma() {
        let grey = hex2lch("fafafa").unwrap();
        assert!((grey.lightness - 98.27).abs() < EPS);
        assert!(grey.chroma < 0.1);
    }

    #[test]
    fn test_red() {
        // Reference values for sRGB red under D65.
        let red = hex2lch("ff0000").unwrap();
        assert!((red.lightness - 53.24).abs() < EPS);
        assert!((red.chroma - 104.55).abs() < 0.3);
        assert!((red.hue - 40.0).abs() < 0.3);
    }

    #[test]
    fn test_invalid_hex_propagates() {
        assert!(hex2lch("nope").is_err());
    }
}
