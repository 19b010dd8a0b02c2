//! WCAG 2.1 contrast between two colors.

use super::lab::srgb_to_linear;
use super::Rgb;

/// Relative luminance: `0.2126 R + 0.7152 G + 0.0722 B` on linear channels.
pub fn relative_luminance(rgb: Rgb) -> f64 {
    0.2126 * srgb_to_linear(rgb.r) + 0.7152 * srgb_to_linear(rgb.g) + 0.0722 * srgb_to_linear(rgb.b)
}

/// Contrast ratio `(L1 + 0.05) / (L2 + 0.05)` with `L1 >= L2`, in `[1, 21]`.
pub fn ratio(a: Rgb, b: Rgb) -> f64 {
    let la = relative_luminance(a);
    let lb = relative_luminance(b);
    let (lighter, darker) = if la > lb { (la, lb) } else { (lb, la) };
    ((lighter + 0.05) / (darker + 0.05)).clamp(1.0, 21.0)
}

/// Text color for a label drawn on `swatch`: white when it contrasts more
/// than black does, black otherwise (ties go to black).
pub fn label_color(swatch: Rgb) -> Rgb {
    if ratio(swatch, Rgb::WHITE) > ratio(swatch, Rgb::BLACK) {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::hex2rgb;
    use proptest::prelude::*;

    fn rgb(hex: &str) -> Rgb {
        hex2rgb(hex).unwrap()
    }

    #[test]
    fn test_black_on_white_is_21() {
        assert!((ratio(Rgb::BLACK, Rgb::WHITE) - 21.0).abs() < 1e-9);
        assert!((ratio(Rgb::WHITE, Rgb::BLACK) - 21.0).abs() < 1e-9);
    }

    #[test]
    fn test_known_pairs() {
        assert!((ratio(rgb("767676"), Rgb::WHITE) - 4.54).abs() < 0.02);
        assert!((ratio(rgb("ff0000"), Rgb::WHITE) - 3.99).abs() < 0.02);
    }

    #[test]
    fn test_label_color() {
        assert_eq!(label_color(rgb("fafafa")), Rgb::BLACK);
        assert_eq!(label_color(rgb("121212")), Rgb::WHITE);
        assert_eq!(label_color(rgb("0000ff")), Rgb::WHITE);
        assert_eq!(label_color(rgb("ffff00")), Rgb::BLACK);
    }

    proptest! {
        #[test]
        fn self_contrast_is_one(r: u8, g: u8, b: u8) {
            let c = Rgb::new(r, g, b);
            prop_assert_eq!(ratio(c, c), 1.0);
        }

        #[test]
        fn ratio_is_symmetric_and_bounded(a: [u8; 3], b: [u8; 3]) {
            let a = Rgb::new(a[0], a[1], a[2]);
            let b = Rgb::new(b[0], b[1], b[2]);
            let ab = ratio(a, b);
            prop_assert_eq!(ab, ratio(b, a));
            prop_assert!((1.0..=21.0).contains(&ab));
        }
    }
}
