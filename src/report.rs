//! Plain-text and JSON output for the headless subcommands.

use serde::Serialize;
use shades::{
    generate, label_color, rgb2hex, rgb2hsb, rgb2lch, Hsb, Lch, PaletteKind, Rgb,
    Thresholds, Tone,
};
use std::fmt::Write as _;

#[derive(Debug, Serialize)]
pub struct SwatchReport {
    pub shade: u16,
    pub hex: String,
    /// `white` or `black`, whichever reads better on the swatch.
    pub label: &'static str,
    pub source: bool,
}

#[derive(Debug, Serialize)]
pub struct PaletteReport {
    pub kind: PaletteKind,
    /// Whether the source's tone calls for this scale.
    pub enabled: bool,
    /// Heaviest shade first.
    pub swatches: Vec<SwatchReport>,
}

#[derive(Debug, Serialize)]
pub struct ColorReport {
    pub hex: String,
    pub rgb: Rgb,
    pub hsb: Hsb,
    pub lch: Lch,
    pub tone: Tone,
}

pub fn palettes(source: Rgb, kinds: &[PaletteKind], thresholds: &Thresholds) -> Vec<PaletteReport> {
    let tone = Tone::of_rgb(source, thresholds);

    kinds
        .iter()
        .map(|&kind| {
            let palette = generate(kind, source);
            let source_shade = palette.find(source);
            let swatches = palette
                .display()
                .map(|(shade, color)| SwatchReport {
                    shade,
                    hex: rgb2hex(color),
                    label: if label_color(color) == Rgb::WHITE { "white" } else { "black" },
                    source: source_shade == Some(shade),
                })
                .collect();
            PaletteReport {
                kind,
                enabled: tone.enables(kind),
                swatches,
            }
        })
        .collect()
}

pub fn color(rgb: Rgb, thresholds: &Thresholds) -> ColorReport {
    ColorReport {
        hex: rgb2hex(rgb),
        rgb,
        hsb: rgb2hsb(rgb),
        lch: rgb2lch(rgb),
        tone: Tone::of_rgb(rgb, thresholds),
    }
}

pub fn format_palettes(reports: &[PaletteReport]) -> String {
    let mut out = String::new();
    for (i, report) in reports.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        let note = if report.enabled { "" } else { "  (not suggested for this color)" };
        let _ = writeln!(out, "{}{}", report.kind, note);
        for s in &report.swatches {
            let marker = if s.source { "  *" } else { "" };
            let _ = writeln!(out, "  {:>3}  #{}  {:<5}{}", s.shade, s.hex, s.label, marker);
        }
    }
    out
}

pub fn format_color(report: &ColorReport) -> String {
    let ColorReport {
        hex,
        rgb,
        hsb,
        lch,
        tone,
    } = report;
    let mut out = String::new();
    let _ = writeln!(out, "hex  #{hex}");
    let _ = writeln!(out, "rgb  {} {} {}", rgb.r, rgb.g, rgb.b);
    let _ = writeln!(
        out,
        "hsb  {:.1} {:.3} {:.3}",
        hsb.hue, hsb.saturation, hsb.brightness
    );
    let _ = writeln!(
        out,
        "lch  {:.2} {:.2} {:.1}",
        lch.lightness, lch.chroma, lch.hue
    );
    let _ = writeln!(
        out,
        "tone light={} dark={} grey={}",
        tone.light, tone.dark, tone.grey
    );
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_report_marks_source_at_500() {
        let reports = palettes(
            Rgb::new(250, 250, 250),
            &[PaletteKind::Accent],
            &Thresholds::default(),
        );
        let accent = &reports[0];
        assert!(accent.enabled);
        assert_eq!(accent.swatches.len(), 10);
        assert_eq!(accent.swatches[0].shade, 900);
        let marked: Vec<_> = accent.swatches.iter().filter(|s| s.source).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].shade, 500);
        assert_eq!(marked[0].hex, "fafafa");
        assert_eq!(marked[0].label, "black");
    }

    #[test]
    fn test_flat_scale_marks_one_swatch() {
        let reports = palettes(Rgb::BLACK, &[PaletteKind::Accent], &Thresholds::default());
        let marked: Vec<_> = reports[0].swatches.iter().filter(|s| s.source).collect();
        assert_eq!(marked.len(), 1);
        assert_eq!(marked[0].shade, 500);
    }

    #[test]
    fn test_dark_not_enabled_for_light_grey() {
        let reports = palettes(
            Rgb::new(250, 250, 250),
            &[PaletteKind::Light, PaletteKind::Dark],
            &Thresholds::default(),
        );
        assert!(reports[0].enabled);
        assert!(!reports[1].enabled);
    }

    #[test]
    fn test_text_format() {
        let reports = palettes(
            Rgb::new(250, 250, 250),
            &[PaletteKind::Accent],
            &Thresholds::default(),
        );
        let text = format_palettes(&reports);
        assert!(text.starts_with("accent\n"));
        assert!(text.contains("  500  #fafafa  black  *\n"));
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn test_json_shape() {
        let reports = palettes(Rgb::BLACK, &[PaletteKind::Dark], &Thresholds::default());
        let v = serde_json::to_value(&reports).unwrap();
        assert_eq!(v[0]["kind"], "dark");
        assert_eq!(v[0]["swatches"][9]["shade"], 50);
        assert_eq!(v[0]["swatches"][9]["hex"], "000000");
    }

    #[test]
    fn test_color_report() {
        let text = format_color(&color(Rgb::new(255, 0, 0), &Thresholds::default()));
        assert!(text.contains("hex  #ff0000\n"));
        assert!(text.contains("rgb  255 0 0\n"));
        assert!(text.contains("grey=false"));
    }
}
