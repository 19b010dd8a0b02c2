use super::actions::Action;
use shades::{
    disabled_palette, generate, parse_hex, Palette, PaletteKind, Rgb, Thresholds, Tone,
    SHADES,
};
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Swatches,
}

/// Swatch under the cursor. `column` counts in display order, so column 0
/// is shade 900.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cursor {
    pub kind: PaletteKind,
    pub column: usize,
}

impl Default for Cursor {
    fn default() -> Self {
        Self {
            kind: PaletteKind::Accent,
            column: display_column(500),
        }
    }
}

/// `#` plus six digits.
const MAX_INPUT_LEN: usize = 7;

fn display_column(shade: u16) -> usize {
    let pos = SHADES.iter().position(|&s| s == shade).unwrap_or(0);
    SHADES.len() - 1 - pos
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    pub created_at: Instant,
    pub ttl: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

impl Toast {
    pub fn success(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Success,
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn error(message: impl Into<String>, ttl: Duration) -> Self {
        Self {
            message: message.into(),
            kind: ToastKind::Error,
            created_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) > self.ttl
    }
}

/// One palette as the UI shows it: generated when the source's tone allows
/// it, the static grey scale otherwise.
#[derive(Debug, Clone, Copy)]
pub struct PaletteRow {
    pub kind: PaletteKind,
    pub palette: Palette,
    pub enabled: bool,
}

impl PaletteRow {
    /// Display column of the swatch that reproduces `source`.
    pub fn source_column(&self, source: Rgb) -> Option<usize> {
        if !self.enabled {
            return None;
        }
        self.palette.find(source).map(display_column)
    }
}

/// Everything the UI renders. Only [`AppState::update`] produces a new
/// state; the event loop never edits fields directly.
#[derive(Debug, Clone)]
pub struct AppState {
    pub input: String,
    /// Last valid color typed into `input`.
    pub source: Rgb,
    pub thresholds: Thresholds,
    pub focus: Focus,
    pub cursor: Cursor,
    pub show_help: bool,
    pub toast: Option<Toast>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(source: Rgb, thresholds: Thresholds) -> Self {
        Self {
            input: source.to_string(),
            source,
            thresholds,
            focus: Focus::Input,
            cursor: Cursor::default(),
            show_help: false,
            toast: None,
            should_quit: false,
        }
    }

    pub fn tone(&self) -> Tone {
        Tone::of_rgb(self.source, &self.thresholds)
    }

    pub fn rows(&self) -> [PaletteRow; 3] {
        let tone = self.tone();
        PaletteKind::ALL.map(|kind| {
            let enabled = tone.enables(kind);
            let palette = match disabled_palette(kind) {
                Some(placeholder) if !enabled => placeholder,
                _ => generate(kind, self.source),
            };
            PaletteRow {
                kind,
                palette,
                enabled,
            }
        })
    }

    pub fn row(&self, kind: PaletteKind) -> Option<PaletteRow> {
        self.rows().into_iter().find(|r| r.kind == kind)
    }

    /// `(shade, color)` under the cursor, if its row is enabled.
    pub fn selected_swatch(&self) -> Option<(u16, Rgb)> {
        let row = self.row(self.cursor.kind).filter(|r| r.enabled)?;
        row.palette.display().nth(self.cursor.column)
    }

    #[must_use]
    pub fn update(mut self, action: &Action) -> Self {
        match action {
            Action::Quit => self.should_quit = true,
            Action::InputChar(c) => {
                if self.input.chars().count() < MAX_INPUT_LEN {
                    self.input.push(*c);
                    self.apply_input();
                }
            }
            Action::Backspace => {
                self.input.pop();
                self.apply_input();
            }
            Action::ClearInput => self.input.clear(),
            Action::FocusInput => self.focus = Focus::Input,
            Action::FocusSwatches => self.focus = Focus::Swatches,
            Action::ToggleHelp => self.show_help = !self.show_help,
            Action::CursorLeft => self.cursor.column = self.cursor.column.saturating_sub(1),
            Action::CursorRight => {
                self.cursor.column = (self.cursor.column + 1).min(SHADES.len() - 1);
            }
            Action::CursorUp => self.cursor.kind = self.neighbour_row(false),
            Action::CursorDown => self.cursor.kind = self.neighbour_row(true),
            Action::ShowToast(toast) => self.toast = Some(toast.clone()),
            Action::Tick(now) => {
                if self.toast.as_ref().is_some_and(|t| t.is_expired_at(*now)) {
                    self.toast = None;
                }
            }
            Action::CopySelected | Action::Resize => {}
        }
        self
    }

    /// Invalid text keeps the previous source color.
    fn apply_input(&mut self) {
        let Ok(rgb) = parse_hex(&self.input) else {
            return;
        };
        if rgb == self.source {
            return;
        }
        tracing::debug!(source = %rgb, "source color changed");
        self.source = rgb;

        let tone = self.tone();
        if !tone.enables(self.cursor.kind) {
            self.cursor.kind = PaletteKind::Accent;
        }
    }

    /// Next enabled row above or below the cursor, wrapping around.
    fn neighbour_row(&self, down: bool) -> PaletteKind {
        let tone = self.tone();
        let kinds = PaletteKind::ALL;
        let len = kinds.len();
        let current = kinds
            .iter()
            .position(|&k| k == self.cursor.kind)
            .unwrap_or(0);

        (1..len)
            .map(|step| {
                let idx = if down {
                    (current + step) % len
                } else {
                    (current + len - step) % len
                };
                kinds[idx]
            })
            .find(|&k| tone.enables(k))
            .unwrap_or(self.cursor.kind)
    }
}
