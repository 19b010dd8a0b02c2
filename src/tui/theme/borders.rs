//! Border styles

use ratatui::symbols::border;

/// Rounded borders for idle panels, thick ones for the panel holding focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderStyle {
    #[default]
    Rounded,
    Thick,
}

impl BorderStyle {
    pub fn for_focus(focused: bool) -> Self {
        if focused { Self::Thick } else { Self::Rounded }
    }

    pub fn to_border_set(self) -> border::Set<'static> {
        match self {
            Self::Rounded => border::ROUNDED,
            Self::Thick => border::THICK,
        }
    }
}
