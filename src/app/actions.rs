use super::state::Toast;
use std::time::Instant;

#[derive(Debug, Clone)]
pub enum Action {
    Quit,

    // Source input
    InputChar(char),
    Backspace,
    ClearInput,

    // Focus
    FocusInput,
    FocusSwatches,
    ToggleHelp,

    // Swatch cursor
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,

    /// Copy the swatch under the cursor. Performed by the event loop, which
    /// follows up with `ShowToast`.
    CopySelected,
    ShowToast(Toast),
    Tick(Instant),

    Resize,
}
