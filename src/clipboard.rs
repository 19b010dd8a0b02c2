//! Terminal clipboard through the OSC 52 escape sequence.

use anyhow::Context;
use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::Write;

/// `ESC ] 52 ; c ; <base64> BEL`, understood by most modern terminals and
/// forwarded by tmux when `set-clipboard` is on.
pub fn osc52_sequence(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text.as_bytes()))
}

pub fn copy(out: &mut impl Write, text: &str, enabled: bool) -> anyhow::Result<()> {
    anyhow::ensure!(enabled, "clipboard is disabled in config");
    out.write_all(osc52_sequence(text).as_bytes())
        .context("write OSC 52 sequence")?;
    out.flush().context("flush terminal")?;
    tracing::info!(text, "copied to clipboard");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequence_is_base64_payload() {
        assert_eq!(osc52_sequence("#fafafa"), "\x1b]52;c;I2ZhZmFmYQ==\x07");
    }

    #[test]
    fn test_copy_writes_sequence() {
        let mut buf = Vec::new();
        copy(&mut buf, "#000000", true).unwrap();
        assert_eq!(buf, osc52_sequence("#000000").into_bytes());
    }

    #[test]
    fn test_disabled_copy_fails_without_writing() {
        let mut buf = Vec::new();
        assert!(copy(&mut buf, "#000000", false).is_err());
        assert!(buf.is_empty());
    }
}
