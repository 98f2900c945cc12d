//! Best-effort clipboard writes through the terminal (OSC 52).

use std::io::{self, stdout};

use crossterm::{clipboard::CopyToClipboard, execute};

pub(in crate::ui) fn copy(text: &str) -> io::Result<()> {
    execute!(stdout(), CopyToClipboard::to_clipboard_from(text))
}
