//! Terminal rendition of the status line.

use crate::core::display::StatusDisplay;
use crate::utils::colors::{GREY, RESET, color_for_tone};
use std::io::{self, Write};

/// Coloured text followed by the dimmed tooltip.
pub fn render(display: &StatusDisplay) -> String {
    format!(
        "{}{}{}  {}({}){}",
        color_for_tone(display.tone),
        display.text(),
        RESET,
        GREY,
        display.tooltip,
        RESET
    )
}

/// Redraw the status line in place.
pub fn redraw(display: &StatusDisplay) -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "\r\x1b[2K{}", render(display))?;
    out.flush()
}

/// Move off the status line before printing regular output.
pub fn clear_line() -> io::Result<()> {
    let mut out = io::stdout();
    write!(out, "\r\x1b[2K")?;
    out.flush()
}
