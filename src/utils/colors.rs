/// ANSI color helper utilities for terminal output.
use crate::core::display::Tone;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Terminal color for a status-line tone:
/// muted → grey, alert → red, default → reset
pub fn color_for_tone(tone: Tone) -> &'static str {
    match tone {
        Tone::Muted => GREY,
        Tone::Alert => RED,
        Tone::Default => RESET,
    }
}

/// Colors a block type name the way `today`/`day`/`last` print it.
pub fn colorize_block(kind: &str) -> String {
    let color = match kind {
        "work" | "sessionStart" => GREEN,
        "break" => YELLOW,
        "pause" => GREY,
        "sessionStop" => RED,
        _ => RESET,
    };
    format!("{color}{kind}{RESET}")
}
