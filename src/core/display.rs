//! Status-line model.
//!
//! Pure functions from the session flags and the work-session counter to
//! the three widget outputs (text, tooltip, tone). Hosts only push the result
//! to whatever they draw on.

use crate::utils::format_duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Paused,
    Break,
    Idle,
    Working,
}

impl Icon {
    pub fn glyph(&self) -> &'static str {
        match self {
            Icon::Paused => "⏸",
            Icon::Break => "☕",
            Icon::Idle => "⏹",
            Icon::Working => "▶",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tone {
    #[default]
    Default,
    Muted,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusFlags {
    pub paused: bool,
    pub in_break: bool,
    pub session_active: bool,
    pub break_overrun: bool,
}

/// Duration templates (see `utils::formatting`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DurationFormats {
    pub long: String,
    pub short: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusDisplay {
    pub icon: Icon,
    pub label: String,
    pub tooltip: String,
    pub tone: Tone,
}

impl StatusDisplay {
    /// Icon followed by the label, separated by two spaces.
    pub fn text(&self) -> String {
        format!("{}  {}", self.icon.glyph(), self.label)
    }
}

/// Icon priority: paused > break > no session > working.
pub fn icon_for(flags: &StatusFlags) -> Icon {
    if flags.paused {
        Icon::Paused
    } else if flags.in_break {
        Icon::Break
    } else if !flags.session_active {
        Icon::Idle
    } else {
        Icon::Working
    }
}

pub fn label_for(flags: &StatusFlags, seconds: u64, formats: &DurationFormats) -> String {
    if !flags.session_active {
        "Start work session!".to_string()
    } else if flags.in_break {
        "Taking a break".to_string()
    } else {
        format_duration(seconds, &formats.short)
    }
}

pub fn tooltip_for(flags: &StatusFlags, seconds: u64, formats: &DurationFormats) -> String {
    let worked = format_duration(seconds, &formats.long);
    if flags.paused {
        format!("You worked for {}", worked)
    } else {
        format!("You are working for {}", worked)
    }
}

pub fn tone_for(flags: &StatusFlags) -> Tone {
    if flags.paused || flags.in_break {
        Tone::Muted
    } else if flags.break_overrun {
        Tone::Alert
    } else {
        Tone::Default
    }
}

pub fn compute(flags: &StatusFlags, seconds: u64, formats: &DurationFormats) -> StatusDisplay {
    StatusDisplay {
        icon: icon_for(flags),
        label: label_for(flags, seconds, formats),
        tooltip: tooltip_for(flags, seconds, formats),
        tone: tone_for(flags),
    }
}
