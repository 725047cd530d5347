use serde::{Deserialize, Serialize};

/// Kind of boundary recorded in the day log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BlockType {
    Work,
    Break,
    Pause,
    SessionStart,
    SessionStop,
}

impl BlockType {
    /// Convert enum → stored string (same spelling as the JSON value)
    pub fn as_str(&self) -> &'static str {
        match self {
            BlockType::Work => "work",
            BlockType::Break => "break",
            BlockType::Pause => "pause",
            BlockType::SessionStart => "sessionStart",
            BlockType::SessionStop => "sessionStop",
        }
    }

    /// Parse user input: accepts the stored spelling, case-insensitive,
    /// plus the dashed CLI forms `session-start` / `session-stop`.
    pub fn from_input(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "work" => Some(Self::Work),
            "break" => Some(Self::Break),
            "pause" => Some(Self::Pause),
            "sessionstart" | "session-start" | "start" => Some(Self::SessionStart),
            "sessionstop" | "session-stop" | "stop" => Some(Self::SessionStop),
            _ => None,
        }
    }
}

impl std::fmt::Display for BlockType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
