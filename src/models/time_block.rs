use super::block_type::BlockType;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One recorded boundary. Never mutated after it is appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeBlock {
    #[serde(rename = "type")]
    pub kind: BlockType, // ⇔ times[day][i].type
    #[serde(rename = "startTime")]
    pub start_time: DateTime<Local>, // ⇔ times[day][i].startTime (RFC 3339)
}

impl TimeBlock {
    pub fn new(kind: BlockType, start_time: DateTime<Local>) -> Self {
        Self { kind, start_time }
    }

    pub fn time_str(&self) -> String {
        self.start_time.format("%H:%M:%S").to_string()
    }
}
