// src/export/mod.rs

mod fs_utils;
mod json_csv;
pub mod logic;

pub use logic::ExportLogic;

use crate::models::time_block::TimeBlock;
use crate::ui::messages::success;
use clap::ValueEnum;
use serde::Serialize;
use std::path::Path;

/// Flat row written for every recorded block.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct BlockExport {
    pub day: String,
    pub date: String,
    pub time: String,
    pub kind: String,
    pub start_time: String,
}

impl BlockExport {
    pub fn from_block(day: &str, block: &TimeBlock) -> Self {
        Self {
            day: day.to_string(),
            date: block.start_time.format("%Y-%m-%d").to_string(),
            time: block.time_str(),
            kind: block.kind.as_str().to_string(),
            start_time: block.start_time.to_rfc3339(),
        }
    }
}

/// Shared completion message for every export format.
pub(crate) fn notify_export_success(label: &str, path: &Path, rows: usize) {
    success(format!(
        "{label} export completed: {} ({rows} blocks)",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}
