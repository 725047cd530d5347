use crate::core::clock::Clock;
use crate::core::store::Store;
use crate::core::worklog::WorkLog;
use crate::errors::AppResult;
use crate::export::fs_utils::{ensure_parent, ensure_writable};
use crate::export::json_csv::{export_csv, export_json};
use crate::export::{BlockExport, ExportFormat};
use crate::ui::messages::warning;
use crate::utils::date::sorted_day_keys;
use std::path::Path;

pub struct ExportLogic;

impl ExportLogic {
    /// Every recorded block, oldest day first, insertion order within a day.
    pub fn collect<S: Store, C: Clock>(log: &WorkLog<S, C>) -> AppResult<Vec<BlockExport>> {
        let times = log.all_days()?;

        let mut keys = sorted_day_keys(times.keys());
        keys.reverse();

        let rows = keys
            .into_iter()
            .flat_map(|key| {
                times[key]
                    .iter()
                    .map(move |block| BlockExport::from_block(key, block))
            })
            .collect();

        Ok(rows)
    }

    /// Write the whole day log to `file`. Returns the number of rows written.
    pub fn export<S: Store, C: Clock>(
        log: &WorkLog<S, C>,
        format: ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        let rows = Self::collect(log)?;
        if rows.is_empty() {
            warning("No time blocks recorded. Nothing to export.");
            return Ok(0);
        }

        ensure_writable(path, force)?;
        ensure_parent(path)?;

        match format {
            ExportFormat::Csv => export_csv(&rows, path)?,
            ExportFormat::Json => export_json(&rows, path)?,
        }

        Ok(rows.len())
    }
}
