pub mod blocks;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod rate;
pub mod reset;
pub mod run;
pub mod session;
pub mod status;

use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::session::TimeTracker;
use crate::core::ticker::ManualTicker;
use crate::core::worklog::WorkLog;
use crate::db::log::ttlog_soft;
use crate::db::store::SqliteStore;
use crate::errors::{AppError, AppResult};
use crate::models::block_type::BlockType;
use crate::ui::notifier::TerminalNotifier;

pub type CliLog = WorkLog<SqliteStore, SystemClock>;
pub type CliTracker = TimeTracker<SqliteStore, SystemClock, ManualTicker, TerminalNotifier>;

/// Work log over the configured database. One-shot commands always see the
/// stored counter; the restart policy only applies to `run`.
pub(crate) fn open_log(cfg: &Config) -> AppResult<CliLog> {
    Ok(WorkLog::new(SqliteStore::open(&cfg.database)?, SystemClock))
}

/// Tracker for one-shot commands: no tick source, the process exits right
/// after the transition.
pub(crate) fn open_tracker(cfg: &Config) -> AppResult<CliTracker> {
    TimeTracker::new(
        open_log(cfg)?,
        ManualTicker::new(),
        TerminalNotifier::new(),
        cfg.tracker_settings(),
    )
}

pub(crate) fn log_op(store: &SqliteStore, operation: &str, target: &str, message: &str) {
    ttlog_soft(&store.pool().conn, operation, target, message);
}

pub(crate) fn parse_block_type(s: &str) -> AppResult<BlockType> {
    BlockType::from_input(s).ok_or_else(|| AppError::InvalidBlockType(s.to_string()))
}
