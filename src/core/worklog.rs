//! Durable, day-keyed log of time blocks plus the work-session counter and
//! the hourly rate, all kept in a `Store`.
//!
//! Layout in the store:
//!  - `workSession` → integer seconds, absent when no session is running
//!  - `hrate`       → decimal, absent when unset
//!  - `times`       → { "D/M/Y": [ { type, startTime }, ... ] }

use crate::core::clock::Clock;
use crate::core::store::Store;
use crate::errors::AppResult;
use crate::models::block_type::BlockType;
use crate::models::day_log::DayLog;
use crate::models::time_block::TimeBlock;
use crate::utils::date::{day_key, sorted_day_keys};
use serde_json::Value;

pub const KEY_WORK_SESSION: &str = "workSession";
pub const KEY_HOURLY_RATE: &str = "hrate";
pub const KEY_TIMES: &str = "times";

pub struct WorkLog<S: Store, C: Clock> {
    store: S,
    clock: C,
    pending: Vec<TimeBlock>,
}

impl<S: Store, C: Clock> WorkLog<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            store,
            clock,
            pending: Vec::new(),
        }
    }

    /// Open the log applying the startup policy: when `persist_session` is
    /// false a counter left over from a previous process is discarded.
    pub fn open(store: S, clock: C, persist_session: bool) -> AppResult<Self> {
        let log = Self::new(store, clock);
        if !persist_session {
            log.set_work_session(None)?;
        }
        Ok(log)
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn clock(&self) -> &C {
        &self.clock
    }

    pub fn today_key(&self) -> String {
        day_key(&self.clock.now())
    }

    // ------------------------------------------------
    // Time blocks
    // ------------------------------------------------

    /// Record a block stamped with the current time and persist it at once.
    pub fn add(&mut self, kind: BlockType) -> AppResult<TimeBlock> {
        let block = TimeBlock::new(kind, self.clock.now());
        self.pending.push(block.clone());
        self.flush()?;
        Ok(block)
    }

    /// Merge the pending blocks into the stored log, each under the day of
    /// its own timestamp. Whole-structure read-modify-write; the buffer is
    /// only cleared once the write went through.
    fn flush(&mut self) -> AppResult<()> {
        if self.pending.is_empty() {
            return Ok(());
        }

        let mut times = self.all_days()?;
        for block in &self.pending {
            times
                .entry(day_key(&block.start_time))
                .or_default()
                .push(block.clone());
        }
        self.save_days(&times)?;
        self.pending.clear();
        Ok(())
    }

    /// Every stored day.
    pub fn all_days(&self) -> AppResult<DayLog> {
        match self.store.get(KEY_TIMES)? {
            Some(v) => Ok(serde_json::from_value(v)?),
            None => Ok(DayLog::new()),
        }
    }

    fn save_days(&self, times: &DayLog) -> AppResult<()> {
        self.store
            .update(KEY_TIMES, Some(serde_json::to_value(times)?))
    }

    pub fn get_events_for_day(&self, key: &str) -> AppResult<Vec<TimeBlock>> {
        Ok(self.all_days()?.remove(key).unwrap_or_default())
    }

    pub fn get_today_events(&self, filter: Option<BlockType>) -> AppResult<Vec<TimeBlock>> {
        let events = self.get_events_for_day(&self.today_key())?;
        Ok(match filter {
            Some(kind) => events.into_iter().filter(|b| b.kind == kind).collect(),
            None => events,
        })
    }

    /// Matching blocks of the most recent day holding at least one of `kinds`.
    /// A day whose blocks all filter out does not stop the scan.
    pub fn last_events_of_type(&self, kinds: &[BlockType]) -> AppResult<Vec<TimeBlock>> {
        let times = self.all_days()?;

        for key in sorted_day_keys(times.keys()) {
            let matching: Vec<TimeBlock> = times[key]
                .iter()
                .filter(|b| kinds.contains(&b.kind))
                .cloned()
                .collect();

            if !matching.is_empty() {
                return Ok(matching);
            }
        }

        Ok(Vec::new())
    }

    // ------------------------------------------------
    // Work-session counter
    // ------------------------------------------------

    /// `None` while no session is running.
    pub fn work_session(&self) -> AppResult<Option<u64>> {
        Ok(self.store.get(KEY_WORK_SESSION)?.and_then(|v| v.as_u64()))
    }

    pub fn work_session_seconds(&self) -> AppResult<u64> {
        Ok(self.work_session()?.unwrap_or(0))
    }

    pub fn set_work_session(&self, seconds: Option<u64>) -> AppResult<()> {
        self.store
            .update(KEY_WORK_SESSION, seconds.map(Value::from))
    }

    /// Add one second to the running counter and return the new value.
    pub fn increment_work_session(&self) -> AppResult<u64> {
        let next = self.work_session_seconds()? + 1;
        self.set_work_session(Some(next))?;
        Ok(next)
    }

    // ------------------------------------------------
    // Hourly rate
    // ------------------------------------------------

    pub fn hourly_rate(&self) -> AppResult<Option<f64>> {
        Ok(self.store.get(KEY_HOURLY_RATE)?.and_then(|v| v.as_f64()))
    }

    pub fn set_hourly_rate(&self, rate: Option<f64>) -> AppResult<()> {
        self.store.update(KEY_HOURLY_RATE, rate.map(Value::from))
    }

    // ------------------------------------------------
    // Reset
    // ------------------------------------------------

    /// Forget the counter and every recorded day. The hourly rate survives.
    pub fn reset_all(&mut self) -> AppResult<()> {
        self.pending.clear();
        self.set_work_session(None)?;
        self.store.update(KEY_TIMES, None)
    }
}
