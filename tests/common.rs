#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{DateTime, Local, TimeZone};
use rworktracker::core::clock::FixedClock;
use rworktracker::core::display::DurationFormats;
use rworktracker::core::notify::RecordingNotifier;
use rworktracker::core::session::{TimeTracker, TrackerSettings};
use rworktracker::core::store::MemoryStore;
use rworktracker::core::ticker::ManualTicker;
use rworktracker::core::worklog::WorkLog;
use std::env;
use std::fs;
use std::path::PathBuf;

pub type TestTracker = TimeTracker<MemoryStore, FixedClock, ManualTicker, RecordingNotifier>;

pub fn rwt() -> Command {
    cargo_bin_cmd!("rworktracker")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rworktracker.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Fresh DB, schema created through `init --test`
pub fn init_db(name: &str) -> String {
    let db_path = setup_test_db(name);
    rwt()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();
    db_path
}

/// Local timestamp at a time of day clear of DST transitions
pub fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Local> {
    Local
        .with_ymd_and_hms(y, m, d, h, min, s)
        .single()
        .expect("unambiguous local time")
}

pub fn settings(break_reminder_secs: u64) -> TrackerSettings {
    TrackerSettings {
        formats: DurationFormats {
            long: "h [hours], m [minutes], s [seconds]".to_string(),
            short: "h[h] m[m] s[s]".to_string(),
        },
        break_reminder_secs,
    }
}

pub fn worklog_at(now: DateTime<Local>) -> WorkLog<MemoryStore, FixedClock> {
    WorkLog::new(MemoryStore::new(), FixedClock::new(now))
}

/// Tracker over an in-memory store, clock fixed at 7 March 2025 10:00
pub fn tracker() -> TestTracker {
    tracker_with(settings(0))
}

pub fn tracker_with(settings: TrackerSettings) -> TestTracker {
    TimeTracker::new(
        worklog_at(at(2025, 3, 7, 10, 0, 0)),
        ManualTicker::new(),
        RecordingNotifier::new(),
        settings,
    )
    .expect("tracker")
}

pub fn ticks(t: &mut TestTracker, n: usize) {
    for _ in 0..n {
        t.on_tick().expect("tick");
    }
}
