use rworktracker::core::display::{Icon, Tone};
use rworktracker::core::notify::{Action, Notice};
use rworktracker::core::session::{SessionPhase, TimeTracker};
use rworktracker::core::store::{MemoryStore, Store};
use rworktracker::core::ticker::{ManualTicker, Ticker};
use rworktracker::core::notify::RecordingNotifier;
use rworktracker::core::worklog::{KEY_WORK_SESSION, WorkLog};
use rworktracker::core::clock::FixedClock;
use rworktracker::models::block_type::BlockType;

mod common;
use common::{at, settings, ticks, tracker, tracker_with};

fn kinds(t: &common::TestTracker) -> Vec<BlockType> {
    t.log()
        .get_today_events(None)
        .expect("events")
        .into_iter()
        .map(|b| b.kind)
        .collect()
}

#[test]
fn test_new_tracker_is_inactive() {
    let t = tracker();

    assert_eq!(t.phase().unwrap(), SessionPhase::Inactive);
    assert!(!t.ticker().is_armed());
    assert_eq!(t.display().icon, Icon::Idle);
    assert_eq!(t.display().label, "Start work session!");
    assert_eq!(t.display().tone, Tone::Default);
}

#[test]
fn test_start_session() {
    let mut t = tracker();

    assert!(t.start_session().unwrap());

    assert!(t.is_active().unwrap());
    assert_eq!(t.log().work_session().unwrap(), Some(0));
    assert!(t.ticker().is_armed());
    assert_eq!(kinds(&t), vec![BlockType::SessionStart]);
    assert_eq!(
        t.notifier().last(),
        Some(&Notice::Info("Work session started!".into()))
    );
    assert_eq!(t.display().text(), "▶  0s");
}

#[test]
fn test_start_twice_only_warns() {
    let mut t = tracker();
    t.start_session().unwrap();
    ticks(&mut t, 3);

    assert!(!t.start_session().unwrap());

    assert_eq!(t.log().work_session_seconds().unwrap(), 3);
    assert_eq!(kinds(&t), vec![BlockType::SessionStart]);
    assert_eq!(
        t.notifier().warnings(),
        vec!["A work session is already running!"]
    );
}

#[test]
fn test_stop_without_session_only_warns() {
    let mut t = tracker();

    assert!(!t.stop_session().unwrap());

    assert!(kinds(&t).is_empty());
    assert_eq!(
        t.notifier().warnings(),
        vec!["There is no work session to stop!"]
    );
}

#[test]
fn test_ticks_pause_and_stop_walkthrough() {
    let mut t = tracker();
    t.start_session().unwrap();
    assert_eq!(t.log().work_session_seconds().unwrap(), 0);

    ticks(&mut t, 5);
    assert_eq!(t.log().work_session_seconds().unwrap(), 5);
    assert_eq!(t.display().label, "5s");
    assert_eq!(t.display().tooltip, "You are working for 5 seconds");

    assert!(t.toggle_pause().unwrap());
    assert!(!t.ticker().is_armed());
    assert_eq!(t.display().icon, Icon::Paused);
    assert_eq!(t.display().tooltip, "You worked for 5 seconds");
    assert_eq!(t.display().tone, Tone::Muted);

    // ticks delivered while paused do not count
    ticks(&mut t, 2);
    assert_eq!(t.log().work_session_seconds().unwrap(), 5);

    assert!(t.stop_session().unwrap());
    assert_eq!(t.log().work_session_seconds().unwrap(), 0);
    assert_eq!(t.log().work_session().unwrap(), None);
    assert!(!t.is_active().unwrap());
    assert!(!t.ticker().is_armed());
    assert!(!t.state().paused);
    assert_eq!(
        kinds(&t),
        vec![
            BlockType::SessionStart,
            BlockType::Pause,
            BlockType::SessionStop
        ]
    );
    assert_eq!(
        t.notifier().last(),
        Some(&Notice::Info(
            "Work session stopped! You worked for 5 seconds".into()
        ))
    );
}

#[test]
fn test_stop_reports_earnings_when_rate_set() {
    let mut t = tracker();
    t.log().set_hourly_rate(Some(36.0)).unwrap();
    t.start_session().unwrap();
    ticks(&mut t, 600);

    t.stop_session().unwrap();

    assert_eq!(
        t.notifier().last(),
        Some(&Notice::Info(
            "Work session stopped! You worked for 10 minutes, 0 seconds (earned 6.00)".into()
        ))
    );
}

#[test]
fn test_pause_twice_rearms_ticker() {
    let mut t = tracker();
    t.start_session().unwrap();

    t.toggle_pause().unwrap();
    t.toggle_pause().unwrap();

    assert!(!t.state().paused);
    assert!(t.ticker().is_armed());
    assert_eq!(t.ticker().arm_count(), 2);
    assert_eq!(t.phase().unwrap(), SessionPhase::Working);
    // resuming records nothing
    assert_eq!(kinds(&t), vec![BlockType::SessionStart, BlockType::Pause]);

    ticks(&mut t, 1);
    assert_eq!(t.log().work_session_seconds().unwrap(), 1);
}

#[test]
fn test_pause_without_session_starts_one() {
    let mut t = tracker();

    assert!(t.toggle_pause().unwrap());

    assert_eq!(t.phase().unwrap(), SessionPhase::Working);
    assert!(!t.state().paused);
    assert!(t.ticker().is_armed());
    assert_eq!(kinds(&t), vec![BlockType::SessionStart]);
}

#[test]
fn test_pause_rejected_during_break() {
    let mut t = tracker();
    t.start_session().unwrap();
    t.toggle_break().unwrap();
    let armed_before = t.ticker().is_armed();
    let arms_before = t.ticker().arm_count();

    assert!(!t.toggle_pause().unwrap());

    assert!(!t.state().paused);
    assert!(t.state().in_break);
    assert_eq!(t.ticker().is_armed(), armed_before);
    assert_eq!(t.ticker().arm_count(), arms_before);
    assert_eq!(t.notifier().offered_actions(), vec![Action::StopBreak]);
    assert_eq!(
        kinds(&t),
        vec![BlockType::SessionStart, BlockType::Break]
    );
}

#[test]
fn test_accepting_stop_break_resumes_work() {
    let mut t = tracker();
    t.start_session().unwrap();
    t.toggle_break().unwrap();
    t.toggle_pause().unwrap();

    assert!(t.perform(Action::StopBreak).unwrap());

    assert!(!t.state().in_break);
    assert!(t.ticker().is_armed());
    assert_eq!(t.phase().unwrap(), SessionPhase::Working);
    assert_eq!(
        kinds(&t),
        vec![BlockType::SessionStart, BlockType::Break, BlockType::Work]
    );

    // offer is stale once the break is over
    assert!(!t.perform(Action::StopBreak).unwrap());
}

#[test]
fn test_break_display() {
    let mut t = tracker();
    t.start_session().unwrap();
    ticks(&mut t, 4);

    t.toggle_break().unwrap();

    assert_eq!(t.phase().unwrap(), SessionPhase::Break);
    assert!(!t.ticker().is_armed());
    assert_eq!(t.display().icon, Icon::Break);
    assert_eq!(t.display().label, "Taking a break");
    assert_eq!(t.display().tone, Tone::Muted);

    ticks(&mut t, 3);
    assert_eq!(t.log().work_session_seconds().unwrap(), 4);
}

#[test]
fn test_break_from_pause_keeps_pause() {
    let mut t = tracker();
    t.start_session().unwrap();
    t.toggle_pause().unwrap();

    t.toggle_break().unwrap();
    assert!(t.state().paused);
    assert!(t.state().in_break);
    assert_eq!(t.phase().unwrap(), SessionPhase::Break);
    // paused wins the icon
    assert_eq!(t.display().icon, Icon::Paused);

    t.toggle_break().unwrap();
    assert!(t.state().paused);
    assert!(!t.state().in_break);
    assert!(!t.ticker().is_armed());
    assert_eq!(t.phase().unwrap(), SessionPhase::Paused);
    assert_eq!(
        t.notifier().last(),
        Some(&Notice::Info("You are now only paused!".into()))
    );
    // leaving a break while paused records nothing
    assert_eq!(
        kinds(&t),
        vec![BlockType::SessionStart, BlockType::Pause, BlockType::Break]
    );
}

#[test]
fn test_break_twice_restores_pause_value() {
    let mut t = tracker();
    t.start_session().unwrap();

    t.toggle_break().unwrap();
    t.toggle_break().unwrap();

    assert!(!t.state().paused);
    assert!(!t.state().in_break);
    assert!(t.ticker().is_armed());
}

#[test]
fn test_break_without_session_only_warns() {
    let mut t = tracker();

    assert!(!t.toggle_break().unwrap());

    assert!(!t.state().in_break);
    assert_eq!(
        t.notifier().warnings(),
        vec!["There is no work session to take a break from!"]
    );
}

#[test]
fn test_break_reminder_fires_once() {
    let mut t = tracker_with(settings(3));
    t.start_session().unwrap();

    ticks(&mut t, 2);
    assert!(t.notifier().offered_actions().is_empty());
    assert_eq!(t.display().tone, Tone::Default);

    ticks(&mut t, 1);
    assert!(t.state().break_overrun);
    assert_eq!(t.display().tone, Tone::Alert);
    assert_eq!(t.notifier().offered_actions(), vec![Action::TakeBreak]);

    ticks(&mut t, 5);
    assert_eq!(t.notifier().offered_actions().len(), 1);

    assert!(t.perform(Action::TakeBreak).unwrap());
    assert!(t.state().in_break);
    assert!(!t.state().break_overrun);
    assert_eq!(t.display().tone, Tone::Muted);

    t.perform(Action::StopBreak).unwrap();
    assert_eq!(t.display().tone, Tone::Default);
}

#[test]
fn test_take_break_ignored_while_on_break() {
    let mut t = tracker();
    t.start_session().unwrap();
    t.toggle_break().unwrap();

    assert!(!t.perform(Action::TakeBreak).unwrap());
    assert!(t.state().in_break);
}

#[test]
fn test_active_iff_more_starts_than_stops() {
    let mut t = tracker();
    let mut starts = 0;
    let mut stops = 0;

    let script = [
        true, true, false, false, false, true, false, true, true, false,
    ];
    for start in script {
        if start {
            if t.start_session().unwrap() {
                starts += 1;
            }
        } else if t.stop_session().unwrap() {
            stops += 1;
        }
        assert_eq!(t.is_active().unwrap(), starts > stops);
        assert!(starts - stops <= 1);
    }
}

#[test]
fn test_tick_while_inactive_is_ignored() {
    let mut t = tracker();

    ticks(&mut t, 3);

    assert_eq!(t.log().work_session().unwrap(), None);
    assert!(!t.is_active().unwrap());
}

#[test]
fn test_resume_picks_up_stored_session() {
    let store = MemoryStore::new();
    store
        .update(KEY_WORK_SESSION, Some(serde_json::json!(42)))
        .unwrap();
    let log = WorkLog::new(store, FixedClock::new(at(2025, 3, 7, 10, 0, 0)));
    let mut t = TimeTracker::new(
        log,
        ManualTicker::new(),
        RecordingNotifier::new(),
        settings(0),
    )
    .unwrap();

    assert_eq!(t.display().label, "42s");
    assert!(t.resume().unwrap());
    assert!(t.ticker().is_armed());

    ticks(&mut t, 1);
    assert_eq!(t.log().work_session_seconds().unwrap(), 43);
}

#[test]
fn test_resume_without_session() {
    let mut t = tracker();

    assert!(!t.resume().unwrap());
    assert!(!t.ticker().is_armed());
}

#[test]
fn test_reset_all_ends_everything() {
    let mut t = tracker();
    t.start_session().unwrap();
    ticks(&mut t, 9);
    t.toggle_pause().unwrap();

    t.reset_all().unwrap();

    assert!(!t.is_active().unwrap());
    assert!(!t.state().paused);
    assert!(!t.ticker().is_armed());
    assert_eq!(t.log().work_session_seconds().unwrap(), 0);
    assert!(t.log().get_today_events(None).unwrap().is_empty());
    assert_eq!(t.display().label, "Start work session!");
}
