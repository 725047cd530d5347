use rworktracker::core::ticker::{LoopEvent, ThreadTicker, Ticker};
use std::sync::mpsc::{self, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(50);

/// Collect every event arriving within `window`.
fn collect(rx: &Receiver<LoopEvent>, window: Duration) -> Vec<LoopEvent> {
    let deadline = Instant::now() + window;
    let mut events = Vec::new();
    loop {
        let left = deadline.saturating_duration_since(Instant::now());
        if left.is_zero() {
            return events;
        }
        match rx.recv_timeout(left) {
            Ok(ev) => events.push(ev),
            Err(RecvTimeoutError::Timeout) => return events,
            Err(RecvTimeoutError::Disconnected) => return events,
        }
    }
}

fn accepted(ticker: &ThreadTicker, events: &[LoopEvent]) -> usize {
    events
        .iter()
        .filter(|ev| matches!(ev, LoopEvent::Tick(g) if ticker.accepts(*g)))
        .count()
}

#[test]
fn test_rearming_keeps_a_single_tick_stream() {
    let (tx, rx) = mpsc::channel();
    let mut ticker = ThreadTicker::with_interval(tx, INTERVAL);

    for _ in 0..5 {
        ticker.arm();
    }
    assert!(ticker.is_armed());

    let events = collect(&rx, Duration::from_millis(520));
    let count = accepted(&ticker, &events);

    // one stream yields about ten ticks in the window; five streams would
    // yield about fifty
    assert!(count >= 5, "too few ticks: {}", count);
    assert!(count <= 11, "more than one tick stream: {}", count);

    ticker.disarm();
}

#[test]
fn test_ticks_of_older_arms_are_not_accepted() {
    let (tx, _rx) = mpsc::channel();
    let mut ticker = ThreadTicker::with_interval(tx, INTERVAL);

    assert!(!ticker.accepts(0));

    ticker.arm();
    assert!(ticker.accepts(1));

    ticker.arm();
    assert!(!ticker.accepts(1));
    assert!(ticker.accepts(2));

    ticker.disarm();
    assert!(!ticker.accepts(2));
    assert!(!ticker.is_armed());
}

#[test]
fn test_disarm_stops_ticks() {
    let (tx, rx) = mpsc::channel();
    let mut ticker = ThreadTicker::with_interval(tx, INTERVAL);

    ticker.arm();
    let before = collect(&rx, Duration::from_millis(180));
    assert!(accepted(&ticker, &before) >= 1);

    ticker.disarm();
    let queued: Vec<LoopEvent> = rx.try_iter().collect();
    assert_eq!(accepted(&ticker, &queued), 0);

    // the worker is gone: nothing more arrives
    assert!(collect(&rx, Duration::from_millis(200)).is_empty());
}

#[test]
fn test_drop_stops_the_worker() {
    let (tx, rx) = mpsc::channel();
    {
        let mut ticker = ThreadTicker::with_interval(tx.clone(), INTERVAL);
        ticker.arm();
    }
    let _ = rx.try_iter().count();

    assert!(collect(&rx, Duration::from_millis(200)).is_empty());
    drop(tx);
}
