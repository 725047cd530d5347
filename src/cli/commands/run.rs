use crate::cli::commands::log_op;
use crate::config::Config;
use crate::core::clock::SystemClock;
use crate::core::notify::Action;
use crate::core::session::{SessionPhase, TimeTracker};
use crate::core::ticker::{LoopEvent, ThreadTicker};
use crate::core::worklog::WorkLog;
use crate::db::store::SqliteStore;
use crate::errors::AppResult;
use crate::ui::messages::{detail, header, info, warning};
use crate::ui::notifier::TerminalNotifier;
use crate::ui::status;
use std::io::{self, BufRead};
use std::sync::mpsc::{self, Sender};
use std::thread;

type LiveTracker = TimeTracker<SqliteStore, SystemClock, ThreadTicker, TerminalNotifier>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Input {
    Start,
    Stop,
    Pause,
    Accept,
    Status,
    Help,
    Quit,
}

fn parse_input(line: &str) -> Option<Input> {
    match line.trim().to_lowercase().as_str() {
        "start" => Some(Input::Start),
        "stop" => Some(Input::Stop),
        "pause" | "p" => Some(Input::Pause),
        "yes" | "y" => Some(Input::Accept),
        "status" | "s" => Some(Input::Status),
        "help" | "h" | "?" => Some(Input::Help),
        "quit" | "q" | "exit" => Some(Input::Quit),
        _ => None,
    }
}

fn print_help() {
    header("rWorkTracker");
    detail("start   start a work session");
    detail("stop    stop the running session");
    detail("pause   pause or resume (p)");
    detail("yes     accept the last offered action (y)");
    detail("status  print the full status (s)");
    detail("quit    leave; a running session keeps its counter (q)");
}

fn spawn_stdin_reader(tx: Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            match line {
                Ok(l) => {
                    if tx.send(LoopEvent::Line(l)).is_err() {
                        return;
                    }
                }
                Err(_) => break,
            }
        }
        let _ = tx.send(LoopEvent::Eof);
    });
}

/// Handle the `run` command: a single-threaded loop fed by the tick thread
/// and the stdin reader through one channel.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let (tx, rx) = mpsc::channel::<LoopEvent>();

    let store = SqliteStore::open(&cfg.database)?;
    let log = WorkLog::open(store, SystemClock, cfg.persist_session)?;
    let ticker = ThreadTicker::new(tx.clone());
    let mut tracker = TimeTracker::new(
        log,
        ticker,
        TerminalNotifier::new(),
        cfg.tracker_settings(),
    )?;

    print_help();
    if tracker.resume()? {
        log_op(tracker.log().store(), "resume", "session", "Work session resumed");
    }

    spawn_stdin_reader(tx);
    status::redraw(tracker.display())?;

    while let Ok(event) = rx.recv() {
        match event {
            LoopEvent::Tick(generation) => {
                if !tracker.ticker().accepts(generation) {
                    continue;
                }
                let pending_before = tracker.notifier().pending();
                status::clear_line()?;
                tracker.on_tick()?;
                if tracker.notifier().pending() != pending_before {
                    log_op(tracker.log().store(), "reminder", "break", "Break reminder shown");
                }
            }
            LoopEvent::Line(line) => {
                status::clear_line()?;
                if line.trim().is_empty() {
                    status::redraw(tracker.display())?;
                    continue;
                }
                match parse_input(&line) {
                    Some(Input::Quit) => break,
                    Some(input) => apply(&mut tracker, input)?,
                    None => warning(format!("Unknown command '{}'. Type 'help'.", line.trim())),
                }
            }
            LoopEvent::Eof => break,
        }
        status::redraw(tracker.display())?;
    }

    status::clear_line()?;
    println!("{}", status::render(tracker.display()));
    if tracker.is_active()? {
        info("Leaving; the work session counter is kept.");
    }
    Ok(())
}

fn apply(tracker: &mut LiveTracker, input: Input) -> AppResult<()> {
    match input {
        Input::Start => {
            if tracker.start_session()? {
                log_op(tracker.log().store(), "start", "session", "Work session started");
            }
        }
        Input::Stop => {
            let secs = tracker.log().work_session_seconds()?;
            if tracker.stop_session()? {
                log_op(
                    tracker.log().store(),
                    "stop",
                    "session",
                    &format!("Work session stopped after {secs}s"),
                );
            }
        }
        Input::Pause => {
            let was_active = tracker.is_active()?;
            if tracker.toggle_pause()? {
                let op = match (was_active, tracker.phase()?) {
                    (false, _) => "start",
                    (true, SessionPhase::Paused) => "pause",
                    _ => "resume",
                };
                log_op(tracker.log().store(), op, "session", "Pause toggled");
            }
        }
        Input::Accept => match tracker.notifier_mut().take_pending() {
            Some(action) => {
                if tracker.perform(action)? {
                    let op = match action {
                        Action::StopBreak => "work",
                        Action::TakeBreak => "break",
                    };
                    log_op(tracker.log().store(), op, "session", action.label());
                } else {
                    warning(format!("'{}' no longer applies.", action.label()));
                }
            }
            None => warning("Nothing to confirm."),
        },
        Input::Status => {
            println!("{}", status::render(tracker.display()));
            detail(format!("Phase: {:?}", tracker.phase()?));
            detail(format!(
                "Blocks recorded today: {}",
                tracker.log().get_today_events(None)?.len()
            ));
        }
        Input::Help => print_help(),
        Input::Quit => {}
    }
    Ok(())
}
