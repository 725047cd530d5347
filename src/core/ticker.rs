//! One-second tick source.
//!
//! The tracker only arms and disarms it; the host delivers ticks by calling
//! `TimeTracker::on_tick`. Arming always disarms first, so a ticker never
//! drives more than one tick stream.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

pub trait Ticker {
    fn arm(&mut self);
    fn disarm(&mut self);
    fn is_armed(&self) -> bool;
}

/// Events delivered to the host event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoopEvent {
    /// A tick from the arm generation it carries.
    Tick(u64),
    /// One line of user input.
    Line(String),
    /// Input closed.
    Eof,
}

/// Armed/disarmed flag only; ticks are driven by hand.
#[derive(Debug, Default)]
pub struct ManualTicker {
    armed: bool,
    arm_count: usize,
}

impl ManualTicker {
    pub fn new() -> Self {
        Self::default()
    }

    /// How many times `arm` was called.
    pub fn arm_count(&self) -> usize {
        self.arm_count
    }
}

impl Ticker for ManualTicker {
    fn arm(&mut self) {
        self.disarm();
        self.armed = true;
        self.arm_count += 1;
    }

    fn disarm(&mut self) {
        self.armed = false;
    }

    fn is_armed(&self) -> bool {
        self.armed
    }
}

struct Worker {
    stop: Arc<AtomicBool>,
    handle: JoinHandle<()>,
}

/// Background thread posting `LoopEvent::Tick` every `interval`.
pub struct ThreadTicker {
    sender: Sender<LoopEvent>,
    interval: Duration,
    generation: u64,
    worker: Option<Worker>,
}

impl ThreadTicker {
    pub fn new(sender: Sender<LoopEvent>) -> Self {
        Self::with_interval(sender, Duration::from_secs(1))
    }

    pub fn with_interval(sender: Sender<LoopEvent>, interval: Duration) -> Self {
        Self {
            sender,
            interval,
            generation: 0,
            worker: None,
        }
    }

    /// True if a tick of `generation` comes from the currently armed worker.
    /// Ticks queued before a disarm are stale and must be dropped.
    pub fn accepts(&self, generation: u64) -> bool {
        self.worker.is_some() && generation == self.generation
    }
}

impl Ticker for ThreadTicker {
    fn arm(&mut self) {
        self.disarm();
        self.generation += 1;

        let stop = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&stop);
        let sender = self.sender.clone();
        let interval = self.interval;
        let generation = self.generation;

        let handle = thread::spawn(move || {
            loop {
                let deadline = Instant::now() + interval;
                loop {
                    if flag.load(Ordering::SeqCst) {
                        return;
                    }
                    let now = Instant::now();
                    if now >= deadline {
                        break;
                    }
                    thread::park_timeout(deadline - now);
                }
                if sender.send(LoopEvent::Tick(generation)).is_err() {
                    return;
                }
            }
        });

        self.worker = Some(Worker { stop, handle });
    }

    fn disarm(&mut self) {
        if let Some(worker) = self.worker.take() {
            worker.stop.store(true, Ordering::SeqCst);
            worker.handle.thread().unpark();
            let _ = worker.handle.join();
        }
    }

    fn is_armed(&self) -> bool {
        self.worker.is_some()
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        self.disarm();
    }
}
