//! Work-session state machine.
//!
//! States: inactive, working, paused, on break. The running/inactive part is
//! derived from the persisted counter in the `WorkLog`; pause and break are
//! transient flags owned by the running tracker. Invalid transitions only
//! produce a warning.

use crate::core::clock::Clock;
use crate::core::display::{self, DurationFormats, StatusDisplay, StatusFlags};
use crate::core::notify::{Action, Notifier};
use crate::core::store::Store;
use crate::core::ticker::Ticker;
use crate::core::worklog::WorkLog;
use crate::errors::AppResult;
use crate::models::block_type::BlockType;
use crate::utils::format_duration;
use crate::utils::formatting::format_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Inactive,
    Working,
    Paused,
    Break,
}

/// Display and reminder settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerSettings {
    pub formats: DurationFormats,
    /// Seconds of uninterrupted work before the break reminder; 0 disables it.
    pub break_reminder_secs: u64,
}

/// Transient flags of the running tracker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionState {
    pub paused: bool,
    pub in_break: bool,
    pub break_overrun: bool,
}

pub struct TimeTracker<S: Store, C: Clock, T: Ticker, N: Notifier> {
    log: WorkLog<S, C>,
    ticker: T,
    notifier: N,
    settings: TrackerSettings,
    state: SessionState,
    worked_since_break: u64,
    display: StatusDisplay,
}

impl<S: Store, C: Clock, T: Ticker, N: Notifier> TimeTracker<S, C, T, N> {
    pub fn new(
        log: WorkLog<S, C>,
        ticker: T,
        notifier: N,
        settings: TrackerSettings,
    ) -> AppResult<Self> {
        let display = display::compute(
            &StatusFlags::default(),
            0,
            &settings.formats,
        );

        let mut tracker = Self {
            log,
            ticker,
            notifier,
            settings,
            state: SessionState::default(),
            worked_since_break: 0,
            display,
        };
        tracker.recompute_display()?;
        Ok(tracker)
    }

    // ------------------------------------------------
    // Accessors
    // ------------------------------------------------

    pub fn log(&self) -> &WorkLog<S, C> {
        &self.log
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut N {
        &mut self.notifier
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn display(&self) -> &StatusDisplay {
        &self.display
    }

    pub fn is_active(&self) -> AppResult<bool> {
        Ok(self.log.work_session()?.is_some())
    }

    pub fn phase(&self) -> AppResult<SessionPhase> {
        Ok(if !self.is_active()? {
            SessionPhase::Inactive
        } else if self.state.in_break {
            SessionPhase::Break
        } else if self.state.paused {
            SessionPhase::Paused
        } else {
            SessionPhase::Working
        })
    }

    fn flags(&self) -> AppResult<StatusFlags> {
        Ok(StatusFlags {
            paused: self.state.paused,
            in_break: self.state.in_break,
            session_active: self.is_active()?,
            break_overrun: self.state.break_overrun,
        })
    }

    fn long(&self, seconds: u64) -> String {
        format_duration(seconds, &self.settings.formats.long)
    }

    // ------------------------------------------------
    // Transitions
    // ------------------------------------------------

    /// Pick up a session left running by a previous process.
    pub fn resume(&mut self) -> AppResult<bool> {
        if !self.is_active()? {
            self.recompute_display()?;
            return Ok(false);
        }

        let msg = format!(
            "Work session resumed at {}",
            self.long(self.log.work_session_seconds()?)
        );
        self.ticker.arm();
        self.notifier.info(&msg);
        self.recompute_display()?;
        Ok(true)
    }

    pub fn start_session(&mut self) -> AppResult<bool> {
        if self.is_active()? {
            self.notifier.warning("A work session is already running!");
            return Ok(false);
        }

        self.log.set_work_session(Some(0))?;
        self.state = SessionState::default();
        self.worked_since_break = 0;
        self.log.add(BlockType::SessionStart)?;
        self.ticker.arm();

        self.notifier.info("Work session started!");
        self.recompute_display()?;
        Ok(true)
    }

    pub fn stop_session(&mut self) -> AppResult<bool> {
        if !self.is_active()? {
            self.notifier.warning("There is no work session to stop!");
            return Ok(false);
        }

        let secs = self.log.work_session_seconds()?;
        let mut report = format!("Work session stopped! You worked for {}", self.long(secs));
        if let Some(rate) = self.log.hourly_rate()? {
            let earned = secs as f64 / 3600.0 * rate;
            report.push_str(&format!(" (earned {})", format_amount(earned)));
        }

        self.log.set_work_session(None)?;
        self.state = SessionState::default();
        self.worked_since_break = 0;
        self.log.add(BlockType::SessionStop)?;
        self.ticker.disarm();

        self.notifier.info(&report);
        self.recompute_display()?;
        Ok(true)
    }

    /// Pause or resume. Starts a session when none is running; refused while
    /// on break, offering to end the break instead.
    pub fn toggle_pause(&mut self) -> AppResult<bool> {
        if !self.is_active()? {
            return self.start_session();
        }

        if self.state.in_break {
            self.notifier.warning_with_action(
                "You can't pause because you are in a break",
                Action::StopBreak,
            );
            return Ok(false);
        }

        self.state.paused = !self.state.paused;

        if self.state.paused {
            self.ticker.disarm();
            self.log.add(BlockType::Pause)?;
            self.notifier.info("Paused!");
        } else {
            // resume records nothing, only entering the pause does
            self.ticker.arm();
            self.notifier.info("Resumed!");
        }

        self.recompute_display()?;
        Ok(true)
    }

    pub fn toggle_break(&mut self) -> AppResult<bool> {
        if !self.is_active()? {
            self.notifier
                .warning("There is no work session to take a break from!");
            return Ok(false);
        }

        self.state.in_break = !self.state.in_break;

        if self.state.in_break {
            self.ticker.disarm();
            self.log.add(BlockType::Break)?;
            self.state.break_overrun = false;
            self.worked_since_break = 0;
            self.notifier.info("You are now taking a break!");
        } else if self.state.paused {
            self.notifier.info("You are now only paused!");
        } else {
            self.log.add(BlockType::Work)?;
            self.ticker.arm();
            self.notifier.info("You are now working!");
        }

        self.recompute_display()?;
        Ok(true)
    }

    /// Run an action the user accepted from a warning.
    pub fn perform(&mut self, action: Action) -> AppResult<bool> {
        match action {
            Action::StopBreak if self.state.in_break => self.toggle_break(),
            Action::TakeBreak if !self.state.in_break => self.toggle_break(),
            _ => Ok(false),
        }
    }

    /// One elapsed second of work. Refreshes text and tooltip; the tone only
    /// changes when the break reminder fires.
    pub fn on_tick(&mut self) -> AppResult<()> {
        if !self.is_active()? || self.state.paused || self.state.in_break {
            return Ok(());
        }

        let secs = self.log.increment_work_session()?;
        self.worked_since_break += 1;

        let flags = self.flags()?;
        self.display.icon = display::icon_for(&flags);
        self.display.label = display::label_for(&flags, secs, &self.settings.formats);
        self.display.tooltip = display::tooltip_for(&flags, secs, &self.settings.formats);

        let threshold = self.settings.break_reminder_secs;
        if threshold > 0 && self.worked_since_break >= threshold && !self.state.break_overrun {
            self.state.break_overrun = true;
            let msg = format!(
                "You have been working for {} without a break!",
                self.long(self.worked_since_break)
            );
            self.notifier.warning_with_action(&msg, Action::TakeBreak);
            self.display.tone = display::tone_for(&self.flags()?);
        }

        Ok(())
    }

    pub fn recompute_display(&mut self) -> AppResult<()> {
        let flags = self.flags()?;
        let secs = self.log.work_session_seconds()?;
        self.display = display::compute(&flags, secs, &self.settings.formats);
        Ok(())
    }

    /// Clear the counter and the whole day log, ending any running session.
    pub fn reset_all(&mut self) -> AppResult<()> {
        self.log.reset_all()?;
        self.ticker.disarm();
        self.state = SessionState::default();
        self.worked_since_break = 0;
        self.recompute_display()
    }
}
