//! Countdown adapter over the elapsed-time engine.
//!
//! Derives a remaining-time view from a target duration and fires
//! [`Event::CountdownCompleted`] exactly once per run when remaining time
//! reaches zero while active, then pauses the underlying timer.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};
use super::elapsed::{ElapsedTimer, TimerSnapshot};
use crate::events::Event;

/// Persistable state of a [`Countdown`].
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CountdownSnapshot {
    pub duration_secs: u64,
    pub fired: bool,
    pub timer: TimerSnapshot,
}

#[derive(Debug, Clone)]
pub struct Countdown<C: Clock = SystemClock> {
    timer: ElapsedTimer<C>,
    duration_secs: u64,
    /// Completion already fired for the current run.
    fired: bool,
}

impl Countdown<SystemClock> {
    pub fn new(duration_secs: u64) -> Self {
        Self::with_clock(duration_secs, SystemClock)
    }

    /// Rehydrate from a persisted snapshot using the wall clock.
    pub fn from_snapshot(snapshot: CountdownSnapshot) -> Self {
        Self {
            timer: ElapsedTimer::from_snapshot(snapshot.timer),
            duration_secs: snapshot.duration_secs,
            fired: snapshot.fired,
        }
    }
}

impl<C: Clock> Countdown<C> {
    pub fn with_clock(duration_secs: u64, clock: C) -> Self {
        Self {
            timer: ElapsedTimer::with_clock(clock),
            duration_secs,
            fired: false,
        }
    }

    pub fn duration_secs(&self) -> u64 {
        self.duration_secs
    }

    pub fn remaining_secs(&self) -> u64 {
        self.duration_secs.saturating_sub(self.timer.elapsed_secs())
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_active()
    }

    pub fn start(&mut self) {
        self.timer.start();
    }

    pub fn pause(&mut self) {
        self.timer.pause();
    }

    /// Rewind the current run, keeping the configured duration.
    pub fn reset(&mut self) {
        self.timer.reset(0);
        self.fired = false;
    }

    /// Replace the target duration (e.g. edited before starting).
    /// Re-derives remaining time; never fires completion.
    pub fn set_duration(&mut self, duration_secs: u64) {
        self.duration_secs = duration_secs;
        self.timer.reset(0);
        self.fired = false;
    }

    /// Poll the countdown. Returns the completion event exactly once per
    /// run, at the tick where remaining time reaches zero while active.
    pub fn tick(&mut self) -> Option<Event> {
        if self.timer.is_active() && !self.fired && self.remaining_secs() == 0 {
            self.fired = true;
            self.timer.pause();
            return Some(Event::CountdownCompleted {
                duration_secs: self.duration_secs,
                at: Utc::now(),
            });
        }
        None
    }

    pub fn snapshot(&self) -> CountdownSnapshot {
        CountdownSnapshot {
            duration_secs: self.duration_secs,
            fired: self.fired,
            timer: self.timer.snapshot(),
        }
    }
}
