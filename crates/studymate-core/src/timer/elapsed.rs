//! Elapsed-time engine.
//!
//! The engine is a wall-clock accumulator. It does not use internal
//! threads - the caller is responsible for calling `tick()` periodically
//! to observe progress.
//!
//! Elapsed time is accumulated across possibly many start/pause intervals:
//! `pause` folds the running interval into the accumulator, so repeated
//! pause/resume cycles are additive and drift-free relative to the sampling
//! granularity.

use serde::{Deserialize, Serialize};

use super::clock::{Clock, SystemClock};

/// Persistable state of an [`ElapsedTimer`].
///
/// `started_at_ms` is an epoch timestamp when the timer was running at
/// capture time, so a running interval keeps counting across restarts.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TimerSnapshot {
    pub accumulated_ms: u64,
    #[serde(default)]
    pub started_at_ms: Option<u64>,
}

/// Accumulating wall-clock timer.
///
/// `start` while already running and `pause` while idle are no-ops.
#[derive(Debug, Clone)]
pub struct ElapsedTimer<C: Clock = SystemClock> {
    clock: C,
    /// Milliseconds folded in by completed start/pause intervals.
    accumulated_ms: u64,
    /// Sample taken when the current interval began. `Some` while running.
    started_at_ms: Option<u64>,
}

impl ElapsedTimer<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }

    /// Rehydrate from a persisted snapshot using the wall clock.
    pub fn from_snapshot(snapshot: TimerSnapshot) -> Self {
        Self {
            clock: SystemClock,
            accumulated_ms: snapshot.accumulated_ms,
            started_at_ms: snapshot.started_at_ms,
        }
    }
}

impl Default for ElapsedTimer<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> ElapsedTimer<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            accumulated_ms: 0,
            started_at_ms: None,
        }
    }

    pub fn is_active(&self) -> bool {
        self.started_at_ms.is_some()
    }

    /// Begin a new sampling interval. No-op if already running.
    pub fn start(&mut self) {
        if self.started_at_ms.is_none() {
            self.started_at_ms = Some(self.clock.now_ms());
        }
    }

    /// Fold the running interval into the accumulator. No-op if idle.
    pub fn pause(&mut self) {
        if let Some(started) = self.started_at_ms.take() {
            let now = self.clock.now_ms();
            self.accumulated_ms += now.saturating_sub(started);
        }
    }

    /// Stop and rewind to `initial_secs`.
    pub fn reset(&mut self, initial_secs: u64) {
        self.started_at_ms = None;
        self.accumulated_ms = initial_secs.saturating_mul(1000);
    }

    /// Restore a previously persisted `(seconds, was_active)` pair.
    /// Resumes sampling immediately when `was_active`.
    pub fn restore(&mut self, secs: u64, was_active: bool) {
        self.started_at_ms = None;
        self.accumulated_ms = secs.saturating_mul(1000);
        if was_active {
            self.start();
        }
    }

    pub fn elapsed_ms(&self) -> u64 {
        let running = self
            .started_at_ms
            .map(|s| self.clock.now_ms().saturating_sub(s))
            .unwrap_or(0);
        self.accumulated_ms + running
    }

    /// Whole seconds elapsed.
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed_ms() / 1000
    }

    /// Poll the engine. Returns the current whole-second reading.
    pub fn tick(&self) -> u64 {
        self.elapsed_secs()
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            accumulated_ms: self.accumulated_ms,
            started_at_ms: self.started_at_ms,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    fn timer() -> (ElapsedTimer<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        (ElapsedTimer::with_clock(clock.clone()), clock)
    }

    #[test]
    fn start_wait_pause_yields_elapsed() {
        let (mut t, clock) = timer();
        t.start();
        clock.advance(5_000);
        t.pause();
        assert_eq!(t.elapsed_secs(), 5);
    }

    #[test]
    fn pause_resume_cycles_accumulate_additively() {
        let (mut t, clock) = timer();
        for _ in 0..3 {
            t.start();
            clock.advance(2_000);
            t.pause();
            clock.advance(10_000); // idle time must not count
        }
        assert_eq!(t.elapsed_secs(), 6);
    }

    #[test]
    fn start_while_running_is_a_no_op() {
        let (mut t, clock) = timer();
        t.start();
        clock.advance(3_000);
        t.start();
        clock.advance(3_000);
        assert_eq!(t.elapsed_secs(), 6);
    }

    #[test]
    fn pause_while_idle_is_a_no_op() {
        let (mut t, clock) = timer();
        t.pause();
        clock.advance(1_000);
        t.pause();
        assert_eq!(t.elapsed_secs(), 0);
    }

    #[test]
    fn reset_applies_initial_seconds() {
        let (mut t, clock) = timer();
        t.start();
        clock.advance(9_000);
        t.reset(42);
        assert!(!t.is_active());
        assert_eq!(t.elapsed_secs(), 42);
    }

    #[test]
    fn restore_active_resumes_sampling() {
        let (mut t, clock) = timer();
        t.restore(10, true);
        assert!(t.is_active());
        clock.advance(2_000);
        assert_eq!(t.elapsed_secs(), 12);
    }

    #[test]
    fn restore_inactive_stays_paused() {
        let (mut t, clock) = timer();
        t.restore(10, false);
        clock.advance(2_000);
        assert_eq!(t.elapsed_secs(), 10);
    }

    #[test]
    fn snapshot_roundtrip_preserves_running_interval() {
        let (mut t, clock) = timer();
        t.start();
        clock.advance(4_000);
        let snap = t.snapshot();
        let restored = ElapsedTimer {
            clock: clock.clone(),
            accumulated_ms: snap.accumulated_ms,
            started_at_ms: snap.started_at_ms,
        };
        clock.advance(1_000);
        assert_eq!(restored.elapsed_secs(), 5);
    }
}
