//! Stopwatch with lap capture over the elapsed-time engine.

use super::clock::{Clock, SystemClock};
use super::elapsed::ElapsedTimer;

#[derive(Debug, Clone)]
pub struct Stopwatch<C: Clock = SystemClock> {
    timer: ElapsedTimer<C>,
    laps: Vec<u64>,
    initial_secs: u64,
}

impl Stopwatch<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for Stopwatch<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> Stopwatch<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            timer: ElapsedTimer::with_clock(clock),
            laps: Vec::new(),
            initial_secs: 0,
        }
    }

    pub fn start(&mut self) {
        self.timer.start();
    }

    pub fn pause(&mut self) {
        self.timer.pause();
    }

    pub fn is_active(&self) -> bool {
        self.timer.is_active()
    }

    pub fn elapsed_secs(&self) -> u64 {
        self.timer.elapsed_secs()
    }

    /// Record the current reading as a lap.
    pub fn lap(&mut self) {
        self.laps.push(self.timer.elapsed_secs());
    }

    pub fn laps(&self) -> &[u64] {
        &self.laps
    }

    /// Rewind to the configured initial offset and clear laps.
    pub fn reset(&mut self) {
        self.timer.reset(self.initial_secs);
        self.laps.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    #[test]
    fn laps_record_current_reading() {
        let clock = ManualClock::new();
        let mut sw = Stopwatch::with_clock(clock.clone());
        sw.start();
        clock.advance(3_000);
        sw.lap();
        clock.advance(2_000);
        sw.lap();
        assert_eq!(sw.laps(), &[3, 5]);
    }

    #[test]
    fn reset_clears_laps_and_time() {
        let clock = ManualClock::new();
        let mut sw = Stopwatch::with_clock(clock.clone());
        sw.start();
        clock.advance(3_000);
        sw.lap();
        sw.reset();
        assert_eq!(sw.elapsed_secs(), 0);
        assert!(sw.laps().is_empty());
        assert!(!sw.is_active());
    }
}
