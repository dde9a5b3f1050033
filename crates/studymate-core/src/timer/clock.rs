//! Monotonic-ish millisecond sampling for the timer engines.
//!
//! Timers sample a [`Clock`] on each poll instead of subscribing to any
//! rendering-frame callback, which keeps them testable without a UI.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Millisecond clock source sampled by the timer engines.
pub trait Clock {
    /// Current time in milliseconds. Only differences between samples matter.
    fn now_ms(&self) -> u64;
}

/// Wall clock (milliseconds since the Unix epoch).
///
/// Epoch-based so that a persisted running interval survives across
/// process restarts.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64
    }
}

/// Manually advanced clock for tests. Clones share the same time source.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    ms: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&self, ms: u64) {
        self.ms.fetch_add(ms, Ordering::SeqCst);
    }

    pub fn set(&self, ms: u64) {
        self.ms.store(ms, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.ms.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_clones_share_time() {
        let clock = ManualClock::new();
        let other = clock.clone();
        clock.advance(1_500);
        assert_eq!(other.now_ms(), 1_500);
    }

    #[test]
    fn system_clock_is_monotonic_enough() {
        let clock = SystemClock;
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
