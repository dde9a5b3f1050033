//! Attention tracker.
//!
//! Observes page-visibility transitions while an external active flag is
//! set: going hidden counts an interruption immediately and arms a delayed
//! distracted flag; returning to visibility (or deactivation) cancels the
//! pending flag and clears it.
//!
//! The interruption counter never decreases and is not persisted across
//! instances; each fresh tracker starts at 0.

use chrono::Utc;

use crate::events::Event;
use crate::timer::{Clock, SystemClock};

/// How long the page must stay hidden before the distracted flag raises.
pub const DISTRACTION_THRESHOLD_MS: u64 = 3_000;

#[derive(Debug, Clone)]
pub struct AttentionTracker<C: Clock = SystemClock> {
    clock: C,
    active: bool,
    interruptions: u32,
    distracted: bool,
    /// Sample taken when the page went hidden during an active session.
    hidden_since_ms: Option<u64>,
}

impl AttentionTracker<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl Default for AttentionTracker<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> AttentionTracker<C> {
    pub fn with_clock(clock: C) -> Self {
        Self {
            clock,
            active: false,
            interruptions: 0,
            distracted: false,
            hidden_since_ms: None,
        }
    }

    pub fn interruptions(&self) -> u32 {
        self.interruptions
    }

    pub fn is_distracted(&self) -> bool {
        self.distracted
    }

    /// Gate observation on the owning session's active flag.
    pub fn set_active(&mut self, active: bool) {
        self.active = active;
        if !active {
            self.hidden_since_ms = None;
            self.distracted = false;
        }
    }

    /// The page transitioned to hidden.
    pub fn visibility_hidden(&mut self) -> Option<Event> {
        if !self.active {
            self.hidden_since_ms = None;
            self.distracted = false;
            return None;
        }
        self.interruptions += 1;
        self.hidden_since_ms = Some(self.clock.now_ms());
        Some(Event::AttentionInterrupted {
            interruptions: self.interruptions,
            at: Utc::now(),
        })
    }

    /// The page transitioned back to visible.
    pub fn visibility_visible(&mut self) {
        self.hidden_since_ms = None;
        self.distracted = false;
    }

    /// Poll for the distraction threshold. Returns the flag-raise event
    /// at the tick where the page has been hidden long enough.
    pub fn poll(&mut self) -> Option<Event> {
        if self.distracted {
            return None;
        }
        let hidden_since = self.hidden_since_ms?;
        let hidden_ms = self.clock.now_ms().saturating_sub(hidden_since);
        if hidden_ms >= DISTRACTION_THRESHOLD_MS {
            self.distracted = true;
            return Some(Event::DistractionFlagged {
                hidden_ms,
                at: Utc::now(),
            });
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::ManualClock;

    fn tracker() -> (AttentionTracker<ManualClock>, ManualClock) {
        let clock = ManualClock::new();
        let mut t = AttentionTracker::with_clock(clock.clone());
        t.set_active(true);
        (t, clock)
    }

    #[test]
    fn short_hide_counts_interruption_without_distraction() {
        let (mut t, clock) = tracker();
        assert!(t.visibility_hidden().is_some());
        clock.advance(2_000);
        assert!(t.poll().is_none());
        t.visibility_visible();
        clock.advance(10_000);
        assert!(t.poll().is_none());
        assert_eq!(t.interruptions(), 1);
        assert!(!t.is_distracted());
    }

    #[test]
    fn sustained_hide_raises_distracted_flag_once() {
        let (mut t, clock) = tracker();
        t.visibility_hidden();
        clock.advance(3_000);
        assert!(matches!(
            t.poll(),
            Some(Event::DistractionFlagged { hidden_ms: 3_000, .. })
        ));
        assert!(t.is_distracted());
        clock.advance(1_000);
        assert!(t.poll().is_none());
    }

    #[test]
    fn returning_visible_clears_the_flag() {
        let (mut t, clock) = tracker();
        t.visibility_hidden();
        clock.advance(4_000);
        t.poll();
        t.visibility_visible();
        assert!(!t.is_distracted());
    }

    #[test]
    fn hidden_while_inactive_counts_nothing() {
        let clock = ManualClock::new();
        let mut t = AttentionTracker::with_clock(clock.clone());
        assert!(t.visibility_hidden().is_none());
        clock.advance(10_000);
        assert!(t.poll().is_none());
        assert_eq!(t.interruptions(), 0);
    }

    #[test]
    fn deactivation_cancels_pending_flag() {
        let (mut t, clock) = tracker();
        t.visibility_hidden();
        t.set_active(false);
        clock.advance(10_000);
        assert!(t.poll().is_none());
        assert!(!t.is_distracted());
        // The counter keeps its value.
        assert_eq!(t.interruptions(), 1);
    }
}
