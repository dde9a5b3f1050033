use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::PomodoroMode;

/// Notable state changes produced by the timer and attention engines.
/// Callers poll `tick()` and react to the events it returns.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// A countdown run reached zero while active. Fired exactly once per run.
    CountdownCompleted {
        duration_secs: u64,
        at: DateTime<Utc>,
    },
    /// The pomodoro cycle moved to its next mode after a period completed.
    PomodoroAdvanced {
        mode: PomodoroMode,
        completed_work: u32,
        at: DateTime<Utc>,
    },
    /// The page went hidden during an active session.
    AttentionInterrupted {
        interruptions: u32,
        at: DateTime<Utc>,
    },
    /// The page stayed hidden past the distraction threshold.
    DistractionFlagged { hidden_ms: u64, at: DateTime<Utc> },
}
