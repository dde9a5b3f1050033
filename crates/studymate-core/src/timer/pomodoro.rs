//! Pomodoro cycle state machine.
//!
//! ## Mode transitions
//!
//! ```text
//! Work --(complete, count % 4 == 0)--> LongBreak --> Work
//! Work --(complete, otherwise)------> ShortBreak --> Work
//! ```
//!
//! The completed-work counter never resets automatically; manual preset
//! selection overrides the mode without touching the counter.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PomodoroMode {
    Work,
    ShortBreak,
    LongBreak,
}

impl PomodoroMode {
    pub fn duration_secs(self) -> u64 {
        match self {
            PomodoroMode::Work => 25 * 60,
            PomodoroMode::ShortBreak => 5 * 60,
            PomodoroMode::LongBreak => 15 * 60,
        }
    }

    /// Fixed user-facing message shown while this mode is active.
    pub fn message(self) -> &'static str {
        match self {
            PomodoroMode::Work => "Time to focus! Let's get this done.",
            PomodoroMode::ShortBreak => "Great work! Time for a short break.",
            PomodoroMode::LongBreak => "You've earned it! Take a longer break.",
        }
    }
}

impl std::fmt::Display for PomodoroMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            PomodoroMode::Work => "work",
            PomodoroMode::ShortBreak => "short-break",
            PomodoroMode::LongBreak => "long-break",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for PomodoroMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "work" => Ok(PomodoroMode::Work),
            "short-break" | "shortbreak" => Ok(PomodoroMode::ShortBreak),
            "long-break" | "longbreak" => Ok(PomodoroMode::LongBreak),
            other => Err(format!("unknown pomodoro mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PomodoroCycle {
    mode: PomodoroMode,
    /// Total work periods completed over the lifetime of this cycle.
    completed_work: u32,
}

impl Default for PomodoroCycle {
    fn default() -> Self {
        Self {
            mode: PomodoroMode::Work,
            completed_work: 0,
        }
    }
}

impl PomodoroCycle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mode(&self) -> PomodoroMode {
        self.mode
    }

    pub fn completed_work(&self) -> u32 {
        self.completed_work
    }

    /// Apply the transition for a completed period and report the new mode.
    pub fn complete(&mut self) -> Event {
        self.mode = match self.mode {
            PomodoroMode::Work => {
                self.completed_work += 1;
                if self.completed_work % 4 == 0 {
                    PomodoroMode::LongBreak
                } else {
                    PomodoroMode::ShortBreak
                }
            }
            PomodoroMode::ShortBreak | PomodoroMode::LongBreak => PomodoroMode::Work,
        };
        Event::PomodoroAdvanced {
            mode: self.mode,
            completed_work: self.completed_work,
            at: Utc::now(),
        }
    }

    /// Manual preset selection. Leaves the completed-work counter untouched.
    pub fn select(&mut self, mode: PomodoroMode) {
        self.mode = mode;
    }
}
