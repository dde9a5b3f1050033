//! Floating-timer study sessions.
//!
//! A session record mirrors whichever timer tool is currently active so
//! that the last active timer can be resumed after a restart. Records are
//! stored in the sessions table; the floating widget's position and
//! collapse flag are kv snapshots.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerKind {
    Timer,
    Stopwatch,
    Pomodoro,
    Focus,
}

impl std::fmt::Display for TimerKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            TimerKind::Timer => "timer",
            TimerKind::Stopwatch => "stopwatch",
            TimerKind::Pomodoro => "pomodoro",
            TimerKind::Focus => "focus",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for TimerKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "timer" => Ok(TimerKind::Timer),
            "stopwatch" => Ok(TimerKind::Stopwatch),
            "pomodoro" => Ok(TimerKind::Pomodoro),
            "focus" => Ok(TimerKind::Focus),
            other => Err(format!("unknown timer kind: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudySession {
    pub id: String,
    pub kind: TimerKind,
    pub started_at: DateTime<Utc>,
    pub active: bool,
    /// Current reading shown on the floating widget, in seconds.
    pub display_secs: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StudySession {
    pub fn new(kind: TimerKind, message: Option<&str>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            kind,
            started_at: Utc::now(),
            active: true,
            display_secs: 0,
            message: message.map(str::to_string),
        }
    }
}

/// Persisted floating-timer widget placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FloatingTimerState {
    pub x: i32,
    pub y: i32,
    #[serde(default)]
    pub collapsed: bool,
}
