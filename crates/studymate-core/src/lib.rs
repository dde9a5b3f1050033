//! # Studymate Core Library
//!
//! This library provides the core business logic for Studymate, a study
//! companion for exam aspirants. It implements a CLI-first philosophy where
//! all operations are available via a standalone CLI binary; any GUI layer
//! is a thin shell over the same core library.
//!
//! ## Architecture
//!
//! - **Timers**: Wall-clock-based elapsed/countdown/pomodoro engines that
//!   require the caller to periodically invoke `tick()` for progress updates
//! - **Attention**: Page-visibility interruption counting and distraction flags
//! - **Weightage**: Recency-weighted forecast over historical chapter weights
//! - **Syllabus**: Week-indexed pacing analysis against institute timelines
//! - **Planner**: Day-bucketed study tasks with optional calendar sync
//! - **Storage**: SQLite-based session/key-value storage and TOML configuration
//! - **Integrations**: Injected collaborator traits (auth, calendar, AI text
//!   service, notifications) with mock implementations
//!
//! ## Key Components
//!
//! - [`ElapsedTimer`]: Accumulating wall-clock timer
//! - [`Countdown`]: Remaining-time view with one-shot completion
//! - [`PomodoroCycle`]: Work/break cycle state machine
//! - [`analyze`]: Syllabus pacing analysis
//! - [`Database`]: Session and snapshot persistence
//! - [`Settings`]: Application configuration management

pub mod attention;
pub mod data;
pub mod error;
pub mod events;
pub mod integrations;
pub mod planner;
pub mod session;
pub mod storage;
pub mod syllabus;
pub mod timer;
pub mod weightage;

pub use attention::AttentionTracker;
pub use error::{ConfigError, CoreError, DatabaseError, ValidationError};
pub use events::Event;
pub use integrations::{
    AuthProvider, CalendarEventRef, CalendarProvider, Notifier, QuestionClassification,
    TextService, UserProfile,
};
pub use planner::{Day, Planner, PlannerService, PlannerTask, Priority};
pub use session::{FloatingTimerState, StudySession, TimerKind};
pub use storage::{Database, Settings};
pub use syllabus::{analyze, study_week, InstituteSyllabus, PacingReport, PacingStatus};
pub use timer::{Clock, Countdown, ElapsedTimer, PomodoroCycle, PomodoroMode, Stopwatch};
pub use weightage::{ChapterWeightage, HistoricalWeightage, Subject};
