//! Collaborator contracts.
//!
//! External services are injected behind these traits rather than imported
//! as module-level singletons. Every failure mode degrades gracefully:
//! calendar calls surface `None`/`false`, the text service surfaces an
//! inline error string, and notification delivery errors are ignored.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::planner::PlannerTask;

/// Signed-in identity exposed by the auth collaborator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub picture: String,
}

/// Sign-in state gate. The core treats identity purely as a gate for
/// calendar-sync behavior.
pub trait AuthProvider {
    fn current_user(&self) -> Option<UserProfile>;

    fn sign_in(&mut self) -> Result<UserProfile, CoreError>;

    fn sign_out(&mut self);

    /// Access token for the signed-in identity, if any.
    fn access_token(&self) -> Option<String>;
}

/// Reference to a remote calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarEventRef {
    pub id: String,
}

/// Calendar collaborator. A `None`/`false` result means the remote call
/// failed; callers keep their local mutation regardless.
pub trait CalendarProvider {
    fn save_event(&mut self, task: &PlannerTask) -> Option<CalendarEventRef>;

    fn delete_event(&mut self, event_id: &str) -> bool;
}

/// Structured result of classifying a practice question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionClassification {
    pub subject: String,
    pub topic: String,
    pub difficulty: String,
    pub suggestions: Vec<String>,
}

/// Generative-AI text collaborator. Errors are inline strings shown to
/// the user, never propagated as fatal.
pub trait TextService {
    fn summarize(&self, text: &str) -> String;

    fn classify(&self, question: &str) -> Result<QuestionClassification, String>;
}

/// Best-effort user notification. Failure to deliver is non-fatal and
/// silently ignored by callers.
pub trait Notifier {
    fn notify(&self, title: &str, body: &str) -> Result<(), CoreError>;
}
