//! Mocked Google sign-in and Google Calendar collaborators.
//!
//! The sign-in flow and calendar API are simulated: sign-in yields a
//! fixed demo profile, and events live in an in-memory map. The shapes
//! match what a real backend exchange would return, so the rest of the
//! system exercises the same contracts.

use std::collections::HashMap;

use chrono::{DateTime, Duration, Utc};

use super::traits::{AuthProvider, CalendarEventRef, CalendarProvider, UserProfile};
use crate::error::CoreError;
use crate::planner::PlannerTask;

const MOCK_ACCESS_TOKEN: &str = "mock-access-token";

/// Mock Google identity provider.
#[derive(Debug, Clone, Default)]
pub struct MockGoogleAuth {
    user: Option<UserProfile>,
}

impl MockGoogleAuth {
    /// Start signed out.
    pub fn new() -> Self {
        Self::default()
    }

    /// Resume a previously persisted identity.
    pub fn with_user(user: Option<UserProfile>) -> Self {
        Self { user }
    }

    fn demo_profile() -> UserProfile {
        UserProfile {
            id: "123456789".into(),
            email: "aspirant@example.com".into(),
            name: "Exam Aspirant".into(),
            picture: "https://i.pravatar.cc/150?u=aspirant@example.com".into(),
        }
    }
}

impl AuthProvider for MockGoogleAuth {
    fn current_user(&self) -> Option<UserProfile> {
        self.user.clone()
    }

    fn sign_in(&mut self) -> Result<UserProfile, CoreError> {
        // Simulated backend code exchange.
        let profile = Self::demo_profile();
        self.user = Some(profile.clone());
        Ok(profile)
    }

    fn sign_out(&mut self) {
        self.user = None;
    }

    fn access_token(&self) -> Option<String> {
        self.user.as_ref().map(|_| MOCK_ACCESS_TOKEN.to_string())
    }
}

/// An event held by the mock calendar.
#[derive(Debug, Clone)]
pub struct StoredEvent {
    pub id: String,
    pub summary: String,
    pub description: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Mock Google Calendar with an in-memory event store.
#[derive(Debug, Default)]
pub struct MockGoogleCalendar {
    events: HashMap<String, StoredEvent>,
}

impl MockGoogleCalendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn event_count(&self) -> usize {
        self.events.len()
    }

    pub fn event(&self, id: &str) -> Option<&StoredEvent> {
        self.events.get(id)
    }
}

impl CalendarProvider for MockGoogleCalendar {
    fn save_event(&mut self, task: &PlannerTask) -> Option<CalendarEventRef> {
        // Re-saving a task updates its existing event.
        let event_id = task
            .calendar_event_id
            .clone()
            .unwrap_or_else(|| format!("cal_event_{}", task.id));
        let start = Utc::now();
        let end = start + Duration::minutes(task.time_min as i64);
        self.events.insert(
            event_id.clone(),
            StoredEvent {
                id: event_id.clone(),
                summary: task.text.clone(),
                description: format!(
                    "Practice problems: {}\nPriority: {}",
                    task.problems, task.priority
                ),
                start,
                end,
            },
        );
        Some(CalendarEventRef { id: event_id })
    }

    fn delete_event(&mut self, event_id: &str) -> bool {
        self.events.remove(event_id).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Priority;

    #[test]
    fn sign_in_out_cycle() {
        let mut auth = MockGoogleAuth::new();
        assert!(auth.current_user().is_none());
        assert!(auth.access_token().is_none());

        let profile = auth.sign_in().unwrap();
        assert_eq!(auth.current_user().unwrap(), profile);
        assert_eq!(auth.access_token().as_deref(), Some(MOCK_ACCESS_TOKEN));

        auth.sign_out();
        assert!(auth.current_user().is_none());
    }

    #[test]
    fn save_and_delete_event() {
        let mut calendar = MockGoogleCalendar::new();
        let task = PlannerTask::new("Revise Optics", 45, Priority::High, 15);
        let event = calendar.save_event(&task).unwrap();
        assert_eq!(event.id, format!("cal_event_{}", task.id));
        assert_eq!(calendar.event_count(), 1);

        let stored = calendar.event(&event.id).unwrap();
        assert_eq!(stored.summary, "Revise Optics");
        assert_eq!((stored.end - stored.start).num_minutes(), 45);

        assert!(calendar.delete_event(&event.id));
        assert!(!calendar.delete_event(&event.id));
    }

    #[test]
    fn resave_reuses_the_existing_event_id() {
        let mut calendar = MockGoogleCalendar::new();
        let mut task = PlannerTask::new("Revise Waves", 30, Priority::Low, 5);
        let first = calendar.save_event(&task).unwrap();
        task.calendar_event_id = Some(first.id.clone());
        task.text = "Revise Waves and Sound".into();
        let second = calendar.save_event(&task).unwrap();
        assert_eq!(first.id, second.id);
        assert_eq!(calendar.event_count(), 1);
    }
}
