//! Weekly task planner.
//!
//! Tasks live in per-day buckets keyed by the canonical weekday names.
//! Task identifiers are unique within their day bucket (not globally).
//! [`PlannerService`] layers optional calendar sync on top of the plain
//! CRUD operations: remote failures degrade gracefully and never block
//! the local mutation.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::integrations::{AuthProvider, CalendarProvider};

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Day {
    pub const ALL: [Day; 7] = [
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];
}

impl std::fmt::Display for Day {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "monday" | "mon" => Ok(Day::Monday),
            "tuesday" | "tue" => Ok(Day::Tuesday),
            "wednesday" | "wed" => Ok(Day::Wednesday),
            "thursday" | "thu" => Ok(Day::Thursday),
            "friday" | "fri" => Ok(Day::Friday),
            "saturday" | "sat" => Ok(Day::Saturday),
            "sunday" | "sun" => Ok(Day::Sunday),
            other => Err(format!("unknown day: {other}")),
        }
    }
}

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(format!("unknown priority: {other}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlannerTask {
    pub id: String,
    pub text: String,
    /// Time estimate in minutes.
    pub time_min: u32,
    pub priority: Priority,
    /// Practice problem count.
    pub problems: u32,
    #[serde(default)]
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calendar_event_id: Option<String>,
}

impl PlannerTask {
    pub fn new(text: &str, time_min: u32, priority: Priority, problems: u32) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            text: text.to_string(),
            time_min,
            priority,
            problems,
            completed: false,
            calendar_event_id: None,
        }
    }
}

/// Day-bucketed task collection, persisted whole as a kv snapshot.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Planner {
    days: BTreeMap<Day, Vec<PlannerTask>>,
}

impl Planner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self, day: Day) -> &[PlannerTask] {
        self.days.get(&day).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn all_tasks(&self) -> impl Iterator<Item = &PlannerTask> {
        self.days.values().flatten()
    }

    pub fn task(&self, day: Day, id: &str) -> Option<&PlannerTask> {
        self.tasks(day).iter().find(|t| t.id == id)
    }

    /// Create a task in the given day bucket and return a copy of it.
    pub fn add_task(
        &mut self,
        day: Day,
        text: &str,
        time_min: u32,
        priority: Priority,
        problems: u32,
    ) -> PlannerTask {
        let task = PlannerTask::new(text, time_min, priority, problems);
        self.days.entry(day).or_default().push(task.clone());
        task
    }

    /// Replace an existing task with the same id, or append it.
    pub fn upsert_task(&mut self, day: Day, task: PlannerTask) {
        let bucket = self.days.entry(day).or_default();
        match bucket.iter_mut().find(|t| t.id == task.id) {
            Some(existing) => *existing = task,
            None => bucket.push(task),
        }
    }

    /// Toggle the completion flag. Returns false when the task is unknown.
    pub fn toggle_complete(&mut self, day: Day, id: &str) -> bool {
        if let Some(task) = self
            .days
            .entry(day)
            .or_default()
            .iter_mut()
            .find(|t| t.id == id)
        {
            task.completed = !task.completed;
            true
        } else {
            false
        }
    }

    pub fn remove_task(&mut self, day: Day, id: &str) -> Option<PlannerTask> {
        let bucket = self.days.get_mut(&day)?;
        let index = bucket.iter().position(|t| t.id == id)?;
        Some(bucket.remove(index))
    }

    /// Drop every task in the day bucket, returning them.
    pub fn clear_day(&mut self, day: Day) -> Vec<PlannerTask> {
        self.days.remove(&day).unwrap_or_default()
    }
}

/// Planner operations with calendar sync layered on.
///
/// Remote calls happen only when the sync setting is on and a signed-in
/// identity is present; a failed remote call (None/false) leaves the
/// local mutation intact.
pub struct PlannerService<'a> {
    auth: &'a dyn AuthProvider,
    calendar: &'a mut dyn CalendarProvider,
    sync_enabled: bool,
}

impl<'a> PlannerService<'a> {
    pub fn new(
        auth: &'a dyn AuthProvider,
        calendar: &'a mut dyn CalendarProvider,
        sync_enabled: bool,
    ) -> Self {
        Self {
            auth,
            calendar,
            sync_enabled,
        }
    }

    fn sync_gate(&self) -> bool {
        self.sync_enabled && self.auth.current_user().is_some()
    }

    /// Save (create or edit) a task, pushing a calendar event when synced.
    pub fn save_task(&mut self, planner: &mut Planner, day: Day, mut task: PlannerTask) {
        if self.sync_gate() {
            if let Some(event) = self.calendar.save_event(&task) {
                task.calendar_event_id = Some(event.id);
            }
        }
        planner.upsert_task(day, task);
    }

    /// Delete a task, removing its calendar event when synced.
    pub fn delete_task(&mut self, planner: &mut Planner, day: Day, id: &str) -> Option<PlannerTask> {
        if self.sync_gate() {
            if let Some(event_id) = planner
                .task(day, id)
                .and_then(|t| t.calendar_event_id.clone())
            {
                self.calendar.delete_event(&event_id);
            }
        }
        planner.remove_task(day, id)
    }

    /// Clear a day bucket, removing synced calendar events best-effort.
    pub fn clear_day(&mut self, planner: &mut Planner, day: Day) -> Vec<PlannerTask> {
        let removed = planner.clear_day(day);
        if self.sync_gate() {
            for task in &removed {
                if let Some(event_id) = &task.calendar_event_id {
                    self.calendar.delete_event(event_id);
                }
            }
        }
        removed
    }

    /// Re-push every task to the calendar. Returns the number of tasks
    /// that received an event id.
    pub fn sync_all(&mut self, planner: &mut Planner) -> usize {
        if !self.sync_gate() {
            return 0;
        }
        let mut synced = 0;
        for day in Day::ALL {
            let tasks: Vec<PlannerTask> = planner.tasks(day).to_vec();
            for mut task in tasks {
                if let Some(event) = self.calendar.save_event(&task) {
                    task.calendar_event_id = Some(event.id);
                    synced += 1;
                }
                planner.upsert_task(day, task);
            }
        }
        synced
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::integrations::{CalendarEventRef, MockGoogleAuth, MockGoogleCalendar};

    #[test]
    fn ids_are_unique_within_a_day_bucket() {
        let mut planner = Planner::new();
        planner.add_task(Day::Monday, "Revise Kinematics", 60, Priority::High, 20);
        planner.add_task(Day::Monday, "Revise Optics", 45, Priority::Low, 10);
        let ids: Vec<&str> = planner.tasks(Day::Monday).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(ids.len(), 2);
        assert_ne!(ids[0], ids[1]);
    }

    #[test]
    fn toggle_and_remove() {
        let mut planner = Planner::new();
        let id = planner
            .add_task(Day::Friday, "Revise Calculus", 90, Priority::Medium, 30)
            .id
            .clone();
        assert!(planner.toggle_complete(Day::Friday, &id));
        assert!(planner.task(Day::Friday, &id).unwrap().completed);
        assert!(!planner.toggle_complete(Day::Friday, "missing"));
        assert!(planner.remove_task(Day::Friday, &id).is_some());
        assert!(planner.tasks(Day::Friday).is_empty());
    }

    #[test]
    fn upsert_replaces_by_id() {
        let mut planner = Planner::new();
        let mut task = PlannerTask::new("Revise Algebra", 30, Priority::Low, 5);
        let id = task.id.clone();
        planner.upsert_task(Day::Sunday, task.clone());
        task.time_min = 45;
        planner.upsert_task(Day::Sunday, task);
        assert_eq!(planner.tasks(Day::Sunday).len(), 1);
        assert_eq!(planner.task(Day::Sunday, &id).unwrap().time_min, 45);
    }

    #[test]
    fn service_records_event_id_when_synced() {
        let mut auth = MockGoogleAuth::new();
        auth.sign_in().unwrap();
        let mut calendar = MockGoogleCalendar::new();
        let mut service = PlannerService::new(&auth, &mut calendar, true);

        let mut planner = Planner::new();
        let task = PlannerTask::new("Revise Waves", 40, Priority::High, 12);
        let id = task.id.clone();
        service.save_task(&mut planner, Day::Tuesday, task);

        let saved = planner.task(Day::Tuesday, &id).unwrap();
        assert_eq!(
            saved.calendar_event_id.as_deref(),
            Some(format!("cal_event_{id}").as_str())
        );
    }

    #[test]
    fn service_skips_calendar_when_signed_out() {
        let auth = MockGoogleAuth::new();
        let mut calendar = MockGoogleCalendar::new();
        let mut service = PlannerService::new(&auth, &mut calendar, true);

        let mut planner = Planner::new();
        let task = PlannerTask::new("Revise Waves", 40, Priority::High, 12);
        let id = task.id.clone();
        service.save_task(&mut planner, Day::Tuesday, task);

        // Task saved locally even without a remote event.
        let saved = planner.task(Day::Tuesday, &id).unwrap();
        assert!(saved.calendar_event_id.is_none());
    }

    #[test]
    fn service_survives_provider_failure() {
        struct FailingCalendar;
        impl CalendarProvider for FailingCalendar {
            fn save_event(&mut self, _task: &PlannerTask) -> Option<CalendarEventRef> {
                None
            }
            fn delete_event(&mut self, _event_id: &str) -> bool {
                false
            }
        }

        let mut auth = MockGoogleAuth::new();
        auth.sign_in().unwrap();
        let mut calendar = FailingCalendar;
        let mut service = PlannerService::new(&auth, &mut calendar, true);

        let mut planner = Planner::new();
        let task = PlannerTask::new("Revise Thermo", 25, Priority::Low, 4);
        let id = task.id.clone();
        service.save_task(&mut planner, Day::Monday, task);
        assert!(planner.task(Day::Monday, &id).is_some());
        assert!(service.delete_task(&mut planner, Day::Monday, &id).is_some());
    }

    #[test]
    fn clear_day_deletes_synced_events() {
        let mut auth = MockGoogleAuth::new();
        auth.sign_in().unwrap();
        let mut calendar = MockGoogleCalendar::new();
        {
            let mut service = PlannerService::new(&auth, &mut calendar, true);
            let mut planner = Planner::new();
            service.save_task(
                &mut planner,
                Day::Wednesday,
                PlannerTask::new("Revise Optics", 30, Priority::Medium, 8),
            );
            service.clear_day(&mut planner, Day::Wednesday);
            assert!(planner.tasks(Day::Wednesday).is_empty());
        }
        assert_eq!(calendar.event_count(), 0);
    }
}
