//! Syllabus pacing analysis.
//!
//! Compares a user's completed chapters against an institute's
//! week-indexed chapter timeline and classifies schedule status as
//! on-track, ahead, or behind-by-N.

use std::collections::BTreeSet;

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CoreError, ValidationError};
use crate::planner::Planner;

/// Tasks whose text starts with this prefix map to chapter names.
/// Exact-string heuristic, by contract; not fuzzy matching.
const REVISION_PREFIX: &str = "Revise ";

/// Chapters first introduced in a given study week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub week: u32,
    pub chapters: Vec<String>,
}

/// An institute's syllabus: covered chapters plus a week-indexed timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InstituteSyllabus {
    pub name: String,
    pub chapters: Vec<String>,
    #[serde(default)]
    pub timeline: Vec<TimelineEntry>,
}

impl InstituteSyllabus {
    /// Parse an imported syllabus document. A document missing the name
    /// or chapters fields is rejected; nothing is mutated on failure.
    pub fn from_json(raw: &str) -> Result<Self, CoreError> {
        let syllabus: InstituteSyllabus = serde_json::from_str(raw)
            .map_err(|e| ValidationError::MalformedSyllabus(e.to_string()))?;
        if syllabus.name.trim().is_empty() {
            return Err(ValidationError::MalformedSyllabus("empty institute name".into()).into());
        }
        Ok(syllabus)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PacingStatus {
    OnTrack,
    AheadOfSchedule,
    Behind(usize),
}

impl std::fmt::Display for PacingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PacingStatus::OnTrack => f.write_str("On Track"),
            PacingStatus::AheadOfSchedule => f.write_str("Ahead of Schedule"),
            PacingStatus::Behind(n) => write!(f, "Behind by {n} chapters"),
        }
    }
}

/// Derived pacing view. Recomputed whole on every input change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PacingReport {
    /// Chapters the timeline expects covered by the current week, in
    /// first-introduction order.
    pub to_cover: Vec<String>,
    pub behind: Vec<String>,
    pub ahead: Vec<String>,
    pub status: PacingStatus,
}

/// June 1 of the current year: the assumed start of the academic year.
pub fn academic_year_start(now: DateTime<Utc>) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(now.year(), 6, 1, 0, 0, 0)
        .single()
        .unwrap_or(now)
}

/// Study week index since `start`: `floor(days / 7) + 1`, floored at 1.
pub fn study_week(now: DateTime<Utc>, start: DateTime<Utc>) -> u32 {
    let week = (now - start).num_days().div_euclid(7) + 1;
    if week < 1 {
        1
    } else {
        week as u32
    }
}

/// Chapter names derived from completed planner tasks by stripping the
/// revision prefix from the task text.
pub fn completed_chapters(planner: &Planner) -> BTreeSet<String> {
    planner
        .all_tasks()
        .filter(|task| task.completed)
        .map(|task| task.text.replacen(REVISION_PREFIX, "", 1).trim().to_string())
        .collect()
}

/// Compare completed chapters against the timeline's cumulative
/// expectation for `current_week`.
pub fn analyze(
    syllabus: &InstituteSyllabus,
    current_week: u32,
    completed: &BTreeSet<String>,
) -> PacingReport {
    let mut to_cover = Vec::new();
    let mut expected = BTreeSet::new();
    for entry in &syllabus.timeline {
        if entry.week <= current_week {
            for chapter in &entry.chapters {
                if expected.insert(chapter.clone()) {
                    to_cover.push(chapter.clone());
                }
            }
        }
    }

    let behind: Vec<String> = to_cover
        .iter()
        .filter(|ch| !completed.contains(*ch))
        .cloned()
        .collect();
    let ahead: Vec<String> = completed
        .iter()
        .filter(|ch| !expected.contains(*ch))
        .cloned()
        .collect();

    let status = if behind.is_empty() {
        if ahead.is_empty() {
            PacingStatus::OnTrack
        } else {
            PacingStatus::AheadOfSchedule
        }
    } else {
        PacingStatus::Behind(behind.len())
    };

    PacingReport {
        to_cover,
        behind,
        ahead,
        status,
    }
}
