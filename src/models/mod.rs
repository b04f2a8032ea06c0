//! Planner domain models.
//!
//! Core data types for representing a syllabus and its planned output.
//! All types are plain data: no scheduling logic, no formatting.
//!
//! - **`syllabus`**: the academic hierarchy — `Subject` → `Unit` → `Topic`
//! - **`semester`**: `SemesterConfig` and the planner's named defaults
//! - **`plan`**: `PlanRow`, the flat renderer-facing output record

mod plan;
mod semester;
mod syllabus;

pub use plan::{PlanRow, REVISION_SUBJECT, REVISION_TITLE, SELF_STUDY_LABEL};
pub use semester::{
    SemesterConfig, DEFAULT_DAILY_HOURS, DEFAULT_DIFFICULTY, DEFAULT_UNIT_HOURS,
    HIGH_PRIORITY_BOOST, REVISION_DAYS_PER_WEEK,
};
pub use syllabus::{Importance, Subject, Topic, Unit};
