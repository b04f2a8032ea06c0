//! Plan row model (the engine's output unit).
//!
//! A flat, renderer-facing record. The external renderer groups rows by
//! subject and relies on the field set plus the self-study flag/label
//! convention; this is the one compatibility surface the engine preserves.
//!
//! Rows from the untimed plan carry no week/date/hour fields; self-study
//! rows never carry an hour estimate.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::syllabus::Importance;

/// Topic label used for self-study rows. The renderer treats the first
/// such row per unit as a section header.
pub const SELF_STUDY_LABEL: &str = "SELF STUDY";

/// Sentinel subject name carried by revision rows.
pub const REVISION_SUBJECT: &str = "ALL SUBJECTS";

/// Unit title carried by revision rows.
pub const REVISION_TITLE: &str = "REVISION CYCLE";

/// One scheduled (or flattened) syllabus entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanRow {
    /// Owning subject's display name.
    pub subject: String,
    /// Owning unit's sequence number. 0 for revision rows.
    pub unit_no: u32,
    /// Owning unit's title.
    pub unit_title: String,
    /// Owning unit's importance tag.
    pub importance: Importance,
    /// Topic name (or a label for self-study / revision rows).
    pub topic: String,
    /// Subtopic names. Empty for self-study and revision rows.
    pub subtopics: Vec<String>,
    /// Whether this is a self-study row.
    pub self_study: bool,
    /// Assigned 1-based week number. `None` in the untimed plan.
    pub week: Option<u32>,
    /// First study day of the assigned week.
    pub start_date: Option<NaiveDate>,
    /// Last study day of the assigned week.
    pub end_date: Option<NaiveDate>,
    /// Estimated study hours, rounded to one decimal.
    /// `None` for untimed and self-study rows.
    pub estimated_hours: Option<f64>,
}

impl PlanRow {
    /// Whether this row belongs to the trailing revision period.
    pub fn is_revision(&self) -> bool {
        self.unit_no == 0 && self.subject == REVISION_SUBJECT
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_row() -> PlanRow {
        PlanRow {
            subject: "Operating Systems".into(),
            unit_no: 1,
            unit_title: "Processes".into(),
            importance: Importance::High,
            topic: "Scheduling".into(),
            subtopics: vec!["Round Robin".into()],
            self_study: false,
            week: Some(1),
            start_date: NaiveDate::from_ymd_opt(2024, 1, 1),
            end_date: NaiveDate::from_ymd_opt(2024, 1, 6),
            estimated_hours: Some(6.0),
        }
    }

    #[test]
    fn test_is_revision() {
        let row = sample_row();
        assert!(!row.is_revision());

        let mut rev = sample_row();
        rev.subject = REVISION_SUBJECT.into();
        rev.unit_no = 0;
        assert!(rev.is_revision());
    }

    #[test]
    fn test_row_serializes_dates_as_iso() {
        let row = sample_row();
        let json = serde_json::to_string(&row).unwrap();
        assert!(json.contains("\"2024-01-01\""));
        assert!(json.contains("\"2024-01-06\""));
    }
}
