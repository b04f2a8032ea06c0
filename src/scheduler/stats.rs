//! Plan summary statistics.
//!
//! Aggregates a flat plan into per-subject figures for overview reporting
//! (the renderer's master sheet): row counts, total estimated hours, and
//! the number of distinct weeks each subject spans.

use std::collections::HashMap;

use crate::models::PlanRow;

/// Per-subject aggregates over a generated plan.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SubjectStats {
    /// Scheduled topic rows (self-study rows excluded).
    pub topic_rows: usize,
    /// Sum of estimated hours across the subject's rows.
    pub total_hours: f64,
    /// Distinct week numbers the subject's rows span.
    pub week_count: usize,
}

/// Summary of a generated plan.
#[derive(Debug, Clone, Default)]
pub struct PlanSummary {
    /// Aggregates keyed by subject name. Revision rows are excluded.
    pub subjects: HashMap<String, SubjectStats>,
    /// Total estimated hours across all rows, revision included.
    pub total_hours: f64,
    /// Number of revision rows.
    pub revision_rows: usize,
}

impl PlanSummary {
    /// Computes per-subject aggregates from a flat plan.
    pub fn calculate(rows: &[PlanRow]) -> Self {
        let mut subjects: HashMap<String, SubjectStats> = HashMap::new();
        let mut subject_weeks: HashMap<String, std::collections::HashSet<u32>> = HashMap::new();
        let mut total_hours = 0.0;
        let mut revision_rows = 0;

        for row in rows {
            let hours = row.estimated_hours.unwrap_or(0.0);
            total_hours += hours;

            if row.is_revision() {
                revision_rows += 1;
                continue;
            }

            let stats = subjects.entry(row.subject.clone()).or_default();
            if !row.self_study {
                stats.topic_rows += 1;
            }
            stats.total_hours += hours;

            if let Some(week) = row.week {
                subject_weeks.entry(row.subject.clone()).or_default().insert(week);
            }
        }

        for (subject, weeks) in subject_weeks {
            if let Some(stats) = subjects.get_mut(&subject) {
                stats.week_count = weeks.len();
            }
        }

        Self {
            subjects,
            total_hours,
            revision_rows,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SemesterConfig, Subject, Topic, Unit};
    use crate::scheduler::PlannerEngine;

    fn sample_rows() -> Vec<PlanRow> {
        let subjects = vec![
            Subject::new("CS301", "Operating Systems").with_unit(
                Unit::new(1, "Processes")
                    .with_minimum_hours(10)
                    .with_topic(Topic::new("Scheduling"))
                    .with_topic(Topic::new("Deadlock")),
            ),
            Subject::new("MA102", "Linear Algebra")
                .with_unit(Unit::new(1, "Vector Spaces").with_topic(Topic::new("Basis"))),
        ];
        let config = SemesterConfig::new("2024-01-01", "2024-01-28")
            .with_rest_day("Sunday")
            .with_revision_weeks(1);
        PlannerEngine::new(subjects, config)
            .generate_plan_with_time()
            .unwrap()
    }

    #[test]
    fn test_summary_counts_rows_per_subject() {
        let summary = PlanSummary::calculate(&sample_rows());
        assert_eq!(summary.subjects["Operating Systems"].topic_rows, 2);
        assert_eq!(summary.subjects["Linear Algebra"].topic_rows, 1);
        assert_eq!(summary.revision_rows, 1);
    }

    #[test]
    fn test_summary_sums_hours() {
        let summary = PlanSummary::calculate(&sample_rows());
        // Two OS topics at 10/2 = 5.0 each
        let os = &summary.subjects["Operating Systems"];
        assert!((os.total_hours - 10.0).abs() < 1e-9);
        // Grand total includes the revision row (3.0 * 5 = 15.0)
        let subject_hours: f64 = summary.subjects.values().map(|s| s.total_hours).sum();
        assert!((summary.total_hours - (subject_hours + 15.0)).abs() < 1e-9);
    }

    #[test]
    fn test_summary_week_span() {
        let summary = PlanSummary::calculate(&sample_rows());
        for stats in summary.subjects.values() {
            assert!(stats.week_count >= 1);
        }
    }

    #[test]
    fn test_summary_empty_plan() {
        let summary = PlanSummary::calculate(&[]);
        assert!(summary.subjects.is_empty());
        assert_eq!(summary.revision_rows, 0);
        assert_eq!(summary.total_hours, 0.0);
    }
}
