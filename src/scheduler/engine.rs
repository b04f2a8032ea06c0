//! Topic-to-week allocation engine.
//!
//! # Algorithm
//!
//! 1. Parse the semester window and build the week buckets.
//! 2. Reserve trailing revision weeks: `study_week_limit = max(1, total - revision)`.
//! 3. Flatten (subject, unit, topic) triples and stable-sort by unit number,
//!    which front-loads early units (they track syllabus/exam ordering).
//! 4. Fill weeks at a uniform cadence of `max(1, topics / study_week_limit)`
//!    topics per week; the integer-division remainder spills into the last
//!    study week rather than into the revision period.
//! 5. Estimate hours per topic: the unit's budget spread evenly across its
//!    topics, scaled by subject difficulty and the high-priority boost.
//! 6. Emit one revision row per reserved trailing week.
//!
//! # Complexity
//! O(d + n log n) where d = days in the window, n = topic count.

use std::collections::HashSet;

use chrono::{NaiveDate, Weekday};
use tracing::{debug, info};

use crate::calendar::{generate_study_days, group_days_by_week};
use crate::error::PlanError;
use crate::models::{
    Importance, PlanRow, SemesterConfig, Subject, Topic, Unit, DEFAULT_UNIT_HOURS,
    HIGH_PRIORITY_BOOST, REVISION_DAYS_PER_WEEK, REVISION_SUBJECT, REVISION_TITLE,
    SELF_STUDY_LABEL,
};
use crate::validation::validate_input;

/// One flattened (subject, unit, topic) triple awaiting a week assignment.
struct FlatTopic<'a> {
    subject: &'a Subject,
    unit: &'a Unit,
    topic: &'a Topic,
    /// Lower schedules earlier. Currently the owning unit's number.
    priority: u32,
}

/// Converts a syllabus into a flat planning structure.
///
/// The engine is pure and synchronous: identical inputs yield identical
/// output (stable sort, no randomness, no wall clock).
///
/// # Example
///
/// ```
/// use studyplan::models::{Importance, SemesterConfig, Subject, Topic, Unit};
/// use studyplan::scheduler::PlannerEngine;
///
/// let subjects = vec![Subject::new("CS301", "Operating Systems").with_unit(
///     Unit::new(1, "Processes")
///         .with_importance(Importance::High)
///         .with_minimum_hours(10)
///         .with_topic(Topic::new("Scheduling"))
///         .with_topic(Topic::new("Deadlock")),
/// )];
/// let config = SemesterConfig::new("2024-01-01", "2024-01-14").with_rest_day("Sunday");
///
/// let engine = PlannerEngine::new(subjects, config);
/// let rows = engine.generate_plan_with_time().unwrap();
/// assert_eq!(rows.len(), 2);
/// assert_eq!(rows[0].estimated_hours, Some(6.0));
/// ```
#[derive(Debug, Clone)]
pub struct PlannerEngine {
    subjects: Vec<Subject>,
    config: SemesterConfig,
}

impl PlannerEngine {
    /// Creates an engine for one planning run.
    pub fn new(subjects: Vec<Subject>, config: SemesterConfig) -> Self {
        Self { subjects, config }
    }

    /// Flattens the hierarchy into rows with no week/date/hour fields.
    ///
    /// Degenerate mode for callers without a usable semester window.
    /// Includes one row per self-study entry, labeled for the renderer's
    /// header convention. Performs no allocation logic.
    pub fn generate_plan(&self) -> Vec<PlanRow> {
        let mut rows = Vec::new();

        for subject in &self.subjects {
            for unit in &subject.units {
                for topic in &unit.topics {
                    rows.push(PlanRow {
                        subject: subject.name.clone(),
                        unit_no: unit.unit_no,
                        unit_title: unit.title.clone(),
                        importance: unit.importance,
                        topic: topic.name.clone(),
                        subtopics: topic.subtopics.clone(),
                        self_study: false,
                        week: None,
                        start_date: None,
                        end_date: None,
                        estimated_hours: None,
                    });
                }

                for entry in &unit.self_study {
                    rows.push(PlanRow {
                        subject: subject.name.clone(),
                        unit_no: unit.unit_no,
                        unit_title: unit.title.clone(),
                        importance: unit.importance,
                        topic: SELF_STUDY_LABEL.to_string(),
                        subtopics: vec![entry.clone()],
                        self_study: true,
                        week: None,
                        start_date: None,
                        end_date: None,
                        estimated_hours: None,
                    });
                }
            }
        }

        rows
    }

    /// Produces the calendar-bound study plan.
    ///
    /// Validates the syllabus and configuration first; any failure is
    /// returned before scheduling work begins. See the module docs for the
    /// allocation algorithm.
    pub fn generate_plan_with_time(&self) -> Result<Vec<PlanRow>, PlanError> {
        validate_input(&self.subjects, &self.config).map_err(PlanError::Validation)?;

        let start = parse_date("start_date", &self.config.start_date)?;
        let end = parse_date("end_date", &self.config.end_date)?;
        if end < start {
            return Err(PlanError::DateOrder { start, end });
        }
        let rest_days = parse_rest_days(&self.config.rest_days)?;

        let weeks = group_days_by_week(generate_study_days(start, end, &rest_days));
        if weeks.is_empty() {
            return Err(PlanError::EmptyCalendar { start, end });
        }
        let total_weeks = weeks.len() as u32;

        // At least one study week survives even if the configured revision
        // period would otherwise consume the whole semester.
        let study_week_limit = total_weeks
            .saturating_sub(self.config.revision_weeks)
            .max(1);

        let mut items: Vec<FlatTopic> = self
            .subjects
            .iter()
            .flat_map(|subject| {
                subject.units.iter().flat_map(move |unit| {
                    unit.topics.iter().map(move |topic| FlatTopic {
                        subject,
                        unit,
                        topic,
                        priority: unit.unit_no,
                    })
                })
            })
            .collect();

        // Stable sort: subjects interleave in declaration order within a tier
        items.sort_by_key(|item| item.priority);

        let topics_per_week = (items.len() / study_week_limit as usize).max(1);

        debug!(
            total_weeks,
            study_week_limit,
            topics_per_week,
            topic_count = items.len(),
            "derived semester window"
        );

        let mut rows = Vec::with_capacity(items.len() + self.config.revision_weeks as usize);
        let mut current_week: u32 = 1;
        let mut count_in_week: usize = 0;

        for item in &items {
            if count_in_week >= topics_per_week && current_week < study_week_limit {
                current_week += 1;
                count_in_week = 0;
            }

            let week = &weeks[(current_week - 1) as usize];

            // Per-unit budget spread evenly across its topics, then scaled
            // by the two multiplicative weighting signals.
            let multiplier = item
                .subject
                .difficulty_multiplier
                .unwrap_or(self.config.difficulty_multiplier);
            let base_hours = f64::from(item.unit.minimum_hours.unwrap_or(DEFAULT_UNIT_HOURS));
            let mut hours = base_hours / item.unit.topic_count() as f64 * multiplier;
            if item.unit.importance.is_high() {
                hours *= HIGH_PRIORITY_BOOST;
            }

            rows.push(PlanRow {
                subject: item.subject.name.clone(),
                unit_no: item.unit.unit_no,
                unit_title: item.unit.title.clone(),
                importance: item.unit.importance,
                topic: item.topic.name.clone(),
                subtopics: item.topic.subtopics.clone(),
                self_study: false,
                week: Some(current_week),
                start_date: Some(week.start()),
                end_date: Some(week.end()),
                estimated_hours: Some(round_tenth(hours)),
            });

            count_in_week += 1;
        }

        if self.config.revision_weeks > 0 {
            for week_no in (study_week_limit + 1)..=total_weeks {
                let week = &weeks[(week_no - 1) as usize];
                rows.push(PlanRow {
                    subject: REVISION_SUBJECT.to_string(),
                    unit_no: 0,
                    unit_title: REVISION_TITLE.to_string(),
                    importance: Importance::High,
                    topic: format!("Final Revision Cycle - Week {week_no}"),
                    subtopics: Vec::new(),
                    self_study: false,
                    week: Some(week_no),
                    start_date: Some(week.start()),
                    end_date: Some(week.end()),
                    // Fixed five-study-day assumption regardless of actual
                    // rest-day exclusions in that week.
                    estimated_hours: Some(self.config.daily_hours * REVISION_DAYS_PER_WEEK),
                });
            }
        }

        info!(rows = rows.len(), total_weeks, "generated timed study plan");
        Ok(rows)
    }
}

fn parse_date(field: &'static str, value: &str) -> Result<NaiveDate, PlanError> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").map_err(|_| PlanError::DateParse {
        field,
        value: value.to_string(),
    })
}

fn parse_rest_days(names: &[String]) -> Result<HashSet<Weekday>, PlanError> {
    names
        .iter()
        .map(|name| {
            name.parse::<Weekday>()
                .map_err(|_| PlanError::UnknownWeekday(name.clone()))
        })
        .collect()
}

/// Rounds to one decimal place.
fn round_tenth(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
