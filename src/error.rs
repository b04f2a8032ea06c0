//! Planner error types.
//!
//! All failures are fatal input errors surfaced before any allocation
//! work; the engine itself is pure and never retries.

use chrono::NaiveDate;
use thiserror::Error;

use crate::validation::ValidationError;

/// Fatal planning errors.
#[derive(Debug, Clone, Error)]
pub enum PlanError {
    /// A configuration date string failed to parse as `YYYY-MM-DD`.
    #[error("invalid {field} '{value}': expected YYYY-MM-DD")]
    DateParse {
        /// Which configuration field was malformed.
        field: &'static str,
        /// The offending value.
        value: String,
    },

    /// The semester window is reversed.
    #[error("end date {end} is before start date {start}")]
    DateOrder {
        /// Parsed start date.
        start: NaiveDate,
        /// Parsed end date.
        end: NaiveDate,
    },

    /// A rest-day entry is not a recognizable weekday name.
    #[error("unknown rest day '{0}': expected a weekday name like \"Sunday\"")]
    UnknownWeekday(String),

    /// Rest-day exclusion left no study days in the window.
    #[error("no study days between {start} and {end} after rest-day exclusion")]
    EmptyCalendar {
        /// Window start.
        start: NaiveDate,
        /// Window end.
        end: NaiveDate,
    },

    /// The syllabus or configuration failed structural validation.
    #[error("invalid input: {}", format_validation(.0))]
    Validation(Vec<ValidationError>),
}

fn format_validation(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
