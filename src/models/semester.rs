//! Semester configuration.
//!
//! One configuration is constructed per planning run and passed by value
//! into the engine. Dates arrive as ISO `YYYY-MM-DD` strings from the
//! upstream dialogue/config stage; the engine parses and validates them
//! before any scheduling work.
//!
//! Defaults are named constants rather than inline literals so the engine
//! carries no implicit global state.

use serde::{Deserialize, Serialize};

/// Hour budget applied to a unit that specifies no `minimum_hours`.
pub const DEFAULT_UNIT_HOURS: u32 = 10;

/// Daily study-hour norm used to size revision-week estimates.
pub const DEFAULT_DAILY_HOURS: f64 = 3.0;

/// Difficulty multiplier applied when a subject carries none of its own.
pub const DEFAULT_DIFFICULTY: f64 = 1.0;

/// Hour boost applied to topics in high-priority units.
pub const HIGH_PRIORITY_BOOST: f64 = 1.2;

/// Study days assumed per revision week, constant regardless of that
/// week's actual rest-day exclusions.
pub const REVISION_DAYS_PER_WEEK: f64 = 5.0;

/// Semester window and planning preferences.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SemesterConfig {
    /// Semester start date, ISO `YYYY-MM-DD`.
    pub start_date: String,
    /// Semester end date (inclusive), ISO `YYYY-MM-DD`.
    pub end_date: String,
    /// Weekday names excluded from study (e.g. `"Sunday"`).
    #[serde(default)]
    pub rest_days: Vec<String>,
    /// Trailing weeks reserved for revision.
    #[serde(default)]
    pub revision_weeks: u32,
    /// Daily study-hour norm. Only sizes revision-week estimates.
    #[serde(default = "default_daily_hours")]
    pub daily_hours: f64,
    /// Difficulty multiplier applied to subjects that carry none of
    /// their own.
    #[serde(default = "default_difficulty")]
    pub difficulty_multiplier: f64,
}

fn default_daily_hours() -> f64 {
    DEFAULT_DAILY_HOURS
}

fn default_difficulty() -> f64 {
    DEFAULT_DIFFICULTY
}

impl SemesterConfig {
    /// Creates a configuration for the given window with no rest days,
    /// no revision period, and the default daily-hour norm.
    pub fn new(start_date: impl Into<String>, end_date: impl Into<String>) -> Self {
        Self {
            start_date: start_date.into(),
            end_date: end_date.into(),
            rest_days: Vec::new(),
            revision_weeks: 0,
            daily_hours: DEFAULT_DAILY_HOURS,
            difficulty_multiplier: DEFAULT_DIFFICULTY,
        }
    }

    /// Adds a rest weekday by name.
    pub fn with_rest_day(mut self, day: impl Into<String>) -> Self {
        self.rest_days.push(day.into());
        self
    }

    /// Sets the count of trailing revision weeks.
    pub fn with_revision_weeks(mut self, weeks: u32) -> Self {
        self.revision_weeks = weeks;
        self
    }

    /// Sets the daily study-hour norm.
    pub fn with_daily_hours(mut self, hours: f64) -> Self {
        self.daily_hours = hours;
        self
    }

    /// Sets the default difficulty multiplier for subjects without one.
    pub fn with_difficulty_multiplier(mut self, multiplier: f64) -> Self {
        self.difficulty_multiplier = multiplier;
        self
    }
}
