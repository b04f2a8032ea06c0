//! Study-day calendar.
//!
//! Defines what "time" means to the planner: which dates are study days,
//! and how study days group into sequential semester weeks.
//!
//! # Week Model
//! Week numbers are 1-based and sequential in chronological order. They are
//! independent of ISO calendar week numbers: a semester starting mid-week
//! produces a short week 1, and a partial final week still counts as one
//! week. A new week opens only when a Monday is encountered, so rest-day
//! exclusions never by themselves create a week boundary.

use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::HashSet;

/// An ordered, non-empty run of study days sharing one semester week.
#[derive(Debug, Clone, PartialEq)]
pub struct StudyWeek {
    /// 1-based sequential week number.
    pub number: u32,
    /// Study days in this week, ascending. Non-empty by construction.
    pub days: Vec<NaiveDate>,
}

impl StudyWeek {
    /// First study day of the week.
    #[inline]
    pub fn start(&self) -> NaiveDate {
        self.days[0]
    }

    /// Last study day of the week.
    #[inline]
    pub fn end(&self) -> NaiveDate {
        self.days[self.days.len() - 1]
    }
}

/// Yields every date in `[start, end]` whose weekday is not excluded,
/// in ascending order.
///
/// Pure and lazy; calling it again restarts the sequence. If every day in
/// range is a rest day the iterator is empty, and callers must treat that
/// as zero study weeks rather than divide by it.
pub fn generate_study_days(
    start: NaiveDate,
    end: NaiveDate,
    rest_days: &HashSet<Weekday>,
) -> impl Iterator<Item = NaiveDate> + '_ {
    start
        .iter_days()
        .take_while(move |d| *d <= end)
        .filter(move |d| !rest_days.contains(&d.weekday()))
}

/// Partitions study days into consecutive week buckets.
///
/// Week 1 opens with the first day; thereafter a Monday opens a new week
/// whenever the current bucket is already non-empty. Returns an arena
/// indexed by `week_number - 1` (week numbers are always contiguous
/// from 1, so no map is needed).
///
/// Empty input yields an empty vector.
pub fn group_days_by_week(study_days: impl Iterator<Item = NaiveDate>) -> Vec<StudyWeek> {
    let mut weeks: Vec<StudyWeek> = Vec::new();

    for day in study_days {
        // Buckets are created non-empty, so any later Monday opens a new one.
        let open_new = weeks.is_empty() || day.weekday() == Weekday::Mon;
        if open_new {
            weeks.push(StudyWeek {
                number: weeks.len() as u32 + 1,
                days: vec![day],
            });
        } else if let Some(week) = weeks.last_mut() {
            week.days.push(day);
        }
    }

    weeks
}
