//! Input validation for planning runs.
//!
//! Checks structural integrity of the syllabus hierarchy and the semester
//! configuration before any scheduling work. Detects:
//! - Units with no graded topics (would divide by zero in hour estimation)
//! - Duplicate subject codes
//! - Non-positive hour budgets and multipliers
//!
//! Unit sequence numbers are assumed unique within a subject and are not
//! checked here.

use crate::models::{SemesterConfig, Subject};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description naming the offending field/unit.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationErrorKind {
    /// A unit has no graded topics.
    EmptyUnit,
    /// Two subjects share the same code.
    DuplicateSubjectCode,
    /// A unit's `minimum_hours` is zero.
    NonPositiveHours,
    /// A subject's difficulty multiplier is zero or negative.
    NonPositiveMultiplier,
    /// The configured daily-hour norm is zero or negative.
    NonPositiveDailyHours,
}

impl ValidationError {
    /// Creates a validation error.
    pub fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

/// Validates the syllabus and configuration for a planning run.
///
/// Checks:
/// 1. No duplicate subject codes
/// 2. Every unit has at least one graded topic
/// 3. `minimum_hours`, when set, is positive
/// 4. Difficulty multipliers (per-subject and config-level) are positive
/// 5. The daily-hour norm is positive
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(subjects: &[Subject], config: &SemesterConfig) -> ValidationResult {
    let mut errors = Vec::new();

    let mut codes = std::collections::HashSet::new();
    for subject in subjects {
        if !codes.insert(subject.code.as_str()) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateSubjectCode,
                format!("duplicate subject code '{}'", subject.code),
            ));
        }

        if let Some(multiplier) = subject.difficulty_multiplier {
            if multiplier <= 0.0 {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveMultiplier,
                    format!(
                        "subject '{}' has non-positive difficulty multiplier {multiplier}",
                        subject.code
                    ),
                ));
            }
        }

        for unit in &subject.units {
            if !unit.has_topics() {
                errors.push(ValidationError::new(
                    ValidationErrorKind::EmptyUnit,
                    format!(
                        "unit {} '{}' of subject '{}' has no topics",
                        unit.unit_no, unit.title, subject.code
                    ),
                ));
            }

            if unit.minimum_hours == Some(0) {
                errors.push(ValidationError::new(
                    ValidationErrorKind::NonPositiveHours,
                    format!(
                        "unit {} of subject '{}' has minimum_hours = 0",
                        unit.unit_no, subject.code
                    ),
                ));
            }
        }
    }

    if config.daily_hours <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveDailyHours,
            format!("daily_hours must be positive, got {}", config.daily_hours),
        ));
    }

    if config.difficulty_multiplier <= 0.0 {
        errors.push(ValidationError::new(
            ValidationErrorKind::NonPositiveMultiplier,
            format!(
                "config difficulty_multiplier must be positive, got {}",
                config.difficulty_multiplier
            ),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
