//! Syllabus-to-calendar study planner.
//!
//! Converts a validated curriculum hierarchy (subjects, units, topics) into
//! a calendar-bound study schedule: each topic gets a semester week, a
//! start/end date, and a weighted hour estimate, subject to rest-day
//! exclusions and an optional trailing revision period.
//!
//! Ingestion (OCR, AI extraction, dialogue) and rendering live upstream and
//! downstream of this crate; it accepts only validated, strongly-typed
//! input and emits flat `PlanRow` records.
//!
//! # Modules
//!
//! - **`models`**: Domain types — `Subject`, `Unit`, `Topic`,
//!   `SemesterConfig`, `PlanRow`
//! - **`calendar`**: Study-day generation and week grouping
//! - **`validation`**: Input integrity checks (empty units, duplicate codes)
//! - **`scheduler`**: `PlannerEngine` allocation and `PlanSummary` aggregates
//! - **`error`**: `PlanError`
//!
//! # Architecture
//!
//! Data flows strictly upward: calendar → week grouping → allocation →
//! flat rows. The engine is pure and single-threaded; every run is
//! independently reproducible from its inputs.

pub mod calendar;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;

pub use error::PlanError;
