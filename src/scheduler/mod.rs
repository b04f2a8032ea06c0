//! Allocation engine and plan statistics.
//!
//! # Algorithm
//!
//! `PlannerEngine` assigns topics to semester weeks at a uniform cadence,
//! front-loading low unit numbers and reserving trailing weeks for
//! revision. It is a deterministic approximation, not a load-balancing
//! optimization.
//!
//! # Summary
//!
//! `PlanSummary` computes per-subject aggregates (rows, hours, week span)
//! from the flat output, for overview reporting.

mod engine;
mod stats;

pub use engine::PlannerEngine;
pub use stats::{PlanSummary, SubjectStats};
