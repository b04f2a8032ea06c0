//! Syllabus hierarchy models.
//!
//! Represents the academic hierarchy handed to the planner by the
//! extraction stage: subjects own units, units own topics. All types are
//! constructed once from validated input and are read-only during a
//! planning run.
//!
//! # Wire Format
//! Importance tags serialize as `"IMP"` / `"LESS_IMP"` to stay compatible
//! with the upstream extractor output.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A leaf unit of study content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Topic {
    /// Topic name.
    #[serde(rename = "topic")]
    pub name: String,
    /// Ordered subtopic names. May be empty.
    #[serde(default)]
    pub subtopics: Vec<String>,
}

impl Topic {
    /// Creates a topic with no subtopics.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            subtopics: Vec::new(),
        }
    }

    /// Adds a subtopic.
    pub fn with_subtopic(mut self, subtopic: impl Into<String>) -> Self {
        self.subtopics.push(subtopic.into());
        self
    }
}

/// Per-unit importance tag.
///
/// High-priority units get an hour boost during allocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Importance {
    /// High-priority unit (`"IMP"` on the wire).
    #[serde(rename = "IMP")]
    High,
    /// Low-priority unit (`"LESS_IMP"` on the wire).
    #[serde(rename = "LESS_IMP")]
    Low,
}

impl Importance {
    /// Whether this tag marks a high-priority unit.
    #[inline]
    pub fn is_high(self) -> bool {
        matches!(self, Importance::High)
    }
}

/// A grouping of topics within a subject.
///
/// The sequence number doubles as the allocation priority key (lower
/// schedules earlier) and as the grouping key in rendered output. It is
/// assumed unique within a subject; the planner does not enforce this.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Unit {
    /// Sequence number within the subject (1-based by convention).
    pub unit_no: u32,
    /// Unit title.
    pub title: String,
    /// Importance tag.
    pub importance: Importance,
    /// Minimum total study hours for this unit.
    /// `None` = the planner applies its default budget.
    #[serde(default)]
    pub minimum_hours: Option<u32>,
    /// Self-study topic names, scheduled separately from graded topics.
    #[serde(default)]
    pub self_study: Vec<String>,
    /// Graded topics owned by this unit.
    #[serde(default)]
    pub topics: Vec<Topic>,
}

impl Unit {
    /// Creates a new unit with the given sequence number and title.
    pub fn new(unit_no: u32, title: impl Into<String>) -> Self {
        Self {
            unit_no,
            title: title.into(),
            importance: Importance::Low,
            minimum_hours: None,
            self_study: Vec::new(),
            topics: Vec::new(),
        }
    }

    /// Sets the importance tag.
    pub fn with_importance(mut self, importance: Importance) -> Self {
        self.importance = importance;
        self
    }

    /// Sets the minimum total study hours.
    pub fn with_minimum_hours(mut self, hours: u32) -> Self {
        self.minimum_hours = Some(hours);
        self
    }

    /// Adds a topic.
    pub fn with_topic(mut self, topic: Topic) -> Self {
        self.topics.push(topic);
        self
    }

    /// Adds a self-study entry.
    pub fn with_self_study(mut self, entry: impl Into<String>) -> Self {
        self.self_study.push(entry.into());
        self
    }

    /// Number of graded topics.
    pub fn topic_count(&self) -> usize {
        self.topics.len()
    }

    /// Whether this unit has any graded topics.
    pub fn has_topics(&self) -> bool {
        !self.topics.is_empty()
    }
}

/// A course.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Subject {
    /// Course code (e.g. `"CS301"`).
    pub code: String,
    /// Display name.
    pub name: String,
    /// Credit count.
    #[serde(default)]
    pub credits: u32,
    /// Exam-weight breakdown (component name → percentage).
    /// Informational only; the planner never reads it.
    #[serde(default)]
    pub exam_weightage: HashMap<String, f64>,
    /// Scales estimated hours for every topic in this subject.
    /// `None` = the config-level multiplier applies.
    #[serde(default)]
    pub difficulty_multiplier: Option<f64>,
    /// Ordered units owned by this subject.
    #[serde(default)]
    pub units: Vec<Unit>,
}

impl Subject {
    /// Creates a new subject with the given code and display name.
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits: 0,
            exam_weightage: HashMap::new(),
            difficulty_multiplier: None,
            units: Vec::new(),
        }
    }

    /// Sets the credit count.
    pub fn with_credits(mut self, credits: u32) -> Self {
        self.credits = credits;
        self
    }

    /// Sets an exam-weight component.
    pub fn with_exam_weight(mut self, component: impl Into<String>, percentage: f64) -> Self {
        self.exam_weightage.insert(component.into(), percentage);
        self
    }

    /// Sets a subject-specific difficulty multiplier, overriding the
    /// config-level one.
    pub fn with_difficulty(mut self, multiplier: f64) -> Self {
        self.difficulty_multiplier = Some(multiplier);
        self
    }

    /// Adds a unit.
    pub fn with_unit(mut self, unit: Unit) -> Self {
        self.units.push(unit);
        self
    }

    /// Total graded topic count across all units.
    pub fn topic_count(&self) -> usize {
        self.units.iter().map(Unit::topic_count).sum()
    }
}
