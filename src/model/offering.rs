use std::fmt::Display;

use super::interval::TimeInterval;
use crate::{generate_id, Id};

/// One schedulable section ("group") of a subject.
///
/// Offerings are read-only once built: solvers only ever borrow them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Offering {
    id: Id,
    subject: String,
    group: String,
    #[cfg_attr(feature = "serde", serde(default))]
    year: i32,
    #[cfg_attr(feature = "serde", serde(alias = "schedules", default))]
    intervals: Vec<TimeInterval>,
}

impl Offering {
    pub fn new(
        id: impl Into<Id>,
        subject: impl Into<String>,
        group: impl Into<String>,
        year: i32,
        intervals: Vec<TimeInterval>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            group: group.into(),
            year,
            intervals,
        }
    }

    /// Starts an [`OfferingBuilder`] for `subject` / `group`.
    pub fn builder(subject: impl Into<String>, group: impl Into<String>) -> OfferingBuilder {
        OfferingBuilder {
            id: None,
            subject: subject.into(),
            group: group.into(),
            year: 0,
            intervals: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn group(&self) -> &str {
        &self.group
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn intervals(&self) -> &[TimeInterval] {
        &self.intervals
    }

    /// Number of weekly sessions.
    pub fn session_count(&self) -> usize {
        self.intervals.len()
    }

    /// Earliest start time across all sessions, `None` if there are none.
    pub fn earliest_start(&self) -> Option<u32> {
        self.intervals.iter().map(TimeInterval::start).min()
    }

    /// Returns true if any session of `self` overlaps any session of `other`.
    pub fn overlaps(&self, other: &Offering) -> bool {
        self.intervals
            .iter()
            .any(|a| other.intervals.iter().any(|b| a.overlaps(b)))
    }
}

impl Display for Offering {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({}): ", self.subject, self.group)?;
        for (i, interval) in self.intervals.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{interval}")?;
        }
        Ok(())
    }
}

/// Incremental constructor for [`Offering`]; assigns a generated id if none is set.
#[derive(Debug, Clone)]
pub struct OfferingBuilder {
    id: Option<Id>,
    subject: String,
    group: String,
    year: i32,
    intervals: Vec<TimeInterval>,
}

impl OfferingBuilder {
    pub fn id(mut self, id: impl Into<Id>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn year(mut self, year: i32) -> Self {
        self.year = year;
        self
    }

    pub fn interval(mut self, interval: TimeInterval) -> Self {
        self.intervals.push(interval);
        self
    }

    pub fn build(self) -> Offering {
        Offering {
            id: self.id.unwrap_or_else(generate_id),
            subject: self.subject,
            group: self.group,
            year: self.year,
            intervals: self.intervals,
        }
    }
}
