//! Schedule ranking metrics and priority-based sorting.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Days used | Distinct weekdays with at least one session |
//! | Total gap minutes | Per day, sum of positive idle time between consecutive sessions |
//!
//! All functions are pure: they never mutate the schedules they inspect.

use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use qtty::{Hour, Minute, Quantity};

use crate::model::{ModelError, TimeInterval, Weekday};
use crate::schedule::Schedule;
use crate::units::minutes;

/// Post-generation sort key.
///
/// A priority never removes candidates; it only reorders them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Priority {
    /// Keep generation order.
    #[default]
    None,
    /// Fewest distinct class days first.
    FewerDays,
    /// Least idle time between sessions first.
    LessGaps,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::None, Priority::FewerDays, Priority::LessGaps];

    /// Parseable identifier, as accepted by `FromStr`.
    pub const fn name(self) -> &'static str {
        match self {
            Priority::None => "none",
            Priority::FewerDays => "fewer-days",
            Priority::LessGaps => "less-gaps",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Priority::None => "No ordering",
            Priority::FewerDays => "Fewer class days",
            Priority::LessGaps => "Less idle time between classes",
        }
    }
}

impl FromStr for Priority {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "none" => Ok(Priority::None),
            "fewer-days" => Ok(Priority::FewerDays),
            "less-gaps" => Ok(Priority::LessGaps),
            _ => Err(ModelError::UnknownPriority(s.to_string())),
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Ranking metrics of a single schedule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ScheduleMetrics {
    /// Distinct weekdays with at least one session.
    pub days_used: usize,
    /// Sum of idle minutes between consecutive sessions of the same day.
    pub total_gap_minutes: u32,
}

impl ScheduleMetrics {
    pub fn idle_time(&self) -> Quantity<Minute> {
        minutes(self.total_gap_minutes)
    }

    pub fn idle_hours(&self) -> Quantity<Hour> {
        self.idle_time().to()
    }
}

impl Display for ScheduleMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "days: {} | idle: {}",
            self.days_used,
            format_minutes(self.total_gap_minutes)
        )
    }
}

/// Counts distinct weekdays across every session of the schedule.
pub fn days_used(schedule: &Schedule<'_>) -> usize {
    let mut seen = [false; 7];
    for interval in schedule.intervals() {
        seen[interval.day().index()] = true;
    }
    seen.iter().filter(|&&used| used).count()
}

/// Sums the idle minutes between consecutive sessions of each day.
///
/// Sessions are sorted by start within a day; back-to-back or overlapping
/// sessions contribute nothing.
pub fn total_gap_minutes(schedule: &Schedule<'_>) -> u32 {
    let mut by_day: BTreeMap<Weekday, Vec<&TimeInterval>> = BTreeMap::new();
    for interval in schedule.intervals() {
        by_day.entry(interval.day()).or_default().push(interval);
    }

    by_day
        .into_values()
        .map(|mut sessions| {
            sessions.sort_by_key(|s| s.start());
            sessions
                .windows(2)
                .map(|pair| pair[1].start().saturating_sub(pair[0].end()))
                .sum::<u32>()
        })
        .sum()
}

pub fn evaluate(schedule: &Schedule<'_>) -> ScheduleMetrics {
    ScheduleMetrics {
        days_used: days_used(schedule),
        total_gap_minutes: total_gap_minutes(schedule),
    }
}

/// Stable ascending sort of `schedules` by the metric `priority` selects.
///
/// [`Priority::None`] and empty input are returned unchanged.
pub fn sort_schedules<'a>(mut schedules: Vec<Schedule<'a>>, priority: Priority) -> Vec<Schedule<'a>> {
    match priority {
        Priority::None => {}
        Priority::FewerDays => schedules.sort_by_cached_key(days_used),
        Priority::LessGaps => schedules.sort_by_cached_key(total_gap_minutes),
    }
    schedules
}

/// Formats a minute count as `0min`, `45min`, `2h` or `2h 30min`.
pub fn format_minutes(total: u32) -> String {
    let (hours, mins) = (total / 60, total % 60);
    match (hours, mins) {
        (0, m) => format!("{m}min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}min"),
    }
}
