//! Day-scoped time range that a session occupies.

use std::fmt::Display;

use super::error::ModelError;
use super::weekday::Weekday;

/// Minutes in one day; interval ends may not exceed it.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Half-open range `[start, end)` on a single weekday, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeInterval {
    day: Weekday,
    start: u32,
    end: u32,
}

impl TimeInterval {
    /// Creates interval `[start, end)` on `day`.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::EmptyInterval`] if `start >= end` and
    /// [`ModelError::PastMidnight`] if `end` is beyond the end of the day.
    pub fn new(day: Weekday, start: u32, end: u32) -> Result<Self, ModelError> {
        if start >= end {
            return Err(ModelError::EmptyInterval { start, end });
        }
        if end > MINUTES_PER_DAY {
            return Err(ModelError::PastMidnight(end));
        }
        Ok(Self { day, start, end })
    }

    /// Builds an interval from textual day and `HH:MM` clock values.
    ///
    /// ```rust
    /// use course_planner::model::{TimeInterval, Weekday};
    ///
    /// let slot = TimeInterval::parse("Lunes", "08:00", "10:00").unwrap();
    /// assert_eq!(slot.day(), Weekday::Monday);
    /// assert_eq!(slot.start(), 480);
    /// assert_eq!(slot.end(), 600);
    /// ```
    pub fn parse(day: &str, start: &str, end: &str) -> Result<Self, ModelError> {
        Self::new(day.parse()?, parse_clock(start)?, parse_clock(end)?)
    }

    pub const fn day(&self) -> Weekday {
        self.day
    }

    pub const fn start(&self) -> u32 {
        self.start
    }

    pub const fn end(&self) -> u32 {
        self.end
    }

    pub const fn duration(&self) -> u32 {
        self.end - self.start
    }

    /// Returns true if both intervals fall on the same day and share time.
    ///
    /// Touching endpoints (`a.end == b.start`) do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.day == other.day && self.start < other.end && self.end > other.start
    }
}

/// Parses a 24h clock string (`"8:00"`, `"08:30"`, `"13.15"`) into minutes since midnight.
pub fn parse_clock(text: &str) -> Result<u32, ModelError> {
    let invalid = || ModelError::InvalidClock(text.to_string());
    let normalized = text.trim().replace('.', ":");
    let (hours, minutes) = normalized.split_once(':').ok_or_else(invalid)?;
    let digits = |part: &str| !part.is_empty() && part.bytes().all(|b| b.is_ascii_digit());
    if !digits(hours) || !digits(minutes) {
        return Err(invalid());
    }
    let hours: u32 = hours.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes.parse().map_err(|_| invalid())?;
    if minutes >= 60 || hours > 24 || (hours == 24 && minutes > 0) {
        return Err(invalid());
    }
    Ok(hours * 60 + minutes)
}

/// Formats minutes since midnight as `H:MM`.
pub fn format_clock(minutes: u32) -> String {
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

impl Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{}",
            self.day,
            format_clock(self.start),
            format_clock(self.end)
        )
    }
}

// =============================================================================
// TimeInterval Serde Support
// =============================================================================

#[cfg(feature = "serde")]
impl serde::Serialize for TimeInterval {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        use serde::ser::SerializeStruct;
        let mut s = serializer.serialize_struct("TimeInterval", 3)?;
        s.serialize_field("day", &self.day)?;
        s.serialize_field("start", &self.start)?;
        s.serialize_field("end", &self.end)?;
        s.end()
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for TimeInterval {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        struct Raw {
            day: Weekday,
            start: u32,
            end: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::new(raw.day, raw.start, raw.end).map_err(serde::de::Error::custom)
    }
}
