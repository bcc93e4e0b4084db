//! Day-of-week labels used by time intervals.

use std::fmt::Display;
use std::str::FromStr;

use super::error::ModelError;

/// Day of the week on which a session takes place.
///
/// Parsing is case-insensitive and accepts English and Spanish names as well
/// as their usual abbreviations, so `"MON"`, `"lunes"` and `"Lu"` all map to
/// [`Weekday::Monday`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// Zero-based position in the week (Monday = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn name(self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub const fn short_name(self) -> &'static str {
        match self {
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
            Weekday::Sunday => "Sun",
        }
    }
}

/// Lowercases and strips the accents found in Spanish day names.
fn fold(label: &str) -> String {
    label
        .trim()
        .to_lowercase()
        .chars()
        .map(|c| match c {
            'á' => 'a',
            'é' => 'e',
            'í' => 'i',
            'ó' => 'o',
            'ú' => 'u',
            other => other,
        })
        .collect()
}

impl FromStr for Weekday {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let day = match fold(s).as_str() {
            "monday" | "mon" | "mo" | "lunes" | "lun" | "lu" => Weekday::Monday,
            "tuesday" | "tue" | "tues" | "tu" | "martes" | "mar" | "ma" => Weekday::Tuesday,
            "wednesday" | "wed" | "we" | "miercoles" | "mie" | "mi" => Weekday::Wednesday,
            "thursday" | "thu" | "thur" | "thurs" | "th" | "jueves" | "jue" | "ju" => {
                Weekday::Thursday
            }
            "friday" | "fri" | "fr" | "viernes" | "vie" | "vi" => Weekday::Friday,
            "saturday" | "sat" | "sabado" | "sab" | "sa" => Weekday::Saturday,
            "sunday" | "sun" | "su" | "domingo" | "dom" | "do" => Weekday::Sunday,
            _ => return Err(ModelError::UnknownWeekday(s.to_string())),
        };
        Ok(day)
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.name())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
