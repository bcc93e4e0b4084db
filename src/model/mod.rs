//! Course data model: weekdays, time intervals and offerings.

mod error;
mod interval;
mod offering;
mod weekday;

pub use error::ModelError;
pub use interval::{format_clock, parse_clock, TimeInterval, MINUTES_PER_DAY};
pub use offering::{Offering, OfferingBuilder};
pub use weekday::Weekday;
