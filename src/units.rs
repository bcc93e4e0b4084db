//! Typed time quantities for metrics and benchmark timings.
//!
//! Interval bounds stay plain integer minutes so conflict checks are exact;
//! quantities are only used at the reporting edge, where unit conversions
//! (minutes to hours, milliseconds to seconds) are needed.

use std::time::Duration;

use qtty::{Millisecond, Minute, Quantity, Unit};

/// Wraps a whole number of minutes as a typed quantity.
#[inline]
pub fn minutes(value: u32) -> Quantity<Minute> {
    Quantity::new(f64::from(value))
}

/// Converts a measured wall-clock duration to milliseconds.
#[inline]
pub fn milliseconds(elapsed: Duration) -> Quantity<Millisecond> {
    Quantity::new(elapsed.as_secs_f64() * 1_000.0)
}

/// Converts a quantity to another unit of the same dimension.
///
/// # Example
///
/// ```
/// use qtty::{Hour, Minute, Quantity};
/// use course_planner::units::convert;
///
/// let idle = Quantity::<Minute>::new(90.0);
/// let hours: Quantity<Hour> = convert(idle);
/// assert!((hours.value() - 1.5).abs() < 1e-12);
/// ```
#[inline]
pub fn convert<From, To>(q: Quantity<From>) -> Quantity<To>
where
    From: Unit,
    To: Unit<Dim = From::Dim>,
{
    q.to::<To>()
}
