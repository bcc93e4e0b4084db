//! Comparative quality score for a batch of schedules.
//!
//! ```text
//! quality    = 0.6 × min(10 × count, 100) + 0.4 × mean(dispersion)
//! dispersion = max(0, 100 − 20 × σ(sessions per weekday))
//! ```
//!
//! σ is the population standard deviation over all seven weekdays. The score
//! rewards strategies that return more alternatives and schedules whose load
//! is spread evenly through the week. It says nothing about correctness.

use crate::model::Weekday;
use crate::schedule::Schedule;

const VARIETY_WEIGHT: f64 = 0.6;
const DISPERSION_WEIGHT: f64 = 0.4;

/// Scores a batch of schedules in `[0, 100]`; an empty batch scores 0.
pub fn quality_score(solutions: &[Schedule<'_>]) -> f64 {
    if solutions.is_empty() {
        return 0.0;
    }

    let variety = (solutions.len() as f64 * 10.0).min(100.0);
    let mean_dispersion =
        solutions.iter().map(dispersion).sum::<f64>() / solutions.len() as f64;

    VARIETY_WEIGHT * variety + DISPERSION_WEIGHT * mean_dispersion
}

/// Scores how evenly one schedule spreads its sessions over the week.
pub fn dispersion(schedule: &Schedule<'_>) -> f64 {
    if schedule.is_empty() {
        return 0.0;
    }

    let mut per_day = [0u32; Weekday::ALL.len()];
    for interval in schedule.intervals() {
        per_day[interval.day().index()] += 1;
    }

    let n = per_day.len() as f64;
    let mean = per_day.iter().map(|&c| f64::from(c)).sum::<f64>() / n;
    let variance = per_day
        .iter()
        .map(|&c| (f64::from(c) - mean).powi(2))
        .sum::<f64>()
        / n;

    (100.0 - 20.0 * variance.sqrt()).max(0.0)
}
