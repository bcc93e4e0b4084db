//! Reproducible random catalogs for benchmarks and property tests.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::model::{Offering, TimeInterval, Weekday, MINUTES_PER_DAY};

/// Shape of a synthetic catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    /// Number of distinct subjects, named `Subject-00`, `Subject-01`, ...
    pub subjects: usize,
    /// Groups generated for every subject.
    pub groups_per_subject: usize,
    /// Weekly sessions per group, each on a different day.
    pub sessions_per_group: usize,
    /// Days sessions may fall on.
    pub days: Vec<Weekday>,
    /// Earliest session start, in minutes since midnight.
    pub day_start: u32,
    /// Latest session end, in minutes since midnight.
    pub day_end: u32,
    /// Length of every session in minutes.
    pub session_length: u32,
    /// Session starts are multiples of this many minutes after `day_start`.
    pub granularity: u32,
}

impl CatalogConfig {
    /// Number of distinct start times a session can take.
    pub fn start_slots(&self) -> u32 {
        let latest = self
            .day_end
            .min(MINUTES_PER_DAY)
            .saturating_sub(self.session_length)
            .max(self.day_start);
        (latest - self.day_start) / self.granularity.max(1) + 1
    }

    /// Subject names in generation order.
    pub fn subject_names(&self) -> Vec<String> {
        (0..self.subjects).map(subject_name).collect()
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            subjects: 6,
            groups_per_subject: 4,
            sessions_per_group: 2,
            days: Weekday::ALL[..5].to_vec(),
            day_start: 8 * 60,
            day_end: 20 * 60,
            session_length: 120,
            granularity: 60,
        }
    }
}

fn subject_name(index: usize) -> String {
    format!("Subject-{index:02}")
}

/// Builds a catalog of `config.subjects × config.groups_per_subject` offerings.
///
/// The same `seed` always yields the same catalog. Ids have the form
/// `Subject-03-g2`.
pub fn synthetic(config: &CatalogConfig, seed: u64) -> Vec<Offering> {
    let mut rng = StdRng::seed_from_u64(seed);
    let granularity = config.granularity.max(1);
    let start_slots = config.start_slots();
    let sessions = config.sessions_per_group.min(config.days.len());

    let mut offerings = Vec::with_capacity(config.subjects * config.groups_per_subject);
    for s in 0..config.subjects {
        let subject = subject_name(s);
        for g in 1..=config.groups_per_subject {
            let mut days: Vec<Weekday> = config
                .days
                .choose_multiple(&mut rng, sessions)
                .copied()
                .collect();
            days.sort();

            let mut builder = Offering::builder(subject.as_str(), format!("g{g}"))
                .id(format!("{subject}-g{g}"))
                .year(1 + (s % 4) as i32);
            for day in days {
                let start = config.day_start + rng.gen_range(0..start_slots) * granularity;
                let end = (start + config.session_length).min(MINUTES_PER_DAY);
                match TimeInterval::new(day, start, end) {
                    Ok(interval) => builder = builder.interval(interval),
                    Err(e) => log::warn!("skipping synthetic session for {subject}-g{g}: {e}"),
                }
            }
            offerings.push(builder.build());
        }
    }

    log::debug!(
        "synthetic catalog: {} offerings over {} subjects (seed {seed})",
        offerings.len(),
        config.subjects
    );
    offerings
}
