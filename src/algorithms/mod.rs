//! Schedule generation strategies.
//!
//! Every strategy shares one contract:
//!
//! 1. Each requested subject name becomes a *slot*; repeated names are
//!    separate slots that must be filled by distinct, compatible offerings.
//! 2. A slot's candidates are the offerings whose subject matches exactly,
//!    in catalog order.
//! 3. If any slot has no candidates, or nothing is requested, the result is
//!    empty.
//! 4. Every returned schedule fills each slot once and is conflict-free; the
//!    list is sorted by the requested [`Priority`].
//!
//! | Strategy | Module | Complete |
//! |----------|--------|----------|
//! | Backtracking | [`backtracking`] | yes |
//! | Divide and conquer | [`divide_conquer`] | yes |
//! | Greedy | [`greedy`] | no, at most three schedules |
//! | Dynamic programming | [`dynamic`] | yes |

pub mod backtracking;
pub mod divide_conquer;
pub mod dynamic;
pub mod error;
pub mod greedy;

#[cfg(test)]
mod tests;

use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

use crate::evaluation::Priority;
use crate::model::{ModelError, Offering};
use crate::schedule::Schedule;

pub use error::SolverError;

/// Selectable generation strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Strategy {
    Backtracking,
    DivideAndConquer,
    Greedy,
    DynamicProgramming,
}

impl Strategy {
    pub const ALL: [Strategy; 4] = [
        Strategy::Backtracking,
        Strategy::DivideAndConquer,
        Strategy::Greedy,
        Strategy::DynamicProgramming,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Strategy::Backtracking => "backtracking",
            Strategy::DivideAndConquer => "divide-and-conquer",
            Strategy::Greedy => "greedy",
            Strategy::DynamicProgramming => "dynamic-programming",
        }
    }

    pub const fn description(self) -> &'static str {
        match self {
            Strategy::Backtracking => "Exhaustive depth-first search with pruning",
            Strategy::DivideAndConquer => "Split the request, solve halves, merge compatible pairs",
            Strategy::Greedy => "Three single-pass heuristics, fast but incomplete",
            Strategy::DynamicProgramming => "Depth-first search with memoized suffixes",
        }
    }

    /// Whether the strategy always returns every valid schedule.
    pub const fn is_complete(self) -> bool {
        !matches!(self, Strategy::Greedy)
    }

    pub fn generate<'a, S: AsRef<str>>(
        self,
        offerings: &'a [Offering],
        desired: &[S],
        priority: Priority,
    ) -> Vec<Schedule<'a>> {
        match self {
            Strategy::Backtracking => backtracking::generate(offerings, desired, priority),
            Strategy::DivideAndConquer => divide_conquer::generate(offerings, desired, priority),
            Strategy::Greedy => greedy::generate(offerings, desired, priority),
            Strategy::DynamicProgramming => dynamic::generate(offerings, desired, priority),
        }
    }
}

impl FromStr for Strategy {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', ' '], "-").as_str() {
            "backtracking" => Ok(Strategy::Backtracking),
            "divide-and-conquer" | "divide-conquer" => Ok(Strategy::DivideAndConquer),
            "greedy" => Ok(Strategy::Greedy),
            "dynamic-programming" | "dynamic" | "dp" => Ok(Strategy::DynamicProgramming),
            _ => Err(ModelError::UnknownStrategy(s.to_string())),
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Groups the catalog into one candidate list per requested slot.
///
/// Returns `None` when nothing is requested or when a requested subject has
/// no offering at all.
pub fn candidate_slots<'a, S: AsRef<str>>(
    offerings: &'a [Offering],
    desired: &[S],
) -> Option<Vec<Vec<&'a Offering>>> {
    if desired.is_empty() {
        log::debug!("no subjects requested");
        return None;
    }

    let wanted: HashSet<&str> = desired.iter().map(|s| s.as_ref()).collect();
    let relevant: Vec<&'a Offering> = offerings
        .iter()
        .filter(|o| wanted.contains(o.subject()))
        .collect();

    let mut slots = Vec::with_capacity(desired.len());
    for subject in desired {
        let subject = subject.as_ref();
        let options: Vec<&'a Offering> = relevant
            .iter()
            .copied()
            .filter(|o| o.subject() == subject)
            .collect();
        if options.is_empty() {
            log::warn!("no offerings for subject {subject:?}");
            return None;
        }
        slots.push(options);
    }
    Some(slots)
}
