//! Multi-heuristic greedy construction.
//!
//! Three independent single-pass heuristics each try to build one schedule
//! without ever revisiting a choice:
//!
//! - **Earliest start**: per slot, the compatible candidate whose first
//!   session starts earliest.
//! - **Fewest sessions**: per slot, the compatible candidate with the fewest
//!   weekly sessions.
//! - **Least potential conflicts**: slots with the fewest candidates first;
//!   per slot, the compatible candidate overlapping the fewest candidates of
//!   the other requested subjects.
//!
//! A heuristic that reaches a slot with no compatible candidate contributes
//! nothing. The surviving schedules are deduplicated, so at most three are
//! returned. Every result is a valid schedule, but the search is incomplete:
//! an empty result does not prove that no schedule exists.
//!
//! Ties are always broken by catalog order, so the output is deterministic.

use std::collections::HashMap;

use crate::conflict::{conflicts_with_any, ConflictGraph};
use crate::evaluation::{sort_schedules, Priority};
use crate::model::Offering;
use crate::schedule::Schedule;

use super::candidate_slots;

/// Single-pass construction rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Heuristic {
    EarliestStart,
    FewestSessions,
    LeastConflicts,
}

impl Heuristic {
    pub const ALL: [Heuristic; 3] = [
        Heuristic::EarliestStart,
        Heuristic::FewestSessions,
        Heuristic::LeastConflicts,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Heuristic::EarliestStart => "earliest-start",
            Heuristic::FewestSessions => "fewest-sessions",
            Heuristic::LeastConflicts => "least-conflicts",
        }
    }
}

pub fn generate<'a, S: AsRef<str>>(
    offerings: &'a [Offering],
    desired: &[S],
    priority: Priority,
) -> Vec<Schedule<'a>> {
    let Some(slots) = candidate_slots(offerings, desired) else {
        return Vec::new();
    };

    let mut solutions: Vec<Schedule<'a>> = Vec::with_capacity(Heuristic::ALL.len());
    for heuristic in Heuristic::ALL {
        match construct(&slots, heuristic) {
            Some(schedule) if !solutions.contains(&schedule) => solutions.push(schedule),
            Some(_) => {}
            None => log::trace!("greedy: {} found no complete schedule", heuristic.name()),
        }
    }

    log::debug!("greedy: {} schedules", solutions.len());
    sort_schedules(solutions, priority)
}

/// Runs one heuristic over the candidate slots.
pub fn construct<'a>(slots: &[Vec<&'a Offering>], heuristic: Heuristic) -> Option<Schedule<'a>> {
    match heuristic {
        Heuristic::EarliestStart => in_request_order(slots, |options, chosen| {
            compatible_options(options, chosen)
                .min_by_key(|o| o.earliest_start().unwrap_or(u32::MAX))
        }),
        Heuristic::FewestSessions => in_request_order(slots, |options, chosen| {
            compatible_options(options, chosen).min_by_key(|o| o.session_count())
        }),
        Heuristic::LeastConflicts => least_conflicts(slots),
    }
}

fn compatible_options<'a, 'c>(
    options: &'c [&'a Offering],
    chosen: &'c [&'a Offering],
) -> impl Iterator<Item = &'a Offering> + 'c {
    options
        .iter()
        .copied()
        .filter(move |&o| !conflicts_with_any(chosen, o))
}

fn in_request_order<'a, F>(slots: &[Vec<&'a Offering>], mut pick: F) -> Option<Schedule<'a>>
where
    F: FnMut(&[&'a Offering], &[&'a Offering]) -> Option<&'a Offering>,
{
    let mut chosen = Vec::with_capacity(slots.len());
    for options in slots {
        let best = pick(options.as_slice(), chosen.as_slice())?;
        chosen.push(best);
    }
    Some(Schedule::new(chosen))
}

fn least_conflicts<'a>(slots: &[Vec<&'a Offering>]) -> Option<Schedule<'a>> {
    let graph = ConflictGraph::build(slots);

    let mut subject_weights: HashMap<&str, usize> = HashMap::new();
    for options in slots {
        if let Some(first) = options.first() {
            *subject_weights.entry(first.subject()).or_default() += 1;
        }
    }

    // Stable: slots with equal candidate counts keep request order.
    let mut order: Vec<&Vec<&'a Offering>> = slots.iter().collect();
    order.sort_by_key(|options| options.len());

    let mut chosen: Vec<&'a Offering> = Vec::with_capacity(slots.len());
    for options in order {
        let best = compatible_options(options, &chosen)
            .min_by_key(|o| graph.potential_conflicts(o, &subject_weights))?;
        chosen.push(best);
    }
    Some(Schedule::new(chosen))
}
