//! Exhaustive depth-first search with undo.
//!
//! Slots are visited in request order and candidates in catalog order, so the
//! output is the lexicographic enumeration of every conflict-free selection.
//! This is the reference strategy the others are checked against.
//!
//! Recursion depth equals the number of requested slots.

use crate::conflict::conflicts_with_any;
use crate::evaluation::{sort_schedules, Priority};
use crate::model::Offering;
use crate::schedule::Schedule;

use super::candidate_slots;

/// Returns every conflict-free schedule for `desired`, sorted by `priority`.
pub fn generate<'a, S: AsRef<str>>(
    offerings: &'a [Offering],
    desired: &[S],
    priority: Priority,
) -> Vec<Schedule<'a>> {
    let Some(slots) = candidate_slots(offerings, desired) else {
        return Vec::new();
    };

    let mut solutions = Vec::new();
    let mut current = Vec::with_capacity(slots.len());
    backtrack(&slots, 0, &mut current, &mut solutions);

    log::debug!("backtracking: {} schedules", solutions.len());
    sort_schedules(solutions, priority)
}

fn backtrack<'a>(
    slots: &[Vec<&'a Offering>],
    index: usize,
    current: &mut Vec<&'a Offering>,
    solutions: &mut Vec<Schedule<'a>>,
) {
    if index == slots.len() {
        solutions.push(Schedule::new(current.clone()));
        return;
    }

    for &option in &slots[index] {
        if conflicts_with_any(current, option) {
            continue;
        }
        current.push(option);
        backtrack(slots, index + 1, current, solutions);
        current.pop();
    }
}
