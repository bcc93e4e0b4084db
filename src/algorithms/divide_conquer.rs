//! Divide-and-conquer enumeration.
//!
//! 1. **Divide**: split the slots at their midpoint.
//! 2. **Conquer**: solve each half independently (one slot → its candidates).
//! 3. **Combine**: join every left/right pair whose offerings do not overlap.
//!
//! Conflicts only ever involve two offerings, so checking the cross product
//! at merge time is enough: each half is already internally conflict-free.
//! The result is the same set of schedules the backtracking search finds.

use crate::conflict::compatible;
use crate::evaluation::{sort_schedules, Priority};
use crate::model::Offering;
use crate::schedule::Schedule;

use super::candidate_slots;

pub fn generate<'a, S: AsRef<str>>(
    offerings: &'a [Offering],
    desired: &[S],
    priority: Priority,
) -> Vec<Schedule<'a>> {
    let Some(slots) = candidate_slots(offerings, desired) else {
        return Vec::new();
    };

    let solutions: Vec<Schedule<'a>> = solve(&slots).into_iter().map(Schedule::new).collect();

    log::debug!("divide and conquer: {} schedules", solutions.len());
    sort_schedules(solutions, priority)
}

fn solve<'a>(slots: &[Vec<&'a Offering>]) -> Vec<Vec<&'a Offering>> {
    match slots {
        [] => Vec::new(),
        [only] => only.iter().map(|&offering| vec![offering]).collect(),
        _ => {
            let (left, right) = slots.split_at(slots.len() / 2);
            let left = solve(left);
            if left.is_empty() {
                return Vec::new();
            }
            let right = solve(right);
            combine(&left, &right)
        }
    }
}

fn combine<'a>(left: &[Vec<&'a Offering>], right: &[Vec<&'a Offering>]) -> Vec<Vec<&'a Offering>> {
    let mut combined = Vec::new();
    for l in left {
        for r in right {
            if compatible(l, r) {
                let mut merged = Vec::with_capacity(l.len() + r.len());
                merged.extend_from_slice(l);
                merged.extend_from_slice(r);
                combined.push(merged);
            }
        }
    }
    combined
}
