//! Memoized dynamic-programming enumeration.
//!
//! # State
//!
//! `(slot index, set of offerings chosen so far)` → every way to complete the
//! remaining slots. Completions are shared through [`Rc`] so a memo hit costs
//! one reference-count increment.
//!
//! # Known limitation
//!
//! The state includes the full chosen prefix rather than a summary such as
//! the occupied time slots. Two paths therefore only share a memo entry when
//! they picked exactly the same offerings, which in practice happens only when
//! a subject is requested more than once. The search is complete and correct,
//! but the memo rarely saves work. A coarser state (e.g. occupied slots per
//! weekday) would turn this into a real optimal-substructure reduction; that
//! would change the algorithm and is left out on purpose.
//!
//! # Lifetime of the memo
//!
//! The memo is a local value of each [`generate`] call and is dropped on
//! return, so no entry ever leaks between requests.
//!
//! Recursion depth equals the number of requested slots.
//!
//! See [`bitmask`] for the table-driven variant.

pub mod bitmask;
mod memo;

use std::rc::Rc;

use crate::conflict::conflicts_with_any;
use crate::evaluation::{sort_schedules, Priority};
use crate::model::Offering;
use crate::schedule::Schedule;

use super::candidate_slots;
use memo::{Completions, Memo, MemoKey};

pub use bitmask::generate_bitmask;

/// Returns every conflict-free schedule for `desired`, sorted by `priority`.
pub fn generate<'a, S: AsRef<str>>(
    offerings: &'a [Offering],
    desired: &[S],
    priority: Priority,
) -> Vec<Schedule<'a>> {
    let Some(slots) = candidate_slots(offerings, desired) else {
        return Vec::new();
    };

    let mut memo = Memo::new();
    let mut prefix = Vec::with_capacity(slots.len());
    let completions = solve(&slots, 0, &mut prefix, &mut memo);

    log::debug!(
        "dynamic programming: {} schedules, memo {} entries ({} hits / {} misses)",
        completions.len(),
        memo.len(),
        memo.hits(),
        memo.misses()
    );

    let solutions = completions
        .iter()
        .map(|picks| Schedule::new(picks.clone()))
        .collect();
    sort_schedules(solutions, priority)
}

fn solve<'a>(
    slots: &[Vec<&'a Offering>],
    index: usize,
    prefix: &mut Vec<&'a Offering>,
    memo: &mut Memo<'a>,
) -> Completions<'a> {
    if index == slots.len() {
        return Rc::new(vec![Vec::new()]);
    }

    let key = MemoKey::new(index, prefix);
    if let Some(cached) = memo.get(&key) {
        return cached;
    }

    let mut completions = Vec::new();
    for &option in &slots[index] {
        if conflicts_with_any(prefix, option) {
            continue;
        }
        prefix.push(option);
        let tails = solve(slots, index + 1, prefix, memo);
        prefix.pop();

        for tail in tails.iter() {
            let mut picks = Vec::with_capacity(tail.len() + 1);
            picks.push(option);
            picks.extend_from_slice(tail);
            completions.push(picks);
        }
    }

    let completions = Rc::new(completions);
    memo.insert(key, Rc::clone(&completions));
    completions
}
