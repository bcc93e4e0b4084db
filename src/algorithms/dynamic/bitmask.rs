//! Table-driven variant of the dynamic-programming search.
//!
//! A partial selection is encoded as a `u128`: slot `i` owns bits
//! `[i * w, (i + 1) * w)` and stores the index of its chosen candidate in
//! binary. The width `w` is derived from the widest slot:
//!
//! ```text
//! w = max(1, ceil(log2(max candidates per slot)))
//! ```
//!
//! The reachable-state table is rebuilt once per slot. Requests whose encoding
//! would need more than 128 bits are rejected with
//! [`SolverError::SelectionTooWide`].

use std::collections::BTreeMap;

use crate::algorithms::candidate_slots;
use crate::algorithms::error::SolverError;
use crate::conflict::conflicts_with_any;
use crate::evaluation::{sort_schedules, Priority};
use crate::model::Offering;
use crate::schedule::Schedule;

const MASK_BITS: u32 = u128::BITS;

/// Returns every conflict-free schedule for `desired`, sorted by `priority`.
///
/// Produces the same set of schedules as [`super::generate`], in mask order
/// before sorting.
pub fn generate_bitmask<'a, S: AsRef<str>>(
    offerings: &'a [Offering],
    desired: &[S],
    priority: Priority,
) -> Result<Vec<Schedule<'a>>, SolverError> {
    let Some(slots) = candidate_slots(offerings, desired) else {
        return Ok(Vec::new());
    };

    let widest = slots.iter().map(Vec::len).max().unwrap_or(1);
    let width = bits_for(widest);
    check_width(width, slots.len())?;

    let mut table: BTreeMap<u128, Vec<&'a Offering>> = BTreeMap::new();
    table.insert(0, Vec::new());

    for (slot, options) in slots.iter().enumerate() {
        let shift = slot as u32 * width;
        let mut next = BTreeMap::new();
        for (mask, picks) in &table {
            for (index, &option) in options.iter().enumerate() {
                if conflicts_with_any(picks, option) {
                    continue;
                }
                let mut extended = Vec::with_capacity(picks.len() + 1);
                extended.extend_from_slice(picks);
                extended.push(option);
                next.insert(mask | ((index as u128) << shift), extended);
            }
        }
        log::trace!("bitmask: slot {slot} reaches {} states", next.len());
        table = next;
    }

    let solutions: Vec<Schedule<'a>> = table
        .into_values()
        .filter(|picks| picks.len() == slots.len())
        .map(Schedule::new)
        .collect();

    log::debug!(
        "bitmask dynamic programming: {} schedules ({width} bits per slot)",
        solutions.len()
    );
    Ok(sort_schedules(solutions, priority))
}

/// Bits needed to store any index below `candidates`, at least one.
fn bits_for(candidates: usize) -> u32 {
    let highest = candidates.saturating_sub(1);
    (usize::BITS - highest.leading_zeros()).max(1)
}

fn check_width(bits_per_slot: u32, slots: usize) -> Result<(), SolverError> {
    let slots = u32::try_from(slots).unwrap_or(u32::MAX);
    let required = bits_per_slot.saturating_mul(slots);
    if required > MASK_BITS {
        return Err(SolverError::SelectionTooWide {
            required_bits: required,
            bits_per_slot,
            available_bits: MASK_BITS,
        });
    }
    Ok(())
}
