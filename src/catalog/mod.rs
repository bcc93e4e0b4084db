//! Catalog queries and synthetic catalog generation.

mod synthetic;

pub use synthetic::{synthetic, CatalogConfig};

use std::collections::{BTreeMap, HashSet};

use crate::model::Offering;

/// Distinct subjects in the catalog, sorted by name, with their group counts.
pub fn subjects(offerings: &[Offering]) -> Vec<(&str, usize)> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for offering in offerings {
        *counts.entry(offering.subject()).or_default() += 1;
    }
    counts.into_iter().collect()
}

/// Requested subjects with no offering in the catalog, in request order.
///
/// Solvers return an empty list both for unknown subjects and for requests
/// with no compatible combination; this tells the two cases apart.
pub fn missing_subjects<'d, S: AsRef<str>>(offerings: &[Offering], desired: &'d [S]) -> Vec<&'d str> {
    let known: HashSet<&str> = offerings.iter().map(Offering::subject).collect();
    let mut missing: Vec<&'d str> = Vec::new();
    for subject in desired.iter().map(|s| s.as_ref()) {
        if !known.contains(subject) && !missing.contains(&subject) {
            missing.push(subject);
        }
    }
    missing
}
