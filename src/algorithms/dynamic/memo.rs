//! Per-call memo table for the dynamic-programming search.

use std::collections::HashMap;
use std::rc::Rc;

use crate::model::Offering;

/// Suffix completions: picks for slots `index..n`, in slot order.
pub(crate) type Completions<'a> = Rc<Vec<Vec<&'a Offering>>>;

/// Memo key: slot index plus the sorted ids of every offering chosen so far.
///
/// The key holds the whole prefix, not a summary of the time it occupies,
/// so two paths only share an entry when they chose the same offerings.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) struct MemoKey<'a> {
    index: usize,
    prefix: Vec<&'a str>,
}

impl<'a> MemoKey<'a> {
    pub(crate) fn new(index: usize, prefix: &[&'a Offering]) -> Self {
        let mut ids: Vec<&'a str> = prefix.iter().map(|&o| o.id()).collect();
        ids.sort_unstable();
        Self { index, prefix: ids }
    }
}

/// Memo owned by a single `generate` call.
#[derive(Debug, Default)]
pub(crate) struct Memo<'a> {
    table: HashMap<MemoKey<'a>, Completions<'a>>,
    hits: usize,
    misses: usize,
}

impl<'a> Memo<'a> {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn get(&mut self, key: &MemoKey<'a>) -> Option<Completions<'a>> {
        match self.table.get(key) {
            Some(hit) => {
                self.hits += 1;
                Some(Rc::clone(hit))
            }
            None => {
                self.misses += 1;
                None
            }
        }
    }

    pub(crate) fn insert(&mut self, key: MemoKey<'a>, completions: Completions<'a>) {
        self.table.insert(key, completions);
    }

    pub(crate) fn len(&self) -> usize {
        self.table.len()
    }

    pub(crate) fn hits(&self) -> usize {
        self.hits
    }

    pub(crate) fn misses(&self) -> usize {
        self.misses
    }
}
