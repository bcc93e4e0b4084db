use std::fmt::Display;
use std::hash::{Hash, Hasher};

use crate::conflict::conflicts_with_any;
use crate::model::{Offering, TimeInterval};


/// One selection of offerings, one per requested subject slot.
///
/// A `Schedule` borrows its offerings from the caller's catalog, so building
/// and returning thousands of them never copies course data.
///
/// # Equality
///
/// Two schedules are equal iff they contain the same offering ids, regardless
/// of order. Solutions from different strategies can therefore be compared as
/// sets even when the strategies visit subjects in a different order.
///
/// # Examples
///
/// ```
/// use course_planner::model::{Offering, TimeInterval, Weekday};
/// use course_planner::schedule::Schedule;
///
/// let mon = TimeInterval::new(Weekday::Monday, 480, 600).unwrap();
/// let tue = TimeInterval::new(Weekday::Tuesday, 480, 600).unwrap();
/// let math = Offering::new("m-a", "Math", "A", 1, vec![mon]);
/// let physics = Offering::new("p-c", "Physics", "C", 1, vec![tue]);
///
/// let a = Schedule::new(vec![&math, &physics]);
/// let b = Schedule::new(vec![&physics, &math]);
/// assert_eq!(a, b);
/// assert!(a.is_conflict_free());
/// ```
#[derive(Debug, Clone)]
pub struct Schedule<'a> {
    offerings: Vec<&'a Offering>,
}

impl<'a> Schedule<'a> {
    pub fn new(offerings: Vec<&'a Offering>) -> Self {
        Self { offerings }
    }

    pub fn len(&self) -> usize {
        self.offerings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offerings.is_empty()
    }

    pub fn offerings(&self) -> &[&'a Offering] {
        &self.offerings
    }

    pub fn iter(&self) -> impl Iterator<Item = &'a Offering> + '_ {
        self.offerings.iter().copied()
    }

    /// All sessions of all offerings in the schedule.
    pub fn intervals(&self) -> impl Iterator<Item = &'a TimeInterval> + '_ {
        self.offerings.iter().flat_map(|&o| o.intervals().iter())
    }

    /// Offering ids in sorted order; the identity of the schedule.
    pub fn ids(&self) -> Vec<&'a str> {
        let mut ids: Vec<&'a str> = self.offerings.iter().map(|&o| o.id()).collect();
        ids.sort_unstable();
        ids
    }

    pub fn contains(&self, id: &str) -> bool {
        self.offerings.iter().any(|o| o.id() == id)
    }

    /// Returns true if no two offerings in the schedule overlap.
    pub fn is_conflict_free(&self) -> bool {
        self.offerings
            .iter()
            .enumerate()
            .all(|(i, o)| !conflicts_with_any(&self.offerings[i + 1..], o))
    }

    pub fn into_offerings(self) -> Vec<&'a Offering> {
        self.offerings
    }
}

impl PartialEq for Schedule<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.ids() == other.ids()
    }
}

impl Eq for Schedule<'_> {}

impl Hash for Schedule<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.ids().hash(state);
    }
}

impl<'a> FromIterator<&'a Offering> for Schedule<'a> {
    fn from_iter<I: IntoIterator<Item = &'a Offering>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Display for Schedule<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for offering in &self.offerings {
            writeln!(f, "{offering}")?;
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Schedule<'_> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.offerings.iter())
    }
}
