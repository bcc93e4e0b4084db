//! course_planner - conflict-free course timetable generation
//!
//! Given a catalog of course offerings (subject groups with weekly sessions)
//! and a list of subjects a student wants, enumerates every selection of one
//! group per subject whose sessions never overlap. Four interchangeable
//! strategies share one contract, results can be ranked by compactness, and a
//! benchmark harness compares the strategies side by side.
//!
//! ```
//! use course_planner::{Offering, Priority, Strategy, TimeInterval, Weekday};
//!
//! let catalog = vec![
//!     Offering::new("m-a", "Math", "A", 1, vec![TimeInterval::parse("Lunes", "8:00", "10:00").unwrap()]),
//!     Offering::new("m-b", "Math", "B", 1, vec![TimeInterval::new(Weekday::Tuesday, 480, 600).unwrap()]),
//!     Offering::new("p-a", "Physics", "A", 1, vec![TimeInterval::parse("Mon", "9:00", "11:00").unwrap()]),
//! ];
//!
//! let schedules = Strategy::Backtracking.generate(&catalog, &["Math", "Physics"], Priority::FewerDays);
//! assert_eq!(schedules.len(), 1);
//! assert_eq!(schedules[0].ids(), vec!["m-b", "p-a"]);
//! ```

pub mod algorithms;
pub mod benchmark;
pub mod catalog;
pub mod conflict;
pub mod evaluation;
pub mod model;
pub mod schedule;
pub mod units;

pub use algorithms::Strategy;
pub use evaluation::Priority;
pub use model::{Offering, TimeInterval, Weekday};
pub use schedule::Schedule;

/// Identifier type used for offerings and benchmark runs.
pub type Id = String;

/// Generates a new unique identifier (UUID v4).
pub fn generate_id() -> Id {
    uuid::Uuid::new_v4().to_string()
}
