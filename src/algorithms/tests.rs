//! Cross-strategy test suite.

use super::*;
use crate::catalog::{synthetic, CatalogConfig};
use crate::conflict::compatible;
use crate::evaluation::{days_used, total_gap_minutes};
use crate::model::{TimeInterval, Weekday};
use std::collections::HashSet;

fn offering(id: &str, subject: &str, day: &str, start: &str, end: &str) -> Offering {
    Offering::new(
        id,
        subject,
        id,
        1,
        vec![TimeInterval::parse(day, start, end).unwrap()],
    )
}

/// Solutions as an order-independent set of sorted id lists.
fn as_set<'a>(schedules: &[Schedule<'a>]) -> HashSet<Vec<&'a str>> {
    schedules.iter().map(Schedule::ids).collect()
}

/// Exact output sequence, offering order included.
fn sequence<'a>(schedules: &[Schedule<'a>]) -> Vec<Vec<&'a str>> {
    schedules
        .iter()
        .map(|s| s.iter().map(|o| o.id()).collect())
        .collect()
}

fn all_strategies<'a>(
    catalog: &'a [Offering],
    desired: &[&str],
    priority: Priority,
) -> Vec<(Strategy, Vec<Schedule<'a>>)> {
    Strategy::ALL
        .iter()
        .map(|&s| (s, s.generate(catalog, desired, priority)))
        .collect()
}

#[cfg(test)]
mod strategy {
    use super::*;

    #[test]
    fn test_parse_names() {
        for s in Strategy::ALL {
            assert_eq!(s.name().parse::<Strategy>(), Ok(s));
        }
        assert_eq!("DP".parse::<Strategy>(), Ok(Strategy::DynamicProgramming));
        assert_eq!(
            "Divide_And_Conquer".parse::<Strategy>(),
            Ok(Strategy::DivideAndConquer)
        );
        assert_eq!(
            "simulated-annealing".parse::<Strategy>(),
            Err(ModelError::UnknownStrategy("simulated-annealing".into()))
        );
    }

    #[test]
    fn test_only_greedy_is_incomplete() {
        let incomplete: Vec<Strategy> = Strategy::ALL
            .into_iter()
            .filter(|s| !s.is_complete())
            .collect();
        assert_eq!(incomplete, vec![Strategy::Greedy]);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Strategy::DivideAndConquer.to_string(), "divide-and-conquer");
        assert!(!Strategy::Greedy.description().is_empty());
    }
}

#[cfg(test)]
mod slots {
    use super::*;

    #[test]
    fn test_one_slot_per_requested_name() {
        let catalog = vec![
            offering("m-a", "Math", "Mon", "8:00", "10:00"),
            offering("p-c", "Physics", "Tue", "8:00", "10:00"),
            offering("m-b", "Math", "Mon", "9:00", "11:00"),
        ];
        let slots = candidate_slots(&catalog, &["Math", "Physics", "Math"]).unwrap();
        assert_eq!(slots.len(), 3);
        let ids: Vec<&str> = slots[0].iter().map(|o| o.id()).collect();
        assert_eq!(ids, vec!["m-a", "m-b"]);
        assert_eq!(slots[1].len(), 1);
        assert_eq!(slots[2].len(), 2);
    }

    #[test]
    fn test_missing_or_empty_request() {
        let catalog = vec![offering("m-a", "Math", "Mon", "8:00", "10:00")];
        let none: [&str; 0] = [];
        assert!(candidate_slots(&catalog, &none).is_none());
        assert!(candidate_slots(&catalog, &["Math", "Art"]).is_none());
        assert!(candidate_slots(&catalog, &["math"]).is_none());
    }

    #[test]
    fn test_accepts_owned_names() {
        let catalog = vec![offering("m-a", "Math", "Mon", "8:00", "10:00")];
        let desired = vec![String::from("Math")];
        assert!(candidate_slots(&catalog, &desired).is_some());
    }
}

#[cfg(test)]
mod scenarios {
    use super::*;

    fn math_physics() -> Vec<Offering> {
        vec![
            offering("math-a", "Math", "Lunes", "08:00", "10:00"),
            offering("math-b", "Math", "Lunes", "09:00", "11:00"),
            offering("physics-c", "Physics", "Martes", "08:00", "10:00"),
        ]
    }

    #[test]
    fn test_two_math_groups_one_physics() {
        let catalog = math_physics();
        let expected: HashSet<Vec<&str>> = [
            vec!["math-a", "physics-c"],
            vec!["math-b", "physics-c"],
        ]
        .into_iter()
        .collect();

        for (strategy, solutions) in all_strategies(&catalog, &["Math", "Physics"], Priority::None) {
            if strategy.is_complete() {
                assert_eq!(solutions.len(), 2, "{strategy}");
                assert_eq!(as_set(&solutions), expected, "{strategy}");
            } else {
                assert!(!solutions.is_empty());
                assert!(as_set(&solutions).is_subset(&expected));
            }
        }

        let bitmask =
            dynamic::generate_bitmask(&catalog, &["Math", "Physics"], Priority::None).unwrap();
        assert_eq!(as_set(&bitmask), expected);
    }

    #[test]
    fn test_single_conflicting_pair_has_no_solution() {
        let catalog = vec![
            offering("math-a", "Math", "Mon", "08:00", "10:00"),
            offering("chem-d", "Chem", "Mon", "09:00", "11:00"),
        ];
        for (strategy, solutions) in all_strategies(&catalog, &["Math", "Chem"], Priority::LessGaps) {
            assert!(solutions.is_empty(), "{strategy}");
        }
        assert_eq!(
            dynamic::generate_bitmask(&catalog, &["Math", "Chem"], Priority::None),
            Ok(Vec::new())
        );
    }

    #[test]
    fn test_missing_subject_empties_every_strategy() {
        let catalog = math_physics();
        for (strategy, solutions) in all_strategies(&catalog, &["Math", "Biology"], Priority::None) {
            assert!(solutions.is_empty(), "{strategy}");
        }
    }

    #[test]
    fn test_empty_request_empties_every_strategy() {
        let catalog = math_physics();
        for (strategy, solutions) in all_strategies(&catalog, &[], Priority::None) {
            assert!(solutions.is_empty(), "{strategy}");
        }
    }

    #[test]
    fn test_priority_reorders_results() {
        let catalog = vec![
            offering("m-spread", "Math", "Mon", "8:00", "10:00"),
            offering("m-tight", "Math", "Tue", "10:00", "12:00"),
            offering("p-c", "Physics", "Tue", "8:00", "10:00"),
        ];
        let by_days = Strategy::Backtracking.generate(&catalog, &["Math", "Physics"], Priority::FewerDays);
        assert_eq!(by_days[0].ids(), vec!["m-tight", "p-c"]);

        let unsorted = Strategy::Backtracking.generate(&catalog, &["Math", "Physics"], Priority::None);
        assert_eq!(unsorted[0].ids(), vec!["m-spread", "p-c"]);
    }

    #[test]
    fn test_repeated_generation_is_identical() {
        let catalog = synthetic(&CatalogConfig::default(), 11);
        let desired = ["Subject-00", "Subject-01", "Subject-02"];
        for strategy in Strategy::ALL {
            let first = strategy.generate(&catalog, &desired, Priority::LessGaps);
            let second = strategy.generate(&catalog, &desired, Priority::LessGaps);
            assert_eq!(sequence(&first), sequence(&second), "{strategy}");
        }
    }

    #[test]
    fn test_week_long_catalog() {
        let catalog = vec![
            offering("a1", "A", "Sat", "9:00", "11:00"),
            offering("a2", "A", "Domingo", "9:00", "11:00"),
            offering("b1", "B", "Sábado", "10:00", "12:00"),
        ];
        let result = Strategy::DivideAndConquer.generate(&catalog, &["A", "B"], Priority::None);
        assert_eq!(as_set(&result), [vec!["a2", "b1"]].into_iter().collect::<HashSet<_>>());
        assert_eq!(days_used(&result[0]), 2);
        assert_eq!(total_gap_minutes(&result[0]), 0);
        assert_eq!(result[0].offerings()[0].intervals()[0].day(), Weekday::Sunday);
    }
}

#[cfg(test)]
mod properties {
    use super::*;
    use super::Strategy;
    use proptest::prelude::*;

    fn small_config() -> CatalogConfig {
        CatalogConfig {
            subjects: 5,
            groups_per_subject: 3,
            ..CatalogConfig::default()
        }
    }

    fn names(picks: &[usize]) -> Vec<String> {
        picks.iter().map(|&i| format!("Subject-{i:02}")).collect()
    }

    proptest! {
        #[test]
        fn prop_complete_strategies_agree(seed in any::<u64>(), picks in prop::collection::vec(0usize..5, 0..=4)) {
            let catalog = synthetic(&small_config(), seed);
            let desired = names(&picks);

            let reference = as_set(&backtracking::generate(&catalog, &desired, Priority::None));
            let split = as_set(&divide_conquer::generate(&catalog, &desired, Priority::None));
            let memo = as_set(&dynamic::generate(&catalog, &desired, Priority::None));
            let table = dynamic::generate_bitmask(&catalog, &desired, Priority::None).unwrap();

            prop_assert_eq!(&reference, &split);
            prop_assert_eq!(&reference, &memo);
            prop_assert_eq!(&reference, &as_set(&table));
        }

        #[test]
        fn prop_schedules_are_sound_and_cover_request(seed in any::<u64>(), picks in prop::collection::vec(0usize..5, 1..=4)) {
            let catalog = synthetic(&small_config(), seed);
            let desired = names(&picks);

            for strategy in Strategy::ALL {
                for schedule in strategy.generate(&catalog, &desired, Priority::None) {
                    prop_assert!(schedule.is_conflict_free());
                    prop_assert_eq!(schedule.len(), desired.len());

                    let mut got: Vec<&str> = schedule.iter().map(|o| o.subject()).collect();
                    let mut want: Vec<&str> = desired.iter().map(String::as_str).collect();
                    got.sort_unstable();
                    want.sort_unstable();
                    prop_assert_eq!(got, want);

                    for (i, a) in schedule.offerings().iter().enumerate() {
                        for b in &schedule.offerings()[i + 1..] {
                            prop_assert!(compatible(&[*a], &[*b]));
                        }
                    }
                }
            }
        }

        #[test]
        fn prop_greedy_is_subset_of_backtracking(seed in any::<u64>(), picks in prop::collection::vec(0usize..5, 1..=4)) {
            let catalog = synthetic(&small_config(), seed);
            let desired = names(&picks);

            let reference = as_set(&backtracking::generate(&catalog, &desired, Priority::None));
            let greedy = greedy::generate(&catalog, &desired, Priority::None);
            prop_assert!(greedy.len() <= 3);
            prop_assert!(as_set(&greedy).is_subset(&reference));
        }

        #[test]
        fn prop_sorting_is_monotone(seed in any::<u64>(), picks in prop::collection::vec(0usize..5, 1..=3)) {
            let catalog = synthetic(&small_config(), seed);
            let desired = names(&picks);

            let by_days = backtracking::generate(&catalog, &desired, Priority::FewerDays);
            prop_assert!(by_days.windows(2).all(|w| days_used(&w[0]) <= days_used(&w[1])));

            let by_gaps = dynamic::generate(&catalog, &desired, Priority::LessGaps);
            prop_assert!(by_gaps
                .windows(2)
                .all(|w| total_gap_minutes(&w[0]) <= total_gap_minutes(&w[1])));
        }
    }
}
