//! Timing, memory and quality measurements for strategy runs.
//!
//! A [`Benchmark`] borrows a catalog and runs strategies against it. Each run
//! produces a [`BenchmarkResult`] holding the schedules themselves plus:
//!
//! | Field | Meaning |
//! |-------|---------|
//! | `elapsed` | Wall-clock time of the `generate` call |
//! | `memory_bytes` | Resident memory growth across the call, never negative |
//! | `quality` | [`quality_score`] of the returned schedules |
//!
//! [`comparison_report`] renders a batch of results as a fixed-width table.

mod memory;
mod quality;

pub use memory::{memory_delta, MemorySampler, ProcStatusSampler};
pub use quality::{dispersion, quality_score};

use std::fmt::{self, Display};
use std::time::{Duration, Instant};

use qtty::{Millisecond, Quantity};

use crate::algorithms::Strategy;
use crate::evaluation::Priority;
use crate::model::Offering;
use crate::schedule::Schedule;
use crate::units::milliseconds;
use crate::{generate_id, Id};

const BYTES_PER_MB: f64 = 1024.0 * 1024.0;
const REPORT_WIDTH: usize = 75;

/// Outcome of one benchmarked strategy run.
#[derive(Debug, Clone)]
pub struct BenchmarkResult<'a> {
    run_id: Id,
    strategy: Strategy,
    solutions: Vec<Schedule<'a>>,
    elapsed: Duration,
    memory_bytes: u64,
    quality: f64,
}

impl<'a> BenchmarkResult<'a> {
    /// Wraps a finished run; the quality score is computed here, once.
    pub fn new(
        strategy: Strategy,
        solutions: Vec<Schedule<'a>>,
        elapsed: Duration,
        memory_bytes: u64,
    ) -> Self {
        let quality = quality_score(&solutions);
        Self {
            run_id: generate_id(),
            strategy,
            solutions,
            elapsed,
            memory_bytes,
            quality,
        }
    }

    /// Unique id of this run.
    pub fn run_id(&self) -> &str {
        &self.run_id
    }

    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    pub fn solutions(&self) -> &[Schedule<'a>] {
        &self.solutions
    }

    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn elapsed_ms(&self) -> Quantity<Millisecond> {
        milliseconds(self.elapsed)
    }

    pub fn memory_bytes(&self) -> u64 {
        self.memory_bytes
    }

    pub fn memory_mb(&self) -> f64 {
        self.memory_bytes as f64 / BYTES_PER_MB
    }

    pub fn quality(&self) -> f64 {
        self.quality
    }

    pub fn into_solutions(self) -> Vec<Schedule<'a>> {
        self.solutions
    }
}

impl Display for BenchmarkResult<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} schedules, {:.3} ms, {:.2} MB, quality {:.2}",
            self.strategy,
            self.solution_count(),
            self.elapsed_ms().value(),
            self.memory_mb(),
            self.quality
        )
    }
}

/// Runs strategies against one catalog, sampling memory with `M`.
pub struct Benchmark<'a, M = ProcStatusSampler> {
    offerings: &'a [Offering],
    sampler: M,
}

impl<'a> Benchmark<'a, ProcStatusSampler> {
    pub fn new(offerings: &'a [Offering]) -> Self {
        Self::with_sampler(offerings, ProcStatusSampler)
    }
}

impl<'a, M: MemorySampler> Benchmark<'a, M> {
    pub fn with_sampler(offerings: &'a [Offering], sampler: M) -> Self {
        Self { offerings, sampler }
    }

    /// Times one strategy and measures its memory growth.
    pub fn run<S: AsRef<str>>(
        &mut self,
        strategy: Strategy,
        desired: &[S],
        priority: Priority,
    ) -> BenchmarkResult<'a> {
        let before = self.sampler.sample();
        let start = Instant::now();
        let solutions = strategy.generate(self.offerings, desired, priority);
        let elapsed = start.elapsed();
        let after = self.sampler.sample();

        let result = BenchmarkResult::new(strategy, solutions, elapsed, memory_delta(before, after));
        log::debug!("benchmark {}: {result}", result.run_id());
        result
    }

    /// Runs every strategy, in [`Strategy::ALL`] order.
    pub fn run_all<S: AsRef<str>>(
        &mut self,
        desired: &[S],
        priority: Priority,
    ) -> Vec<BenchmarkResult<'a>> {
        Strategy::ALL
            .iter()
            .map(|&strategy| self.run(strategy, desired, priority))
            .collect()
    }
}

/// Benchmarks one strategy with the default memory probe.
pub fn benchmark<'a, S: AsRef<str>>(
    offerings: &'a [Offering],
    strategy: Strategy,
    desired: &[S],
    priority: Priority,
) -> BenchmarkResult<'a> {
    Benchmark::new(offerings).run(strategy, desired, priority)
}

/// Benchmarks all four strategies with the default memory probe.
pub fn benchmark_all<'a, S: AsRef<str>>(
    offerings: &'a [Offering],
    desired: &[S],
    priority: Priority,
) -> Vec<BenchmarkResult<'a>> {
    Benchmark::new(offerings).run_all(desired, priority)
}

/// Fixed-width comparison table over a batch of results.
#[derive(Debug, Clone, Copy)]
pub struct ComparisonReport<'r, 'a> {
    results: &'r [BenchmarkResult<'a>],
}

impl<'r, 'a> ComparisonReport<'r, 'a> {
    pub fn new(results: &'r [BenchmarkResult<'a>]) -> Self {
        Self { results }
    }
}

impl Display for ComparisonReport<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rule = "=".repeat(REPORT_WIDTH);
        writeln!(f, "{rule}")?;
        writeln!(f, "{:^width$}", "STRATEGY COMPARISON", width = REPORT_WIDTH)?;
        writeln!(f, "{rule}")?;
        writeln!(
            f,
            "{:<25} {:>10} {:>12} {:>12} {:>10}",
            "STRATEGY", "SOLUTIONS", "TIME (ms)", "MEMORY (MB)", "QUALITY"
        )?;
        writeln!(f, "{}", "-".repeat(REPORT_WIDTH))?;
        for result in self.results {
            writeln!(
                f,
                "{:<25} {:>10} {:>12.3} {:>12.2} {:>10.2}",
                result.strategy().name(),
                result.solution_count(),
                result.elapsed_ms().value(),
                result.memory_mb(),
                result.quality()
            )?;
        }
        Ok(())
    }
}

/// Renders results as a fixed-width comparison table.
pub fn comparison_report(results: &[BenchmarkResult<'_>]) -> String {
    ComparisonReport::new(results).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{TimeInterval, Weekday};

    /// Replays a fixed sequence of samples.
    struct ScriptedSampler(Vec<Option<u64>>);

    impl MemorySampler for ScriptedSampler {
        fn sample(&mut self) -> Option<u64> {
            if self.0.is_empty() {
                None
            } else {
                self.0.remove(0)
            }
        }
    }

    fn offering(id: &str, subject: &str, day: Weekday, start: u32, end: u32) -> Offering {
        Offering::new(
            id,
            subject,
            id,
            1,
            vec![TimeInterval::new(day, start, end).unwrap()],
        )
    }

    fn catalog() -> Vec<Offering> {
        vec![
            offering("m1", "Math", Weekday::Monday, 480, 600),
            offering("m2", "Math", Weekday::Wednesday, 480, 600),
            offering("p1", "Physics", Weekday::Monday, 540, 660),
            offering("p2", "Physics", Weekday::Tuesday, 600, 720),
        ]
    }

    #[test]
    fn run_records_solutions_and_memory_growth() {
        let catalog = catalog();
        let sampler = ScriptedSampler(vec![Some(1_000), Some(4_000)]);
        let mut bench = Benchmark::with_sampler(&catalog, sampler);

        let result = bench.run(Strategy::Backtracking, &["Math", "Physics"], Priority::None);
        assert_eq!(result.strategy(), Strategy::Backtracking);
        assert_eq!(result.solution_count(), 3);
        assert_eq!(result.memory_bytes(), 3_000);
        assert!(result.quality() > 0.0);
        assert!(result.elapsed_ms().value() >= 0.0);
    }

    #[test]
    fn shrinking_memory_is_clamped() {
        let catalog = catalog();
        let sampler = ScriptedSampler(vec![Some(4_000), Some(1_000)]);
        let mut bench = Benchmark::with_sampler(&catalog, sampler);
        let result = bench.run(Strategy::Greedy, &["Math"], Priority::None);
        assert_eq!(result.memory_bytes(), 0);
    }

    #[test]
    fn failed_probe_counts_as_zero() {
        let catalog = catalog();
        let mut bench = Benchmark::with_sampler(&catalog, ScriptedSampler(Vec::new()));
        let result = bench.run(Strategy::DynamicProgramming, &["Math"], Priority::None);
        assert_eq!(result.memory_bytes(), 0);
        assert_eq!(result.solution_count(), 2);
    }

    #[test]
    fn run_all_covers_every_strategy_in_order() {
        let catalog = catalog();
        let results = benchmark_all(&catalog, &["Math", "Physics"], Priority::FewerDays);
        let strategies: Vec<Strategy> = results.iter().map(BenchmarkResult::strategy).collect();
        assert_eq!(strategies, Strategy::ALL.to_vec());

        let mut ids: Vec<&str> = results.iter().map(BenchmarkResult::run_id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 4);
    }

    #[test]
    fn no_solutions_scores_zero() {
        let catalog = catalog();
        let result = benchmark(&catalog, Strategy::Backtracking, &["History"], Priority::None);
        assert_eq!(result.solution_count(), 0);
        assert_eq!(result.quality(), 0.0);
    }

    #[test]
    fn result_display() {
        let result = BenchmarkResult::new(
            Strategy::Greedy,
            Vec::new(),
            Duration::from_micros(1_500),
            2 * 1024 * 1024,
        );
        assert_eq!(
            result.to_string(),
            "greedy: 0 schedules, 1.500 ms, 2.00 MB, quality 0.00"
        );
    }

    #[test]
    fn report_has_one_row_per_result() {
        let catalog = catalog();
        let results = benchmark_all(&catalog, &["Math", "Physics"], Priority::None);
        let report = comparison_report(&results);

        assert!(report.contains("STRATEGY COMPARISON"));
        for strategy in Strategy::ALL {
            assert!(report.contains(strategy.name()));
        }
        // Title block, header, divider, four rows.
        assert_eq!(report.lines().count(), 9);
    }

    #[test]
    fn report_rows_are_fixed_width() {
        let results = vec![
            BenchmarkResult::new(Strategy::Backtracking, Vec::new(), Duration::from_millis(2), 0),
            BenchmarkResult::new(Strategy::Greedy, Vec::new(), Duration::from_micros(250), 1024 * 1024),
        ];
        let report = ComparisonReport::new(&results).to_string();
        assert_eq!(report, comparison_report(&results));

        let lines: Vec<&str> = report.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[0], "=".repeat(REPORT_WIDTH));
        assert_eq!(lines[1].trim(), "STRATEGY COMPARISON");
        assert_eq!(
            lines[5],
            format!("{:<25} {:>10} {:>12} {:>12} {:>10}", "backtracking", 0, "2.000", "0.00", "0.00")
        );
        assert_eq!(
            lines[6],
            format!("{:<25} {:>10} {:>12} {:>12} {:>10}", "greedy", 0, "0.250", "1.00", "0.00")
        );
    }
}
