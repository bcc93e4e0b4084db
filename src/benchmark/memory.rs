//! Process memory probes used around a benchmarked run.

use std::fs;

/// Reports the current memory footprint of the process in bytes.
///
/// `None` means the host gave no usable answer; the harness then records a
/// zero delta for the run.
pub trait MemorySampler {
    fn sample(&mut self) -> Option<u64>;
}

/// Reads the resident set size (`VmRSS`) from `/proc/self/status`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcStatusSampler;

impl MemorySampler for ProcStatusSampler {
    fn sample(&mut self) -> Option<u64> {
        match fs::read_to_string("/proc/self/status") {
            Ok(status) => parse_vm_rss(&status),
            Err(e) => {
                log::trace!("memory probe unavailable: {e}");
                None
            }
        }
    }
}

/// Extracts `VmRSS` (reported in kB) as bytes.
fn parse_vm_rss(status: &str) -> Option<u64> {
    let line = status.lines().find(|l| l.starts_with("VmRSS:"))?;
    let kb: u64 = line
        .trim_start_matches("VmRSS:")
        .split_whitespace()
        .next()?
        .parse()
        .ok()?;
    kb.checked_mul(1024)
}

/// Memory growth between two samples; shrinkage and failed samples give 0.
pub fn memory_delta(before: Option<u64>, after: Option<u64>) -> u64 {
    match (before, after) {
        (Some(before), Some(after)) => after.saturating_sub(before),
        _ => 0,
    }
}
