//! Sweep configuration.
//!
//! Defaults reproduce the reference experiment: three presets of 100 000 commands,
//! each measured at 1, 2 and 3 threads. The generator seed can be pinned with
//! `RWLOCK_BENCH_SEED` so workload files are reproducible across machines.

use std::{env, path::PathBuf};

use log::warn;

use crate::utils::error::{BenchError, Result};
use crate::workload::generator::{WorkloadPreset, default_presets};

pub const DEFAULT_COMMAND_COUNT: usize = 100_000;
pub const DEFAULT_THREAD_COUNTS: &[usize] = &[1, 2, 3];
pub const DEFAULT_OUTPUT_DIR: &str = "data";
pub const DEFAULT_SEED: u64 = 0x5EED_0016;
pub const SEED_ENV_VAR: &str = "RWLOCK_BENCH_SEED";
pub const RESULTS_CSV: &str = "results.csv";

#[derive(Debug, Clone)]
pub struct SweepConfig {
    pub command_count: usize,
    pub workloads: Vec<WorkloadPreset>,
    pub thread_counts: Vec<usize>,
    /// Workload files and the results CSV are written here.
    pub output_dir: PathBuf,
    pub seed: u64,
}

impl Default for SweepConfig {
    fn default() -> Self {
        Self {
            command_count: DEFAULT_COMMAND_COUNT,
            workloads: default_presets(),
            thread_counts: DEFAULT_THREAD_COUNTS.to_vec(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            seed: seed_from_env(),
        }
    }
}

impl SweepConfig {
    /// Rejects a zero thread count before anything is generated or timed.
    pub fn validate(&self) -> Result<()> {
        if let Some(&bad) = self.thread_counts.iter().find(|&&t| t == 0) {
            return Err(BenchError::InvalidThreadCount(bad));
        }
        Ok(())
    }

    pub fn results_path(&self) -> PathBuf {
        self.output_dir.join(RESULTS_CSV)
    }
}

fn seed_from_env() -> u64 {
    match env::var(SEED_ENV_VAR) {
        Ok(raw) => raw.trim().parse::<u64>().unwrap_or_else(|_| {
            warn!("{}={:?} is not a u64, using default seed", SEED_ENV_VAR, raw);
            DEFAULT_SEED
        }),
        Err(_) => DEFAULT_SEED,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_experiment() {
        let config = SweepConfig::default();
        assert_eq!(config.command_count, 100_000);
        assert_eq!(config.thread_counts, vec![1, 2, 3]);
        let names: Vec<&str> = config.workloads.iter().map(|w| w.name.as_str()).collect();
        assert_eq!(names, ["variant_16", "equal", "skewed"]);
        assert_eq!(config.results_path(), PathBuf::from("data").join("results.csv"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn zero_thread_count_fails_validation() {
        let config = SweepConfig {
            thread_counts: vec![1, 0, 2],
            ..SweepConfig::default()
        };
        assert!(matches!(config.validate(), Err(BenchError::InvalidThreadCount(0))));
    }
}
