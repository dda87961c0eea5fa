//! generator.rs
//! Synthetic workload generation from a five-bucket percentage distribution.
//!
//! Buckets, in order: `read 0`, `write 0 1`, `read 1`, `write 1 1`, `string`.
//! Each command draws a uniform value in [0, 100) and takes the first bucket whose
//! cumulative percentage exceeds it; whatever the first four buckets leave over
//! falls into the composite bucket. Randomness always comes from a caller-supplied
//! RNG so a seed fully determines the workload.

use std::{
    fs::File,
    io::{BufWriter, Write},
    path::Path,
};

use log::debug;
use rand::Rng;

use crate::utils::error::{BenchError, Result};
use crate::workload::command::Command;

pub const BUCKET_COUNT: usize = 5;

const BUCKET_COMMANDS: [Command; BUCKET_COUNT] = [
    Command::Read { slot: 0 },
    Command::Write { slot: 0, value: 1 },
    Command::Read { slot: 1 },
    Command::Write { slot: 1, value: 1 },
    Command::Composite,
];

const PERCENT_EPSILON: f64 = 1e-9;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Distribution {
    percentages: [f64; BUCKET_COUNT],
}

impl Distribution {
    pub fn new(percentages: [f64; BUCKET_COUNT]) -> Result<Self> {
        if let Some(bad) = percentages.iter().find(|p| !p.is_finite() || **p < 0.0) {
            return Err(BenchError::InvalidDistribution(format!(
                "percentages must be finite and non-negative, got {}",
                bad
            )));
        }
        let total: f64 = percentages.iter().sum();
        if total > 100.0 + PERCENT_EPSILON {
            return Err(BenchError::InvalidDistribution(format!(
                "percentages sum to {:.3}, more than 100",
                total
            )));
        }
        Ok(Self { percentages })
    }

    pub fn percentages(&self) -> [f64; BUCKET_COUNT] {
        self.percentages
    }

    /// Maps a draw in [0, 100) onto a bucket's command.
    pub fn pick(&self, draw: f64) -> Command {
        let mut cumulative = 0.0;
        for (weight, command) in self.percentages.iter().zip(BUCKET_COMMANDS) {
            cumulative += weight;
            if draw < cumulative {
                return command;
            }
        }
        Command::Composite
    }
}

/// A named distribution; the name doubles as the workload file stem.
#[derive(Debug, Clone, PartialEq)]
pub struct WorkloadPreset {
    pub name: String,
    pub distribution: Distribution,
}

impl WorkloadPreset {
    pub fn new(name: impl Into<String>, distribution: Distribution) -> Self {
        Self {
            name: name.into(),
            distribution,
        }
    }

    pub fn file_name(&self) -> String {
        format!("{}.txt", self.name)
    }
}

/// Read-heavy mix with half of all commands being composite reads.
pub fn variant_16() -> WorkloadPreset {
    WorkloadPreset::new(
        "variant_16",
        Distribution {
            percentages: [20.0, 5.0, 20.0, 5.0, 50.0],
        },
    )
}

pub fn equal() -> WorkloadPreset {
    WorkloadPreset::new(
        "equal",
        Distribution {
            percentages: [20.0; BUCKET_COUNT],
        },
    )
}

/// Writes only, split evenly between the two slots.
pub fn skewed() -> WorkloadPreset {
    WorkloadPreset::new(
        "skewed",
        Distribution {
            percentages: [0.0, 50.0, 0.0, 50.0, 0.0],
        },
    )
}

pub fn default_presets() -> Vec<WorkloadPreset> {
    vec![variant_16(), equal(), skewed()]
}

pub fn generate<R: Rng>(count: usize, distribution: &Distribution, rng: &mut R) -> Vec<Command> {
    (0..count)
        .map(|_| distribution.pick(rng.random_range(0.0..100.0)))
        .collect()
}

/// Writes one command per line in the workload text format.
pub fn write_workload_file(path: &Path, commands: &[Command]) -> Result<()> {
    let file = File::create(path).map_err(|e| BenchError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for command in commands {
        writeln!(writer, "{}", command.to_line()).map_err(|e| BenchError::io(path, e))?;
    }
    writer.flush().map_err(|e| BenchError::io(path, e))?;
    debug!("[generator] wrote {} commands to {:?}", commands.len(), path);
    Ok(())
}
