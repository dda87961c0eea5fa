//! bench_runner.rs
//! Measurement and sweep orchestration.
//!
//! A measurement is a straight line: fresh record → start clock → dispatch →
//! all workers joined → stop clock. Workload generation and file loading happen
//! before the clock starts; reporting happens after it stops.
//!
//! The sweep walks workloads in the outer loop and thread counts in the inner loop,
//! handing every measurement to the reporter as it is taken.

use std::{
    fs::create_dir_all,
    hint::black_box,
    path::{Path, PathBuf},
    time::Instant,
};

use log::{error, info};
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::config::SweepConfig;
use crate::dispatch::dispatcher::dispatch;
use crate::record::concurrent_record::ConcurrentRecord;
use crate::utils::error::{BenchError, Result};
use crate::utils::report::Reporter;
use crate::workload::{
    command::Command,
    generator::{generate, write_workload_file},
    loader::load_commands,
};

/// Outcome of one timed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trial {
    pub threads: usize,
    pub commands_executed: usize,
    pub elapsed_ms: u64,
    pub checksum: u64,
}

/// One row of sweep output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Measurement {
    pub workload: String,
    pub threads: usize,
    pub commands: usize,
    pub elapsed_ms: u64,
}

/// Wall-clock milliseconds to run `commands` over `threads` workers.
pub fn measure(threads: usize, commands: &[Command]) -> Result<u64> {
    measure_detailed(threads, commands).map(|trial| trial.elapsed_ms)
}

pub fn measure_detailed(threads: usize, commands: &[Command]) -> Result<Trial> {
    if threads == 0 {
        return Err(BenchError::InvalidThreadCount(threads));
    }

    let record = ConcurrentRecord::new();

    let start = Instant::now();
    let stats = dispatch(&record, commands, threads)?;
    let elapsed = start.elapsed();

    let trial = Trial {
        threads,
        commands_executed: stats.executed(),
        elapsed_ms: elapsed.as_millis() as u64,
        checksum: black_box(stats.checksum()),
    };
    Ok(trial)
}

/// Generates one workload file per preset into the output directory.
pub fn prepare_workloads(config: &SweepConfig) -> Result<Vec<PathBuf>> {
    create_dir_all(&config.output_dir).map_err(|e| BenchError::io(&config.output_dir, e))?;

    let mut paths = Vec::with_capacity(config.workloads.len());
    for (i, preset) in config.workloads.iter().enumerate() {
        let mut rng = StdRng::seed_from_u64(config.seed.wrapping_add(i as u64));
        let commands = generate(config.command_count, &preset.distribution, &mut rng);

        let path = config.output_dir.join(preset.file_name());
        write_workload_file(&path, &commands)?;
        info!(
            "[Sweep] Generated {} ({} commands, mix {:?})",
            preset.file_name(),
            commands.len(),
            preset.distribution.percentages()
        );
        paths.push(path);
    }
    Ok(paths)
}

/// Measures every workload file at every thread count.
///
/// A workload file that cannot be read is reported and skipped; no timed run is
/// started for it.
pub fn sweep_files(
    files: &[PathBuf],
    thread_counts: &[usize],
    reporter: &mut dyn Reporter,
) -> Result<Vec<Measurement>> {
    if let Some(&bad) = thread_counts.iter().find(|&&t| t == 0) {
        return Err(BenchError::InvalidThreadCount(bad));
    }

    let mut results = Vec::with_capacity(files.len() * thread_counts.len());
    reporter.begin().map_err(BenchError::Report)?;

    for path in files {
        let label = workload_label(path);
        let commands = match load_commands(path) {
            Ok(commands) => commands,
            Err(e) => {
                error!("[Sweep] Skipping workload {}: {}", label, e);
                continue;
            }
        };

        for &threads in thread_counts {
            let trial = measure_detailed(threads, &commands)?;
            info!(
                "[Sweep] {} threads={} commands={} elapsed_ms={}",
                label, threads, trial.commands_executed, trial.elapsed_ms
            );

            let measurement = Measurement {
                workload: label.clone(),
                threads,
                commands: trial.commands_executed,
                elapsed_ms: trial.elapsed_ms,
            };
            reporter.record(&measurement).map_err(BenchError::Report)?;
            results.push(measurement);
        }
        reporter.end_workload(&label).map_err(BenchError::Report)?;
    }

    reporter.finish().map_err(BenchError::Report)?;
    Ok(results)
}

/// Full sweep: generate the configured workloads, then measure them.
pub fn run_sweep(config: &SweepConfig, reporter: &mut dyn Reporter) -> Result<Vec<Measurement>> {
    config.validate()?;
    info!(
        "[Sweep] Starting: {} workloads x thread counts {:?}, {} logical CPUs",
        config.workloads.len(),
        config.thread_counts,
        num_cpus::get()
    );

    let files = prepare_workloads(config)?;
    let results = sweep_files(&files, &config.thread_counts, reporter)?;

    info!("[Sweep] Completed: {} measurements", results.len());
    Ok(results)
}

fn workload_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
