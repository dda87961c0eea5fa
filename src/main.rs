//! # rwlock_bench entry point
//! Interactive driver for the per-field RwLock throughput benchmark.
//!
//! ## Modes
//! - **Full sweep:** generates the three preset workloads (100 000 commands each)
//!   and measures each at 1, 2 and 3 worker threads.
//! - **Custom sweep:** same presets, user-chosen command count and thread counts.
//! - **Existing file:** measures a workload file already on disk.
//!
//! ## Outputs
//! - Result table on stdout.
//! - `data/<preset>.txt`: generated workloads.
//! - `data/results.csv`: one appended row per measurement.

use std::{
    io::{Write, stdin, stdout},
    path::PathBuf,
};

use log::{error, info};

use rwlock_bench::{
    config::{DEFAULT_COMMAND_COUNT, DEFAULT_THREAD_COUNTS, SweepConfig},
    runner::bench_runner::{Measurement, run_sweep, sweep_files},
    utils::{error::Result, export::export_results_csv, report::TableReporter},
};

fn main() {
    env_logger::init();
    info!("=== RWLOCK BENCH START ===");

    // Stops on option 4 or when stdin is closed.
    while let Some(choice) = prompt_menu() {
        match choice.as_str() {
            "1" | "" => {
                let config = SweepConfig::default();
                finish_run(run_sweep(&config, &mut TableReporter::stdout()), &config);
            }
            "2" => {
                let Some(command_count) = prompt_command_count() else { break };
                let Some(thread_counts) = prompt_thread_counts() else { break };
                let config = SweepConfig {
                    command_count,
                    thread_counts,
                    ..SweepConfig::default()
                };
                finish_run(run_sweep(&config, &mut TableReporter::stdout()), &config);
            }
            "3" => {
                let Some(path) = prompt_line("Workload file path: ") else { break };
                if path.is_empty() {
                    println!("No file given.");
                    continue;
                }
                let Some(thread_counts) = prompt_thread_counts() else { break };
                let config = SweepConfig {
                    thread_counts,
                    ..SweepConfig::default()
                };
                let result = sweep_files(
                    &[PathBuf::from(path)],
                    &config.thread_counts,
                    &mut TableReporter::stdout(),
                );
                finish_run(result, &config);
            }
            "4" => {
                println!("Exiting. Goodbye!");
                break;
            }
            other => {
                println!("Unrecognized option '{}', please try again.", other);
            }
        }
    }

    info!("=== RWLOCK BENCH FINISHED ===");
}

fn finish_run(result: Result<Vec<Measurement>>, config: &SweepConfig) {
    match result {
        Ok(measurements) if measurements.is_empty() => {
            println!("\n No measurements taken.\n");
        }
        Ok(measurements) => {
            let path = config.results_path();
            if let Err(e) = export_results_csv(&path, &measurements) {
                error!("Failed to export results: {}", e);
            }
            println!("\n Run completed. Results appended to {:?}\n", path);
        }
        Err(e) => {
            error!("Run failed: {}", e);
            eprintln!("Error: {}", e);
        }
    }
}

fn prompt_menu() -> Option<String> {
    println!("\n┌─────────────────────────────────────────────┐");
    println!("│     PER-FIELD RWLOCK BENCHMARK              │");
    println!("├─────────────────────────────────────────────┤");
    println!("│  1) Full sweep (presets x threads 1,2,3)    │");
    println!("│  2) Custom sweep                            │");
    println!("│  3) Measure an existing workload file       │");
    println!("│  4) Exit                                    │");
    println!("└─────────────────────────────────────────────┘");
    prompt_line("Select [1/2/3/4] (default: 1): ")
}

/// `None` once stdin is closed or unreadable.
fn prompt_line(message: &str) -> Option<String> {
    print!("{}", message);
    let _ = stdout().flush();
    let mut input = String::new();
    match stdin().read_line(&mut input) {
        Ok(0) => {
            println!();
            info!("stdin closed, leaving menu");
            None
        }
        Ok(_) => Some(input.trim().to_string()),
        Err(e) => {
            error!("Failed to read stdin: {}", e);
            None
        }
    }
}

fn prompt_command_count() -> Option<usize> {
    let input = prompt_line("Commands per workload [default: 100000]: ")?;
    Some(input.parse::<usize>().unwrap_or(DEFAULT_COMMAND_COUNT))
}

// Zero entries are kept so the sweep can reject them with a clear error.
fn prompt_thread_counts() -> Option<Vec<usize>> {
    let input = prompt_line("Thread counts, comma separated [default: 1,2,3]: ")?;
    let counts: Vec<usize> = input
        .split(',')
        .filter_map(|t| t.trim().parse::<usize>().ok())
        .collect();
    if counts.is_empty() {
        Some(DEFAULT_THREAD_COUNTS.to_vec())
    } else {
        Some(counts)
    }
}
