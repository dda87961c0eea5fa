// End-to-end: workload text → loader → dispatcher → runner → report / export.

use std::{fs, path::PathBuf};

use rand::{SeedableRng, rngs::StdRng};
use rwlock_bench::{
    BenchError, Command, ConcurrentRecord, SweepConfig, dispatch, measure,
    runner::bench_runner::sweep_files,
    run_sweep,
    utils::{export::export_results_csv, report::CollectingReporter},
    workload::{
        generator::{equal, generate, skewed, variant_16, write_workload_file},
        loader::load_commands,
    },
};

#[test]
fn five_command_scenario_ends_in_one_two() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("scenario.txt");
    fs::write(&path, "read 0\nwrite 0 1\nread 1\nwrite 1 2\nstring\n").unwrap();

    let commands = load_commands(&path).unwrap();
    let record = ConcurrentRecord::new();
    let stats = dispatch(&record, &commands, 1).unwrap();

    assert_eq!(stats.executed(), 5);
    assert_eq!(record.snapshot(), "1 2");
}

#[test]
fn hundred_thousand_commands_join_at_every_thread_count() {
    for preset in [variant_16(), equal(), skewed()] {
        let commands = generate(100_000, &preset.distribution, &mut StdRng::seed_from_u64(16));
        for threads in 1..=3 {
            // u64 is non-negative by construction; completing at all is the check.
            let elapsed_ms = measure(threads, &commands).unwrap();
            assert!(elapsed_ms < 60_000, "{} at {} threads took {} ms", preset.name, threads, elapsed_ms);
        }
    }
}

#[test]
fn write_only_workload_leaves_last_written_values() {
    let commands = generate(10_000, &skewed().distribution, &mut StdRng::seed_from_u64(3));
    let record = ConcurrentRecord::new();
    dispatch(&record, &commands, 3).unwrap();
    // The skewed preset only ever writes 1 to either slot.
    assert_eq!(record.snapshot(), "1 1");
}

#[test]
fn sweep_measures_workloads_outer_threads_inner() {
    let dir = tempfile::tempdir().unwrap();
    let config = SweepConfig {
        command_count: 2_000,
        thread_counts: vec![1, 2, 3],
        output_dir: dir.path().to_path_buf(),
        seed: 42,
        ..SweepConfig::default()
    };

    let mut reporter = CollectingReporter::default();
    let results = run_sweep(&config, &mut reporter).unwrap();

    let order: Vec<(String, usize)> = results
        .iter()
        .map(|m| (m.workload.clone(), m.threads))
        .collect();
    let expected: Vec<(String, usize)> = ["variant_16.txt", "equal.txt", "skewed.txt"]
        .iter()
        .flat_map(|w| [1, 2, 3].map(|t| (w.to_string(), t)))
        .collect();
    assert_eq!(order, expected);
    assert!(results.iter().all(|m| m.commands == 2_000));
    assert_eq!(reporter.measurements, results);
    assert_eq!(reporter.finished_workloads, ["variant_16.txt", "equal.txt", "skewed.txt"]);

    for name in ["variant_16.txt", "equal.txt", "skewed.txt"] {
        let loaded = load_commands(&dir.path().join(name)).unwrap();
        assert_eq!(loaded.len(), 2_000);
    }
}

#[test]
fn same_seed_generates_identical_workload_files() {
    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();
    for dir in [&first, &second] {
        let config = SweepConfig {
            command_count: 500,
            thread_counts: vec![1],
            output_dir: dir.path().to_path_buf(),
            seed: 7,
            ..SweepConfig::default()
        };
        run_sweep(&config, &mut CollectingReporter::default()).unwrap();
    }
    let a = fs::read_to_string(first.path().join("equal.txt")).unwrap();
    let b = fs::read_to_string(second.path().join("equal.txt")).unwrap();
    assert_eq!(a, b);
}

#[test]
fn unreadable_workload_is_skipped_without_a_timed_run() {
    let dir = tempfile::tempdir().unwrap();
    let good = dir.path().join("good.txt");
    write_workload_file(&good, &[Command::Read { slot: 0 }, Command::Composite]).unwrap();
    let missing: PathBuf = dir.path().join("missing.txt");

    let mut reporter = CollectingReporter::default();
    let results = sweep_files(&[missing, good], &[1, 2], &mut reporter).unwrap();

    assert_eq!(results.len(), 2);
    assert!(results.iter().all(|m| m.workload == "good.txt"));
    assert_eq!(reporter.finished_workloads, ["good.txt"]);
}

#[test]
fn zero_thread_count_is_rejected_before_generation() {
    let dir = tempfile::tempdir().unwrap();
    let output_dir = dir.path().join("out");
    let config = SweepConfig {
        command_count: 10,
        thread_counts: vec![0],
        output_dir: output_dir.clone(),
        ..SweepConfig::default()
    };

    let result = run_sweep(&config, &mut CollectingReporter::default());
    assert!(matches!(result, Err(BenchError::InvalidThreadCount(0))));
    assert!(!output_dir.exists());
}

#[test]
fn sweep_results_export_to_csv() {
    let dir = tempfile::tempdir().unwrap();
    let config = SweepConfig {
        command_count: 100,
        thread_counts: vec![1, 2],
        output_dir: dir.path().to_path_buf(),
        workloads: vec![equal()],
        seed: 1,
    };
    let results = run_sweep(&config, &mut CollectingReporter::default()).unwrap();
    export_results_csv(&config.results_path(), &results).unwrap();

    let text = fs::read_to_string(config.results_path()).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "workload,threads,commands,elapsed_ms");
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("equal.txt,1,100,"));
    assert!(lines[2].starts_with("equal.txt,2,100,"));
}
