// Timed runs: one measurement per (workload, thread count), and the sweep driving them.

pub mod bench_runner;
