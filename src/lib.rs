//! # rwlock_bench
//! Throughput benchmark for per-field reader/writer locking.
//!
//! A `ConcurrentRecord` holds two integer slots, each behind its own RwLock.
//! A workload (a sequence of read / write / composite-read commands) is split into
//! contiguous slices, one per worker thread, and every worker runs its slice against
//! the same record. Elapsed wall-clock time is measured from before the first worker
//! starts until the last one has joined.

pub mod config;
pub mod dispatch;
pub mod record;
pub mod runner;
pub mod utils;
pub mod workload;

pub use config::SweepConfig;
pub use dispatch::dispatcher::{dispatch, partition};
pub use record::concurrent_record::{ConcurrentRecord, INVALID_SLOT};
pub use runner::bench_runner::{Measurement, measure, run_sweep};
pub use utils::error::{BenchError, Result};
pub use workload::command::Command;
