//! dispatcher.rs
//! Fans a command sequence out over T worker threads and joins them.
//!
//! - Partitioning: T contiguous slices; the first T-1 have `len / T` commands,
//!   the last one also takes the remainder.
//! - Workers are scoped threads borrowing the record and their slice, so the
//!   record stays owned by the caller and nothing outlives the join.
//! - Every read result is folded into a per-worker checksum that is returned
//!   through the join handle; the lock acquisitions cannot be optimised away.
//! - `dispatch` returns only after every worker has finished (join barrier).

use std::{hint::black_box, ops::Range};

use log::debug;

use crate::record::concurrent_record::ConcurrentRecord;
use crate::utils::error::{BenchError, Result};
use crate::workload::command::Command;

/// Per-worker execution counters.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    pub reads: usize,
    pub writes: usize,
    pub composites: usize,
    pub checksum: u64,
}

impl WorkerStats {
    pub fn executed(&self) -> usize {
        self.reads + self.writes + self.composites
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DispatchStats {
    pub workers: Vec<WorkerStats>,
}

impl DispatchStats {
    pub fn executed(&self) -> usize {
        self.workers.iter().map(WorkerStats::executed).sum()
    }

    pub fn checksum(&self) -> u64 {
        self.workers
            .iter()
            .fold(0u64, |acc, w| acc.wrapping_add(w.checksum))
    }
}

/// Splits `[0, len)` into `threads` contiguous, non-overlapping ranges.
pub fn partition(len: usize, threads: usize) -> Result<Vec<Range<usize>>> {
    if threads == 0 {
        return Err(BenchError::InvalidThreadCount(threads));
    }
    let per_thread = len / threads;

    Ok((0..threads)
        .map(|i| {
            let start = i * per_thread;
            let end = if i == threads - 1 { len } else { start + per_thread };
            start..end
        })
        .collect())
}

/// Runs `commands` over `threads` workers against `record`; blocks until all join.
pub fn dispatch(record: &ConcurrentRecord, commands: &[Command], threads: usize) -> Result<DispatchStats> {
    let slices = partition(commands.len(), threads)?;

    let outcome = crossbeam::scope(|s| -> Result<Vec<WorkerStats>> {
        let mut handles = Vec::with_capacity(slices.len());

        for (id, range) in slices.into_iter().enumerate() {
            let slice = &commands[range.clone()];
            let handle = s
                .builder()
                .name(format!("bench_worker_{}", id))
                .spawn(move |_| {
                    debug!("Worker {}: executing commands {:?}", id, range);
                    run_slice(record, slice)
                })
                .map_err(BenchError::ThreadSpawn)?;
            handles.push(handle);
        }

        handles
            .into_iter()
            .map(|h| h.join().map_err(|_| BenchError::WorkerPanicked))
            .collect()
    });

    match outcome {
        Ok(workers) => Ok(DispatchStats { workers: workers? }),
        Err(_) => Err(BenchError::WorkerPanicked),
    }
}

/// Executes one slice in order. Never fails: bad slots are absorbed by the record.
pub fn run_slice(record: &ConcurrentRecord, slice: &[Command]) -> WorkerStats {
    let mut stats = WorkerStats::default();

    for command in slice {
        match *command {
            Command::Read { slot } => {
                let value = record.get(slot);
                stats.checksum = stats.checksum.wrapping_add(value as u64);
                stats.reads += 1;
            }
            Command::Write { slot, value } => {
                record.set(slot, value);
                stats.writes += 1;
            }
            Command::Composite => {
                let snapshot = record.snapshot();
                stats.checksum = stats.checksum.wrapping_add(snapshot.len() as u64);
                stats.composites += 1;
            }
        }
    }

    black_box(stats)
}
