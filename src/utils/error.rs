//! Error taxonomy for the I/O and orchestration layers.
//!
//! The record itself never fails (sentinel / no-op on a bad slot); everything that
//! can go wrong around it is collected here.

use std::{io, path::PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum BenchError {
    #[error("thread count must be at least 1, got {0}")]
    InvalidThreadCount(usize),

    #[error("I/O error on {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to spawn worker thread: {0}")]
    ThreadSpawn(#[source] io::Error),

    #[error("worker thread panicked")]
    WorkerPanicked,

    #[error("invalid distribution: {0}")]
    InvalidDistribution(String),

    #[error("failed to write report: {0}")]
    Report(#[source] io::Error),
}

impl BenchError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        BenchError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
