//! Result table printed after each measurement.
//!
//! Layout (left aligned): `File` (20) | `Threads` (10) | `Time (ms)` (15), with a
//! 45-character rule under the header and after every workload group.

use std::io::{self, Write};

use crate::runner::bench_runner::Measurement;

const FILE_WIDTH: usize = 20;
const THREADS_WIDTH: usize = 10;
const TIME_WIDTH: usize = 15;
const RULE_WIDTH: usize = FILE_WIDTH + THREADS_WIDTH + TIME_WIDTH;

/// Consumer of sweep results, called in sweep order.
pub trait Reporter {
    fn begin(&mut self) -> io::Result<()>;
    fn record(&mut self, measurement: &Measurement) -> io::Result<()>;
    fn end_workload(&mut self, workload: &str) -> io::Result<()>;
    fn finish(&mut self) -> io::Result<()>;
}

pub struct TableReporter<W: Write> {
    out: W,
}

impl TableReporter<io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> TableReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn rule(&mut self) -> io::Result<()> {
        writeln!(self.out, "{}", "-".repeat(RULE_WIDTH))
    }
}

impl<W: Write> Reporter for TableReporter<W> {
    fn begin(&mut self) -> io::Result<()> {
        writeln!(
            self.out,
            "{:<fw$}{:<tw$}{:<mw$}",
            "File",
            "Threads",
            "Time (ms)",
            fw = FILE_WIDTH,
            tw = THREADS_WIDTH,
            mw = TIME_WIDTH
        )?;
        self.rule()
    }

    fn record(&mut self, m: &Measurement) -> io::Result<()> {
        writeln!(
            self.out,
            "{:<fw$}{:<tw$}{:<mw$}",
            m.workload,
            m.threads,
            m.elapsed_ms,
            fw = FILE_WIDTH,
            tw = THREADS_WIDTH,
            mw = TIME_WIDTH
        )?;
        self.out.flush()
    }

    fn end_workload(&mut self, _workload: &str) -> io::Result<()> {
        self.rule()
    }

    fn finish(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

/// Keeps every measurement in memory; handy for tests and post-processing.
#[derive(Debug, Default)]
pub struct CollectingReporter {
    pub measurements: Vec<Measurement>,
    pub finished_workloads: Vec<String>,
}

impl Reporter for CollectingReporter {
    fn begin(&mut self) -> io::Result<()> {
        Ok(())
    }

    fn record(&mut self, measurement: &Measurement) -> io::Result<()> {
        self.measurements.push(measurement.clone());
        Ok(())
    }

    fn end_workload(&mut self, workload: &str) -> io::Result<()> {
        self.finished_workloads.push(workload.to_string());
        Ok(())
    }

    fn finish(&mut self) -> io::Result<()> {
        Ok(())
    }
}
