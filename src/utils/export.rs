//! CSV export for sweep results.
//!
//! One row per measurement: workload, threads, commands, elapsed_ms. Rows are
//! appended so repeated sweeps accumulate in the same file; the header is written
//! only when the file is empty.

use std::{
    fs::{OpenOptions, create_dir_all},
    path::Path,
};

use csv::WriterBuilder;
use log::info;

use crate::runner::bench_runner::Measurement;
use crate::utils::error::{BenchError, Result};

pub fn export_results_csv(path: &Path, measurements: &[Measurement]) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        create_dir_all(parent).map_err(|e| BenchError::io(parent, e))?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| BenchError::io(path, e))?;
    // Header goes into new and empty files alike.
    let needs_header = file.metadata().map_err(|e| BenchError::io(path, e))?.len() == 0;

    let mut writer = WriterBuilder::new()
        .has_headers(needs_header)
        .from_writer(file);
    for m in measurements {
        writer.serialize(m)?;
    }
    writer.flush().map_err(|e| BenchError::io(path, e))?;

    info!("Exported {} measurements to {:?}", measurements.len(), path);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Measurement> {
        vec![
            Measurement {
                workload: "skewed.txt".into(),
                threads: 1,
                commands: 100,
                elapsed_ms: 4,
            },
            Measurement {
                workload: "skewed.txt".into(),
                threads: 2,
                commands: 100,
                elapsed_ms: 6,
            },
        ]
    }

    #[test]
    fn writes_header_once_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("results.csv");

        export_results_csv(&path, &sample()).unwrap();
        export_results_csv(&path, &sample()[..1]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            text,
            "workload,threads,commands,elapsed_ms\n\
             skewed.txt,1,100,4\n\
             skewed.txt,2,100,6\n\
             skewed.txt,1,100,4\n"
        );
    }

    #[test]
    fn empty_existing_file_gets_a_header() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("results.csv");
        std::fs::write(&path, "").unwrap();

        export_results_csv(&path, &sample()[..1]).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text, "workload,threads,commands,elapsed_ms\nskewed.txt,1,100,4\n");
    }
}
