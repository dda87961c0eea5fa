//! Loads a workload file into an ordered command sequence.
//! Blank lines are skipped; malformed `read`/`write` lines are logged and kept as
//! composite reads so the sequence length still matches the file.

use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

use log::{info, warn};

use crate::utils::error::{BenchError, Result};
use crate::workload::command::Command;

pub fn load_commands(path: &Path) -> Result<Vec<Command>> {
    let file = File::open(path).map_err(|e| BenchError::io(path, e))?;
    let reader = BufReader::new(file);

    let mut commands = Vec::new();
    let mut malformed = 0usize;

    for (line_no, line) in reader.lines().enumerate() {
        let line = line.map_err(|e| BenchError::io(path, e))?;
        if line.trim().is_empty() {
            continue;
        }
        match Command::try_parse(&line) {
            Some(command) => commands.push(command),
            None => {
                malformed += 1;
                warn!(
                    "[loader] {:?}:{}: malformed command {:?}, treating as composite read",
                    path,
                    line_no + 1,
                    line
                );
                commands.push(Command::Composite);
            }
        }
    }

    info!(
        "[loader] loaded {} commands from {:?} ({} malformed)",
        commands.len(),
        path,
        malformed
    );
    Ok(commands)
}
