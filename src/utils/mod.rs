// Error type, result table and CSV export shared by the runner and the binary.

pub mod error;
pub mod export;
pub mod report;
