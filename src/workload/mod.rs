// Workload side: typed commands, synthetic workload generation and file loading.
// Everything here runs outside the timed region.

pub mod command;
pub mod generator;
pub mod loader;
