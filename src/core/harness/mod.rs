// src/core/harness/mod.rs

//! Benchmarking harness: replays a text command stream against range trees
//! and reports how many nodes insertions and queries touch.

pub mod command;
pub mod runner;
pub mod stats;

pub use command::{Command, Coordinate};
pub use runner::{Harness, RunReport};
pub use stats::{OperationStats, TreeStats, TreeSummary};

#[cfg(test)]
mod tests;
