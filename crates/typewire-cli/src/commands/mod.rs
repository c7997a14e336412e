//! Command implementations for the typewire CLI.
//!
//! Each subcommand module exposes a `run` function that takes its parsed
//! arguments, performs the operation, and prints results to stdout. Progress
//! and diagnostics go through `tracing` to stderr.

pub mod check;
pub mod completions;
pub mod generate;

mod common;
