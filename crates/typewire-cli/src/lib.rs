//! Typewire CLI library.
//!
//! Exposes the subcommand implementations behind the `typewire` binary so
//! integration tests can drive them directly.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod commands;
