//! Code synthesis for typewire clients.
//!
//! This crate turns resolved [`typewire_core::ApiMetadata`] into Rust source
//! text. Output is a self-contained module of four files (`raw.rs`,
//! `services.rs`, `client.rs`, `mod.rs`) that compiles against
//! `typewire-runtime` and the author's own data types, with no reference back
//! to the schema or this crate.
//!
//! # Architecture
//!
//! - [`generator`]: [`CodeGenerator`], metadata in, [`GeneratedCode`] out.
//! - [`template_engine`]: strict Handlebars wrapper with the built-in
//!   templates registered at construction.
//! - [`context`]: serializable view structs the templates render; all code
//!   fragments (argument lists, types, import lines) are precomputed here so
//!   templates never assemble Rust syntax themselves.
//! - [`naming`]: case conversions shared by the context builders.
//! - [`types`]: the generated-file bundle handed to callers.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

pub mod context;
pub mod generator;
pub mod naming;
pub mod template_engine;
pub mod types;

pub use generator::CodeGenerator;
pub use template_engine::TemplateEngine;
pub use types::{GeneratedCode, GeneratedFile};
