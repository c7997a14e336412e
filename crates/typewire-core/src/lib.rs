//! Schema model and metadata extraction for typewire.
//!
//! This crate owns the input side of the generator: the versioned TOML
//! description format for remote services and the validation pass that turns
//! a parsed schema into immutable, generation-ready metadata.
//!
//! # Architecture
//!
//! - [`schema`]: serde model of the description format, one struct per TOML
//!   table, plus the format version gate.
//! - [`metadata`]: resolved [`ApiMetadata`] with every precedence rule
//!   applied: default error type, boxing markers, base-URL path rewriting.
//! - [`Error`]: every way a schema can be rejected, all fatal; the
//!   generator never produces partial output.

#![deny(unsafe_code)]
#![warn(missing_docs, missing_debug_implementations)]

mod error;

pub mod metadata;
pub mod schema;

pub use error::{Error, Result};
pub use metadata::{
    ApiMetadata, Boxing, HttpMethod, OperationMetadata, ParamMetadata, ServiceMetadata,
};
pub use schema::{
    ApiSchema, ErrorDecl, OperationDecl, ParamDecl, ParamRole, SCHEMA_VERSION, ServiceDecl,
};
