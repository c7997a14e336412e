//! Serde model of the typewire description format.
//!
//! A schema is a versioned TOML document declaring error types and services.
//! Parsing is strict: unknown keys are rejected so typos surface at
//! generation time instead of silently changing behavior.
//!
//! # Examples
//!
//! ```
//! use typewire_core::ApiSchema;
//!
//! let schema = ApiSchema::from_toml_str(r#"
//!     version = 1
//!
//!     [[errors]]
//!     name = "DefaultError"
//!     type = "crate::dto::DefaultError"
//!     default = true
//!
//!     [[services]]
//!     name = "AuthorisationService"
//!
//!     [[services.operations]]
//!     name = "sign_out"
//!     method = "POST"
//!     path = "signOut"
//! "#).unwrap();
//!
//! assert_eq!(schema.services.len(), 1);
//! assert_eq!(schema.services[0].operations[0].name, "sign_out");
//! ```

use crate::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Description-format version this build understands.
pub const SCHEMA_VERSION: u32 = 1;

/// Top-level schema document.
///
/// The raw, unvalidated shape of a description file. Resolution and every
/// cross-field check live in [`crate::ApiMetadata::resolve`]; this type only
/// guarantees the document was well-formed TOML of the right version.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ApiSchema {
    /// Format version; must equal [`SCHEMA_VERSION`].
    pub version: u32,

    /// Base name for the generated client facade (default `Api`).
    #[serde(default)]
    pub name: Option<String>,

    /// Error types services may reference; exactly one must be the default.
    #[serde(default)]
    pub errors: Vec<ErrorDecl>,

    /// Declared services.
    #[serde(default)]
    pub services: Vec<ServiceDecl>,
}

impl ApiSchema {
    /// Parses a schema from TOML text and checks the format version.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaParse`] when the text is not a well-formed
    /// document and [`Error::UnsupportedVersion`] when the declared version
    /// differs from [`SCHEMA_VERSION`].
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_core::ApiSchema;
    ///
    /// let err = ApiSchema::from_toml_str("version = 7").unwrap_err();
    /// assert!(err.is_unsupported_version());
    /// ```
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let schema: Self = toml::from_str(text)?;
        if schema.version != SCHEMA_VERSION {
            return Err(Error::UnsupportedVersion {
                found: schema.version,
                supported: SCHEMA_VERSION,
            });
        }
        Ok(schema)
    }

    /// Reads and parses a schema file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SchemaRead`] when the file cannot be read, plus
    /// everything [`Self::from_toml_str`] can return.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| Error::SchemaRead {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&text)
    }
}

/// One error type usable by services.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ErrorDecl {
    /// Short name other schema entries reference.
    pub name: String,

    /// Rust type path spliced into generated code.
    #[serde(rename = "type")]
    pub ty: String,

    /// Marks this type as the fallback for services without an `error` key.
    #[serde(default)]
    pub default: bool,
}

/// One declared service.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServiceDecl {
    /// Service type name (also the generated wrapper's name).
    pub name: String,

    /// Absolute base URL override for every relative path in this service.
    #[serde(default)]
    pub base_url: Option<String>,

    /// Reference to an `[[errors]]` entry; default error type when absent.
    #[serde(default)]
    pub error: Option<String>,

    /// Forces envelope unwrapping for this service's responses.
    #[serde(default)]
    pub boxed: bool,

    /// Forbids envelope unwrapping for this service's responses.
    #[serde(default)]
    pub not_boxed: bool,

    /// Declared operations.
    #[serde(default)]
    pub operations: Vec<OperationDecl>,
}

/// One declared operation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OperationDecl {
    /// Method name on the generated service types.
    pub name: String,

    /// HTTP method. An entry without one is not an operation and is
    /// silently excluded from generation.
    #[serde(default)]
    pub method: Option<String>,

    /// Endpoint path, relative to the client base URL unless absolute.
    pub path: String,

    /// Rust type of the decoded success payload; absent means the
    /// operation returns no value.
    #[serde(default)]
    pub returns: Option<String>,

    /// Forces envelope unwrapping for this operation (beats the service).
    #[serde(default)]
    pub boxed: bool,

    /// Forbids envelope unwrapping for this operation (beats the service).
    #[serde(default)]
    pub not_boxed: bool,

    /// Ordered parameter list.
    #[serde(default)]
    pub params: Vec<ParamDecl>,
}

/// One declared parameter.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamDecl {
    /// Parameter name in the generated method signature.
    pub name: String,

    /// Rust type of the parameter.
    #[serde(rename = "type")]
    pub ty: String,

    /// Where the parameter lands in the outgoing request.
    pub role: ParamRole,
}

/// Request position of a parameter.
///
/// Unit roles are written as plain strings (`role = "body"`), keyed roles as
/// single-entry tables (`role = { query = "productId" }`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParamRole {
    /// JSON request body; at most one per operation.
    Body,
    /// Absolute-URL override; replaces the resolved path wholesale and
    /// suppresses base-URL path rewriting. At most one per operation.
    Url,
    /// Query-string pair under the given key.
    Query(String),
    /// Substituted into the matching `{segment}` placeholder in the path.
    Path(String),
    /// Request header with the given name.
    Header(String),
}
