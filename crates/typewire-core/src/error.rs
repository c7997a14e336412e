//! Error types for schema loading, validation, and code generation.
//!
//! Every error in this module is fatal to a generator run: a schema that
//! fails any check produces no output at all.
//!
//! # Examples
//!
//! ```
//! use typewire_core::{Error, Result};
//!
//! fn check_version(found: u32) -> Result<()> {
//!     if found != typewire_core::SCHEMA_VERSION {
//!         return Err(Error::UnsupportedVersion {
//!             found,
//!             supported: typewire_core::SCHEMA_VERSION,
//!         });
//!     }
//!     Ok(())
//! }
//!
//! let err = check_version(99).unwrap_err();
//! assert!(err.is_unsupported_version());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for schema handling and generation.
///
/// Shared by the extraction pass in this crate and the synthesis pass in
/// `typewire-codegen`, so a generator run surfaces one error type end to end.
#[derive(Error, Debug)]
pub enum Error {
    /// Schema file could not be read from disk.
    #[error("failed to read schema {path}")]
    SchemaRead {
        /// Path that was being read
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Schema text is not valid TOML for the description format.
    #[error("failed to parse schema: {source}")]
    SchemaParse {
        /// Underlying TOML deserialization error
        #[from]
        source: Box<toml::de::Error>,
    },

    /// Schema declares a format version this build does not understand.
    #[error("unsupported schema version {found} (this build supports version {supported})")]
    UnsupportedVersion {
        /// Version declared by the schema
        found: u32,
        /// Version this build supports
        supported: u32,
    },

    /// A document-level field failed validation.
    #[error("invalid schema: {reason}")]
    InvalidSchema {
        /// What was wrong with the document
        reason: String,
    },

    /// The schema must mark exactly one error type as the default.
    ///
    /// Zero marked types leaves services without an error shape to fall
    /// back on; more than one makes the fallback ambiguous.
    #[error("expect one and only one default error type")]
    DefaultErrorType {
        /// How many error types carried the default marker
        found: usize,
    },

    /// An error-type declaration failed validation.
    #[error("invalid error type `{name}`: {reason}")]
    InvalidErrorType {
        /// Name of the offending error declaration
        name: String,
        /// What was wrong with it
        reason: String,
    },

    /// The schema declares no services at all.
    #[error("no services found")]
    NoServices,

    /// A service declaration failed validation.
    #[error("invalid service `{service}`: {reason}")]
    InvalidService {
        /// Name of the offending service
        service: String,
        /// What was wrong with it
        reason: String,
    },

    /// An operation declaration failed validation.
    #[error("invalid operation `{service}.{operation}`: {reason}")]
    InvalidOperation {
        /// Service the operation belongs to
        service: String,
        /// Name of the offending operation
        operation: String,
        /// What was wrong with it
        reason: String,
    },

    /// Code synthesis failed after a schema resolved cleanly.
    ///
    /// Raised by `typewire-codegen` for template registration or rendering
    /// failures.
    #[error("code generation failed: {message}")]
    Generation {
        /// Description of the generation failure
        message: String,
        /// Optional underlying error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl Error {
    /// Returns `true` if the schema text failed to parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_core::ApiSchema;
    ///
    /// let err = ApiSchema::from_toml_str("version = ").unwrap_err();
    /// assert!(err.is_schema_parse());
    /// ```
    #[must_use]
    pub const fn is_schema_parse(&self) -> bool {
        matches!(self, Self::SchemaParse { .. })
    }

    /// Returns `true` if the schema declared an unsupported format version.
    #[must_use]
    pub const fn is_unsupported_version(&self) -> bool {
        matches!(self, Self::UnsupportedVersion { .. })
    }

    /// Returns `true` if a document-level field was rejected.
    #[must_use]
    pub const fn is_invalid_schema(&self) -> bool {
        matches!(self, Self::InvalidSchema { .. })
    }

    /// Returns `true` if the default-error-type marker count was not one.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_core::Error;
    ///
    /// let err = Error::DefaultErrorType { found: 0 };
    /// assert!(err.is_default_error_type());
    /// assert_eq!(err.to_string(), "expect one and only one default error type");
    /// ```
    #[must_use]
    pub const fn is_default_error_type(&self) -> bool {
        matches!(self, Self::DefaultErrorType { .. })
    }

    /// Returns `true` if an error-type declaration was rejected.
    #[must_use]
    pub const fn is_invalid_error_type(&self) -> bool {
        matches!(self, Self::InvalidErrorType { .. })
    }

    /// Returns `true` if the schema declared no services.
    #[must_use]
    pub const fn is_no_services(&self) -> bool {
        matches!(self, Self::NoServices)
    }

    /// Returns `true` if a service declaration was rejected.
    #[must_use]
    pub const fn is_invalid_service(&self) -> bool {
        matches!(self, Self::InvalidService { .. })
    }

    /// Returns `true` if an operation declaration was rejected.
    #[must_use]
    pub const fn is_invalid_operation(&self) -> bool {
        matches!(self, Self::InvalidOperation { .. })
    }

    /// Returns `true` if code synthesis failed.
    #[must_use]
    pub const fn is_generation(&self) -> bool {
        matches!(self, Self::Generation { .. })
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Self::SchemaParse {
            source: Box::new(source),
        }
    }
}

/// Result type alias for schema and generation operations.
///
/// # Examples
///
/// ```
/// use typewire_core::{Error, Result};
///
/// fn require_services(count: usize) -> Result<usize> {
///     if count == 0 {
///         return Err(Error::NoServices);
///     }
///     Ok(count)
/// }
///
/// assert!(require_services(2).is_ok());
/// assert!(require_services(0).is_err());
/// ```
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_error_type_message_is_stable() {
        // Downstream tooling greps for this exact message.
        let err = Error::DefaultErrorType { found: 2 };
        assert_eq!(err.to_string(), "expect one and only one default error type");
    }

    #[test]
    fn test_no_services_message_is_stable() {
        assert_eq!(Error::NoServices.to_string(), "no services found");
    }

    #[test]
    fn test_invalid_service_display() {
        let err = Error::InvalidService {
            service: "ProductService".to_string(),
            reason: "duplicate service name".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("ProductService"));
        assert!(display.contains("duplicate service name"));
    }

    #[test]
    fn test_invalid_operation_display() {
        let err = Error::InvalidOperation {
            service: "ProductService".to_string(),
            operation: "get_products".to_string(),
            reason: "unsupported HTTP method `FETCH`".to_string(),
        };
        let display = err.to_string();
        assert!(display.contains("ProductService.get_products"));
        assert!(display.contains("FETCH"));
    }

    #[test]
    fn test_error_kind_detection() {
        assert!(Error::NoServices.is_no_services());
        assert!(!Error::NoServices.is_default_error_type());

        let err = Error::UnsupportedVersion {
            found: 2,
            supported: 1,
        };
        assert!(err.is_unsupported_version());
        assert!(!err.is_no_services());

        let err = Error::Generation {
            message: "template rendering failed".to_string(),
            source: None,
        };
        assert!(err.is_generation());
        assert!(!err.is_invalid_service());
    }

    #[test]
    fn test_result_alias() {
        fn returns_err() -> Result<()> {
            Err(Error::NoServices)
        }
        assert!(returns_err().is_err());
    }
}
