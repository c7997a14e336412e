//! Render contexts for the generated-module templates.
//!
//! The templates stay dumb: everything with assembly logic behind it
//! (signatures, builder chains, return types, import lines) is precomputed
//! here in Rust and spliced verbatim. One context type per generated file,
//! nested per service and per operation.
//!
//! # Examples
//!
//! ```
//! use typewire_codegen::context::RawOperationContext;
//!
//! let op = RawOperationContext {
//!     name: "sign_in".to_string(),
//!     args: ", body: &crate::dto::SignInData".to_string(),
//!     return_type: "crate::dto::User".to_string(),
//!     method: "POST".to_string(),
//!     path: "signIn".to_string(),
//!     builder_lines: vec![".json_body(body)".to_string()],
//!     finisher: ".send_json(Some(Boxing::NotBoxed))".to_string(),
//! };
//!
//! assert_eq!(op.method, "POST");
//! ```

use serde::{Deserialize, Serialize};

/// Context for rendering `raw.rs`, the unclassified calling types.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawModuleContext {
    /// Complete `use` lines, one per entry
    pub imports: Vec<String>,
    /// Services in schema order
    pub services: Vec<RawServiceContext>,
}

/// One raw calling type.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawServiceContext {
    /// Public service name, used in documentation
    pub service_name: String,
    /// Name of the emitted raw struct
    pub raw_name: String,
    /// Operations in schema order
    pub operations: Vec<RawOperationContext>,
}

/// One method on a raw calling type.
///
/// Everything here is already Rust source text; the template only splices.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawOperationContext {
    /// Method name
    pub name: String,
    /// Argument list after `&self`, with its leading comma, or empty
    pub args: String,
    /// Success payload type, `()` for void operations
    pub return_type: String,
    /// Upper-case HTTP method, spliced as `Method::{method}`
    pub method: String,
    /// Resolved request path with `{placeholder}` segments intact
    pub path: String,
    /// Builder calls between `call` and the finisher, one per line
    pub builder_lines: Vec<String>,
    /// Terminal builder call, `.send_json(..)` or `.send_unit()`
    pub finisher: String,
}

/// Context for rendering `services.rs`, the typed wrappers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServicesModuleContext {
    /// Complete `use` lines, one per entry
    pub imports: Vec<String>,
    /// Services in schema order
    pub services: Vec<WrapperServiceContext>,
}

/// One typed service wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrapperServiceContext {
    /// Public service name
    pub name: String,
    /// Raw struct the wrapper delegates to
    pub raw_name: String,
    /// Resolved error payload type for this service
    pub error_type: String,
    /// Operations in schema order
    pub operations: Vec<WrapperOperationContext>,
}

/// One method on a typed service wrapper.
///
/// # Examples
///
/// ```
/// use typewire_codegen::context::WrapperOperationContext;
///
/// let op = WrapperOperationContext {
///     name: "sign_out".to_string(),
///     method: "POST".to_string(),
///     path: "signOut".to_string(),
///     args: String::new(),
///     forward_args: String::new(),
///     return_type: "UnitResponse<crate::dto::DefaultError>".to_string(),
///     classify_fn: "unit_call".to_string(),
///     error_type: "crate::dto::DefaultError".to_string(),
///     safe_sibling: true,
/// };
///
/// assert!(op.safe_sibling);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WrapperOperationContext {
    /// Method name
    pub name: String,
    /// Upper-case HTTP method, used in documentation
    pub method: String,
    /// Resolved request path, used in documentation
    pub path: String,
    /// Argument list after `&self`, with its leading comma, or empty
    pub args: String,
    /// Comma-separated argument names forwarded to the raw call
    pub forward_args: String,
    /// Full taxonomy payload type inside the `Result`
    pub return_type: String,
    /// Classifier entry point, `data_call` or `unit_call`
    pub classify_fn: String,
    /// Error payload type, spliced into the safe sibling's turbofish
    pub error_type: String,
    /// Whether to emit the `<name>_safe` sibling; void operations only
    pub safe_sibling: bool,
}

/// Context for rendering `client.rs`, the facade over the provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientContext {
    /// API name from the schema
    pub api_name: String,
    /// Facade struct name
    pub client_name: String,
    /// Complete `use` lines, one per entry
    pub imports: Vec<String>,
    /// One accessor per service, in schema order
    pub services: Vec<ServiceHandleContext>,
}

/// One service accessor on the client facade.
///
/// # Examples
///
/// ```
/// use typewire_codegen::context::ServiceHandleContext;
///
/// let handle = ServiceHandleContext {
///     name: "ProductService".to_string(),
///     accessor: "product_service".to_string(),
/// };
///
/// assert_eq!(handle.accessor, "product_service");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceHandleContext {
    /// Service type returned by the accessor
    pub name: String,
    /// snake_case accessor method name
    pub accessor: String,
}

/// Context for rendering `mod.rs`, the module entry point.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModContext {
    /// API name from the schema
    pub api_name: String,
    /// Facade struct name re-exported at the module root
    pub client_name: String,
    /// Complete `pub use` line re-exporting the service types
    pub services_reexport: String,
}
