//! Resolved, generation-ready metadata.
//!
//! [`ApiMetadata::resolve`] is the single validation pass between a parsed
//! [`ApiSchema`] and the code synthesizer. Everything with a precedence rule
//! (default error type, boxing markers, base-URL path rewriting) is settled
//! here, so the synthesizer can stay a dumb renderer.
//!
//! Every check failure is fatal; a schema either resolves completely or
//! produces nothing.

use crate::schema::{ApiSchema, ErrorDecl, OperationDecl, ParamRole, ServiceDecl};
use crate::{Error, Result};
use std::collections::HashSet;
use std::hash::{Hash, Hasher};
use tracing::{debug, info};

/// Envelope-unwrapping marker resolved from the `boxed`/`not_boxed` flags.
///
/// `None` at a scope means "inherit": operations inherit from their service,
/// services from the client-wide runtime default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boxing {
    /// Responses are wrapped in a single-key envelope and must be unwrapped.
    Boxed,
    /// Responses are plain payloads.
    NotBoxed,
}

/// HTTP methods the description format accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP DELETE
    Delete,
    /// HTTP PATCH
    Patch,
    /// HTTP HEAD
    Head,
    /// HTTP OPTIONS
    Options,
}

impl HttpMethod {
    fn parse(text: &str) -> Option<Self> {
        match text {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "DELETE" => Some(Self::Delete),
            "PATCH" => Some(Self::Patch),
            "HEAD" => Some(Self::Head),
            "OPTIONS" => Some(Self::Options),
            _ => None,
        }
    }

    /// Canonical upper-case method name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
            Self::Patch => "PATCH",
            Self::Head => "HEAD",
            Self::Options => "OPTIONS",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One resolved parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParamMetadata {
    /// Parameter name in the generated signature.
    pub name: String,
    /// Rust type of the parameter.
    pub ty: String,
    /// Request position.
    pub role: ParamRole,
}

/// One qualifying operation with precedence applied.
#[derive(Debug, Clone)]
pub struct OperationMetadata {
    /// Method name on the generated service types.
    pub name: String,
    /// Resolved HTTP method.
    pub method: HttpMethod,
    /// Resolved path: rewritten to absolute when the owning service
    /// declares a base URL and the declared path was relative.
    pub path: String,
    /// Success payload type; `None` for void operations.
    pub returns: Option<String>,
    /// Merged boxing marker (operation beats service); `None` inherits the
    /// client-wide runtime default.
    pub boxing: Option<Boxing>,
    /// Ordered parameters.
    pub params: Vec<ParamMetadata>,
}

impl OperationMetadata {
    /// Returns `true` when the operation produces no payload.
    #[must_use]
    pub const fn is_void(&self) -> bool {
        self.returns.is_none()
    }

    /// The body parameter, if declared.
    #[must_use]
    pub fn body_param(&self) -> Option<&ParamMetadata> {
        self.params.iter().find(|p| p.role == ParamRole::Body)
    }

    /// The absolute-URL-override parameter, if declared.
    #[must_use]
    pub fn url_param(&self) -> Option<&ParamMetadata> {
        self.params.iter().find(|p| p.role == ParamRole::Url)
    }
}

/// One service with resolved configuration.
///
/// Identity, equality, and hashing are by service name alone: two metadata
/// values with the same name describe the same service even if their
/// configuration snapshots differ.
#[derive(Debug, Clone)]
pub struct ServiceMetadata {
    name: String,
    error_type: String,
    base_url: Option<String>,
    boxing: Option<Boxing>,
    operations: Vec<OperationMetadata>,
}

impl ServiceMetadata {
    /// Service type name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rust type path used to decode this service's API error bodies.
    #[must_use]
    pub fn error_type(&self) -> &str {
        &self.error_type
    }

    /// Absolute base URL override, when declared.
    #[must_use]
    pub fn base_url(&self) -> Option<&str> {
        self.base_url.as_deref()
    }

    /// Service-level boxing marker, before per-operation overrides.
    #[must_use]
    pub const fn boxing(&self) -> Option<Boxing> {
        self.boxing
    }

    /// Qualifying operations, in declaration order.
    #[must_use]
    pub fn operations(&self) -> &[OperationMetadata] {
        &self.operations
    }
}

impl PartialEq for ServiceMetadata {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for ServiceMetadata {}

impl Hash for ServiceMetadata {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

/// A fully resolved API description.
///
/// # Examples
///
/// ```
/// use typewire_core::{ApiMetadata, ApiSchema};
///
/// let schema = ApiSchema::from_toml_str(r#"
///     version = 1
///
///     [[errors]]
///     name = "DefaultError"
///     type = "DefaultError"
///     default = true
///
///     [[services]]
///     name = "AuthorisationService"
///
///     [[services.operations]]
///     name = "sign_out"
///     method = "POST"
///     path = "signOut"
/// "#).unwrap();
///
/// let api = ApiMetadata::resolve(&schema).unwrap();
/// assert_eq!(api.services().len(), 1);
/// assert_eq!(api.services()[0].error_type(), "DefaultError");
/// ```
#[derive(Debug, Clone)]
pub struct ApiMetadata {
    name: String,
    default_error: String,
    services: Vec<ServiceMetadata>,
}

impl ApiMetadata {
    /// Resolves a parsed schema into generation-ready metadata.
    ///
    /// Applies every precedence rule and performs all cross-field
    /// validation. Services and operations keep their declaration order so
    /// generated output is deterministic and diffable.
    ///
    /// # Errors
    ///
    /// - [`Error::DefaultErrorType`] unless exactly one error type carries
    ///   `default = true`
    /// - [`Error::NoServices`] for a schema without services
    /// - [`Error::InvalidErrorType`], [`Error::InvalidService`], and
    ///   [`Error::InvalidOperation`] for declaration-level problems
    ///   (duplicate names, unparseable Rust types, conflicting boxing
    ///   markers, malformed base URLs, parameter/path mismatches)
    pub fn resolve(schema: &ApiSchema) -> Result<Self> {
        let default_error = resolve_default_error(&schema.errors)?;

        if schema.services.is_empty() {
            return Err(Error::NoServices);
        }

        let name = schema.name.clone().unwrap_or_else(|| "Api".to_string());
        if syn::parse_str::<syn::Ident>(&name).is_err() {
            return Err(Error::InvalidSchema {
                reason: format!("client name `{name}` is not a valid Rust identifier"),
            });
        }

        let mut seen = HashSet::new();
        let mut services = Vec::with_capacity(schema.services.len());
        for decl in &schema.services {
            let service = resolve_service(decl, &schema.errors, &default_error.ty, &mut seen)?;
            services.push(service);
        }

        let operations: usize = services.iter().map(|s| s.operations().len()).sum();
        info!(
            services = services.len(),
            operations, "resolved API description"
        );

        Ok(Self {
            name,
            default_error: default_error.ty.clone(),
            services,
        })
    }

    /// Base name for the generated client facade.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Rust type path of the schema-wide default error type.
    #[must_use]
    pub fn default_error(&self) -> &str {
        &self.default_error
    }

    /// Resolved services, in declaration order.
    #[must_use]
    pub fn services(&self) -> &[ServiceMetadata] {
        &self.services
    }

    /// Total number of qualifying operations across all services.
    #[must_use]
    pub fn operation_count(&self) -> usize {
        self.services.iter().map(|s| s.operations().len()).sum()
    }
}

fn resolve_default_error(errors: &[ErrorDecl]) -> Result<&ErrorDecl> {
    let mut names = HashSet::new();
    for decl in errors {
        if syn::parse_str::<syn::Type>(&decl.ty).is_err() {
            return Err(Error::InvalidErrorType {
                name: decl.name.clone(),
                reason: format!("`{}` is not a valid Rust type", decl.ty),
            });
        }
        if !names.insert(decl.name.as_str()) {
            return Err(Error::InvalidErrorType {
                name: decl.name.clone(),
                reason: "duplicate error type name".to_string(),
            });
        }
    }

    let defaults: Vec<&ErrorDecl> = errors.iter().filter(|e| e.default).collect();
    if let [single] = defaults.as_slice() {
        Ok(single)
    } else {
        Err(Error::DefaultErrorType {
            found: defaults.len(),
        })
    }
}

fn resolve_service(
    decl: &ServiceDecl,
    errors: &[ErrorDecl],
    default_error: &str,
    seen: &mut HashSet<String>,
) -> Result<ServiceMetadata> {
    let invalid = |reason: String| Error::InvalidService {
        service: decl.name.clone(),
        reason,
    };

    if syn::parse_str::<syn::Ident>(&decl.name).is_err() {
        return Err(invalid("not a valid Rust type name".to_string()));
    }
    if !seen.insert(decl.name.clone()) {
        return Err(invalid("duplicate service name".to_string()));
    }

    let boxing = marker_from_flags(decl.boxed, decl.not_boxed).map_err(&invalid)?;

    if let Some(url) = &decl.base_url {
        if !is_absolute(url) {
            return Err(invalid(format!(
                "base_url `{url}` must be an absolute http(s) URL"
            )));
        }
        if !url.ends_with('/') {
            return Err(invalid(format!("base_url `{url}` must end with `/`")));
        }
    }

    let error_type = match &decl.error {
        Some(reference) => errors
            .iter()
            .find(|e| &e.name == reference)
            .map(|e| e.ty.clone())
            .ok_or_else(|| invalid(format!("unknown error type `{reference}`")))?,
        None => default_error.to_string(),
    };

    let mut operations = Vec::new();
    for op in &decl.operations {
        let Some(method) = &op.method else {
            debug!(
                service = %decl.name,
                operation = %op.name,
                "entry has no HTTP method, excluding from generation"
            );
            continue;
        };
        operations.push(resolve_operation(decl, op, method, boxing)?);
    }

    debug!(
        service = %decl.name,
        operations = operations.len(),
        error_type = %error_type,
        "resolved service"
    );

    Ok(ServiceMetadata {
        name: decl.name.clone(),
        error_type,
        base_url: decl.base_url.clone(),
        boxing,
        operations,
    })
}

fn resolve_operation(
    service: &ServiceDecl,
    decl: &OperationDecl,
    method: &str,
    service_boxing: Option<Boxing>,
) -> Result<OperationMetadata> {
    let invalid = |reason: String| Error::InvalidOperation {
        service: service.name.clone(),
        operation: decl.name.clone(),
        reason,
    };

    if syn::parse_str::<syn::Ident>(&decl.name).is_err() {
        return Err(invalid("not a valid Rust identifier".to_string()));
    }

    let method = HttpMethod::parse(method)
        .ok_or_else(|| invalid(format!("unsupported HTTP method `{method}`")))?;

    if let Some(returns) = &decl.returns
        && syn::parse_str::<syn::Type>(returns).is_err()
    {
        return Err(invalid(format!("`{returns}` is not a valid Rust type")));
    }

    let op_boxing = marker_from_flags(decl.boxed, decl.not_boxed).map_err(&invalid)?;
    let boxing = op_boxing.or(service_boxing);

    let mut body_params = 0usize;
    let mut url_params = 0usize;
    let mut path_roles: Vec<&str> = Vec::new();
    let mut params = Vec::with_capacity(decl.params.len());
    for param in &decl.params {
        if syn::parse_str::<syn::Ident>(&param.name).is_err() {
            return Err(invalid(format!(
                "parameter `{}` is not a valid Rust identifier",
                param.name
            )));
        }
        if syn::parse_str::<syn::Type>(&param.ty).is_err() {
            return Err(invalid(format!(
                "parameter `{}`: `{}` is not a valid Rust type",
                param.name, param.ty
            )));
        }
        match &param.role {
            ParamRole::Body => body_params += 1,
            ParamRole::Url => url_params += 1,
            ParamRole::Query(key) if key.is_empty() => {
                return Err(invalid(format!("parameter `{}` has an empty query key", param.name)));
            }
            ParamRole::Header(name) if name.is_empty() => {
                return Err(invalid(format!(
                    "parameter `{}` has an empty header name",
                    param.name
                )));
            }
            ParamRole::Path(segment) => {
                if segment.is_empty() {
                    return Err(invalid(format!(
                        "parameter `{}` has an empty path segment",
                        param.name
                    )));
                }
                path_roles.push(segment);
            }
            ParamRole::Query(_) | ParamRole::Header(_) => {}
        }
        params.push(ParamMetadata {
            name: param.name.clone(),
            ty: param.ty.clone(),
            role: param.role.clone(),
        });
    }
    if body_params > 1 {
        return Err(invalid("more than one body parameter".to_string()));
    }
    if url_params > 1 {
        return Err(invalid("more than one url parameter".to_string()));
    }

    let placeholders = path_placeholders(&decl.path);
    for placeholder in &placeholders {
        if !path_roles.contains(&placeholder.as_str()) {
            return Err(invalid(format!(
                "path placeholder `{{{placeholder}}}` has no matching path parameter"
            )));
        }
    }
    for role in &path_roles {
        if !placeholders.iter().any(|p| p == role) {
            return Err(invalid(format!(
                "path parameter `{role}` has no `{{{role}}}` placeholder in the path"
            )));
        }
    }

    let path = resolved_path(service, decl, url_params > 0).map_err(&invalid)?;

    Ok(OperationMetadata {
        name: decl.name.clone(),
        method,
        path,
        returns: decl.returns.clone(),
        boxing,
        params,
    })
}

/// Rewrites a relative path onto the service base URL override.
///
/// Absolute paths and operations with an absolute-URL-override parameter
/// keep the declared path untouched.
fn resolved_path(
    service: &ServiceDecl,
    decl: &OperationDecl,
    has_url_param: bool,
) -> std::result::Result<String, String> {
    let Some(base) = &service.base_url else {
        return Ok(decl.path.clone());
    };
    if is_absolute(&decl.path) || has_url_param {
        return Ok(decl.path.clone());
    }
    if decl.path.starts_with('/') {
        return Err(format!(
            "path `{}` under a base_url override must not start with `/`",
            decl.path
        ));
    }
    Ok(format!("{base}{}", decl.path))
}

fn marker_from_flags(
    boxed: bool,
    not_boxed: bool,
) -> std::result::Result<Option<Boxing>, String> {
    match (boxed, not_boxed) {
        (true, true) => Err("declares both `boxed` and `not_boxed`".to_string()),
        (true, false) => Ok(Some(Boxing::Boxed)),
        (false, true) => Ok(Some(Boxing::NotBoxed)),
        (false, false) => Ok(None),
    }
}

fn is_absolute(path: &str) -> bool {
    path.starts_with("http://") || path.starts_with("https://")
}

fn path_placeholders(path: &str) -> Vec<String> {
    let mut out = Vec::new();
    let mut rest = path;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        out.push(rest[start + 1..start + len].to_string());
        rest = &rest[start + len + 1..];
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resolve(text: &str) -> Result<ApiMetadata> {
        let schema = ApiSchema::from_toml_str(text)?;
        ApiMetadata::resolve(&schema)
    }

    const MINIMAL: &str = r#"
        version = 1

        [[errors]]
        name = "DefaultError"
        type = "DefaultError"
        default = true

        [[services]]
        name = "AuthorisationService"

        [[services.operations]]
        name = "sign_out"
        method = "POST"
        path = "signOut"
    "#;

    #[test]
    fn test_minimal_schema_resolves() {
        let api = resolve(MINIMAL).unwrap();
        assert_eq!(api.name(), "Api");
        assert_eq!(api.default_error(), "DefaultError");
        assert_eq!(api.services().len(), 1);
        assert_eq!(api.operation_count(), 1);

        let op = &api.services()[0].operations()[0];
        assert_eq!(op.method, HttpMethod::Post);
        assert_eq!(op.path, "signOut");
        assert!(op.is_void());
        assert_eq!(op.boxing, None);
    }

    #[test]
    fn test_missing_default_error_is_fatal() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "DefaultError"
            type = "DefaultError"

            [[services]]
            name = "Svc"
            "#,
        )
        .unwrap_err();
        assert!(err.is_default_error_type());
        assert_eq!(err.to_string(), "expect one and only one default error type");
    }

    #[test]
    fn test_duplicate_default_error_is_fatal() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "A"
            type = "A"
            default = true

            [[errors]]
            name = "B"
            type = "B"
            default = true

            [[services]]
            name = "Svc"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::DefaultErrorType { found: 2 }));
    }

    #[test]
    fn test_empty_schema_has_no_services() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "DefaultError"
            type = "DefaultError"
            default = true
            "#,
        )
        .unwrap_err();
        assert!(err.is_no_services());
        assert_eq!(err.to_string(), "no services found");
    }

    #[test]
    fn test_boxing_precedence_service_beats_unset_operation() {
        let api = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"
            boxed = true

            [[services.operations]]
            name = "plain"
            method = "GET"
            path = "plain"
            returns = "Value"
            "#,
        )
        .unwrap();
        assert_eq!(api.services()[0].operations()[0].boxing, Some(Boxing::Boxed));
    }

    #[test]
    fn test_boxing_precedence_operation_beats_service() {
        let api = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"
            boxed = true

            [[services.operations]]
            name = "raw"
            method = "GET"
            path = "raw"
            returns = "Value"
            not_boxed = true
            "#,
        )
        .unwrap();
        assert_eq!(
            api.services()[0].operations()[0].boxing,
            Some(Boxing::NotBoxed)
        );
    }

    #[test]
    fn test_conflicting_markers_same_scope_fatal() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"
            boxed = true
            not_boxed = true
            "#,
        )
        .unwrap_err();
        assert!(err.is_invalid_service());
        assert!(err.to_string().contains("both `boxed` and `not_boxed`"));

        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"

            [[services.operations]]
            name = "op"
            method = "GET"
            path = "op"
            boxed = true
            not_boxed = true
            "#,
        )
        .unwrap_err();
        assert!(err.is_invalid_operation());
    }

    #[test]
    fn test_entry_without_method_is_silently_excluded() {
        let api = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"

            [[services.operations]]
            name = "helper"
            path = "helper"

            [[services.operations]]
            name = "real"
            method = "GET"
            path = "real"
            "#,
        )
        .unwrap();
        let ops = api.services()[0].operations();
        assert_eq!(ops.len(), 1);
        assert_eq!(ops[0].name, "real");
    }

    #[test]
    fn test_unknown_method_is_fatal() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"

            [[services.operations]]
            name = "op"
            method = "FETCH"
            path = "op"
            "#,
        )
        .unwrap_err();
        assert!(err.is_invalid_operation());
        assert!(err.to_string().contains("unsupported HTTP method `FETCH`"));
    }

    #[test]
    fn test_relative_paths_rewritten_on_base_url_override() {
        let api = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"
            base_url = "https://id.example.com/"

            [[services.operations]]
            name = "relative"
            method = "POST"
            path = "deleteProduct"

            [[services.operations]]
            name = "absolute"
            method = "POST"
            path = "https://other.example.com/x"
            "#,
        )
        .unwrap();
        let ops = api.services()[0].operations();
        assert_eq!(ops[0].path, "https://id.example.com/deleteProduct");
        assert_eq!(ops[1].path, "https://other.example.com/x");
    }

    #[test]
    fn test_url_param_suppresses_rewrite() {
        let api = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"
            base_url = "https://id.example.com/"

            [[services.operations]]
            name = "download"
            method = "GET"
            path = "fallback"
            returns = "Payload"

            [[services.operations.params]]
            name = "target"
            type = "String"
            role = "url"
            "#,
        )
        .unwrap();
        assert_eq!(api.services()[0].operations()[0].path, "fallback");
    }

    #[test]
    fn test_base_url_must_be_absolute_with_trailing_slash() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"
            base_url = "id.example.com/"
            "#,
        )
        .unwrap_err();
        assert!(err.is_invalid_service());

        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"
            base_url = "https://id.example.com"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("must end with `/`"));
    }

    #[test]
    fn test_duplicate_service_name_fatal() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"

            [[services]]
            name = "Svc"
            "#,
        )
        .unwrap_err();
        assert!(err.is_invalid_service());
        assert!(err.to_string().contains("duplicate service name"));
    }

    #[test]
    fn test_unknown_error_reference_fatal() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"
            error = "Missing"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("unknown error type `Missing`"));
    }

    #[test]
    fn test_path_placeholder_must_match_param() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"

            [[services.operations]]
            name = "fetch"
            method = "GET"
            path = "files/{id}"
            returns = "File"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("placeholder `{id}`"));
    }

    #[test]
    fn test_path_param_must_match_placeholder() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"

            [[services.operations]]
            name = "fetch"
            method = "GET"
            path = "files"
            returns = "File"

            [[services.operations.params]]
            name = "id"
            type = "u64"
            role = { path = "id" }
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("no `{id}` placeholder"));
    }

    #[test]
    fn test_two_body_params_fatal() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "E"
            default = true

            [[services]]
            name = "Svc"

            [[services.operations]]
            name = "op"
            method = "POST"
            path = "op"

            [[services.operations.params]]
            name = "a"
            type = "A"
            role = "body"

            [[services.operations.params]]
            name = "b"
            type = "B"
            role = "body"
            "#,
        )
        .unwrap_err();
        assert!(err.to_string().contains("more than one body parameter"));
    }

    #[test]
    fn test_invalid_rust_type_fatal() {
        let err = resolve(
            r#"
            version = 1

            [[errors]]
            name = "E"
            type = "not a type!!"
            default = true

            [[services]]
            name = "Svc"
            "#,
        )
        .unwrap_err();
        assert!(matches!(err, Error::InvalidErrorType { .. }));
    }

    #[test]
    fn test_service_identity_is_by_name() {
        let left = ServiceMetadata {
            name: "Svc".to_string(),
            error_type: "A".to_string(),
            base_url: None,
            boxing: None,
            operations: Vec::new(),
        };
        let right = ServiceMetadata {
            name: "Svc".to_string(),
            error_type: "B".to_string(),
            base_url: Some("https://x.example.com/".to_string()),
            boxing: Some(Boxing::Boxed),
            operations: Vec::new(),
        };
        assert_eq!(left, right);

        let mut set = HashSet::new();
        set.insert(left);
        assert!(set.contains(&right));
    }

    #[test]
    fn test_path_placeholder_scanner() {
        assert_eq!(path_placeholders("files"), Vec::<String>::new());
        assert_eq!(path_placeholders("files/{id}"), vec!["id".to_string()]);
        assert_eq!(
            path_placeholders("{a}/x/{b}"),
            vec!["a".to_string(), "b".to_string()]
        );
    }

    #[test]
    fn test_http_method_parse_and_display() {
        assert_eq!(HttpMethod::parse("GET"), Some(HttpMethod::Get));
        assert_eq!(HttpMethod::parse("get"), None);
        assert_eq!(HttpMethod::Delete.to_string(), "DELETE");
    }
}
