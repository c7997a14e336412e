//! Generated-module synthesis from resolved metadata.
//!
//! [`CodeGenerator`] turns an [`ApiMetadata`] into four Rust source files:
//! `raw.rs` (unclassified calling types), `services.rs` (typed wrappers),
//! `client.rs` (the facade over the endpoint provider), and `mod.rs` (the
//! module entry point). Output follows schema order, so regeneration from
//! an unchanged schema is byte-identical.

use crate::context::{
    ClientContext, ModContext, RawModuleContext, RawOperationContext, RawServiceContext,
    ServiceHandleContext, ServicesModuleContext, WrapperOperationContext, WrapperServiceContext,
};
use crate::naming;
use crate::template_engine::TemplateEngine;
use crate::types::{GeneratedCode, GeneratedFile};
use tracing::{debug, info};
use typewire_core::{ApiMetadata, Boxing, OperationMetadata, ParamRole, Result, ServiceMetadata};

/// Generator for typed client modules.
///
/// `Send + Sync`; one generator can serve any number of schemas.
///
/// # Examples
///
/// ```
/// use typewire_codegen::CodeGenerator;
///
/// let generator = CodeGenerator::new().unwrap();
/// ```
#[derive(Debug)]
pub struct CodeGenerator<'a> {
    engine: TemplateEngine<'a>,
}

impl<'a> CodeGenerator<'a> {
    /// Creates a generator with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`](typewire_core::Error::Generation) if a
    /// built-in template fails to register.
    pub fn new() -> Result<Self> {
        let engine = TemplateEngine::new()?;
        Ok(Self { engine })
    }

    /// Renders the full generated module for one resolved API.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`](typewire_core::Error::Generation) if
    /// template rendering fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::CodeGenerator;
    /// use typewire_core::{ApiMetadata, ApiSchema};
    ///
    /// # fn main() -> typewire_core::Result<()> {
    /// let schema = ApiSchema::from_toml_str(
    ///     r#"
    ///     version = 1
    ///     name = "Shop"
    ///
    ///     [[errors]]
    ///     name = "DefaultError"
    ///     type = "crate::dto::DefaultError"
    ///     default = true
    ///
    ///     [[services]]
    ///     name = "ProductService"
    ///
    ///     [[services.operations]]
    ///     name = "product"
    ///     method = "GET"
    ///     path = "products/{id}"
    ///     returns = "crate::dto::Product"
    ///
    ///     [[services.operations.params]]
    ///     name = "id"
    ///     type = "u64"
    ///     role = { path = "id" }
    ///     "#,
    /// )?;
    /// let api = ApiMetadata::resolve(&schema)?;
    ///
    /// let code = CodeGenerator::new()?.generate(&api)?;
    /// assert_eq!(code.file_count(), 4);
    /// assert!(code.file("client.rs").unwrap().content().contains("ShopClient"));
    /// # Ok(())
    /// # }
    /// ```
    pub fn generate(&self, api: &ApiMetadata) -> Result<GeneratedCode> {
        info!(
            "generating `{}` client ({} services, {} operations)",
            api.name(),
            api.services().len(),
            api.operation_count()
        );

        let mut code = GeneratedCode::new();

        let raw = Self::create_raw_context(api);
        code.add_file(GeneratedFile {
            path: "raw.rs".to_string(),
            content: self.engine.render("raw", &raw)?,
        });
        debug!("emitted raw.rs");

        let services = Self::create_services_context(api);
        code.add_file(GeneratedFile {
            path: "services.rs".to_string(),
            content: self.engine.render("services", &services)?,
        });
        debug!("emitted services.rs");

        let client = Self::create_client_context(api);
        code.add_file(GeneratedFile {
            path: "client.rs".to_string(),
            content: self.engine.render("client", &client)?,
        });
        debug!("emitted client.rs");

        let module = Self::create_mod_context(api);
        code.add_file(GeneratedFile {
            path: "mod.rs".to_string(),
            content: self.engine.render("mod", &module)?,
        });
        debug!("emitted mod.rs");

        info!("emitted {} files for `{}`", code.file_count(), api.name());
        Ok(code)
    }

    /// Builds the `raw.rs` context.
    fn create_raw_context(api: &ApiMetadata) -> RawModuleContext {
        let services = api
            .services()
            .iter()
            .map(|service| RawServiceContext {
                service_name: service.name().to_string(),
                raw_name: naming::raw_type_name(service.name()),
                operations: service
                    .operations()
                    .iter()
                    .map(|op| RawOperationContext {
                        name: op.name.clone(),
                        args: argument_list(op),
                        return_type: op.returns.clone().unwrap_or_else(|| "()".to_string()),
                        method: op.method.as_str().to_string(),
                        path: op.path.clone(),
                        builder_lines: builder_lines(op),
                        finisher: finisher(op),
                    })
                    .collect(),
            })
            .collect();

        RawModuleContext {
            imports: raw_imports(api),
            services,
        }
    }

    /// Builds the `services.rs` context.
    fn create_services_context(api: &ApiMetadata) -> ServicesModuleContext {
        let services = api
            .services()
            .iter()
            .map(|service| WrapperServiceContext {
                name: service.name().to_string(),
                raw_name: naming::raw_type_name(service.name()),
                error_type: service.error_type().to_string(),
                operations: service
                    .operations()
                    .iter()
                    .map(|op| WrapperOperationContext {
                        name: op.name.clone(),
                        method: op.method.as_str().to_string(),
                        path: op.path.clone(),
                        args: argument_list(op),
                        forward_args: forward_list(op),
                        return_type: wrapper_return(op, service.error_type()),
                        classify_fn: if op.is_void() { "unit_call" } else { "data_call" }
                            .to_string(),
                        error_type: service.error_type().to_string(),
                        safe_sibling: op.is_void(),
                    })
                    .collect(),
            })
            .collect();

        ServicesModuleContext {
            imports: services_imports(api),
            services,
        }
    }

    /// Builds the `client.rs` context.
    fn create_client_context(api: &ApiMetadata) -> ClientContext {
        let services = api
            .services()
            .iter()
            .map(|service| ServiceHandleContext {
                name: service.name().to_string(),
                accessor: naming::to_snake_case(service.name()),
            })
            .collect();

        ClientContext {
            api_name: api.name().to_string(),
            client_name: naming::client_type_name(api.name()),
            imports: client_imports(api),
            services,
        }
    }

    /// Builds the `mod.rs` context.
    fn create_mod_context(api: &ApiMetadata) -> ModContext {
        let names = api
            .services()
            .iter()
            .map(|service| service.name().to_string())
            .collect();

        ModContext {
            api_name: api.name().to_string(),
            client_name: naming::client_type_name(api.name()),
            services_reexport: format!("pub use services::{};", use_tree(names)),
        }
    }
}

/// Iterates every operation across all services.
fn all_operations(api: &ApiMetadata) -> impl Iterator<Item = &OperationMetadata> {
    api.services().iter().flat_map(ServiceMetadata::operations)
}

/// Argument list after `&self`, leading comma included.
fn argument_list(op: &OperationMetadata) -> String {
    op.params
        .iter()
        .map(|param| format!(", {}: {}", param.name, param.ty))
        .collect()
}

/// Argument names forwarded from wrapper to raw call.
fn forward_list(op: &OperationMetadata) -> String {
    op.params
        .iter()
        .map(|param| param.name.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Builder calls between `call` and the finisher, in parameter order.
fn builder_lines(op: &OperationMetadata) -> Vec<String> {
    op.params
        .iter()
        .map(|param| match &param.role {
            ParamRole::Body => format!(".json_body({})", param.name),
            ParamRole::Url => format!(".url({})", param.name),
            ParamRole::Query(key) => format!(".query(\"{key}\", {})", param.name),
            ParamRole::Path(segment) => format!(".path_param(\"{segment}\", {})", param.name),
            ParamRole::Header(header) => format!(".header(\"{header}\", {})", param.name),
        })
        .collect()
}

/// Terminal builder call for an operation.
fn finisher(op: &OperationMetadata) -> String {
    if op.is_void() {
        ".send_unit()".to_string()
    } else {
        format!(".send_json({})", marker_expr(op.boxing))
    }
}

/// Source text of the merged boxing marker.
const fn marker_expr(boxing: Option<Boxing>) -> &'static str {
    match boxing {
        Some(Boxing::Boxed) => "Some(Boxing::Boxed)",
        Some(Boxing::NotBoxed) => "Some(Boxing::NotBoxed)",
        None => "None",
    }
}

/// Payload type inside the wrapper's `Result`.
fn wrapper_return(op: &OperationMetadata, error_type: &str) -> String {
    match &op.returns {
        Some(ty) => format!("DataResponse<{ty}, {error_type}>"),
        None => format!("UnitResponse<{error_type}>"),
    }
}

/// Sorted `use`-tree body; single items skip the braces.
fn use_tree(mut items: Vec<String>) -> String {
    items.sort();
    if let [single] = items.as_slice() {
        single.clone()
    } else {
        format!("{{{}}}", items.join(", "))
    }
}

/// Import lines for `raw.rs`, trimmed to what the file references.
fn raw_imports(api: &ApiMetadata) -> Vec<String> {
    let has_operations = all_operations(api).next().is_some();
    let uses_boxing = all_operations(api).any(|op| !op.is_void() && op.boxing.is_some());

    let mut items = vec!["Transport".to_string()];
    if has_operations {
        items.push("CallError".to_string());
        items.push("Method".to_string());
    }
    if uses_boxing {
        items.push("Boxing".to_string());
    }

    vec![
        "use std::sync::Arc;".to_string(),
        format!("use typewire_runtime::{};", use_tree(items)),
    ]
}

/// Import lines for `services.rs`, trimmed to what the file references.
fn services_imports(api: &ApiMetadata) -> Vec<String> {
    let has_value = all_operations(api).any(|op| !op.is_void());
    let has_void = all_operations(api).any(OperationMetadata::is_void);

    let mut items = vec!["BoundService".to_string(), "Transport".to_string()];
    if has_value || has_void {
        items.push("ParseFailure".to_string());
    }
    if has_value {
        items.push("DataResponse".to_string());
        items.push("data_call".to_string());
    }
    if has_void {
        items.push("UnitResponse".to_string());
        items.push("unit_call".to_string());
        items.push("safe_unit_call".to_string());
    }

    let raw_names = api
        .services()
        .iter()
        .map(|service| naming::raw_type_name(service.name()))
        .collect();

    vec![
        "use std::sync::Arc;".to_string(),
        format!("use typewire_runtime::{};", use_tree(items)),
        format!("use super::raw::{};", use_tree(raw_names)),
    ]
}

/// Import lines for `client.rs`.
fn client_imports(api: &ApiMetadata) -> Vec<String> {
    let names = api
        .services()
        .iter()
        .map(|service| service.name().to_string())
        .collect();

    vec![
        "use std::sync::Arc;".to_string(),
        "use typewire_runtime::{ClientOptions, ClientProvider, Url, mpsc};".to_string(),
        format!("use super::services::{};", use_tree(names)),
    ]
}
