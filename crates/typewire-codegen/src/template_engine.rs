//! Handlebars wrapper with the generated-module templates registered.
//!
//! Strict mode is always on: a context missing a field a template touches
//! is a generation failure, not a silently empty splice.
//!
//! # Examples
//!
//! ```
//! use typewire_codegen::template_engine::TemplateEngine;
//! use serde_json::json;
//!
//! let engine = TemplateEngine::new().unwrap();
//! let context = json!({
//!     "api_name": "Shop",
//!     "client_name": "ShopClient",
//!     "services_reexport": "pub use services::ProductService;",
//! });
//! let rendered = engine.render("mod", &context).unwrap();
//! assert!(rendered.contains("ShopClient"));
//! ```

use handlebars::Handlebars;
use serde::Serialize;
use typewire_core::{Error, Result};

/// Registered template names paired with their embedded sources.
const TEMPLATES: [(&str, &str); 4] = [
    ("raw", include_str!("../templates/raw.rs.hbs")),
    ("services", include_str!("../templates/services.rs.hbs")),
    ("client", include_str!("../templates/client.rs.hbs")),
    ("mod", include_str!("../templates/mod.rs.hbs")),
];

/// Template engine for the generated module.
///
/// Wraps Handlebars with the four built-in file templates registered and
/// strict mode enabled. `Send + Sync`, so one engine can serve parallel
/// generation runs.
///
/// # Examples
///
/// ```
/// use typewire_codegen::template_engine::TemplateEngine;
///
/// let engine = TemplateEngine::new().unwrap();
/// ```
#[derive(Debug)]
pub struct TemplateEngine<'a> {
    handlebars: Handlebars<'a>,
}

impl<'a> TemplateEngine<'a> {
    /// Creates an engine with the built-in templates registered.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] if a built-in template fails to
    /// register, which indicates a packaging defect rather than bad input.
    pub fn new() -> Result<Self> {
        let mut handlebars = Handlebars::new();

        // Strict mode: fail on missing context fields
        handlebars.set_strict_mode(true);

        for (name, source) in TEMPLATES {
            handlebars
                .register_template_string(name, source)
                .map_err(|e| Error::Generation {
                    message: format!("failed to register built-in template `{name}`"),
                    source: Some(Box::new(e)),
                })?;
        }

        Ok(Self { handlebars })
    }

    /// Renders a registered template with the given context.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] if the template name is unknown, the
    /// context cannot be serialized, or rendering fails.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::template_engine::TemplateEngine;
    /// use serde_json::json;
    ///
    /// let engine = TemplateEngine::new().unwrap();
    /// let context = json!({
    ///     "api_name": "Shop",
    ///     "client_name": "ShopClient",
    ///     "services_reexport": "pub use services::ProductService;",
    /// });
    /// assert!(engine.render("mod", &context).is_ok());
    /// ```
    pub fn render<T: Serialize>(&self, template_name: &str, context: &T) -> Result<String> {
        self.handlebars
            .render(template_name, context)
            .map_err(|e| Error::Generation {
                message: format!("failed to render template `{template_name}`"),
                source: Some(Box::new(e)),
            })
    }

    /// Registers an additional template at runtime.
    ///
    /// Registering under a built-in name replaces that template for the
    /// lifetime of this engine.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Generation`] if the template string does not parse.
    ///
    /// # Examples
    ///
    /// ```
    /// use typewire_codegen::template_engine::TemplateEngine;
    /// use serde_json::json;
    ///
    /// let mut engine = TemplateEngine::new().unwrap();
    /// engine.register_template_string("banner", "// client for {{name}}").unwrap();
    ///
    /// let rendered = engine.render("banner", &json!({"name": "Shop"})).unwrap();
    /// assert_eq!(rendered, "// client for Shop");
    /// ```
    pub fn register_template_string(&mut self, name: &str, template: &str) -> Result<()> {
        self.handlebars
            .register_template_string(name, template)
            .map_err(|e| Error::Generation {
                message: format!("failed to register template `{name}`"),
                source: Some(Box::new(e)),
            })
    }
}
