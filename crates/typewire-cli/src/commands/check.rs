//! Schema validation command.
//!
//! Runs the full extraction pass without generating code and prints what
//! the schema declares.

use anyhow::Result;
use std::path::Path;
use tracing::info;

use super::common;

/// Runs the check command.
///
/// Prints a per-service summary of the operations a valid schema declares;
/// void operations show `()` as their return type.
///
/// # Errors
///
/// Returns an error if the schema fails to load or validate.
pub fn run(schema: &Path) -> Result<()> {
    info!("checking schema `{}`", schema.display());

    let api = common::load_api(schema)?;

    println!(
        "schema ok: `{}` ({} services, {} operations)",
        api.name(),
        api.services().len(),
        api.operation_count()
    );
    for service in api.services() {
        println!("  {} -> {}", service.name(), service.error_type());
        for op in service.operations() {
            println!(
                "    {} {} {} -> {}",
                op.name,
                op.method.as_str(),
                op.path,
                op.returns.as_deref().unwrap_or("()")
            );
        }
    }
    Ok(())
}
