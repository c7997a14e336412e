//! Helpers shared by the subcommands.

use anyhow::{Context, Result};
use std::path::Path;
use typewire_core::{ApiMetadata, ApiSchema};

/// Loads a schema file and runs the full validation pass.
pub fn load_api(path: &Path) -> Result<ApiMetadata> {
    let schema = ApiSchema::from_path(path)
        .with_context(|| format!("failed to load schema `{}`", path.display()))?;
    let api = ApiMetadata::resolve(&schema)
        .with_context(|| format!("schema `{}` failed validation", path.display()))?;
    Ok(api)
}
