//! Client module generation command.
//!
//! Loads a schema, synthesizes the client module, and writes the generated
//! files into the output directory.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;
use typewire_codegen::CodeGenerator;

use super::common;

/// Runs the generate command.
///
/// Validation happens before anything touches the filesystem, so a rejected
/// schema leaves the output directory untouched.
///
/// # Errors
///
/// Returns an error if the schema fails to load or validate, if generation
/// fails, or if the output directory or a generated file cannot be written.
pub fn run(schema: &Path, out: &Path) -> Result<()> {
    info!("generating client from `{}`", schema.display());

    let api = common::load_api(schema)?;
    let code = CodeGenerator::new()?.generate(&api)?;

    fs::create_dir_all(out)
        .with_context(|| format!("failed to create output directory `{}`", out.display()))?;
    for file in code.files() {
        let target = out.join(file.path());
        fs::write(&target, file.content())
            .with_context(|| format!("failed to write `{}`", target.display()))?;
        info!("wrote `{}`", target.display());
    }

    println!(
        "generated {} files for `{}` in {}",
        code.file_count(),
        api.name(),
        out.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEMA: &str = r#"
        version = 1
        name = "Ping"

        [[errors]]
        name = "DefaultError"
        type = "crate::dto::DefaultError"
        default = true

        [[services]]
        name = "PingService"

        [[services.operations]]
        name = "ping"
        method = "GET"
        path = "ping"
        returns = "crate::dto::Pong"

        [[services.operations]]
        name = "reset"
        method = "POST"
        path = "reset"
    "#;

    #[test]
    fn test_run_writes_generated_module() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("api.toml");
        fs::write(&schema, SCHEMA).unwrap();
        let out = dir.path().join("generated");

        run(&schema, &out).unwrap();

        for name in ["raw.rs", "services.rs", "client.rs", "mod.rs"] {
            assert!(out.join(name).is_file(), "{name} missing");
        }
        let module = fs::read_to_string(out.join("mod.rs")).unwrap();
        assert!(module.contains("pub use client::PingClient;"));
        assert!(module.contains("pub use services::PingService;"));
    }

    #[test]
    fn test_run_overwrites_previous_output() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("api.toml");
        fs::write(&schema, SCHEMA).unwrap();
        let out = dir.path().join("generated");

        run(&schema, &out).unwrap();
        fs::write(out.join("mod.rs"), "stale").unwrap();
        run(&schema, &out).unwrap();

        let module = fs::read_to_string(out.join("mod.rs")).unwrap();
        assert!(module.contains("pub use client::PingClient;"));
    }

    #[test]
    fn test_run_rejects_missing_schema() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("generated");

        let result = run(&dir.path().join("absent.toml"), &out);

        assert!(result.is_err());
        assert!(!out.exists(), "nothing should be written on failure");
    }

    #[test]
    fn test_run_rejects_invalid_schema_before_writing() {
        let dir = tempfile::tempdir().unwrap();
        let schema = dir.path().join("api.toml");
        // Unsupported version never reaches generation.
        fs::write(&schema, "version = 99\n").unwrap();
        let out = dir.path().join("generated");

        let result = run(&schema, &out);

        assert!(result.is_err());
        assert!(!out.exists(), "nothing should be written on failure");
    }
}
