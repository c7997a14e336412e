//! Integration tests for the generate and check workflows.

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;
use typewire_cli::commands::{check, generate};

const SCHEMA: &str = r#"
version = 1
name = "Shop"

[[errors]]
name = "DefaultError"
type = "crate::dto::DefaultError"
default = true

[[services]]
name = "AuthorisationService"
base_url = "https://id.example.com/"

[[services.operations]]
name = "sign_in"
method = "POST"
path = "signIn"
returns = "crate::dto::User"

[[services.operations.params]]
name = "body"
type = "&crate::dto::SignInData"
role = "body"

[[services.operations]]
name = "sign_out"
method = "POST"
path = "signOut"

[[services]]
name = "ProductService"

[[services.operations]]
name = "product"
method = "GET"
path = "products/{id}"
returns = "crate::dto::Product"

[[services.operations.params]]
name = "id"
type = "u64"
role = { path = "id" }
"#;

/// Writes the fixture schema into a fresh temp dir.
fn schema_in_tempdir() -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("api.toml");
    fs::write(&path, SCHEMA).unwrap();
    (dir, path)
}

/// Tests the full generate workflow against a realistic schema.
#[test]
fn test_generate_writes_complete_module() {
    let (dir, schema) = schema_in_tempdir();
    let out = dir.path().join("src").join("generated");

    generate::run(&schema, &out).unwrap();

    for name in ["raw.rs", "services.rs", "client.rs", "mod.rs"] {
        let content = fs::read_to_string(out.join(name)).unwrap();
        assert!(
            content.starts_with("// @generated by typewire"),
            "{name} lacks the generated header"
        );
    }

    let raw = fs::read_to_string(out.join("raw.rs")).unwrap();
    assert!(raw.contains(".call(Method::POST, \"https://id.example.com/signIn\")"));
    assert!(raw.contains(".call(Method::GET, \"products/{id}\")"));

    let services = fs::read_to_string(out.join("services.rs")).unwrap();
    assert!(services.contains("impl BoundService for ProductService"));
    assert!(services.contains("pub async fn sign_out_safe"));

    let client = fs::read_to_string(out.join("client.rs")).unwrap();
    assert!(client.contains("pub struct ShopClient"));
}

/// Tests that generation into a nested directory creates the parents.
#[test]
fn test_generate_creates_nested_output_directory() {
    let (dir, schema) = schema_in_tempdir();
    let out = dir.path().join("deeply").join("nested").join("generated");

    generate::run(&schema, &out).unwrap();

    assert!(out.join("mod.rs").is_file());
}

/// Tests that check accepts the schema generate accepts.
#[test]
fn test_check_accepts_generated_schema() {
    let (_dir, schema) = schema_in_tempdir();

    assert!(check::run(&schema).is_ok());
}

/// Tests that both commands reject malformed schema text the same way.
#[test]
fn test_generate_and_check_reject_malformed_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("api.toml");
    fs::write(&path, "not valid toml [[").unwrap();

    assert!(check::run(&path).is_err());
    assert!(generate::run(&path, &dir.path().join("out")).is_err());
    assert!(!dir.path().join("out").exists());
}
