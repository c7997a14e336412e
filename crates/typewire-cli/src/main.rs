//! Typewire CLI.
//!
//! Command-line interface for generating typed HTTP client modules from
//! schema files and validating schemas without generating.
//!
//! # Architecture
//!
//! The CLI is organized around subcommands:
//! - `generate` - Generate a client module from a schema file
//! - `check` - Validate a schema file without writing output
//! - `completions` - Generate shell completions
//!
//! # Examples
//!
//! ```bash
//! # Generate a client module
//! typewire generate api.toml --out src/generated
//!
//! # Validate a schema
//! typewire check api.toml
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use typewire_cli::commands;

/// Typewire - typed HTTP client generation from schema files.
///
/// Turns a TOML description of remote services into a Rust module of typed
/// wrapper calls backed by the typewire runtime.
#[derive(Parser, Debug)]
#[command(name = "typewire")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Available CLI subcommands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate a client module from a schema file.
    ///
    /// Parses and validates the schema, then writes the generated module
    /// (`raw.rs`, `services.rs`, `client.rs`, `mod.rs`) into the output
    /// directory. Existing files are overwritten, so the directory should
    /// hold nothing but generated output.
    ///
    /// # Examples
    ///
    /// ```bash
    /// # Write the module next to your sources
    /// typewire generate api.toml --out src/generated
    ///
    /// # Regenerate after a schema change
    /// typewire generate api.toml -o src/generated
    /// ```
    Generate {
        /// Schema file describing the API
        schema: PathBuf,

        /// Directory the generated module is written to
        #[arg(short, long, value_name = "DIR")]
        out: PathBuf,
    },

    /// Validate a schema file without generating code.
    ///
    /// Runs the full validation pass (version gate, type well-formedness,
    /// path placeholders, boxing markers) and prints a summary of the
    /// services and operations the schema declares.
    ///
    /// # Examples
    ///
    /// ```bash
    /// typewire check api.toml
    /// ```
    Check {
        /// Schema file describing the API
        schema: PathBuf,
    },

    /// Generate shell completions.
    ///
    /// Generates completion scripts for various shells that can be
    /// sourced or saved to enable tab completion for this CLI.
    Completions {
        /// Target shell for completion generation
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);

    execute_command(cli.command)
}

/// Initializes logging infrastructure.
///
/// Sets up tracing with appropriate log levels based on the verbosity flag,
/// writing to stderr so generated output and summaries own stdout.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Routes the parsed subcommand to its handler.
fn execute_command(command: Commands) -> Result<()> {
    match command {
        Commands::Generate { schema, out } => commands::generate::run(&schema, &out),
        Commands::Check { schema } => commands::check::run(&schema),
        Commands::Completions { shell } => {
            use clap::CommandFactory;
            let mut cmd = Cli::command();
            commands::completions::run(shell, &mut cmd);
            Ok(())
        }
    }
}
