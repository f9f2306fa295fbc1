//! schemata: validate JSON documents against a JSON Schema.
//!
//! Usage:
//!   schemata validate --schema order.schema.json order-1.json order-2.json
//!   schemata validate --schema order.schema.json --config schemata.toml --json order-1.json
//!   schemata show-config --config schemata.toml
//!
//! Exit status is 0 when every instance is valid, 1 when any instance is
//! invalid, and 2 when a file cannot be read or parsed.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use schemata_config::SettingsLoader;
use schemata_contracts::{
    error::{SchemataError, SchemataResult},
    result::ValidationResult,
};
use schemata_core::traits::Validator;
use schemata_verify::SchemaValidator;

// ── CLI definition ────────────────────────────────────────────────────────────

/// schemata: recursive JSON Schema validation.
#[derive(Parser)]
#[command(
    name = "schemata",
    about = "Validate JSON documents against a JSON Schema",
    long_about = "Validates one or more JSON instance files against a JSON Schema file.\n\
                  Supports type, enum, const, object, array, string, numeric, and\n\
                  composite (allOf/anyOf/oneOf/not) keywords. $ref is not resolved."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate instance files against a schema file.
    Validate {
        /// Path to the JSON Schema document.
        #[arg(short, long)]
        schema: PathBuf,

        /// Optional TOML settings file.
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print a JSON report instead of plain text.
        #[arg(long)]
        json: bool,

        /// Instance documents to validate.
        #[arg(required = true)]
        instances: Vec<PathBuf>,
    },
    /// Print the effective settings.
    ShowConfig {
        /// Optional TOML settings file.
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> ExitCode {
    // Initialize structured logging.  Set RUST_LOG=debug for verbose output.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Validate {
            schema,
            config,
            json,
            instances,
        } => run_validate(&schema, config.as_deref(), json, &instances),
        Command::ShowConfig { config } => run_show_config(config.as_deref()),
    };

    match outcome {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("schemata: {}", e);
            ExitCode::from(2)
        }
    }
}

// ── Commands ──────────────────────────────────────────────────────────────────

/// Returns `Ok(true)` when every instance is valid.
fn run_validate(
    schema_path: &Path,
    config: Option<&Path>,
    as_json: bool,
    instance_paths: &[PathBuf],
) -> SchemataResult<bool> {
    let settings = SettingsLoader::load_or_default(config)?;
    let validator = SchemaValidator::with_settings(settings);
    let schema = read_document(schema_path)?;

    let mut all_valid = true;
    let mut report = Vec::with_capacity(instance_paths.len());

    for path in instance_paths {
        let instance = read_document(path)?;
        let result = validator.validate_checked(Some(&schema), Some(&instance))?;
        info!(
            instance = %path.display(),
            valid = result.is_valid(),
            error_count = result.errors().len(),
            "instance validated"
        );
        all_valid &= result.is_valid();

        if as_json {
            report.push(json!({ "instance": path.display().to_string(), "result": result }));
        } else {
            print_result(path, &result);
        }
    }

    if as_json {
        let rendered = serde_json::to_string_pretty(&Value::Array(report)).map_err(|e| {
            SchemataError::DocumentError {
                reason: format!("failed to render report: {}", e),
            }
        })?;
        println!("{}", rendered);
    }

    Ok(all_valid)
}

fn run_show_config(config: Option<&Path>) -> SchemataResult<bool> {
    let settings = SettingsLoader::load_or_default(config)?;
    println!("max-depth        = {}", settings.max_depth);
    println!("validate-formats = {}", settings.validate_formats);
    Ok(true)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn read_document(path: &Path) -> SchemataResult<Value> {
    debug!(path = %path.display(), "reading document");
    let contents = std::fs::read_to_string(path).map_err(|e| SchemataError::DocumentError {
        reason: format!("failed to read '{}': {}", path.display(), e),
    })?;
    serde_json::from_str(&contents).map_err(|e| SchemataError::DocumentError {
        reason: format!("failed to parse '{}' as JSON: {}", path.display(), e),
    })
}

fn print_result(path: &Path, result: &ValidationResult) {
    if result.is_valid() {
        println!("{}: VALID", path.display());
        return;
    }
    println!(
        "{}: INVALID ({} error{})",
        path.display(),
        result.errors().len(),
        if result.errors().len() == 1 { "" } else { "s" }
    );
    for error in result.errors() {
        println!("  - {}", error);
    }
}
