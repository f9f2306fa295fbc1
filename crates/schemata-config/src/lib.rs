//! # schemata-config
//!
//! TOML-driven settings for the schemata validator.
//!
//! ## Overview
//!
//! This crate provides [`SettingsLoader`], which turns a TOML document into
//! a checked [`ValidatorSettings`](schemata_contracts::ValidatorSettings).
//! Every key is optional; an empty file yields the defaults.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use std::path::Path;
//! use schemata_config::SettingsLoader;
//! use schemata_verify::SchemaValidator;
//!
//! let settings = SettingsLoader::from_file(Path::new("schemata.toml"))?;
//! let validator = SchemaValidator::with_settings(settings);
//! ```
//!
//! ## Keys
//!
//! | Key | Default | Meaning |
//! |-----|---------|---------|
//! | `max-depth` | 64 | recursion limit (1 to 256); deeper nesting is reported as an error |
//! | `validate-formats` | true | enforce recognized `format` values |

pub mod loader;

pub use loader::SettingsLoader;

// ── Tests ─────────────────────────────────────────────────────────────────────
