//! # schemata-contracts
//!
//! Shared types for the schemata JSON Schema validator.
//!
//! All crates in the workspace import from here. No validation logic lives in
//! this crate, only data definitions, settings, and error types.

pub mod error;
pub mod result;
pub mod settings;

pub use error::{SchemataError, SchemataResult};
pub use result::ValidationResult;
pub use settings::ValidatorSettings;
