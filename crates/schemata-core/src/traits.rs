//! The validator trust boundary.
//!
//! Surrounding tooling (parsers, CLIs, pipelines) talks to validation only
//! through `Validator`. Implementations must be deterministic and free of
//! I/O: the same schema and instance always produce the same result.

use serde_json::Value;

use schemata_contracts::{
    error::{SchemataError, SchemataResult},
    result::ValidationResult,
};

/// Checks a parsed instance tree against a parsed schema tree.
pub trait Validator: Send + Sync {
    /// Validate `instance` against `schema`.
    ///
    /// Never fails: every finding, including a malformed schema or an
    /// exceeded depth limit, is recorded in the returned result.
    fn validate(&self, schema: &Value, instance: &Value) -> ValidationResult;

    /// Validate with both arguments checked for presence first.
    ///
    /// An absent argument is a caller-contract violation, reported as
    /// `SchemataError::MissingArgument` before any validation runs.
    fn validate_checked(
        &self,
        schema: Option<&Value>,
        instance: Option<&Value>,
    ) -> SchemataResult<ValidationResult> {
        let schema = schema.ok_or_else(|| SchemataError::missing("schema"))?;
        let instance = instance.ok_or_else(|| SchemataError::missing("instance"))?;
        Ok(self.validate(schema, instance))
    }
}
