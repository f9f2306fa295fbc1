//! # schemata-verify
//!
//! JSON Schema validation for already-parsed `serde_json` trees.
//!
//! This crate provides [`engine::SchemaValidator`], which implements the
//! [`schemata_core::traits::Validator`] trait. It supports a practical subset
//! of JSON Schema:
//!
//! - **Composite**: `allOf`, `anyOf`, `oneOf`, `not`
//! - **Generic**: `type`, `enum`, `const`
//! - **Object**: `required`, `properties`, `additionalProperties`,
//!   `minProperties`, `maxProperties`
//! - **Array**: `minItems`, `maxItems`, `uniqueItems`, `items`
//! - **String**: `minLength`, `maxLength`, `pattern`, `format`
//! - **Number**: `minimum`, `maximum`, `exclusiveMinimum`,
//!   `exclusiveMaximum`, `multipleOf`, all compared as exact decimals
//!
//! `$ref` is not resolved. Unknown keywords, and known keywords whose value
//! has the wrong JSON kind, are ignored.
//!
//! ## Quick start
//!
//! ```rust,ignore
//! use serde_json::json;
//! use schemata_verify::validate;
//!
//! let result = validate(&json!({ "required": ["id"] }), &json!({}));
//! assert!(!result.is_valid());
//! assert_eq!(result.errors()[0], "(root): required: missing property 'id'");
//! ```

pub mod engine;
pub mod format;
pub mod numeric;

pub use engine::SchemaValidator;

use schemata_contracts::result::ValidationResult;
use schemata_core::traits::Validator;
use serde_json::Value;

/// Validate `instance` against `schema` with default settings.
pub fn validate(schema: &Value, instance: &Value) -> ValidationResult {
    SchemaValidator::new().validate(schema, instance)
}
