//! Validator settings.
//!
//! Settings are immutable for the lifetime of a validator and never change
//! the meaning of a keyword, only the engine's resource limits and whether
//! optional checks run.

use serde::{Deserialize, Serialize};

/// Default recursion limit for schema/instance nesting.
pub const DEFAULT_MAX_DEPTH: usize = 64;

/// Largest accepted `max_depth`. Deeper limits would let the recursion
/// itself exhaust the thread stack before the guard trips.
pub const MAX_ALLOWED_DEPTH: usize = 256;

/// Tunables for `SchemaValidator`.
///
/// Deserialized from TOML with kebab-case keys; every field has a default,
/// so an empty document yields `ValidatorSettings::default()`.
///
/// ```toml
/// max-depth = 32
/// validate-formats = false
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case", deny_unknown_fields)]
pub struct ValidatorSettings {
    /// Maximum recursion depth, at most `MAX_ALLOWED_DEPTH`. Exceeding it is
    /// reported as a validation error at the offending path.
    pub max_depth: usize,

    /// When false, the `format` keyword is ignored entirely.
    pub validate_formats: bool,
}

impl Default for ValidatorSettings {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            validate_formats: true,
        }
    }
}
