//! The accumulating outcome of one validation run.
//!
//! A `ValidationResult` starts valid and becomes invalid only when an error
//! is appended. There is no way to clear errors or flip it back, so the
//! `is_valid() == errors().is_empty()` invariant holds for every value ever
//! observed by a caller.

use serde::Serialize;

/// Validity flag plus the ordered, path-qualified error messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    is_valid: bool,
    errors: Vec<String>,
}

impl ValidationResult {
    /// A fresh, valid result with no errors.
    pub fn new() -> Self {
        Self {
            is_valid: true,
            errors: Vec::new(),
        }
    }

    /// True only while no error has been recorded.
    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    /// All errors in the order they were recorded.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Append one error and mark the result invalid.
    pub fn add_error(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
        self.is_valid = false;
    }

    /// Consume the result, returning its errors.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::new()
    }
}
