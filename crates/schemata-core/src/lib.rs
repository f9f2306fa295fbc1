//! # schemata-core
//!
//! The building blocks every schemata validator shares.
//!
//! This crate provides:
//! - The `Validator` trait, the only entry point surrounding tooling uses
//! - `SchemaNode`, a keyword-accessor view over a borrowed schema value
//! - `InstancePath`, the immutable location used to qualify error messages
//!
//! ## Usage
//!
//! ```rust,ignore
//! use schemata_core::{traits::Validator, SchemaNode, InstancePath};
//! ```

pub mod node;
pub mod path;
pub mod traits;

pub use node::{JsonKind, SchemaNode, TypeName};
pub use path::InstancePath;
pub use traits::Validator;

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use schemata_contracts::{error::SchemataError, result::ValidationResult};

    use crate::{InstancePath, Validator};

    /// Accepts everything; used to exercise the trait's provided methods.
    struct AcceptAll;

    impl Validator for AcceptAll {
        fn validate(&self, _schema: &Value, _instance: &Value) -> ValidationResult {
            ValidationResult::new()
        }
    }

    // ── InstancePath ─────────────────────────────────────────────────────────

    #[test]
    fn test_root_path_is_empty() {
        let root = InstancePath::root();
        assert_eq!(root.as_str(), "");
        assert!(root.is_root());
        assert_eq!(root.to_string(), "(root)");
    }

    #[test]
    fn test_push_builds_slash_delimited_paths() {
        let path = InstancePath::root()
            .push_property("orders")
            .push_index(3)
            .push_property("sku");
        assert_eq!(path.as_str(), "/orders/3/sku");
        assert_eq!(path.to_string(), "/orders/3/sku");
    }

    #[test]
    fn test_push_leaves_parent_untouched() {
        let parent = InstancePath::root().push_property("a");
        let left = parent.push_property("b");
        let right = parent.push_index(0);

        assert_eq!(parent.as_str(), "/a");
        assert_eq!(left.as_str(), "/a/b");
        assert_eq!(right.as_str(), "/a/0");
    }

    // ── validate_checked ─────────────────────────────────────────────────────

    #[test]
    fn test_validate_checked_missing_schema() {
        let instance = json!(1);
        match AcceptAll.validate_checked(None, Some(&instance)) {
            Err(SchemataError::MissingArgument { name }) => assert_eq!(name, "schema"),
            other => panic!("expected MissingArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_checked_missing_instance() {
        let schema = json!({});
        match AcceptAll.validate_checked(Some(&schema), None) {
            Err(SchemataError::MissingArgument { name }) => assert_eq!(name, "instance"),
            other => panic!("expected MissingArgument, got {:?}", other),
        }
    }

    #[test]
    fn test_validate_checked_present_arguments_delegate() {
        let schema = json!({});
        let instance = json!(null);
        let result = AcceptAll
            .validate_checked(Some(&schema), Some(&instance))
            .unwrap();
        assert!(result.is_valid());
    }
}
