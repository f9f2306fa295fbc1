//! Recursive-descent JSON Schema validator.
//!
//! `SchemaValidator` implements the `Validator` trait from `schemata-core`.
//! Each schema node is evaluated in four phases:
//!
//! 1. **Composite**: `allOf`, `anyOf`, `oneOf`, `not`, each branch run
//!    against its own isolated `ValidationResult`.
//! 2. **Type**: a mismatch is recorded and ends evaluation of the node.
//! 3. **Enumeration**: `enum` and `const`, by minified-text equality.
//! 4. **Kind-specific**: object, array, string, or number keywords chosen by
//!    the instance's actual kind, whether or not the schema declares `type`.
//!
//! Findings accumulate in declaration order. The only hard stop is the depth
//! limit: exceeding it unwinds the whole call and records a single error on
//! the top-level result, so a pathological schema can never flip a `not`
//! branch into a pass.

use std::cell::RefCell;
use std::collections::HashMap;

use bigdecimal::{BigDecimal, Zero};
use regex::Regex;
use serde_json::{Map, Number, Value};
use tracing::{debug, trace, warn};

use schemata_contracts::{
    result::ValidationResult,
    settings::{ValidatorSettings, MAX_ALLOWED_DEPTH},
};
use schemata_core::{
    node::{JsonKind, SchemaNode, TypeName},
    path::InstancePath,
    traits::Validator,
};

use crate::format::Format;
use crate::numeric::{is_integral, is_multiple_of, to_decimal};

/// Raised when recursion passes `max_depth`; carries where it happened.
#[derive(Debug)]
struct DepthExceeded {
    path: InstancePath,
}

type Walk = Result<(), DepthExceeded>;

/// The schemata JSON Schema validator.
///
/// Holds only immutable settings, so one instance can be shared freely
/// across threads and reused for any number of calls.
#[derive(Debug, Clone, Default)]
pub struct SchemaValidator {
    settings: ValidatorSettings,
}

impl SchemaValidator {
    /// Create a validator with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a validator with explicit settings.
    ///
    /// A `max_depth` above `MAX_ALLOWED_DEPTH` is clamped to it.
    pub fn with_settings(mut settings: ValidatorSettings) -> Self {
        if settings.max_depth > MAX_ALLOWED_DEPTH {
            warn!(
                requested = settings.max_depth,
                max_depth = MAX_ALLOWED_DEPTH,
                "clamping max-depth"
            );
            settings.max_depth = MAX_ALLOWED_DEPTH;
        }
        Self { settings }
    }

    /// The effective settings, after clamping.
    pub fn settings(&self) -> &ValidatorSettings {
        &self.settings
    }
}

/// State for a single `validate` call.
struct Walker<'a> {
    settings: &'a ValidatorSettings,
    /// Compiled `pattern` keywords; `None` marks a pattern that failed to
    /// compile.
    patterns: RefCell<HashMap<String, Option<Regex>>>,
}

impl<'a> Walker<'a> {
    fn new(settings: &'a ValidatorSettings) -> Self {
        Self {
            settings,
            patterns: RefCell::new(HashMap::new()),
        }
    }

    fn regex(&self, pattern: &str, path: &InstancePath) -> Option<Regex> {
        if let Some(cached) = self.patterns.borrow().get(pattern) {
            return cached.clone();
        }
        let compiled = match Regex::new(pattern) {
            Ok(re) => Some(re),
            Err(e) => {
                warn!(%path, %pattern, error = %e, "ignoring invalid pattern");
                None
            }
        };
        self.patterns
            .borrow_mut()
            .insert(pattern.to_owned(), compiled.clone());
        compiled
    }

    // ── Recursion ─────────────────────────────────────────────────────────────

    fn validate_node(
        &self,
        schema: &Value,
        instance: &Value,
        path: &InstancePath,
        depth: usize,
        result: &mut ValidationResult,
    ) -> Walk {
        if depth > self.settings.max_depth {
            return Err(DepthExceeded { path: path.clone() });
        }

        let node = SchemaNode::new(schema);
        if let Some(accept) = node.as_boolean_schema() {
            if !accept {
                result.add_error(format!("{path}: false schema: no value is allowed"));
            }
            return Ok(());
        }
        if !schema.is_object() {
            return Ok(());
        }

        self.check_composites(&node, instance, path, depth, result)?;

        if !Self::check_type(&node, instance, path, result) {
            return Ok(());
        }

        check_enum(&node, instance, path, result);

        match instance {
            Value::Object(obj) => self.check_object(&node, obj, path, depth, result)?,
            Value::Array(items) => self.check_array(&node, items, path, depth, result)?,
            Value::String(s) => self.check_string(&node, s, path, result),
            Value::Number(n) => check_number(&node, n, path, result),
            Value::Bool(_) | Value::Null => {}
        }
        Ok(())
    }

    /// Evaluate `schema` against `instance` into a fresh result.
    fn isolated(
        &self,
        schema: &Value,
        instance: &Value,
        path: &InstancePath,
        depth: usize,
    ) -> Result<ValidationResult, DepthExceeded> {
        let mut sub = ValidationResult::new();
        self.validate_node(schema, instance, path, depth + 1, &mut sub)?;
        Ok(sub)
    }

    /// Run every subschema in `branches` in isolation, in declaration order.
    fn isolated_all(
        &self,
        branches: &[Value],
        instance: &Value,
        path: &InstancePath,
        depth: usize,
    ) -> Result<Vec<ValidationResult>, DepthExceeded> {
        branches
            .iter()
            .map(|branch| self.isolated(branch, instance, path, depth))
            .collect()
    }

    // ── Phase 1: composite keywords ───────────────────────────────────────────

    fn check_composites(
        &self,
        node: &SchemaNode<'_>,
        instance: &Value,
        path: &InstancePath,
        depth: usize,
        result: &mut ValidationResult,
    ) -> Walk {
        if let Some(branches) = node.all_of() {
            let outcomes = self.isolated_all(branches, instance, path, depth)?;
            for (index, outcome) in outcomes.iter().enumerate() {
                if !outcome.is_valid() {
                    result.add_error(format!(
                        "{path}: allOf[{index}]: {}",
                        outcome.errors().join("; ")
                    ));
                }
            }
        }

        if let Some(branches) = node.any_of() {
            let outcomes = self.isolated_all(branches, instance, path, depth)?;
            let matched = outcomes.iter().filter(|o| o.is_valid()).count();
            trace!(%path, branches = outcomes.len(), matched, "anyOf evaluated");
            if matched == 0 {
                result.add_error(format!(
                    "{path}: anyOf: instance matches none of the {} subschemas: {}",
                    outcomes.len(),
                    aggregate(&outcomes)
                ));
            }
        }

        if let Some(branches) = node.one_of() {
            let outcomes = self.isolated_all(branches, instance, path, depth)?;
            let matched: Vec<usize> = outcomes
                .iter()
                .enumerate()
                .filter(|(_, o)| o.is_valid())
                .map(|(index, _)| index)
                .collect();
            trace!(%path, branches = outcomes.len(), matched = matched.len(), "oneOf evaluated");
            if matched.len() != 1 {
                let mut message = format!(
                    "{path}: oneOf: expected exactly one subschema to match, but {} matched",
                    matched.len()
                );
                if matched.len() > 1 {
                    message.push_str(&format!(" (indices {matched:?})"));
                }
                let failures = aggregate(&outcomes);
                if !failures.is_empty() {
                    message.push_str(": ");
                    message.push_str(&failures);
                }
                result.add_error(message);
            }
        }

        if let Some(excluded) = node.not() {
            let outcome = self.isolated(excluded, instance, path, depth)?;
            if outcome.is_valid() {
                result.add_error(format!("{path}: not: instance matches excluded schema"));
            }
        }

        Ok(())
    }

    // ── Phase 2: type ─────────────────────────────────────────────────────────

    /// Returns false on a mismatch, which ends evaluation of this node.
    fn check_type(
        node: &SchemaNode<'_>,
        instance: &Value,
        path: &InstancePath,
        result: &mut ValidationResult,
    ) -> bool {
        let Some(expected) = node.type_names() else {
            return true;
        };
        if expected.iter().any(|name| type_matches(*name, instance)) {
            return true;
        }

        let names: Vec<&str> = expected.iter().map(|name| name.as_str()).collect();
        result.add_error(format!(
            "{path}: type: expected {}, found {}",
            names.join(" or "),
            JsonKind::of(instance)
        ));
        false
    }

    // ── Phase 4: kind-specific keywords ───────────────────────────────────────

    fn check_object(
        &self,
        node: &SchemaNode<'_>,
        obj: &Map<String, Value>,
        path: &InstancePath,
        depth: usize,
        result: &mut ValidationResult,
    ) -> Walk {
        if let Some(required) = node.required() {
            for name in required {
                if !obj.contains_key(name) {
                    result.add_error(format!("{path}: required: missing property '{name}'"));
                }
            }
        }

        if let Some(properties) = node.properties() {
            for (name, subschema) in properties {
                if let Some(value) = obj.get(name) {
                    let child = path.push_property(name);
                    self.validate_node(subschema, value, &child, depth + 1, result)?;
                }
            }

            // Only meaningful relative to a declared property set.
            if let Some(additional) = node.additional_properties() {
                for (name, value) in obj {
                    if properties.contains_key(name) {
                        continue;
                    }
                    match additional {
                        Value::Bool(false) => result.add_error(format!(
                            "{path}: additionalProperties: property '{name}' is not allowed"
                        )),
                        Value::Object(_) => {
                            let child = path.push_property(name);
                            self.validate_node(additional, value, &child, depth + 1, result)?;
                        }
                        _ => {}
                    }
                }
            }
        }

        let count = obj.len() as u64;
        if let Some(min) = node.min_properties() {
            if count < min {
                result.add_error(format!(
                    "{path}: minProperties: expected at least {min} properties, found {count}"
                ));
            }
        }
        if let Some(max) = node.max_properties() {
            if count > max {
                result.add_error(format!(
                    "{path}: maxProperties: expected at most {max} properties, found {count}"
                ));
            }
        }

        Ok(())
    }

    fn check_array(
        &self,
        node: &SchemaNode<'_>,
        items: &[Value],
        path: &InstancePath,
        depth: usize,
        result: &mut ValidationResult,
    ) -> Walk {
        let count = items.len() as u64;
        if let Some(min) = node.min_items() {
            if count < min {
                result.add_error(format!(
                    "{path}: minItems: expected at least {min} items, found {count}"
                ));
            }
        }
        if let Some(max) = node.max_items() {
            if count > max {
                result.add_error(format!(
                    "{path}: maxItems: expected at most {max} items, found {count}"
                ));
            }
        }

        if node.unique_items() == Some(true) {
            if let Some((first, duplicate)) = first_duplicate(items) {
                result.add_error(format!(
                    "{path}: uniqueItems: item at index {duplicate} duplicates item at index {first}"
                ));
            }
        }

        if let Some(subschema) = node.items() {
            for (index, item) in items.iter().enumerate() {
                let child = path.push_index(index);
                self.validate_node(subschema, item, &child, depth + 1, result)?;
            }
        }

        Ok(())
    }

    fn check_string(
        &self,
        node: &SchemaNode<'_>,
        s: &str,
        path: &InstancePath,
        result: &mut ValidationResult,
    ) {
        let length = s.chars().count() as u64;
        if let Some(min) = node.min_length() {
            if length < min {
                result.add_error(format!(
                    "{path}: minLength: expected at least {min} characters, found {length}"
                ));
            }
        }
        if let Some(max) = node.max_length() {
            if length > max {
                result.add_error(format!(
                    "{path}: maxLength: expected at most {max} characters, found {length}"
                ));
            }
        }

        if let Some(pattern) = node.pattern() {
            if let Some(re) = self.regex(pattern, path) {
                if !re.is_match(s) {
                    result.add_error(format!(
                        "{path}: pattern: \"{s}\" does not match \"{pattern}\""
                    ));
                }
            }
        }

        if !self.settings.validate_formats {
            return;
        }
        if let Some(name) = node.format() {
            match Format::parse(name) {
                Some(format) => {
                    if !format.matches(s) {
                        result.add_error(format!(
                            "{path}: format: \"{s}\" is not a valid {}",
                            format.name()
                        ));
                    }
                }
                None => trace!(%path, format = name, "unrecognized format ignored"),
            }
        }
    }
}

impl Validator for SchemaValidator {
    /// Validate `instance` against `schema`, collecting every finding.
    fn validate(&self, schema: &Value, instance: &Value) -> ValidationResult {
        let mut result = ValidationResult::new();
        let root = InstancePath::root();

        let walker = Walker::new(&self.settings);
        let walk = walker.validate_node(schema, instance, &root, 1, &mut result);
        if let Err(DepthExceeded { path }) = walk {
            warn!(%path, max_depth = self.settings.max_depth, "validation depth limit exceeded");
            result.add_error(format!(
                "{path}: depth: nesting exceeds maximum depth of {}",
                self.settings.max_depth
            ));
        }

        debug!(
            valid = result.is_valid(),
            error_count = result.errors().len(),
            "validation complete"
        );
        result
    }
}

// ── Stateless checks ──────────────────────────────────────────────────────────

fn type_matches(name: TypeName, instance: &Value) -> bool {
    match name {
        TypeName::Object => instance.is_object(),
        TypeName::Array => instance.is_array(),
        TypeName::String => instance.is_string(),
        TypeName::Number => instance.is_number(),
        TypeName::Integer => match instance {
            Value::Number(n) => to_decimal(n).is_some_and(|d| is_integral(&d)),
            _ => false,
        },
        TypeName::Boolean => instance.is_boolean(),
        TypeName::Null => instance.is_null(),
    }
}

fn check_enum(
    node: &SchemaNode<'_>,
    instance: &Value,
    path: &InstancePath,
    result: &mut ValidationResult,
) {
    let actual = text_key(instance);

    if let Some(allowed) = node.enum_values() {
        if !allowed.iter().any(|candidate| text_key(candidate) == actual) {
            let listed: Vec<String> = allowed.iter().map(text_key).collect();
            result.add_error(format!(
                "{path}: enum: {actual} is not one of [{}]",
                listed.join(", ")
            ));
        }
    }

    if let Some(expected) = node.const_value() {
        let expected = text_key(expected);
        if expected != actual {
            result.add_error(format!("{path}: const: expected {expected}, found {actual}"));
        }
    }
}

fn check_number(
    node: &SchemaNode<'_>,
    n: &Number,
    path: &InstancePath,
    result: &mut ValidationResult,
) {
    let Some(value) = to_decimal(n) else {
        return;
    };

    if let Some((limit, bound)) = decimal_keyword(node.minimum()) {
        if value < bound {
            result.add_error(format!("{path}: minimum: {n} is less than {limit}"));
        }
    }
    if let Some((limit, bound)) = decimal_keyword(node.maximum()) {
        if value > bound {
            result.add_error(format!("{path}: maximum: {n} is greater than {limit}"));
        }
    }
    if let Some((limit, bound)) = decimal_keyword(node.exclusive_minimum()) {
        if value <= bound {
            result.add_error(format!(
                "{path}: exclusiveMinimum: {n} is not greater than {limit}"
            ));
        }
    }
    if let Some((limit, bound)) = decimal_keyword(node.exclusive_maximum()) {
        if value >= bound {
            result.add_error(format!(
                "{path}: exclusiveMaximum: {n} is not less than {limit}"
            ));
        }
    }

    if let Some((divisor, exact)) = decimal_keyword(node.multiple_of()) {
        if exact.is_zero() {
            result.add_error(format!("{path}: multipleOf: divisor must not be zero"));
        } else if !is_multiple_of(&value, &exact) {
            result.add_error(format!(
                "{path}: multipleOf: {n} is not a multiple of {divisor}"
            ));
        }
    }
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn decimal_keyword(number: Option<&Number>) -> Option<(&Number, BigDecimal)> {
    let number = number?;
    to_decimal(number).map(|exact| (number, exact))
}

/// Minified JSON text; the equality key for `enum`, `const` and `uniqueItems`.
fn text_key(value: &Value) -> String {
    value.to_string()
}

/// Index of the first element equal to an earlier one, and that earlier index.
fn first_duplicate(items: &[Value]) -> Option<(usize, usize)> {
    let mut seen: HashMap<String, usize> = HashMap::with_capacity(items.len());
    for (index, item) in items.iter().enumerate() {
        let key = text_key(item);
        if let Some(&first) = seen.get(&key) {
            return Some((first, index));
        }
        seen.insert(key, index);
    }
    None
}

/// Flatten branch results into `[i] err; err | [j] err` for failed branches.
fn aggregate(outcomes: &[ValidationResult]) -> String {
    outcomes
        .iter()
        .enumerate()
        .filter(|(_, outcome)| !outcome.is_valid())
        .map(|(index, outcome)| format!("[{index}] {}", outcome.errors().join("; ")))
        .collect::<Vec<_>>()
        .join(" | ")
}

// ── Tests ─────────────────────────────────────────────────────────────────────


#[cfg(test)]
mod proptests {
    use proptest::prelude::*;
    use serde_json::{json, Value};

    use schemata_core::traits::Validator;

    use super::SchemaValidator;

    /// Arbitrary JSON instances, floats included.
    fn json_value() -> impl Strategy<Value = Value> {
        let leaf = prop_oneof![
            Just(Value::Null),
            any::<bool>().prop_map(Value::Bool),
            any::<i64>().prop_map(|n| json!(n)),
            (-1.0e6f64..1.0e6).prop_map(|f| json!(f)),
            "[a-zA-Z0-9@._ -]{0,20}".prop_map(Value::String),
        ];
        leaf.prop_recursive(4, 48, 6, |inner| {
            prop_oneof![
                prop::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
                prop::collection::btree_map("[a-z]{1,6}", inner, 0..6)
                    .prop_map(|m| Value::Object(m.into_iter().collect())),
            ]
        })
    }

    /// A small pool of leaf schemas, each decisive for some instances.
    fn leaf_schema() -> impl Strategy<Value = Value> {
        prop_oneof![
            Just(json!({ "type": "string" })),
            Just(json!({ "type": "integer" })),
            Just(json!({ "type": "object" })),
            Just(json!({ "minimum": 0 })),
            Just(json!({ "maxLength": 3 })),
            Just(json!({ "minItems": 1 })),
            Just(json!({ "required": ["a"] })),
            Just(json!({ "enum": [null, true, 1] })),
        ]
    }

    fn valid(schema: &Value, instance: &Value) -> bool {
        SchemaValidator::new().validate(schema, instance).is_valid()
    }

    proptest! {
        /// The empty schema accepts every instance.
        #[test]
        fn empty_schema_accepts(instance in json_value()) {
            let schema = json!({});
            prop_assert!(valid(&schema, &instance));
        }

        /// `not: {}` rejects every instance.
        #[test]
        fn not_empty_rejects(instance in json_value()) {
            let schema = json!({ "not": {} });
            prop_assert!(!valid(&schema, &instance));
        }

        /// allOf is conjunction, anyOf is disjunction.
        #[test]
        fn combinators_follow_boolean_logic(
            a in leaf_schema(),
            b in leaf_schema(),
            instance in json_value(),
        ) {
            let va = valid(&a, &instance);
            let vb = valid(&b, &instance);
            prop_assert_eq!(valid(&json!({ "allOf": [a.clone(), b.clone()] }), &instance), va && vb);
            prop_assert_eq!(valid(&json!({ "anyOf": [a.clone(), b.clone()] }), &instance), va || vb);
            prop_assert_eq!(valid(&json!({ "oneOf": [a, b] }), &instance), va != vb);
        }

        /// Validity always agrees with the error list.
        #[test]
        fn validity_matches_errors(a in leaf_schema(), instance in json_value()) {
            let result = SchemaValidator::new().validate(&a, &instance);
            prop_assert_eq!(result.is_valid(), result.errors().is_empty());
        }

        /// Identical inputs give identical results.
        #[test]
        fn validation_is_idempotent(
            a in leaf_schema(),
            b in leaf_schema(),
            instance in json_value(),
        ) {
            let schema = json!({ "oneOf": [a, { "not": b }], "items": { "type": "string" } });
            let validator = SchemaValidator::new();
            prop_assert_eq!(
                validator.validate(&schema, &instance),
                validator.validate(&schema, &instance)
            );
        }
    }
}
