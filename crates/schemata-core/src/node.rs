//! Typed, read-only views over schema and instance values.
//!
//! `SchemaNode` exposes one accessor per recognized keyword. Every accessor
//! is a name-keyed lookup plus a kind guard: a keyword that is absent, or
//! whose value has the wrong JSON kind, reads as `None` and the engine skips
//! it. That is the whole of unknown-keyword tolerance; nothing else in the
//! engine inspects raw schema keys.

use std::fmt;

use serde_json::{Map, Number, Value};

// ── JsonKind ──────────────────────────────────────────────────────────────────

/// The six JSON value kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Null,
    Boolean,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Boolean,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }

    /// The JSON Schema type name for this kind.
    pub fn name(self) -> &'static str {
        match self {
            JsonKind::Null => "null",
            JsonKind::Boolean => "boolean",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ── TypeName ──────────────────────────────────────────────────────────────────

/// A recognized value of the `type` keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeName {
    Object,
    Array,
    String,
    Number,
    Integer,
    Boolean,
    Null,
}

impl TypeName {
    /// Parse a type name; unknown names yield `None`.
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "object" => Some(TypeName::Object),
            "array" => Some(TypeName::Array),
            "string" => Some(TypeName::String),
            "number" => Some(TypeName::Number),
            "integer" => Some(TypeName::Integer),
            "boolean" => Some(TypeName::Boolean),
            "null" => Some(TypeName::Null),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TypeName::Object => "object",
            TypeName::Array => "array",
            TypeName::String => "string",
            TypeName::Number => "number",
            TypeName::Integer => "integer",
            TypeName::Boolean => "boolean",
            TypeName::Null => "null",
        }
    }
}

// ── SchemaNode ────────────────────────────────────────────────────────────────

/// A borrowed schema (or subschema) with named keyword accessors.
#[derive(Debug, Clone, Copy)]
pub struct SchemaNode<'a> {
    value: &'a Value,
}

impl<'a> SchemaNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// `Some(b)` when the whole schema is the boolean `b`.
    pub fn as_boolean_schema(&self) -> Option<bool> {
        self.value.as_bool()
    }

    fn keyword(&self, name: &str) -> Option<&'a Value> {
        self.value.as_object().and_then(|obj| obj.get(name))
    }

    fn array(&self, name: &str) -> Option<&'a [Value]> {
        self.keyword(name).and_then(Value::as_array).map(Vec::as_slice)
    }

    fn number(&self, name: &str) -> Option<&'a Number> {
        match self.keyword(name) {
            Some(Value::Number(n)) => Some(n),
            _ => None,
        }
    }

    fn count(&self, name: &str) -> Option<u64> {
        self.keyword(name).and_then(Value::as_u64)
    }

    fn subschema(&self, name: &str) -> Option<&'a Value> {
        self.keyword(name).filter(|v| v.is_object() || v.is_boolean())
    }

    // ── Composite keywords ────────────────────────────────────────────────

    pub fn all_of(&self) -> Option<&'a [Value]> {
        self.array("allOf")
    }

    pub fn any_of(&self) -> Option<&'a [Value]> {
        self.array("anyOf")
    }

    pub fn one_of(&self) -> Option<&'a [Value]> {
        self.array("oneOf")
    }

    pub fn not(&self) -> Option<&'a Value> {
        self.subschema("not")
    }

    // ── Generic keywords ──────────────────────────────────────────────────

    /// Recognized names listed by `type`, as a string or an array of strings.
    ///
    /// Returns `None` when `type` is absent, malformed, or names no known
    /// type, in which case it imposes no constraint.
    pub fn type_names(&self) -> Option<Vec<TypeName>> {
        let names: Vec<TypeName> = match self.keyword("type")? {
            Value::String(name) => TypeName::parse(name).into_iter().collect(),
            Value::Array(items) => items
                .iter()
                .filter_map(Value::as_str)
                .filter_map(TypeName::parse)
                .collect(),
            _ => return None,
        };
        if names.is_empty() {
            None
        } else {
            Some(names)
        }
    }

    pub fn enum_values(&self) -> Option<&'a [Value]> {
        self.array("enum")
    }

    pub fn const_value(&self) -> Option<&'a Value> {
        self.keyword("const")
    }

    // ── Object keywords ───────────────────────────────────────────────────

    /// Names listed by `required`; non-string entries are skipped.
    pub fn required(&self) -> Option<Vec<&'a str>> {
        self.array("required")
            .map(|items| items.iter().filter_map(Value::as_str).collect())
    }

    pub fn properties(&self) -> Option<&'a Map<String, Value>> {
        self.keyword("properties").and_then(Value::as_object)
    }

    pub fn additional_properties(&self) -> Option<&'a Value> {
        self.subschema("additionalProperties")
    }

    pub fn min_properties(&self) -> Option<u64> {
        self.count("minProperties")
    }

    pub fn max_properties(&self) -> Option<u64> {
        self.count("maxProperties")
    }

    // ── Array keywords ────────────────────────────────────────────────────

    pub fn min_items(&self) -> Option<u64> {
        self.count("minItems")
    }

    pub fn max_items(&self) -> Option<u64> {
        self.count("maxItems")
    }

    pub fn unique_items(&self) -> Option<bool> {
        self.keyword("uniqueItems").and_then(Value::as_bool)
    }

    /// The single `items` subschema. Tuple-form arrays read as `None`.
    pub fn items(&self) -> Option<&'a Value> {
        self.subschema("items")
    }

    // ── String keywords ───────────────────────────────────────────────────

    pub fn min_length(&self) -> Option<u64> {
        self.count("minLength")
    }

    pub fn max_length(&self) -> Option<u64> {
        self.count("maxLength")
    }

    pub fn pattern(&self) -> Option<&'a str> {
        self.keyword("pattern").and_then(Value::as_str)
    }

    pub fn format(&self) -> Option<&'a str> {
        self.keyword("format").and_then(Value::as_str)
    }

    // ── Numeric keywords ──────────────────────────────────────────────────

    pub fn minimum(&self) -> Option<&'a Number> {
        self.number("minimum")
    }

    pub fn maximum(&self) -> Option<&'a Number> {
        self.number("maximum")
    }

    /// Draft-6 numeric form only; the older boolean modifier reads as `None`.
    pub fn exclusive_minimum(&self) -> Option<&'a Number> {
        self.number("exclusiveMinimum")
    }

    pub fn exclusive_maximum(&self) -> Option<&'a Number> {
        self.number("exclusiveMaximum")
    }

    pub fn multiple_of(&self) -> Option<&'a Number> {
        self.number("multipleOf")
    }
}
