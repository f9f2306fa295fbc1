//! Instance paths for error reporting.

use std::fmt;

/// A `/`-delimited location inside the instance tree.
///
/// The root is the empty string. Paths are values: `push_property` and
/// `push_index` return a new path and leave `self` untouched, so sibling
/// branches can never observe each other's segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct InstancePath(String);

impl InstancePath {
    pub fn root() -> Self {
        Self(String::new())
    }

    /// The path of property `name` under this node.
    pub fn push_property(&self, name: &str) -> Self {
        Self(format!("{}/{}", self.0, name))
    }

    /// The path of element `index` under this node.
    pub fn push_index(&self, index: usize) -> Self {
        Self(format!("{}/{}", self.0, index))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

/// Renders the path for error messages; the root renders as `(root)`.
impl fmt::Display for InstancePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            f.write_str("(root)")
        } else {
            f.write_str(&self.0)
        }
    }
}
