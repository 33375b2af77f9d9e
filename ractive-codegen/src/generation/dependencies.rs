//! Ordered package dependency tracking.

use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;

/// Package name to version range, in insertion order.
///
/// Serializes as a plain JSON object so manifests render reproducibly.
///
/// # Example
///
/// ```
/// use ractive_gen_codegen::generation::Dependencies;
///
/// let mut deps = Dependencies::new();
/// deps.add("ractive", "~0.5.5");
/// deps.add("jQuery", "~1.11.1");
///
/// let names: Vec<_> = deps.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["ractive", "jQuery"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Dependencies(IndexMap<String, String>);

impl Dependencies {
    /// Create a new empty dependency set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a dependency. If it already exists, this is a no-op.
    pub fn add(&mut self, name: impl Into<String>, version: impl Into<String>) {
        self.0.entry(name.into()).or_insert_with(|| version.into());
    }

    /// Add a dependency when `condition` holds.
    pub fn add_if(&mut self, condition: bool, name: &str, version: &str) {
        if condition {
            self.add(name, version);
        }
    }

    /// Check if a dependency exists.
    pub fn has(&self, name: &str) -> bool {
        self.0.contains_key(name)
    }

    /// Get the version range of a dependency.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Iterate over all dependencies in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Check if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Get the number of dependencies.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// The dependencies as a JSON object, in insertion order.
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.iter()
                .map(|(name, version)| (name.to_string(), Value::from(version)))
                .collect(),
        )
    }
}
