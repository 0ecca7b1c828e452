//! Descriptor document
//!
//! Provides [`Descriptor`], the ordered string-keyed mapping that a data
//! package serializes to and from. Field managers (sources, resources, …)
//! read and write individual keys; the document itself is owned by the
//! caller.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered data-package descriptor document
///
/// A thin wrapper over an insertion-ordered `String → Value` mapping.
/// Key order is part of the data model and survives serde round trips.
///
/// # Invariants
/// - Keys are unique (mapping semantics)
/// - Iteration yields keys in insertion order
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Descriptor {
    fields: IndexMap<String, Value>,
}

impl Descriptor {
    /// Create an empty descriptor
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Parse a descriptor from a JSON object string
    ///
    /// # Errors
    /// Returns error if the input is not valid JSON or not an object
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Serialize the descriptor to a JSON string
    ///
    /// # Errors
    /// Returns error if a value cannot be serialized
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    /// Get the value stored under `key`
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Store `value` under `key`, replacing any previous value
    #[inline]
    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.fields.insert(key.into(), value);
    }

    /// Remove `key`, preserving the order of the remaining entries
    #[inline]
    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.fields.shift_remove(key)
    }

    /// Check whether `key` is present
    #[inline]
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of top-level keys
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the descriptor has no keys
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Value)> {
        self.fields.iter()
    }
}

impl From<IndexMap<String, Value>> for Descriptor {
    fn from(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }
}
