//! Typed field storage over a declared schema
//!
//! Provides the [`FieldStore`] capability: generic get/set/contains/delete
//! over a mapping whose permitted fields and value types are declared up
//! front in a [`FieldSchema`]. Specification objects (source records,
//! resource records, …) layer their typed accessors on top of this trait.

use std::fmt::{self, Display, Formatter};

use indexmap::IndexMap;
use serde_json::Value;

use crate::error::FieldError;

/// JSON value kind used in field schemas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldType {
    /// JSON string
    Str,
    /// JSON number
    Number,
    /// JSON boolean
    Bool,
    /// JSON array
    Array,
    /// JSON object
    Object,
    /// JSON null
    Null,
}

impl FieldType {
    /// Kind of a JSON value
    #[inline]
    #[must_use]
    pub fn of(value: &Value) -> Self {
        match value {
            Value::String(_) => Self::Str,
            Value::Number(_) => Self::Number,
            Value::Bool(_) => Self::Bool,
            Value::Array(_) => Self::Array,
            Value::Object(_) => Self::Object,
            Value::Null => Self::Null,
        }
    }

    /// Check whether `value` is of this kind
    #[inline]
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        Self::of(value) == self
    }
}

impl Display for FieldType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Str => "string",
            Self::Number => "number",
            Self::Bool => "boolean",
            Self::Array => "array",
            Self::Object => "object",
            Self::Null => "null",
        };
        f.write_str(name)
    }
}

/// Declared schema: field name → expected type
///
/// Declaration order is preserved; `names()` yields fields in the order
/// they were declared.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldSchema {
    fields: IndexMap<String, FieldType>,
}

impl FieldSchema {
    /// Create an empty schema
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            fields: IndexMap::new(),
        }
    }

    /// Declare a field, builder style
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, ty: FieldType) -> Self {
        self.fields.insert(name.into(), ty);
        self
    }

    /// Expected type of a declared field
    #[inline]
    #[must_use]
    pub fn expected(&self, name: &str) -> Option<FieldType> {
        self.fields.get(name).copied()
    }

    /// Check whether `name` is declared
    #[inline]
    #[must_use]
    pub fn declares(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Declared field names in declaration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }

    /// Number of declared fields
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check whether the schema declares no fields
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Generic typed field storage
///
/// Implementors supply the declared schema and access to the backing
/// ordered mapping; the default methods enforce the schema on writes.
/// Reads are unchecked by design: a store may carry out-of-band fields
/// (validation of whole records is a collection-level concern).
pub trait FieldStore {
    /// Declared schema for this store
    fn schema(&self) -> &FieldSchema;

    /// Backing ordered mapping
    fn fields(&self) -> &IndexMap<String, Value>;

    /// Mutable backing ordered mapping
    fn fields_mut(&mut self) -> &mut IndexMap<String, Value>;

    /// Get the value stored under `field`
    #[inline]
    fn get(&self, field: &str) -> Option<&Value> {
        self.fields().get(field)
    }

    /// Check whether `field` is present
    #[inline]
    fn contains(&self, field: &str) -> bool {
        self.fields().contains_key(field)
    }

    /// Store `value` under `field`
    ///
    /// # Errors
    /// - [`FieldError::UnknownField`] if `field` is not declared
    /// - [`FieldError::TypeMismatch`] if `value` is of the wrong kind
    fn set(&mut self, field: &str, value: Value) -> Result<(), FieldError> {
        let expected = self
            .schema()
            .expected(field)
            .ok_or_else(|| FieldError::UnknownField {
                field: field.to_string(),
            })?;
        if !expected.matches(&value) {
            return Err(FieldError::TypeMismatch {
                field: field.to_string(),
                expected,
                actual: FieldType::of(&value),
            });
        }
        self.fields_mut().insert(field.to_string(), value);
        Ok(())
    }

    /// Remove `field`, preserving the order of remaining entries
    ///
    /// Returns the removed value, or `None` if the field was absent.
    #[inline]
    fn delete(&mut self, field: &str) -> Option<Value> {
        self.fields_mut().shift_remove(field)
    }
}
