//! Source records
//!
//! Provides [`SourceRecord`], one entry of a descriptor's `sources`
//! collection: a name, an optional web link and an optional email
//! contact. The typed accessors validate on write; whole-record rules
//! (required name, key-set closure, name uniqueness) are enforced by the
//! collection manager, not here.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use datapkg_descriptor::{is_email, is_url, FieldSchema, FieldStore, FieldType};

use crate::error::SourceError;

/// Declared specification of a source record: every field is a string.
static SPECIFICATION: Lazy<FieldSchema> = Lazy::new(|| {
    FieldSchema::new()
        .field("name", FieldType::Str)
        .field("web", FieldType::Str)
        .field("email", FieldType::Str)
});

/// One source of a data package
///
/// Wraps an ordered mapping so unvalidated out-of-band records can be
/// represented; the typed accessors below only ever write declared,
/// format-checked fields.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SourceRecord {
    fields: IndexMap<String, Value>,
}

impl SourceRecord {
    /// Create a record carrying only a name
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let mut fields = IndexMap::new();
        fields.insert("name".to_string(), Value::String(name.into()));
        Self { fields }
    }

    /// Wrap an arbitrary mapping without validation
    ///
    /// The result may violate the source specification; it is checked
    /// when handed to [`set_sources`](crate::set_sources).
    #[inline]
    #[must_use]
    pub fn from_map(fields: IndexMap<String, Value>) -> Self {
        Self { fields }
    }

    /// The record's name, if present as a string
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.get("name").and_then(Value::as_str)
    }

    /// Link to the source of the data on the web
    ///
    /// `None` when the field is absent.
    #[must_use]
    pub fn web(&self) -> Option<&str> {
        self.get("web").and_then(Value::as_str)
    }

    /// Set or clear the web link
    ///
    /// `None` or an empty string deletes the field; this never fails,
    /// even when the field was already absent.
    ///
    /// # Errors
    /// [`SourceError::InvalidUrl`] if the value fails the URL predicate;
    /// the record is left unchanged.
    pub fn set_web(&mut self, value: Option<&str>) -> Result<(), SourceError> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            self.delete("web");
            return Ok(());
        };
        if !is_url(value) {
            return Err(SourceError::InvalidUrl(value.to_string()));
        }
        self.set("web", Value::String(value.to_string()))?;
        Ok(())
    }

    /// Email address for the source of the data (person, organisation…)
    ///
    /// `None` when the field is absent.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.get("email").and_then(Value::as_str)
    }

    /// Set or clear the email contact
    ///
    /// `None` or an empty string deletes the field; this never fails,
    /// even when the field was already absent.
    ///
    /// # Errors
    /// [`SourceError::InvalidEmail`] if the value fails the email
    /// predicate; the record is left unchanged.
    pub fn set_email(&mut self, value: Option<&str>) -> Result<(), SourceError> {
        let Some(value) = value.filter(|v| !v.is_empty()) else {
            self.delete("email");
            return Ok(());
        };
        if !is_email(value) {
            return Err(SourceError::InvalidEmail(value.to_string()));
        }
        self.set("email", Value::String(value.to_string()))?;
        Ok(())
    }

    /// Consume the record, yielding the backing mapping
    #[inline]
    #[must_use]
    pub fn into_map(self) -> IndexMap<String, Value> {
        self.fields
    }
}

impl FieldStore for SourceRecord {
    fn schema(&self) -> &FieldSchema {
        &SPECIFICATION
    }

    fn fields(&self) -> &IndexMap<String, Value> {
        &self.fields
    }

    fn fields_mut(&mut self) -> &mut IndexMap<String, Value> {
        &mut self.fields
    }
}
