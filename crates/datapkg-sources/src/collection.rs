//! Source collection manager
//!
//! The four operations over a descriptor's `sources` field. All mutation
//! funnels through [`set_sources`], the single validation gate: the
//! replacement collection is fully built and checked before the
//! descriptor is assigned, so any error leaves the document untouched.

use std::collections::HashSet;

use indexmap::IndexMap;
use serde_json::Value;
use tracing::debug;

use datapkg_descriptor::{is_email, is_url, Descriptor, FieldStore};

use crate::error::{RemoveError, SourceError};
use crate::record::SourceRecord;

const SOURCES_KEY: &str = "sources";
const PERMITTED_KEYS: [&str; 3] = ["name", "web", "email"];

/// Read the source collection of a descriptor
///
/// Absence of the `sources` key reads as an empty collection. This is a
/// pure read with no validation: a collection populated out-of-band is
/// returned as stored. A non-array value reads as empty and non-object
/// elements are skipped.
#[must_use]
pub fn get_sources(descriptor: &Descriptor) -> Vec<SourceRecord> {
    let Some(Value::Array(entries)) = descriptor.get(SOURCES_KEY) else {
        return Vec::new();
    };
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(map) => Some(SourceRecord::from_map(
                map.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
            )),
            _ => None,
        })
        .collect()
}

/// Replace the source collection of a descriptor
///
/// The sole validation gate. Each record must carry a non-empty `name`,
/// no keys outside {`name`, `web`, `email`}, and format-valid `web` /
/// `email` values. Every value is coerced to its string form at this
/// boundary. Names must be pairwise distinct (exact string equality);
/// the uniqueness check runs only after every record passed on its own.
///
/// On success the descriptor's `sources` value is replaced in one
/// assignment, preserving input order. An empty slice stores an empty
/// collection.
///
/// # Errors
/// - [`SourceError::UnexpectedKeys`] naming the undeclared keys
/// - [`SourceError::MissingName`] for an absent or empty name
/// - [`SourceError::InvalidUrl`] / [`SourceError::InvalidEmail`] with
///   the offending value
/// - [`SourceError::DuplicateNames`] when two records share a name
///
/// On any error the descriptor is unchanged.
pub fn set_sources(descriptor: &mut Descriptor, records: &[SourceRecord]) -> Result<(), SourceError> {
    let mut validated: Vec<IndexMap<String, Value>> = Vec::with_capacity(records.len());

    for record in records {
        let extra: Vec<String> = record
            .fields()
            .keys()
            .filter(|key| !PERMITTED_KEYS.contains(&key.as_str()))
            .cloned()
            .collect();
        if !extra.is_empty() {
            return Err(SourceError::UnexpectedKeys { keys: extra });
        }

        let Some(name) = record.get("name").map(coerce) else {
            return Err(SourceError::MissingName);
        };
        if name.is_empty() {
            return Err(SourceError::MissingName);
        }

        if let Some(web) = record.get("web").map(coerce) {
            if !is_url(&web) {
                return Err(SourceError::InvalidUrl(web));
            }
        }
        if let Some(email) = record.get("email").map(coerce) {
            if !is_email(&email) {
                return Err(SourceError::InvalidEmail(email));
            }
        }

        let coerced: IndexMap<String, Value> = record
            .fields()
            .iter()
            .map(|(key, value)| (key.clone(), Value::String(coerce(value))))
            .collect();
        validated.push(coerced);
    }

    let mut seen: HashSet<&str> = HashSet::with_capacity(validated.len());
    for fields in &validated {
        let name = fields.get("name").and_then(Value::as_str).unwrap_or_default();
        if !seen.insert(name) {
            return Err(SourceError::DuplicateNames);
        }
    }

    debug!(count = validated.len(), "replacing source collection");
    let replacement: Vec<Value> = validated
        .into_iter()
        .map(|fields| Value::Object(fields.into_iter().collect()))
        .collect();
    descriptor.set(SOURCES_KEY, Value::Array(replacement));
    Ok(())
}

/// Append one source to the collection
///
/// `web` and `email` are carried only when non-empty. The candidate is
/// appended to a local copy of the current collection and the whole
/// result goes through [`set_sources`], so a malformed or name-colliding
/// candidate fails there and the stored collection stays as it was.
///
/// # Errors
/// Any [`SourceError`] from [`set_sources`]; the descriptor is unchanged
/// on error.
pub fn add_source(
    descriptor: &mut Descriptor,
    name: &str,
    web: Option<&str>,
    email: Option<&str>,
) -> Result<(), SourceError> {
    let mut fields = IndexMap::new();
    fields.insert("name".to_string(), Value::String(name.to_string()));
    if let Some(web) = web.filter(|value| !value.is_empty()) {
        fields.insert("web".to_string(), Value::String(web.to_string()));
    }
    if let Some(email) = email.filter(|value| !value.is_empty()) {
        fields.insert("email".to_string(), Value::String(email.to_string()));
    }

    debug!(name, "adding source");
    let mut sources = get_sources(descriptor);
    sources.push(SourceRecord::from_map(fields));
    set_sources(descriptor, &sources)
}

/// Remove the source with the given name
///
/// Names compare by exact string equality. The remaining records are
/// re-validated through [`set_sources`].
///
/// # Errors
/// - [`RemoveError::NotFound`] when no record carries `name`
/// - [`RemoveError::Invalid`] when the remainder fails re-validation
///   (possible only for collections populated out-of-band)
///
/// The descriptor is unchanged on error.
pub fn remove_source(descriptor: &mut Descriptor, name: &str) -> Result<(), RemoveError> {
    let sources = get_sources(descriptor);
    let remaining: Vec<SourceRecord> = sources
        .iter()
        .filter(|source| source.name() != Some(name))
        .cloned()
        .collect();
    if remaining.len() == sources.len() {
        return Err(RemoveError::NotFound(name.to_string()));
    }

    debug!(name, remaining = remaining.len(), "removing source");
    set_sources(descriptor, &remaining)?;
    Ok(())
}

/// String form of a descriptor value
///
/// The explicit coercion step applied at the collection boundary: JSON
/// strings pass through unquoted, anything else renders as its JSON
/// text.
fn coerce(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
