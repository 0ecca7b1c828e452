//! Error types for source records and the collection manager
//!
//! Two families, kept distinct at the type level:
//! - [`SourceError`]: a record or replacement collection is invalid
//! - [`RemoveError`]: removal referenced a name that does not exist
//!
//! Every error aborts its operation before any mutation of the
//! descriptor is observable.

use datapkg_descriptor::FieldError;

/// Invalid source record or collection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SourceError {
    /// Record carries keys outside {name, web, email}
    #[error("source has unexpected keys: {keys:?}")]
    UnexpectedKeys {
        /// The offending keys, in record order
        keys: Vec<String>,
    },

    /// Record has no name (or an empty one)
    #[error("source is missing a name")]
    MissingName,

    /// `web` value fails the URL predicate
    #[error("not a url: {0}")]
    InvalidUrl(String),

    /// `email` value fails the email predicate
    #[error("not an email address: {0}")]
    InvalidEmail(String),

    /// Two or more records share a name
    #[error("source names are not unique")]
    DuplicateNames,

    /// Typed field storage rejected a write
    #[error(transparent)]
    Field(#[from] FieldError),
}

/// Removal of a source that is not in the collection
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RemoveError {
    /// No record with the given name
    #[error("source with name '{0}' does not exist")]
    NotFound(String),

    /// Re-validation of the remaining records failed
    ///
    /// Only reachable when the stored collection was populated
    /// out-of-band and never passed through the validation gate.
    #[error(transparent)]
    Invalid(#[from] SourceError),
}
