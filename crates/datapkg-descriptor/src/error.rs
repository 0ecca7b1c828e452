//! Error types for the descriptor crate

use crate::field_store::FieldType;

/// Errors from the typed field storage capability
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    /// Field is not part of the declared schema
    #[error("field '{field}' is not declared in the schema")]
    UnknownField {
        /// The undeclared field name
        field: String,
    },

    /// Stored value does not match the declared type
    #[error("field '{field}' expects {expected}, got {actual}")]
    TypeMismatch {
        /// The offending field name
        field: String,
        /// Type declared in the schema
        expected: FieldType,
        /// Type of the rejected value
        actual: FieldType,
    },
}
