//! Data-Package Descriptor
//!
//! Ordered descriptor documents with typed field storage.
//!
//! # Overview
//!
//! This crate provides:
//! - [`Descriptor`]: an ordered string-keyed JSON document
//! - [`FieldStore`]: generic get/set/contains/delete over a declared schema
//! - [`is_url`] / [`is_email`]: surface-syntax format predicates
//!
//! # Example
//!
//! ```rust
//! use datapkg_descriptor::Descriptor;
//! use serde_json::json;
//!
//! let mut descriptor = Descriptor::new();
//! descriptor.set("title", json!("World Bank Indicators"));
//! assert_eq!(descriptor.get("title"), Some(&json!("World Bank Indicators")));
//! ```

#![warn(missing_docs)]

pub mod descriptor;
pub mod error;
pub mod field_store;
pub mod validate;

// Re-exports
pub use descriptor::Descriptor;
pub use error::FieldError;
pub use field_store::{FieldSchema, FieldStore, FieldType};
pub use validate::{is_email, is_url};

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
