//! Data-Package Sources
//!
//! Source provenance records and the collection manager that keeps the
//! `sources` field of a descriptor valid.
//!
//! # Overview
//!
//! - [`SourceRecord`]: one source entry with typed, validated `web` and
//!   `email` accessors
//! - [`get_sources`] / [`set_sources`] / [`add_source`] / [`remove_source`]:
//!   the four operations over a descriptor's `sources` field
//!
//! All mutation funnels through [`set_sources`], the single validation
//! gate: a replacement collection is fully built and checked before the
//! descriptor is touched, so any error leaves the document unchanged.
//!
//! # Example
//!
//! ```rust
//! use datapkg_descriptor::Descriptor;
//! use datapkg_sources::{add_source, get_sources, remove_source};
//!
//! let mut descriptor = Descriptor::new();
//! add_source(&mut descriptor, "World Bank", Some("https://data.worldbank.org"), None).unwrap();
//! assert_eq!(get_sources(&descriptor).len(), 1);
//!
//! remove_source(&mut descriptor, "World Bank").unwrap();
//! assert!(get_sources(&descriptor).is_empty());
//! ```

#![warn(missing_docs)]

pub mod collection;
pub mod error;
pub mod record;

// Re-exports
pub use collection::{add_source, get_sources, remove_source, set_sources};
pub use error::{RemoveError, SourceError};
pub use record::SourceRecord;

/// Version of this crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
