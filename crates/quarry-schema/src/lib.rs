//! Quarry Schema Combinators
//!
//! Reference implementation of the `SchemaNode` capability set from
//! `quarry-domain`: a small combinator library for describing value shapes,
//! in the style of runtime schema builders.
//!
//! # Architecture
//!
//! This crate is a boundary adapter. The extraction engine in
//! `quarry-extract` never names these types; it sees only the capability
//! trait. Any other schema-description library can be adapted the same way
//! by implementing `SchemaNode` over its node representation.
//!
//! # Examples
//!
//! ```
//! use quarry_domain::{SchemaKind, SchemaNode};
//! use quarry_schema::{array, enumeration, number, object, string};
//!
//! let schema = object([
//!     ("name", string()),
//!     ("tags", array(string())),
//!     ("status", enumeration(["active", "archived"])),
//!     ("retries", number().default_value(3)),
//! ]);
//!
//! assert_eq!(schema.kind(), SchemaKind::Object);
//! assert_eq!(schema.object_shape().unwrap().len(), 4);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod builder;
mod schema;

pub use builder::{any, array, boolean, date, enumeration, literal, number, object, string, union};
pub use schema::Schema;
