//! Quarry Extraction Engine
//!
//! Normalizes a composable schema description into a uniform, serializable
//! chunk tree that downstream consumers (shape renderers, extraction-prompt
//! generators, further validators) can inspect without depending on the
//! schema library's internal types.
//!
//! # Overview
//!
//! The engine walks a schema through the `SchemaNode` capability trait from
//! `quarry-domain`, with one dispatch rule per recognized combinator:
//! primitives map to single chunks, unions flatten, objects assemble ordered
//! property maps, arrays rename keys and paths with the `[]` marker without
//! producing a chunk of their own, optional marks shallowly, defaults
//! resolve eagerly, and transforms are unwrapped to their input side.
//! Unrecognized combinators are a hard failure.
//!
//! # Architecture
//!
//! ```text
//! SchemaAdapter → extraction engine (recursive) → Chunk tree
//! ```
//!
//! The traversal is fully synchronous, side-effect-free, and all-or-nothing:
//! a call either returns a complete chunk tree or the first error it met.
//!
//! # Example Usage
//!
//! ```
//! use quarry_extract::SchemaAdapter;
//! use quarry_schema::{array, enumeration, number, object, string};
//!
//! let schema = object([
//!     ("name", string()),
//!     ("tags", array(string())),
//!     ("status", enumeration(["a", "b"])),
//!     ("meta", object([("count", number())]).optional()),
//! ]);
//!
//! let chunks = SchemaAdapter::new(&schema).extract_chunks()?;
//!
//! let root = &chunks[0];
//! let properties = root.properties.as_ref().unwrap();
//! assert!(properties.contains_key("tags[]"));
//! assert!(properties["meta"][0].optional);
//! # Ok::<(), quarry_extract::ExtractError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

mod adapter;
mod config;
mod engine;
mod error;


pub use adapter::{extract_chunks, SchemaAdapter};
pub use config::ExtractConfig;
pub use error::ExtractError;
