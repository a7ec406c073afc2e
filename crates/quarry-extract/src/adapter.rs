//! Adapter façade over the extraction engine

use quarry_domain::{Chunk, SchemaNode};
use tracing::debug;

use crate::config::ExtractConfig;
use crate::engine;
use crate::error::ExtractError;

/// Façade wrapping one root schema node
///
/// Stateless and reentrant: it holds only the immutable root reference and
/// the configuration, and builds a fresh chunk tree on every call. Safe to
/// share across threads for read-only schema nodes.
///
/// # Examples
///
/// ```
/// use quarry_extract::SchemaAdapter;
/// use quarry_schema::{object, string};
///
/// let schema = object([("name", string())]);
/// let chunks = SchemaAdapter::new(&schema).extract_chunks()?;
/// assert_eq!(chunks.len(), 1);
/// # Ok::<(), quarry_extract::ExtractError>(())
/// ```
pub struct SchemaAdapter<'a> {
    schema: &'a dyn SchemaNode,
    config: ExtractConfig,
}

impl<'a> SchemaAdapter<'a> {
    /// Wrap a root schema node with the default configuration
    pub fn new(schema: &'a dyn SchemaNode) -> Self {
        Self {
            schema,
            config: ExtractConfig::default(),
        }
    }

    /// Wrap a root schema node with an explicit configuration
    pub fn with_config(schema: &'a dyn SchemaNode, config: ExtractConfig) -> Self {
        Self { schema, config }
    }

    /// Extract the chunk tree for the wrapped schema
    ///
    /// All-or-nothing: returns either the complete tree for the root node
    /// or the first error met anywhere in the traversal.
    pub fn extract_chunks(&self) -> Result<Vec<Chunk>, ExtractError> {
        debug!("starting chunk extraction");
        let (_, chunks) = engine::extract(None, None, Some(self.schema), 0, &self.config)?;
        debug!("extracted {} root chunks", chunks.len());
        Ok(chunks)
    }
}

/// Extract the chunk tree for a schema with the default configuration
pub fn extract_chunks(schema: &dyn SchemaNode) -> Result<Vec<Chunk>, ExtractError> {
    SchemaAdapter::new(schema).extract_chunks()
}
