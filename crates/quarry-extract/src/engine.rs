//! Recursive extraction engine
//!
//! One dispatch rule per recognized schema-node variant, driven by an
//! exhaustive match over `SchemaKind`. The traversal is single-pass and
//! synchronous: it either materializes the complete chunk tree or stops at
//! the first error.

use quarry_domain::{Chunk, ChunkKind, ChunkProperties, SchemaKind, SchemaNode};
use tracing::trace;

use crate::config::ExtractConfig;
use crate::error::ExtractError;

/// Extract the chunks for one schema node.
///
/// Returns the effective key the caller should store the chunks under
/// alongside the chunks themselves. The effective key equals the declared
/// key except for arrays, which rename it with the `[]` marker.
pub(crate) fn extract(
    key: Option<&str>,
    path: Option<&str>,
    node: Option<&dyn SchemaNode>,
    depth: usize,
    config: &ExtractConfig,
) -> Result<(Option<String>, Vec<Chunk>), ExtractError> {
    let Some(node) = node else {
        return Err(missing(path, key));
    };
    if depth > config.max_depth {
        return Err(ExtractError::CyclicSchema {
            limit: config.max_depth,
            path: owned(path),
        });
    }

    let kind = node.kind();
    trace!("extracting {} node at {}", kind, path.unwrap_or("<root>"));

    match kind {
        SchemaKind::String => primitive(key, path, ChunkKind::String),
        SchemaKind::Number => primitive(key, path, ChunkKind::Number),
        SchemaKind::Boolean => primitive(key, path, ChunkKind::Boolean),
        SchemaKind::Date => primitive(key, path, ChunkKind::Date),
        SchemaKind::Any => primitive(key, path, ChunkKind::Any),

        // Every branch contributes its chunks at the same path; no
        // deduplication across branches
        SchemaKind::Union => {
            let options = node.union_options().ok_or_else(|| missing(path, key))?;
            let mut chunks = Vec::new();
            for option in options {
                let (_, mut option_chunks) = extract(key, path, Some(option), depth + 1, config)?;
                chunks.append(&mut option_chunks);
            }
            Ok((owned(key), chunks))
        }

        SchemaKind::Object => {
            let shape = node.object_shape().ok_or_else(|| missing(path, key))?;
            let properties = assemble_properties(path, shape, depth, config)?;
            Ok((owned(key), vec![Chunk::object(owned(path), properties)]))
        }

        SchemaKind::Literal => {
            let value = node.literal_value().ok_or_else(|| missing(path, key))?;
            Ok((owned(key), vec![Chunk::literal(owned(path), value)]))
        }

        // The array produces no chunk of its own: its element's chunks pass
        // through unchanged, under a `[]`-marked key and path
        SchemaKind::Array => {
            let element = node.array_element().ok_or_else(|| missing(path, key))?;
            let effective_key = bracketed(key);
            let element_path = bracketed(path);
            let (_, chunks) = extract(
                Some(effective_key.as_str()),
                Some(element_path.as_str()),
                Some(element),
                depth + 1,
                config,
            )?;
            Ok((Some(effective_key), chunks))
        }

        // Shallow mark: only the chunks directly returned by the inner node
        // are flagged, never the chunks nested inside their properties
        SchemaKind::Optional => {
            let inner = node.unwrap_optional().ok_or_else(|| missing(path, key))?;
            let (effective_key, chunks) = extract(key, path, Some(inner), depth + 1, config)?;
            let chunks = chunks.into_iter().map(Chunk::into_optional).collect();
            Ok((effective_key, chunks))
        }

        SchemaKind::Enum => {
            let values = node.enum_values().ok_or_else(|| missing(path, key))?;
            Ok((owned(key), vec![Chunk::enumeration(owned(path), values)]))
        }

        // The configured producer runs exactly once per extraction; every
        // returned chunk receives the same resolved value
        SchemaKind::Default => {
            let spec = node.unwrap_default().ok_or_else(|| missing(path, key))?;
            let (effective_key, chunks) = extract(key, path, Some(spec.node), depth + 1, config)?;
            let resolved = spec.value.resolve();
            let chunks = chunks
                .into_iter()
                .map(|chunk| chunk.with_default(resolved.clone()))
                .collect();
            Ok((effective_key, chunks))
        }

        // Only the input side is described; the transform's output shape is
        // invisible to extraction
        SchemaKind::Transform => {
            let input = node
                .transform_input()
                .ok_or_else(|| ExtractError::MalformedTransform {
                    path: owned(path),
                    key: owned(key),
                })?;
            extract(key, path, Some(input), depth + 1, config)
        }

        SchemaKind::Other(variant) => Err(ExtractError::UnsupportedVariant {
            variant,
            path: owned(path),
            key: owned(key),
        }),
    }
}

/// Assemble an object's property map from its declared fields.
///
/// Fields are visited in declaration order and stored under the effective
/// key returned by the recursive call. The map is built once, complete,
/// before the object chunk is constructed. Later fields silently overwrite
/// earlier ones when two declared keys normalize to the same effective key.
fn assemble_properties(
    path: Option<&str>,
    shape: Vec<(&str, &dyn SchemaNode)>,
    depth: usize,
    config: &ExtractConfig,
) -> Result<ChunkProperties, ExtractError> {
    let mut properties = ChunkProperties::with_capacity(shape.len());
    for (field_key, field) in shape {
        let field_path = match path {
            Some(path) => format!("{path}.{field_key}"),
            None => field_key.to_string(),
        };
        let (effective_key, chunks) = extract(
            Some(field_key),
            Some(field_path.as_str()),
            Some(field),
            depth + 1,
            config,
        )?;
        let effective_key = effective_key.unwrap_or_else(|| field_key.to_string());
        properties.insert(effective_key, chunks);
    }
    Ok(properties)
}

fn primitive(
    key: Option<&str>,
    path: Option<&str>,
    kind: ChunkKind,
) -> Result<(Option<String>, Vec<Chunk>), ExtractError> {
    Ok((owned(key), vec![Chunk::primitive(owned(path), kind)]))
}

fn missing(path: Option<&str>, key: Option<&str>) -> ExtractError {
    ExtractError::MissingSchema {
        path: owned(path),
        key: owned(key),
    }
}

fn owned(value: Option<&str>) -> Option<String> {
    value.map(str::to_string)
}

fn bracketed(value: Option<&str>) -> String {
    match value {
        Some(value) => format!("{value}[]"),
        None => "[]".to_string(),
    }
}
