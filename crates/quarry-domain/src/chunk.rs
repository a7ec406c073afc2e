//! Chunk module - the normalized output record of schema extraction

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Ordered mapping from effective key to the child chunks stored under it
pub type ChunkProperties = IndexMap<String, Vec<Chunk>>;

/// Tag identifying the shape a chunk describes
///
/// The tag set is closed (per ADR-002). Arrays never receive a tag of their
/// own: an array's element chunks are stored directly, with the `"[]"`
/// marker carried in their `path` and in the effective key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChunkKind {
    /// UTF-8 text
    String,
    /// Numeric value
    Number,
    /// True or false
    Boolean,
    /// Calendar date or timestamp
    Date,
    /// Unconstrained value
    Any,
    /// Exactly one permitted value, carried in `value`
    Literal,
    /// A closed, ordered list of permitted values, carried in `value`
    Enum,
    /// A keyed record whose children are carried in `properties`
    Object,
}

impl ChunkKind {
    /// Stable lowercase name, identical to the serialized form
    pub fn as_str(&self) -> &'static str {
        match self {
            ChunkKind::String => "string",
            ChunkKind::Number => "number",
            ChunkKind::Boolean => "boolean",
            ChunkKind::Date => "date",
            ChunkKind::Any => "any",
            ChunkKind::Literal => "literal",
            ChunkKind::Enum => "enum",
            ChunkKind::Object => "object",
        }
    }
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Payload of `literal` and `enum` chunks
///
/// Serialized untagged: an enum chunk carries the bare ordered list of
/// permitted values, a literal chunk carries the bare value itself. The
/// chunk's `type` tag disambiguates for consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChunkValue {
    /// Ordered permitted values of an `enum` chunk
    Enum(Vec<serde_json::Value>),
    /// The single permitted value of a `literal` chunk
    Literal(serde_json::Value),
}

/// One normalized record in the extracted chunk tree
///
/// A chunk is created once during a single extraction pass and never
/// mutated afterwards; the marking methods consume and return. Presence
/// invariants:
///
/// - `value` is present iff `kind` is `literal` or `enum`
/// - `properties` is present iff `kind` is `object`
/// - `path` is absent only at the root of the tree
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Dotted/bracketed address of this chunk within the schema
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Shape tag, serialized as `"type"`
    #[serde(rename = "type")]
    pub kind: ChunkKind,

    /// Literal or enum payload
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<ChunkValue>,

    /// Children of an `object` chunk, keyed by effective key, in
    /// declaration order
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<ChunkProperties>,

    /// Whether the originating node was optional-wrapped
    #[serde(default, skip_serializing_if = "is_false")]
    pub optional: bool,

    /// Resolved default of a default-wrapped node, never a deferred producer
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<serde_json::Value>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Chunk {
    /// Create a chunk for a primitive node (string, number, boolean, date,
    /// any)
    ///
    /// # Panics
    /// In debug builds, panics if `kind` requires a payload
    pub fn primitive(path: Option<String>, kind: ChunkKind) -> Self {
        debug_assert!(
            !matches!(kind, ChunkKind::Literal | ChunkKind::Enum | ChunkKind::Object),
            "{kind} chunks carry a payload and have dedicated constructors"
        );
        Self {
            path,
            kind,
            value: None,
            properties: None,
            optional: false,
            default: None,
        }
    }

    /// Create a `literal` chunk holding its single permitted value
    pub fn literal(path: Option<String>, value: serde_json::Value) -> Self {
        Self {
            path,
            kind: ChunkKind::Literal,
            value: Some(ChunkValue::Literal(value)),
            properties: None,
            optional: false,
            default: None,
        }
    }

    /// Create an `enum` chunk holding its ordered permitted values
    pub fn enumeration(path: Option<String>, values: Vec<serde_json::Value>) -> Self {
        Self {
            path,
            kind: ChunkKind::Enum,
            value: Some(ChunkValue::Enum(values)),
            properties: None,
            optional: false,
            default: None,
        }
    }

    /// Create an `object` chunk from a fully assembled property map
    ///
    /// The map is built once by the caller and handed over complete; a
    /// partially assembled object chunk is never observable.
    pub fn object(path: Option<String>, properties: ChunkProperties) -> Self {
        Self {
            path,
            kind: ChunkKind::Object,
            value: None,
            properties: Some(properties),
            optional: false,
            default: None,
        }
    }

    /// Mark this chunk optional
    ///
    /// The mark is shallow: chunks nested inside `properties` keep their own
    /// flags.
    pub fn into_optional(mut self) -> Self {
        self.optional = true;
        self
    }

    /// Attach a resolved default value to this chunk
    pub fn with_default(mut self, value: serde_json::Value) -> Self {
        self.default = Some(value);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_primitive_chunk_has_no_payload() {
        let chunk = Chunk::primitive(Some("name".to_string()), ChunkKind::String);
        assert_eq!(chunk.kind, ChunkKind::String);
        assert!(chunk.value.is_none());
        assert!(chunk.properties.is_none());
        assert!(!chunk.optional);
        assert!(chunk.default.is_none());
    }

    #[test]
    fn test_literal_chunk_carries_value() {
        let chunk = Chunk::literal(Some("mode".to_string()), json!("strict"));
        assert_eq!(chunk.kind, ChunkKind::Literal);
        assert_eq!(chunk.value, Some(ChunkValue::Literal(json!("strict"))));
    }

    #[test]
    fn test_enum_chunk_preserves_value_order() {
        let chunk = Chunk::enumeration(None, vec![json!("b"), json!("a")]);
        assert_eq!(
            chunk.value,
            Some(ChunkValue::Enum(vec![json!("b"), json!("a")]))
        );
    }

    #[test]
    fn test_optional_mark_is_shallow() {
        let mut properties = ChunkProperties::new();
        properties.insert(
            "count".to_string(),
            vec![Chunk::primitive(Some("count".to_string()), ChunkKind::Number)],
        );
        let chunk = Chunk::object(None, properties).into_optional();

        assert!(chunk.optional);
        let nested = &chunk.properties.as_ref().unwrap()["count"][0];
        assert!(!nested.optional);
    }

    #[test]
    fn test_serialized_shape_omits_absent_fields() {
        let chunk = Chunk::primitive(Some("name".to_string()), ChunkKind::String);
        assert_eq!(
            serde_json::to_value(&chunk).unwrap(),
            json!({"path": "name", "type": "string"})
        );
    }

    #[test]
    fn test_serialized_root_object_shape() {
        let mut properties = ChunkProperties::new();
        properties.insert(
            "name".to_string(),
            vec![Chunk::primitive(Some("name".to_string()), ChunkKind::String)],
        );
        let chunk = Chunk::object(None, properties);
        assert_eq!(
            serde_json::to_value(&chunk).unwrap(),
            json!({
                "type": "object",
                "properties": {"name": [{"path": "name", "type": "string"}]}
            })
        );
    }

    #[test]
    fn test_optional_and_default_serialize_when_set() {
        let chunk = Chunk::primitive(Some("retries".to_string()), ChunkKind::Number)
            .into_optional()
            .with_default(json!(3));
        assert_eq!(
            serde_json::to_value(&chunk).unwrap(),
            json!({"path": "retries", "type": "number", "optional": true, "default": 3})
        );
    }

    #[test]
    fn test_chunk_json_round_trip() {
        let chunk = Chunk::enumeration(Some("status".to_string()), vec![json!("a"), json!("b")]);
        let text = serde_json::to_string(&chunk).unwrap();
        let parsed: Chunk = serde_json::from_str(&text).unwrap();
        assert_eq!(chunk, parsed);
    }

    #[test]
    fn test_kind_display_matches_serialized_tag() {
        assert_eq!(ChunkKind::String.to_string(), "string");
        assert_eq!(ChunkKind::Object.to_string(), "object");
        assert_eq!(
            serde_json::to_value(ChunkKind::Date).unwrap(),
            json!("date")
        );
    }
}
