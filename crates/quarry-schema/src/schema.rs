//! The schema sum type and its capability-trait implementation

use quarry_domain::{DefaultSpec, DefaultValue, SchemaKind, SchemaNode};

/// A composable schema description
///
/// One variant per recognized combinator. Object fields keep declaration
/// order and may repeat a key; whether a repeated effective key is
/// meaningful is decided downstream, not here.
#[derive(Debug, Clone)]
pub enum Schema {
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
    /// Exactly one permitted value
    Literal(serde_json::Value),
    /// A closed, ordered list of permitted values
    Enum(Vec<serde_json::Value>),
    /// A keyed record of named fields, in declaration order
    Object(Vec<(String, Schema)>),
    /// A homogeneous list of elements
    Array(Box<Schema>),
    /// One of several alternative shapes
    Union(Vec<Schema>),
    /// An optional-wrapped inner shape
    Optional(Box<Schema>),
    /// A default-wrapped inner shape
    Default {
        /// The wrapped shape
        inner: Box<Schema>,
        /// The configured default
        value: DefaultValue,
    },
    /// A post-processed value; only the input shape is described
    Transform {
        /// The shape a value must have before the post-processing step
        input: Box<Schema>,
    },
}

impl SchemaNode for Schema {
    fn kind(&self) -> SchemaKind {
        match self {
            Schema::String => SchemaKind::String,
            Schema::Number => SchemaKind::Number,
            Schema::Boolean => SchemaKind::Boolean,
            Schema::Date => SchemaKind::Date,
            Schema::Any => SchemaKind::Any,
            Schema::Literal(_) => SchemaKind::Literal,
            Schema::Enum(_) => SchemaKind::Enum,
            Schema::Object(_) => SchemaKind::Object,
            Schema::Array(_) => SchemaKind::Array,
            Schema::Union(_) => SchemaKind::Union,
            Schema::Optional(_) => SchemaKind::Optional,
            Schema::Default { .. } => SchemaKind::Default,
            Schema::Transform { .. } => SchemaKind::Transform,
        }
    }

    fn unwrap_optional(&self) -> Option<&dyn SchemaNode> {
        match self {
            Schema::Optional(inner) => Some(inner.as_ref()),
            _ => None,
        }
    }

    fn unwrap_default(&self) -> Option<DefaultSpec<'_>> {
        match self {
            Schema::Default { inner, value } => Some(DefaultSpec {
                node: inner.as_ref(),
                value,
            }),
            _ => None,
        }
    }

    fn union_options(&self) -> Option<Vec<&dyn SchemaNode>> {
        match self {
            Schema::Union(options) => Some(
                options
                    .iter()
                    .map(|option| option as &dyn SchemaNode)
                    .collect(),
            ),
            _ => None,
        }
    }

    fn object_shape(&self) -> Option<Vec<(&str, &dyn SchemaNode)>> {
        match self {
            Schema::Object(fields) => Some(
                fields
                    .iter()
                    .map(|(key, field)| (key.as_str(), field as &dyn SchemaNode))
                    .collect(),
            ),
            _ => None,
        }
    }

    fn literal_value(&self) -> Option<serde_json::Value> {
        match self {
            Schema::Literal(value) => Some(value.clone()),
            _ => None,
        }
    }

    fn enum_values(&self) -> Option<Vec<serde_json::Value>> {
        match self {
            Schema::Enum(values) => Some(values.clone()),
            _ => None,
        }
    }

    fn array_element(&self) -> Option<&dyn SchemaNode> {
        match self {
            Schema::Array(element) => Some(element.as_ref()),
            _ => None,
        }
    }

    fn transform_input(&self) -> Option<&dyn SchemaNode> {
        match self {
            Schema::Transform { input } => Some(input.as_ref()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{array, enumeration, literal, object, string, union};
    use serde_json::json;

    #[test]
    fn test_kind_dispatch_covers_wrappers() {
        assert_eq!(string().kind(), SchemaKind::String);
        assert_eq!(string().optional().kind(), SchemaKind::Optional);
        assert_eq!(string().default_value("x").kind(), SchemaKind::Default);
        assert_eq!(string().transform().kind(), SchemaKind::Transform);
    }

    #[test]
    fn test_object_shape_preserves_declaration_order() {
        let schema = object([("b", string()), ("a", string()), ("c", string())]);
        let keys: Vec<&str> = schema
            .object_shape()
            .unwrap()
            .into_iter()
            .map(|(key, _)| key)
            .collect();
        assert_eq!(keys, ["b", "a", "c"]);
    }

    #[test]
    fn test_accessors_reject_foreign_kinds() {
        assert!(string().object_shape().is_none());
        assert!(object([("a", string())]).array_element().is_none());
        assert!(literal("x").enum_values().is_none());
    }

    #[test]
    fn test_union_options_in_order() {
        let schema = union([string(), literal(1)]);
        let options = schema.union_options().unwrap();
        assert_eq!(options.len(), 2);
        assert_eq!(options[0].kind(), SchemaKind::String);
        assert_eq!(options[1].kind(), SchemaKind::Literal);
    }

    #[test]
    fn test_enum_values_keep_order() {
        let schema = enumeration(["b", "a"]);
        assert_eq!(schema.enum_values().unwrap(), vec![json!("b"), json!("a")]);
    }

    #[test]
    fn test_default_spec_exposes_inner_and_value() {
        let schema = string().default_value("fallback");
        let spec = schema.unwrap_default().unwrap();
        assert_eq!(spec.node.kind(), SchemaKind::String);
        assert_eq!(spec.value.resolve(), json!("fallback"));
    }

    #[test]
    fn test_transform_exposes_input_side() {
        let schema = array(string()).transform();
        let input = schema.transform_input().unwrap();
        assert_eq!(input.kind(), SchemaKind::Array);
    }
}
