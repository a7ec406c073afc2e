//! Trait definitions for the schema-node capability set
//!
//! These traits define the boundary between the extraction engine and any
//! concrete schema-description library. The engine is written only against
//! [`SchemaNode`]; `quarry-schema` ships the reference implementation, and
//! other libraries are adapted the same way without touching the engine.

use crate::node::{DefaultValue, SchemaKind};

/// One node in a composable schema description
///
/// `kind` is required; every other accessor defaults to `None` so an
/// implementor only supplies the capabilities its variant actually carries.
/// Library-specific lookups (field-name guessing, version shims) belong in
/// the implementor, never in the traversal: a node whose `kind` advertises
/// a capability its accessor does not honor is malformed and fails
/// extraction.
pub trait SchemaNode {
    /// Discriminator used for extraction dispatch
    fn kind(&self) -> SchemaKind;

    /// Inner node of an `optional` wrapper
    fn unwrap_optional(&self) -> Option<&dyn SchemaNode> {
        None
    }

    /// Inner node and configured value of a `default` wrapper
    fn unwrap_default(&self) -> Option<DefaultSpec<'_>> {
        None
    }

    /// Alternative shapes of a `union` node, in declaration order
    fn union_options(&self) -> Option<Vec<&dyn SchemaNode>> {
        None
    }

    /// Declared fields of an `object` node, in declaration order
    fn object_shape(&self) -> Option<Vec<(&str, &dyn SchemaNode)>> {
        None
    }

    /// The single permitted value of a `literal` node
    fn literal_value(&self) -> Option<serde_json::Value> {
        None
    }

    /// Ordered permitted values of an `enum` node
    fn enum_values(&self) -> Option<Vec<serde_json::Value>> {
        None
    }

    /// Element node of an `array`
    fn array_element(&self) -> Option<&dyn SchemaNode> {
        None
    }

    /// Input-side node of a `transform`/pipe wrapper
    ///
    /// The input side is the shape a value must have going in, not what it
    /// becomes; the output shape is invisible to extraction.
    fn transform_input(&self) -> Option<&dyn SchemaNode> {
        None
    }
}

/// Constituents of a default-wrapped node
pub struct DefaultSpec<'a> {
    /// The wrapped inner node
    pub node: &'a dyn SchemaNode,
    /// The configured default
    pub value: &'a DefaultValue,
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Bare;

    impl SchemaNode for Bare {
        fn kind(&self) -> SchemaKind {
            SchemaKind::Any
        }
    }

    #[test]
    fn test_accessors_default_to_none() {
        let node = Bare;
        assert_eq!(node.kind(), SchemaKind::Any);
        assert!(node.unwrap_optional().is_none());
        assert!(node.unwrap_default().is_none());
        assert!(node.union_options().is_none());
        assert!(node.object_shape().is_none());
        assert!(node.literal_value().is_none());
        assert!(node.enum_values().is_none());
        assert!(node.array_element().is_none());
        assert!(node.transform_input().is_none());
    }
}
