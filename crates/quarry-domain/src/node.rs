//! Schema node kinds and the default-value capability

use std::fmt;
use std::sync::Arc;

/// Discriminator for the recognized schema-node variants
///
/// Extraction dispatches on this tag with an exhaustive match; anything a
/// boundary adapter cannot map into the recognized set travels as
/// [`SchemaKind::Other`] and fails extraction loudly rather than matching
/// the wrong arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SchemaKind {
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
    Literal,
    /// A closed, ordered list of permitted values
    Enum,
    /// A keyed record of named fields
    Object,
    /// A homogeneous list of elements
    Array,
    /// One of several alternative shapes
    Union,
    /// An optional-wrapped inner node
    Optional,
    /// A default-wrapped inner node
    Default,
    /// A transform/pipe wrapper around an input-side node
    Transform,
    /// A variant outside the recognized set; carries the foreign
    /// discriminator verbatim for diagnostics
    Other(String),
}

impl SchemaKind {
    /// Discriminator name, as reported in diagnostics
    pub fn name(&self) -> &str {
        match self {
            SchemaKind::String => "string",
            SchemaKind::Number => "number",
            SchemaKind::Boolean => "boolean",
            SchemaKind::Date => "date",
            SchemaKind::Any => "any",
            SchemaKind::Literal => "literal",
            SchemaKind::Enum => "enum",
            SchemaKind::Object => "object",
            SchemaKind::Array => "array",
            SchemaKind::Union => "union",
            SchemaKind::Optional => "optional",
            SchemaKind::Default => "default",
            SchemaKind::Transform => "transform",
            SchemaKind::Other(name) => name,
        }
    }
}

impl fmt::Display for SchemaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A default configured on a default-wrapped schema node
///
/// Either a ready value or a zero-argument producer. Producers are resolved
/// eagerly, exactly once per extraction (per ADR-007); chunk consumers only
/// ever see the resolved value.
#[derive(Clone)]
pub enum DefaultValue {
    /// A ready JSON value
    Value(serde_json::Value),
    /// A producer invoked at extraction time
    Provider(Arc<dyn Fn() -> serde_json::Value + Send + Sync>),
}

impl DefaultValue {
    /// Wrap a ready value
    pub fn from_value(value: impl Into<serde_json::Value>) -> Self {
        DefaultValue::Value(value.into())
    }

    /// Wrap a zero-argument producer
    pub fn from_provider(
        provider: impl Fn() -> serde_json::Value + Send + Sync + 'static,
    ) -> Self {
        DefaultValue::Provider(Arc::new(provider))
    }

    /// Resolve to a concrete value, invoking the producer if there is one
    pub fn resolve(&self) -> serde_json::Value {
        match self {
            DefaultValue::Value(value) => value.clone(),
            DefaultValue::Provider(provider) => provider(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Value(value) => f.debug_tuple("Value").field(value).finish(),
            DefaultValue::Provider(_) => f.write_str("Provider(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_kind_name_roundtrip() {
        assert_eq!(SchemaKind::Transform.name(), "transform");
        assert_eq!(SchemaKind::Other("bigint".to_string()).name(), "bigint");
        assert_eq!(SchemaKind::Union.to_string(), "union");
    }

    #[test]
    fn test_default_value_resolves_ready_value() {
        let default = DefaultValue::from_value(5);
        assert_eq!(default.resolve(), json!(5));
    }

    #[test]
    fn test_default_provider_resolves_on_demand() {
        let default = DefaultValue::from_provider(|| json!([1, 2, 3]));
        assert_eq!(default.resolve(), json!([1, 2, 3]));
        assert_eq!(default.resolve(), json!([1, 2, 3]));
    }

    #[test]
    fn test_provider_debug_does_not_invoke() {
        let default = DefaultValue::from_provider(|| unreachable!("must not run"));
        assert_eq!(format!("{default:?}"), "Provider(..)");
    }
}
