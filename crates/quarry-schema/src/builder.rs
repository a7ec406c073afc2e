//! Builder surface for constructing schema descriptions

use quarry_domain::DefaultValue;

use crate::Schema;

/// A UTF-8 text value
pub fn string() -> Schema {
    Schema::String
}

/// A numeric value
pub fn number() -> Schema {
    Schema::Number
}

/// A true/false value
pub fn boolean() -> Schema {
    Schema::Boolean
}

/// A calendar date or timestamp
pub fn date() -> Schema {
    Schema::Date
}

/// An unconstrained value
pub fn any() -> Schema {
    Schema::Any
}

/// Exactly one permitted value
pub fn literal(value: impl Into<serde_json::Value>) -> Schema {
    Schema::Literal(value.into())
}

/// A closed, ordered list of permitted values
pub fn enumeration<I, V>(values: I) -> Schema
where
    I: IntoIterator<Item = V>,
    V: Into<serde_json::Value>,
{
    Schema::Enum(values.into_iter().map(Into::into).collect())
}

/// A keyed record of named fields, in declaration order
pub fn object<I, K>(fields: I) -> Schema
where
    I: IntoIterator<Item = (K, Schema)>,
    K: Into<String>,
{
    Schema::Object(
        fields
            .into_iter()
            .map(|(key, field)| (key.into(), field))
            .collect(),
    )
}

/// A homogeneous list of elements
pub fn array(element: Schema) -> Schema {
    Schema::Array(Box::new(element))
}

/// One of several alternative shapes
pub fn union<I>(options: I) -> Schema
where
    I: IntoIterator<Item = Schema>,
{
    Schema::Union(options.into_iter().collect())
}

impl Schema {
    /// Mark this shape as optional
    pub fn optional(self) -> Schema {
        Schema::Optional(Box::new(self))
    }

    /// Attach a ready default value to this shape
    pub fn default_value(self, value: impl Into<serde_json::Value>) -> Schema {
        Schema::Default {
            inner: Box::new(self),
            value: DefaultValue::from_value(value),
        }
    }

    /// Attach a lazily produced default to this shape
    ///
    /// The producer runs during extraction, not when the schema is built,
    /// and never reaches chunk consumers.
    pub fn default_with(
        self,
        provider: impl Fn() -> serde_json::Value + Send + Sync + 'static,
    ) -> Schema {
        Schema::Default {
            inner: Box::new(self),
            value: DefaultValue::from_provider(provider),
        }
    }

    /// Mark this shape as post-processed
    ///
    /// Extraction describes the input side only; whatever the
    /// post-processing step yields is invisible to consumers of the shape.
    pub fn transform(self) -> Schema {
        Schema::Transform {
            input: Box::new(self),
        }
    }
}
