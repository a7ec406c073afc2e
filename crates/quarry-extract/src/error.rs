//! Error types for chunk extraction

use thiserror::Error;

/// Errors that can occur during chunk extraction
///
/// Extraction is all-or-nothing: the first error raised anywhere in the
/// traversal aborts the whole pass, surfaces unchanged to the caller of the
/// façade, and no partial chunk tree is ever produced.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    /// A node reference was absent where one was required
    #[error("Schema node is missing {}", location(.path, .key))]
    MissingSchema {
        /// Address of the absent node
        path: Option<String>,
        /// Declared key of the absent node
        key: Option<String>,
    },

    /// A node's discriminator is outside the recognized set
    #[error("Unsupported schema variant `{variant}` {}", location(.path, .key))]
    UnsupportedVariant {
        /// The foreign discriminator, verbatim
        variant: String,
        /// Address of the offending node
        path: Option<String>,
        /// Declared key of the offending node
        key: Option<String>,
    },

    /// A transform wrapper's input-side node could not be located
    #[error("Transform input schema not found {}", location(.path, .key))]
    MalformedTransform {
        /// Address of the transform node
        path: Option<String>,
        /// Declared key of the transform node
        key: Option<String>,
    },

    /// Recursion exceeded the configured depth limit; the schema is deeper
    /// than `max_depth` or contains a cycle
    #[error("Schema nesting exceeded {limit} levels {}", location(.path, &None))]
    CyclicSchema {
        /// The depth limit that was hit
        limit: usize,
        /// Address at which the limit was hit
        path: Option<String>,
    },
}

fn location(path: &Option<String>, key: &Option<String>) -> String {
    match (path, key) {
        (Some(path), Some(key)) => format!("at `{path}` (key `{key}`)"),
        (Some(path), None) => format!("at `{path}`"),
        (None, Some(key)) => format!("for key `{key}`"),
        (None, None) => "at schema root".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_schema_display_with_full_location() {
        let err = ExtractError::MissingSchema {
            path: Some("meta.count".to_string()),
            key: Some("count".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Schema node is missing at `meta.count` (key `count`)"
        );
    }

    #[test]
    fn test_missing_schema_display_at_root() {
        let err = ExtractError::MissingSchema {
            path: None,
            key: None,
        };
        assert_eq!(err.to_string(), "Schema node is missing at schema root");
    }

    #[test]
    fn test_unsupported_variant_names_discriminator() {
        let err = ExtractError::UnsupportedVariant {
            variant: "bigint".to_string(),
            path: Some("id".to_string()),
            key: Some("id".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported schema variant `bigint` at `id` (key `id`)"
        );
    }

    #[test]
    fn test_cyclic_schema_display_carries_limit() {
        let err = ExtractError::CyclicSchema {
            limit: 128,
            path: Some("a.b[]".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Schema nesting exceeded 128 levels at `a.b[]`"
        );
    }
}
