//! Configuration for chunk extraction

use serde::{Deserialize, Serialize};

/// Configuration for the extraction engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractConfig {
    /// Maximum schema nesting depth before extraction fails
    ///
    /// The capability set cannot structurally rule out cyclic schema
    /// graphs, so the engine bounds recursion and fails fast with
    /// `CyclicSchema` instead of recursing unboundedly.
    pub max_depth: usize,
}

impl ExtractConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.max_depth == 0 {
            return Err("max_depth must be greater than 0".to_string());
        }
        Ok(())
    }

    /// Shallow preset: tight depth bound for flat document schemas
    pub fn shallow() -> Self {
        Self { max_depth: 32 }
    }

    /// Deep preset: generous depth bound for heavily nested schemas
    pub fn deep() -> Self {
        Self { max_depth: 1024 }
    }

    /// Load configuration from TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse TOML: {}", e))
    }

    /// Serialize configuration to TOML string
    pub fn to_toml(&self) -> Result<String, String> {
        toml::to_string_pretty(self).map_err(|e| format!("Failed to serialize to TOML: {}", e))
    }
}

impl Default for ExtractConfig {
    /// Default configuration with a balanced depth bound
    fn default() -> Self {
        Self { max_depth: 128 }
    }
}
