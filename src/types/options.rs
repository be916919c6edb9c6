//! Parse options and engine configuration.

use serde::{Deserialize, Serialize};

use super::Language;

/// Options for a single `parse` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseOptions {
    /// Language of the source text
    pub language: Language,

    /// When false, suppress extraction if the tree contains syntax errors
    /// (only diagnostics are returned)
    pub tolerant: bool,

    /// When false, all locations in the result are zeroed
    pub include_locations: bool,
}

impl ParseOptions {
    /// Default options for a language: tolerant, with locations.
    pub fn new(language: Language) -> Self {
        Self {
            language,
            tolerant: true,
            include_locations: true,
        }
    }

    /// Set error tolerance.
    pub fn with_tolerant(mut self, tolerant: bool) -> Self {
        self.tolerant = tolerant;
        self
    }

    /// Set location reporting.
    pub fn with_locations(mut self, include_locations: bool) -> Self {
        self.include_locations = include_locations;
        self
    }
}

/// Engine configuration loaded from the environment.
///
/// The engine itself is pure; these knobs apply to the outer caller (the CLI),
/// which is where an input bound belongs since traversal is non-interruptible
/// once started.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Maximum accepted source size in bytes
    pub max_source_bytes: usize,
}

/// Default input bound for the CLI (10MB).
pub const DEFAULT_MAX_SOURCE_BYTES: usize = 10 * 1024 * 1024;

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_source_bytes: DEFAULT_MAX_SOURCE_BYTES,
        }
    }
}

impl EngineConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        Self {
            max_source_bytes: std::env::var("CODESIFT_MAX_SOURCE_BYTES")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(DEFAULT_MAX_SOURCE_BYTES),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = ParseOptions::new(Language::TypeScript);
        assert!(opts.tolerant);
        assert!(opts.include_locations);
    }

    #[test]
    fn test_builder() {
        let opts = ParseOptions::new(Language::Go)
            .with_tolerant(false)
            .with_locations(false);
        assert!(!opts.tolerant);
        assert!(!opts.include_locations);
    }
}
