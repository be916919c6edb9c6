//! Codesift
//!
//! Multi-language source extraction engine. Normalizes tree-sitter concrete
//! syntax trees from TypeScript, JavaScript, Python, and Go into one
//! canonical model of declarations, imports, exports, call sites, and syntax
//! errors, and infers project-wide naming conventions from the extracted
//! identifiers.

pub mod engine;
pub mod extract;
pub mod naming;
pub mod types;

pub use engine::{GrammarRegistry, SourceExtractor};
pub use naming::{analyze_naming, detect_convention, NamingConvention, NamingPattern};
pub use types::{
    CallExpression, Declaration, ExportDeclaration, ImportDeclaration, Language, ParseError,
    ParseOptions, ParseResult, SourceLocation,
};

use thiserror::Error;

/// Errors surfaced outside of `parse` (tag parsing, CLI input bounds).
///
/// `parse` itself never returns these: malformed input is always reported as
/// data in `ParseResult::errors`.
#[derive(Debug, Error)]
pub enum EngineError {
    #[error("unknown language tag: {0}")]
    UnknownLanguage(String),

    #[error("source exceeds maximum size of {limit} bytes (got {actual})")]
    SourceTooLarge { limit: usize, actual: usize },
}

/// Sentinel name for declarations with no name node.
pub const ANONYMOUS_NAME: &str = "(anonymous)";

/// A convention dominates its group at or above this share of names.
pub const NAMING_DOMINANCE_THRESHOLD: f64 = 0.6;

/// The constants override kicks in above this share of variable names.
pub const CONSTANT_SUBGROUP_THRESHOLD: f64 = 0.3;
