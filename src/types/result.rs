//! Parse results: imports, exports, calls, errors, and the aggregate root.

use serde::{Deserialize, Serialize};

use super::{Declaration, Language, SourceLocation};

/// An import statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportDeclaration {
    /// Module path or package being imported
    pub source: String,

    pub location: SourceLocation,

    pub specifiers: Vec<ImportSpecifier>,
}

/// One named binding within an import clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImportSpecifier {
    /// Name on the exporting side
    pub imported: String,

    /// Name bound locally; equals `imported` when there is no rename
    pub local: String,

    pub is_default: bool,

    /// Type-only import (TypeScript)
    pub is_type: bool,
}

impl ImportSpecifier {
    /// A specifier with no rename.
    pub fn plain(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            imported: name.clone(),
            local: name,
            is_default: false,
            is_type: false,
        }
    }
}

/// An export statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportDeclaration {
    pub location: SourceLocation,

    pub specifiers: Vec<ExportSpecifier>,

    /// Present only for re-exports (`export { x } from '...'`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<String>,
}

/// One named binding within an export clause.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExportSpecifier {
    pub local: String,
    pub exported: String,
}

/// A call site.
///
/// `arguments` holds raw text slices of identifier/string/number arguments
/// only; other argument expressions are omitted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    pub callee: String,
    pub location: SourceLocation,
    pub arguments: Vec<String>,
}

/// A positioned diagnostic.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseError {
    pub message: String,
    pub location: SourceLocation,
}

impl ParseError {
    pub fn new(message: impl Into<String>, location: SourceLocation) -> Self {
        Self {
            message: message.into(),
            location,
        }
    }
}

/// Everything extracted from one `parse` call.
///
/// Produced once, never mutated after return, owned by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParseResult {
    pub language: Language,
    pub declarations: Vec<Declaration>,
    pub imports: Vec<ImportDeclaration>,
    pub exports: Vec<ExportDeclaration>,
    pub calls: Vec<CallExpression>,
    pub errors: Vec<ParseError>,
}

impl ParseResult {
    /// An empty result for the given language.
    pub fn empty(language: Language) -> Self {
        Self {
            language,
            declarations: Vec::new(),
            imports: Vec::new(),
            exports: Vec::new(),
            calls: Vec::new(),
            errors: Vec::new(),
        }
    }

    /// An empty result carrying a single diagnostic.
    pub fn with_error(language: Language, error: ParseError) -> Self {
        let mut result = Self::empty(language);
        result.errors.push(error);
        result
    }

    /// Whether any syntax or configuration errors were recorded.
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_result() {
        let result = ParseResult::empty(Language::Python);
        assert_eq!(result.language, Language::Python);
        assert!(result.declarations.is_empty());
        assert!(!result.has_errors());
    }

    #[test]
    fn test_plain_specifier() {
        let spec = ImportSpecifier::plain("useState");
        assert_eq!(spec.imported, spec.local);
        assert!(!spec.is_default);
        assert!(!spec.is_type);
    }
}
