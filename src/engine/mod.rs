//! Extraction engine: grammar resolution, traversal, and result assembly.

pub mod errors;
pub mod registry;
pub mod walker;

use tracing::debug;
use tree_sitter::Parser;

use crate::extract::Extraction;
use crate::naming::{self, NamingPattern};
use crate::types::{ParseError, ParseOptions, ParseResult, SourceLocation};

pub use registry::{Grammar, GrammarRegistry};

/// Multi-language source extraction engine.
///
/// A stateless service value: each `parse` call builds a fresh tree-sitter
/// parser and its own result structures, so there is no cross-call state and
/// independent files can be parsed from separate threads by the caller.
pub struct SourceExtractor {
    registry: GrammarRegistry,
}

impl Default for SourceExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceExtractor {
    /// Create an extractor with all supported grammars registered.
    pub fn new() -> Self {
        Self {
            registry: GrammarRegistry::new(),
        }
    }

    pub fn registry(&self) -> &GrammarRegistry {
        &self.registry
    }

    /// Parse source text into the canonical model.
    ///
    /// Total over its input: unsupported languages, internal parser failures,
    /// and source syntax errors are all reported as data in
    /// `ParseResult::errors`, never as a panic or an `Err`.
    pub fn parse(&self, source: &str, options: &ParseOptions) -> ParseResult {
        let Some(grammar) = self.registry.resolve(options.language) else {
            return ParseResult::with_error(
                options.language,
                ParseError::new(
                    format!("Unsupported language: {}", options.language),
                    SourceLocation::zero(),
                ),
            );
        };

        // tree-sitter parsers are not shareable across threads, so each call
        // gets its own
        let mut parser = Parser::new();
        if let Err(e) = parser.set_language(&grammar.language) {
            return ParseResult::with_error(
                options.language,
                ParseError::new(
                    format!("Grammar initialization failed: {e}"),
                    SourceLocation::zero(),
                ),
            );
        }
        let Some(tree) = parser.parse(source, None) else {
            return ParseResult::with_error(
                options.language,
                ParseError::new("Failed to parse source", SourceLocation::zero()),
            );
        };

        let root = tree.root_node();
        let mut result = ParseResult::empty(options.language);
        result.errors = errors::collect_errors(root);

        if !options.tolerant && result.has_errors() {
            debug!(
                language = %options.language,
                errors = result.errors.len(),
                "intolerant parse stopped at syntax errors"
            );
            return result;
        }

        let rules = grammar.rules.as_ref();
        walker::walk(root, |node| {
            let Some(tag) = rules.classify(node.kind()) else {
                return;
            };
            match rules.extract(tag, node, source) {
                Some(Extraction::Declaration(decl)) => result.declarations.push(decl),
                Some(Extraction::Import(import)) => result.imports.push(import),
                Some(Extraction::Export(export)) => result.exports.push(export),
                Some(Extraction::Call(call)) => result.calls.push(call),
                // missing sub-fields: skip the record, keep walking
                None => {}
            }
        });

        if !options.include_locations {
            strip_locations(&mut result);
        }

        debug!(
            language = %options.language,
            declarations = result.declarations.len(),
            imports = result.imports.len(),
            exports = result.exports.len(),
            calls = result.calls.len(),
            errors = result.errors.len(),
            "parse complete"
        );

        result
    }

    /// Infer the project's naming conventions from a parse result.
    pub fn analyze_naming(&self, result: &ParseResult) -> NamingPattern {
        naming::analyze_naming(result)
    }
}

fn strip_locations(result: &mut ParseResult) {
    for decl in &mut result.declarations {
        *decl.location_mut() = SourceLocation::zero();
    }
    for import in &mut result.imports {
        import.location = SourceLocation::zero();
    }
    for export in &mut result.exports {
        export.location = SourceLocation::zero();
    }
    for call in &mut result.calls {
        call.location = SourceLocation::zero();
    }
    for error in &mut result.errors {
        error.location = SourceLocation::zero();
    }
}
