//! Syntax error collection.

use tree_sitter::Node;

use super::walker::walk;
use crate::types::{ParseError, SourceLocation};

/// Message attached to every collected error node.
pub const SYNTAX_ERROR_MESSAGE: &str = "Syntax error";

/// Collect one diagnostic per error node in the tree.
///
/// The `has_error` pre-check keeps clean trees to a single traversal.
/// Overlapping error nodes each produce a separate entry; there is no
/// deduplication.
pub fn collect_errors(root: Node<'_>) -> Vec<ParseError> {
    if !root.has_error() {
        return Vec::new();
    }

    let mut errors = Vec::new();
    walk(root, |node| {
        if node.is_error() {
            errors.push(ParseError::new(
                SYNTAX_ERROR_MESSAGE,
                SourceLocation::from_node(&node),
            ));
        }
    });
    errors
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_ts(source: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_typescript::language_typescript())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn test_clean_tree_yields_no_errors() {
        let tree = parse_ts("const x = 1;\n");
        assert!(collect_errors(tree.root_node()).is_empty());
    }

    #[test]
    fn test_broken_source_yields_positioned_errors() {
        let tree = parse_ts("function broken((( {\n");
        let errors = collect_errors(tree.root_node());
        assert!(!errors.is_empty());
        for error in &errors {
            assert_eq!(error.message, SYNTAX_ERROR_MESSAGE);
            assert!(error.location.start_line >= 1);
        }
    }
}
