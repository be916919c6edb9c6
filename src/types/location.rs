//! Source position types.

use serde::{Deserialize, Serialize};
use tree_sitter::Node;

/// A span of source text.
///
/// Lines are 1-indexed, columns are 0-indexed, matching tree-sitter row/column
/// positions shifted onto editor-style line numbers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceLocation {
    /// Start line (1-indexed)
    pub start_line: usize,

    /// Start column (0-indexed)
    pub start_column: usize,

    /// End line (1-indexed)
    pub end_line: usize,

    /// End column (0-indexed)
    pub end_column: usize,
}

impl SourceLocation {
    /// Build a location from a CST node's positions.
    pub fn from_node(node: &Node) -> Self {
        Self {
            start_line: node.start_position().row + 1,
            start_column: node.start_position().column,
            end_line: node.end_position().row + 1,
            end_column: node.end_position().column,
        }
    }

    /// Zero-width location at the start of the source.
    ///
    /// Used for diagnostics that have no position, e.g. an unsupported
    /// language tag.
    pub fn zero() -> Self {
        Self {
            start_line: 1,
            start_column: 0,
            end_line: 1,
            end_column: 0,
        }
    }
}

impl Default for SourceLocation {
    fn default() -> Self {
        Self::zero()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_location() {
        let loc = SourceLocation::zero();
        assert_eq!(loc.start_line, 1);
        assert_eq!(loc.start_column, 0);
        assert_eq!(loc.end_line, 1);
        assert_eq!(loc.end_column, 0);
    }
}
