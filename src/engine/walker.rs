//! Generic depth-first CST traversal.

use tree_sitter::Node;

/// Visit every node in pre-order, including nodes nested inside nodes already
/// classified as declarations, so nested functions and classes are still
/// discovered.
///
/// Traversal is total: error nodes may appear anywhere, so there is no early
/// termination. An explicit stack bounds recursion depth against
/// pathologically nested input.
pub fn walk<'t, F>(root: Node<'t>, mut visit: F)
where
    F: FnMut(Node<'t>),
{
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        visit(node);
        // push in reverse so children are visited left to right
        for i in (0..node.child_count()).rev() {
            if let Some(child) = node.child(i) {
                stack.push(child);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tree_sitter::Parser;

    fn parse_js(source: &str) -> tree_sitter::Tree {
        let mut parser = Parser::new();
        parser
            .set_language(&tree_sitter_javascript::language())
            .unwrap();
        parser.parse(source, None).unwrap()
    }

    #[test]
    fn test_visits_every_node_once() {
        let tree = parse_js("function a() { function b() {} }");
        let mut visited = Vec::new();
        walk(tree.root_node(), |node| visited.push(node.id()));

        let mut unique = visited.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), visited.len());
    }

    #[test]
    fn test_preorder_and_nested_nodes() {
        let tree = parse_js("function outer() { function inner() {} }");
        let mut kinds = Vec::new();
        walk(tree.root_node(), |node| {
            if node.kind() == "function_declaration" {
                kinds.push(node.start_byte());
            }
        });
        // both functions visited, outer before inner
        assert_eq!(kinds.len(), 2);
        assert!(kinds[0] < kinds[1]);
    }
}
