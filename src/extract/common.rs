//! Shared node helpers used by every rule set.

use tree_sitter::Node;

use crate::types::SourceLocation;
use crate::ANONYMOUS_NAME;

/// Raw source text covered by a node.
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> &'a str {
    source.get(node.start_byte()..node.end_byte()).unwrap_or("")
}

/// Owned copy of a node's text.
pub fn node_string(node: Node<'_>, source: &str) -> String {
    node_text(node, source).to_string()
}

pub fn location(node: Node<'_>) -> SourceLocation {
    SourceLocation::from_node(&node)
}

/// Text of the grammar's `name` field, or the anonymous sentinel.
pub fn name_or_anonymous(node: Node<'_>, source: &str) -> String {
    node.child_by_field_name("name")
        .map(|n| node_string(n, source))
        .unwrap_or_else(|| ANONYMOUS_NAME.to_string())
}

/// Text of a named field, if present.
pub fn field_text(node: Node<'_>, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|n| node_string(n, source))
}

/// Type annotation text with the leading `:` separator stripped.
pub fn annotation_text(node: Node<'_>, source: &str) -> String {
    node_text(node, source)
        .trim_start_matches(':')
        .trim()
        .to_string()
}

/// Unquote a string literal node: exactly one delimiter per side, so quote
/// characters inside the literal survive.
pub fn string_literal(node: Node<'_>, source: &str) -> String {
    let text = node_text(node, source);
    let mut chars = text.chars();
    match (chars.next(), chars.next_back()) {
        (Some(open), Some(close))
            if open == close && matches!(open, '"' | '\'' | '`') =>
        {
            chars.as_str().to_string()
        }
        _ => text.to_string(),
    }
}

/// First direct child with the given kind, anonymous tokens included.
pub fn child_of_kind<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|c| c.kind() == kind);
    found
}

pub fn has_child_of_kind(node: Node<'_>, kind: &str) -> bool {
    child_of_kind(node, kind).is_some()
}

/// First descendant with the given kind (depth-first, includes `node`).
pub fn find_descendant<'t>(node: Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut stack = vec![node];
    while let Some(current) = stack.pop() {
        if current.kind() == kind {
            return Some(current);
        }
        for i in (0..current.child_count()).rev() {
            if let Some(child) = current.child(i) {
                stack.push(child);
            }
        }
    }
    None
}

/// Collect the argument slices the model captures: only the node kinds in
/// `literal_kinds` (identifier and string/number literals per language);
/// other argument expressions are silently omitted.
pub fn call_arguments(node: Node<'_>, source: &str, literal_kinds: &[&str]) -> Vec<String> {
    let Some(args) = node.child_by_field_name("arguments") else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut cursor = args.walk();
    for child in args.named_children(&mut cursor) {
        if literal_kinds.contains(&child.kind()) {
            out.push(node_string(child, source));
        }
    }
    out
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
    fn test_child_of_kind_sees_anonymous_tokens() {
        let source = "const x = 1;";
        let tree = parse_js(source);
        let decl = tree.root_node().child(0).unwrap();
        assert!(child_of_kind(decl, "const").is_some());
        assert!(child_of_kind(decl, "let").is_none());
    }

    #[test]
    fn test_string_literal_strips_one_delimiter_per_side() {
        let source = "import x from '\"quoted\"';";
        let tree = parse_js(source);
        let import = tree.root_node().child(0).unwrap();
        let path = import.child_by_field_name("source").unwrap();
        // quote characters inside the literal are content, not delimiters
        assert_eq!(string_literal(path, source), "\"quoted\"");
    }
}
