//! TypeScript extraction rules.
//!
//! Extends the ECMAScript base table with the TypeScript-only declaration
//! forms: interfaces, type aliases, and abstract classes.

use tree_sitter::Node;

use crate::extract::common::{
    annotation_text, child_of_kind, field_text, has_child_of_kind, location, name_or_anonymous,
    node_string,
};
use crate::extract::javascript::{base_node_table, ecma_extract};
use crate::extract::{Extraction, GrammarRules, NodeTable, NodeTag};
use crate::types::{
    Declaration, InterfaceDeclaration, InterfaceMember, MemberKind, TypeAliasDeclaration,
};

/// Extraction rules for the TypeScript grammar.
pub struct TypeScriptRules {
    table: NodeTable,
}

impl TypeScriptRules {
    pub fn new() -> Self {
        let mut table = base_node_table();
        table.extend([
            ("interface_declaration", NodeTag::Interface),
            ("type_alias_declaration", NodeTag::TypeAlias),
            ("abstract_class_declaration", NodeTag::Class),
        ]);
        Self { table }
    }
}

impl Default for TypeScriptRules {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRules for TypeScriptRules {
    fn classify(&self, kind: &str) -> Option<NodeTag> {
        self.table.get(kind).copied()
    }

    fn extract(&self, tag: NodeTag, node: Node<'_>, source: &str) -> Option<Extraction> {
        match tag {
            NodeTag::Interface => Some(Extraction::Declaration(Declaration::Interface(
                parse_interface(node, source),
            ))),
            NodeTag::TypeAlias => Some(Extraction::Declaration(Declaration::TypeAlias(
                parse_type_alias(node, source),
            ))),
            _ => ecma_extract(tag, node, source),
        }
    }
}

fn parse_interface(node: Node<'_>, source: &str) -> InterfaceDeclaration {
    let mut extends = Vec::new();
    // the clause kind was renamed across grammar versions, accept both
    if let Some(clause) = child_of_kind(node, "extends_type_clause")
        .or_else(|| child_of_kind(node, "extends_clause"))
    {
        let mut cursor = clause.walk();
        extends = clause
            .named_children(&mut cursor)
            .filter(|n| {
                matches!(
                    n.kind(),
                    "type_identifier" | "nested_type_identifier" | "generic_type"
                )
            })
            .map(|n| node_string(n, source))
            .collect();
    }

    let mut members = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            let kind = match child.kind() {
                "property_signature" => MemberKind::Property,
                "method_signature" => MemberKind::Method,
                _ => continue,
            };
            let Some(name) = field_text(child, "name", source) else {
                continue;
            };
            let r#type = child
                .child_by_field_name("type")
                .or_else(|| child.child_by_field_name("return_type"))
                .map(|n| annotation_text(n, source))
                .unwrap_or_default();
            members.push(InterfaceMember {
                kind,
                name,
                r#type,
                is_optional: has_child_of_kind(child, "?"),
            });
        }
    }

    InterfaceDeclaration {
        name: name_or_anonymous(node, source),
        location: location(node),
        extends,
        members,
    }
}

fn parse_type_alias(node: Node<'_>, source: &str) -> TypeAliasDeclaration {
    let mut type_parameters = Vec::new();
    if let Some(params) = node.child_by_field_name("type_parameters") {
        let mut cursor = params.walk();
        for param in params.named_children(&mut cursor) {
            if param.kind() != "type_parameter" {
                continue;
            }
            let text = field_text(param, "name", source)
                .unwrap_or_else(|| node_string(param, source));
            type_parameters.push(text);
        }
    }

    TypeAliasDeclaration {
        name: name_or_anonymous(node, source),
        location: location(node),
        type_parameters,
        definition: field_text(node, "value", source).unwrap_or_default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_extends_ecma_base() {
        let rules = TypeScriptRules::new();
        // ECMAScript base
        assert_eq!(rules.classify("function_declaration"), Some(NodeTag::Function));
        assert_eq!(rules.classify("import_statement"), Some(NodeTag::Import));
        // TypeScript-specific
        assert_eq!(rules.classify("interface_declaration"), Some(NodeTag::Interface));
        assert_eq!(rules.classify("type_alias_declaration"), Some(NodeTag::TypeAlias));
        assert_eq!(rules.classify("abstract_class_declaration"), Some(NodeTag::Class));
        // uninteresting nodes stay unmapped
        assert_eq!(rules.classify("if_statement"), None);
    }
}
