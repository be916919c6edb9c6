//! Go extraction rules.
//!
//! Go folds several concepts into `type_spec`: the shape of the declared type
//! decides whether it normalizes to Class (struct), Interface, or TypeAlias.
//! Exports are by capitalization, so no Export records are produced.

use tree_sitter::Node;

use crate::extract::common::{
    call_arguments, field_text, find_descendant, location, name_or_anonymous, node_string,
    string_literal,
};
use crate::extract::{Extraction, GrammarRules, NodeTable, NodeTag};
use crate::types::{
    Accessibility, CallExpression, ClassDeclaration, ClassMember, Declaration,
    FunctionDeclaration, ImportDeclaration, ImportSpecifier, InterfaceDeclaration,
    InterfaceMember, MemberKind, Parameter, SourceLocation, TypeAliasDeclaration,
    VariableDeclaration, VariableKind,
};

const CALL_ARGUMENT_KINDS: &[&str] = &[
    "identifier",
    "interpreted_string_literal",
    "raw_string_literal",
    "int_literal",
    "float_literal",
];

fn node_table() -> NodeTable {
    [
        // per-spec rather than per-declaration so grouped imports and
        // const/var blocks yield one record each
        ("import_spec", NodeTag::Import),
        ("function_declaration", NodeTag::Function),
        ("method_declaration", NodeTag::Function),
        ("type_spec", NodeTag::TypeAlias),
        ("type_alias", NodeTag::TypeAlias),
        ("const_spec", NodeTag::Variable),
        ("var_spec", NodeTag::Variable),
        ("short_var_declaration", NodeTag::Variable),
        ("call_expression", NodeTag::Call),
    ]
    .into_iter()
    .collect()
}

/// Extraction rules for the Go grammar.
pub struct GoRules {
    table: NodeTable,
}

impl GoRules {
    pub fn new() -> Self {
        Self {
            table: node_table(),
        }
    }
}

impl Default for GoRules {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRules for GoRules {
    fn classify(&self, kind: &str) -> Option<NodeTag> {
        self.table.get(kind).copied()
    }

    fn extract(&self, tag: NodeTag, node: Node<'_>, source: &str) -> Option<Extraction> {
        match tag {
            NodeTag::Import => parse_import(node, source).map(Extraction::Import),
            NodeTag::Function => Some(Extraction::Declaration(Declaration::Function(
                parse_function(node, source),
            ))),
            NodeTag::TypeAlias => parse_type_spec(node, source).map(Extraction::Declaration),
            NodeTag::Variable => parse_variable(node, source)
                .map(|v| Extraction::Declaration(Declaration::Variable(v))),
            NodeTag::Call => parse_call(node, source).map(Extraction::Call),
            _ => None,
        }
    }
}

fn parse_import(node: Node<'_>, source: &str) -> Option<ImportDeclaration> {
    let path = string_literal(node.child_by_field_name("path")?, source);
    let base = path.rsplit('/').next().unwrap_or(&path).to_string();
    // the name field is a package alias (or `.` / `_`)
    let local = field_text(node, "name", source).unwrap_or_else(|| base.clone());

    Some(ImportDeclaration {
        source: path,
        location: location(node),
        specifiers: vec![ImportSpecifier {
            imported: base,
            local,
            is_default: false,
            is_type: false,
        }],
    })
}

fn parse_function(node: Node<'_>, source: &str) -> FunctionDeclaration {
    FunctionDeclaration {
        name: name_or_anonymous(node, source),
        location: location(node),
        parameters: parse_parameters(node, source),
        return_type: field_text(node, "result", source),
        is_async: false,
        is_generator: false,
    }
}

fn parse_parameters(node: Node<'_>, source: &str) -> Vec<Parameter> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut cursor = params.walk();
    for decl in params.named_children(&mut cursor) {
        if !matches!(
            decl.kind(),
            "parameter_declaration" | "variadic_parameter_declaration"
        ) {
            continue;
        }
        let r#type = field_text(decl, "type", source);

        // one declaration can bind several names: `a, b int`
        let mut names = Vec::new();
        let mut inner = decl.walk();
        for name in decl.children_by_field_name("name", &mut inner) {
            names.push(node_string(name, source));
        }
        if names.is_empty() {
            // unnamed parameter in a signature, type only
            out.push(Parameter {
                name: "_".to_string(),
                r#type,
                default_value: None,
            });
        } else {
            for name in names {
                out.push(Parameter {
                    name,
                    r#type: r#type.clone(),
                    default_value: None,
                });
            }
        }
    }
    out
}

fn parse_type_spec(node: Node<'_>, source: &str) -> Option<Declaration> {
    let name = field_text(node, "name", source)?;
    let loc = location(node);
    let ty = node.child_by_field_name("type")?;

    Some(match ty.kind() {
        "struct_type" => Declaration::Class(parse_struct(name, loc, ty, source)),
        "interface_type" => Declaration::Interface(parse_interface(name, loc, ty, source)),
        _ => Declaration::TypeAlias(TypeAliasDeclaration {
            name,
            location: loc,
            type_parameters: type_parameters(node, source),
            definition: node_string(ty, source),
        }),
    })
}

fn type_parameters(node: Node<'_>, source: &str) -> Vec<String> {
    let Some(params) = node.child_by_field_name("type_parameters") else {
        return Vec::new();
    };
    let mut cursor = params.walk();
    params
        .named_children(&mut cursor)
        .filter_map(|p| field_text(p, "name", source))
        .collect()
}

fn parse_struct(
    name: String,
    location: SourceLocation,
    struct_type: Node<'_>,
    source: &str,
) -> ClassDeclaration {
    let mut members = Vec::new();
    if let Some(fields) = find_descendant(struct_type, "field_declaration_list") {
        let mut cursor = fields.walk();
        for field in fields.named_children(&mut cursor) {
            if field.kind() != "field_declaration" {
                continue;
            }
            let r#type = field_text(field, "type", source);
            let mut inner = field.walk();
            for field_name in field.children_by_field_name("name", &mut inner) {
                let member_name = node_string(field_name, source);
                members.push(ClassMember {
                    accessibility: accessibility_of(&member_name),
                    kind: MemberKind::Property,
                    name: member_name,
                    is_static: false,
                    r#type: r#type.clone(),
                });
            }
        }
    }

    ClassDeclaration {
        name,
        location,
        extends: None,
        implements: Vec::new(),
        members,
    }
}

fn parse_interface(
    name: String,
    location: SourceLocation,
    interface_type: Node<'_>,
    source: &str,
) -> InterfaceDeclaration {
    let mut members = Vec::new();
    let mut cursor = interface_type.walk();
    for child in interface_type.named_children(&mut cursor) {
        // kind renamed between grammar versions
        if !matches!(child.kind(), "method_spec" | "method_elem") {
            continue;
        }
        let Some(member_name) = field_text(child, "name", source) else {
            continue;
        };
        members.push(InterfaceMember {
            kind: MemberKind::Method,
            name: member_name,
            r#type: field_text(child, "result", source).unwrap_or_default(),
            is_optional: false,
        });
    }

    InterfaceDeclaration {
        name,
        location,
        extends: Vec::new(),
        members,
    }
}

/// Exported identifiers start with an uppercase letter.
fn accessibility_of(name: &str) -> Accessibility {
    if name.chars().next().is_some_and(|c| c.is_uppercase()) {
        Accessibility::Public
    } else {
        Accessibility::Private
    }
}

fn parse_variable(node: Node<'_>, source: &str) -> Option<VariableDeclaration> {
    match node.kind() {
        "const_spec" | "var_spec" => Some(VariableDeclaration {
            name: field_text(node, "name", source)?,
            location: location(node),
            declared_type: field_text(node, "type", source),
            initializer: field_text(node, "value", source),
            kind: if node.kind() == "const_spec" {
                VariableKind::Const
            } else {
                VariableKind::Var
            },
        }),
        "short_var_declaration" => {
            let left = node.child_by_field_name("left")?;
            let first = find_descendant(left, "identifier")?;
            Some(VariableDeclaration {
                name: node_string(first, source),
                location: location(node),
                declared_type: None,
                initializer: field_text(node, "right", source),
                kind: VariableKind::Var,
            })
        }
        _ => None,
    }
}

fn parse_call(node: Node<'_>, source: &str) -> Option<CallExpression> {
    let callee = field_text(node, "function", source)?;
    Some(CallExpression {
        callee,
        location: location(node),
        arguments: call_arguments(node, source, CALL_ARGUMENT_KINDS),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_maps_go_synonyms() {
        let rules = GoRules::new();
        assert_eq!(rules.classify("function_declaration"), Some(NodeTag::Function));
        assert_eq!(rules.classify("method_declaration"), Some(NodeTag::Function));
        assert_eq!(rules.classify("const_spec"), Some(NodeTag::Variable));
        assert_eq!(rules.classify("import_spec"), Some(NodeTag::Import));
        // declarations are handled per-spec, not per-block
        assert_eq!(rules.classify("import_declaration"), None);
        assert_eq!(rules.classify("const_declaration"), None);
    }

    #[test]
    fn test_exported_name_convention() {
        assert_eq!(accessibility_of("Println"), Accessibility::Public);
        assert_eq!(accessibility_of("helper"), Accessibility::Private);
    }
}
