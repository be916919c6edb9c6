//! JavaScript extraction rules.
//!
//! Also hosts the shared ECMAScript handlers the TypeScript rules build on:
//! both grammars use the same field layout for the constructs they have in
//! common, so the TypeScript table extends this one rather than duplicating
//! it.

use tree_sitter::Node;

use crate::extract::common::{
    annotation_text, call_arguments, child_of_kind, field_text, has_child_of_kind, location,
    name_or_anonymous, node_string, node_text, string_literal,
};
use crate::extract::{Extraction, GrammarRules, NodeTable, NodeTag};
use crate::ANONYMOUS_NAME;
use crate::types::{
    Accessibility, CallExpression, ClassDeclaration, ClassMember, Declaration, ExportDeclaration,
    ExportSpecifier, FunctionDeclaration, ImportDeclaration, ImportSpecifier, MemberKind,
    Parameter, VariableDeclaration, VariableKind,
};

/// Call arguments captured as raw text: identifiers and string/number
/// literals only.
const CALL_ARGUMENT_KINDS: &[&str] = &["identifier", "string", "number"];

/// Node kinds shared by the JavaScript and TypeScript grammars.
pub(crate) fn base_node_table() -> NodeTable {
    [
        ("import_statement", NodeTag::Import),
        ("export_statement", NodeTag::Export),
        ("function_declaration", NodeTag::Function),
        ("generator_function_declaration", NodeTag::Function),
        ("method_definition", NodeTag::Function),
        ("class_declaration", NodeTag::Class),
        ("lexical_declaration", NodeTag::Variable),
        ("variable_declaration", NodeTag::Variable),
        ("call_expression", NodeTag::Call),
    ]
    .into_iter()
    .collect()
}

/// Extraction rules for the JavaScript grammar.
pub struct JavaScriptRules {
    table: NodeTable,
}

impl JavaScriptRules {
    pub fn new() -> Self {
        Self {
            table: base_node_table(),
        }
    }
}

impl Default for JavaScriptRules {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRules for JavaScriptRules {
    fn classify(&self, kind: &str) -> Option<NodeTag> {
        self.table.get(kind).copied()
    }

    fn extract(&self, tag: NodeTag, node: Node<'_>, source: &str) -> Option<Extraction> {
        ecma_extract(tag, node, source)
    }
}

/// Shared dispatch for the ECMAScript grammar family.
pub(crate) fn ecma_extract(tag: NodeTag, node: Node<'_>, source: &str) -> Option<Extraction> {
    match tag {
        NodeTag::Import => parse_import(node, source).map(Extraction::Import),
        NodeTag::Export => parse_export(node, source).map(Extraction::Export),
        NodeTag::Function => Some(Extraction::Declaration(Declaration::Function(
            parse_function(node, source),
        ))),
        NodeTag::Class => Some(Extraction::Declaration(Declaration::Class(parse_class(
            node, source,
        )))),
        NodeTag::Variable => {
            parse_variable(node, source).map(|v| Extraction::Declaration(Declaration::Variable(v)))
        }
        NodeTag::Call => parse_call(node, source).map(Extraction::Call),
        _ => None,
    }
}

fn parse_import(node: Node<'_>, source: &str) -> Option<ImportDeclaration> {
    let source_path = node
        .child_by_field_name("source")
        .map(|n| string_literal(n, source))
        .unwrap_or_default();

    // `import type { T } from '...'` marks every specifier as type-only
    let statement_is_type = has_child_of_kind(node, "type");

    let mut specifiers = Vec::new();
    if let Some(clause) = child_of_kind(node, "import_clause") {
        let mut cursor = clause.walk();
        for child in clause.named_children(&mut cursor) {
            match child.kind() {
                // a bare identifier under the clause is the default import
                "identifier" => specifiers.push(ImportSpecifier {
                    imported: node_string(child, source),
                    local: node_string(child, source),
                    is_default: true,
                    is_type: statement_is_type,
                }),
                "namespace_import" => {
                    if let Some(alias) = child.named_child(0) {
                        specifiers.push(ImportSpecifier {
                            imported: "*".to_string(),
                            local: node_string(alias, source),
                            is_default: false,
                            is_type: statement_is_type,
                        });
                    }
                }
                "named_imports" => {
                    let mut inner = child.walk();
                    for spec in child.named_children(&mut inner) {
                        if spec.kind() != "import_specifier" {
                            continue;
                        }
                        let Some(imported) = field_text(spec, "name", source) else {
                            continue;
                        };
                        // a rename is structural: the alias field on the
                        // specifier node, never identifier position
                        let local = field_text(spec, "alias", source)
                            .unwrap_or_else(|| imported.clone());
                        specifiers.push(ImportSpecifier {
                            imported,
                            local,
                            is_default: false,
                            is_type: statement_is_type || has_child_of_kind(spec, "type"),
                        });
                    }
                }
                _ => {}
            }
        }
    }

    Some(ImportDeclaration {
        source: source_path,
        location: location(node),
        specifiers,
    })
}

fn parse_export(node: Node<'_>, source: &str) -> Option<ExportDeclaration> {
    // source is present only for re-exports
    let re_export_source = node
        .child_by_field_name("source")
        .map(|n| string_literal(n, source));

    let mut specifiers = Vec::new();
    if let Some(clause) = child_of_kind(node, "export_clause") {
        let mut cursor = clause.walk();
        for spec in clause.named_children(&mut cursor) {
            if spec.kind() != "export_specifier" {
                continue;
            }
            let Some(local) = field_text(spec, "name", source) else {
                continue;
            };
            let exported = field_text(spec, "alias", source).unwrap_or_else(|| local.clone());
            specifiers.push(ExportSpecifier { local, exported });
        }
    } else if let Some(decl) = node.child_by_field_name("declaration") {
        // `export function foo() {}` -- the declaration itself is picked up
        // by the walker; record only the exported name here
        let name = declared_export_name(decl, source);
        specifiers.push(ExportSpecifier {
            local: name.clone(),
            exported: name,
        });
    } else if has_child_of_kind(node, "*") {
        specifiers.push(ExportSpecifier {
            local: "*".to_string(),
            exported: "*".to_string(),
        });
    } else if has_child_of_kind(node, "default") {
        specifiers.push(ExportSpecifier {
            local: "default".to_string(),
            exported: "default".to_string(),
        });
    }

    Some(ExportDeclaration {
        location: location(node),
        specifiers,
        source: re_export_source,
    })
}

/// Name exposed by an exported declaration. Variable statements have no
/// `name` field of their own; the first declarator carries it.
fn declared_export_name(decl: Node<'_>, source: &str) -> String {
    match decl.kind() {
        "lexical_declaration" | "variable_declaration" => {
            let mut cursor = decl.walk();
            let declarator = decl
                .named_children(&mut cursor)
                .find(|c| c.kind() == "variable_declarator");
            declarator
                .and_then(|d| field_text(d, "name", source))
                .unwrap_or_else(|| ANONYMOUS_NAME.to_string())
        }
        _ => name_or_anonymous(decl, source),
    }
}

pub(crate) fn parse_function(node: Node<'_>, source: &str) -> FunctionDeclaration {
    FunctionDeclaration {
        name: name_or_anonymous(node, source),
        location: location(node),
        parameters: parse_parameters(node, source),
        return_type: node
            .child_by_field_name("return_type")
            .map(|n| annotation_text(n, source)),
        is_async: has_child_of_kind(node, "async"),
        is_generator: has_child_of_kind(node, "*"),
    }
}

fn parse_parameters(node: Node<'_>, source: &str) -> Vec<Parameter> {
    let Some(params) = node.child_by_field_name("parameters") else {
        return Vec::new();
    };
    let mut out = Vec::new();
    let mut cursor = params.walk();
    for child in params.named_children(&mut cursor) {
        match child.kind() {
            "identifier" => out.push(Parameter::named(node_text(child, source))),
            // TypeScript wraps each parameter; the pattern field holds the name
            "required_parameter" | "optional_parameter" => {
                let Some(pattern) = child.child_by_field_name("pattern") else {
                    continue;
                };
                out.push(Parameter {
                    name: node_string(pattern, source),
                    r#type: child
                        .child_by_field_name("type")
                        .map(|n| annotation_text(n, source)),
                    default_value: field_text(child, "value", source),
                });
            }
            // plain JS default: `function f(a = 1)`
            "assignment_pattern" => {
                let Some(left) = child.child_by_field_name("left") else {
                    continue;
                };
                out.push(Parameter {
                    name: node_string(left, source),
                    r#type: None,
                    default_value: field_text(child, "right", source),
                });
            }
            // keeps the dots, `...args`
            "rest_pattern" => out.push(Parameter::named(node_text(child, source))),
            _ => {}
        }
    }
    out
}

pub(crate) fn parse_class(node: Node<'_>, source: &str) -> ClassDeclaration {
    let mut extends = None;
    let mut implements = Vec::new();

    if let Some(heritage) = child_of_kind(node, "class_heritage") {
        // TypeScript wraps the parent in an extends_clause; JavaScript puts
        // the expression directly under the heritage node
        if let Some(clause) = child_of_kind(heritage, "extends_clause") {
            extends = clause
                .child_by_field_name("value")
                .or_else(|| clause.named_child(0))
                .map(|n| node_string(n, source));
        } else {
            extends = heritage.named_child(0).map(|n| node_string(n, source));
        }
        if let Some(clause) = child_of_kind(heritage, "implements_clause") {
            let mut cursor = clause.walk();
            implements = clause
                .named_children(&mut cursor)
                .map(|n| node_string(n, source))
                .collect();
        }
    }

    let mut members = Vec::new();
    if let Some(body) = node.child_by_field_name("body") {
        let mut cursor = body.walk();
        for child in body.named_children(&mut cursor) {
            if let Some(member) = parse_class_member(child, source) {
                members.push(member);
            }
        }
    }

    ClassDeclaration {
        name: name_or_anonymous(node, source),
        location: location(node),
        extends,
        implements,
        members,
    }
}

fn parse_class_member(node: Node<'_>, source: &str) -> Option<ClassMember> {
    let kind = match node.kind() {
        "method_definition" => {
            if has_child_of_kind(node, "get") {
                MemberKind::Getter
            } else if has_child_of_kind(node, "set") {
                MemberKind::Setter
            } else {
                MemberKind::Method
            }
        }
        "field_definition" | "public_field_definition" => MemberKind::Property,
        _ => return None,
    };
    let name = field_text(node, "name", source)?;

    let accessibility = match child_of_kind(node, "accessibility_modifier")
        .map(|n| node_string(n, source))
        .as_deref()
    {
        Some("private") => Accessibility::Private,
        Some("protected") => Accessibility::Protected,
        _ => Accessibility::Public,
    };

    Some(ClassMember {
        kind,
        name,
        accessibility,
        is_static: has_child_of_kind(node, "static"),
        r#type: node
            .child_by_field_name("type")
            .map(|n| annotation_text(n, source)),
    })
}

pub(crate) fn parse_variable(node: Node<'_>, source: &str) -> Option<VariableDeclaration> {
    let kind = if has_child_of_kind(node, "const") {
        VariableKind::Const
    } else if has_child_of_kind(node, "let") {
        VariableKind::Let
    } else {
        VariableKind::Var
    };

    // first declarator only
    let mut cursor = node.walk();
    let declarator = node
        .named_children(&mut cursor)
        .find(|c| c.kind() == "variable_declarator")?;
    let name = field_text(declarator, "name", source)?;

    Some(VariableDeclaration {
        name,
        location: location(node),
        declared_type: declarator
            .child_by_field_name("type")
            .map(|n| annotation_text(n, source)),
        initializer: field_text(declarator, "value", source),
        kind,
    })
}

pub(crate) fn parse_call(node: Node<'_>, source: &str) -> Option<CallExpression> {
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
    fn test_base_table_synonyms() {
        let table = base_node_table();
        assert_eq!(table.get("function_declaration"), Some(&NodeTag::Function));
        assert_eq!(table.get("method_definition"), Some(&NodeTag::Function));
        assert_eq!(table.get("lexical_declaration"), Some(&NodeTag::Variable));
        assert_eq!(table.get("arrow_function"), None);
    }
}
