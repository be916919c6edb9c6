//! Python extraction rules.
//!
//! Python has no export statements, interfaces, or declaration keywords;
//! module- and class-level assignments are normalized into the Variable
//! variant, and aliased imports become rename pairs.

use tree_sitter::Node;

use crate::extract::common::{
    call_arguments, field_text, find_descendant, has_child_of_kind, location, name_or_anonymous,
    node_string, node_text,
};
use crate::extract::{Extraction, GrammarRules, NodeTable, NodeTag};
use crate::types::{
    Accessibility, CallExpression, ClassDeclaration, ClassMember, Declaration,
    FunctionDeclaration, ImportDeclaration, ImportSpecifier, MemberKind, Parameter,
    VariableDeclaration, VariableKind,
};

const CALL_ARGUMENT_KINDS: &[&str] = &["identifier", "string", "integer", "float"];

fn node_table() -> NodeTable {
    [
        ("import_statement", NodeTag::Import),
        ("import_from_statement", NodeTag::Import),
        ("function_definition", NodeTag::Function),
        ("class_definition", NodeTag::Class),
        ("assignment", NodeTag::Variable),
        ("call", NodeTag::Call),
    ]
    .into_iter()
    .collect()
}

/// Extraction rules for the Python grammar.
pub struct PythonRules {
    table: NodeTable,
}

impl PythonRules {
    pub fn new() -> Self {
        Self {
            table: node_table(),
        }
    }
}

impl Default for PythonRules {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRules for PythonRules {
    fn classify(&self, kind: &str) -> Option<NodeTag> {
        self.table.get(kind).copied()
    }

    fn extract(&self, tag: NodeTag, node: Node<'_>, source: &str) -> Option<Extraction> {
        match tag {
            NodeTag::Import => parse_import(node, source).map(Extraction::Import),
            NodeTag::Function => Some(Extraction::Declaration(Declaration::Function(
                parse_function(node, source),
            ))),
            NodeTag::Class => Some(Extraction::Declaration(Declaration::Class(parse_class(
                node, source,
            )))),
            NodeTag::Variable => parse_assignment(node, source)
                .map(|v| Extraction::Declaration(Declaration::Variable(v))),
            NodeTag::Call => parse_call(node, source).map(Extraction::Call),
            _ => None,
        }
    }
}

fn parse_import(node: Node<'_>, source: &str) -> Option<ImportDeclaration> {
    // from-imports carry the module in a dedicated field
    let module = node.child_by_field_name("module_name");
    let mut source_path = module
        .map(|n| node_string(n, source))
        .unwrap_or_default();

    let mut specifiers = Vec::new();
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        if module.is_some_and(|m| m.id() == child.id()) {
            continue;
        }
        match child.kind() {
            "dotted_name" => {
                let name = node_string(child, source);
                if source_path.is_empty() {
                    source_path = name.clone();
                }
                specifiers.push(ImportSpecifier::plain(name));
            }
            "aliased_import" => {
                let Some(imported) = field_text(child, "name", source) else {
                    continue;
                };
                if source_path.is_empty() {
                    source_path = imported.clone();
                }
                let local = field_text(child, "alias", source)
                    .unwrap_or_else(|| imported.clone());
                specifiers.push(ImportSpecifier {
                    imported,
                    local,
                    is_default: false,
                    is_type: false,
                });
            }
            "wildcard_import" => specifiers.push(ImportSpecifier::plain("*")),
            _ => {}
        }
    }

    Some(ImportDeclaration {
        source: source_path,
        location: location(node),
        specifiers,
    })
}

fn parse_function(node: Node<'_>, source: &str) -> FunctionDeclaration {
    let is_generator = node
        .child_by_field_name("body")
        .is_some_and(has_own_yield);

    FunctionDeclaration {
        name: name_or_anonymous(node, source),
        location: location(node),
        parameters: parse_parameters(node, source),
        return_type: field_text(node, "return_type", source),
        is_async: has_child_of_kind(node, "async"),
        is_generator,
    }
}

/// Whether a function body yields in its own scope. A `yield` inside a
/// nested function belongs to that function, so the search does not descend
/// past `function_definition` boundaries.
fn has_own_yield(body: Node<'_>) -> bool {
    let mut stack = vec![body];
    while let Some(node) = stack.pop() {
        if node.kind() == "yield" {
            return true;
        }
        for i in 0..node.child_count() {
            if let Some(child) = node.child(i) {
                if child.kind() != "function_definition" {
                    stack.push(child);
                }
            }
        }
    }
    false
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
            "typed_parameter" => {
                let Some(name) = child.named_child(0) else {
                    continue;
                };
                out.push(Parameter {
                    name: node_string(name, source),
                    r#type: field_text(child, "type", source),
                    default_value: None,
                });
            }
            "default_parameter" | "typed_default_parameter" => {
                let Some(name) = field_text(child, "name", source) else {
                    continue;
                };
                out.push(Parameter {
                    name,
                    r#type: field_text(child, "type", source),
                    default_value: field_text(child, "value", source),
                });
            }
            // `*args` / `**kwargs`, stars kept in the name
            "list_splat_pattern" | "dictionary_splat_pattern" => {
                out.push(Parameter::named(node_text(child, source)))
            }
            _ => {}
        }
    }
    out
}

fn parse_class(node: Node<'_>, source: &str) -> ClassDeclaration {
    // first base class only; Python multiple inheritance is rare enough
    // that the canonical model keeps a single `extends` slot
    let extends = node
        .child_by_field_name("superclasses")
        .and_then(|bases| bases.named_child(0))
        .map(|n| node_string(n, source));

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
        implements: Vec::new(),
        members,
    }
}

fn parse_class_member(node: Node<'_>, source: &str) -> Option<ClassMember> {
    match node.kind() {
        "function_definition" => Some(method_member(node, source, false)),
        "decorated_definition" => {
            let def = node.child_by_field_name("definition")?;
            if def.kind() != "function_definition" {
                return None;
            }
            let is_static = {
                let decorators = node_text(node, source);
                decorators.contains("@staticmethod") || decorators.contains("@classmethod")
            };
            Some(method_member(def, source, is_static))
        }
        "expression_statement" => {
            let assignment = find_descendant(node, "assignment")?;
            let left = assignment.child_by_field_name("left")?;
            if left.kind() != "identifier" {
                return None;
            }
            let name = node_string(left, source);
            Some(ClassMember {
                accessibility: accessibility_of(&name),
                kind: MemberKind::Property,
                name,
                is_static: false,
                r#type: field_text(assignment, "type", source),
            })
        }
        _ => None,
    }
}

fn method_member(node: Node<'_>, source: &str, is_static: bool) -> ClassMember {
    let name = name_or_anonymous(node, source);
    ClassMember {
        accessibility: accessibility_of(&name),
        kind: MemberKind::Method,
        name,
        is_static,
        r#type: None,
    }
}

/// Leading underscore is the Python privacy convention.
fn accessibility_of(name: &str) -> Accessibility {
    if name.starts_with('_') {
        Accessibility::Private
    } else {
        Accessibility::Public
    }
}

fn parse_assignment(node: Node<'_>, source: &str) -> Option<VariableDeclaration> {
    let left = node.child_by_field_name("left")?;
    // tuple and attribute targets are skipped
    if left.kind() != "identifier" {
        return None;
    }
    Some(VariableDeclaration {
        name: node_string(left, source),
        location: location(node),
        declared_type: field_text(node, "type", source),
        initializer: field_text(node, "right", source),
        kind: VariableKind::Var,
    })
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
    fn test_table_maps_python_synonyms() {
        let rules = PythonRules::new();
        assert_eq!(rules.classify("function_definition"), Some(NodeTag::Function));
        assert_eq!(rules.classify("class_definition"), Some(NodeTag::Class));
        assert_eq!(rules.classify("import_from_statement"), Some(NodeTag::Import));
        assert_eq!(rules.classify("call"), Some(NodeTag::Call));
        assert_eq!(rules.classify("export_statement"), None);
    }

    #[test]
    fn test_accessibility_convention() {
        assert_eq!(accessibility_of("_private"), Accessibility::Private);
        assert_eq!(accessibility_of("public"), Accessibility::Public);
    }
}
