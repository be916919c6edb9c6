//! Canonical declaration model.
//!
//! The language-agnostic representation every grammar's nodes are normalized
//! into. Declarations are immutable once produced and owned by the
//! `ParseResult` that created them.

use serde::{Deserialize, Serialize};

use super::SourceLocation;

/// A declaration extracted from source code.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Declaration {
    Function(FunctionDeclaration),
    Class(ClassDeclaration),
    Interface(InterfaceDeclaration),
    TypeAlias(TypeAliasDeclaration),
    Variable(VariableDeclaration),
}

impl Declaration {
    /// The declared name, or the `"(anonymous)"` sentinel.
    pub fn name(&self) -> &str {
        match self {
            Declaration::Function(d) => &d.name,
            Declaration::Class(d) => &d.name,
            Declaration::Interface(d) => &d.name,
            Declaration::TypeAlias(d) => &d.name,
            Declaration::Variable(d) => &d.name,
        }
    }

    pub fn location(&self) -> &SourceLocation {
        match self {
            Declaration::Function(d) => &d.location,
            Declaration::Class(d) => &d.location,
            Declaration::Interface(d) => &d.location,
            Declaration::TypeAlias(d) => &d.location,
            Declaration::Variable(d) => &d.location,
        }
    }

    pub(crate) fn location_mut(&mut self) -> &mut SourceLocation {
        match self {
            Declaration::Function(d) => &mut d.location,
            Declaration::Class(d) => &mut d.location,
            Declaration::Interface(d) => &mut d.location,
            Declaration::TypeAlias(d) => &mut d.location,
            Declaration::Variable(d) => &mut d.location,
        }
    }
}

/// A function or method declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionDeclaration {
    pub name: String,
    pub location: SourceLocation,
    pub parameters: Vec<Parameter>,

    /// Declared return type, raw source text (typed languages only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_type: Option<String>,

    pub is_async: bool,
    pub is_generator: bool,
}

/// A function parameter.
///
/// `type` and `default_value` are raw source-text slices, not parsed
/// expressions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,

    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<String>,
}

impl Parameter {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            r#type: None,
            default_value: None,
        }
    }
}

/// A class declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDeclaration {
    pub name: String,
    pub location: SourceLocation,

    /// Superclass, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extends: Option<String>,

    /// Implemented interfaces (TypeScript)
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub implements: Vec<String>,

    pub members: Vec<ClassMember>,
}

/// Kind of a class member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberKind {
    Method,
    Property,
    Getter,
    Setter,
}

/// Member accessibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Accessibility {
    #[default]
    Public,
    Private,
    Protected,
}

/// A member of a class body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassMember {
    pub kind: MemberKind,
    pub name: String,
    pub accessibility: Accessibility,
    pub is_static: bool,

    /// Declared type for properties, raw source text
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub r#type: Option<String>,
}

/// An interface declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceDeclaration {
    pub name: String,
    pub location: SourceLocation,

    /// Extended interfaces
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub extends: Vec<String>,

    pub members: Vec<InterfaceMember>,
}

/// A member of an interface body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterfaceMember {
    pub kind: MemberKind,
    pub name: String,

    /// Member type, raw source text
    #[serde(rename = "type")]
    pub r#type: String,

    pub is_optional: bool,
}

/// A type alias declaration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TypeAliasDeclaration {
    pub name: String,
    pub location: SourceLocation,

    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub type_parameters: Vec<String>,

    /// Aliased type, raw source text
    pub definition: String,
}

/// Declaration keyword of a variable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VariableKind {
    Const,
    Let,
    Var,
}

/// A variable declaration.
///
/// Only the first declarator of a multi-declarator statement is captured.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VariableDeclaration {
    pub name: String,
    pub location: SourceLocation,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub declared_type: Option<String>,

    /// Initializer expression, raw source text
    #[serde(skip_serializing_if = "Option::is_none")]
    pub initializer: Option<String>,

    pub kind: VariableKind,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declaration_name_accessor() {
        let decl = Declaration::Variable(VariableDeclaration {
            name: "MAX_RETRIES".to_string(),
            location: SourceLocation::zero(),
            declared_type: None,
            initializer: Some("3".to_string()),
            kind: VariableKind::Const,
        });
        assert_eq!(decl.name(), "MAX_RETRIES");
    }

    #[test]
    fn test_declaration_serde_tag() {
        let decl = Declaration::Function(FunctionDeclaration {
            name: "greet".to_string(),
            location: SourceLocation::zero(),
            parameters: vec![Parameter::named("name")],
            return_type: None,
            is_async: false,
            is_generator: false,
        });
        let json = serde_json::to_value(&decl).unwrap();
        assert_eq!(json["kind"], "function");
        assert_eq!(json["name"], "greet");
    }
}
