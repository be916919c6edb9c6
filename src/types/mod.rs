//! Core types for the extraction engine.

mod declaration;
mod language;
mod location;
mod options;
mod result;

pub use declaration::{
    Accessibility, ClassDeclaration, ClassMember, Declaration, FunctionDeclaration,
    InterfaceDeclaration, InterfaceMember, MemberKind, Parameter, TypeAliasDeclaration,
    VariableDeclaration, VariableKind,
};
pub use language::Language;
pub use location::SourceLocation;
pub use options::{EngineConfig, ParseOptions, DEFAULT_MAX_SOURCE_BYTES};
pub use result::{
    CallExpression, ExportDeclaration, ExportSpecifier, ImportDeclaration, ImportSpecifier,
    ParseError, ParseResult,
};
