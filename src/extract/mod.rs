//! Per-language extraction rules.
//!
//! Each supported grammar gets one `GrammarRules` implementation holding an
//! enum-keyed dispatch table (native node kind -> `NodeTag`) plus the handlers
//! that normalize that grammar's node shapes into the canonical model. The
//! tables map all language-specific synonyms for a concept onto one canonical
//! tag and are the single place where new languages are onboarded.

pub mod common;
pub mod go;
pub mod javascript;
pub mod python;
pub mod typescript;

use std::collections::HashMap;

use tree_sitter::Node;

use crate::types::{CallExpression, Declaration, ExportDeclaration, ImportDeclaration};

/// Canonical classification of an interesting CST node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTag {
    Import,
    Export,
    Function,
    Class,
    Interface,
    TypeAlias,
    Variable,
    Call,
}

/// One canonical record produced by a handler.
#[derive(Debug, Clone)]
pub enum Extraction {
    Declaration(Declaration),
    Import(ImportDeclaration),
    Export(ExportDeclaration),
    Call(CallExpression),
}

/// Dispatch table shared by all rule sets, built once per grammar.
pub type NodeTable = HashMap<&'static str, NodeTag>;

/// Extraction rules for one grammar.
///
/// Handlers are pure: input is a native CST node plus the original source
/// text (the tree stores only byte offsets), output is one canonical record
/// or `None` when required sub-fields are missing. `None` never aborts the
/// walk.
pub trait GrammarRules: Send + Sync {
    /// Map a native node kind onto its canonical tag, if interesting.
    fn classify(&self, kind: &str) -> Option<NodeTag>;

    /// Normalize a classified node into a canonical record.
    fn extract(&self, tag: NodeTag, node: Node<'_>, source: &str) -> Option<Extraction>;
}
