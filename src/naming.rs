//! Statistical naming-convention classification.
//!
//! Aggregates extracted identifiers per declaration kind and infers the
//! dominant convention with a frequency-threshold rule. Derived, not
//! persisted: recomputed on demand from a `ParseResult`.

use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::types::{Declaration, ParseResult};
use crate::{CONSTANT_SUBGROUP_THRESHOLD, NAMING_DOMINANCE_THRESHOLD};

/// Recognized identifier casing styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NamingConvention {
    #[serde(rename = "camelCase")]
    CamelCase,
    #[serde(rename = "PascalCase")]
    PascalCase,
    #[serde(rename = "snake_case")]
    SnakeCase,
    #[serde(rename = "SCREAMING_SNAKE_CASE")]
    ScreamingSnakeCase,
    #[serde(rename = "kebab-case")]
    KebabCase,
    #[serde(rename = "unknown")]
    Unknown,
}

/// Dominant convention per declaration group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamingPattern {
    pub variables: NamingConvention,
    pub functions: NamingConvention,
    pub classes: NamingConvention,
    pub interfaces: NamingConvention,
    pub constants: NamingConvention,
}

impl NamingPattern {
    pub fn unknown() -> Self {
        Self {
            variables: NamingConvention::Unknown,
            functions: NamingConvention::Unknown,
            classes: NamingConvention::Unknown,
            interfaces: NamingConvention::Unknown,
            constants: NamingConvention::Unknown,
        }
    }
}

impl Default for NamingPattern {
    fn default() -> Self {
        Self::unknown()
    }
}

lazy_static! {
    static ref CAMEL_CASE: Regex = Regex::new(r"^[a-z][a-zA-Z0-9]*$").unwrap();
    static ref PASCAL_CASE: Regex = Regex::new(r"^[A-Z][a-zA-Z0-9]*$").unwrap();
    static ref SNAKE_CASE: Regex = Regex::new(r"^[a-z][a-z0-9_]*$").unwrap();
    static ref SCREAMING_SNAKE: Regex = Regex::new(r"^[A-Z][A-Z0-9_]*$").unwrap();
    static ref KEBAB_CASE: Regex = Regex::new(r"^[a-z][a-z0-9-]*$").unwrap();
    static ref CONSTANT_NAME: Regex = Regex::new(r"^[A-Z_]+$").unwrap();
}

/// Infer the project's naming conventions from a parse result.
pub fn analyze_naming(result: &ParseResult) -> NamingPattern {
    let mut functions = Vec::new();
    let mut classes = Vec::new();
    let mut interfaces = Vec::new();
    let mut variables = Vec::new();

    for decl in &result.declarations {
        match decl {
            Declaration::Function(f) => functions.push(f.name.as_str()),
            Declaration::Class(c) => classes.push(c.name.as_str()),
            Declaration::Interface(i) => interfaces.push(i.name.as_str()),
            Declaration::Variable(v) => variables.push(v.name.as_str()),
            Declaration::TypeAlias(_) => {}
        }
    }

    let mut pattern = NamingPattern::unknown();
    if !functions.is_empty() {
        pattern.functions = detect_convention(&functions);
    }
    if !classes.is_empty() {
        pattern.classes = detect_convention(&classes);
    }
    if !interfaces.is_empty() {
        pattern.interfaces = detect_convention(&interfaces);
    }
    if !variables.is_empty() {
        pattern.variables = detect_convention(&variables);

        // SCREAMING_SNAKE_CASE subgroup forces the constants convention
        // independent of the general variable classification
        let constant_like = variables
            .iter()
            .filter(|name| CONSTANT_NAME.is_match(name))
            .count();
        if constant_like as f64 > variables.len() as f64 * CONSTANT_SUBGROUP_THRESHOLD {
            pattern.constants = NamingConvention::ScreamingSnakeCase;
        }
    }

    pattern
}

/// Detect the dominant convention of a name group.
///
/// Patterns are tested in a fixed priority order and the first match wins a
/// name's tally: a single lowercase word is ambiguous between camelCase and
/// snake_case, and the order resolves it in camelCase's favor. The order is
/// a compatibility policy, not a derived rule.
pub fn detect_convention(names: &[&str]) -> NamingConvention {
    if names.is_empty() {
        return NamingConvention::Unknown;
    }

    let mut camel = 0usize;
    let mut pascal = 0usize;
    let mut snake = 0usize;
    let mut screaming = 0usize;
    let mut kebab = 0usize;

    for name in names {
        if CAMEL_CASE.is_match(name) {
            camel += 1;
        } else if PASCAL_CASE.is_match(name) {
            pascal += 1;
        } else if SNAKE_CASE.is_match(name) {
            snake += 1;
        } else if SCREAMING_SNAKE.is_match(name) {
            screaming += 1;
        } else if KEBAB_CASE.is_match(name) {
            kebab += 1;
        }
    }

    let threshold = names.len() as f64 * NAMING_DOMINANCE_THRESHOLD;
    let dominant = |count: usize| count as f64 >= threshold;

    if dominant(camel) {
        NamingConvention::CamelCase
    } else if dominant(pascal) {
        NamingConvention::PascalCase
    } else if dominant(snake) {
        NamingConvention::SnakeCase
    } else if dominant(screaming) {
        NamingConvention::ScreamingSnakeCase
    } else if dominant(kebab) {
        NamingConvention::KebabCase
    } else {
        NamingConvention::Unknown
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Language, SourceLocation, VariableDeclaration, VariableKind};

    fn variable(name: &str) -> Declaration {
        Declaration::Variable(VariableDeclaration {
            name: name.to_string(),
            location: SourceLocation::zero(),
            declared_type: None,
            initializer: None,
            kind: VariableKind::Const,
        })
    }

    #[test]
    fn test_threshold_majority_wins() {
        let names = vec![
            "getUser",
            "createUser",
            "deleteUser",
            "updateUser",
            "listUsers",
            "UserThing",
        ];
        // 5/6 camelCase is above the 60% bar
        assert_eq!(detect_convention(&names), NamingConvention::CamelCase);
    }

    #[test]
    fn test_even_split_is_unknown() {
        let names = vec!["getUser", "createUser", "deleteUser", "UserA", "UserB", "UserC"];
        assert_eq!(detect_convention(&names), NamingConvention::Unknown);
    }

    #[test]
    fn test_single_lowercase_word_counts_as_camel() {
        // ambiguous with snake_case; the fixed order resolves it
        assert_eq!(detect_convention(&["parse"]), NamingConvention::CamelCase);
    }

    #[test]
    fn test_snake_and_screaming_and_kebab() {
        assert_eq!(
            detect_convention(&["my_var", "other_var"]),
            NamingConvention::SnakeCase
        );
        assert_eq!(
            detect_convention(&["MAX_SIZE", "MIN_SIZE"]),
            NamingConvention::ScreamingSnakeCase
        );
        assert_eq!(
            detect_convention(&["my-widget", "other-widget"]),
            NamingConvention::KebabCase
        );
    }

    #[test]
    fn test_empty_group_is_unknown() {
        assert_eq!(detect_convention(&[]), NamingConvention::Unknown);

        let result = ParseResult::empty(Language::TypeScript);
        let pattern = analyze_naming(&result);
        assert_eq!(pattern, NamingPattern::unknown());
    }

    #[test]
    fn test_constants_override() {
        let mut result = ParseResult::empty(Language::TypeScript);
        // 2/5 constant-like (40% > 30%) while camelCase dominates overall
        result.declarations = vec![
            variable("maxSize"),
            variable("minSize"),
            variable("pageSize"),
            variable("MAX_RETRIES"),
            variable("TIMEOUT"),
        ];

        let pattern = analyze_naming(&result);
        assert_eq!(pattern.variables, NamingConvention::CamelCase);
        assert_eq!(pattern.constants, NamingConvention::ScreamingSnakeCase);
    }

    #[test]
    fn test_constants_override_needs_strict_majority_of_threshold() {
        let mut result = ParseResult::empty(Language::TypeScript);
        // exactly 30% is not enough
        result.declarations = vec![
            variable("a1"),
            variable("b2"),
            variable("c3"),
            variable("d4"),
            variable("e5"),
            variable("f6"),
            variable("g7"),
            variable("MAX"),
            variable("MIN"),
            variable("TOP"),
        ];

        let pattern = analyze_naming(&result);
        assert_eq!(pattern.constants, NamingConvention::Unknown);
    }

    #[test]
    fn test_convention_wire_names() {
        assert_eq!(
            serde_json::to_value(NamingConvention::CamelCase).unwrap(),
            "camelCase"
        );
        assert_eq!(
            serde_json::to_value(NamingConvention::ScreamingSnakeCase).unwrap(),
            "SCREAMING_SNAKE_CASE"
        );
        assert_eq!(
            serde_json::to_value(NamingConvention::KebabCase).unwrap(),
            "kebab-case"
        );
    }
}
