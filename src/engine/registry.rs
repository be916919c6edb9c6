//! Grammar registry: language tag to grammar and extraction rules.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use crate::extract::go::GoRules;
use crate::extract::javascript::JavaScriptRules;
use crate::extract::python::PythonRules;
use crate::extract::typescript::TypeScriptRules;
use crate::extract::GrammarRules;
use crate::types::Language;

/// A registered grammar bundled with its extraction rules.
#[derive(Clone)]
pub struct Grammar {
    pub language: tree_sitter::Language,
    pub rules: Arc<dyn GrammarRules>,
}

/// Fixed mapping from language tags to grammars.
///
/// Lookup is a pure map with no dynamic loading. Tags without a registered
/// grammar (`rust`, `java`) fail closed: `resolve` returns `None` and the
/// engine reports an `Unsupported language` diagnostic.
pub struct GrammarRegistry {
    grammars: HashMap<Language, Grammar>,
}

impl Default for GrammarRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl GrammarRegistry {
    pub fn new() -> Self {
        let mut grammars = HashMap::new();
        grammars.insert(
            Language::TypeScript,
            Grammar {
                language: tree_sitter_typescript::language_typescript(),
                rules: Arc::new(TypeScriptRules::new()) as Arc<dyn GrammarRules>,
            },
        );
        grammars.insert(
            Language::JavaScript,
            Grammar {
                language: tree_sitter_javascript::language(),
                rules: Arc::new(JavaScriptRules::new()) as Arc<dyn GrammarRules>,
            },
        );
        grammars.insert(
            Language::Python,
            Grammar {
                language: tree_sitter_python::language(),
                rules: Arc::new(PythonRules::new()) as Arc<dyn GrammarRules>,
            },
        );
        grammars.insert(
            Language::Go,
            Grammar {
                language: tree_sitter_go::language(),
                rules: Arc::new(GoRules::new()) as Arc<dyn GrammarRules>,
            },
        );

        for language in grammars.keys() {
            debug!("Registered grammar: {}", language);
        }

        Self { grammars }
    }

    /// Resolve a language tag to its grammar, if registered.
    pub fn resolve(&self, language: Language) -> Option<&Grammar> {
        self.grammars.get(&language)
    }

    /// Tags with a registered grammar.
    pub fn supported_languages(&self) -> Vec<Language> {
        self.grammars.keys().copied().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registered_languages_resolve() {
        let registry = GrammarRegistry::new();
        for language in [
            Language::TypeScript,
            Language::JavaScript,
            Language::Python,
            Language::Go,
        ] {
            assert!(registry.resolve(language).is_some(), "{language}");
        }
    }

    #[test]
    fn test_unregistered_languages_fail_closed() {
        let registry = GrammarRegistry::new();
        assert!(registry.resolve(Language::Rust).is_none());
        assert!(registry.resolve(Language::Java).is_none());
        assert_eq!(registry.supported_languages().len(), 4);
    }
}
