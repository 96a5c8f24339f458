//! Shared lexer descriptor registry.

use crate::lexer::LexerConfig;

/// A read-mostly collection of lexer descriptors.
///
/// The registry is built once, wrapped in an `Arc`, and injected into each
/// lexer through [`Lexer::set_registry`](crate::Lexer::set_registry) so that
/// every lexer in a composition consults the same lookup state. It holds
/// descriptors, not lexer instances: construction of lexers stays with the
/// caller.
#[derive(Debug, Default)]
pub struct LexerRegistry {
    configs: Vec<LexerConfig>,
}

impl LexerRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a descriptor to the registry.
    pub fn register(&mut self, config: LexerConfig) {
        self.configs.push(config);
    }

    /// Look up a descriptor by canonical name or alias, case-insensitively.
    pub fn by_name(&self, name: &str) -> Option<&LexerConfig> {
        self.configs.iter().find(|config| {
            config.name.eq_ignore_ascii_case(name)
                || config
                    .aliases
                    .iter()
                    .any(|alias| alias.eq_ignore_ascii_case(name))
        })
    }

    /// Descriptors whose filename patterns claim `filename`.
    ///
    /// Patterns are `*.ext` suffixes or literal filenames.
    pub fn matches_filename(&self, filename: &str) -> Vec<&LexerConfig> {
        self.configs
            .iter()
            .filter(|config| {
                config.filenames.iter().any(|pattern| {
                    match pattern.strip_prefix('*') {
                        Some(suffix) => filename.ends_with(suffix),
                        None => filename == pattern,
                    }
                })
            })
            .collect()
    }

    /// Iterate over all registered descriptors.
    pub fn iter(&self) -> impl Iterator<Item = &LexerConfig> {
        self.configs.iter()
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.configs.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.configs.is_empty()
    }
}
