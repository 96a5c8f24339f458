//! Plain text fallback lexer: one `Text` token per line.

use std::sync::Arc;

use interlex_delegate::{AnalyserFn, LexError, Lexer, LexerConfig, LexerRegistry, TokenizeOptions};
use interlex_token::{Token, TokenType};

/// Lexer for unstructured text. Useful as the root of a delegating pair
/// when the host document has no markup of its own.
///
/// Does not implement the length-preserving capability.
pub struct PlainTextLexer {
    config: LexerConfig,
    analyser: Option<AnalyserFn>,
    registry: Option<Arc<LexerRegistry>>,
}

impl PlainTextLexer {
    /// Create a plain text lexer.
    pub fn new() -> Self {
        PlainTextLexer {
            config: LexerConfig {
                name: "plaintext".to_string(),
                aliases: vec!["text".to_string()],
                filenames: vec!["*.txt".to_string()],
            },
            analyser: None,
            registry: None,
        }
    }

    /// The registry this lexer was attached to, if any.
    pub fn registry(&self) -> Option<&Arc<LexerRegistry>> {
        self.registry.as_ref()
    }
}

impl Default for PlainTextLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer for PlainTextLexer {
    fn tokenize(&self, _options: &TokenizeOptions, text: &str) -> Result<Vec<Token>, LexError> {
        Ok(text
            .split_inclusive('\n')
            .map(|line| Token::new(TokenType::Text, line))
            .collect())
    }

    fn analyse_text(&self, text: &str) -> f32 {
        if let Some(analyser) = &self.analyser {
            return analyser(text);
        }
        0.0
    }

    fn set_analyser(&mut self, analyser: AnalyserFn) {
        self.analyser = Some(analyser);
    }

    fn set_registry(&mut self, registry: Arc<LexerRegistry>) {
        self.registry = Some(registry);
    }

    fn config(&self) -> &LexerConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use interlex_delegate::OriginalLenLexer;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_one_token_per_line() {
        let lexer = PlainTextLexer::new();
        let tokens = lexer
            .tokenize(&TokenizeOptions::default(), "one\ntwo\nthree")
            .unwrap();
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Text, "one\n"),
                Token::new(TokenType::Text, "two\n"),
                Token::new(TokenType::Text, "three"),
            ]
        );
    }

    #[test]
    fn test_empty_input() {
        let lexer = PlainTextLexer::new();
        let tokens = lexer.tokenize(&TokenizeOptions::default(), "").unwrap();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_no_length_preserving_capability() {
        let lexer = PlainTextLexer::new();
        let probe: Option<&dyn OriginalLenLexer> = lexer.as_original_len();
        assert!(probe.is_none());
    }
}
