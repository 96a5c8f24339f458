//! Host markup lexer.
//!
//! Recognizes tags, comments, and entities; everything between them is text
//! or whitespace. Whitespace is emitted as tokens, never skipped, so the
//! token values always reassemble into the lexed input.

use std::sync::Arc;

use log::trace;
use logos::Logos;

use interlex_delegate::{
    AnalyserFn, LexError, Lexer, LexerConfig, LexerRegistry, OriginalLenLexer, TokenizeOptions,
};
use interlex_token::{Token, TokenType};

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
enum RawToken {
    #[regex(r"<!--[^-]*-+(?:[^->][^-]*-+)*->")]
    Comment,

    #[regex(r"</?[A-Za-z][^>]*>")]
    Tag,

    #[regex(r"&[A-Za-z][A-Za-z0-9]*;")]
    #[regex(r"&#[0-9]+;")]
    Entity,

    #[regex(r"[ \t\n\r]+")]
    Whitespace,

    #[regex(r"[^<& \t\n\r]+")]
    Text,
}

/// Lexer for tag-based markup, the usual host language of a template.
///
/// Implements the length-preserving capability: its length-preserving mode
/// normalizes CRLF line endings to LF before lexing and reports each
/// token's original byte length, so callers can map tokens back to offsets
/// in the unnormalized input.
pub struct MarkupLexer {
    config: LexerConfig,
    analyser: Option<AnalyserFn>,
    registry: Option<Arc<LexerRegistry>>,
}

impl MarkupLexer {
    /// Create a markup lexer.
    pub fn new() -> Self {
        MarkupLexer {
            config: LexerConfig {
                name: "markup".to_string(),
                aliases: vec!["html".to_string(), "xml".to_string()],
                filenames: vec![
                    "*.html".to_string(),
                    "*.htm".to_string(),
                    "*.xml".to_string(),
                ],
            },
            analyser: None,
            registry: None,
        }
    }

    /// The registry this lexer was attached to, if any.
    pub fn registry(&self) -> Option<&Arc<LexerRegistry>> {
        self.registry.as_ref()
    }

    fn lex(&self, options: &TokenizeOptions, text: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = RawToken::lexer(text);
        let mut tokens = Vec::new();
        while let Some(raw) = lexer.next() {
            let slice = lexer.slice();
            let token_type = match raw {
                Ok(RawToken::Comment) => TokenType::Comment,
                Ok(RawToken::Tag) => TokenType::Tag,
                Ok(RawToken::Entity) => TokenType::Name,
                Ok(RawToken::Whitespace) => TokenType::Whitespace,
                Ok(RawToken::Text) => TokenType::Text,
                Err(()) => {
                    if options.strict_errors {
                        return Err(LexError::tokenization(
                            self.config.name.clone(),
                            format!(
                                "unexpected input {slice:?} at byte {}",
                                lexer.span().start
                            ),
                        ));
                    }
                    TokenType::Error
                }
            };
            tokens.push(Token::new(token_type, slice));
        }
        trace!("markup produced {} token(s) from {} byte(s)", tokens.len(), text.len());
        Ok(tokens)
    }
}

impl Default for MarkupLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer for MarkupLexer {
    fn tokenize(&self, options: &TokenizeOptions, text: &str) -> Result<Vec<Token>, LexError> {
        self.lex(options, text)
    }

    fn analyse_text(&self, text: &str) -> f32 {
        if let Some(analyser) = &self.analyser {
            return analyser(text);
        }
        let trimmed = text.trim_start();
        let lower: String = trimmed
            .chars()
            .take(16)
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if lower.starts_with("<!doctype") || lower.starts_with("<html") {
            return 0.9;
        }
        if trimmed.starts_with('<') && trimmed.contains('>') {
            return 0.4;
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

    fn as_original_len(&self) -> Option<&dyn OriginalLenLexer> {
        Some(self)
    }
}

impl OriginalLenLexer for MarkupLexer {
    fn tokenize_with_original_len(
        &self,
        options: &TokenizeOptions,
        text: &str,
    ) -> Result<(Vec<Token>, Vec<usize>), LexError> {
        let normalized = text.replace("\r\n", "\n");
        let tokens = self.lex(options, &normalized)?;

        // Walk the unnormalized input alongside the token values: a token
        // byte that replaced a CRLF pair consumed two original bytes.
        let bytes = text.as_bytes();
        let mut pos = 0usize;
        let mut lens = Vec::with_capacity(tokens.len());
        for token in &tokens {
            let mut consumed = 0usize;
            for &b in token.value.as_str().as_bytes() {
                if b == b'\n' && bytes.get(pos + consumed) == Some(&b'\r') {
                    consumed += 2;
                } else {
                    consumed += 1;
                }
            }
            pos += consumed;
            lens.push(consumed);
        }
        Ok((tokens, lens))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn tokenize(text: &str) -> Vec<Token> {
        MarkupLexer::new()
            .tokenize(&TokenizeOptions::default(), text)
            .unwrap()
    }

    #[test]
    fn test_basic_markup() {
        let tokens = tokenize("<p>hi there</p>");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Tag, "<p>"),
                Token::new(TokenType::Text, "hi"),
                Token::new(TokenType::Whitespace, " "),
                Token::new(TokenType::Text, "there"),
                Token::new(TokenType::Tag, "</p>"),
            ]
        );
    }

    #[test]
    fn test_comment_and_entity() {
        let tokens = tokenize("<!-- note -->&amp;");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Comment, "<!-- note -->"),
                Token::new(TokenType::Name, "&amp;"),
            ]
        );
    }

    #[test]
    fn test_values_reassemble_input() {
        let input = "<div class=\"x\">a &lt; b\n<!--c--></div>";
        let joined: String = tokenize(input).iter().map(|t| t.value.as_str()).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn test_stray_ampersand_is_an_error_token() {
        let tokens = tokenize("a & b");
        assert!(tokens
            .iter()
            .any(|t| t.token_type == TokenType::Error && t.value == "&"));
    }

    #[test]
    fn test_strict_mode_fails_on_stray_input() {
        let lexer = MarkupLexer::new();
        let options = TokenizeOptions {
            strict_errors: true,
        };
        let err = lexer.tokenize(&options, "a & b").unwrap_err();
        assert!(matches!(err, LexError::TokenizationFailure { .. }));
    }

    #[test]
    fn test_analyse_text() {
        let lexer = MarkupLexer::new();
        assert_eq!(lexer.analyse_text("<!DOCTYPE html><html>"), 0.9);
        assert_eq!(lexer.analyse_text("<p>x</p>"), 0.4);
        assert_eq!(lexer.analyse_text("plain words"), 0.0);

        let mut lexer = lexer;
        lexer.set_analyser(Arc::new(|_| 0.7));
        assert_eq!(lexer.analyse_text("plain words"), 0.7);
    }

    #[test]
    fn test_registry_injection() {
        let mut lexer = MarkupLexer::new();
        assert!(lexer.registry().is_none());

        let registry = Arc::new(LexerRegistry::new());
        lexer.set_registry(Arc::clone(&registry));
        assert!(lexer
            .registry()
            .is_some_and(|held| Arc::ptr_eq(held, &registry)));
    }

    #[test]
    fn test_original_len_accounts_for_crlf() {
        let lexer = MarkupLexer::new();
        let (tokens, lens) = lexer
            .tokenize_with_original_len(&TokenizeOptions::default(), "a\r\nb")
            .unwrap();

        assert_eq!(
            tokens,
            vec![
                Token::new(TokenType::Text, "a"),
                Token::new(TokenType::Whitespace, "\n"),
                Token::new(TokenType::Text, "b"),
            ]
        );
        assert_eq!(lens, vec![1, 2, 1]);
        assert_eq!(lens.iter().sum::<usize>(), "a\r\nb".len());
    }
}
