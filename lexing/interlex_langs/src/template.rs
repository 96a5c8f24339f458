//! Embedded templating-language lexer.
//!
//! Recognizes processing directives (`<? ... ?>`, `<?= ... ?>`) and
//! interpolations (`{{ ... }}`). Everything else is emitted as `Other`,
//! which is the contract a delegating composition relies on: the host
//! lexer, not this one, is responsible for the surrounding document.

use std::sync::Arc;

use log::trace;
use logos::Logos;

use interlex_delegate::{AnalyserFn, LexError, Lexer, LexerConfig, LexerRegistry, TokenizeOptions};
use interlex_token::{Token, TokenType};

/// Raw token type used by the logos lexer
#[derive(Logos, Debug, PartialEq, Clone)]
enum RawToken {
    // Same closing-delimiter shape as a block comment: any number of `?`
    // runs inside, terminated by `?>`.
    #[regex(r"<\?[^?]*\?+(?:[^>?][^?]*\?+)*>")]
    Directive,

    #[regex(r"\{\{[^}]*\}\}")]
    Variable,
}

/// Lexer for the embedded templating language.
pub struct TemplateLexer {
    config: LexerConfig,
    analyser: Option<AnalyserFn>,
    registry: Option<Arc<LexerRegistry>>,
}

impl TemplateLexer {
    /// Create a template lexer.
    pub fn new() -> Self {
        TemplateLexer {
            config: LexerConfig {
                name: "template".to_string(),
                aliases: vec!["tpl".to_string()],
                filenames: vec!["*.tpl".to_string()],
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

impl Default for TemplateLexer {
    fn default() -> Self {
        Self::new()
    }
}

impl Lexer for TemplateLexer {
    fn tokenize(&self, _options: &TokenizeOptions, text: &str) -> Result<Vec<Token>, LexError> {
        let mut lexer = RawToken::lexer(text);
        let mut tokens = Vec::new();
        while let Some(raw) = lexer.next() {
            let slice = lexer.slice();
            let token_type = match raw {
                Ok(RawToken::Directive) => TokenType::Keyword,
                Ok(RawToken::Variable) => TokenType::Name,
                // Anything outside the template constructs belongs to the
                // host document.
                Err(()) => TokenType::Other,
            };
            tokens.push(Token::new(token_type, slice));
        }
        trace!(
            "template produced {} token(s) from {} byte(s)",
            tokens.len(),
            text.len()
        );
        Ok(tokens)
    }

    fn analyse_text(&self, text: &str) -> f32 {
        if let Some(analyser) = &self.analyser {
            return analyser(text);
        }
        if text.contains("<?") {
            return 0.6;
        }
        if text.contains("{{") {
            return 0.3;
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
