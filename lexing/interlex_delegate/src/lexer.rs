//! The capability interface every Interlex lexer implements.

use std::sync::Arc;

use interlex_token::Token;

use crate::error::LexError;
use crate::registry::LexerRegistry;

/// Injectable text-scoring heuristic.
///
/// Returns a confidence in `[0.0, 1.0]` that the given text is written in
/// the lexer's language.
pub type AnalyserFn = Arc<dyn Fn(&str) -> f32 + Send + Sync>;

/// Options applied to a single tokenize call.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenizeOptions {
    /// Fail with [`LexError::TokenizationFailure`] on input no lexer rule
    /// matches, instead of emitting `Error`-typed tokens covering it. Only
    /// meaningful to lexers for which unmatched input is invalid; an
    /// embedded-language lexer classifies unmatched input as `Other` by
    /// contract.
    pub strict_errors: bool,
}

/// Static descriptor of a lexer: how it is named and which files it claims.
#[derive(Debug, Clone, Default)]
pub struct LexerConfig {
    /// Canonical name of the lexed language.
    pub name: String,
    /// Alternative names accepted on lookup.
    pub aliases: Vec<String>,
    /// Filename patterns (`*.ext`) the language claims.
    pub filenames: Vec<String>,
}

impl LexerConfig {
    /// Create a descriptor with a name and no aliases or filename patterns.
    pub fn new(name: impl Into<String>) -> Self {
        LexerConfig {
            name: name.into(),
            ..Default::default()
        }
    }
}

/// Full-text tokenization plus the configuration surface shared by every
/// lexer.
///
/// Implementations are driven through trait objects, so the interface is
/// object-safe: optional capabilities are reached through an explicit probe
/// ([`Lexer::as_original_len`]) rather than downcasting.
pub trait Lexer {
    /// Tokenize `text` in full, returning the ordered token stream.
    ///
    /// Errors are fatal to the call and deterministic; callers do not retry.
    fn tokenize(&self, options: &TokenizeOptions, text: &str) -> Result<Vec<Token>, LexError>;

    /// Heuristic confidence in `[0.0, 1.0]` that `text` is written in this
    /// lexer's language.
    fn analyse_text(&self, text: &str) -> f32;

    /// Replace the scoring heuristic used by [`Lexer::analyse_text`].
    fn set_analyser(&mut self, analyser: AnalyserFn);

    /// Attach the shared registry consulted for cross-lexer lookups.
    fn set_registry(&mut self, registry: Arc<LexerRegistry>);

    /// Static descriptor: name, aliases, filename patterns.
    fn config(&self) -> &LexerConfig;

    /// Probe for the length-preserving capability.
    ///
    /// Lexers that implement [`OriginalLenLexer`] override this to return
    /// themselves.
    fn as_original_len(&self) -> Option<&dyn OriginalLenLexer> {
        None
    }
}

/// Length-preserving tokenization.
///
/// Some lexers transform the text before lexing it (normalising line
/// endings, say), so a token's value length no longer equals the number of
/// input bytes it stands for. This capability reports, alongside each
/// token, the byte length of the *original* input the token consumed,
/// letting callers map the stream back to offsets in the untransformed
/// input.
pub trait OriginalLenLexer: Lexer {
    /// Tokenize `text` and report each token's original byte length.
    ///
    /// The returned vector is parallel to the token stream and its lengths
    /// sum to `text.len()`.
    fn tokenize_with_original_len(
        &self,
        options: &TokenizeOptions,
        text: &str,
    ) -> Result<(Vec<Token>, Vec<usize>), LexError>;
}
