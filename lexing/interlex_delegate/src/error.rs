//! Error types surfaced by lexer invocations.

use thiserror::Error;

/// Errors a lexer call can surface.
///
/// Tokenization failures are deterministic: the same lexer over the same
/// input fails the same way, so callers should not retry. A capability
/// failure is a precondition problem, not a lexing problem, and callers
/// that can live without the capability may fall back to the plain entry
/// point after matching on it.
#[derive(Debug, Error)]
pub enum LexError {
    /// The lexer could not produce a token stream for the input.
    #[error("tokenization failed in lexer `{lexer}`: {message}")]
    TokenizationFailure {
        /// Name of the failing lexer.
        lexer: String,
        /// What the lexer reported.
        message: String,
    },

    /// A capability the caller requires is not implemented by the lexer.
    #[error("lexer `{lexer}` does not support {capability}")]
    UnsupportedCapability {
        /// Name of the lexer missing the capability.
        lexer: String,
        /// The capability that was requested.
        capability: &'static str,
    },
}

impl LexError {
    /// Convenience constructor for a tokenization failure.
    pub fn tokenization(lexer: impl Into<String>, message: impl Into<String>) -> Self {
        LexError::TokenizationFailure {
            lexer: lexer.into(),
            message: message.into(),
        }
    }
}
