//! Lexer composition for languages embedded inside a host document
//!
//! This crate defines the capability interface every Interlex lexer
//! implements and the [`DelegatingLexer`] built on top of it: a composition
//! of two lexers for the common case of one language embedded inside
//! another, such as a templating language inside markup or inside plain
//! text.
//!
//! The embedded-language lexer scans the whole input first and must emit
//! [`TokenType::Other`](interlex_token::TokenType::Other) for everything it
//! does not recognise. The `Other` spans are then re-lexed by the root
//! lexer, and the two token streams are merged back into a single stream
//! covering the original input exactly.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod delegate;
pub mod error;
pub mod lexer;
pub mod registry;

// Re-export the main types for convenience
pub use delegate::DelegatingLexer;
pub use error::LexError;
pub use lexer::{AnalyserFn, Lexer, LexerConfig, OriginalLenLexer, TokenizeOptions};
pub use registry::LexerRegistry;
