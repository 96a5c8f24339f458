//! Concrete lexers for the Interlex toolkit
//!
//! Three lexers built on the capability interface from `interlex_delegate`:
//! a host markup lexer, an embedded templating-language lexer, and a plain
//! text fallback. The markup and template lexers compose into the canonical
//! delegating pair via [`template_in_markup`].

pub mod markup;
pub mod plain;
pub mod template;

// Re-export the main types for convenience
pub use markup::MarkupLexer;
pub use plain::PlainTextLexer;
pub use template::TemplateLexer;

use interlex_delegate::DelegatingLexer;

/// The canonical composition: the templating language embedded in markup.
///
/// The template lexer scans first and marks everything outside directives
/// and interpolations as `Other`; the markup lexer then takes those spans.
pub fn template_in_markup() -> DelegatingLexer {
    DelegatingLexer::new(Box::new(MarkupLexer::new()), Box::new(TemplateLexer::new()))
}
