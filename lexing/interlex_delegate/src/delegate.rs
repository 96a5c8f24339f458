//! Composition of two lexers for a language embedded inside another.

use std::sync::Arc;

use log::{debug, trace};

use interlex_token::{coalesce, Token};

use crate::error::LexError;
use crate::lexer::{AnalyserFn, Lexer, LexerConfig, OriginalLenLexer, TokenizeOptions};
use crate::registry::LexerRegistry;

/// Combines two lexers to handle the common case of a language embedded
/// inside another, such as a templating language inside markup or inside
/// plain text.
///
/// It takes a root lexer and a language lexer. First everything is scanned
/// using the language lexer, which must emit
/// [`TokenType::Other`](interlex_token::TokenType::Other) for unrecognised
/// input. All `Other` spans are then lexed with the root lexer, and the two
/// token streams are merged so that the output covers the original input
/// exactly.
pub struct DelegatingLexer {
    root: Box<dyn Lexer>,
    language: Box<dyn Lexer>,
}

/// The byte range of original input where a run of language tokens should
/// be spliced into the root lexer's output.
#[derive(Debug)]
struct Insertion {
    start: usize,
    end: usize,
    tokens: Vec<Token>,
}

impl DelegatingLexer {
    /// Compose `root` and `language` into a single lexer.
    pub fn new(root: Box<dyn Lexer>, language: Box<dyn Lexer>) -> Self {
        DelegatingLexer { root, language }
    }

    /// Run the language lexer over the full input and partition its output
    /// into the concatenated `Other` text and the ordered insertion list.
    fn language_pass(
        &self,
        options: &TokenizeOptions,
        text: &str,
    ) -> Result<(String, Vec<Insertion>), LexError> {
        let tokens = coalesce(self.language.tokenize(options, text)?);
        Ok(collect_insertions(tokens))
    }
}

impl Lexer for DelegatingLexer {
    fn tokenize(&self, options: &TokenizeOptions, text: &str) -> Result<Vec<Token>, LexError> {
        let (others, insertions) = self.language_pass(options, text)?;
        if insertions.is_empty() {
            debug!("no embedded-language tokens; root lexer takes the whole input");
            return self.root.tokenize(options, text);
        }
        trace!(
            "merging {} insertion(s) into {} byte(s) of root input",
            insertions.len(),
            others.len()
        );
        let root_tokens = coalesce(self.root.tokenize(options, &others)?);
        Ok(interleave(root_tokens, insertions))
    }

    fn analyse_text(&self, text: &str) -> f32 {
        // The embedded language is rarely meaningful without its host, so
        // the root lexer judges the combined artifact.
        self.root.analyse_text(text)
    }

    fn set_analyser(&mut self, analyser: AnalyserFn) {
        self.root.set_analyser(analyser);
    }

    fn set_registry(&mut self, registry: Arc<LexerRegistry>) {
        self.root.set_registry(Arc::clone(&registry));
        self.language.set_registry(registry);
    }

    fn config(&self) -> &LexerConfig {
        // The embedded language is what the composition is named after.
        self.language.config()
    }

    fn as_original_len(&self) -> Option<&dyn OriginalLenLexer> {
        Some(self)
    }
}

impl OriginalLenLexer for DelegatingLexer {
    fn tokenize_with_original_len(
        &self,
        options: &TokenizeOptions,
        text: &str,
    ) -> Result<(Vec<Token>, Vec<usize>), LexError> {
        let root = self.root.as_original_len().ok_or_else(|| {
            LexError::UnsupportedCapability {
                lexer: self.root.config().name.clone(),
                capability: "length-preserving tokenization",
            }
        })?;

        let (others, insertions) = self.language_pass(options, text)?;
        if insertions.is_empty() {
            debug!("no embedded-language tokens; root lexer reports original lengths");
            return root.tokenize_with_original_len(options, text);
        }

        // Merged output reassembles the original input byte for byte, so
        // each token's own length is its original length.
        let root_tokens = coalesce(self.root.tokenize(options, &others)?);
        let merged = interleave(root_tokens, insertions);
        let lens = merged.iter().map(Token::len).collect();
        Ok((merged, lens))
    }
}

/// Partition a language-lexer token stream into the concatenated `Other`
/// text and the ordered list of insertions, with insertion bounds expressed
/// as byte offsets into the original input.
fn collect_insertions(tokens: Vec<Token>) -> (String, Vec<Insertion>) {
    let mut others = String::new();
    let mut insertions: Vec<Insertion> = Vec::new();
    let mut offset = 0usize;
    // None until the first token has been seen.
    let mut prev_is_other: Option<bool> = None;

    for token in tokens {
        let len = token.len();
        if token.is_other() {
            if prev_is_other == Some(false) {
                // The language run that just ended owns [start, offset).
                if let Some(open) = insertions.last_mut() {
                    open.end = offset;
                }
            }
            others.push_str(token.value.as_str());
            prev_is_other = Some(true);
        } else {
            if prev_is_other != Some(false) {
                insertions.push(Insertion {
                    start: offset,
                    end: offset,
                    tokens: Vec::new(),
                });
            }
            if let Some(open) = insertions.last_mut() {
                open.tokens.push(token);
            }
            prev_is_other = Some(false);
        }
        offset += len;
    }
    // A language run reaching the end of input still owes its span.
    if prev_is_other == Some(false) {
        if let Some(open) = insertions.last_mut() {
            open.end = offset;
        }
    }

    (others, insertions)
}

/// Merge the root lexer's token stream (produced from the `Other` text
/// only) with the insertion list (bounds in original-input offsets) into a
/// single stream covering the original input.
///
/// One offset cursor serves both streams: the root input is exactly the
/// original text with every language span deleted, so emitting a root token
/// and accounting for a spliced span advance the same counter. Root tokens
/// straddling an insertion boundary are split there.
fn interleave(root_tokens: Vec<Token>, insertions: Vec<Insertion>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(root_tokens.len() + insertions.len());
    let mut roots = root_tokens.into_iter();
    let mut inserts = insertions.into_iter();
    let mut current = roots.next();
    let mut pending = inserts.next();
    let mut offset = 0usize;

    loop {
        match (current.take(), pending.take()) {
            (None, None) => break,
            (Some(token), None) => {
                offset += token.len();
                out.push(token);
                current = roots.next();
            }
            (Some(token), Some(insertion)) if offset + token.len() <= insertion.start => {
                // The whole token fits before the next insertion.
                offset += token.len();
                out.push(token);
                current = roots.next();
                pending = Some(insertion);
            }
            (token, Some(insertion)) => {
                // The insertion boundary falls inside the current root
                // token, at its start, or past the end of the root stream.
                let rest = match token {
                    Some(token) => {
                        let (left, right) = token.split_at(insertion.start - offset);
                        if let Some(left) = left {
                            offset += left.len();
                            out.push(left);
                        }
                        right
                    }
                    None => None,
                };
                offset += insertion.end - insertion.start;
                out.extend(insertion.tokens);
                current = rest.or_else(|| roots.next());
                pending = inserts.next();
            }
        }
    }

    out
}
