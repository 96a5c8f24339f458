//! Normalisation pass merging runs of same-typed tokens.

use crate::token::{Token, TokenType};

/// Merge every maximal run of consecutive tokens sharing a type into a
/// single token with the concatenated value.
///
/// Order is preserved and the concatenation of all values is unchanged, so
/// the pass is safe to apply to any stream whose values must reassemble into
/// the lexed input. Lexers whose rules match short fragments (a fallback
/// rule matching one character at a time, say) rely on this to present each
/// unbroken span as one token.
pub fn coalesce(tokens: Vec<Token>) -> Vec<Token> {
    let mut out: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut run: Option<(TokenType, String)> = None;

    for token in tokens {
        match &mut run {
            Some((token_type, value)) if *token_type == token.token_type => {
                value.push_str(token.value.as_str());
            }
            _ => {
                if let Some((token_type, value)) = run.take() {
                    out.push(Token::new(token_type, value));
                }
                run = Some((token.token_type, token.value.as_str().to_string()));
            }
        }
    }
    if let Some((token_type, value)) = run.take() {
        out.push(Token::new(token_type, value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::TokenType;
    use pretty_assertions::assert_eq;

    #[test]
    fn merges_adjacent_runs() {
        let tokens = vec![
            Token::new(TokenType::Other, "a"),
            Token::new(TokenType::Other, "b"),
            Token::new(TokenType::Keyword, "if"),
            Token::new(TokenType::Other, "c"),
            Token::new(TokenType::Other, "d"),
            Token::new(TokenType::Other, "e"),
        ];
        let merged = coalesce(tokens);
        assert_eq!(
            merged,
            vec![
                Token::new(TokenType::Other, "ab"),
                Token::new(TokenType::Keyword, "if"),
                Token::new(TokenType::Other, "cde"),
            ]
        );
    }

    #[test]
    fn leaves_alternating_stream_alone() {
        let tokens = vec![
            Token::new(TokenType::Text, "x"),
            Token::new(TokenType::Whitespace, " "),
            Token::new(TokenType::Text, "y"),
        ];
        assert_eq!(coalesce(tokens.clone()), tokens);
    }

    #[test]
    fn empty_stream() {
        assert_eq!(coalesce(Vec::new()), Vec::new());
    }

    #[test]
    fn preserves_concatenation() {
        let tokens = vec![
            Token::new(TokenType::Other, "one"),
            Token::new(TokenType::Other, "two"),
            Token::new(TokenType::Tag, "<p>"),
            Token::new(TokenType::Tag, "</p>"),
        ];
        let joined: String = coalesce(tokens)
            .iter()
            .map(|t| t.value.as_str())
            .collect();
        assert_eq!(joined, "onetwo<p></p>");
    }
}
