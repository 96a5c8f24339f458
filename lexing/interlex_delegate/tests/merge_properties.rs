
use proptest::prelude::*;

use interlex_delegate::{DelegatingLexer, Lexer, TokenizeOptions};
use interlex_token::Token;
use stubs::{DigitRoot, UpperLanguage};

fn delegating() -> DelegatingLexer {
    DelegatingLexer::new(Box::new(DigitRoot::new()), Box::new(UpperLanguage::new()))
}

fn values(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.value.as_str()).collect()
}

proptest! {
    // Concatenating the merged output must reproduce the input byte for
    // byte, with no omission, duplication, or reordering.
    #[test]
    fn reconstruction(input in "[a-zA-Z0-9 .,;]{0,64}") {
        let lexer = delegating();
        let tokens = lexer.tokenize(&TokenizeOptions::default(), &input).unwrap();
        prop_assert_eq!(values(&tokens), input);
    }

    // Every Other span belongs to the root lexer by the time the merge is
    // done.
    #[test]
    fn no_other_tokens_survive(input in "[a-zA-Z0-9 ]{0,64}") {
        let lexer = delegating();
        let tokens = lexer.tokenize(&TokenizeOptions::default(), &input).unwrap();
        prop_assert!(tokens.iter().all(|t| !t.is_other()));
    }

    #[test]
    fn no_empty_tokens(input in "[a-zA-Z0-9 ]{0,64}") {
        let lexer = delegating();
        let tokens = lexer.tokenize(&TokenizeOptions::default(), &input).unwrap();
        prop_assert!(tokens.iter().all(|t| !t.is_empty()));
    }

    // Inputs without any embedded-language construct tokenize exactly as
    // the root lexer alone would.
    #[test]
    fn fast_path_equivalence(input in "[a-z0-9 ]{0,64}") {
        let lexer = delegating();
        let root = DigitRoot::new();
        let merged = lexer.tokenize(&TokenizeOptions::default(), &input).unwrap();
        let direct = root.tokenize(&TokenizeOptions::default(), &input).unwrap();
        prop_assert_eq!(merged, direct);
    }

    // The length-preserving entry point and the plain one agree on the
    // token stream whenever the root applies no preprocessing.
    #[test]
    fn original_len_agrees_with_plain_merge(input in "[a-zA-Z0-9 ]{0,64}") {
        use interlex_delegate::OriginalLenLexer;

        let lexer = delegating();
        let plain = lexer.tokenize(&TokenizeOptions::default(), &input).unwrap();
        let (tokens, lens) = lexer
            .tokenize_with_original_len(&TokenizeOptions::default(), &input)
            .unwrap();
        prop_assert_eq!(&tokens, &plain);
        prop_assert_eq!(lens.iter().sum::<usize>(), input.len());
    }
}
