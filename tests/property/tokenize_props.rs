//! Tokenizer properties.

use proptest::prelude::*;
use rankwise::tokenize::ENGLISH_STOPWORDS;
use rankwise::{tokenize, Stopwords, Tokenizer};

use crate::text_strategy;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: tokens are lowercase ASCII words longer than two characters.
    #[test]
    fn prop_tokens_are_normalized(text in any::<String>()) {
        for token in tokenize(&text) {
            prop_assert!(token.len() > 2);
            prop_assert!(token.chars().all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_'));
        }
    }

    /// Property: stopwords never survive.
    #[test]
    fn prop_no_stopwords(text in text_strategy()) {
        for token in tokenize(&text) {
            prop_assert!(!ENGLISH_STOPWORDS.contains(&token.as_str()));
        }
    }

    /// Property: tokenizing is idempotent over its own output.
    #[test]
    fn prop_idempotent(text in any::<String>()) {
        let once = tokenize(&text);
        let twice = tokenize(&once.join(" "));
        prop_assert_eq!(once, twice);
    }

    /// Property: case never changes the token list.
    #[test]
    fn prop_case_insensitive(text in "[a-zA-Z ]{0,40}") {
        prop_assert_eq!(tokenize(&text.to_uppercase()), tokenize(&text.to_lowercase()));
    }

    /// Property: an empty stopword list only adds tokens.
    #[test]
    fn prop_stopwords_only_remove(text in text_strategy()) {
        let all = Tokenizer::new(Stopwords::none()).tokenize(&text);
        let filtered = tokenize(&text);
        prop_assert!(filtered.len() <= all.len());
        let mut rest = all.iter();
        for token in &filtered {
            prop_assert!(rest.any(|t| t == token));
        }
    }
}
