//! Score properties: bounds, fusion, ordering and stability.

use proptest::prelude::*;
use rankwise::{rank, Weights};

use crate::{documents_strategy, text_strategy, weights_strategy};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: with default weights every score lies in [0, 1].
    #[test]
    fn prop_default_scores_bounded(query in text_strategy(), documents in documents_strategy()) {
        let ranked = rank(&query, documents, Weights::default()).unwrap();
        for result in &ranked {
            prop_assert!((0.0..=1.0).contains(&result.keyword_score));
            prop_assert!(result.tfidf_score >= 0.0 && result.tfidf_score <= 1.0 + 1e-9);
            prop_assert!(result.final_score >= 0.0 && result.final_score <= 1.0 + 1e-9);
        }
    }

    /// Property: final score is exactly the weighted sum.
    #[test]
    fn prop_final_is_weighted_sum(
        query in text_strategy(),
        documents in documents_strategy(),
        (kw, tw) in weights_strategy(),
    ) {
        let ranked = rank(&query, documents, Weights::new(kw, tw).unwrap()).unwrap();
        for result in &ranked {
            prop_assert_eq!(result.final_score, kw * result.keyword_score + tw * result.tfidf_score);
        }
    }

    /// Property: output is a permutation of the input, sorted descending.
    #[test]
    fn prop_sorted_permutation(query in text_strategy(), documents in documents_strategy()) {
        let n = documents.len();
        let ranked = rank(&query, documents, Weights::default()).unwrap();
        prop_assert_eq!(ranked.len(), n);

        for pair in ranked.windows(2) {
            prop_assert!(pair[0].final_score >= pair[1].final_score);
        }

        let mut seen: Vec<&str> = ranked.iter().map(|r| r.document.link.as_str()).collect();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), n);
    }

    /// Property: equal final scores keep input order.
    #[test]
    fn prop_ties_keep_input_order(query in text_strategy(), documents in documents_strategy()) {
        let ranked = rank(&query, documents, Weights::default()).unwrap();
        let index = |link: &str| -> usize {
            link.rsplit('/').next().and_then(|s| s.parse().ok()).unwrap()
        };
        for pair in ranked.windows(2) {
            if pair[0].final_score == pair[1].final_score {
                prop_assert!(index(&pair[0].document.link) < index(&pair[1].document.link));
            }
        }
    }

    /// Property: ranking is deterministic down to the serialized bytes.
    #[test]
    fn prop_deterministic(query in text_strategy(), documents in documents_strategy()) {
        let a = rank(&query, documents.clone(), Weights::default()).unwrap();
        let b = rank(&query, documents, Weights::default()).unwrap();
        prop_assert_eq!(serde_json::to_string(&a).unwrap(), serde_json::to_string(&b).unwrap());
    }

    /// Property: keyword-only weights make the final score the keyword score.
    #[test]
    fn prop_keyword_only_weights(query in text_strategy(), documents in documents_strategy()) {
        let ranked = rank(&query, documents, Weights::new(1.0, 0.0).unwrap()).unwrap();
        for result in &ranked {
            prop_assert_eq!(result.final_score, result.keyword_score);
        }
    }
}
