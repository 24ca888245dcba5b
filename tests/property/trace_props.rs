//! Trace properties: every audit number recomputes from the trace.

use proptest::prelude::*;
use rankwise::{
    cosine_similarity, idf_formula, rank, tokenize, Corpus, TfIdfModel, Weights,
};

use crate::common::assert_close;
use crate::{documents_strategy, text_strategy};

const TOL: f64 = 1e-9;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Property: keyword and similarity scores recompute from the trace.
    #[test]
    fn prop_trace_recomputes(query in text_strategy(), documents in documents_strategy()) {
        let ranked = rank(&query, documents, Weights::default()).unwrap();
        for result in &ranked {
            let trace = &result.calculation_trace;
            assert_close(trace.recomputed_keyword_score(), result.keyword_score, TOL);
            assert_close(trace.recomputed_similarity(), result.tfidf_score, TOL);
            for entry in &trace.top_tf_terms {
                assert_close(entry.recomputed_tf(), entry.tf, TOL);
            }
            for entry in &trace.top_idf_terms {
                assert_close(entry.recomputed_idf(), entry.idf, TOL);
            }
        }
    }

    /// Property: matched terms are a query-ordered subsequence of the query.
    #[test]
    fn prop_matched_terms_subsequence(query in text_strategy(), documents in documents_strategy()) {
        let ranked = rank(&query, documents, Weights::default()).unwrap();
        for result in &ranked {
            let trace = &result.calculation_trace;
            let mut query_iter = trace.query_terms.iter();
            for matched in &trace.matched_terms {
                prop_assert!(query_iter.any(|q| q == matched));
            }
        }
    }

    /// Property: trace lists respect the default depth and their sort order.
    #[test]
    fn prop_trace_lists_sorted(query in text_strategy(), documents in documents_strategy()) {
        let ranked = rank(&query, documents, Weights::default()).unwrap();
        for result in &ranked {
            let trace = &result.calculation_trace;
            prop_assert!(trace.top_tf_terms.len() <= rankwise::DEFAULT_TRACE_TERMS);
            prop_assert!(trace.top_idf_terms.len() <= rankwise::DEFAULT_TRACE_TERMS);
            for pair in trace.top_tf_terms.windows(2) {
                prop_assert!(pair[0].count >= pair[1].count);
            }
            for pair in trace.top_idf_terms.windows(2) {
                prop_assert!(pair[0].idf >= pair[1].idf);
            }
        }
    }

    /// Property: cosine similarity is symmetric.
    #[test]
    fn prop_cosine_symmetric(a in text_strategy(), b in text_strategy()) {
        let corpus = Corpus::new(tokenize(&a), vec![tokenize(&b)]);
        let model = TfIdfModel::fit(&corpus);
        let ab = cosine_similarity(model.query_vector(), model.document_vector(0));
        let ba = cosine_similarity(model.document_vector(0), model.query_vector());
        assert_close(ab, ba, TOL);
    }

    /// Property: idf never rises as document frequency rises.
    #[test]
    fn prop_idf_monotone(total in 1usize..1000, df in 0usize..999) {
        let df = df.min(total);
        prop_assert!(idf_formula(total, df) >= idf_formula(total, df + 1));
    }
}
