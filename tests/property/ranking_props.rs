//! Ranking invariants over random corpora and feedback.

use super::common::assert_ranking_well_formed;
use lexvec::{search, FeedbackMode, InMemoryCorpus, LinguisticResources, SearchRequest};
use proptest::prelude::*;

// ============================================================================
// STRATEGIES
// ============================================================================

/// Words from a small Spanish vocabulary so documents overlap often.
fn word_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "espada", "escudo", "caballero", "rey", "castillo", "la", "el", "de", "acero", "dragón",
        "torre", "sable", "muralla", "jinete",
    ])
    .prop_map(str::to_string)
}

fn document_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 0..12).prop_map(|words| words.join(" "))
}

fn corpus_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(document_strategy(), 1..20)
}

fn query_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec(word_strategy(), 1..5).prop_map(|words| words.join(" "))
}

fn provider(texts: &[String]) -> InMemoryCorpus {
    InMemoryCorpus::from_pairs(
        texts
            .iter()
            .enumerate()
            .map(|(i, text)| (format!("doc{}", i), text.clone())),
    )
}

// ============================================================================
// PROPERTIES
// ============================================================================

proptest! {
    #[test]
    fn prop_ranking_is_well_formed(texts in corpus_strategy(), query in query_strategy()) {
        let resources = LinguisticResources::spanish().unwrap();
        let outcome = search(&provider(&texts), &resources, &SearchRequest::new(query)).unwrap();
        assert_ranking_well_formed(&outcome.ranking);
    }

    #[test]
    fn prop_override_keeps_ranking_well_formed(
        texts in corpus_strategy(),
        query in query_strategy(),
        weights in prop::collection::vec(-1.0f64..2.0, 0..6),
    ) {
        let resources = LinguisticResources::spanish().unwrap();
        let request = SearchRequest::new(query)
            .feedback(FeedbackMode::Override)
            .weights(weights.clone());
        let outcome = search(&provider(&texts), &resources, &request).unwrap();

        assert_ranking_well_formed(&outcome.ranking);
        prop_assert_eq!(outcome.weights, weights);
    }

    #[test]
    fn prop_ranked_ids_come_from_corpus(texts in corpus_strategy(), query in query_strategy()) {
        let resources = LinguisticResources::spanish().unwrap();
        let outcome = search(&provider(&texts), &resources, &SearchRequest::new(query)).unwrap();
        if !outcome.ranking.is_no_relevant_results() {
            for id in outcome.ids() {
                let index: usize = id.trim_start_matches("doc").parse().unwrap();
                prop_assert!(index < texts.len());
            }
        }
    }

    #[test]
    fn prop_report_length_matches_supplied(
        texts in corpus_strategy(),
        query in query_strategy(),
        weights in prop::collection::vec(0.0f64..1.0, 0..6),
    ) {
        let resources = LinguisticResources::spanish().unwrap();
        let request = SearchRequest::new(query).weights(weights.clone());
        let outcome = search(&provider(&texts), &resources, &request).unwrap();
        prop_assert_eq!(outcome.weights.len(), weights.len());
        for weight in &outcome.weights {
            prop_assert!((0.0..=1.0).contains(weight));
        }
    }
}
