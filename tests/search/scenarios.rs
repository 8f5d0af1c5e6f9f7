//! End-to-end search scenarios.

use super::common::*;
use lexvec::{search, InMemoryCorpus, PipelineConfig, SearchError, SearchRequest};

#[test]
fn test_sword_ranks_first() {
    let request = SearchRequest::new("sword").verbose(true).weights(vec![1.0]);
    let outcome = search(&armory(), &resources(), &request).unwrap();

    assert_eq!(outcome.ids(), vec!["d1"]);
    assert!(outcome.ranking.entries()[0].score > 0.0);
    assert_ranking_well_formed(&outcome.ranking);
}

#[test]
fn test_empty_corpus_is_an_error() {
    let err = search(
        &InMemoryCorpus::default(),
        &resources(),
        &SearchRequest::new("espada"),
    )
    .unwrap_err();
    assert!(matches!(err, SearchError::EmptyCorpus));
}

#[test]
fn test_zero_overlap_returns_sentinel() {
    let outcome = search_report(&armory(), &resources(), "dragon", PipelineConfig::default());
    assert!(outcome.ranking.is_no_relevant_results());
    assert_eq!(outcome.ids(), vec![lexvec::NO_RELEVANT_RESULTS]);
    assert_ranking_well_formed(&outcome.ranking);
}

#[test]
fn test_empty_query_returns_sentinel() {
    let outcome = search_report(&armory(), &resources(), "", PipelineConfig::default());
    assert!(outcome.ranking.is_no_relevant_results());
    assert_eq!(outcome.processed_query, "");
}

#[test]
fn test_stopword_only_query_returns_sentinel() {
    let pipeline = PipelineConfig::new(false, true, false);
    let outcome = search_report(&spanish_corpus(), &resources(), "de la", pipeline);
    assert_eq!(outcome.processed_query, "");
    assert!(outcome.ranking.is_no_relevant_results());
}

#[test]
fn test_stopwords_do_not_drive_ranking() {
    let pipeline = PipelineConfig::new(false, true, false);
    let outcome = search_report(&spanish_corpus(), &resources(), "la espada", pipeline);

    assert_eq!(outcome.processed_query, "espada");
    let mut ids = outcome.ids();
    ids.sort_unstable();
    assert_eq!(ids, vec!["cantar.txt", "torneo.txt"]);
}

#[test]
fn test_expansion_reaches_synonym_documents() {
    let plain = search_report(
        &spanish_corpus(),
        &resources_with_synonyms(),
        "sable",
        PipelineConfig::default(),
    );
    assert_eq!(plain.ids(), vec!["herrero.txt"]);

    let expanded = search_report(
        &spanish_corpus(),
        &resources_with_synonyms(),
        "sable",
        PipelineConfig::new(true, false, false),
    );
    assert_eq!(expanded.processed_query, "sable espada sable acero");
    assert_eq!(expanded.ids()[0], "herrero.txt");
    assert!(expanded.ids().contains(&"cantar.txt"));
    assert!(expanded.ids().contains(&"torneo.txt"));
    assert_ranking_well_formed(&expanded.ranking);
}

#[test]
fn test_expansion_without_knowledge_base_fails() {
    let request = SearchRequest::new("espada").pipeline(PipelineConfig::new(true, false, false));
    let err = search(&spanish_corpus(), &resources(), &request).unwrap_err();
    assert!(matches!(err, SearchError::ResourceUnavailable { .. }));
}

#[test]
fn test_single_document_corpus() {
    let provider = corpus(&[("solo", "espada de acero")]);
    let outcome = search_report(&provider, &resources(), "acero", PipelineConfig::default());
    assert_eq!(outcome.ids(), vec!["solo"]);
}

#[test]
fn test_top_k_truncation() {
    let texts: Vec<(String, String)> = (0..25)
        .map(|i| (format!("doc{:02}", i), format!("espada numero{}", i)))
        .collect();
    let provider = InMemoryCorpus::from_pairs(texts);
    let outcome = search_report(&provider, &resources(), "espada", PipelineConfig::default());

    assert_eq!(outcome.ranking.len(), lexvec::TOP_K);
    assert_ranking_well_formed(&outcome.ranking);
}
