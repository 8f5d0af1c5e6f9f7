//! Relevance feedback through the full search path.

use super::common::*;
use lexvec::vector::fit_transform;
use lexvec::{search, CorpusProvider, FeedbackMode, PipelineConfig, SearchRequest};

fn request(query: &str, mode: FeedbackMode, weights: &[f64]) -> SearchRequest {
    SearchRequest::new(query)
        .feedback(mode)
        .weights(weights)
        .pipeline(PipelineConfig::default())
}

#[test]
fn test_report_returns_rounded_query_weights() {
    // Six texts: espada is in three (idf 1.5596), escudo in two (idf 1.8473).
    let outcome = search(
        &spanish_corpus(),
        &resources(),
        &request("espada escudo", FeedbackMode::Report, &[0.0, 0.0]),
    )
    .unwrap();
    assert_eq!(outcome.weights, vec![0.65, 0.76]);
}

#[test]
fn test_report_then_override_round_trip() {
    let provider = spanish_corpus();
    let resources = resources();

    let reported = search(
        &provider,
        &resources,
        &request("espada escudo", FeedbackMode::Report, &[0.0, 0.0]),
    )
    .unwrap();
    let overridden = search(
        &provider,
        &resources,
        &request("espada escudo", FeedbackMode::Override, &reported.weights),
    )
    .unwrap();

    assert_eq!(overridden.weights, reported.weights);
    assert_eq!(overridden.ids(), reported.ids());
    assert_eq!(reported.ids()[0], "torneo.txt");

    // Each score is the cosine against a query vector holding the rounded entries.
    let corpus = provider.load().unwrap();
    let mut texts = corpus.texts();
    texts.push("espada escudo".to_string());
    let (vocabulary, matrix) = fit_transform(&texts);
    let mut query = vec![0.0; vocabulary.len()];
    query[vocabulary.get("espada").unwrap()] = reported.weights[0];
    query[vocabulary.get("escudo").unwrap()] = reported.weights[1];
    let norm = |v: &[f64]| v.iter().map(|x| x * x).sum::<f64>().sqrt();

    for entry in overridden.ranking.entries() {
        let index = corpus.ids().iter().position(|id| *id == entry.id).unwrap();
        let row = matrix.row(index).unwrap();
        let dot: f64 = row.iter().zip(&query).map(|(a, b)| a * b).sum();
        let expected = dot / (norm(row) * norm(&query));
        assert!(
            (entry.score - expected).abs() < 1e-9,
            "{}: {} vs {}",
            entry.id,
            entry.score,
            expected
        );
    }
}

#[test]
fn test_override_zero_weights_silences_query() {
    let outcome = search(
        &spanish_corpus(),
        &resources(),
        &request("espada escudo", FeedbackMode::Override, &[0.0, 0.0]),
    )
    .unwrap();
    assert!(outcome.ranking.is_no_relevant_results());
    assert_eq!(outcome.weights, vec![0.0, 0.0]);
}

#[test]
fn test_override_selects_term() {
    let outcome = search(
        &spanish_corpus(),
        &resources(),
        &request("espada escudo", FeedbackMode::Override, &[0.0, 1.0]),
    )
    .unwrap();
    assert_eq!(outcome.ids(), vec!["torneo.txt"]);
}

#[test]
fn test_report_packs_values_by_vocabulary_hit() {
    // "Espada" is looked up verbatim and misses; the hit on "espada" is
    // reported into slot 0, and slot 1 keeps the caller's value.
    let outcome = search(
        &spanish_corpus(),
        &resources(),
        &request("Espada espada", FeedbackMode::Report, &[0.3, 0.4]),
    )
    .unwrap();
    assert_eq!(outcome.weights, vec![1.0, 0.4]);
}

#[test]
fn test_extra_weights_are_left_alone() {
    let outcome = search(
        &spanish_corpus(),
        &resources(),
        &request("espada", FeedbackMode::Report, &[0.0, 0.5, 0.7]),
    )
    .unwrap();
    assert_eq!(outcome.weights, vec![1.0, 0.5, 0.7]);
}

#[test]
fn test_missing_weights_pair_the_prefix() {
    let outcome = search(
        &spanish_corpus(),
        &resources(),
        &request("espada escudo", FeedbackMode::Report, &[0.0]),
    )
    .unwrap();
    assert_eq!(outcome.weights, vec![0.65]);
}

#[test]
fn test_verbose_flag_maps_to_override() {
    let request = SearchRequest::new("espada").verbose(true);
    assert_eq!(request.feedback, FeedbackMode::Override);
    let request = SearchRequest::new("espada").verbose(false);
    assert_eq!(request.feedback, FeedbackMode::Report);
}
