//! Determinism tests: identical inputs give identical rankings.

use super::common::*;
use lexvec::{search, PipelineConfig, SearchRequest};

#[test]
fn test_repeated_search_is_identical() {
    let provider = spanish_corpus();
    let resources = resources_with_synonyms();
    let request = SearchRequest::new("la espada del caballero")
        .weights(vec![0.0; 4])
        .pipeline(PipelineConfig::all());

    let first = search(&provider, &resources, &request).unwrap();
    for _ in 0..5 {
        let again = search(&provider, &resources, &request).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn test_ties_keep_corpus_order() {
    let provider = corpus(&[
        ("z", "espada"),
        ("m", "escudo"),
        ("a", "espada"),
        ("k", "espada"),
    ]);
    let outcome = search_report(&provider, &resources(), "espada", PipelineConfig::default());
    assert_eq!(outcome.ids(), vec!["z", "a", "k"]);

    let scores: Vec<f64> = outcome.ranking.entries().iter().map(|e| e.score).collect();
    assert!(scores.windows(2).all(|w| (w[0] - w[1]).abs() < 1e-12));
}

#[test]
fn test_shared_resources_across_threads() {
    let resources = resources_with_synonyms();
    let provider = spanish_corpus();
    let expected = search_report(&provider, &resources, "sable", PipelineConfig::new(true, false, false));

    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                let outcome = search_report(
                    &provider,
                    &resources,
                    "sable",
                    PipelineConfig::new(true, false, false),
                );
                assert_eq!(outcome, expected);
            });
        }
    });
}
