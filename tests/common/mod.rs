//! Shared test utilities and fixtures.

#![allow(dead_code)]

use std::fs;
use std::path::Path;

use lexvec::{
    search, InMemoryCorpus, LinguisticResources, PipelineConfig, Ranking, SearchOutcome,
    SearchRequest, NO_RELEVANT_RESULTS, TOP_K,
};

// Re-export canonical fixtures from lexvec::testing
pub use lexvec::testing::{
    armory, corpus, resources, resources_with_synonyms, spanish_corpus, SPANISH_SYNONYMS,
};

// ============================================================================
// SEARCH HELPERS
// ============================================================================

/// Report-mode search with one zero weight per query word.
pub fn search_report(
    provider: &InMemoryCorpus,
    resources: &LinguisticResources,
    query: &str,
    pipeline: PipelineConfig,
) -> SearchOutcome {
    let weights = vec![0.0; query.split(' ').count()];
    let request = SearchRequest::new(query)
        .verbose(false)
        .weights(weights)
        .pipeline(pipeline);
    search(provider, resources, &request).expect("search should succeed")
}

/// Write `(file name, text)` pairs into `dir`.
pub fn write_corpus(dir: &Path, files: &[(&str, &str)]) {
    for (name, text) in files {
        fs::write(dir.join(name), text).expect("write corpus file");
    }
}

// ============================================================================
// ASSERTIONS
// ============================================================================

/// Ranking invariants: bounded length, positive scores, non-increasing order,
/// or exactly the sentinel.
pub fn assert_ranking_well_formed(ranking: &Ranking) {
    assert!(!ranking.is_empty(), "ranking is never empty");
    assert!(ranking.len() <= TOP_K, "at most {} entries", TOP_K);

    if ranking.is_no_relevant_results() {
        let only = &ranking.entries()[0];
        assert_eq!(only.id, NO_RELEVANT_RESULTS);
        assert_eq!(only.score, 1.0);
        return;
    }

    for entry in ranking.entries() {
        assert!(entry.score > 0.0, "{} has score {}", entry.id, entry.score);
    }
    for pair in ranking.entries().windows(2) {
        assert!(
            pair[0].score >= pair[1].score,
            "{} ({}) ranked above {} ({})",
            pair[0].id,
            pair[0].score,
            pair[1].id,
            pair[1].score
        );
    }
}
