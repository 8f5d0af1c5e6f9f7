// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for relevance feedback.
//!
//! Arbitrary documents, query and weight vectors, including NaN and infinities
//! in override mode. The search must not panic, the returned weights must
//! have the length the caller sent, and the ranking must stay within bounds.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexvec::{search, FeedbackMode, InMemoryCorpus, LinguisticResources, SearchRequest, TOP_K};

#[derive(Arbitrary, Debug)]
struct Input {
    documents: Vec<String>,
    query: String,
    weights: Vec<f64>,
    override_weights: bool,
}

fuzz_target!(|input: Input| {
    static RESOURCES: std::sync::OnceLock<LinguisticResources> = std::sync::OnceLock::new();
    let resources = RESOURCES.get_or_init(|| {
        LinguisticResources::spanish().expect("built-in Spanish resources")
    });

    if input.documents.is_empty() || input.documents.len() > 32 || input.weights.len() > 16 {
        return;
    }

    let provider = InMemoryCorpus::from_pairs(
        input
            .documents
            .iter()
            .enumerate()
            .map(|(i, text)| (i.to_string(), text.chars().take(500).collect::<String>())),
    );
    let mode = if input.override_weights {
        FeedbackMode::Override
    } else {
        FeedbackMode::Report
    };
    let request = SearchRequest::new(input.query.chars().take(100).collect::<String>())
        .feedback(mode)
        .weights(input.weights.clone());

    let outcome = search(&provider, resources, &request).expect("non-empty corpus");

    assert_eq!(outcome.weights.len(), input.weights.len());
    assert!(!outcome.ranking.is_empty());
    assert!(outcome.ranking.len() <= TOP_K);
    if !outcome.ranking.is_no_relevant_results() {
        for entry in outcome.ranking.entries() {
            assert!(entry.score > 0.0);
        }
    }
});
