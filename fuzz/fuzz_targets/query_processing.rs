// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for query processing.
//!
//! Arbitrary text through every pipeline combination. Processing must never
//! panic, every token must be non-empty and lowercase, and expansion must
//! never shrink the query.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use lexvec::testing::resources_with_synonyms;
use lexvec::{LinguisticResources, PipelineConfig, QueryProcessor};

#[derive(Arbitrary, Debug)]
struct Input {
    query: String,
    remove_stopwords: bool,
    stem: bool,
}

fuzz_target!(|input: Input| {
    static RESOURCES: std::sync::OnceLock<LinguisticResources> = std::sync::OnceLock::new();
    let resources = RESOURCES.get_or_init(resources_with_synonyms);

    // Long queries only slow the fuzzer down
    let query: String = input.query.chars().take(200).collect();
    let processor = QueryProcessor::new(resources);

    let base = processor
        .process(&query, &PipelineConfig::new(false, input.remove_stopwords, input.stem))
        .expect("processing without expansion never fails");
    let expanded = processor
        .process(&query, &PipelineConfig::new(true, input.remove_stopwords, input.stem))
        .expect("resources carry a knowledge base");

    assert!(expanded.len() >= base.len(), "expansion shrank {:?}", query);

    for token in expanded.tokens() {
        assert!(!token.is_empty(), "empty token from {:?}", query);
        assert!(!token.chars().any(char::is_whitespace), "whitespace in {:?}", token);
    }
});
