// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! End-to-end search: where the stages meet.
//!
//! One call does a full pass: process the query, load the corpus, vectorize
//! documents plus query, apply feedback, rank. Nothing is cached between
//! calls, so a changed corpus is picked up on the next query.
//!
//! ```text
//! query ─▶ QueryProcessor ─▶ processed text ─┐
//!                                            ├─▶ build_vectors ─▶ rank ─▶ SearchOutcome
//! CorpusProvider ─▶ document texts ──────────┘
//! ```

use serde::Serialize;
use tracing::{info, instrument};

use crate::corpus::CorpusProvider;
use crate::error::{Result, SearchError};
use crate::query::{LinguisticResources, QueryProcessor};
use crate::scoring::{rank, Ranking};
use crate::types::{FeedbackMode, PipelineConfig};
use crate::vector::build_vectors;

/// One search call.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SearchRequest {
    /// The query exactly as the user typed it.
    pub query: String,
    pub feedback: FeedbackMode,
    /// One weight per space-separated query word.
    pub weights: Vec<f64>,
    pub pipeline: PipelineConfig,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            ..Self::default()
        }
    }

    /// `true` overrides the query vector with the weights, `false` reports
    /// the current values into them.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.feedback = FeedbackMode::from(verbose);
        self
    }

    pub fn feedback(mut self, feedback: FeedbackMode) -> Self {
        self.feedback = feedback;
        self
    }

    pub fn weights(mut self, weights: impl Into<Vec<f64>>) -> Self {
        self.weights = weights.into();
        self
    }

    pub fn pipeline(mut self, pipeline: PipelineConfig) -> Self {
        self.pipeline = pipeline;
        self
    }
}

/// What a search hands back.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchOutcome {
    pub ranking: Ranking,
    /// Weights after feedback: as supplied, or with reported values.
    pub weights: Vec<f64>,
    /// The text that was vectorized for the query.
    pub processed_query: String,
}

impl SearchOutcome {
    /// Ranked document ids, best first.
    pub fn ids(&self) -> Vec<&str> {
        self.ranking.ids().collect()
    }
}

/// Run one search.
#[instrument(skip(provider, resources), fields(query = %request.query))]
pub fn search<P>(
    provider: &P,
    resources: &LinguisticResources,
    request: &SearchRequest,
) -> Result<SearchOutcome>
where
    P: CorpusProvider + ?Sized,
{
    let processed = QueryProcessor::new(resources).process(&request.query, &request.pipeline)?;
    let processed_query = processed.text();

    let corpus = provider.load()?;
    if corpus.is_empty() {
        return Err(SearchError::EmptyCorpus);
    }

    let mut texts = corpus.texts();
    texts.push(processed_query.clone());

    let space = build_vectors(&texts, &request.query, request.feedback, &request.weights)?;
    let ranking = rank(&space.similarity, &corpus.ids(), space.query_row());

    info!(
        documents = corpus.len(),
        terms = space.vocabulary.len(),
        results = ranking.len(),
        "search complete"
    );

    Ok(SearchOutcome {
        ranking,
        weights: space.weights,
        processed_query,
    })
}

/// [`search`] with the six-argument calling convention the frontend uses.
#[allow(clippy::too_many_arguments)]
pub fn search_with_flags<P>(
    provider: &P,
    resources: &LinguisticResources,
    query: &str,
    verbose: bool,
    weights: &[f64],
    expand: bool,
    remove_stopwords: bool,
    stem: bool,
) -> Result<(Vec<String>, Vec<f64>)>
where
    P: CorpusProvider + ?Sized,
{
    let request = SearchRequest::new(query)
        .verbose(verbose)
        .weights(weights)
        .pipeline(PipelineConfig::new(expand, remove_stopwords, stem));
    let outcome = search(provider, resources, &request)?;
    let ids = outcome.ranking.ids().map(str::to_string).collect();
    Ok((ids, outcome.weights))
}
