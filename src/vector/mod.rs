// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The vector space: TF-IDF rows, relevance feedback, cosine similarity.
//!
//! Input is the corpus texts with the processed query appended last. The
//! query therefore always owns the final row and column of every matrix built
//! here, and "query against all documents" is the last similarity row minus
//! its last entry.
//!
//! ```text
//! texts ─▶ fit_transform ─▶ apply_feedback (query row) ─▶ cosine_similarity
//!             │                    │
//!         Vocabulary         final weights
//! ```

pub mod feedback;
pub mod similarity;
pub mod tfidf;

use tracing::{debug, instrument};

use crate::error::{Result, SearchError};
use crate::types::FeedbackMode;

pub use feedback::apply_feedback;
pub use similarity::{cosine_similarity, SimilarityMatrix};
pub use tfidf::{fit_transform, TermMatrix, Vocabulary};

/// Everything built for one query.
#[derive(Debug, Clone)]
pub struct VectorSpace {
    pub vocabulary: Vocabulary,
    /// TF-IDF rows after feedback was applied to the query row.
    pub matrix: TermMatrix,
    pub similarity: SimilarityMatrix,
    /// Weights as supplied, or with current values reported into them.
    pub weights: Vec<f64>,
}

impl VectorSpace {
    /// Row (and column) index of the query.
    pub fn query_row(&self) -> usize {
        self.similarity.size() - 1
    }
}

/// Vectorize `texts` (documents, then the processed query), apply feedback
/// keyed on `raw_query`, and compute pairwise similarity.
#[instrument(level = "debug", skip(texts, weights), fields(texts = texts.len()))]
pub fn build_vectors(
    texts: &[String],
    raw_query: &str,
    mode: FeedbackMode,
    weights: &[f64],
) -> Result<VectorSpace> {
    if texts.len() < 2 {
        return Err(SearchError::EmptyCorpus);
    }

    let (vocabulary, mut matrix) = fit_transform(texts);
    debug!(terms = vocabulary.len(), "fitted vocabulary");

    let weights = apply_feedback(&mut matrix, &vocabulary, raw_query, mode, weights);
    let similarity = cosine_similarity(&matrix);

    Ok(VectorSpace {
        vocabulary,
        matrix,
        similarity,
        weights,
    })
}
