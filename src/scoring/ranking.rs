// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Result ranking: how search results get sorted.
//!
//! Scores come straight from the query's similarity row. Documents with a
//! score of zero (or below, after a negative feedback override) never show
//! up. Ties keep corpus order: the sort is stable and there is no secondary
//! key, so two equally similar documents appear in the order the provider
//! listed them.
//!
//! When nothing scores above zero the ranking is a single sentinel entry,
//! [`NO_RELEVANT_RESULTS`] with score 1, so a caller that only renders ids
//! still shows the user something meaningful.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::vector::SimilarityMatrix;

/// Maximum number of ranked entries.
pub const TOP_K: usize = 10;

/// Identifier of the sentinel entry.
pub const NO_RELEVANT_RESULTS: &str = "no relevant results";

/// A document identifier with its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RankedEntry {
    pub id: String,
    pub score: f64,
}

/// Ordered top results, or the sentinel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ranking {
    entries: Vec<RankedEntry>,
}

impl Ranking {
    fn no_relevant_results() -> Self {
        Self {
            entries: vec![RankedEntry {
                id: NO_RELEVANT_RESULTS.to_string(),
                score: 1.0,
            }],
        }
    }

    pub fn entries(&self) -> &[RankedEntry] {
        &self.entries
    }

    /// Identifiers in rank order.
    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|entry| entry.id.as_str())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Never true for a ranking built by [`rank`]; the sentinel fills in.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Is this the "no relevant results" sentinel?
    pub fn is_no_relevant_results(&self) -> bool {
        matches!(self.entries.as_slice(), [only] if only.id == NO_RELEVANT_RESULTS)
    }
}

/// Descending by score. Incomparable scores (NaN) compare equal so the stable
/// sort leaves them where they were.
pub fn compare_scores(a: &RankedEntry, b: &RankedEntry) -> Ordering {
    b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal)
}

/// Rank documents by their similarity to the query in row `query_row`.
///
/// `document_ids` are in corpus order and align with the matrix columns that
/// are not the query. Extra ids beyond the matrix are ignored.
pub fn rank<S: AsRef<str>>(
    similarity: &SimilarityMatrix,
    document_ids: &[S],
    query_row: usize,
) -> Ranking {
    let scores = similarity.row(query_row).unwrap_or(&[]);

    let mut entries: Vec<RankedEntry> = scores
        .iter()
        .enumerate()
        .filter(|(column, _)| *column != query_row)
        .zip(document_ids)
        .filter(|((_, score), _)| **score > 0.0)
        .map(|((_, &score), id)| RankedEntry {
            id: id.as_ref().to_string(),
            score,
        })
        .collect();

    if entries.is_empty() {
        return Ranking::no_relevant_results();
    }

    entries.sort_by(compare_scores);
    entries.truncate(TOP_K);
    Ranking { entries }
}
