// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Relevance feedback on the query vector.
//!
//! The frontend shows one slider per word of the query as the user typed it,
//! so weights are keyed positionally on the raw query split on single spaces,
//! not on the processed tokens. Words are looked up verbatim: no case folding,
//! no stemming. A word the vocabulary never saw is skipped.
//!
//! Two modes:
//! - **Override** writes each supplied weight into the query row at that
//!   word's column. The row is not renormalized; cosine similarity takes care
//!   of scale.
//! - **Report** leaves the row alone and writes the current value, rounded to
//!   two decimals, back into the weights. Reported values are packed by hit:
//!   the first vocabulary hit goes to slot 0, the second to slot 1, and so on.
//!   Slots past the last hit keep what the caller sent.

use tracing::{debug, warn};

use crate::types::FeedbackMode;
use crate::utils::round2;

use super::tfidf::{TermMatrix, Vocabulary};

/// Apply feedback to the last row of `matrix` and return the final weights.
pub fn apply_feedback(
    matrix: &mut TermMatrix,
    vocabulary: &Vocabulary,
    raw_query: &str,
    mode: FeedbackMode,
    weights: &[f64],
) -> Vec<f64> {
    let mut output = weights.to_vec();
    let Some(query_row) = matrix.num_rows().checked_sub(1) else {
        return output;
    };

    let words: Vec<&str> = raw_query.split(' ').collect();
    if words.len() != weights.len() {
        warn!(
            words = words.len(),
            weights = weights.len(),
            "feedback weights do not match query words; pairing the shorter prefix"
        );
    }

    let mut hits = 0usize;
    for (word, &weight) in words.iter().zip(weights) {
        let Some(column) = vocabulary.get(word) else {
            continue;
        };
        match mode {
            FeedbackMode::Override => matrix.set(query_row, column, weight),
            FeedbackMode::Report => {
                if let Some(current) = matrix.get(query_row, column) {
                    output[hits] = round2(current);
                }
            }
        }
        hits += 1;
    }

    debug!(?mode, hits, "applied relevance feedback");
    output
}
