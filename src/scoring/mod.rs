// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Scoring and ranking: how search results get their numbers.
//!
//! A document's score is its cosine similarity to the query vector. Ranking
//! filters, sorts and truncates those scores.

pub mod ranking;

pub use ranking::{rank, RankedEntry, Ranking, NO_RELEVANT_RESULTS, TOP_K};
