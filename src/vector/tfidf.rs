// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF vectorization with scikit-learn's default weighting.
//!
//! The numbers have to line up with what the frontend has always shown users,
//! so every default is pinned:
//!
//! | Knob | Value |
//! |------|-------|
//! | analyzer | lowercase, runs of 2+ word characters (`\w\w+`) |
//! | stopwords | none (the query pipeline already handled them) |
//! | vocabulary | every term, columns in sorted term order |
//! | tf | raw count |
//! | idf | `ln((1 + n) / (1 + df)) + 1` (smoothed) |
//! | norm | L2 per row; all-zero rows stay zero |
//!
//! The `+1` on idf keeps terms that occur in every text from vanishing.

use std::collections::{BTreeMap, BTreeSet, HashMap};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::utils::{is_word_char, normalize};

/// Minimum characters in an indexable term.
pub const MIN_TERM_CHARS: usize = 2;

/// Term → column index, fit over every text including the query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    columns: BTreeMap<String, usize>,
}

impl Vocabulary {
    fn from_terms(terms: BTreeSet<&str>) -> Self {
        let columns = terms
            .into_iter()
            .enumerate()
            .map(|(column, term)| (term.to_string(), column))
            .collect();
        Self { columns }
    }

    /// Column of `term`, if it was seen while fitting. Exact match.
    pub fn get(&self, term: &str) -> Option<usize> {
        self.columns.get(term).copied()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.columns.contains_key(term)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Terms in column order.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.columns.keys().map(String::as_str)
    }
}

/// Dense row-major matrix of term weights, one row per text.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TermMatrix {
    rows: Vec<Vec<f64>>,
    columns: usize,
}

impl TermMatrix {
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }

    pub fn row(&self, index: usize) -> Option<&[f64]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        self.rows.get(row)?.get(column).copied()
    }

    pub(crate) fn set(&mut self, row: usize, column: usize, value: f64) {
        if let Some(cell) = self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            *cell = value;
        }
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns
    }
}

/// Split text into indexable terms: lowercase, runs of word characters,
/// at least [`MIN_TERM_CHARS`] long. Everything else is a separator.
pub fn analyze(text: &str) -> Vec<String> {
    normalize(text)
        .split(|c: char| !is_word_char(c))
        .filter(|term| term.chars().count() >= MIN_TERM_CHARS)
        .map(str::to_string)
        .collect()
}

/// Smoothed inverse document frequency.
pub fn smooth_idf(num_texts: usize, doc_frequency: usize) -> f64 {
    ((1.0 + num_texts as f64) / (1.0 + doc_frequency as f64)).ln() + 1.0
}

/// Fit the vocabulary and produce the weighted, L2-normalized matrix.
pub fn fit_transform(texts: &[String]) -> (Vocabulary, TermMatrix) {
    #[cfg(feature = "parallel")]
    let analyzed: Vec<Vec<String>> = texts.par_iter().map(|text| analyze(text)).collect();
    #[cfg(not(feature = "parallel"))]
    let analyzed: Vec<Vec<String>> = texts.iter().map(|text| analyze(text)).collect();

    let vocabulary = Vocabulary::from_terms(
        analyzed
            .iter()
            .flat_map(|terms| terms.iter().map(String::as_str))
            .collect(),
    );

    let mut doc_frequency = vec![0usize; vocabulary.len()];
    for terms in &analyzed {
        let unique: BTreeSet<&str> = terms.iter().map(String::as_str).collect();
        for term in unique {
            if let Some(column) = vocabulary.get(term) {
                doc_frequency[column] += 1;
            }
        }
    }

    let idf: Vec<f64> = doc_frequency
        .iter()
        .map(|&df| smooth_idf(texts.len(), df))
        .collect();

    let weigh = |terms: &Vec<String>| weigh_row(terms, &vocabulary, &idf);
    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<f64>> = analyzed.par_iter().map(weigh).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<f64>> = analyzed.iter().map(weigh).collect();

    let columns = vocabulary.len();
    (vocabulary, TermMatrix { rows, columns })
}

fn weigh_row(terms: &[String], vocabulary: &Vocabulary, idf: &[f64]) -> Vec<f64> {
    let mut counts: HashMap<usize, usize> = HashMap::new();
    for term in terms {
        if let Some(column) = vocabulary.get(term) {
            *counts.entry(column).or_insert(0) += 1;
        }
    }

    let mut row = vec![0.0; vocabulary.len()];
    for (column, count) in counts {
        row[column] = count as f64 * idf[column];
    }

    let norm = l2_norm(&row);
    if norm > 0.0 {
        for value in &mut row {
            *value /= norm;
        }
    }
    row
}

pub(crate) fn l2_norm(row: &[f64]) -> f64 {
    row.iter().map(|v| v * v).sum::<f64>().sqrt()
}
