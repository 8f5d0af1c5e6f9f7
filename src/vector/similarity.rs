// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Pairwise cosine similarity.
//!
//! Rows are L2-normalized first and then dotted, so an overridden query row
//! is compared by direction only. A row with no terms has no direction: its
//! similarity to everything, itself included, is 0.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use super::tfidf::{l2_norm, TermMatrix};

/// Square, symmetric matrix of cosine similarities, stored row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct SimilarityMatrix {
    size: usize,
    values: Vec<f64>,
}

impl SimilarityMatrix {
    /// Number of rows (and columns).
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn get(&self, row: usize, column: usize) -> Option<f64> {
        if row >= self.size || column >= self.size {
            return None;
        }
        self.values.get(row * self.size + column).copied()
    }

    pub fn row(&self, row: usize) -> Option<&[f64]> {
        if row >= self.size {
            return None;
        }
        Some(&self.values[row * self.size..(row + 1) * self.size])
    }
}

/// Cosine similarity between every pair of rows.
pub fn cosine_similarity(matrix: &TermMatrix) -> SimilarityMatrix {
    let unit: Vec<Vec<f64>> = matrix.rows().iter().map(|row| unit_vector(row)).collect();
    let size = unit.len();

    let similarities = |(i, a): (usize, &Vec<f64>)| -> Vec<f64> {
        let a_is_zero = a.iter().all(|v| *v == 0.0);
        unit.iter()
            .enumerate()
            .map(|(j, b)| {
                if i == j {
                    if a_is_zero {
                        0.0
                    } else {
                        1.0
                    }
                } else {
                    dot(a, b)
                }
            })
            .collect()
    };

    #[cfg(feature = "parallel")]
    let rows: Vec<Vec<f64>> = unit.par_iter().enumerate().map(similarities).collect();
    #[cfg(not(feature = "parallel"))]
    let rows: Vec<Vec<f64>> = unit.iter().enumerate().map(similarities).collect();

    SimilarityMatrix {
        size,
        values: rows.into_iter().flatten().collect(),
    }
}

fn unit_vector(row: &[f64]) -> Vec<f64> {
    let norm = l2_norm(row);
    if norm > 0.0 {
        row.iter().map(|v| v / norm).collect()
    } else {
        row.to_vec()
    }
}

fn dot(a: &[f64], b: &[f64]) -> f64 {
    a.iter().zip(b).map(|(x, y)| x * y).sum()
}
