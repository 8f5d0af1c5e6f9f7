// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the retrieval pipeline.
//!
//! The taxonomy is narrow. Most odd inputs are not errors at all:
//! a feedback word missing from the vocabulary is skipped, a weight list of the
//! wrong length is truncated to the shorter side, and a query that matches
//! nothing produces the "no relevant results" sentinel. What remains are the
//! cases where a ranking would be meaningless or the deployment is broken.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by [`crate::search`] and the components it drives.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The corpus provider returned no documents.
    ///
    /// Vectorizing zero documents plus a query is degenerate, so this is
    /// reported before any matrix is built.
    #[error("corpus is empty: at least one document is required")]
    EmptyCorpus,

    /// A linguistic resource (knowledge base, stopword list, stemmer) is
    /// missing or does not cover the requested language.
    #[error("{resource} unavailable: {reason}")]
    ResourceUnavailable {
        resource: &'static str,
        reason: String,
    },

    /// The corpus could not be read from disk.
    #[error("failed to read corpus at {}: {source}", path.display())]
    CorpusIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A configuration file was unreadable or malformed.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SearchError {
    pub(crate) fn resource(resource: &'static str, reason: impl Into<String>) -> Self {
        SearchError::ResourceUnavailable {
            resource,
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SearchError>;
