// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Corpus providers: where documents come from.
//!
//! The engine does not care how documents are stored. A provider hands out an
//! ordered list of `(id, text)` documents once per search, and that order is
//! the row order of every matrix built for the query. Providers must therefore
//! be deterministic; the directory and JSON providers sort or preserve order
//! explicitly.

mod directory;

use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::{Result, SearchError};
use crate::types::Document;

pub use directory::DirectoryCorpus;

/// Supplies the documents for one search.
pub trait CorpusProvider {
    fn load(&self) -> Result<Corpus>;
}

/// An ordered list of documents.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self { documents }
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn ids(&self) -> Vec<&str> {
        self.documents.iter().map(|doc| doc.id.as_str()).collect()
    }

    /// Document texts in corpus order, ready for vectorization.
    pub fn texts(&self) -> Vec<String> {
        self.documents.iter().map(|doc| doc.text.clone()).collect()
    }
}

impl FromIterator<Document> for Corpus {
    fn from_iter<I: IntoIterator<Item = Document>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Documents held in memory, returned in insertion order.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCorpus {
    corpus: Corpus,
}

impl InMemoryCorpus {
    pub fn new(documents: Vec<Document>) -> Self {
        Self {
            corpus: Corpus::new(documents),
        }
    }

    /// Build from `(id, text)` pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self::new(
            pairs
                .into_iter()
                .map(|(id, text)| Document::new(id, text))
                .collect(),
        )
    }
}

impl CorpusProvider for InMemoryCorpus {
    fn load(&self) -> Result<Corpus> {
        Ok(self.corpus.clone())
    }
}

/// A JSON file holding an array of `{"id": ..., "text": ...}` objects.
/// Array order is corpus order.
#[derive(Debug, Clone)]
pub struct JsonCorpus {
    path: PathBuf,
}

impl JsonCorpus {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CorpusProvider for JsonCorpus {
    fn load(&self) -> Result<Corpus> {
        let raw = fs::read_to_string(&self.path).map_err(|source| SearchError::CorpusIo {
            path: self.path.clone(),
            source,
        })?;
        let documents: Vec<Document> = serde_json::from_str(&raw).map_err(|e| {
            SearchError::CorpusIo {
                path: self.path.clone(),
                source: std::io::Error::new(std::io::ErrorKind::InvalidData, e),
            }
        })?;
        info!(path = %self.path.display(), documents = documents.len(), "loaded JSON corpus");
        Ok(Corpus::new(documents))
    }
}
