// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Core data types shared by the pipeline stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A document as handed out by a corpus provider.
///
/// Immutable once loaded. The `id` is unique within one corpus (a file name
/// for directory corpora).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: String,
    pub text: String,
}

impl Document {
    pub fn new(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

/// Language of the linguistic resources.
///
/// Queries are tokenized with Spanish conventions; the language picks the
/// stopword list and the synonym table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Spanish,
    English,
}

impl Language {
    /// ISO 639-3 code, as used in Open Multilingual Wordnet files.
    pub fn code(self) -> &'static str {
        match self {
            Language::Spanish => "spa",
            Language::English => "eng",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which optional query-processing stages run.
///
/// Tokenization and lowercasing always run. The three flags compose
/// independently, in the fixed order expand → stopwords → stem.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PipelineConfig {
    /// Append synonyms from the knowledge base.
    pub expand: bool,
    /// Drop stopwords.
    pub remove_stopwords: bool,
    /// Reduce tokens to stems.
    pub stem: bool,
}

impl PipelineConfig {
    pub fn new(expand: bool, remove_stopwords: bool, stem: bool) -> Self {
        Self {
            expand,
            remove_stopwords,
            stem,
        }
    }

    /// Every stage enabled.
    pub fn all() -> Self {
        Self::new(true, true, true)
    }
}

/// What relevance feedback does with the supplied weights.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackMode {
    /// Write the supplied weights into the query vector.
    Override,
    /// Leave the query vector alone and report its current (rounded) weights.
    #[default]
    Report,
}

/// `verbose = true` is the override mode, `false` reads weights back.
impl From<bool> for FeedbackMode {
    fn from(verbose: bool) -> Self {
        if verbose {
            FeedbackMode::Override
        } else {
            FeedbackMode::Report
        }
    }
}
