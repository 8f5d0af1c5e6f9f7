// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Stemming behind a small trait so callers can inject their own.

use rust_stemmers::{Algorithm, Stemmer};
use serde::{Deserialize, Serialize};

/// Reduces a token to its stem.
pub trait Stem {
    fn stem(&self, term: &str) -> String;
}

/// Which Snowball algorithm to run.
///
/// `English` is the Porter family (Snowball's Porter2 revision). It is the
/// default because the engine has always stemmed with a Porter stemmer, even
/// over Spanish text. `Spanish` is the better linguistic fit and is one
/// config switch away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StemmerKind {
    #[default]
    English,
    Spanish,
}

/// A Snowball stemmer from `rust-stemmers`. Stateless, safe to share.
pub struct SnowballStemmer {
    kind: StemmerKind,
    inner: Stemmer,
}

impl SnowballStemmer {
    pub fn new(kind: StemmerKind) -> Self {
        let algorithm = match kind {
            StemmerKind::English => Algorithm::English,
            StemmerKind::Spanish => Algorithm::Spanish,
        };
        Self {
            kind,
            inner: Stemmer::create(algorithm),
        }
    }

    pub fn kind(&self) -> StemmerKind {
        self.kind
    }
}

impl Default for SnowballStemmer {
    fn default() -> Self {
        Self::new(StemmerKind::default())
    }
}

impl std::fmt::Debug for SnowballStemmer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SnowballStemmer")
            .field("kind", &self.kind)
            .finish()
    }
}

impl Stem for SnowballStemmer {
    fn stem(&self, term: &str) -> String {
        self.inner.stem(term).into_owned()
    }
}
