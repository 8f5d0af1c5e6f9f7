// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query processing: raw text in, processed query out.
//!
//! Four stages in a fixed order. Tokenization always runs; the other three are
//! switched by [`PipelineConfig`]:
//!
//! ```text
//! tokenize + lowercase ─▶ expand (synonyms) ─▶ drop stopwords ─▶ stem
//! ```
//!
//! Stemming normally replaces the sequence it receives. The one exception is
//! the fully enabled pipeline: with expansion, stopword removal and stemming
//! all on, the stems are appended after the filtered tokens, so the query
//! carries both surface forms and stems. Rankings built on this engine
//! depend on that weighting, so it stays.

pub mod expansion;
pub mod stemmer;
pub mod stopwords;
pub mod tokenizer;

use std::fmt;

use tracing::{debug, instrument};

use crate::error::{Result, SearchError};
use crate::types::{Language, PipelineConfig};

use expansion::KnowledgeBase;
use stemmer::{SnowballStemmer, Stem, StemmerKind};
use stopwords::{BuiltinStopwords, StopwordSet, StopwordSource};

pub use tokenizer::tokenize;

/// The linguistic resources one query runs against.
///
/// Built explicitly by the caller and passed by reference; nothing here is a
/// global. Everything is read-only after construction, so a single instance
/// can serve concurrent queries.
pub struct LinguisticResources {
    language: Language,
    knowledge_base: Option<Box<dyn KnowledgeBase + Send + Sync>>,
    stopwords: StopwordSet,
    stemmer: Box<dyn Stem + Send + Sync>,
}

impl LinguisticResources {
    /// Built-in stopwords and a Snowball stemmer, no knowledge base.
    pub fn new(language: Language, stemmer: StemmerKind) -> Result<Self> {
        Ok(Self {
            language,
            knowledge_base: None,
            stopwords: BuiltinStopwords.stopwords(language)?,
            stemmer: Box::new(SnowballStemmer::new(stemmer)),
        })
    }

    /// Spanish, built-in stopwords, default stemmer.
    pub fn spanish() -> Result<Self> {
        Self::new(Language::Spanish, StemmerKind::default())
    }

    pub fn with_knowledge_base(
        mut self,
        knowledge_base: impl KnowledgeBase + Send + Sync + 'static,
    ) -> Self {
        self.knowledge_base = Some(Box::new(knowledge_base));
        self
    }

    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    pub fn with_stemmer(mut self, stemmer: impl Stem + Send + Sync + 'static) -> Self {
        self.stemmer = Box::new(stemmer);
        self
    }

    pub fn language(&self) -> Language {
        self.language
    }

    pub fn has_knowledge_base(&self) -> bool {
        self.knowledge_base.is_some()
    }
}

impl fmt::Debug for LinguisticResources {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinguisticResources")
            .field("language", &self.language)
            .field("knowledge_base", &self.knowledge_base.is_some())
            .field("stopwords", &self.stopwords.len())
            .finish_non_exhaustive()
    }
}

/// The final token sequence of a query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProcessedQuery {
    tokens: Vec<String>,
}

impl ProcessedQuery {
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens joined by single spaces; this is what gets vectorized.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

impl fmt::Display for ProcessedQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text())
    }
}

/// Runs the pipeline against a set of resources.
#[derive(Debug, Clone, Copy)]
pub struct QueryProcessor<'r> {
    resources: &'r LinguisticResources,
}

impl<'r> QueryProcessor<'r> {
    pub fn new(resources: &'r LinguisticResources) -> Self {
        Self { resources }
    }

    #[instrument(level = "debug", skip(self), fields(language = %self.resources.language))]
    pub fn process(&self, query: &str, config: &PipelineConfig) -> Result<ProcessedQuery> {
        let normal = tokenize(query);

        let expanded = if config.expand {
            self.expand(normal)?
        } else {
            normal
        };

        let filtered = if config.remove_stopwords {
            self.remove_stopwords(expanded)
        } else {
            expanded
        };

        let tokens = match (config.stem, config.expand && config.remove_stopwords) {
            (false, _) => filtered,
            (true, true) => {
                let stems = self.stem(&filtered);
                let mut tokens = filtered;
                tokens.extend(stems);
                tokens
            }
            (true, false) => self.stem(&filtered),
        };

        debug!(tokens = tokens.len(), "processed query");
        Ok(ProcessedQuery { tokens })
    }

    /// Original tokens first, then every synonym of every token.
    fn expand(&self, tokens: Vec<String>) -> Result<Vec<String>> {
        let knowledge_base = self.resources.knowledge_base.as_ref().ok_or_else(|| {
            SearchError::resource("knowledge base", "query expansion needs a synonym table")
        })?;

        let mut expanded = tokens.clone();
        for token in &tokens {
            let synonyms = knowledge_base.synonyms(token, self.resources.language)?;
            expanded.extend(synonyms);
        }
        debug!(
            before = tokens.len(),
            after = expanded.len(),
            "expanded query"
        );
        Ok(expanded)
    }

    fn remove_stopwords(&self, tokens: Vec<String>) -> Vec<String> {
        tokens
            .into_iter()
            .filter(|token| !self.resources.stopwords.contains(token))
            .collect()
    }

    fn stem(&self, tokens: &[String]) -> Vec<String> {
        tokens
            .iter()
            .map(|token| self.resources.stemmer.stem(token))
            .collect()
    }
}

/// String-in, string-out form of [`QueryProcessor::process`].
pub fn process_query(
    resources: &LinguisticResources,
    query: &str,
    expand: bool,
    remove_stopwords: bool,
    stem: bool,
) -> Result<String> {
    let config = PipelineConfig::new(expand, remove_stopwords, stem);
    Ok(QueryProcessor::new(resources).process(query, &config)?.text())
}
