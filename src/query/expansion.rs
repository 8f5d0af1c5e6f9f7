// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Query expansion from a lexical knowledge base.
//!
//! A knowledge base maps a term to the synonym sets (synsets) it belongs to.
//! Expansion appends every lemma of every synset to the query, so a term that
//! sits in three senses contributes all three groups. Nothing is deduplicated:
//! a lemma shared by two senses is appended twice, which raises its term
//! frequency in the query vector.
//!
//! [`SynonymTable`] reads the Open Multilingual Wordnet tab format:
//!
//! ```text
//! # Spanish   spa   http://...   license
//! 04373894-n	spa:lemma	espada
//! 04373894-n	spa:lemma	sable
//! ```
//!
//! Synset ids are shared across languages, so the table can look terms up in
//! one language and return lemmas from another file (for example Spanish
//! lookup, English lemmas).

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{Result, SearchError};
use crate::types::Language;

/// Supplies synonyms for a term.
pub trait KnowledgeBase {
    /// All lemmas of all synsets containing `term`, in lookup order.
    /// An unknown term yields an empty list.
    fn synonyms(&self, term: &str, language: Language) -> Result<Vec<String>>;
}

/// In-memory synset table loaded from Open Multilingual Wordnet tab files.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    language: Language,
    /// Lowercased lemma → synset ids, in file order.
    index: HashMap<String, Vec<String>>,
    /// Synset id → lemmas, in file order.
    lemmas: HashMap<String, Vec<String>>,
}

impl SynonymTable {
    /// Parse a tab file whose `<lang>:lemma` rows are in `language`.
    ///
    /// Rows for other languages or other relations (`spa:def`, `spa:exe`)
    /// are ignored. Spaces inside multiword lemmas become `_`.
    pub fn parse(language: Language, content: &str) -> Self {
        let mut table = Self {
            language,
            ..Self::default()
        };
        for (synset, lemma) in lemma_rows(content, language.code()) {
            table
                .index
                .entry(lemma.to_lowercase())
                .or_default()
                .push(synset.to_string());
            table
                .lemmas
                .entry(synset.to_string())
                .or_default()
                .push(lemma);
        }
        debug!(
            language = %language,
            lemmas = table.index.len(),
            synsets = table.lemmas.len(),
            "parsed synonym table"
        );
        table
    }

    /// Load from a file on disk.
    pub fn load(language: Language, path: &Path) -> Result<Self> {
        let content = read_table(path)?;
        Ok(Self::parse(language, &content))
    }

    /// Replace the lemmas each synset expands to with those of another tab
    /// file (any language code). Lookup still uses this table's language.
    pub fn with_lemmas_from(mut self, content: &str) -> Self {
        let mut lemmas: HashMap<String, Vec<String>> = HashMap::new();
        for line in content.lines() {
            if let Some((synset, lemma)) = parse_any_lemma_row(line) {
                lemmas.entry(synset.to_string()).or_default().push(lemma);
            }
        }
        self.lemmas = lemmas;
        self
    }

    /// [`SynonymTable::with_lemmas_from`] reading from disk.
    pub fn with_lemmas_from_path(self, path: &Path) -> Result<Self> {
        let content = read_table(path)?;
        Ok(self.with_lemmas_from(&content))
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of distinct lookup lemmas.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl KnowledgeBase for SynonymTable {
    fn synonyms(&self, term: &str, language: Language) -> Result<Vec<String>> {
        if language != self.language {
            return Err(SearchError::resource(
                "knowledge base",
                format!(
                    "synonym table covers '{}', lookup asked for '{}'",
                    self.language, language
                ),
            ));
        }
        let Some(synsets) = self.index.get(term) else {
            return Ok(Vec::new());
        };
        Ok(synsets
            .iter()
            .filter_map(|id| self.lemmas.get(id))
            .flatten()
            .cloned()
            .collect())
    }
}

fn read_table(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|e| {
        SearchError::resource("knowledge base", format!("{}: {}", path.display(), e))
    })
}

fn lemma_rows<'a>(content: &'a str, code: &'a str) -> impl Iterator<Item = (&'a str, String)> {
    content.lines().filter_map(move |line| {
        let (synset, relation, lemma) = split_row(line)?;
        let (lang, kind) = relation.split_once(':')?;
        (lang == code && kind == "lemma").then(|| (synset, lemma_name(lemma)))
    })
}

fn parse_any_lemma_row(line: &str) -> Option<(&str, String)> {
    let (synset, relation, lemma) = split_row(line)?;
    let (_, kind) = relation.split_once(':')?;
    (kind == "lemma").then(|| (synset, lemma_name(lemma)))
}

fn split_row(line: &str) -> Option<(&str, &str, &str)> {
    if line.starts_with('#') {
        return None;
    }
    let mut fields = line.split('\t');
    let synset = fields.next()?.trim();
    let relation = fields.next()?.trim();
    let lemma = fields.next()?.trim();
    if synset.is_empty() || lemma.is_empty() {
        return None;
    }
    Some((synset, relation, lemma))
}

fn lemma_name(lemma: &str) -> String {
    lemma.replace(' ', "_")
}
