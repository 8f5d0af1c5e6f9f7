// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime configuration.
//!
//! A JSON file with camelCase keys, every key optional:
//!
//! ```json
//! {
//!   "corpusDir": "data/corpus",
//!   "synonyms": "data/wn-data-spa.tab",
//!   "synonymLemmas": "data/wn-data-eng.tab",
//!   "language": "spanish",
//!   "stemmer": "english",
//!   "pipeline": { "expand": false, "removeStopwords": true, "stem": false }
//! }
//! ```
//!
//! Later sources win: built-in defaults, then the file, then environment
//! variables, then command-line flags.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::corpus::DirectoryCorpus;
use crate::error::{Result, SearchError};
use crate::query::expansion::SynonymTable;
use crate::query::stemmer::StemmerKind;
use crate::query::LinguisticResources;
use crate::types::{Language, PipelineConfig};

/// Path of a config file to read.
pub const CONFIG_ENV: &str = "LEXVEC_CONFIG";
/// Overrides `corpusDir`.
pub const CORPUS_DIR_ENV: &str = "LEXVEC_CORPUS_DIR";
/// Overrides `synonyms`.
pub const SYNONYMS_ENV: &str = "LEXVEC_SYNONYMS";

pub const DEFAULT_CORPUS_DIR: &str = "data/corpus";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// Folder of `*.txt` documents.
    pub corpus_dir: PathBuf,
    /// Open Multilingual Wordnet tab file for `language`. Without it, query
    /// expansion is unavailable.
    pub synonyms: Option<PathBuf>,
    /// Optional second tab file whose lemmas replace the expansions, e.g.
    /// English lemmas for Spanish lookups.
    pub synonym_lemmas: Option<PathBuf>,
    pub language: Language,
    pub stemmer: StemmerKind,
    /// Stages enabled when the caller does not say otherwise.
    pub pipeline: PipelineConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            corpus_dir: PathBuf::from(DEFAULT_CORPUS_DIR),
            synonyms: None,
            synonym_lemmas: None,
            language: Language::default(),
            stemmer: StemmerKind::default(),
            pipeline: PipelineConfig::default(),
        }
    }
}

/// Values given on the command line. `None` leaves the setting alone.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub corpus_dir: Option<PathBuf>,
    pub synonyms: Option<PathBuf>,
}

impl Config {
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SearchError::InvalidConfig(e.to_string()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|e| {
            SearchError::InvalidConfig(format!("cannot read {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw).map_err(|e| match e {
            SearchError::InvalidConfig(reason) => {
                SearchError::InvalidConfig(format!("{}: {}", path.display(), reason))
            }
            other => other,
        })
    }

    /// Full resolution against the process environment.
    ///
    /// `file` is the `--config` flag; without it `LEXVEC_CONFIG` is consulted,
    /// and without either the defaults stand.
    pub fn resolve(file: Option<&Path>, overrides: &Overrides) -> Result<Self> {
        Self::resolve_with(file, overrides, |key| std::env::var(key).ok())
    }

    /// [`Config::resolve`] with an injectable environment.
    pub fn resolve_with<F>(file: Option<&Path>, overrides: &Overrides, env: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let file = file
            .map(Path::to_path_buf)
            .or_else(|| env(CONFIG_ENV).map(PathBuf::from));

        let mut config = match file {
            Some(path) => {
                debug!(path = %path.display(), "reading config file");
                Self::from_file(&path)?
            }
            None => Self::default(),
        };

        if let Some(dir) = env(CORPUS_DIR_ENV) {
            config.corpus_dir = PathBuf::from(dir);
        }
        if let Some(path) = env(SYNONYMS_ENV) {
            config.synonyms = Some(PathBuf::from(path));
        }

        config.apply(overrides);
        Ok(config)
    }

    pub fn apply(&mut self, overrides: &Overrides) {
        if let Some(dir) = &overrides.corpus_dir {
            self.corpus_dir = dir.clone();
        }
        if let Some(path) = &overrides.synonyms {
            self.synonyms = Some(path.clone());
        }
    }

    pub fn corpus(&self) -> DirectoryCorpus {
        DirectoryCorpus::new(&self.corpus_dir)
    }

    /// Build the linguistic resources this config describes. Synonym files
    /// are read here, once.
    pub fn resources(&self) -> Result<LinguisticResources> {
        let resources = LinguisticResources::new(self.language, self.stemmer)?;
        let Some(path) = &self.synonyms else {
            if self.synonym_lemmas.is_some() {
                return Err(SearchError::InvalidConfig(
                    "synonymLemmas requires synonyms".to_string(),
                ));
            }
            return Ok(resources);
        };

        let mut table = SynonymTable::load(self.language, path)?;
        if let Some(lemmas) = &self.synonym_lemmas {
            table = table.with_lemmas_from_path(lemmas)?;
        }
        debug!(synsets = table.len(), "loaded synonym table");
        Ok(resources.with_knowledge_base(table))
    }
}
