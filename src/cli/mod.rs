// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the lexvec command-line interface.
//!
//! Three subcommands: `search` ranks a corpus folder against a query, `process`
//! shows what the query pipeline turns a query into, and `vocab` shows the
//! query's current weight for each word, ready to be edited and passed back
//! with `--weights ... --override`.

pub mod display;

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use lexvec::config::Overrides;
use lexvec::{FeedbackMode, PipelineConfig};

#[derive(Parser)]
#[command(
    name = "lexvec",
    about = "TF-IDF document retrieval with relevance feedback",
    version
)]
pub struct Cli {
    /// Log progress to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// JSON config file (default: $LEXVEC_CONFIG)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rank the documents of a corpus folder against a query
    Search {
        /// Search query
        query: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        pipeline: PipelineArgs,

        /// One weight per space-separated query word, comma separated
        #[arg(long, value_delimiter = ',', allow_negative_numbers = true)]
        weights: Vec<f64>,

        /// Write the weights into the query vector instead of reading them back
        #[arg(long = "override")]
        override_weights: bool,

        /// Print a JSON object instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Print the processed form of a query
    Process {
        /// Search query
        query: String,

        /// Synonym table (Open Multilingual Wordnet tab file)
        #[arg(long)]
        synonyms: Option<PathBuf>,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },

    /// Show each query word's vocabulary column and current weight
    Vocab {
        /// Search query
        query: String,

        #[command(flatten)]
        source: SourceArgs,

        #[command(flatten)]
        pipeline: PipelineArgs,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Folder of *.txt documents (default: data/corpus)
    #[arg(long)]
    pub corpus: Option<PathBuf>,

    /// Synonym table (Open Multilingual Wordnet tab file)
    #[arg(long)]
    pub synonyms: Option<PathBuf>,
}

impl From<&SourceArgs> for Overrides {
    fn from(args: &SourceArgs) -> Self {
        Overrides {
            corpus_dir: args.corpus.clone(),
            synonyms: args.synonyms.clone(),
        }
    }
}

/// Pipeline switches. Any switch given replaces the config file's pipeline;
/// with none given the config file decides.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct PipelineArgs {
    /// Expand the query with synonyms
    #[arg(long)]
    pub expand: bool,

    /// Remove stopwords
    #[arg(long)]
    pub stopwords: bool,

    /// Stem the query
    #[arg(long)]
    pub stem: bool,
}

impl PipelineArgs {
    pub fn resolve(&self, configured: PipelineConfig) -> PipelineConfig {
        if self.expand || self.stopwords || self.stem {
            PipelineConfig::new(self.expand, self.stopwords, self.stem)
        } else {
            configured
        }
    }
}

pub fn feedback_mode(override_weights: bool) -> FeedbackMode {
    FeedbackMode::from(override_weights)
}

/// One weight per space-separated query word. Without `--weights` every word
/// starts at zero, which report mode fills with the query's current weights.
pub fn query_weights(query: &str, weights: Vec<f64>) -> Vec<f64> {
    if weights.is_empty() {
        vec![0.0; query.split(' ').count()]
    } else {
        weights
    }
}
