//! Vector-space document retrieval with relevance feedback.
//!
//! A query is processed (tokenized, optionally expanded with synonyms,
//! stripped of stopwords and stemmed), vectorized together with every document
//! of a corpus using smoothed TF-IDF, and documents are ranked by cosine
//! similarity to it. The caller can read back the query's term weights or
//! override them and search again.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │   query/     │────▶│   vector/     │────▶│  scoring/    │
//! │ (tokenize,   │     │ (fit_transform│     │  (rank,      │
//! │  expand,     │     │  feedback,    │     │   TOP_K,     │
//! │  stopwords,  │     │  cosine)      │     │   sentinel)  │
//! │  stem)       │     │               │     │              │
//! └──────────────┘     └───────────────┘     └──────────────┘
//!        ▲                     ▲                     │
//!        │              ┌──────┴──────┐              ▼
//!        │              │  corpus/    │      ┌──────────────┐
//!        └──────────────│ (providers) │◀─────│  search.rs   │
//!                       └─────────────┘      │  (search)    │
//!                                            └──────────────┘
//! ```
//!
//! Every search is a full pass. Nothing is cached between calls; the
//! linguistic resources are the only long-lived state and they are read-only.
//!
//! # Usage
//!
//! ```
//! use lexvec::{search, InMemoryCorpus, LinguisticResources, SearchRequest};
//!
//! let corpus = InMemoryCorpus::from_pairs([
//!     ("d1", "the sword is sharp"),
//!     ("d2", "a shield and armor"),
//! ]);
//! let resources = LinguisticResources::spanish()?;
//! let outcome = search(&corpus, &resources, &SearchRequest::new("sword"))?;
//! assert_eq!(outcome.ids(), vec!["d1"]);
//! # Ok::<(), lexvec::SearchError>(())
//! ```

pub mod config;
pub mod corpus;
pub mod error;
pub mod query;
pub mod scoring;
mod search;
mod types;
mod utils;
pub mod vector;

#[doc(hidden)]
pub mod testing;

pub use config::Config;
pub use corpus::{Corpus, CorpusProvider, DirectoryCorpus, InMemoryCorpus, JsonCorpus};
pub use error::{Result, SearchError};
pub use query::expansion::{KnowledgeBase, SynonymTable};
pub use query::stemmer::{SnowballStemmer, Stem, StemmerKind};
pub use query::stopwords::{BuiltinStopwords, StopwordSet, StopwordSource};
pub use query::{process_query, tokenize, LinguisticResources, ProcessedQuery, QueryProcessor};
pub use scoring::{rank, RankedEntry, Ranking, NO_RELEVANT_RESULTS, TOP_K};
pub use search::{search, search_with_flags, SearchOutcome, SearchRequest};
pub use types::{Document, FeedbackMode, Language, PipelineConfig};
pub use utils::{normalize, round2};
pub use vector::{build_vectors, SimilarityMatrix, TermMatrix, VectorSpace, Vocabulary};
