//! Test utilities shared across unit tests, integration tests and benches.
//!
//! This module is always compiled but hidden from documentation.

#![doc(hidden)]

use crate::corpus::InMemoryCorpus;
use crate::query::expansion::SynonymTable;
use crate::query::LinguisticResources;
use crate::types::Language;

/// A small Spanish synonym table in Open Multilingual Wordnet format.
pub const SPANISH_SYNONYMS: &str = "# Spanish\tspa\thttp://example.org\tCC BY 3.0\n\
04373894-n\tspa:lemma\tespada\n\
04373894-n\tspa:lemma\tsable\n\
04373894-n\tspa:lemma\tacero\n\
04192858-n\tspa:lemma\tescudo\n\
04192858-n\tspa:lemma\tbroquel\n\
10000001-n\tspa:lemma\tcaballero\n\
10000001-n\tspa:lemma\tjinete\n";

/// The sword/shield corpus.
pub fn armory() -> InMemoryCorpus {
    InMemoryCorpus::from_pairs([
        ("d1", "the sword is sharp"),
        ("d2", "a shield and armor"),
    ])
}

/// A handful of short Spanish documents.
pub fn spanish_corpus() -> InMemoryCorpus {
    InMemoryCorpus::from_pairs([
        ("cantar.txt", "El caballero desenvainó la espada ante el rey"),
        ("herrero.txt", "El herrero forjó un sable de acero templado"),
        ("muralla.txt", "Los soldados defendieron la muralla con escudos"),
        ("puerto.txt", "Los barcos llegaron al puerto al amanecer"),
        ("torneo.txt", "En el torneo cada jinete llevaba escudo y espada"),
    ])
}

/// In-memory corpus from `(id, text)` pairs.
pub fn corpus(pairs: &[(&str, &str)]) -> InMemoryCorpus {
    InMemoryCorpus::from_pairs(pairs.iter().copied())
}

/// Spanish resources with [`SPANISH_SYNONYMS`] as knowledge base.
pub fn resources_with_synonyms() -> LinguisticResources {
    LinguisticResources::spanish()
        .expect("built-in Spanish resources")
        .with_knowledge_base(SynonymTable::parse(Language::Spanish, SPANISH_SYNONYMS))
}

/// Spanish resources without a knowledge base.
pub fn resources() -> LinguisticResources {
    LinguisticResources::spanish().expect("built-in Spanish resources")
}
