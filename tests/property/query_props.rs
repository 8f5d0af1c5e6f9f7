//! Query pipeline properties.

use super::common::resources_with_synonyms;
use lexvec::{tokenize, PipelineConfig, QueryProcessor};
use proptest::prelude::*;

fn lower_word_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zñáéíóú]{1,10}").unwrap()
}

fn free_text_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-zñÑáéÁÉ¿?¡!,.' -]{0,40}").unwrap()
}

fn pipeline_strategy() -> impl Strategy<Value = PipelineConfig> {
    (any::<bool>(), any::<bool>(), any::<bool>())
        .prop_map(|(expand, stop, stem)| PipelineConfig::new(expand, stop, stem))
}

proptest! {
    #[test]
    fn prop_single_lowercase_word_is_idempotent(word in lower_word_strategy()) {
        let resources = resources_with_synonyms();
        let processed = QueryProcessor::new(&resources)
            .process(&word, &PipelineConfig::default())
            .unwrap();
        prop_assert_eq!(processed.text(), word);
    }

    #[test]
    fn prop_expansion_is_monotonic(text in free_text_strategy(), stop: bool, stem: bool) {
        let resources = resources_with_synonyms();
        let processor = QueryProcessor::new(&resources);
        let base = processor.process(&text, &PipelineConfig::new(false, stop, stem)).unwrap();
        let expanded = processor.process(&text, &PipelineConfig::new(true, stop, stem)).unwrap();
        prop_assert!(expanded.len() >= base.len());
    }

    #[test]
    fn prop_tokens_are_lowercase_and_nonempty(text in free_text_strategy()) {
        for token in tokenize(&text) {
            prop_assert!(!token.is_empty());
            prop_assert!(!token.chars().any(char::is_whitespace));
            prop_assert_eq!(token.to_lowercase(), token.clone());
        }
    }

    #[test]
    fn prop_processing_never_fails_with_resources(
        text in free_text_strategy(),
        pipeline in pipeline_strategy(),
    ) {
        let resources = resources_with_synonyms();
        let processed = QueryProcessor::new(&resources).process(&text, &pipeline);
        prop_assert!(processed.is_ok());
    }
}
