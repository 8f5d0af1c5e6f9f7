// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Word tokenization with Spanish conventions.
//!
//! Treebank-style: whitespace separates words, punctuation at the edges of a
//! word becomes its own one-character token, and punctuation inside a word
//! splits it unless it is a joiner. Joiners are hyphens and apostrophes
//! between word characters ("e-mail", "l'aigua") and decimal separators
//! between digits ("3,5", "1.000"). A run of periods is one token ("...").
//!
//! The treebank rules know nothing of Spanish inverted marks, so `¿` and `¡`
//! stay glued to the word they open. "¿qué" is therefore not the stopword
//! "qué", though the TF-IDF token pattern still sees "qué" inside it.
//!
//! ```text
//! "¿Dónde está la espada?"  →  ["¿dónde", "está", "la", "espada", "?"]
//! ```
//!
//! Punctuation tokens survive into the processed query; the TF-IDF token
//! pattern ignores them, so they never reach the vocabulary.

use crate::utils::{is_word_char, normalize};

/// Tokenize `text` and lowercase every token.
pub fn tokenize(text: &str) -> Vec<String> {
    let normalized = normalize(text);
    let mut tokens = Vec::new();
    for chunk in normalized.split_whitespace() {
        split_chunk(chunk, &mut tokens);
    }
    tokens
}

fn split_chunk(chunk: &str, tokens: &mut Vec<String>) {
    let chars: Vec<char> = chunk.chars().collect();
    let mut word = String::new();

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        if is_word_char(c) || is_inverted_mark(c) || is_joiner(&chars, i) {
            word.push(c);
            i += 1;
            continue;
        }
        if !word.is_empty() {
            tokens.push(std::mem::take(&mut word));
        }
        let run = if c == '.' {
            chars[i..].iter().take_while(|&&next| next == '.').count()
        } else {
            1
        };
        tokens.push(chars[i..i + run].iter().collect());
        i += run;
    }

    if !word.is_empty() {
        tokens.push(word);
    }
}

fn is_inverted_mark(c: char) -> bool {
    matches!(c, '¿' | '¡')
}

/// Does the punctuation at `i` glue its neighbours into one word?
fn is_joiner(chars: &[char], i: usize) -> bool {
    let (Some(&prev), Some(&next)) = (
        i.checked_sub(1).and_then(|p| chars.get(p)),
        chars.get(i + 1),
    ) else {
        return false;
    };
    match chars[i] {
        '-' | '\'' | '\u{2019}' => is_word_char(prev) && is_word_char(next),
        '.' | ',' => prev.is_numeric() && next.is_numeric(),
        _ => false,
    }
}
