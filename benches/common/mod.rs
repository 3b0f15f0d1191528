//! Common utilities for fuzzmatch benchmarks
//!
//! Shared sample texts and query generators.

#![allow(dead_code)]

/// The chat message the demo binary matches against.
pub const SAMPLE_SHORT_TEXT: &str =
    "Hi first time in your how room miss muffet, are you new? old are you?";

pub const SAMPLE_MEDIUM_TEXT: &str = "Rust is a systems programming language that runs blazingly fast, \
prevents segfaults, and guarantees thread safety. It features zero-cost abstractions, move semantics, \
guaranteed memory safety, threads without data races, trait-based generics, pattern matching, type \
inference, minimal runtime, and efficient C bindings.";

/// Identifier-like text: camelCase, snake_case and paths, where word
/// beginnings matter most.
pub const SAMPLE_IDENTIFIERS: &str = "src/matcher/engine.rs getHTTP2Value parse_config_file \
BatchMatcher::run_par PreparedCache::target next_beginning_table ScoreSeries::from_sentinel";

/// Trigger words with a mix of hits, transpositions and misses.
pub const TRIGGER_WORDS: [&str; 12] = [
    "how", "firts", "muffet", "giraffe", "lights", "rust", "saftey", "pattern", "zebra",
    "gHV", "pcf", "bmrp",
];

/// `count` queries cycling through [`TRIGGER_WORDS`].
pub fn generate_queries(count: usize) -> Vec<String> {
    TRIGGER_WORDS
        .iter()
        .cycle()
        .take(count)
        .map(|w| w.to_string())
        .collect()
}

/// `count` distinct queries, so every lookup misses a warm cache.
pub fn generate_unique_queries(count: usize) -> Vec<String> {
    (0..count)
        .map(|i| format!("{}{}", TRIGGER_WORDS[i % TRIGGER_WORDS.len()], i))
        .collect()
}
