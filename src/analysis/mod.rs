//! Text analysis module for Kasugai.
//!
//! Turns free text into substring-searchable tokens: character bigrams and
//! unigrams for "contains" matching, word prefixes for "starts with", and
//! reversed word suffixes for "ends with". The functions here do no case
//! folding; casing policy belongs to the accumulators that call them.

pub mod ngram;

// Re-export commonly used functions
pub use ngram::*;
