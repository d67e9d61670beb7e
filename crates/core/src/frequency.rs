//! Term-frequency sentence scoring.
//!
//! Builds a normalized term-weight table from a document's tokens and scores
//! each sentence by the mean table weight of its tokens, so longer sentences
//! are not favored purely by length.

use std::collections::HashMap;

use crate::tokenize::{StopwordSet, tokenize};

/// Mapping from token to normalized weight in [0, 1].
///
/// Weights are raw counts divided by the maximum raw count among all
/// non-stopword tokens. Tokens absent from the table score 0 by definition.
pub type FrequencyTable = HashMap<String, f64>;

/// Build a normalized term-weight table from a token sequence.
///
/// Stopwords are excluded from the counts. When no qualifying token exists
/// the table is empty, which makes every lookup default to 0.
pub fn build_frequencies(tokens: &[String], stopwords: &StopwordSet) -> FrequencyTable {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for token in tokens {
        if !stopwords.is_stopword(token) {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }
    }

    let max = counts.values().copied().max().unwrap_or(0);
    if max == 0 {
        return FrequencyTable::new();
    }

    counts
        .into_iter()
        .map(|(token, count)| (token.to_string(), count as f64 / max as f64))
        .collect()
}

/// Score a sentence as the mean table weight over all of its tokens.
///
/// The sentence is tokenized in full; stopwords simply contribute 0 via
/// lookup miss. A sentence with no tokens scores 0.
pub fn frequency_score(sentence: &str, table: &FrequencyTable) -> f64 {
    let tokens = tokenize(sentence);
    if tokens.is_empty() {
        return 0.0;
    }

    let sum: f64 = tokens.iter().map(|t| table.get(t).copied().unwrap_or(0.0)).sum();
    sum / tokens.len() as f64
}
