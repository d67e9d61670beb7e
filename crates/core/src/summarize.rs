//! Summarization API.
//!
//! This module provides the primary API for extracting a shortened
//! representative version of a document by selecting its top-ranked
//! sentences. The main entry point is the [`Summarizer`] struct, along with
//! the convenience function [`summarize`].
//!
//! # Example
//!
//! ```rust
//! use summatim_core::{Strategy, Summarizer, SummarizerConfig};
//!
//! let config = SummarizerConfig::builder()
//!     .ratio(0.5)
//!     .strategy(Strategy::Frequency)
//!     .build();
//! let summarizer = Summarizer::with_config(config);
//!
//! let text = "Rust is fast. Rust is safe. Safety sells.";
//! let summary = summarizer.summarize(text).unwrap();
//! assert_eq!(summary.selected.len(), 2);
//! ```

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, SummatimError};
use crate::frequency::{build_frequencies, frequency_score};
use crate::graph::{SentenceRank, SimilarityGraph};
use crate::segment::segment;
use crate::tokenize::{StopwordSet, tokenize};

/// Sentence-importance scoring strategy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Mean normalized term-frequency weight per sentence.
    Frequency,
    /// Damped iterative ranking over the sentence similarity graph.
    Graph,
}

impl FromStr for Strategy {
    type Err = SummatimError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "frequency" | "freq" => Ok(Self::Frequency),
            "graph" | "textrank" => Ok(Self::Graph),
            _ => Err(SummatimError::UnknownStrategy(s.to_string())),
        }
    }
}

impl fmt::Display for Strategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Frequency => write!(f, "frequency"),
            Self::Graph => write!(f, "graph"),
        }
    }
}

/// Configuration for the Summarizer.
///
/// # Example
///
/// ```rust
/// use summatim_core::{Strategy, SummarizerConfig};
///
/// let config = SummarizerConfig::builder()
///     .ratio(0.25)
///     .strategy(Strategy::Graph)
///     .build();
/// ```
#[derive(Debug, Clone)]
pub struct SummarizerConfig {
    /// Fraction of sentences to keep, in (0, 1] (default: 0.3).
    pub ratio: f64,

    /// Scoring strategy (default: [`Strategy::Graph`]).
    pub strategy: Strategy,

    /// Iterative-ranking parameters used by the graph strategy.
    pub rank: SentenceRank,
}

impl Default for SummarizerConfig {
    fn default() -> Self {
        Self { ratio: 0.3, strategy: Strategy::Graph, rank: SentenceRank::default() }
    }
}

impl SummarizerConfig {
    /// Creates a new builder for SummarizerConfig.
    pub fn builder() -> SummarizerConfigBuilder {
        SummarizerConfigBuilder::new()
    }
}

/// Builder for SummarizerConfig.
pub struct SummarizerConfigBuilder {
    config: SummarizerConfig,
}

impl SummarizerConfigBuilder {
    /// Creates a new builder with default values.
    pub fn new() -> Self {
        Self { config: SummarizerConfig::default() }
    }

    /// Sets the summary ratio. Validated when the summarizer runs.
    pub fn ratio(mut self, value: f64) -> Self {
        self.config.ratio = value;
        self
    }

    /// Sets the scoring strategy.
    pub fn strategy(mut self, value: Strategy) -> Self {
        self.config.strategy = value;
        self
    }

    /// Sets the iterative-ranking parameters.
    pub fn rank(mut self, value: SentenceRank) -> Self {
        self.config.rank = value;
        self
    }

    /// Builds the config.
    pub fn build(self) -> SummarizerConfig {
        self.config
    }
}

impl Default for SummarizerConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// The result of summarizing a document.
#[derive(Debug, Clone, Serialize)]
pub struct Summary {
    /// Selected sentences joined with a single space, in original order.
    pub text: String,

    /// Original indices of the selected sentences, ascending.
    pub selected: Vec<usize>,

    /// Total number of sentences in the document.
    pub sentence_count: usize,

    /// Ratio the summary was computed with.
    pub ratio: f64,

    /// Strategy the summary was computed with.
    pub strategy: Strategy,
}

impl Summary {
    /// Gets the summary as structured JSON.
    pub fn to_json(&self) -> Result<serde_json::Value> {
        serde_json::to_value(self).map_err(|e| SummatimError::Serialization(e.to_string()))
    }
}

/// Main entry point for summarization.
///
/// Holds the configuration and the injected stopword set; every call to
/// [`Summarizer::summarize`] is a pure function of its input plus that
/// immutable state, so a single instance is safe to share across callers.
///
/// # Example
///
/// ```rust
/// use summatim_core::Summarizer;
///
/// let summarizer = Summarizer::new();
/// let summary = summarizer.summarize("One sentence only.").unwrap();
/// assert_eq!(summary.text, "One sentence only.");
/// ```
pub struct Summarizer {
    config: SummarizerConfig,
    stopwords: StopwordSet,
}

impl Summarizer {
    /// Creates a new Summarizer with default settings.
    pub fn new() -> Self {
        Self { config: SummarizerConfig::default(), stopwords: StopwordSet::default() }
    }

    /// Creates a new Summarizer with a custom configuration.
    pub fn with_config(config: SummarizerConfig) -> Self {
        Self { config, stopwords: StopwordSet::default() }
    }

    /// Replaces the stopword set.
    pub fn with_stopwords(mut self, stopwords: StopwordSet) -> Self {
        self.stopwords = stopwords;
        self
    }

    /// Summarize a document down to its top-ranked sentences.
    ///
    /// Segments the text, scores every sentence with the configured
    /// strategy, keeps the `max(1, round(n × ratio))` best (clamped to n,
    /// ties broken by ascending original index), and reassembles them in
    /// original order.
    ///
    /// # Errors
    ///
    /// Returns [`SummatimError::InvalidRatio`] when the configured ratio is
    /// outside (0, 1]. Empty input is not an error: the summary text is
    /// empty and nothing is selected.
    pub fn summarize(&self, text: &str) -> Result<Summary> {
        let ratio = self.config.ratio;
        if !(ratio > 0.0 && ratio <= 1.0) {
            return Err(SummatimError::InvalidRatio { ratio });
        }

        let sentences = segment(text);
        let n = sentences.len();
        if n == 0 {
            return Ok(Summary {
                text: String::new(),
                selected: Vec::new(),
                sentence_count: 0,
                ratio,
                strategy: self.config.strategy,
            });
        }

        let target = ((n as f64 * ratio).round() as usize).max(1).min(n);
        let scores = self.score_sentences(text, &sentences);

        let mut ranked: Vec<(usize, f64)> = scores.into_iter().enumerate().collect();
        ranked.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.0.cmp(&b.0))
        });

        let mut selected: Vec<usize> = ranked.iter().take(target).map(|(i, _)| *i).collect();
        selected.sort_unstable();

        let text = selected
            .iter()
            .map(|&i| sentences[i].as_str())
            .collect::<Vec<_>>()
            .join(" ");

        Ok(Summary { text, selected, sentence_count: n, ratio, strategy: self.config.strategy })
    }

    /// Score every sentence with the configured strategy
    fn score_sentences(&self, text: &str, sentences: &[String]) -> Vec<f64> {
        match self.config.strategy {
            Strategy::Frequency => {
                // One document-wide table shared by all sentence scores
                let table = build_frequencies(&tokenize(text), &self.stopwords);
                sentences.iter().map(|s| frequency_score(s, &table)).collect()
            }
            Strategy::Graph => {
                let graph = SimilarityGraph::build(sentences, &self.stopwords);
                self.config.rank.run(&graph).scores
            }
        }
    }
}

impl Default for Summarizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function for one-shot summarization.
///
/// # Errors
///
/// Returns [`SummatimError::InvalidRatio`] when the ratio is outside (0, 1].
///
/// # Example
///
/// ```rust
/// use summatim_core::{Strategy, summarize};
///
/// let summary = summarize("First. Second. Third.", 1.0, Strategy::Graph).unwrap();
/// assert_eq!(summary.sentence_count, 3);
/// ```
pub fn summarize(text: &str, ratio: f64, strategy: Strategy) -> Result<Summary> {
    let config = SummarizerConfig::builder().ratio(ratio).strategy(strategy).build();
    Summarizer::with_config(config).summarize(text)
}
