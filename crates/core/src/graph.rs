//! Sentence similarity graph and iterative ranking.
//!
//! Builds a dense symmetric graph over sentences where edge weights measure
//! token overlap discounted by sentence length, then ranks sentences with a
//! damped score-propagation loop in the PageRank family: each sentence
//! repeatedly redistributes its score to its neighbors proportionally to
//! edge weight until the vector stops moving or the iteration cap is hit.

use crate::tokenize::{StopwordSet, tokenize};
use std::collections::HashSet;

/// Dense symmetric sentence-to-sentence similarity matrix.
///
/// Cell (i, j) holds the similarity between sentences i and j for i ≠ j and
/// 0 on the diagonal. Built fresh per ranking call.
#[derive(Debug, Clone)]
pub struct SimilarityGraph {
    n: usize,
    weights: Vec<f64>,
}

impl SimilarityGraph {
    /// Build the similarity graph for a sequence of sentences.
    ///
    /// Each sentence is reduced to its set of non-stopword tokens
    /// (duplicates collapse). For each unordered pair,
    /// `similarity = |overlap| / (ln(len_i + 1) + ln(len_j + 1))`,
    /// computed once and mirrored; 0 when both sets are empty.
    pub fn build(sentences: &[String], stopwords: &StopwordSet) -> Self {
        let sets: Vec<HashSet<String>> = sentences
            .iter()
            .map(|s| {
                tokenize(s)
                    .into_iter()
                    .filter(|t| !stopwords.is_stopword(t))
                    .collect()
            })
            .collect();

        let n = sentences.len();
        let mut weights = vec![0.0; n * n];

        for i in 0..n {
            for j in (i + 1)..n {
                let overlap = sets[i].intersection(&sets[j]).count();
                let denominator = ((sets[i].len() + 1) as f64).ln() + ((sets[j].len() + 1) as f64).ln();
                let similarity = if denominator > 0.0 { overlap as f64 / denominator } else { 0.0 };
                weights[i * n + j] = similarity;
                weights[j * n + i] = similarity;
            }
        }

        Self { n, weights }
    }

    /// Number of sentences (nodes) in the graph.
    pub fn len(&self) -> usize {
        self.n
    }

    /// Check if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Similarity weight between sentences i and j.
    pub fn similarity(&self, i: usize, j: usize) -> f64 {
        self.weights[i * self.n + j]
    }

    /// Sum of a sentence's similarity row across all other sentences.
    pub fn row_sum(&self, i: usize) -> f64 {
        self.weights[i * self.n..(i + 1) * self.n].iter().sum()
    }
}

/// Damped iterative sentence ranker.
///
/// Propagates scores over a [`SimilarityGraph`] until the L1 delta between
/// consecutive score vectors drops below the threshold, or the iteration cap
/// is reached.
#[derive(Debug, Clone)]
pub struct SentenceRank {
    /// Damping factor (probability mass kept for propagation vs. restart).
    pub damping: f64,
    /// Maximum number of iterations.
    pub max_iterations: usize,
    /// Convergence threshold on the L1 score delta.
    pub threshold: f64,
}

impl Default for SentenceRank {
    fn default() -> Self {
        Self { damping: 0.85, max_iterations: 20, threshold: 1e-5 }
    }
}

impl SentenceRank {
    /// Create a new ranker with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the damping factor.
    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    /// Set the maximum iterations.
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Set the convergence threshold.
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// Run the ranking loop on a graph.
    ///
    /// Returns the last computed vector even when convergence wasn't
    /// achieved, with `converged = false`. A graph with fewer than two nodes
    /// has no edges to propagate over; its uniform initialization is
    /// returned as-is, so a single sentence scores 1.0.
    pub fn run(&self, graph: &SimilarityGraph) -> RankResult {
        let n = graph.len();
        if n == 0 {
            return RankResult { scores: Vec::new(), iterations: 0, delta: 0.0, converged: true };
        }

        let mut scores = vec![1.0 / n as f64; n];
        if n == 1 {
            return RankResult { scores, iterations: 0, delta: 0.0, converged: true };
        }

        // Out-weight sums are invariant across iterations
        let out_weights: Vec<f64> = (0..n).map(|j| graph.row_sum(j)).collect();
        let restart = (1.0 - self.damping) / n as f64;

        let mut iterations = 0;
        let mut delta = f64::MAX;

        while iterations < self.max_iterations && delta > self.threshold {
            iterations += 1;

            // Synchronous update: new scores read only the previous vector
            let mut new_scores = vec![0.0; n];
            for (i, new_score) in new_scores.iter_mut().enumerate() {
                let mut incoming = 0.0;
                for j in 0..n {
                    if j == i {
                        continue;
                    }
                    let weight = graph.similarity(j, i);
                    if weight > 0.0 && out_weights[j] > 0.0 {
                        incoming += weight / out_weights[j] * scores[j];
                    }
                }
                *new_score = restart + self.damping * incoming;
            }

            delta = scores
                .iter()
                .zip(new_scores.iter())
                .map(|(old, new)| (old - new).abs())
                .sum();

            scores = new_scores;
        }

        RankResult { scores, iterations, delta, converged: delta <= self.threshold }
    }
}

/// Result of a ranking run.
#[derive(Debug, Clone)]
pub struct RankResult {
    /// One score per sentence index; always finite.
    pub scores: Vec<f64>,
    /// Iterations actually executed.
    pub iterations: usize,
    /// Final L1 delta between the last two vectors.
    pub delta: f64,
    /// Whether the threshold was reached before the iteration cap.
    pub converged: bool,
}
