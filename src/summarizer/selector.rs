//! MMR-based sentence selection
//!
//! Implements Maximal Marginal Relevance (MMR): greedy selection balancing a
//! candidate's relevance score against its maximum Jaccard similarity to the
//! sentences already chosen.

use crate::similarity::{jaccard, TokenBag};

/// A selection candidate: a relevance score plus the stopword-inclusive
/// token bag used for the diversity term.
#[derive(Debug, Clone)]
pub struct MmrCandidate {
    /// Relevance score from the sentence scorer
    pub relevance: f64,
    /// Similarity representation of the sentence
    pub bag: TokenBag,
}

/// Greedy MMR selector.
#[derive(Debug, Clone)]
pub struct MmrSelector {
    lambda: f64,
    limit: usize,
}

impl MmrSelector {
    /// Create a selector picking up to `limit` candidates with the given
    /// relevance/diversity tradeoff (clamped to [0, 1])
    pub fn new(lambda: f64, limit: usize) -> Self {
        Self {
            lambda: lambda.clamp(0.0, 1.0),
            limit,
        }
    }

    /// Select candidate indices using MMR.
    ///
    /// Selection is seeded with the highest-relevance candidate, then each
    /// round picks the unselected candidate maximizing
    /// `lambda * relevance - (1 - lambda) * max similarity to selected`.
    /// Ties resolve to the earliest index, so the result is deterministic.
    /// Returned indices are in selection order, not input order.
    pub fn select(&self, candidates: &[MmrCandidate]) -> Vec<usize> {
        if candidates.is_empty() || self.limit == 0 {
            return Vec::new();
        }

        let mut selected: Vec<usize> = Vec::with_capacity(self.limit.min(candidates.len()));

        // Seed with the best-scoring sentence
        let mut best_idx = 0;
        let mut best_score = f64::NEG_INFINITY;
        for (i, candidate) in candidates.iter().enumerate() {
            if candidate.relevance > best_score {
                best_score = candidate.relevance;
                best_idx = i;
            }
        }
        selected.push(best_idx);

        while selected.len() < self.limit && selected.len() < candidates.len() {
            let mut best_idx = None;
            let mut best_mmr = f64::NEG_INFINITY;

            for (i, candidate) in candidates.iter().enumerate() {
                if selected.contains(&i) {
                    continue;
                }

                // Diversity component: max similarity to already selected
                let max_sim = selected
                    .iter()
                    .map(|&s| jaccard(&candidates[s].bag, &candidate.bag))
                    .fold(f64::NEG_INFINITY, f64::max);

                let mmr = self.lambda * candidate.relevance - (1.0 - self.lambda) * max_sim;

                if mmr > best_mmr {
                    best_mmr = mmr;
                    best_idx = Some(i);
                }
            }

            match best_idx {
                Some(idx) => selected.push(idx),
                None => break,
            }
        }

        selected
    }
}
