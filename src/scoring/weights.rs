//! Sublinear term weighting
//!
//! Maps each content token to `1 + ln(1 + count)` over the whole input.
//! A token appearing 50 times should not dominate 50x more than one
//! appearing once; the logarithm gives repeated topic words diminishing
//! marginal weight.

use crate::nlp::Tokenizer;
use rustc_hash::FxHashMap;

/// Per-token importance weights for one analysis call.
///
/// Weights are valid only for the text they were built from; nothing is
/// shared or persisted across calls.
#[derive(Debug, Clone, Default)]
pub struct TermWeights {
    weights: FxHashMap<String, f64>,
}

impl TermWeights {
    /// Build weights over the full input text.
    pub fn build(text: &str, tokenizer: &Tokenizer) -> Self {
        Self::from_tokens(&tokenizer.tokenize(text))
    }

    /// Build weights from an already-tokenized content stream.
    pub fn from_tokens(tokens: &[String]) -> Self {
        let mut counts: FxHashMap<&str, usize> = FxHashMap::default();
        for token in tokens {
            *counts.entry(token.as_str()).or_insert(0) += 1;
        }

        let weights = counts
            .into_iter()
            .map(|(token, count)| (token.to_string(), sublinear(count)))
            .collect();

        Self { weights }
    }

    /// Weight for a token; unknown tokens weigh zero.
    pub fn get(&self, token: &str) -> f64 {
        self.weights.get(token).copied().unwrap_or(0.0)
    }

    /// Number of distinct weighted tokens
    pub fn len(&self) -> usize {
        self.weights.len()
    }

    /// Check if no tokens were weighted
    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }
}

/// The sublinear frequency curve: `1 + ln(1 + count)`.
pub(crate) fn sublinear(count: usize) -> f64 {
    1.0 + (1.0 + count as f64).ln()
}
