//! Sentence relevance scoring
//!
//! A sentence's score is the sum of its distinct content-token weights,
//! shaped by length heuristics: very short sentences are penalized, long
//! ones are normalized so they cannot win purely by accumulating terms, and
//! sentences with internal clause punctuation get a small bonus.

use crate::nlp::Tokenizer;
use crate::scoring::TermWeights;
use rustc_hash::FxHashSet;

/// Penalty factor for sentences with fewer than [`SHORT_TOKENS`] tokens.
const SHORT_PENALTY: f64 = 0.55;
/// Penalty factor for sentences with fewer than [`MID_TOKENS`] tokens.
const MID_PENALTY: f64 = 0.85;
/// Token count below which the short penalty applies.
const SHORT_TOKENS: usize = 6;
/// Token count below which the milder penalty applies.
const MID_TOKENS: usize = 10;
/// Floor for the length normalization divisor.
const LENGTH_NORM_FLOOR: usize = 7;
/// Bonus for sentences containing a comma or semicolon, a cheap proxy for
/// syntactically richer sentences.
const CLAUSE_BONUS: f64 = 1.03;

/// Scores sentences against term weights built over the full input.
#[derive(Debug)]
pub struct SentenceScorer<'a> {
    weights: &'a TermWeights,
    tokenizer: &'a Tokenizer,
}

impl<'a> SentenceScorer<'a> {
    /// Create a scorer borrowing the call-scoped term weights
    pub fn new(weights: &'a TermWeights, tokenizer: &'a Tokenizer) -> Self {
        Self { weights, tokenizer }
    }

    /// Score one sentence. Sentences with no content tokens score 0.
    ///
    /// Each distinct token's weight counts once, so topical breadth beats
    /// repetition. Only the first matching length penalty applies.
    pub fn score(&self, sentence: &str) -> f64 {
        let tokens = self.tokenizer.tokenize(sentence);
        if tokens.is_empty() {
            return 0.0;
        }

        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut score = 0.0;
        for token in &tokens {
            if seen.insert(token.as_str()) {
                score += self.weights.get(token);
            }
        }

        let count = tokens.len();
        if count < SHORT_TOKENS {
            score *= SHORT_PENALTY;
        } else if count < MID_TOKENS {
            score *= MID_PENALTY;
        }

        score /= count.max(LENGTH_NORM_FLOOR) as f64;

        if sentence.contains(',') || sentence.contains(';') {
            score *= CLAUSE_BONUS;
        }

        score
    }
}
