//! Near-duplicate sentence removal
//!
//! Greedy, order-sensitive deduplication: sentences are visited in input
//! order and a candidate is discarded when its Jaccard similarity to any
//! already-accepted sentence reaches the threshold. Earlier sentences always
//! win over later near-duplicates.

use crate::nlp::Tokenizer;
use crate::similarity::{jaccard, TokenBag};
use crate::types::Sentence;

/// Removes near-duplicate sentences from a sequence.
///
/// Token bags are computed once per sentence and held only for the duration
/// of a single [`dedupe`](SentenceDeduper::dedupe) call; nothing is cached
/// across calls, so concurrent analyses on different texts cannot share
/// state.
#[derive(Debug)]
pub struct SentenceDeduper<'a> {
    tokenizer: &'a Tokenizer,
    threshold: f64,
}

impl<'a> SentenceDeduper<'a> {
    /// Create a deduper with the given similarity threshold, clamped to
    /// [0, 1]
    pub fn new(tokenizer: &'a Tokenizer, threshold: f64) -> Self {
        Self {
            tokenizer,
            threshold: threshold.clamp(0.0, 1.0),
        }
    }

    /// The active similarity threshold
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Filter the input down to sentences that are not near-duplicates of an
    /// earlier accepted sentence. Input order and sentence indices are
    /// preserved.
    pub fn dedupe(&self, sentences: &[Sentence]) -> Vec<Sentence> {
        let mut accepted: Vec<Sentence> = Vec::with_capacity(sentences.len());
        let mut accepted_bags: Vec<TokenBag> = Vec::with_capacity(sentences.len());

        for sentence in sentences {
            let bag = TokenBag::new(self.tokenizer.tokenize_with_stopwords(&sentence.text));

            let duplicate = accepted_bags
                .iter()
                .any(|kept| jaccard(kept, &bag) >= self.threshold);

            if !duplicate {
                accepted.push(sentence.clone());
                accepted_bags.push(bag);
            }
        }

        accepted
    }
}
