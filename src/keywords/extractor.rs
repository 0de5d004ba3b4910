//! Frequency-based keyword extraction
//!
//! Unigram candidates score on the same sublinear frequency curve as the
//! term weighter; bigram candidates accumulate a fixed sub-unit weight per
//! occurrence. The flat bigram increment keeps one-off word pairs below any
//! real unigram, while a phrase repeated a handful of times overtakes its
//! constituents, whose own weights grow only logarithmically.

use crate::nlp::Tokenizer;
use crate::scoring::TermWeights;
use crate::types::KeywordConfig;
use rustc_hash::{FxHashMap, FxHashSet};

/// Extracts ranked keywords and two-word phrases from text.
#[derive(Debug, Clone, Default)]
pub struct KeywordExtractor {
    config: KeywordConfig,
    tokenizer: Tokenizer,
}

impl KeywordExtractor {
    /// Create an extractor with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an extractor with custom configuration
    pub fn with_config(config: KeywordConfig) -> Self {
        Self {
            config,
            tokenizer: Tokenizer::new(),
        }
    }

    /// Replace the tokenizer (e.g. for a different stopword language)
    pub fn with_tokenizer(mut self, tokenizer: Tokenizer) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    /// Extract up to `top_n` keywords, descending importance. Each entry is
    /// a single word or a two-word phrase.
    ///
    /// `top_n == 0` is clamped to 1. Input with no content tokens yields an
    /// empty list.
    pub fn extract(&self, text: &str, top_n: usize) -> Vec<String> {
        let top_n = top_n.max(1);

        let tokens = self.tokenizer.tokenize(text);
        if tokens.is_empty() {
            return Vec::new();
        }

        let weights = TermWeights::from_tokens(&tokens);

        // Candidates in encounter order: unigrams by first occurrence, then
        // bigrams by first occurrence. The stable sort below keeps this
        // order among equal scores.
        let mut candidates: Vec<(String, f64)> = Vec::new();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        for token in &tokens {
            if seen.insert(token.as_str()) {
                candidates.push((token.clone(), weights.get(token)));
            }
        }

        // Adjacency is measured on the filtered stream, so words separated
        // only by removed stopwords pair up
        let mut bigram_index: FxHashMap<String, usize> = FxHashMap::default();
        for pair in tokens.windows(2) {
            let bigram = format!("{} {}", pair[0], pair[1]);
            match bigram_index.get(&bigram) {
                Some(&i) => candidates[i].1 += self.config.bigram_weight,
                None => {
                    candidates.push((bigram.clone(), self.config.bigram_weight));
                    bigram_index.insert(bigram, candidates.len() - 1);
                }
            }
        }

        candidates.sort_by(|a, b| b.1.total_cmp(&a.1));

        let mut accepted: Vec<String> = Vec::with_capacity(top_n);
        for (candidate, _) in candidates {
            if accepted.len() >= top_n {
                break;
            }
            if candidate.contains(' ') {
                accepted.push(candidate);
            } else if !is_subsumed(&candidate, &accepted) {
                accepted.push(candidate);
            }
        }

        // Bigram joins are never stopword-checked as a whole; drop any
        // survivor the filter would classify as noise
        accepted.retain(|c| !self.tokenizer.stopwords().is_stopword(c));

        accepted
    }
}

/// A unigram is subsumed when it appears as a constituent word of an
/// already-accepted phrase.
fn is_subsumed(unigram: &str, accepted: &[String]) -> bool {
    accepted
        .iter()
        .any(|phrase| phrase.split(' ').any(|word| word == unigram))
}
