//! Extractive summarization
//!
//! The summarizer pipeline: split into sentences, drop near-identical
//! duplicates, score every sentence against corpus-wide term weights, pick a
//! diverse top-k with MMR, restore input order, and run a looser duplicate
//! pass over the selection.

pub mod selector;

pub use selector::{MmrCandidate, MmrSelector};

use crate::nlp::{normalizer, Tokenizer};
use crate::scoring::{SentenceScorer, TermWeights};
use crate::similarity::{SentenceDeduper, TokenBag};
use crate::types::{Sentence, SummaryConfig};

/// Extractive MMR summarizer.
///
/// All state is constructed fresh per [`summarize`](Summarizer::summarize)
/// call from the input text; the struct itself only holds configuration and
/// the tokenizer, so one instance can serve many calls.
#[derive(Debug, Clone, Default)]
pub struct Summarizer {
    config: SummaryConfig,
    tokenizer: Tokenizer,
}

impl Summarizer {
    /// Create a summarizer with default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a summarizer with custom configuration
    pub fn with_config(config: SummaryConfig) -> Self {
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

    /// Summarize `text` into at most `k` sentences, returned in original
    /// input order.
    ///
    /// `k == 0` is clamped to 1. Empty or whitespace-only input yields an
    /// empty summary. The result can be shorter than `k` when the input has
    /// fewer distinct sentences; it is never padded.
    pub fn summarize(&self, text: &str, k: usize) -> Vec<String> {
        let k = k.max(1);

        let raw = normalizer::split_sentences(text);
        let deduper = SentenceDeduper::new(&self.tokenizer, self.config.split_dedupe_threshold);
        let sentences = deduper.dedupe(&raw);
        log::debug!(
            "split {} sentences, {} after dedupe",
            raw.len(),
            sentences.len()
        );

        // Nothing to rank when the whole input fits the budget
        if sentences.len() <= k {
            return sentences.into_iter().map(|s| s.text).collect();
        }

        let weights = TermWeights::build(text, &self.tokenizer);
        let scorer = SentenceScorer::new(&weights, &self.tokenizer);

        let candidates: Vec<MmrCandidate> = sentences
            .iter()
            .map(|s| MmrCandidate {
                relevance: scorer.score(&s.text),
                bag: TokenBag::new(self.tokenizer.tokenize_with_stopwords(&s.text)),
            })
            .collect();

        let picked = MmrSelector::new(self.config.lambda, k).select(&candidates);

        let mut selected: Vec<Sentence> = picked
            .into_iter()
            .map(|i| {
                let mut s = sentences[i].clone();
                s.score = candidates[i].relevance;
                s
            })
            .collect();
        selected.sort_by_key(|s| s.index);

        // Selection checks similarity only against already-chosen items, so
        // a looser second pass can still find near-duplicates
        let final_deduper =
            SentenceDeduper::new(&self.tokenizer, self.config.summary_dedupe_threshold);
        let mut summary = final_deduper.dedupe(&selected);
        summary.truncate(k);
        log::debug!("selected {} of {} candidate sentences", summary.len(), sentences.len());

        summary.into_iter().map(|s| s.text).collect()
    }
}
