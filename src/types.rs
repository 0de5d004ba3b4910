//! Core types for rapid_gist
//!
//! This module defines the data structures shared across the pipeline:
//! sentences, analysis results, and the configuration types for the
//! summarizer and keyword extractor.

use serde::{Deserialize, Serialize};

// ============================================================================
// Sentence
// ============================================================================

/// A sentence from the input text.
///
/// The index is the sentence's position in the original input and is kept
/// through deduplication, scoring, and selection so the final summary can be
/// restored to input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sentence {
    /// The sentence text (trimmed, original casing)
    pub text: String,
    /// Sentence index within the document
    pub index: usize,
    /// Relevance score assigned during summarization
    pub score: f64,
}

impl Sentence {
    /// Create a new unscored sentence
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
            score: 0.0,
        }
    }
}

// ============================================================================
// Analysis result
// ============================================================================

/// The combined output of one analysis call.
///
/// This type doubles as the wire shape of the remote analysis response, so
/// it derives both `Serialize` and `Deserialize`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    /// Representative sentences, in original input order
    pub summary: Vec<String>,
    /// Salient words and two-word phrases, descending importance
    pub keywords: Vec<String>,
}

// ============================================================================
// Summarizer configuration
// ============================================================================

/// Configuration for the MMR summarizer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SummaryConfig {
    /// Lambda parameter for MMR (0 = diversity only, 1 = relevance only)
    pub lambda: f64,
    /// Similarity threshold for the near-identical dedupe pass after
    /// sentence splitting
    pub split_dedupe_threshold: f64,
    /// Similarity threshold for the looser dedupe pass over the selected
    /// summary
    pub summary_dedupe_threshold: f64,
}

impl Default for SummaryConfig {
    fn default() -> Self {
        Self {
            lambda: 0.72,
            split_dedupe_threshold: 0.92,
            summary_dedupe_threshold: 0.78,
        }
    }
}

impl SummaryConfig {
    /// Set lambda (relevance vs diversity tradeoff), clamped to [0, 1]
    pub fn with_lambda(mut self, lambda: f64) -> Self {
        self.lambda = lambda.clamp(0.0, 1.0);
        self
    }

    /// Set the post-split dedupe threshold, clamped to [0, 1]
    pub fn with_split_dedupe_threshold(mut self, threshold: f64) -> Self {
        self.split_dedupe_threshold = threshold.clamp(0.0, 1.0);
        self
    }

    /// Set the post-selection dedupe threshold, clamped to [0, 1]
    pub fn with_summary_dedupe_threshold(mut self, threshold: f64) -> Self {
        self.summary_dedupe_threshold = threshold.clamp(0.0, 1.0);
        self
    }
}

// ============================================================================
// Keyword extractor configuration
// ============================================================================

/// Configuration for the keyword extractor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordConfig {
    /// Weight added per bigram occurrence. Kept below 1.0 so two-word
    /// phrases only surface when genuinely repeated.
    pub bigram_weight: f64,
}

impl Default for KeywordConfig {
    fn default() -> Self {
        Self { bigram_weight: 0.8 }
    }
}

impl KeywordConfig {
    /// Set the per-occurrence bigram weight
    pub fn with_bigram_weight(mut self, weight: f64) -> Self {
        self.bigram_weight = weight.max(0.0);
        self
    }
}
