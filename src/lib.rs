//! # rapid_gist
//!
//! Fast extractive text summarization and keyword extraction using purely
//! lexical statistics. No trained models, no external services in the local
//! path.
//!
//! ## Features
//!
//! - **Extractive summaries**: MMR selection balances sentence relevance
//!   against redundancy, with two near-duplicate passes
//! - **Keywords and phrases**: frequency-weighted unigrams and bigrams with
//!   phrase subsumption
//! - **Deterministic**: identical input always produces identical output
//! - **Unicode-aware**: letter/digit filtering works across scripts
//! - **Remote delegation** (feature `remote`): the same analysis contract
//!   served over HTTP as an alternative to local computation
//!
//! ## Quick start
//!
//! ```
//! let text = "Solar panels convert sunlight into electricity. Wind turbines \
//!     harvest coastal gusts. Hydroelectric dams store seasonal rainfall.";
//!
//! let summary = rapid_gist::summarize(text, 2);
//! assert!(summary.len() <= 2);
//!
//! let keywords = rapid_gist::extract_keywords(text, 5);
//! assert!(keywords.len() <= 5);
//! ```

pub mod analyzer;
pub mod errors;
pub mod keywords;
pub mod nlp;
pub mod scoring;
pub mod similarity;
pub mod summarizer;
pub mod types;

// Re-export commonly used types
pub use errors::{GistError, Result};
pub use types::{Analysis, KeywordConfig, Sentence, SummaryConfig};

// Re-export main functionality
pub use analyzer::{clamp_limits, Analyzer, LocalAnalyzer};
pub use keywords::KeywordExtractor;
pub use nlp::{clean_text, split_sentences, StopwordFilter, Tokenizer};
pub use scoring::{SentenceScorer, TermWeights};
pub use similarity::{jaccard, SentenceDeduper, TokenBag};
pub use summarizer::Summarizer;

#[cfg(feature = "remote")]
pub use analyzer::{RemoteAnalyzer, RemoteConfig};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Summarize `text` into at most `k` sentences using default components.
///
/// Sentences are returned in original input order. See
/// [`Summarizer::summarize`] for the full contract.
pub fn summarize(text: &str, k: usize) -> Vec<String> {
    Summarizer::new().summarize(text, k)
}

/// Extract up to `top_n` ranked keywords from `text` using default
/// components.
///
/// See [`KeywordExtractor::extract`] for the full contract.
pub fn extract_keywords(text: &str, top_n: usize) -> Vec<String> {
    KeywordExtractor::new().extract(text, top_n)
}
