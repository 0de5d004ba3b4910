//! Keyword and key-phrase extraction
//!
//! Ranks single content words and adjacent two-word phrases by
//! frequency-weighted score, suppressing words already covered by an
//! accepted phrase.

pub mod extractor;

pub use extractor::KeywordExtractor;
