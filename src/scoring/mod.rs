//! Term weighting and sentence scoring
//!
//! Relevance is derived purely from corpus-local frequency statistics:
//! sublinear term weights over the whole input, combined per sentence with
//! length penalties and a clause bonus.

pub mod sentence;
pub mod weights;

pub use sentence::SentenceScorer;
pub use weights::TermWeights;
