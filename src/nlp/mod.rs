//! Natural language processing components
//!
//! This module provides text normalization, sentence splitting,
//! tokenization, and stopword filtering.

pub mod normalizer;
pub mod stopwords;
pub mod tokenizer;

pub use normalizer::{clean_text, split_sentences};
pub use stopwords::StopwordFilter;
pub use tokenizer::Tokenizer;
