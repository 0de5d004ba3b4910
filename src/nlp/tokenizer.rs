//! Tokenization
//!
//! Turns normalized text into the two token streams the engine works with:
//! content tokens (stopwords removed; used for weighting, scoring, and
//! keyword candidates) and stopword-inclusive tokens (used only for building
//! similarity bags, where function words still count toward overlap).

use crate::nlp::normalizer::clean_text;
use crate::nlp::stopwords::StopwordFilter;

/// Minimum character count for a token to be content-bearing.
const MIN_TOKEN_CHARS: usize = 4;

/// Tokenizer combining normalization with the content-token filters.
#[derive(Debug, Clone, Default)]
pub struct Tokenizer {
    stopwords: StopwordFilter,
}

impl Tokenizer {
    /// Create a tokenizer with the built-in core stopword list
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a tokenizer with a custom stopword filter
    pub fn with_stopwords(stopwords: StopwordFilter) -> Self {
        Self { stopwords }
    }

    /// The stopword filter backing this tokenizer
    pub fn stopwords(&self) -> &StopwordFilter {
        &self.stopwords
    }

    /// Tokenize into content tokens: normalized words with noise and
    /// stopwords removed.
    pub fn tokenize(&self, text: &str) -> Vec<String> {
        self.tokenize_inner(text, false)
    }

    /// Tokenize with stopwords retained. Used exclusively for building
    /// similarity bags, never for weighting or keyword extraction.
    pub fn tokenize_with_stopwords(&self, text: &str) -> Vec<String> {
        self.tokenize_inner(text, true)
    }

    fn tokenize_inner(&self, text: &str, keep_stopwords: bool) -> Vec<String> {
        clean_text(text)
            .split(' ')
            .filter(|token| !token.is_empty())
            .filter(|token| !is_pure_digits(token))
            .filter(|token| !is_repeated_char(token))
            .filter(|token| token.chars().count() >= MIN_TOKEN_CHARS)
            .filter(|token| keep_stopwords || !self.stopwords.is_stopword(token))
            .map(str::to_string)
            .collect()
    }
}

/// A token made entirely of digits carries no lexical content.
fn is_pure_digits(token: &str) -> bool {
    token.chars().all(|c| c.is_numeric())
}

/// A single character repeated four or more times ("aaaa", "-----" survivors
/// after cleaning) is discarded regardless of length.
fn is_repeated_char(token: &str) -> bool {
    let mut chars = token.chars();
    match chars.next() {
        Some(first) => token.chars().count() >= 4 && chars.all(|c| c == first),
        None => false,
    }
}
