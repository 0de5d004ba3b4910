//! Set-overlap similarity
//!
//! Sentences are compared as order-independent bags of tokens using Jaccard
//! similarity. The same measure drives both near-duplicate removal and the
//! diversity term of MMR selection.

pub mod dedupe;

pub use dedupe::SentenceDeduper;

use rustc_hash::FxHashSet;

/// An order-independent set of tokens representing one sentence.
///
/// Bags are built from stopword-inclusive tokens so that function words
/// still count toward overlap. They are used only for similarity, never for
/// scoring.
#[derive(Debug, Clone, Default)]
pub struct TokenBag {
    tokens: FxHashSet<String>,
}

impl TokenBag {
    /// Build a bag from a token sequence; duplicates collapse.
    pub fn new(tokens: impl IntoIterator<Item = String>) -> Self {
        Self {
            tokens: tokens.into_iter().collect(),
        }
    }

    /// Number of distinct tokens in the bag
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// Check if the bag has no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Check membership of a single token
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.contains(token)
    }

    fn intersection_size(&self, other: &TokenBag) -> usize {
        // Iterate the smaller set
        let (small, large) = if self.len() <= other.len() {
            (self, other)
        } else {
            (other, self)
        };
        small
            .tokens
            .iter()
            .filter(|t| large.tokens.contains(t.as_str()))
            .count()
    }
}

/// Jaccard similarity: intersection size over union size, in [0, 1].
///
/// Returns 0.0 when either bag is empty. Mathematically the ratio is
/// undefined there, but "nothing to compare" is treated as "no similarity"
/// so empty sentences never collapse into each other.
pub fn jaccard(a: &TokenBag, b: &TokenBag) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let intersection = a.intersection_size(b);
    let union = a.len() + b.len() - intersection;
    intersection as f64 / union as f64
}
