//! Analysis strategies
//!
//! One trait, two implementations: [`LocalAnalyzer`] runs the pure local
//! engine, [`RemoteAnalyzer`] (feature `remote`) delegates to an HTTP
//! service speaking the same request/response contract. Callers pick one;
//! the two are never composed.

pub mod local;

#[cfg(feature = "remote")]
pub mod remote;

pub use local::LocalAnalyzer;

#[cfg(feature = "remote")]
pub use remote::{RemoteAnalyzer, RemoteConfig};

use crate::errors::Result;
use crate::types::Analysis;

/// Upper bound for the summary sentence budget when clamping raw user input.
pub const MAX_SUMMARY_SENTENCES: usize = 12;
/// Upper bound for the keyword budget when clamping raw user input.
pub const MAX_KEYWORDS: usize = 20;

/// A strategy producing a combined summary and keyword analysis.
pub trait Analyzer {
    /// Analyze `text`, producing at most `k` summary sentences and `top_n`
    /// keywords. Both limits must be at least 1.
    fn analyze(&self, text: &str, k: usize, top_n: usize) -> Result<Analysis>;
}

/// Clamp raw user-supplied limits into the supported ranges
/// (1..=[`MAX_SUMMARY_SENTENCES`], 1..=[`MAX_KEYWORDS`]).
pub fn clamp_limits(k: usize, top_n: usize) -> (usize, usize) {
    (
        k.clamp(1, MAX_SUMMARY_SENTENCES),
        top_n.clamp(1, MAX_KEYWORDS),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limits() {
        assert_eq!(clamp_limits(0, 0), (1, 1));
        assert_eq!(clamp_limits(5, 8), (5, 8));
        assert_eq!(clamp_limits(100, 100), (MAX_SUMMARY_SENTENCES, MAX_KEYWORDS));
    }
}
