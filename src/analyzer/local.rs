//! Pure local analysis

use crate::analyzer::Analyzer;
use crate::errors::{GistError, Result};
use crate::keywords::KeywordExtractor;
use crate::summarizer::Summarizer;
use crate::types::Analysis;

/// Runs the summarizer and keyword extractor locally, with no I/O.
///
/// Unlike the bare pipeline components, which clamp zero limits, this
/// boundary enforces the caller contract strictly and rejects them.
#[derive(Debug, Clone, Default)]
pub struct LocalAnalyzer {
    summarizer: Summarizer,
    keywords: KeywordExtractor,
}

impl LocalAnalyzer {
    /// Create an analyzer with default components
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an analyzer from preconfigured components
    pub fn with_components(summarizer: Summarizer, keywords: KeywordExtractor) -> Self {
        Self {
            summarizer,
            keywords,
        }
    }
}

impl Analyzer for LocalAnalyzer {
    fn analyze(&self, text: &str, k: usize, top_n: usize) -> Result<Analysis> {
        if k == 0 {
            return Err(GistError::InvalidArgument("k must be >= 1".to_string()));
        }
        if top_n == 0 {
            return Err(GistError::InvalidArgument("top_n must be >= 1".to_string()));
        }

        Ok(Analysis {
            summary: self.summarizer.summarize(text, k),
            keywords: self.keywords.extract(text, top_n),
        })
    }
}
