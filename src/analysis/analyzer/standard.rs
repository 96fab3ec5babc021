//! Standard analyzer that provides good defaults for most use cases.
//!
//! This analyzer splits on Unicode word boundaries, lowercases, and removes
//! English stop words. It's suitable for general text analysis in English and
//! other languages that use spaces to separate words.
//!
//! # Pipeline
//!
//! 1. UnicodeWordTokenizer
//! 2. LowercaseFilter
//! 3. StopFilter (33 common English stop words)
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::analyzer::analyzer::Analyzer;
//! use lexis::analysis::analyzer::standard::StandardAnalyzer;
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens = analyzer.analyze("Hello the world and test").unwrap();
//!
//! // "the" and "and" are filtered out as stop words
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].term, "hello");
//! assert_eq!(tokens[1].term, "world");
//! assert_eq!(tokens[1].position, 2);
//! assert_eq!(tokens[2].term, "test");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::chain::FilterChain;
use crate::analysis::token_filter::lowercase::Lowercase;
use crate::analysis::token_filter::stop::StopWords;
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// A standard analyzer that provides good defaults for most use cases.
pub struct StandardAnalyzer {
    inner: PipelineAnalyzer,
}

impl StandardAnalyzer {
    /// Create a new standard analyzer with default settings.
    pub fn new() -> Self {
        Self::with_stop_words(StopWords::english())
    }

    /// Create a standard analyzer with a custom stop-word set.
    pub fn with_stop_words(stop_words: StopWords) -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(Lowercase))
            .add_filter(Arc::new(stop_words))
            .with_name("standard");

        StandardAnalyzer { inner: analyzer }
    }

    /// Create a new standard analyzer without stop word filtering.
    pub fn without_stop_words() -> Self {
        let analyzer = PipelineAnalyzer::new(Arc::new(UnicodeWordTokenizer::new()))
            .add_filter(Arc::new(Lowercase))
            .with_name("standard_no_stop");

        StandardAnalyzer { inner: analyzer }
    }

    /// Get the inner pipeline analyzer.
    pub fn inner(&self) -> &PipelineAnalyzer {
        &self.inner
    }
}

impl Default for StandardAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer for StandardAnalyzer {
    fn create_components(&self) -> Result<FilterChain> {
        self.inner.create_components()
    }

    fn name(&self) -> &'static str {
        "standard"
    }
}

impl std::fmt::Debug for StandardAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StandardAnalyzer")
            .field("inner", &self.inner)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_analyzer() {
        let analyzer = StandardAnalyzer::new();

        let tokens = analyzer.analyze("Hello the world and test").unwrap();

        // "the" and "and" should be filtered out
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].term, "hello");
        assert_eq!(tokens[1].term, "world");
        assert_eq!(tokens[1].position_increment, 2);
        assert_eq!(tokens[2].term, "test");
        assert_eq!(tokens[2].position_increment, 2);
    }

    #[test]
    fn test_capitalized_stop_words_are_removed() {
        // Lowercasing runs before the stop filter.
        let analyzer = StandardAnalyzer::new();
        let tokens = analyzer.analyze("The Cat").unwrap();

        assert_eq!(tokens.len(), 1);
        assert_eq!(tokens[0].term, "cat");
        assert_eq!(tokens[0].position, 1);
    }

    #[test]
    fn test_standard_analyzer_without_stop_words() {
        let analyzer = StandardAnalyzer::without_stop_words();

        let tokens = analyzer.analyze("Hello the World").unwrap();

        // "the" should not be filtered out
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[0].term, "hello");
        assert_eq!(tokens[1].term, "the");
        assert_eq!(tokens[2].term, "world");
    }

    #[test]
    fn test_punctuation_and_offsets() {
        let analyzer = StandardAnalyzer::new();
        let tokens = analyzer.analyze("Rust, for fun!").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!((tokens[0].start_offset, tokens[0].end_offset), (0, 4));
        assert_eq!(tokens[1].term, "fun");
        assert_eq!((tokens[1].start_offset, tokens[1].end_offset), (10, 13));
    }

    #[test]
    fn test_stages() {
        let stream = StandardAnalyzer::new().token_stream().unwrap();
        assert_eq!(stream.stages(), ["unicode_word", "lowercase", "stop"]);
    }
}
