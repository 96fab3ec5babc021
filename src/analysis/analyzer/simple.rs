//! Simple analyzer that performs tokenization without filtering.
//!
//! This analyzer applies only tokenization without any token filtering. It's
//! useful for testing tokenizers or when every token must be kept verbatim.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::analyzer::analyzer::Analyzer;
//! use lexis::analysis::analyzer::simple::SimpleAnalyzer;
//!
//! let analyzer = SimpleAnalyzer::default();
//! let tokens = analyzer.analyze("Hello World").unwrap();
//!
//! // No filtering applied - original case preserved
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].term, "Hello");
//! assert_eq!(tokens[1].term, "World");
//! ```

use std::sync::Arc;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::chain::FilterChain;
use crate::analysis::tokenizer::TokenizerFactory;
use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;
use crate::error::Result;

/// A simple analyzer that just tokenizes without any filtering.
#[derive(Clone)]
pub struct SimpleAnalyzer {
    tokenizer: Arc<dyn TokenizerFactory>,
}

impl SimpleAnalyzer {
    /// Create a new simple analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn TokenizerFactory>) -> Self {
        SimpleAnalyzer { tokenizer }
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn TokenizerFactory> {
        &self.tokenizer
    }
}

impl Default for SimpleAnalyzer {
    fn default() -> Self {
        Self::new(Arc::new(WhitespaceTokenizer::new()))
    }
}

impl Analyzer for SimpleAnalyzer {
    fn create_components(&self) -> Result<FilterChain> {
        Ok(FilterChain::new(self.tokenizer.create()))
    }

    fn name(&self) -> &'static str {
        "simple"
    }
}

impl std::fmt::Debug for SimpleAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SimpleAnalyzer")
            .field("tokenizer", &self.tokenizer.tokenizer_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::tokenizer::regex::RegexTokenizer;

    #[test]
    fn test_simple_analyzer() {
        let analyzer = SimpleAnalyzer::default();

        let tokens = analyzer.analyze("Hello,  World").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].term, "Hello,");
        assert_eq!(tokens[1].term, "World");
        assert_eq!(tokens[1].start_offset, 8);
        assert!(tokens.iter().all(|t| t.position_increment == 1));
    }

    #[test]
    fn test_custom_tokenizer() {
        let analyzer = SimpleAnalyzer::new(Arc::new(RegexTokenizer::new().unwrap()));

        let tokens = analyzer.analyze("Hello, World").unwrap();

        assert_eq!(tokens[0].term, "Hello");
        assert_eq!(analyzer.tokenizer().tokenizer_name(), "regex");
    }

    #[test]
    fn test_empty_input() {
        let analyzer = SimpleAnalyzer::default();
        assert!(analyzer.analyze("").unwrap().is_empty());
        assert!(analyzer.analyze(" \t\n").unwrap().is_empty());
    }
}
