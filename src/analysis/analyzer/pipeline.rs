//! Pipeline analyzer that combines tokenizers and filters.
//!
//! This is the main building block for custom analyzers. It combines a
//! tokenizer with any number of filter factories; every run gets a fresh
//! tokenizer and fresh filter instances, while the word sets and mappings
//! behind them are shared.
//!
//! # Architecture
//!
//! The PipelineAnalyzer applies processing in this order:
//! 1. Tokenizer: Splits text into tokens
//! 2. Token Filters: Applied sequentially in the order they were added
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::analyzer::analyzer::Analyzer;
//! use lexis::analysis::analyzer::pipeline::PipelineAnalyzer;
//! use lexis::analysis::tokenizer::regex::RegexTokenizer;
//! use lexis::analysis::token_filter::lowercase::Lowercase;
//! use lexis::analysis::token_filter::stop::StopWords;
//! use std::sync::Arc;
//!
//! let tokenizer = Arc::new(RegexTokenizer::new().unwrap());
//! let analyzer = PipelineAnalyzer::new(tokenizer)
//!     .add_filter(Arc::new(Lowercase))
//!     .add_filter(Arc::new(StopWords::from_words(["the", "and"])))
//!     .with_name("my_custom_analyzer");
//!
//! let tokens = analyzer.analyze("Hello THE world AND test").unwrap();
//!
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].term, "hello");
//! assert_eq!(tokens[1].term, "world");
//! assert_eq!(tokens[1].position_increment, 2);
//! assert_eq!(tokens[2].term, "test");
//! ```

use std::fmt;
use std::sync::Arc;

use log::debug;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::chain::FilterChain;
use crate::analysis::config::AnalyzerConfig;
use crate::analysis::token_filter::FilterFactory;
use crate::analysis::tokenizer::TokenizerFactory;
use crate::error::Result;

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn TokenizerFactory>,
    filters: Vec<Arc<dyn FilterFactory>>,
    name: String,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer.
    pub fn new(tokenizer: Arc<dyn TokenizerFactory>) -> Self {
        PipelineAnalyzer {
            name: format!("pipeline_{}", tokenizer.tokenizer_name()),
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// Build an analyzer from a serializable config.
    pub fn from_config(config: &AnalyzerConfig) -> Result<Self> {
        let mut analyzer = PipelineAnalyzer::new(config.tokenizer.build()?);
        for filter in &config.filters {
            analyzer = analyzer.add_filter(filter.build()?);
        }
        debug!(
            "built analyzer {:?}: {} -> [{}]",
            config.name,
            analyzer.tokenizer.tokenizer_name(),
            analyzer
                .filters
                .iter()
                .map(|f| f.filter_name())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Ok(analyzer.with_name(config.name.clone()))
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn FilterFactory>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Set a custom name for this analyzer.
    pub fn with_name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// Get the custom name of this analyzer.
    pub fn pipeline_name(&self) -> &str {
        &self.name
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn TokenizerFactory> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn FilterFactory>] {
        &self.filters
    }
}

impl Analyzer for PipelineAnalyzer {
    fn create_components(&self) -> Result<FilterChain> {
        let chain = FilterChain::new(self.tokenizer.create());
        Ok(self
            .filters
            .iter()
            .fold(chain, |chain, filter| chain.add_factory(filter.as_ref())))
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("name", &self.name)
            .field("tokenizer", &self.tokenizer.tokenizer_name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.filter_name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::attribute::Classification;
    use crate::analysis::token_filter::lowercase::Lowercase;
    use crate::analysis::token_filter::stop::StopWords;
    use crate::analysis::tokenizer::whitespace::WhitespaceTokenizer;

    #[test]
    fn test_pipeline_analyzer() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(Lowercase))
            .with_name("test_analyzer");

        let tokens = analyzer.analyze("Hello WORLD").unwrap();

        assert_eq!(tokens.len(), 2);
        assert_eq!(tokens[0].term, "hello");
        assert_eq!(tokens[1].term, "world");
        assert_eq!(analyzer.name(), "pipeline");
        assert_eq!(analyzer.pipeline_name(), "test_analyzer");
    }

    #[test]
    fn test_default_name() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()));
        assert_eq!(analyzer.pipeline_name(), "pipeline_whitespace");
        assert!(analyzer.filters().is_empty());
    }

    #[test]
    fn test_filter_order() {
        // Stop words match case-sensitively, so the order decides whether
        // "The" is dropped.
        let stop_then_lower = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StopWords::default()))
            .add_filter(Arc::new(Lowercase));
        let lower_then_stop = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(Lowercase))
            .add_filter(Arc::new(StopWords::default()));

        assert_eq!(stop_then_lower.analyze("The end").unwrap().len(), 2);
        assert_eq!(lower_then_stop.analyze("The end").unwrap().len(), 1);
    }

    #[test]
    fn test_from_config() {
        let analyzer = PipelineAnalyzer::from_config(&AnalyzerConfig::courtesy_title()).unwrap();
        let stream = analyzer.token_stream().unwrap();
        assert_eq!(
            stream.stages(),
            ["unicode_word", "substitution", "classification"]
        );

        let tokens = analyzer.analyze("Dr Who met Mrs Hudson").unwrap();
        assert_eq!(tokens[0].term, "doctor");
        assert_eq!(tokens[3].term, "misters");
        assert_eq!(tokens[3].classification, Classification::Female);
        assert_eq!(analyzer.pipeline_name(), "courtesy_title");
    }

    #[test]
    fn test_from_config_named_class() {
        let json = r#"{
            "tokenizer": { "type": "whitespace" },
            "filters": [
                { "type": "classification",
                  "classes": [ { "name": "color", "terms": ["Red", "blue"] } ] }
            ]
        }"#;
        let config = AnalyzerConfig::from_json_str(json).unwrap();
        let analyzer = PipelineAnalyzer::from_config(&config).unwrap();

        let tokens = analyzer.analyze("red car").unwrap();
        assert_eq!(
            tokens[0].classification,
            Classification::Named("color".to_string())
        );
        assert_eq!(tokens[1].classification, Classification::Undefined);
    }

    #[test]
    fn test_independent_streams() {
        let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(StopWords::default()));

        let mut first = analyzer.token_stream().unwrap();
        let mut second = analyzer.token_stream().unwrap();
        first.reset("a a x").unwrap();
        second.reset("y").unwrap();

        assert!(first.increment_token().unwrap());
        assert!(second.increment_token().unwrap());
        assert_eq!(first.attributes().term, "x");
        assert_eq!(first.attributes().position_increment, 3);
        assert_eq!(second.attributes().term, "y");
        assert_eq!(second.attributes().position_increment, 1);
    }
}
