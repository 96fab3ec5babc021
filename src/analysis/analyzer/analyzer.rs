//! Core analyzer trait definition.
//!
//! An [`Analyzer`] is a factory for analysis runs. Every call to
//! [`token_stream`](Analyzer::token_stream) builds a fresh
//! [`FilterChain`] with its own tokenizer, filter state and attribute slot,
//! so one analyzer can serve any number of independent (and concurrent) runs.
//!
//! ```text
//! Raw Text → Tokenizer → Filter 1 → Filter 2 → ... → Filter N → Consumer
//! ```
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::analyzer::analyzer::Analyzer;
//! use lexis::analysis::analyzer::courtesy_title::CourtesyTitleAnalyzer;
//! use lexis::analysis::attribute::Classification;
//!
//! let analyzer = CourtesyTitleAnalyzer::new();
//! let tokens = analyzer.analyze("The film Mr and Mrs Smith").unwrap();
//!
//! assert_eq!(tokens[2].classification, Classification::Male);
//! assert_eq!(tokens[4].classification, Classification::Female);
//! ```

use crate::analysis::chain::{AnalysisStream, FilterChain};
use crate::analysis::token::Token;
use crate::error::Result;

/// Trait for analyzers that convert text into processed tokens.
///
/// The trait requires `Send + Sync` so an analyzer can be shared across
/// indexing threads; the streams it creates are owned by one thread each.
pub trait Analyzer: Send + Sync {
    /// Build a new, unprimed filter chain.
    fn create_components(&self) -> Result<FilterChain>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;

    /// Create a consumer stream over a fresh chain.
    fn token_stream(&self) -> Result<AnalysisStream> {
        Ok(AnalysisStream::new(self.create_components()?))
    }

    /// Analyze `text` in one run: reset, pull every token, end and close.
    fn analyze(&self, text: &str) -> Result<Vec<Token>> {
        let mut stream = self.token_stream()?;
        let analyzed = stream.analyze(text);
        stream.close()?;
        analyzed
    }
}
