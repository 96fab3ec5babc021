//! Courtesy-title analyzer.
//!
//! Expands courtesy titles and tags each token with the gender the title
//! implies:
//!
//! 1. UnicodeWordTokenizer
//! 2. SubstitutionFilter (`Dr → doctor`, `Mr → mister`, `Mrs → misters`)
//! 3. ClassificationFilter (`Male: {mr, mister}`, `Female: {mrs, misters}`)
//!
//! Substitution runs first, so the classifier sees expanded terms; the
//! classification sets list both forms so either order classifies the same.

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::chain::FilterChain;
use crate::analysis::token_filter::classification::{ClassificationFilter, ClassificationSets};
use crate::analysis::token_filter::substitution::{SubstitutionFilter, TermSubstitutions};
use crate::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
use crate::error::Result;

/// Analyzer chaining title substitution and gender classification.
#[derive(Clone, Debug, Default)]
pub struct CourtesyTitleAnalyzer {
    substitutions: TermSubstitutions,
    classes: ClassificationSets,
}

impl CourtesyTitleAnalyzer {
    /// Create the analyzer with the built-in titles and gender sets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the analyzer with custom mappings and classes.
    pub fn with_sets(substitutions: TermSubstitutions, classes: ClassificationSets) -> Self {
        CourtesyTitleAnalyzer {
            substitutions,
            classes,
        }
    }
}

impl Analyzer for CourtesyTitleAnalyzer {
    fn create_components(&self) -> Result<FilterChain> {
        let substitutions = self.substitutions.clone();
        let classes = self.classes.clone();
        Ok(FilterChain::new(UnicodeWordTokenizer::new())
            .add_filter(|upstream| SubstitutionFilter::new(upstream, substitutions))
            .add_filter(|upstream| ClassificationFilter::new(upstream, classes)))
    }

    fn name(&self) -> &'static str {
        "courtesy_title"
    }
}
