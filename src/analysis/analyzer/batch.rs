//! Parallel analysis of many documents.
//!
//! Each document gets its own [`AnalysisStream`](crate::analysis::chain::AnalysisStream),
//! so runs share nothing but the analyzer's immutable configuration.

use log::debug;
use rayon::prelude::*;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::token::Token;
use crate::error::Result;

/// Analyze `texts` in parallel, returning one result per input in input order.
///
/// A failure in one document does not affect the others.
///
/// # Examples
///
/// ```
/// use lexis::analysis::analyzer::batch::analyze_batch;
/// use lexis::analysis::analyzer::standard::StandardAnalyzer;
///
/// let analyzer = StandardAnalyzer::new();
/// let results = analyze_batch(&analyzer, &["The quick fox", "a lazy dog"]);
///
/// assert_eq!(results.len(), 2);
/// assert_eq!(results[0].as_ref().unwrap()[0].term, "quick");
/// assert_eq!(results[1].as_ref().unwrap()[0].term, "lazy");
/// ```
pub fn analyze_batch<A, S>(analyzer: &A, texts: &[S]) -> Vec<Result<Vec<Token>>>
where
    A: Analyzer + ?Sized,
    S: AsRef<str> + Sync,
{
    debug!("analyzing {} documents with {}", texts.len(), analyzer.name());
    if texts.len() > 1 {
        texts
            .par_iter()
            .map(|text| analyzer.analyze(text.as_ref()))
            .collect()
    } else {
        texts
            .iter()
            .map(|text| analyzer.analyze(text.as_ref()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::analyzer::courtesy_title::CourtesyTitleAnalyzer;
    use crate::analysis::analyzer::simple::SimpleAnalyzer;
    use crate::analysis::attribute::Classification;

    #[test]
    fn test_matches_sequential_analysis() {
        let analyzer = CourtesyTitleAnalyzer::new();
        let texts: Vec<String> = (0..64)
            .map(|i| format!("Mr Smith number {i} met Mrs Jones"))
            .collect();

        let results = analyze_batch(&analyzer, &texts);

        assert_eq!(results.len(), texts.len());
        for (text, result) in texts.iter().zip(results) {
            let tokens = result.unwrap();
            assert_eq!(tokens, analyzer.analyze(text).unwrap());
            assert_eq!(tokens[0].classification, Classification::Male);
        }
    }

    #[test]
    fn test_empty_and_single() {
        let analyzer = SimpleAnalyzer::default();
        let none: [&str; 0] = [];

        assert!(analyze_batch(&analyzer, &none).is_empty());

        let one = analyze_batch(&analyzer, &["solo"]);
        assert_eq!(one[0].as_ref().unwrap()[0].term, "solo");
    }

    #[test]
    fn test_trait_object() {
        let analyzer: Box<dyn Analyzer> = Box::new(SimpleAnalyzer::default());
        let results = analyze_batch(analyzer.as_ref(), &["a b", "c"]);

        assert_eq!(results[0].as_ref().unwrap().len(), 2);
        assert_eq!(results[1].as_ref().unwrap().len(), 1);
    }
}
