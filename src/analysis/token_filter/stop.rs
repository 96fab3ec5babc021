//! Stop filter implementation.
//!
//! Removes stop words from the stream while keeping positional information
//! intact: the position increments of every suppressed token are carried onto
//! the next emitted token, so phrase matching still sees the gap.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::attribute::AttributeSet;
//! use lexis::analysis::token_filter::stop::{StopFilter, StopWords};
//! use lexis::analysis::token_stream::TokenStream;
//! use lexis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let words = StopWords::from_words(["is", "a", "the"]);
//! let mut filter = StopFilter::new(WhitespaceTokenizer::new(), words);
//! let mut attrs = AttributeSet::new();
//!
//! filter.reset("This is a good morning").unwrap();
//! assert!(filter.increment_token(&mut attrs).unwrap());
//! assert_eq!(attrs.term, "This");
//! assert!(filter.increment_token(&mut attrs).unwrap());
//! assert_eq!(attrs.term, "good");
//! assert_eq!(attrs.position_increment, 3);
//! ```

use std::mem;
use std::sync::{Arc, LazyLock};

use ahash::AHashSet;

use crate::analysis::attribute::AttributeSet;
use crate::analysis::token_filter::FilterFactory;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::error::Result;

/// The default stop words: `in`, `is`, `a`, `the`.
pub const DEFAULT_STOP_WORDS: &[&str] = &["in", "is", "a", "the"];

/// Common English words that are typically filtered out during indexing.
pub const ENGLISH_STOP_WORDS: &[&str] = &[
    "a", "an", "and", "are", "as", "at", "be", "but", "by", "for", "if", "in", "into", "is", "it",
    "no", "not", "of", "on", "or", "such", "that", "the", "their", "then", "there", "these",
    "they", "this", "to", "was", "will", "with",
];

static ENGLISH_STOP_WORDS_SET: LazyLock<Arc<AHashSet<String>>> = LazyLock::new(|| {
    Arc::new(ENGLISH_STOP_WORDS.iter().map(|&s| s.to_string()).collect())
});

/// An immutable, shareable stop-word set.
///
/// Matching is case-sensitive unless [`ignore_case`](Self::ignore_case) is
/// set, in which case looked-up terms are lower-cased and matched against a
/// lower-cased copy of the set. The original words are kept, so the flag can
/// be cleared again.
#[derive(Clone, Debug)]
pub struct StopWords {
    words: Arc<AHashSet<String>>,
    folded: Option<Arc<AHashSet<String>>>,
}

impl StopWords {
    /// Create a stop-word set from a list of words.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopWords {
            words: Arc::new(words.into_iter().map(Into::into).collect()),
            folded: None,
        }
    }

    /// The larger built-in English list.
    pub fn english() -> Self {
        StopWords {
            words: Arc::clone(&ENGLISH_STOP_WORDS_SET),
            folded: None,
        }
    }

    /// Set whether matching ignores case.
    pub fn ignore_case(mut self, ignore_case: bool) -> Self {
        self.folded = match (ignore_case, self.folded.take()) {
            (false, _) => None,
            (true, Some(folded)) => Some(folded),
            (true, None) => Some(Arc::new(
                self.words.iter().map(|w| w.to_lowercase()).collect(),
            )),
        };
        self
    }

    /// Check if a word is a stop word.
    pub fn contains(&self, word: &str) -> bool {
        match &self.folded {
            Some(folded) => folded.contains(word.to_lowercase().as_str()),
            None => self.words.contains(word),
        }
    }

    /// Whether matching ignores case.
    pub fn is_case_insensitive(&self) -> bool {
        self.folded.is_some()
    }

    /// Get the number of stop words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Check if the stop word set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for StopWords {
    fn default() -> Self {
        Self::from_words(DEFAULT_STOP_WORDS.iter().copied())
    }
}

impl FilterFactory for StopWords {
    fn wrap(&self, upstream: BoxTokenStream) -> BoxTokenStream {
        Box::new(StopFilter::new(upstream, self.clone()))
    }

    fn filter_name(&self) -> &'static str {
        "stop"
    }
}

/// A filter that removes stop words from the token stream.
///
/// The position increment of each suppressed token is added to an internal
/// counter, and the counter is added to the next emitted token. A run of N
/// stop words before a token therefore yields `1 + N` on that token.
///
/// A stop-word run at the very end of the input is not lost: `end()` adds the
/// pending increment to the final-state position increment.
#[derive(Debug)]
pub struct StopFilter<S = BoxTokenStream> {
    input: S,
    stop_words: StopWords,
    extra_increment: usize,
}

impl<S: TokenStream> StopFilter<S> {
    /// Create a stop filter reading from `input`.
    pub fn new(input: S, stop_words: StopWords) -> Self {
        StopFilter {
            input,
            stop_words,
            extra_increment: 0,
        }
    }

    /// The stop-word set used by this filter.
    pub fn stop_words(&self) -> &StopWords {
        &self.stop_words
    }
}

impl<S: TokenStream> TokenStream for StopFilter<S> {
    fn reset(&mut self, input: &str) -> Result<()> {
        self.extra_increment = 0;
        self.input.reset(input)
    }

    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool> {
        while self.input.increment_token(attrs)? {
            if self.stop_words.contains(&attrs.term) {
                self.extra_increment += attrs.position_increment;
                continue;
            }
            attrs.position_increment += mem::take(&mut self.extra_increment);
            return Ok(true);
        }
        Ok(false)
    }

    fn end(&mut self, attrs: &mut AttributeSet) -> Result<()> {
        self.input.end(attrs)?;
        attrs.position_increment += mem::take(&mut self.extra_increment);
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.extra_increment = 0;
        self.input.close()
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token_filter::test_support::{FixedStream, drain};

    fn fixed(terms: &[&'static str]) -> FixedStream {
        FixedStream::new(terms.iter().map(|&t| (t, 0, t.len())).collect())
    }

    #[test]
    fn test_stop_filter() {
        let words = StopWords::from_words(["is", "a", "the"]);
        let mut filter = StopFilter::new(fixed(&["This", "is", "a", "good", "morning"]), words);

        let result = drain(&mut filter);

        assert_eq!(
            result,
            vec![
                ("This".to_string(), 1),
                ("good".to_string(), 3),
                ("morning".to_string(), 1),
            ]
        );
    }

    #[test]
    fn test_increment_equals_one_plus_run_length() {
        for run in 0..5 {
            let mut terms = vec!["the"; run];
            terms.push("word");
            let mut filter = StopFilter::new(fixed(&terms), StopWords::default());

            let result = drain(&mut filter);

            assert_eq!(result, vec![("word".to_string(), 1 + run)]);
        }
    }

    #[test]
    fn test_case_sensitive_by_default() {
        let mut filter = StopFilter::new(fixed(&["The", "the", "end"]), StopWords::default());

        let result = drain(&mut filter);

        assert_eq!(
            result,
            vec![("The".to_string(), 1), ("end".to_string(), 2)]
        );
    }

    #[test]
    fn test_ignore_case() {
        let words = StopWords::from_words(["The", "IS"]).ignore_case(true);
        assert!(words.contains("the"));
        assert!(words.contains("Is"));

        let mut filter = StopFilter::new(fixed(&["THE", "sky", "is", "blue"]), words);
        let result = drain(&mut filter);

        assert_eq!(
            result,
            vec![("sky".to_string(), 2), ("blue".to_string(), 2)]
        );
    }

    #[test]
    fn test_ignore_case_can_be_cleared() {
        let words = StopWords::from_words(["The"]).ignore_case(true);
        assert!(words.contains("the"));
        assert!(words.contains("THE"));

        let words = words.ignore_case(false);
        assert!(!words.is_case_insensitive());
        assert!(words.contains("The"));
        assert!(!words.contains("the"));

        let words = words.ignore_case(true).ignore_case(true);
        assert!(words.is_case_insensitive());
        assert!(words.contains("tHe"));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_trailing_stop_words_flush_at_end() {
        let mut filter = StopFilter::new(fixed(&["morning", "in", "the"]), StopWords::default());
        let mut attrs = AttributeSet::new();

        filter.reset("").unwrap();
        assert!(filter.increment_token(&mut attrs).unwrap());
        assert!(!filter.increment_token(&mut attrs).unwrap());

        filter.end(&mut attrs).unwrap();
        assert_eq!(attrs.position_increment, 2);

        // The pending count is consumed by end().
        filter.end(&mut attrs).unwrap();
        assert_eq!(attrs.position_increment, 0);
    }

    #[test]
    fn test_reset_discards_pending_increment() {
        // Upstream fails once, after two stop words were counted.
        let upstream = fixed(&["a", "a", "x"]).failing_at(2);
        let mut filter = StopFilter::new(upstream, StopWords::default());
        let mut attrs = AttributeSet::new();

        filter.reset("").unwrap();
        assert!(filter.increment_token(&mut attrs).is_err());

        let result = drain(&mut filter);
        assert_eq!(result, vec![("x".to_string(), 3)]);
    }

    #[test]
    fn test_error_propagates() {
        let upstream = fixed(&["the", "bad"]).failing_at(1);
        let mut filter = StopFilter::new(upstream, StopWords::default());
        let mut attrs = AttributeSet::new();

        filter.reset("").unwrap();
        assert!(filter.increment_token(&mut attrs).is_err());
    }

    #[test]
    fn test_never_mutates_term() {
        let mut filter = StopFilter::new(fixed(&["a", "Term"]), StopWords::default());
        let result = drain(&mut filter);
        assert_eq!(result[0].0, "Term");
    }

    #[test]
    fn test_stop_words_sets() {
        let default = StopWords::default();
        assert_eq!(default.len(), 4);
        assert!(default.contains("in"));
        assert!(!default.contains("an"));

        let english = StopWords::english();
        assert!(english.contains("with"));
        assert!(!english.is_case_insensitive());
        assert!(!english.is_empty());
    }

    #[test]
    fn test_filter_name() {
        let filter = StopFilter::new(fixed(&[]), StopWords::default());
        assert_eq!(filter.name(), "stop");
        assert_eq!(StopWords::default().filter_name(), "stop");
    }
}
