//! Unicode word tokenizer implementation.
//!
//! Splits text using Unicode word boundary rules (UAX #29) and drops the
//! segments that hold no alphanumeric character (punctuation, whitespace).
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::attribute::AttributeSet;
//! use lexis::analysis::token_stream::TokenStream;
//! use lexis::analysis::tokenizer::unicode_word::UnicodeWordTokenizer;
//!
//! let mut tokenizer = UnicodeWordTokenizer::new();
//! let mut attrs = AttributeSet::new();
//! tokenizer.reset("Hello, world!").unwrap();
//!
//! assert!(tokenizer.increment_token(&mut attrs).unwrap());
//! assert_eq!(attrs.term, "Hello");
//! assert!(tokenizer.increment_token(&mut attrs).unwrap());
//! assert_eq!(attrs.term, "world");
//! assert!(!tokenizer.increment_token(&mut attrs).unwrap());
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::analysis::attribute::AttributeSet;
use crate::analysis::token_stream::TokenStream;
use crate::analysis::tokenizer::TokenizerInput;
use crate::error::Result;

/// A tokenizer that splits text on Unicode word boundaries.
#[derive(Clone, Debug, Default)]
pub struct UnicodeWordTokenizer {
    input: TokenizerInput,
}

impl UnicodeWordTokenizer {
    /// Create a new Unicode word tokenizer.
    pub fn new() -> Self {
        UnicodeWordTokenizer::default()
    }

    /// Next word segment at or after `from`. `from` is always a segment
    /// boundary because it is either 0 or the end of the previous word.
    fn find_word(text: &str, from: usize) -> Option<(usize, usize)> {
        text[from..]
            .split_word_bound_indices()
            .find(|(_, segment)| segment.chars().any(char::is_alphanumeric))
            .map(|(start, word)| (from + start, from + start + word.len()))
    }
}

impl TokenStream for UnicodeWordTokenizer {
    fn reset(&mut self, input: &str) -> Result<()> {
        self.input.reset(input)
    }

    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool> {
        self.input.next_term(attrs, Self::find_word)
    }

    fn end(&mut self, attrs: &mut AttributeSet) -> Result<()> {
        self.input.end(attrs)
    }

    fn close(&mut self) -> Result<()> {
        self.input.close();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "unicode_word"
    }
}
