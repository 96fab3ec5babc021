//! Tokenizer implementations for text analysis.
//!
//! Tokenizers sit at the source of every filter chain. After `reset(input)`
//! each pull scans forward from the previous term to the next one, so input
//! is segmented lazily rather than up front.
//!
//! # Available Tokenizers
//!
//! - [`whitespace::WhitespaceTokenizer`] - Splits on whitespace characters
//! - [`regex::RegexTokenizer`] - Emits matches of a regular expression
//! - [`unicode_word::UnicodeWordTokenizer`] - Uses Unicode word boundaries
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::attribute::AttributeSet;
//! use lexis::analysis::token_stream::TokenStream;
//! use lexis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let mut tokenizer = WhitespaceTokenizer::new();
//! let mut attrs = AttributeSet::new();
//!
//! tokenizer.reset("Hello world").unwrap();
//! assert!(tokenizer.increment_token(&mut attrs).unwrap());
//! assert_eq!(attrs.term, "Hello");
//! assert!(tokenizer.increment_token(&mut attrs).unwrap());
//! assert_eq!((attrs.start_offset, attrs.end_offset), (6, 11));
//! assert!(!tokenizer.increment_token(&mut attrs).unwrap());
//! ```

use log::trace;

use crate::analysis::attribute::AttributeSet;
use crate::analysis::token_stream::{BoxTokenStream, StreamState};
use crate::error::{LexisError, Result};

pub mod regex;
pub mod unicode_word;
pub mod whitespace;

pub use regex::RegexTokenizer;
pub use unicode_word::UnicodeWordTokenizer;
pub use whitespace::WhitespaceTokenizer;

/// Builds unprimed tokenizer instances, one per analysis run.
pub trait TokenizerFactory: Send + Sync {
    /// Create a tokenizer ready to be reset over new input.
    fn create(&self) -> BoxTokenStream;

    /// Name of the tokenizer this factory creates.
    fn tokenizer_name(&self) -> &'static str;
}

impl TokenizerFactory for WhitespaceTokenizer {
    fn create(&self) -> BoxTokenStream {
        Box::new(WhitespaceTokenizer::new())
    }

    fn tokenizer_name(&self) -> &'static str {
        "whitespace"
    }
}

impl TokenizerFactory for UnicodeWordTokenizer {
    fn create(&self) -> BoxTokenStream {
        Box::new(UnicodeWordTokenizer::new())
    }

    fn tokenizer_name(&self) -> &'static str {
        "unicode_word"
    }
}

impl TokenizerFactory for RegexTokenizer {
    fn create(&self) -> BoxTokenStream {
        Box::new(self.unprimed())
    }

    fn tokenizer_name(&self) -> &'static str {
        "regex"
    }
}

/// Validate raw bytes as UTF-8 input for a tokenizer.
///
/// Fails with [`LexisError::InvalidInput`] naming the byte offset of the
/// first malformed sequence.
pub fn decode_input(bytes: &[u8]) -> Result<&str> {
    std::str::from_utf8(bytes).map_err(|e| match e.error_len() {
        None => LexisError::invalid_input(format!(
            "unterminated multi-byte sequence at byte {}",
            e.valid_up_to()
        )),
        Some(len) => LexisError::invalid_input(format!(
            "invalid {len}-byte UTF-8 sequence at byte {}",
            e.valid_up_to()
        )),
    })
}

/// Input buffer and lifecycle shared by all tokenizers.
#[derive(Clone, Debug, Default)]
pub(crate) struct TokenizerInput {
    text: String,
    cursor: usize,
    state: StreamState,
}

impl TokenizerInput {
    pub(crate) fn reset(&mut self, input: &str) -> Result<()> {
        self.state.on_reset()?;
        self.text.clear();
        self.text.push_str(input);
        self.cursor = 0;
        Ok(())
    }

    /// Locate the next term with `find(text, cursor) -> (start, end)` and load
    /// it into `attrs`.
    pub(crate) fn next_term<F>(&mut self, attrs: &mut AttributeSet, find: F) -> Result<bool>
    where
        F: FnOnce(&str, usize) -> Option<(usize, usize)>,
    {
        if !self.state.on_pull()? {
            attrs.clear();
            return Ok(false);
        }

        match find(&self.text, self.cursor) {
            Some((start, end)) => {
                attrs.set_term(&self.text[start..end], start, end);
                self.cursor = end;
                trace!("term {:?} at {start}..{end}", attrs.term);
                Ok(true)
            }
            None => {
                self.cursor = self.text.len();
                Ok(false)
            }
        }
    }

    pub(crate) fn end(&mut self, attrs: &mut AttributeSet) -> Result<()> {
        self.state.on_end()?;
        let final_offset = self.text.len();
        self.cursor = final_offset;
        attrs.clear();
        attrs.start_offset = final_offset;
        attrs.end_offset = final_offset;
        attrs.position_increment = 0;
        Ok(())
    }

    pub(crate) fn close(&mut self) {
        if self.state.on_close() {
            self.text = String::new();
            self.cursor = 0;
        }
    }
}
