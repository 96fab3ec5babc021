//! Token snapshots handed to consumers.
//!
//! The attribute slot of a stream is reused on every pull, so anything that
//! outlives the current pull (an indexer buffering postings, a test collecting
//! results) works with [`Token`], an owned copy taken at one successful pull.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::attribute::{AttributeSet, Classification};
//! use lexis::analysis::token::Token;
//!
//! let mut attrs = AttributeSet::new();
//! attrs.set_term("good", 10, 14);
//! attrs.position_increment = 3;
//!
//! let token = Token::from_attributes(&attrs, 3);
//! assert_eq!(token.term, "good");
//! assert_eq!(token.position, 3);
//! assert_eq!(token.classification, Classification::Undefined);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::analysis::attribute::{AttributeSet, Classification};

/// An owned copy of the attribute set at one pull.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The term text
    pub term: String,

    /// Absolute position in the stream (0-based)
    pub position: usize,

    /// The byte offset where this token starts in the original text
    pub start_offset: usize,

    /// The byte offset where this token ends in the original text
    pub end_offset: usize,

    /// Position increment from the previous token
    pub position_increment: usize,

    /// Classification assigned by the filter chain
    pub classification: Classification,
}

impl Token {
    /// Create a token with default offsets and increment.
    pub fn new<S: Into<String>>(term: S, position: usize) -> Self {
        Token {
            term: term.into(),
            position,
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            classification: Classification::Undefined,
        }
    }

    /// Create a token with text, position, and byte offsets.
    pub fn with_offsets<S: Into<String>>(
        term: S,
        position: usize,
        start_offset: usize,
        end_offset: usize,
    ) -> Self {
        Token {
            start_offset,
            end_offset,
            ..Token::new(term, position)
        }
    }

    /// Snapshot the given attribute slot at `position`.
    pub fn from_attributes(attrs: &AttributeSet, position: usize) -> Self {
        Token {
            term: attrs.term.clone(),
            position,
            start_offset: attrs.start_offset,
            end_offset: attrs.end_offset,
            position_increment: attrs.position_increment,
            classification: attrs.classification.clone(),
        }
    }

    /// Set the position increment.
    pub fn with_position_increment(mut self, increment: usize) -> Self {
        self.position_increment = increment;
        self
    }

    /// Set the classification.
    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Get the length of the term in bytes.
    pub fn len(&self) -> usize {
        self.term.len()
    }

    /// Check if the term is empty.
    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.term)
    }
}
