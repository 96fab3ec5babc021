//! The per-stream attribute slot.
//!
//! Every stage of a filter chain reads and writes the same [`AttributeSet`].
//! The slot is created once per [`AnalysisStream`](crate::analysis::chain::AnalysisStream)
//! and overwritten in place on every pull, so a consumer that wants to keep a
//! token must take a [`Token`](crate::analysis::token::Token) snapshot.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::attribute::{AttributeSet, Classification};
//!
//! let mut attrs = AttributeSet::new();
//! attrs.set_term("Mr", 9, 11);
//! attrs.classification = Classification::Male;
//!
//! assert_eq!(attrs.term, "Mr");
//! assert_eq!(attrs.position_increment, 1);
//!
//! attrs.clear();
//! assert!(attrs.term.is_empty());
//! assert_eq!(attrs.classification, Classification::Undefined);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// Classification tag attached to a token by a classification filter.
///
/// `Male` and `Female` are the built-in courtesy-title classes; `Named`
/// carries any class introduced through configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Classification {
    /// No configured class matched the term.
    #[default]
    Undefined,
    /// Masculine term (e.g. "mr", "mister").
    Male,
    /// Feminine term (e.g. "mrs", "misters").
    Female,
    /// A class defined by configuration.
    Named(String),
}

impl Classification {
    /// Resolve a configured class name.
    ///
    /// `male`, `female` and `undefined` (any casing) map to the built-in
    /// variants; everything else becomes [`Classification::Named`].
    pub fn from_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "undefined" => Classification::Undefined,
            "male" => Classification::Male,
            "female" => Classification::Female,
            _ => Classification::Named(name.to_string()),
        }
    }

    /// The display name of this class.
    pub fn name(&self) -> &str {
        match self {
            Classification::Undefined => "undefined",
            Classification::Male => "male",
            Classification::Female => "female",
            Classification::Named(name) => name,
        }
    }

    /// Whether a class was assigned.
    pub fn is_defined(&self) -> bool {
        !matches!(self, Classification::Undefined)
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The mutable facets of the current token.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeSet {
    /// The term text.
    pub term: String,

    /// Byte offset where the term starts in the original input.
    pub start_offset: usize,

    /// Byte offset where the term ends in the original input.
    pub end_offset: usize,

    /// Position increment from the previously emitted token (default: 1).
    ///
    /// Values greater than 1 mean positions were skipped by a filter.
    pub position_increment: usize,

    /// Classification tag (default: `Undefined`).
    pub classification: Classification,
}

impl AttributeSet {
    /// Create an attribute set holding the default values.
    pub fn new() -> Self {
        AttributeSet {
            term: String::new(),
            start_offset: 0,
            end_offset: 0,
            position_increment: 1,
            classification: Classification::Undefined,
        }
    }

    /// Restore every facet to its default, keeping the term buffer's allocation.
    pub fn clear(&mut self) {
        self.term.clear();
        self.start_offset = 0;
        self.end_offset = 0;
        self.position_increment = 1;
        self.classification = Classification::Undefined;
    }

    /// Load a freshly tokenized term into the slot.
    ///
    /// Offsets are set as given; the position increment and classification
    /// return to their defaults since a new raw token carries neither.
    pub fn set_term(&mut self, term: &str, start_offset: usize, end_offset: usize) {
        debug_assert!(start_offset <= end_offset);
        self.term.clear();
        self.term.push_str(term);
        self.start_offset = start_offset;
        self.end_offset = end_offset;
        self.position_increment = 1;
        self.classification = Classification::Undefined;
    }

    /// Replace the term text without touching offsets or position.
    pub fn replace_term(&mut self, term: &str) {
        self.term.clear();
        self.term.push_str(term);
    }
}

impl Default for AttributeSet {
    fn default() -> Self {
        Self::new()
    }
}
