//! Token filter implementations for token transformation.
//!
//! A filter is a [`TokenStream`](crate::analysis::token_stream::TokenStream)
//! that owns its upstream stage and rewrites or skips the shared attribute
//! slot on every pull.
//!
//! # Available Filters
//!
//! - [`stop::StopFilter`] - Drops stop words and repairs position increments
//! - [`substitution::SubstitutionFilter`] - Rewrites mapped terms in place
//! - [`classification::ClassificationFilter`] - Tags tokens with a class
//! - [`lowercase::LowercaseFilter`] - Lower-cases terms
//!
//! Filters are generic over their upstream, so a chain can be composed
//! statically:
//!
//! ```
//! use lexis::analysis::attribute::{AttributeSet, Classification};
//! use lexis::analysis::token_filter::classification::{ClassificationFilter, ClassificationSets};
//! use lexis::analysis::token_filter::substitution::{SubstitutionFilter, TermSubstitutions};
//! use lexis::analysis::token_stream::TokenStream;
//! use lexis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let mut stream = ClassificationFilter::new(
//!     SubstitutionFilter::new(WhitespaceTokenizer::new(), TermSubstitutions::courtesy_titles()),
//!     ClassificationSets::gender(),
//! );
//! let mut attrs = AttributeSet::new();
//!
//! stream.reset("Mrs Smith").unwrap();
//! assert!(stream.increment_token(&mut attrs).unwrap());
//! assert_eq!(attrs.term, "misters");
//! assert_eq!(attrs.classification, Classification::Female);
//! ```
//!
//! For chains assembled at runtime, each filter's shared configuration
//! implements [`FilterFactory`].

use crate::analysis::token_stream::BoxTokenStream;

pub mod classification;
pub mod lowercase;
pub mod stop;
pub mod substitution;

pub use classification::{ClassificationFilter, ClassificationSets};
pub use lowercase::{Lowercase, LowercaseFilter};
pub use stop::{StopFilter, StopWords};
pub use substitution::{SubstitutionFilter, TermSubstitutions};

/// Wraps an upstream stage in a new filter instance.
///
/// Implemented by the immutable configuration of each filter (stop-word set,
/// substitution map, class sets). The configuration is shared by every
/// stream it creates, so one factory serves any number of concurrent runs.
pub trait FilterFactory: Send + Sync {
    /// Create a filter reading from `upstream`.
    fn wrap(&self, upstream: BoxTokenStream) -> BoxTokenStream;

    /// Name of the filter this factory creates.
    fn filter_name(&self) -> &'static str;
}
