//! Classification filter implementation.
//!
//! Tags each token with a [`Classification`] computed from its (possibly
//! already substituted) term. Matching lower-cases the term; the configured
//! term sets are lower-cased once at construction.
//!
//! When a term appears in more than one set, the set declared first wins.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::attribute::Classification;
//! use lexis::analysis::token_filter::classification::ClassificationSets;
//!
//! let sets = ClassificationSets::gender();
//! assert_eq!(sets.classify("Mister"), Classification::Male);
//! assert_eq!(sets.classify("MRS"), Classification::Female);
//! assert_eq!(sets.classify("Smith"), Classification::Undefined);
//! ```

use std::sync::Arc;

use ahash::AHashSet;
use log::warn;

use crate::analysis::attribute::{AttributeSet, Classification};
use crate::analysis::token_filter::FilterFactory;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::error::Result;

/// One class and the lower-cased terms that belong to it.
#[derive(Clone, Debug)]
struct TermClass {
    classification: Classification,
    terms: AHashSet<String>,
}

/// Ordered, immutable term sets shared by every filter built from them.
#[derive(Clone, Debug)]
pub struct ClassificationSets {
    classes: Arc<[TermClass]>,
}

impl ClassificationSets {
    /// Build the sets from `(class, terms)` pairs, in priority order.
    pub fn from_classes<I, T, S>(classes: I) -> Self
    where
        I: IntoIterator<Item = (Classification, T)>,
        T: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let classes: Vec<TermClass> = classes
            .into_iter()
            .map(|(classification, terms)| TermClass {
                classification,
                terms: terms
                    .into_iter()
                    .map(|t| t.as_ref().to_lowercase())
                    .collect(),
            })
            .collect();

        for (i, earlier) in classes.iter().enumerate() {
            for later in &classes[i + 1..] {
                for term in earlier.terms.intersection(&later.terms) {
                    warn!(
                        "term {term:?} is in both {} and {}; {} takes precedence",
                        earlier.classification, later.classification, earlier.classification
                    );
                }
            }
        }

        ClassificationSets {
            classes: classes.into(),
        }
    }

    /// `Male: {mr, mister}`, `Female: {mrs, misters}`.
    pub fn gender() -> Self {
        Self::from_classes([
            (Classification::Male, ["mr", "mister"]),
            (Classification::Female, ["mrs", "misters"]),
        ])
    }

    /// Classify a term. Pure: depends only on `term` and the configured sets.
    pub fn classify(&self, term: &str) -> Classification {
        let term = term.to_lowercase();
        self.classes
            .iter()
            .find(|class| class.terms.contains(&term))
            .map(|class| class.classification.clone())
            .unwrap_or_default()
    }

    /// The configured classes, in priority order.
    pub fn classes(&self) -> impl Iterator<Item = &Classification> {
        self.classes.iter().map(|class| &class.classification)
    }

    /// Get the number of classes.
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Check if no class is configured.
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }
}

impl Default for ClassificationSets {
    fn default() -> Self {
        Self::gender()
    }
}

impl FilterFactory for ClassificationSets {
    fn wrap(&self, upstream: BoxTokenStream) -> BoxTokenStream {
        Box::new(ClassificationFilter::new(upstream, self.clone()))
    }

    fn filter_name(&self) -> &'static str {
        "classification"
    }
}

/// A filter that writes a classification into every passed token.
#[derive(Debug)]
pub struct ClassificationFilter<S = BoxTokenStream> {
    input: S,
    sets: ClassificationSets,
}

impl<S: TokenStream> ClassificationFilter<S> {
    /// Create a classification filter reading from `input`.
    pub fn new(input: S, sets: ClassificationSets) -> Self {
        ClassificationFilter { input, sets }
    }
}

impl<S: TokenStream> TokenStream for ClassificationFilter<S> {
    fn reset(&mut self, input: &str) -> Result<()> {
        self.input.reset(input)
    }

    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool> {
        if !self.input.increment_token(attrs)? {
            return Ok(false);
        }
        attrs.classification = self.sets.classify(&attrs.term);
        Ok(true)
    }

    fn end(&mut self, attrs: &mut AttributeSet) -> Result<()> {
        self.input.end(attrs)
    }

    fn close(&mut self) -> Result<()> {
        self.input.close()
    }

    fn name(&self) -> &'static str {
        "classification"
    }
}
