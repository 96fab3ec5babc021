//! Term substitution filter implementation.
//!
//! Rewrites recognized terms to a canonical expansion, one token in, one
//! token out. Offsets and position increments are left untouched.

use std::sync::Arc;

use ahash::AHashMap;
use log::warn;

use crate::analysis::attribute::AttributeSet;
use crate::analysis::token_filter::FilterFactory;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::error::Result;

/// Courtesy titles and their expansions.
pub const COURTESY_TITLES: &[(&str, &str)] = &[("Dr", "doctor"), ("Mr", "mister"), ("Mrs", "misters")];

/// An immutable, shareable term mapping. Keys match exactly (case-sensitive).
#[derive(Clone, Debug)]
pub struct TermSubstitutions {
    mappings: Arc<AHashMap<String, String>>,
}

impl TermSubstitutions {
    /// Create a mapping from `(term, replacement)` pairs.
    ///
    /// A replacement that is itself a key makes the filter non-idempotent; it
    /// is accepted but logged.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mappings: AHashMap<String, String> = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), v.into()))
            .collect();

        for (key, value) in &mappings {
            if mappings.contains_key(value) {
                warn!("substitution {key:?} -> {value:?} produces another mapped term");
            }
        }

        TermSubstitutions {
            mappings: Arc::new(mappings),
        }
    }

    /// `Dr → doctor`, `Mr → mister`, `Mrs → misters`.
    pub fn courtesy_titles() -> Self {
        Self::from_pairs(COURTESY_TITLES.iter().copied())
    }

    /// Look up the replacement for `term`.
    pub fn get(&self, term: &str) -> Option<&str> {
        self.mappings.get(term).map(String::as_str)
    }

    /// Get the number of mappings.
    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    /// Check if the mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

impl Default for TermSubstitutions {
    fn default() -> Self {
        Self::courtesy_titles()
    }
}

impl FilterFactory for TermSubstitutions {
    fn wrap(&self, upstream: BoxTokenStream) -> BoxTokenStream {
        Box::new(SubstitutionFilter::new(upstream, self.clone()))
    }

    fn filter_name(&self) -> &'static str {
        "substitution"
    }
}

/// A filter that replaces mapped terms with their expansion.
#[derive(Debug)]
pub struct SubstitutionFilter<S = BoxTokenStream> {
    input: S,
    substitutions: TermSubstitutions,
}

impl<S: TokenStream> SubstitutionFilter<S> {
    /// Create a substitution filter reading from `input`.
    pub fn new(input: S, substitutions: TermSubstitutions) -> Self {
        SubstitutionFilter {
            input,
            substitutions,
        }
    }
}

impl<S: TokenStream> TokenStream for SubstitutionFilter<S> {
    fn reset(&mut self, input: &str) -> Result<()> {
        self.input.reset(input)
    }

    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool> {
        if !self.input.increment_token(attrs)? {
            return Ok(false);
        }
        if let Some(replacement) = self.substitutions.get(&attrs.term) {
            attrs.replace_term(replacement);
        }
        Ok(true)
    }

    fn end(&mut self, attrs: &mut AttributeSet) -> Result<()> {
        self.input.end(attrs)
    }

    fn close(&mut self) -> Result<()> {
        self.input.close()
    }

    fn name(&self) -> &'static str {
        "substitution"
    }
}
