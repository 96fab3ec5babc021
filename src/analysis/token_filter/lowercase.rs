//! Lowercase filter implementation.
//!
//! Converts every term to lowercase for case-insensitive matching. Placing it
//! ahead of a [`StopFilter`](super::stop::StopFilter) makes stop-word matching
//! case-insensitive as well.

use crate::analysis::attribute::AttributeSet;
use crate::analysis::token_filter::FilterFactory;
use crate::analysis::token_stream::{BoxTokenStream, TokenStream};
use crate::error::Result;

/// Factory for [`LowercaseFilter`]; the filter has no configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct Lowercase;

impl FilterFactory for Lowercase {
    fn wrap(&self, upstream: BoxTokenStream) -> BoxTokenStream {
        Box::new(LowercaseFilter::new(upstream))
    }

    fn filter_name(&self) -> &'static str {
        "lowercase"
    }
}

/// A filter that converts terms to lowercase in place.
#[derive(Debug)]
pub struct LowercaseFilter<S = BoxTokenStream> {
    input: S,
}

impl<S: TokenStream> LowercaseFilter<S> {
    /// Create a new lowercase filter reading from `input`.
    pub fn new(input: S) -> Self {
        LowercaseFilter { input }
    }
}

impl<S: TokenStream> TokenStream for LowercaseFilter<S> {
    fn reset(&mut self, input: &str) -> Result<()> {
        self.input.reset(input)
    }

    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool> {
        if !self.input.increment_token(attrs)? {
            return Ok(false);
        }
        if attrs.term.is_ascii() {
            attrs.term.make_ascii_lowercase();
        } else {
            let lowered = attrs.term.to_lowercase();
            if lowered != attrs.term {
                attrs.replace_term(&lowered);
            }
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
        "lowercase"
    }
}
