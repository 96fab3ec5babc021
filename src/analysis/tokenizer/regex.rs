//! Regex-based tokenizer implementation.

use std::sync::Arc;

use regex::Regex;

use crate::analysis::attribute::AttributeSet;
use crate::analysis::token_stream::TokenStream;
use crate::analysis::tokenizer::TokenizerInput;
use crate::error::{LexisError, Result};

/// A tokenizer that emits every non-empty match of a regular expression.
///
/// The default pattern `\w+` makes any run of non-word characters a
/// separator. The compiled pattern is shared between clones.
#[derive(Clone, Debug)]
pub struct RegexTokenizer {
    /// The regex pattern used to extract tokens
    pattern: Arc<Regex>,
    input: TokenizerInput,
}

impl RegexTokenizer {
    /// Create a new regex tokenizer with the default pattern `\w+`.
    pub fn new() -> Result<Self> {
        Self::with_pattern(r"\w+")
    }

    /// Create a new regex tokenizer with a custom pattern.
    pub fn with_pattern(pattern: &str) -> Result<Self> {
        let regex = Regex::new(pattern)
            .map_err(|e| LexisError::analysis(format!("Invalid regex pattern: {e}")))?;

        Ok(RegexTokenizer {
            pattern: Arc::new(regex),
            input: TokenizerInput::default(),
        })
    }

    /// A fresh tokenizer sharing this one's compiled pattern.
    pub fn unprimed(&self) -> Self {
        RegexTokenizer {
            pattern: Arc::clone(&self.pattern),
            input: TokenizerInput::default(),
        }
    }

    /// Get the regex pattern used by this tokenizer.
    pub fn pattern(&self) -> &str {
        self.pattern.as_str()
    }
}

impl Default for RegexTokenizer {
    fn default() -> Self {
        Self::new().expect("Default regex pattern should be valid")
    }
}

/// Next non-empty match of `pattern` at or after `from`.
fn find_match(pattern: &Regex, text: &str, mut from: usize) -> Option<(usize, usize)> {
    while from <= text.len() {
        let mat = pattern.find_at(text, from)?;
        if mat.start() < mat.end() {
            return Some((mat.start(), mat.end()));
        }
        // Step over the empty match to the next char boundary.
        from = mat.end() + text[mat.end()..].chars().next()?.len_utf8();
    }
    None
}

impl TokenStream for RegexTokenizer {
    fn reset(&mut self, input: &str) -> Result<()> {
        self.input.reset(input)
    }

    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool> {
        let pattern = &self.pattern;
        self.input
            .next_term(attrs, |text, from| find_match(pattern, text, from))
    }

    fn end(&mut self, attrs: &mut AttributeSet) -> Result<()> {
        self.input.end(attrs)
    }

    fn close(&mut self) -> Result<()> {
        self.input.close();
        Ok(())
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
