//! Filter chains and the consumer-facing analysis stream.
//!
//! [`FilterChain`] composes a tokenizer with an ordered list of filters and
//! enforces the stream lifecycle at the top of the chain. Because it is a
//! [`TokenStream`] itself, a chain can be the upstream of further filters.
//!
//! [`AnalysisStream`] owns a chain plus the single [`AttributeSet`] the chain
//! writes into, and tracks absolute token positions for the consumer.
//!
//! # Examples
//!
//! ```
//! use lexis::analysis::chain::{AnalysisStream, FilterChain};
//! use lexis::analysis::token_filter::stop::{StopFilter, StopWords};
//! use lexis::analysis::tokenizer::whitespace::WhitespaceTokenizer;
//!
//! let chain = FilterChain::new(WhitespaceTokenizer::new())
//!     .add_filter(|upstream| StopFilter::new(upstream, StopWords::default()));
//! let mut stream = AnalysisStream::new(chain);
//!
//! stream.reset("This is a good morning").unwrap();
//! let tokens = stream.tokens().unwrap();
//! stream.end().unwrap();
//! stream.close().unwrap();
//!
//! let terms: Vec<_> = tokens.iter().map(|t| t.term.as_str()).collect();
//! assert_eq!(terms, ["This", "good", "morning"]);
//! assert_eq!(tokens[1].position_increment, 3);
//! assert_eq!(tokens[1].position, 3);
//! ```

use std::fmt;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::analysis::attribute::AttributeSet;
use crate::analysis::token::Token;
use crate::analysis::token_filter::FilterFactory;
use crate::analysis::token_stream::{BoxTokenStream, StreamState, TokenStream};
use crate::analysis::tokenizer::decode_input;
use crate::error::Result;

/// A tokenizer followed by an ordered sequence of filters.
pub struct FilterChain {
    head: BoxTokenStream,
    stages: Vec<&'static str>,
    state: StreamState,
}

impl FilterChain {
    /// Start a chain at `tokenizer`.
    pub fn new<T: TokenStream + 'static>(tokenizer: T) -> Self {
        FilterChain {
            stages: vec![tokenizer.name()],
            head: Box::new(tokenizer),
            state: StreamState::default(),
        }
    }

    /// Append a filter built around the current head of the chain.
    pub fn add_filter<F, S>(self, wrap: F) -> Self
    where
        F: FnOnce(BoxTokenStream) -> S,
        S: TokenStream + 'static,
    {
        let FilterChain {
            head,
            mut stages,
            state,
        } = self;
        let head = wrap(head);
        stages.push(head.name());
        FilterChain {
            head: Box::new(head),
            stages,
            state,
        }
    }

    /// Append a filter created by `factory`.
    pub fn add_factory(self, factory: &dyn FilterFactory) -> Self {
        self.add_filter(|upstream| factory.wrap(upstream))
    }

    /// Stage names from the tokenizer to the last filter.
    pub fn stages(&self) -> &[&'static str] {
        &self.stages
    }

    /// Current lifecycle state.
    pub fn state(&self) -> StreamState {
        self.state
    }
}

impl TokenStream for FilterChain {
    fn reset(&mut self, input: &str) -> Result<()> {
        self.state.on_reset()?;
        self.head.reset(input)
    }

    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool> {
        let pulled = match self.state.on_pull() {
            Ok(true) => self.head.increment_token(attrs),
            Ok(false) => Ok(false),
            Err(e) => Err(e),
        };
        match pulled {
            Ok(true) => Ok(true),
            other => {
                attrs.clear();
                other
            }
        }
    }

    fn end(&mut self, attrs: &mut AttributeSet) -> Result<()> {
        let ended = self
            .state
            .on_end()
            .and_then(|_| self.head.end(attrs));
        if ended.is_err() {
            attrs.clear();
        }
        ended
    }

    fn close(&mut self) -> Result<()> {
        if self.state.on_close() {
            debug!("closing chain {}", self.stages.join(" -> "));
            self.head.close()?;
        }
        Ok(())
    }

    fn name(&self) -> &'static str {
        "chain"
    }
}

impl fmt::Debug for FilterChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterChain")
            .field("stages", &self.stages)
            .field("state", &self.state)
            .finish()
    }
}

/// Stream state reported by [`AnalysisStream::end`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinalState {
    /// Byte length of the analyzed input.
    pub final_offset: usize,

    /// Positions skipped after the last emitted token (e.g. trailing stop words).
    pub trailing_position_increment: usize,

    /// Number of positions the input occupies, trailing gap included.
    pub position_count: usize,
}

/// The consumer's handle on one analysis run.
///
/// Holds the chain and the attribute slot it writes into. Every pull
/// overwrites the slot; use [`token`](Self::token) to keep a copy.
pub struct AnalysisStream {
    chain: FilterChain,
    attrs: AttributeSet,
    position_sum: usize,
    final_state: Option<FinalState>,
}

impl AnalysisStream {
    /// Wrap a chain.
    pub fn new(chain: FilterChain) -> Self {
        AnalysisStream {
            chain,
            attrs: AttributeSet::new(),
            position_sum: 0,
            final_state: None,
        }
    }

    /// Prime the stream over `text`.
    pub fn reset(&mut self, text: &str) -> Result<()> {
        self.attrs.clear();
        self.position_sum = 0;
        self.final_state = None;
        debug!("reset {} over {} bytes", self.chain.stages.join(" -> "), text.len());
        self.chain.reset(text)
    }

    /// Prime the stream over raw bytes, rejecting malformed UTF-8.
    pub fn reset_bytes(&mut self, bytes: &[u8]) -> Result<()> {
        let text = decode_input(bytes)?;
        self.reset(text)
    }

    /// Advance to the next token.
    pub fn increment_token(&mut self) -> Result<bool> {
        let advanced = self.chain.increment_token(&mut self.attrs)?;
        if advanced {
            self.position_sum += self.attrs.position_increment;
        }
        Ok(advanced)
    }

    /// The current attribute slot. Valid until the next pull.
    pub fn attributes(&self) -> &AttributeSet {
        &self.attrs
    }

    /// Absolute position of the current token.
    pub fn position(&self) -> usize {
        self.position_sum.saturating_sub(1)
    }

    /// Snapshot of the current token.
    pub fn token(&self) -> Token {
        Token::from_attributes(&self.attrs, self.position())
    }

    /// Pull every remaining token as snapshots.
    pub fn tokens(&mut self) -> Result<Vec<Token>> {
        let mut tokens = Vec::new();
        while self.increment_token()? {
            tokens.push(self.token());
        }
        Ok(tokens)
    }

    /// Signal end of input and report the final state.
    pub fn end(&mut self) -> Result<FinalState> {
        self.chain.end(&mut self.attrs)?;
        let state = FinalState {
            final_offset: self.attrs.end_offset,
            trailing_position_increment: self.attrs.position_increment,
            position_count: self.position_sum + self.attrs.position_increment,
        };
        self.final_state = Some(state);
        Ok(state)
    }

    /// The state recorded by the last [`end`](Self::end), if any.
    pub fn final_state(&self) -> Option<FinalState> {
        self.final_state
    }

    /// Release the chain. Idempotent.
    pub fn close(&mut self) -> Result<()> {
        self.chain.close()
    }

    /// Stage names of the underlying chain.
    pub fn stages(&self) -> &[&'static str] {
        self.chain.stages()
    }

    /// Reset over `text`, pull all tokens and end the stream.
    ///
    /// The stream stays open and can be reset again.
    pub fn analyze(&mut self, text: &str) -> Result<Vec<Token>> {
        self.reset(text)?;
        let tokens = self.tokens()?;
        self.end()?;
        Ok(tokens)
    }
}

impl fmt::Debug for AnalysisStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AnalysisStream")
            .field("chain", &self.chain)
            .field("attrs", &self.attrs)
            .field("position", &self.position())
            .finish()
    }
}
