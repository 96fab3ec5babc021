//! The pull-based streaming contract shared by tokenizers, filters and chains.
//!
//! A [`TokenStream`] is driven through a fixed lifecycle:
//!
//! ```text
//! Uninitialized --reset--> Reset --increment_token--> Pulling --end--> Ended --close--> Closed
//!                            ^                            |              |
//!                            +-----------reset------------+------reset---+
//! ```
//!
//! Stages do not own the attribute slot. The consumer (normally an
//! [`AnalysisStream`](crate::analysis::chain::AnalysisStream)) owns one
//! [`AttributeSet`] and lends it mutably to the head of the chain on every
//! call; each filter forwards the same reference to its upstream, so all
//! stages observe and mutate one slot without shared ownership.

use crate::analysis::attribute::AttributeSet;
use crate::error::{LexisError, Result};

/// A stage of an analysis pipeline.
///
/// Implemented by every tokenizer, every filter, and by
/// [`FilterChain`](crate::analysis::chain::FilterChain) itself, so chains nest.
pub trait TokenStream: Send {
    /// Prime the stream over fresh input.
    ///
    /// Filters reset their own state and forward the call upstream; the
    /// tokenizer at the source keeps a copy of `input`.
    fn reset(&mut self, input: &str) -> Result<()>;

    /// Advance to the next token, writing it into `attrs`.
    ///
    /// Returns `Ok(false)` once the input is exhausted; the contents of
    /// `attrs` are unspecified in that case.
    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool>;

    /// Signal the end of input and write the final-offset state into `attrs`.
    fn end(&mut self, attrs: &mut AttributeSet) -> Result<()>;

    /// Release resources. Idempotent; valid in every state.
    fn close(&mut self) -> Result<()>;

    /// Name of this stage (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A type-erased stage, used where chains are assembled at runtime.
pub type BoxTokenStream = Box<dyn TokenStream>;

impl<T: TokenStream + ?Sized> TokenStream for Box<T> {
    fn reset(&mut self, input: &str) -> Result<()> {
        (**self).reset(input)
    }

    fn increment_token(&mut self, attrs: &mut AttributeSet) -> Result<bool> {
        (**self).increment_token(attrs)
    }

    fn end(&mut self, attrs: &mut AttributeSet) -> Result<()> {
        (**self).end(attrs)
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Lifecycle state of a stream.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StreamState {
    /// Created, never reset.
    #[default]
    Uninitialized,
    /// Reset over an input, nothing pulled yet.
    Reset,
    /// At least one pull performed.
    Pulling,
    /// `end()` was called.
    Ended,
    /// `close()` was called; terminal.
    Closed,
}

impl StreamState {
    /// Transition for `reset()`.
    pub fn on_reset(&mut self) -> Result<()> {
        if *self == StreamState::Closed {
            return Err(LexisError::StreamClosed);
        }
        *self = StreamState::Reset;
        Ok(())
    }

    /// Transition for `increment_token()`.
    ///
    /// Returns `Ok(false)` when the stream has already ended and the pull
    /// must report exhaustion without touching the input.
    pub fn on_pull(&mut self) -> Result<bool> {
        match self {
            StreamState::Uninitialized => Err(LexisError::NotReset),
            StreamState::Closed => Err(LexisError::StreamClosed),
            StreamState::Ended => Ok(false),
            StreamState::Reset | StreamState::Pulling => {
                *self = StreamState::Pulling;
                Ok(true)
            }
        }
    }

    /// Transition for `end()`.
    pub fn on_end(&mut self) -> Result<()> {
        match self {
            StreamState::Uninitialized => Err(LexisError::NotReset),
            StreamState::Closed => Err(LexisError::StreamClosed),
            _ => {
                *self = StreamState::Ended;
                Ok(())
            }
        }
    }

    /// Transition for `close()`. Returns `false` if already closed.
    pub fn on_close(&mut self) -> bool {
        let was_open = *self != StreamState::Closed;
        *self = StreamState::Closed;
        was_open
    }

    /// Whether `close()` has been called.
    pub fn is_closed(&self) -> bool {
        *self == StreamState::Closed
    }
}
