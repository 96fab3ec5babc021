//! Text analysis module for Lexis.
//!
//! This module provides the streaming analysis pipeline: tokenizers, the
//! shared attribute slot, stateful token filters, filter chains and the
//! analyzers that assemble them.

pub mod analyzer;
pub mod attribute;
pub mod chain;
pub mod config;
pub mod token;
pub mod token_filter;
pub mod token_stream;
pub mod tokenizer;
