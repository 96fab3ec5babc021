//! # Lexis
//!
//! A streaming text-analysis pipeline for Rust.
//!
//! ## Features
//!
//! - Lazy, pull-based tokenizers with byte offsets
//! - Stop-word removal that keeps phrase positions intact
//! - Term substitution and term classification filters
//! - Nestable filter chains with an enforced stream lifecycle
//! - JSON-configurable analyzers and parallel batch analysis
//!
//! ## Example
//!
//! ```
//! use lexis::prelude::*;
//!
//! let analyzer = StandardAnalyzer::new();
//! let tokens = analyzer.analyze("This is a good morning").unwrap();
//!
//! assert_eq!(tokens[0].term, "good");
//! assert_eq!(tokens[0].position, 3);
//! ```

pub mod analysis;
pub mod cli;
pub mod error;

pub mod prelude {
    pub use crate::analysis::analyzer::{
        Analyzer, CourtesyTitleAnalyzer, PipelineAnalyzer, SimpleAnalyzer, StandardAnalyzer,
        analyze_batch,
    };
    pub use crate::analysis::attribute::{AttributeSet, Classification};
    pub use crate::analysis::chain::{AnalysisStream, FilterChain, FinalState};
    pub use crate::analysis::config::AnalyzerConfig;
    pub use crate::analysis::token::Token;
    pub use crate::analysis::token_stream::TokenStream;
    pub use crate::error::{LexisError, Result};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
