//! Analyzer implementations that combine tokenizers and filters.

pub mod analyzer;
pub mod batch;
pub mod courtesy_title;
pub mod pipeline;
pub mod simple;
pub mod standard;

pub use analyzer::Analyzer;
pub use batch::analyze_batch;
pub use courtesy_title::CourtesyTitleAnalyzer;
pub use pipeline::PipelineAnalyzer;
pub use simple::SimpleAnalyzer;
pub use standard::StandardAnalyzer;
