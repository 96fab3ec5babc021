//! Output formatting for CLI commands.

use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::analysis::chain::FinalState;
use crate::analysis::config::AnalyzerConfig;
use crate::analysis::token::Token;
use crate::cli::args::{LexisArgs, OutputFormat};
use crate::error::Result;

/// Tokens and final state of one analyzed document.
#[derive(Debug, Serialize, Deserialize)]
pub struct DocumentAnalysis {
    pub tokens: Vec<Token>,
    pub final_state: FinalState,
}

/// Result structure for the `analyze` command.
#[derive(Debug, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub analyzer: String,
    pub stages: Vec<String>,
    pub documents: Vec<DocumentAnalysis>,
}

/// Result structure for `config --list`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PresetList {
    pub presets: Vec<String>,
}

/// Plain-text rendering of a command result.
pub trait HumanReadable {
    fn write_human(&self, out: &mut dyn Write) -> Result<()>;
}

impl HumanReadable for AnalysisResult {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "Analyzer: {} ({})", self.analyzer, self.stages.join(" -> "))?;

        for (i, document) in self.documents.iter().enumerate() {
            writeln!(out)?;
            if self.documents.len() > 1 {
                writeln!(out, "Document {}:", i + 1)?;
            }
            writeln!(
                out,
                "{:>5} {:>5} {:>12}  {:<10} term",
                "pos", "inc", "offsets", "class"
            )?;
            for token in &document.tokens {
                writeln!(
                    out,
                    "{:>5} {:>5} {:>12}  {:<10} {}",
                    token.position,
                    token.position_increment,
                    format!("{}..{}", token.start_offset, token.end_offset),
                    token.classification.name(),
                    token.term
                )?;
            }

            let state = &document.final_state;
            writeln!(
                out,
                "{} tokens, {} positions, final offset {}, trailing increment {}",
                document.tokens.len(),
                state.position_count,
                state.final_offset,
                state.trailing_position_increment
            )?;
        }
        Ok(())
    }
}

impl HumanReadable for AnalyzerConfig {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{}", self.to_json(true)?)?;
        Ok(())
    }
}

impl HumanReadable for PresetList {
    fn write_human(&self, out: &mut dyn Write) -> Result<()> {
        for preset in &self.presets {
            writeln!(out, "{preset}")?;
        }
        Ok(())
    }
}

/// Output a result in the specified format.
pub fn output_result<W, T>(out: &mut W, message: &str, result: &T, args: &LexisArgs) -> Result<()>
where
    W: Write,
    T: Serialize + HumanReadable,
{
    match args.output_format {
        OutputFormat::Human => output_human(out, message, result, args),
        OutputFormat::Json => output_json(out, result, args),
    }
}

/// Output in human-readable format.
fn output_human<W: Write, T: HumanReadable>(
    out: &mut W,
    message: &str,
    result: &T,
    args: &LexisArgs,
) -> Result<()> {
    if args.verbosity() > 1 {
        writeln!(out, "{message}")?;
        writeln!(out)?;
    }
    result.write_human(out)
}

/// Output in JSON format.
fn output_json<W: Write, T: Serialize>(out: &mut W, result: &T, args: &LexisArgs) -> Result<()> {
    if args.pretty {
        serde_json::to_writer_pretty(&mut *out, result)?;
    } else {
        serde_json::to_writer(&mut *out, result)?;
    }
    writeln!(out)?;
    Ok(())
}
