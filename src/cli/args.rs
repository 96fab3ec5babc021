//! Command line argument parsing for the Lexis CLI using clap.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};

/// Lexis - streaming text analysis
#[derive(Parser, Debug, Clone)]
#[command(name = "lexis")]
#[command(about = "Tokenize, filter and classify text with configurable analyzers")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct LexisArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human")]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl LexisArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Print the token stream of a text
    Analyze(AnalyzeArgs),

    /// Print the JSON config of a preset analyzer
    Config(ConfigArgs),
}

/// Arguments for analyzing text
#[derive(Parser, Debug, Clone)]
pub struct AnalyzeArgs {
    /// Text to analyze (standard input is read when neither TEXT nor --file is given)
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(short = 'i', long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Built-in analyzer to use
    #[arg(short, long, default_value = "standard")]
    pub preset: String,

    /// Analyzer config file (JSON); overrides --preset
    #[arg(short, long, value_name = "CONFIG_FILE")]
    pub config: Option<PathBuf>,

    /// Treat every input line as a separate document
    #[arg(long)]
    pub lines: bool,
}

/// Arguments for printing a preset config
#[derive(Parser, Debug, Clone)]
pub struct ConfigArgs {
    /// Preset name
    #[arg(value_name = "PRESET", default_value = "standard")]
    pub preset: String,

    /// List the available presets instead
    #[arg(long)]
    pub list: bool,
}

/// Output formats
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}
