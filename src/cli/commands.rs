//! Command implementations for the Lexis CLI.

use std::fs;
use std::io::{self, Read, Write};
use std::time::Instant;

use log::info;
use rayon::prelude::*;

use crate::analysis::analyzer::analyzer::Analyzer;
use crate::analysis::analyzer::pipeline::PipelineAnalyzer;
use crate::analysis::config::{AnalyzerConfig, PRESETS};
use crate::analysis::tokenizer::decode_input;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;

/// Execute a CLI command, writing to standard output.
pub fn execute_command(args: LexisArgs) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    execute_command_to(&args, &mut out)
}

/// Execute a CLI command, writing to `out`.
pub fn execute_command_to<W: Write>(args: &LexisArgs, out: &mut W) -> Result<()> {
    match &args.command {
        Command::Analyze(analyze_args) => analyze(analyze_args, args, out),
        Command::Config(config_args) => show_config(config_args, args, out),
    }
}

/// Analyze text and print its token stream.
fn analyze<W: Write>(args: &AnalyzeArgs, cli_args: &LexisArgs, out: &mut W) -> Result<()> {
    let config = load_config(args)?;
    let analyzer = PipelineAnalyzer::from_config(&config)?;
    let text = read_input(args)?;

    let documents: Vec<&str> = if args.lines {
        text.lines().collect()
    } else {
        vec![text.as_str()]
    };

    let start = Instant::now();
    let analyzed = documents
        .par_iter()
        .map(|document| analyze_document(&analyzer, document))
        .collect::<Result<Vec<_>>>()?;
    info!(
        "analyzed {} documents in {:?}",
        analyzed.len(),
        start.elapsed()
    );

    let stages = analyzer
        .token_stream()?
        .stages()
        .iter()
        .map(|stage| stage.to_string())
        .collect();

    output_result(
        out,
        "Analysis complete",
        &AnalysisResult {
            analyzer: config.name,
            stages,
            documents: analyzed,
        },
        cli_args,
    )
}

/// Run one document through its own stream.
fn analyze_document(analyzer: &PipelineAnalyzer, text: &str) -> Result<DocumentAnalysis> {
    let mut stream = analyzer.token_stream()?;
    stream.reset(text)?;
    let tokens = stream.tokens()?;
    let final_state = stream.end()?;
    stream.close()?;
    Ok(DocumentAnalysis {
        tokens,
        final_state,
    })
}

/// Print a preset config, or the list of presets.
fn show_config<W: Write>(args: &ConfigArgs, cli_args: &LexisArgs, out: &mut W) -> Result<()> {
    if args.list {
        let presets = PresetList {
            presets: PRESETS.iter().map(|p| p.to_string()).collect(),
        };
        return output_result(out, "Available presets", &presets, cli_args);
    }

    let config = AnalyzerConfig::preset(&args.preset)?;
    output_result(out, "Analyzer config", &config, cli_args)
}

fn load_config(args: &AnalyzeArgs) -> Result<AnalyzerConfig> {
    match &args.config {
        Some(path) => {
            info!("loading analyzer config from {}", path.display());
            AnalyzerConfig::from_file(path)
        }
        None => AnalyzerConfig::preset(&args.preset),
    }
}

/// The text argument, or the validated contents of the input file or stdin.
fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(text) = &args.text {
        return Ok(text.clone());
    }

    let bytes = match &args.file {
        Some(path) => fs::read(path)?,
        None => {
            let mut buf = Vec::new();
            io::stdin().lock().read_to_end(&mut buf)?;
            buf
        }
    };
    Ok(decode_input(&bytes)?.to_string())
}
