/*
 * ==========================================================================
 * scssparse - SCSS tokenizer and recursive-descent parser
 * ==========================================================================
 *
 * Dual-licensed under MIT or Apache-2.0, at your option.
 *
 * ==========================================================================
 */

use anyhow::{bail, Context};
use clap::Parser;
use scssparse::diagnostics::DiagnosticPrinter;
use scssparse::file_type::FileType;
use scssparse::{parse_with_config, ParserConfig};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{info, warn, Level};

#[derive(Parser, Debug)]
#[command(name = "scssparse")]
#[command(about = "Parse an SCSS stylesheet and print its syntax tree as JSON")]
struct Cli {
    /// Stylesheet to parse
    input: PathBuf,

    /// JSON parser configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Tokens the lexer may run ahead of the parser
    #[arg(long)]
    channel_capacity: Option<usize>,

    /// Log pipeline activity to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let level = if cli.verbose { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();

    match FileType::from_path(&cli.input) {
        FileType::Scss => {}
        FileType::Sass => bail!("{}: the indented .sass syntax is not supported", cli.input.display()),
        FileType::Unknown => warn!(file = %cli.input.display(), "unrecognized extension, parsing as SCSS"),
    }

    let mut config = match &cli.config {
        Some(path) => ParserConfig::from_json_file(path)?,
        None => ParserConfig::default(),
    };
    if let Some(capacity) = cli.channel_capacity {
        config.channel_capacity = capacity;
    }

    let source = std::fs::read_to_string(&cli.input)
        .with_context(|| format!("failed to read {}", cli.input.display()))?;
    info!(file = %cli.input.display(), bytes = source.len(), ?config, "parsing");

    match parse_with_config(&source, &config) {
        Ok(sheet) => {
            let json = serde_json::to_string_pretty(&sheet).context("failed to serialize syntax tree")?;
            println!("{}", json);
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            DiagnosticPrinter::new(cli.input.display().to_string(), &source).print(&err);
            Ok(ExitCode::FAILURE)
        }
    }
}
