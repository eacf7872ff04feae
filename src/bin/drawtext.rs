//! drawtext CLI: pull text labels out of an Excalidraw drawing.
//!
//! Usage:
//!   drawtext [--source path] [--output path] [--skip n] [--config file] [-v...]

use clap::{ArgAction, Parser};
use drawtext::{run, ConfigError, ConfigFile, ExtractConfig, ExtractResult, ExtractionReport};
use std::path::PathBuf;
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "drawtext",
    version,
    about = "Extract text labels from an Excalidraw drawing into a numbered list"
)]
struct Cli {
    /// Drawing document to scan
    #[arg(long, short = 's', value_name = "PATH")]
    source: Option<PathBuf>,
    /// Text file to write (overwritten)
    #[arg(long, short = 'o', value_name = "PATH")]
    output: Option<PathBuf>,
    /// Number of leading lines to ignore
    #[arg(long, value_name = "N")]
    skip: Option<usize>,
    /// YAML config file (defaults to the per-user config if present)
    #[arg(long, short = 'c', value_name = "FILE")]
    config: Option<PathBuf>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .init();
}

/// Layer defaults, config file and flags, in increasing precedence.
fn resolve_config(cli: &Cli) -> Result<ExtractConfig, ConfigError> {
    let mut config = ExtractConfig::default();

    let file_path = match &cli.config {
        Some(path) => Some(path.clone()),
        None => ConfigFile::default_path().filter(|p| p.is_file()),
    };
    if let Some(path) = file_path {
        tracing::info!(path = %path.display(), "loading config");
        config = config.apply(ConfigFile::load(&path)?);
    }

    if let Some(source) = &cli.source {
        config = config.with_source(source);
    }
    if let Some(output) = &cli.output {
        config = config.with_output(output);
    }
    if let Some(skip) = cli.skip {
        config = config.with_skip_lines(skip);
    }
    Ok(config)
}

fn execute(cli: &Cli) -> ExtractResult<ExtractionReport> {
    let config = resolve_config(cli)?;
    run(&config)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let code = match execute(&cli) {
        Ok(report) => {
            println!(
                "Extracted {} text values to {}",
                report.records(),
                report.output.display()
            );
            0
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    };
    std::process::exit(code);
}
