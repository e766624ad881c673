mod config;
mod input;
mod output;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::Value;
use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use suggest_common::normalization::CandidateKind;
use suggest_common::{compare_candidates, highlight_candidates, ClusterConfig, Granularity};
use tracing_subscriber::EnvFilter;

use crate::config::{FileConfig, Overrides};
use crate::input::{Extraction, InputError};
use crate::output::Format;

#[derive(Parser)]
#[command(name = "suggest-diff")]
#[command(about = "Group near-duplicate edit suggestions and highlight their differences")]
struct Cli {
    /// Config file (default: ~/.config/suggest-diff/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Similarity threshold in [0, 1]; overrides the config file
    #[arg(long, global = true)]
    threshold: Option<f64>,
    /// Diff unit; overrides the config file
    #[arg(long, global = true, value_enum)]
    granularity: Option<GranularityArg>,
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
    /// Use candidates exactly as given (no whitespace/Unicode normalization)
    #[arg(long, global = true)]
    raw: bool,
    /// Which field the candidates come from; sets the length cap
    #[arg(long, global = true, value_enum, default_value_t = KindArg::Title)]
    kind: KindArg,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print one rendered line per candidate
    Highlight {
        #[command(flatten)]
        source: SourceArgs,
    },
    /// Write the full comparison report
    Report {
        #[command(flatten)]
        source: SourceArgs,
        /// Report encoding
        #[arg(long, short, value_enum, default_value_t = Format::Json)]
        format: Format,
        /// Output file (default: stdout)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// Process a JSON array of candidate arrays, one comparison per element
    Batch {
        /// Input JSON file (default: stdin)
        #[arg(long, short)]
        input: Option<String>,
    },
    /// Write the default config as TOML
    InitConfig {
        /// Output file (default: ~/.config/suggest-diff/config.toml)
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
}

#[derive(Args)]
struct SourceArgs {
    /// Input file (default: stdin)
    #[arg(long, short)]
    input: Option<String>,
    /// Read a JSON array of strings instead of one candidate per line
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum GranularityArg {
    Char,
    Word,
}

impl From<GranularityArg> for Granularity {
    fn from(g: GranularityArg) -> Self {
        match g {
            GranularityArg::Char => Granularity::Char,
            GranularityArg::Word => Granularity::Word,
        }
    }
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum KindArg {
    Title,
    Description,
}

impl From<KindArg> for CandidateKind {
    fn from(k: KindArg) -> Self {
        match k {
            KindArg::Title => CandidateKind::Title,
            KindArg::Description => CandidateKind::Description,
        }
    }
}

impl Cli {
    fn extraction(&self, json: bool) -> Extraction {
        Extraction {
            json,
            raw: self.raw,
            kind: self.kind.into(),
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(io::stderr().is_terminal())
        .with_writer(io::stderr)
        .init();
}

fn load_config(cli: &Cli) -> Result<ClusterConfig, Box<dyn std::error::Error>> {
    let file = config::load(cli.config.as_deref())?;
    let overrides = Overrides {
        threshold: cli.threshold,
        granularity: cli.granularity.map(Into::into),
    };
    Ok(file.resolve(&overrides)?)
}

fn read_candidates(
    source: &SourceArgs,
    extraction: Extraction,
) -> Result<Vec<String>, InputError> {
    let text = input::read_source(source.input.as_deref())?;
    let candidates = input::parse_candidates(&text, extraction)?;
    tracing::info!("Read {} candidates", candidates.len());
    Ok(candidates)
}

fn highlight(
    source: &SourceArgs,
    extraction: Extraction,
    config: &ClusterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let candidates = read_candidates(source, extraction)?;
    let mut out = io::stdout().lock();
    for line in highlight_candidates(&candidates, config) {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn report(
    source: &SourceArgs,
    extraction: Extraction,
    format: Format,
    output: Option<&PathBuf>,
    config: &ClusterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let candidates = read_candidates(source, extraction)?;
    let report = compare_candidates(&candidates, config);
    tracing::info!(
        "Compared {} candidates into {} pools",
        report.candidates.len(),
        report.pools.len()
    );

    let bytes = crate::output::encode_report(&report, format)?;

    match output {
        Some(path) => {
            fs::write(path, &bytes)?;
            println!("Report written to: {} ({} bytes)", path.display(), bytes.len());
        }
        None => io::stdout().lock().write_all(&bytes)?,
    }
    Ok(())
}

fn batch(
    input_path: Option<&str>,
    extraction: Extraction,
    config: &ClusterConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    let text = input::read_source(input_path)?;
    let value: Value = serde_json::from_str(&text)?;
    let results = input::highlight_groups(&value, extraction, config)?;

    let mut out = io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &results)?;
    writeln!(out)?;
    Ok(())
}

fn init_config(output: Option<PathBuf>) -> Result<(), Box<dyn std::error::Error>> {
    let path = output
        .or_else(config::default_config_path)
        .ok_or("Could not find config directory")?;

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    fs::write(&path, toml::to_string(&FileConfig::defaults())?)?;
    println!("Config written to: {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Commands::InitConfig { output } = &cli.command {
        return init_config(output.clone());
    }

    let config = load_config(&cli)?;
    tracing::debug!(
        "Using threshold={} granularity={:?}",
        config.threshold.value(),
        config.granularity
    );

    match &cli.command {
        Commands::Highlight { source } => {
            highlight(source, cli.extraction(source.json), &config)
        }
        Commands::Report {
            source,
            format,
            output,
        } => report(
            source,
            cli.extraction(source.json),
            *format,
            output.as_ref(),
            &config,
        ),
        Commands::Batch { input } => batch(input.as_deref(), cli.extraction(true), &config),
        Commands::InitConfig { .. } => Ok(()),
    }
}
