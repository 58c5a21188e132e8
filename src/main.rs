use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use reidle::config::{AppConfig, OutputFormat};
use reidle::share::{parse_share, Header};
use reidle::verdict::{classify, Verdict};

/// Classify a pasted Wordle share.
#[derive(Parser)]
#[command(name = "reidle", about = "Classify a pasted Wordle share grid", version)]
struct Cli {
    /// File holding the paste; reads stdin when absent or "-"
    input: Option<PathBuf>,

    /// Path to TOML configuration file
    #[arg(long, default_value = "reidle.toml")]
    config: PathBuf,

    /// Override the output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print the decoded grid above the verdict
    #[arg(long)]
    show_grid: bool,

    /// Log classifier decisions to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Serialize)]
struct Report<'a> {
    header: Option<&'a Header>,
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<String>,
    verdict: &'a Verdict,
    description: String,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let mut config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.show_grid {
        config.output.show_grid = true;
    }

    let raw = read_input(cli.input.as_deref())?;
    let share = parse_share(&raw, &config.alphabet()).context("could not read a grid from the paste")?;
    let verdict = classify(&share.grid);
    tracing::info!(rounds = share.grid.num_rounds(), win = verdict.is_win(), "classified paste");

    match config.output.format {
        OutputFormat::Text => {
            if config.output.show_grid {
                println!("{}\n", share.grid);
            }
            println!("{verdict}");
        }
        OutputFormat::Json => {
            let report = Report {
                header: share.header.as_ref(),
                grid: config.output.show_grid.then(|| share.grid.to_string()),
                verdict: &verdict,
                description: verdict.describe(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}

fn read_input(path: Option<&std::path::Path>) -> Result<String> {
    match path {
        Some(path) if path.as_os_str() != "-" => std::fs::read_to_string(path)
            .with_context(|| format!("reading paste from {}", path.display())),
        _ => {
            let mut raw = String::new();
            std::io::stdin()
                .read_to_string(&mut raw)
                .context("reading paste from stdin")?;
            Ok(raw)
        }
    }
}
