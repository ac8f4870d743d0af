//! Point-by-point CLI
//!
//! Loads a match CSV and prints the analysis of one match, a multi-match
//! summary, or the match index as JSON on stdout. Logs go to stderr.

use anyhow::Result;
use clap::{Parser, Subcommand};
use pbp_cli::{list_matches, load_dataset, resolve_config};
use pbp_core::DEFAULT_SUMMARY_LIMIT;
use serde::Serialize;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pbp")]
#[command(about = "Reconstruct tennis matches from point-by-point notation", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true, default_value = "false")]
    pretty: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyze one match of the dataset
    Analyze {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,

        /// 0-based row index of the match
        #[arg(long, default_value = "0")]
        index: usize,

        /// Analyzer config JSON (falls back to PBP_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Aggregate statistics over the first matches that carry notation
    Summary {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,

        /// Maximum number of matches to analyze
        #[arg(long, default_value_t = DEFAULT_SUMMARY_LIMIT)]
        limit: usize,

        /// Analyzer config JSON (falls back to PBP_CONFIG_PATH)
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// List the matches in the dataset
    List {
        /// Input CSV file path
        #[arg(long)]
        csv: PathBuf,
    },
}

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Analyze { csv, index, config } => {
            let config = resolve_config(config.as_deref())?;
            let dataset = load_dataset(&csv)?;
            let analysis = dataset.analyze_at(index, &config)?;
            print_json(&analysis, cli.pretty)?;
        }

        Commands::Summary { csv, limit, config } => {
            let config = resolve_config(config.as_deref())?;
            let dataset = load_dataset(&csv)?;
            print_json(&dataset.summarize(limit, &config), cli.pretty)?;
        }

        Commands::List { csv } => {
            let dataset = load_dataset(&csv)?;
            print_json(&list_matches(&dataset), cli.pretty)?;
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
