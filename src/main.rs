mod analysis;
mod config;
mod input;
mod report;

use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, info, info_span};
use tracing_subscriber::EnvFilter;

use config::OutputFormat;
use input::QuerySource;

/// SQL Risk — heuristically grades a SQL query for performance,
/// scalability, and maintainability risks.
#[derive(Parser, Debug)]
#[command(name = "sql-risk", version, about)]
struct Cli {
    /// Query text. Read from --file or stdin when omitted.
    #[arg(conflicts_with = "file")]
    query: Option<String>,

    /// Read the query from a file
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Optional output file path for markdown report
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Stdout format (defaults to the config file, then terminal)
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Print only the grade and score; the query is analyzed as-is
    #[arg(long, conflicts_with_all = ["output", "format", "delay_ms"])]
    inline: bool,

    /// Pause before analyzing, in milliseconds (Ctrl-C cancels)
    #[arg(long)]
    delay_ms: Option<u64>,

    /// Use this config file instead of ./.sql-risk.toml
    #[arg(short, long)]
    config: Option<PathBuf>,
}

#[derive(Debug, Error)]
enum RunError {
    #[error("Analysis cancelled")]
    Cancelled,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("loading configuration");
    let config = match cli.config.as_deref() {
        Some(path) => config::Config::load_from(path)?,
        None => config::Config::load()?,
    };

    let source = QuerySource::from_args(cli.query, cli.file);
    let _main_span = info_span!("query_analyze", source = %source.name()).entered();

    info!("reading query");
    let raw = input::read_query(&source)?;

    if cli.inline {
        let result = analysis::analyze(&raw);
        println!("{}", report::inline_summary(&result));
        return Ok(());
    }

    let query = input::require_query(&raw)?;
    let delay = cli.delay_ms.map(Duration::from_millis).unwrap_or_else(|| config.delay());
    wait_before_analysis(delay).await?;

    info!("analyzing query");
    let result = analysis::analyze(query);
    debug!(risks = result.risks.len(), "analysis complete");

    info!("generating report");
    let format = cli.format.unwrap_or_else(|| config.format());
    report::output(&result, format, cli.output.as_deref())?;
    info!(grade = %result.grade, score = result.total_score, "done");

    Ok(())
}

/// Cosmetic "analyzing" pause. Ctrl-C during the wait aborts before any
/// analysis runs.
async fn wait_before_analysis(delay: Duration) -> Result<(), RunError> {
    if delay.is_zero() {
        return Ok(());
    }

    eprintln!("{}", "Analyzing…".dimmed());
    tokio::select! {
        _ = tokio::time::sleep(delay) => Ok(()),
        _ = tokio::signal::ctrl_c() => {
            info!("interrupted during delay");
            Err(RunError::Cancelled)
        }
    }
}
