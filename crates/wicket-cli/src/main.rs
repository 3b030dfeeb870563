//! Wicket CLI - cricket match statistics over MCP.

use clap::{Parser, Subcommand};
use tracing_subscriber::fmt::format::FmtSpan;

mod commands;
mod output;
pub(crate) mod shared;

/// Wicket - cricket match statistics MCP server.
#[derive(Debug, Parser)]
#[command(name = "wicket", version, about)]
struct Cli {
    /// Configuration file path.
    #[arg(short, long, global = true)]
    config: Option<String>,

    /// Verbosity level (-v, -vv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Log output format: plain (default) or json (for log aggregation).
    #[arg(long, global = true, default_value = "plain", value_parser = ["plain", "json"])]
    log_format: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Load cricsheet match JSON files into the database.
    Ingest(commands::ingest::IngestArgs),
    /// Start the MCP server over stdio.
    Serve(commands::serve::ServeArgs),
    /// Show database row counts.
    Status(commands::status::StatusArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = wicket_config::load_config(cli.config.as_deref())?;

    // Logs go to stderr: stdout is the protocol channel in serve mode.
    let filter = match cli.verbose {
        0 => config.logging.level.clone(),
        1 => "debug".to_string(),
        _ => "trace".to_string(),
    };
    match cli.log_format.as_str() {
        "json" => tracing_subscriber::fmt()
            .with_env_filter(filter.as_str())
            .with_writer(std::io::stderr)
            .json()
            .with_target(true)
            .with_span_events(FmtSpan::CLOSE)
            .init(),
        _ => tracing_subscriber::fmt()
            .with_env_filter(filter.as_str())
            .with_writer(std::io::stderr)
            .init(),
    };

    tracing::debug!(config = ?cli.config, "wicket starting");

    match &cli.command {
        Commands::Ingest(args) => commands::ingest::execute(args, &config),
        Commands::Serve(args) => commands::serve::execute(args, &config).await,
        Commands::Status(args) => commands::status::execute(args, &config),
    }
}
