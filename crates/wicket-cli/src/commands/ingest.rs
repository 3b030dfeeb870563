//! `wicket ingest` command.
//!
//! Loads a directory of cricsheet ball-by-ball JSON files into the match
//! database. Re-running over the same files is idempotent.

use std::path::Path;

use clap::Args;

use wicket_config::WicketConfig;
use wicket_store_sqlite::ingest_dir;

use crate::{output, shared};

/// Load cricsheet match JSON files into the database.
#[derive(Debug, Args)]
pub struct IngestArgs {
    /// Directory containing cricsheet match JSON files.
    pub data_dir: String,
    /// Database path (defaults to the configured database.path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the ingest command.
pub fn execute(args: &IngestArgs, config: &WicketConfig) -> anyhow::Result<()> {
    let store = shared::open_store(&args.db, config)?;

    let report = ingest_dir(&store, Path::new(&args.data_dir))
        .map_err(|e| anyhow::anyhow!("ingest error: {e}"))?;

    output::print_success(&format!(
        "loaded {} matches: {} deliveries, {} innings, {} officials, {} teams, {} players",
        report.matches,
        report.deliveries,
        report.innings,
        report.officials,
        report.teams,
        report.players,
    ));
    if report.failed_files > 0 {
        output::print_error(&format!("{} file(s) failed to load", report.failed_files));
    }
    Ok(())
}
