//! `wicket status` command.
//!
//! Reports row counts for every table in the match database.

use clap::Args;

use wicket_config::WicketConfig;

use crate::shared;

/// Show database row counts.
#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Database path (defaults to the configured database.path).
    #[arg(long)]
    pub db: Option<String>,
}

/// Executes the status command.
pub fn execute(args: &StatusArgs, config: &WicketConfig) -> anyhow::Result<()> {
    let store = shared::open_store(&args.db, config)?;

    let rows = store
        .query(
            "SELECT (SELECT COUNT(*) FROM matches) AS matches, \
                    (SELECT COUNT(*) FROM deliveries) AS deliveries, \
                    (SELECT COUNT(*) FROM innings) AS innings, \
                    (SELECT COUNT(*) FROM officials) AS officials, \
                    (SELECT COUNT(*) FROM teams) AS teams, \
                    (SELECT COUNT(*) FROM players) AS players",
            &[],
        )
        .map_err(|e| anyhow::anyhow!("store error: {e}"))?;

    println!("database: {}", store.path().display());
    if let Some(counts) = rows.first() {
        for (table, count) in counts {
            println!("{table:>12}: {count}");
        }
    }
    Ok(())
}
