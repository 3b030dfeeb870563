//! Shared helpers used across CLI commands.
//!
//! Centralises the repetitive pattern of resolving the database path and
//! opening the match store, ensuring consistent defaults everywhere.

use std::sync::Arc;

use wicket_config::WicketConfig;
use wicket_store_sqlite::MatchStore;

/// Opens the SQLite match store.
///
/// An explicit `--db` flag wins over the configured `database.path`.
///
/// # Errors
///
/// Returns an error if the database file cannot be created or opened.
pub fn open_store(db: &Option<String>, config: &WicketConfig) -> anyhow::Result<Arc<MatchStore>> {
    let path = db.clone().unwrap_or_else(|| config.database.path.clone());
    if let Some(parent) = std::path::Path::new(&path).parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let store = MatchStore::open(&path).map_err(|e| anyhow::anyhow!("store error: {e}"))?;
    Ok(Arc::new(store))
}
