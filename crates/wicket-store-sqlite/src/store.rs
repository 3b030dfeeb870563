//! SQLite-backed match store with per-query connection lifetime.

use std::path::{Path, PathBuf};

use rusqlite::Connection;
use thiserror::Error;
use tracing::error;

use crate::migrations;
use crate::value::column_to_json;

/// One result row: ordered mapping from column name to JSON value.
///
/// Column order is preserved (`serde_json/preserve_order`), so serialized
/// results are stable across identical queries.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// Errors from the store layer.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The database file could not be opened or created.
    #[error("cannot open database at '{path}': {message}")]
    Open { path: String, message: String },
    /// Schema migration failed.
    #[error("migration failed: {message}")]
    Migration { message: String },
    /// A query failed to prepare or execute.
    #[error("query failed: {message}")]
    Query { message: String },
}

/// Read access to the cricket match database.
///
/// Each query opens its own connection and closes it when done, so there
/// is no shared connection state to guard; the migration pass at `open`
/// is the only write this type performs.
pub struct MatchStore {
    path: PathBuf,
}

impl MatchStore {
    /// Opens the store at `path`, creating the file and running any
    /// pending schema migrations.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let conn = Connection::open(&path).map_err(|e| StoreError::Open {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        migrations::run_migrations(&conn)?;
        Ok(Self { path })
    }

    /// Path of the underlying database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Opens a fresh connection for one unit of work.
    pub(crate) fn connect(&self) -> Result<Connection, StoreError> {
        Connection::open(&self.path).map_err(|e| StoreError::Open {
            path: self.path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Executes a parameterized query and returns all rows as ordered
    /// column-name-to-value mappings.
    ///
    /// The connection lives only for the duration of this call. Faults are
    /// logged here, at the point of execution, and propagated — never
    /// converted into a silently-empty result set.
    pub fn query(
        &self,
        sql: &str,
        params: &[&dyn rusqlite::types::ToSql],
    ) -> Result<Vec<Row>, StoreError> {
        let conn = self.connect()?;
        self.run_query(&conn, sql, params).map_err(|e| {
            error!(error = %e, "query failed");
            StoreError::Query {
                message: e.to_string(),
            }
        })
    }

    fn run_query(
        &self,
        conn: &Connection,
        sql: &str,
        params: &[&dyn rusqlite::types::ToSql],
    ) -> Result<Vec<Row>, rusqlite::Error> {
        let mut stmt = conn.prepare(sql)?;
        let column_names: Vec<String> =
            stmt.column_names().iter().map(|c| c.to_string()).collect();
        let mut rows = stmt.query(params)?;
        let mut out = Vec::new();
        while let Some(row) = rows.next()? {
            let mut mapped = Row::new();
            for (idx, name) in column_names.iter().enumerate() {
                mapped.insert(name.clone(), column_to_json(row.get_ref(idx)?));
            }
            out.push(mapped);
        }
        Ok(out)
    }
}
