//! Database schema migrations for the match store.

use rusqlite::Connection;

use crate::store::StoreError;

/// Current schema version.
const SCHEMA_VERSION: u32 = 1;

/// Runs all pending migrations on the database.
pub fn run_migrations(conn: &Connection) -> Result<(), StoreError> {
    let current = get_schema_version(conn)?;

    if current < 1 {
        migrate_v1(conn)?;
    }

    set_schema_version(conn, SCHEMA_VERSION)?;
    Ok(())
}

/// Creates the initial schema (v1): match records, ball-by-ball
/// deliveries, and the lookup tables derived at ingest time.
fn migrate_v1(conn: &Connection) -> Result<(), StoreError> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS matches (
            id            TEXT PRIMARY KEY NOT NULL,
            date          TEXT NOT NULL DEFAULT '',
            season        INTEGER,
            city          TEXT NOT NULL DEFAULT '',
            venue         TEXT NOT NULL DEFAULT '',
            team1         TEXT NOT NULL DEFAULT '',
            team2         TEXT NOT NULL DEFAULT '',
            toss_winner   TEXT NOT NULL DEFAULT '',
            toss_decision TEXT NOT NULL DEFAULT '',
            winner        TEXT NOT NULL DEFAULT '',
            result        TEXT NOT NULL DEFAULT 'normal',
            margin        TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS deliveries (
            id               INTEGER PRIMARY KEY AUTOINCREMENT,
            match_id         TEXT NOT NULL,
            innings          INTEGER NOT NULL,
            batting_team     TEXT NOT NULL DEFAULT '',
            bowling_team     TEXT NOT NULL DEFAULT '',
            over             INTEGER NOT NULL,
            ball             INTEGER NOT NULL,
            batter           TEXT NOT NULL DEFAULT '',
            non_striker      TEXT NOT NULL DEFAULT '',
            bowler           TEXT NOT NULL DEFAULT '',
            runs_batter      INTEGER NOT NULL DEFAULT 0,
            runs_extras      INTEGER NOT NULL DEFAULT 0,
            runs_total       INTEGER NOT NULL DEFAULT 0,
            wicket_type      TEXT NOT NULL DEFAULT '',
            player_dismissed TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS teams (
            id         INTEGER PRIMARY KEY AUTOINCREMENT,
            name       TEXT NOT NULL UNIQUE,
            short_name TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS players (
            id   INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL UNIQUE,
            team TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS innings (
            id             INTEGER PRIMARY KEY AUTOINCREMENT,
            match_id       TEXT NOT NULL,
            innings_number INTEGER NOT NULL,
            batting_team   TEXT NOT NULL DEFAULT '',
            total_runs     INTEGER NOT NULL DEFAULT 0,
            total_wickets  INTEGER NOT NULL DEFAULT 0,
            total_overs    TEXT NOT NULL DEFAULT ''
        );

        CREATE TABLE IF NOT EXISTS officials (
            id       INTEGER PRIMARY KEY AUTOINCREMENT,
            match_id TEXT NOT NULL,
            name     TEXT NOT NULL,
            role     TEXT NOT NULL
        );

        CREATE INDEX IF NOT EXISTS idx_deliveries_match ON deliveries(match_id);
        CREATE INDEX IF NOT EXISTS idx_deliveries_batter ON deliveries(batter);
        CREATE INDEX IF NOT EXISTS idx_deliveries_bowler ON deliveries(bowler);
        CREATE INDEX IF NOT EXISTS idx_innings_match ON innings(match_id);
        CREATE INDEX IF NOT EXISTS idx_officials_match ON officials(match_id);",
    )
    .map_err(|e| StoreError::Migration {
        message: format!("migration v1 failed: {e}"),
    })
}

/// Reads the current schema version from PRAGMA user_version.
fn get_schema_version(conn: &Connection) -> Result<u32, StoreError> {
    conn.query_row("PRAGMA user_version", [], |row| row.get(0))
        .map_err(|e| StoreError::Migration {
            message: format!("failed to read schema version: {e}"),
        })
}

/// Sets the schema version via PRAGMA user_version.
fn set_schema_version(conn: &Connection, version: u32) -> Result<(), StoreError> {
    conn.pragma_update(None, "user_version", version)
        .map_err(|e| StoreError::Migration {
            message: format!("failed to set schema version: {e}"),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn migrations_run_on_fresh_db() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        run_migrations(&conn).expect("migrations should succeed");

        let version = get_schema_version(&conn).expect("version");
        assert_eq!(version, SCHEMA_VERSION);
    }

    #[test]
    fn migrations_are_idempotent() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        run_migrations(&conn).expect("first run");
        run_migrations(&conn).expect("second run should also succeed");
    }

    #[test]
    fn all_tables_created() {
        let conn = Connection::open_in_memory().expect("in-memory db");
        run_migrations(&conn).expect("migrations");
        let count: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE type='table' \
                 AND name IN ('matches','deliveries','teams','players','innings','officials')",
                [],
                |row| row.get(0),
            )
            .expect("count");
        assert_eq!(count, 6);
    }
}
