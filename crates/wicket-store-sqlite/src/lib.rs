//! # wicket-store-sqlite
//!
//! SQLite adapter for the wicket match store.
//!
//! Owns the relational schema (matches, deliveries, teams, players,
//! innings, officials), parameterized query execution with ordered JSON
//! rows, the conjunctive filter builder used by every query tool, and
//! ingestion of cricsheet ball-by-ball match files.

pub mod cricsheet;
pub mod filter;
pub mod ingest;
pub mod migrations;
pub mod store;
mod value;

pub use filter::FilterSet;
pub use ingest::{ingest_dir, ingest_file, IngestError, IngestReport};
pub use store::{MatchStore, Row, StoreError};
