//! # wicket-config
//!
//! Layered configuration: defaults, optional TOML file, `WICKET_` env.

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{DatabaseConfig, LoggingConfig, WicketConfig};
