//! Configuration loader (file + env merge).

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use thiserror::Error;

use crate::schema::WicketConfig;

/// Errors from configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Failed to load or merge configuration.
    #[error("configuration error: {0}")]
    Load(String),
}

/// Loads configuration by merging layers:
/// 1. Default values
/// 2. Config file (if given)
/// 3. Environment variables (`WICKET_` prefix)
pub fn load_config(config_path: Option<&str>) -> Result<WicketConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(WicketConfig::default()));

    if let Some(path) = config_path {
        figment = figment.merge(Toml::file(path));
    }

    figment = figment.merge(Env::prefixed("WICKET_").split("_"));

    figment
        .extract()
        .map_err(|e| ConfigError::Load(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_without_file_or_env() {
        figment::Jail::expect_with(|_jail| {
            let config = load_config(None).expect("load");
            assert_eq!(config.database.path, "cricket.db");
            assert_eq!(config.logging.level, "info");
            Ok(())
        });
    }

    #[test]
    fn file_overrides_defaults() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "wicket.toml",
                r#"
                [database]
                path = "/srv/wicket/ipl.db"
                "#,
            )?;
            let config = load_config(Some("wicket.toml")).expect("load");
            assert_eq!(config.database.path, "/srv/wicket/ipl.db");
            assert_eq!(config.logging.level, "info");
            Ok(())
        });
    }

    #[test]
    fn env_overrides_file() {
        figment::Jail::expect_with(|jail| {
            jail.create_file(
                "wicket.toml",
                r#"
                [logging]
                level = "debug"
                "#,
            )?;
            jail.set_env("WICKET_LOGGING_LEVEL", "trace");
            let config = load_config(Some("wicket.toml")).expect("load");
            assert_eq!(config.logging.level, "trace");
            Ok(())
        });
    }

    #[test]
    fn missing_file_is_not_an_error() {
        figment::Jail::expect_with(|_jail| {
            let config = load_config(Some("does-not-exist.toml")).expect("load");
            assert_eq!(config.database.path, "cricket.db");
            Ok(())
        });
    }
}
