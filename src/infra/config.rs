//! Centralized configuration (environment variables + defaults).

use sqlx::postgres::{PgConnectOptions, PgSslMode};
use thiserror::Error;

/// Fixed listen address of the API server.
pub const LISTEN_ADDR: &str = "0.0.0.0:8010";

pub const DEFAULT_DB_HOST: &str = "localhost";
pub const DEFAULT_DB_PORT: u16 = 5432;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("APP_DB_PORT must be a valid port number, got '{value}'")]
    InvalidPort {
        value: String,
        #[source]
        source: std::num::ParseIntError,
    },
}

/// Loads a local `.env` file into the process environment, if one exists.
///
/// Returns `true` when a file was found.
pub fn load_dotenv() -> bool {
    dotenv::dotenv().is_ok()
}

/// Same as [`load_dotenv`] for an explicit file path.
pub fn load_dotenv_from(path: &std::path::Path) -> bool {
    dotenv::from_path(path).is_ok()
}

/// Database connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DbConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub database: String,
}

impl DbConfig {
    /// Reads `APP_DB_*` from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from an arbitrary key lookup. Empty values count as unset
    /// for host and port; credentials and database name default to empty strings.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let host = non_empty("APP_DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string());
        let port = match non_empty("APP_DB_PORT") {
            Some(raw) => raw
                .trim()
                .parse::<u16>()
                .map_err(|source| ConfigError::InvalidPort { value: raw.clone(), source })?,
            None => DEFAULT_DB_PORT,
        };

        Ok(Self {
            host,
            port,
            username: lookup("APP_DB_USERNAME").unwrap_or_default(),
            password: lookup("APP_DB_PASSWORD").unwrap_or_default(),
            database: lookup("APP_DB_NAME").unwrap_or_default(),
        })
    }

    pub fn connect_options(&self) -> PgConnectOptions {
        let mut opts = PgConnectOptions::new()
            .host(&self.host)
            .port(self.port)
            .ssl_mode(PgSslMode::Disable);
        if !self.username.is_empty() {
            opts = opts.username(&self.username);
        }
        if !self.password.is_empty() {
            opts = opts.password(&self.password);
        }
        if !self.database.is_empty() {
            opts = opts.database(&self.database);
        }
        opts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_apply_when_unset() {
        let cfg = DbConfig::from_lookup(lookup_from(&[])).unwrap();
        assert_eq!(cfg.host, "localhost");
        assert_eq!(cfg.port, 5432);
        assert!(cfg.username.is_empty());
        assert!(cfg.database.is_empty());
    }

    #[test]
    fn reads_all_values() {
        let cfg = DbConfig::from_lookup(lookup_from(&[
            ("APP_DB_HOST", "db.internal"),
            ("APP_DB_PORT", "6543"),
            ("APP_DB_USERNAME", "postgres"),
            ("APP_DB_PASSWORD", "p@ss:word/"),
            ("APP_DB_NAME", "catalog"),
        ]))
        .unwrap();
        assert_eq!(
            cfg,
            DbConfig {
                host: "db.internal".into(),
                port: 6543,
                username: "postgres".into(),
                password: "p@ss:word/".into(),
                database: "catalog".into(),
            }
        );
    }

    #[test]
    fn empty_host_falls_back_to_default() {
        let cfg = DbConfig::from_lookup(lookup_from(&[("APP_DB_HOST", ""), ("APP_DB_PORT", " ")]))
            .unwrap();
        assert_eq!(cfg.host, DEFAULT_DB_HOST);
        assert_eq!(cfg.port, DEFAULT_DB_PORT);
    }

    #[test]
    fn rejects_bad_port() {
        let err = DbConfig::from_lookup(lookup_from(&[("APP_DB_PORT", "postgres")])).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidPort { ref value, .. } if value == "postgres"));
    }
}
