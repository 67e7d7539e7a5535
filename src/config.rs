//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. A `.env` file is honoured when present (loaded by the binaries
//! via `dotenvy`).
//!
//! ```bash
//! export DATABASE_URL="sqlite://links.db"
//! export LISTEN="0.0.0.0:3000"
//! ```
//!
//! ## Optional Variables
//!
//! - `DATABASE_URL` - SQLite connection string (default: `sqlite://links.db`)
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Seconds to wait for a pooled connection (default: 30)
//! - `DB_IDLE_TIMEOUT` - Idle connection lifetime in seconds (default: 600)
//! - `DB_MAX_LIFETIME` - Maximum connection lifetime in seconds (default: 1800)

use anyhow::Result;
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::infrastructure::persistence::PoolSettings;

const DEFAULT_DATABASE_URL: &str = "sqlite://links.db";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── Pool settings ───────────────────────────────────────────────────────
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
    /// Idle connection lifetime in seconds before it is closed
    /// (`DB_IDLE_TIMEOUT`, default: 600).
    pub db_idle_timeout: u64,
    /// Maximum connection lifetime in seconds (`DB_MAX_LIFETIME`, default: 1800).
    pub db_max_lifetime: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// Every variable has a default; unparsable numbers fall back to it.
    pub fn from_env() -> Self {
        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| DEFAULT_DATABASE_URL.to_string());
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Self {
            database_url,
            listen_addr,
            log_level,
            log_format,
            db_max_connections: env_or("DB_MAX_CONNECTIONS", 5),
            db_connect_timeout: env_or("DB_CONNECT_TIMEOUT", 30),
            db_idle_timeout: env_or("DB_IDLE_TIMEOUT", 600),
            db_max_lifetime: env_or("DB_MAX_LIFETIME", 1800),
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not `host:port`
    /// - `database_url` is not a SQLite URL
    /// - a pool setting is zero where a positive value is required
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Pool settings derived from the `DB_*` variables.
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            connect_timeout: Duration::from_secs(self.db_connect_timeout),
            idle_timeout: Duration::from_secs(self.db_idle_timeout),
            max_lifetime: Duration::from_secs(self.db_max_lifetime),
        }
    }

    /// Logs a configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!("  Pool size: {}", self.db_max_connections);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite://links.db".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            db_max_connections: 5,
            db_connect_timeout: 30,
            db_idle_timeout: 600,
            db_max_lifetime: 1800,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());

        config.db_max_connections = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_pool_settings() {
        let settings = valid_config().pool_settings();

        assert_eq!(settings.max_connections, 5);
        assert_eq!(settings.connect_timeout, Duration::from_secs(30));
        assert_eq!(settings.idle_timeout, Duration::from_secs(600));
        assert_eq!(settings.max_lifetime, Duration::from_secs(1800));
    }

    #[test]
    #[serial]
    fn test_defaults_when_unset() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("LISTEN");
            env::remove_var("LOG_FORMAT");
            env::remove_var("DB_MAX_CONNECTIONS");
        }

        let config = Config::from_env();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.log_format, "text");
        assert_eq!(config.db_max_connections, 5);
    }

    #[test]
    #[serial]
    fn test_values_from_env() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("DATABASE_URL", "sqlite:///var/lib/links.db");
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("DB_MAX_CONNECTIONS", "12");
            env::set_var("DB_CONNECT_TIMEOUT", "not-a-number");
        }

        let config = Config::from_env();

        assert_eq!(config.database_url, "sqlite:///var/lib/links.db");
        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.db_max_connections, 12);
        assert_eq!(config.db_connect_timeout, 30);

        // Cleanup
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("LISTEN");
            env::remove_var("DB_MAX_CONNECTIONS");
            env::remove_var("DB_CONNECT_TIMEOUT");
        }
    }

    #[test]
    #[serial]
    fn test_load_from_env_rejects_bad_log_format() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LOG_FORMAT", "xml");
        }

        assert!(load_from_env().is_err());

        unsafe {
            env::remove_var("LOG_FORMAT");
        }
    }
}
