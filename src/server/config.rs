//! Environment based configuration.

use std::net::SocketAddr;

use crate::server::error::config::ConfigError;

static DEFAULT_DATABASE_URL: &str = "sqlite://aquadex.db?mode=rwc";
static DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:5000";

/// Runtime configuration read from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection URL of the SQLite database file
    pub database_url: String,
    /// Address the HTTP server listens on
    pub bind_address: SocketAddr,
    /// Whether the sample species are inserted on startup
    pub seed_sample_data: bool,
}

impl Config {
    /// Reads configuration from environment variables, falling back to defaults for any
    /// variable that is unset.
    ///
    /// # Returns
    /// - `Ok(Config)` - All variables present or defaulted and valid
    /// - `Err(ConfigError::InvalidEnvValue)` - A variable is set but cannot be parsed
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    pub(crate) fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let bind_address = lookup("BIND_ADDRESS")
            .unwrap_or_else(|| DEFAULT_BIND_ADDRESS.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvValue {
                var: "BIND_ADDRESS".to_string(),
                reason: e.to_string(),
            })?;

        let seed_sample_data = match lookup("SEED_SAMPLE_DATA") {
            None => true,
            Some(value) => value
                .trim()
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidEnvValue {
                    var: "SEED_SAMPLE_DATA".to_string(),
                    reason: format!("expected `true` or `false`, got `{}`", value),
                })?,
        };

        Ok(Self {
            database_url,
            bind_address,
            seed_sample_data,
        })
    }
}
