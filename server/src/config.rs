//! Server configuration parsed from environment variables.

use shopwise_client::config::ClientConfig;

pub const DEFAULT_PORT: u16 = 3000;

/// Primary env var naming the assistant backend base URL.
pub const BACKEND_URL_VAR: &str = "SHOPWISE_BACKEND_URL";
/// Fallback env var for the backend base URL.
pub const BACKEND_URL_FALLBACK_VAR: &str = "BACKEND_URL";

/// Errors produced while reading configuration.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `PORT` is set but is not a valid port number.
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    /// Raw backend URL; blank or missing means the client default.
    pub backend_url: Option<String>,
}

impl ServerConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `SHOPWISE_BACKEND_URL`, falling back to `BACKEND_URL`
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but not a valid `u16`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is present but not a valid `u16`.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_port(lookup("PORT").as_deref())?;
        let backend_url = lookup(BACKEND_URL_VAR)
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup(BACKEND_URL_FALLBACK_VAR));
        Ok(Self { port, backend_url })
    }

    /// Config handed to the rendered app.
    #[must_use]
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(self.backend_url.as_deref())
    }
}

fn parse_port(raw: Option<&str>) -> Result<u16, ConfigError> {
    match raw.map(str::trim) {
        None | Some("") => Ok(DEFAULT_PORT),
        Some(value) => value.parse::<u16>().map_err(|_| ConfigError::InvalidPort(value.to_owned())),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
